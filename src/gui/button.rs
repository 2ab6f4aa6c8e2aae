//! Mouse-driven buttons
//!
//! A [`Button`] is a screen rectangle with a label and an action tag. Hover
//! state is recomputed from the cursor every frame; a left click fires the
//! first hovered button of the active [`ButtonPanel`].

use crate::text::{TextStyle, draw_text_centered};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// What a button does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    PlayGame,
    ShowInstructions,
    ReturnToMainMenu,
    PlayAgain,
    Exit,
}

/// Configuration for button appearance
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    pub background_color: Color,
    pub border_color: Color,
    pub label_color: Color,
    pub hover_label_color: Color,
    pub label_scale: u32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        ButtonStyle {
            background_color: Color::RGB(60, 40, 0), // Blackish brown
            border_color: Color::RGB(255, 255, 255),
            label_color: Color::RGB(255, 255, 255),
            hover_label_color: Color::RGB(200, 200, 200),
            label_scale: 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub action: ButtonAction,
    pub hovered: bool,
}

impl Button {
    pub fn new(rect: Rect, label: &str, action: ButtonAction) -> Self {
        Button {
            rect,
            label: label.to_string(),
            action,
            hovered: false,
        }
    }

    /// Strict interior test: points on the rectangle's edge are outside.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let left = self.rect.x();
        let top = self.rect.y();
        let right = left + self.rect.width() as i32;
        let bottom = top + self.rect.height() as i32;

        x > left && x < right && y > top && y < bottom
    }

    pub fn update_hover(&mut self, x: i32, y: i32) {
        self.hovered = self.contains(x, y);
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, style: &ButtonStyle) -> Result<(), String> {
        canvas.set_draw_color(style.background_color);
        canvas.fill_rect(self.rect)?;

        canvas.set_draw_color(style.border_color);
        canvas.draw_rect(self.rect)?;

        let color = if self.hovered {
            style.hover_label_color
        } else {
            style.label_color
        };
        draw_text_centered(canvas, &self.label, self.rect, TextStyle::new(color, style.label_scale))
    }
}

/// An ordered group of buttons shown together on one screen.
#[derive(Debug, Clone)]
pub struct ButtonPanel {
    buttons: Vec<Button>,
    style: ButtonStyle,
}

impl ButtonPanel {
    pub fn new(buttons: Vec<Button>) -> Self {
        ButtonPanel {
            buttons,
            style: ButtonStyle::default(),
        }
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Recomputes hover for every button from the cursor position.
    pub fn update_hover(&mut self, x: i32, y: i32) {
        for button in &mut self.buttons {
            button.update_hover(x, y);
        }
    }

    /// Action of the first hovered button, if any.
    pub fn hovered_action(&self) -> Option<ButtonAction> {
        self.buttons
            .iter()
            .find(|button| button.hovered)
            .map(|button| button.action)
    }

    /// Handles a left click at (`x`, `y`).
    pub fn click(&mut self, x: i32, y: i32) -> Option<ButtonAction> {
        self.update_hover(x, y);
        self.hovered_action()
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        for button in &self.buttons {
            button.render(canvas, &self.style)?;
        }
        Ok(())
    }
}
