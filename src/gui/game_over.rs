//! Game Over Screen
//!
//! Shows the final score and offers to go back to the menu, play again, or quit.

use super::{Button, ButtonAction, ButtonPanel};
use crate::text::{TextStyle, draw_text};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for game over screen appearance
#[derive(Debug, Clone)]
pub struct GameOverStyle {
    pub background_color: Color,
    pub title: TextStyle,
    pub score: TextStyle,
}

impl Default for GameOverStyle {
    fn default() -> Self {
        GameOverStyle {
            background_color: Color::RGB(0, 0, 0),
            title: TextStyle::new(Color::RGB(255, 255, 255), 5),
            score: TextStyle::new(Color::RGB(255, 255, 255), 3),
        }
    }
}

pub struct GameOverScreen {
    panel: ButtonPanel,
    style: GameOverStyle,
    center_x: i32,
    center_y: i32,
}

impl GameOverScreen {
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        let center_x = screen_width as i32 / 2;
        let center_y = screen_height as i32 / 2;
        let x = center_x - 100;

        let buttons = vec![
            Button::new(
                Rect::new(x, center_y, 350, 50),
                "Return to Main Menu",
                ButtonAction::ReturnToMainMenu,
            ),
            Button::new(
                Rect::new(x, center_y + 60, 200, 50),
                "Play Again",
                ButtonAction::PlayAgain,
            ),
            Button::new(Rect::new(x, center_y + 120, 200, 50), "Exit", ButtonAction::Exit),
        ];

        GameOverScreen {
            panel: ButtonPanel::new(buttons),
            style: GameOverStyle::default(),
            center_x,
            center_y,
        }
    }

    pub fn panel(&self) -> &ButtonPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut ButtonPanel {
        &mut self.panel
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, score: u32) -> Result<(), String> {
        canvas.set_draw_color(self.style.background_color);
        canvas.clear();

        draw_text(
            canvas,
            "Game Over",
            self.center_x - 100,
            self.center_y - 100,
            self.style.title,
        )?;
        draw_text(
            canvas,
            &format!("Score: {}", score),
            self.center_x - 100,
            self.center_y - 50,
            self.style.score,
        )?;

        self.panel.render(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_do_not_overlap() {
        let screen = GameOverScreen::new(1080, 680);
        let buttons = screen.panel().buttons();
        assert_eq!(buttons.len(), 3);

        for (i, a) in buttons.iter().enumerate() {
            for b in buttons.iter().skip(i + 1) {
                assert!(!a.rect.has_intersection(b.rect), "{} overlaps {}", a.label, b.label);
            }
        }
    }

    #[test]
    fn test_labels_fit_inside_buttons() {
        let screen = GameOverScreen::new(1080, 680);
        for button in screen.panel().buttons() {
            assert!(crate::text::text_width(&button.label, 2) < button.rect.width());
        }
    }
}
