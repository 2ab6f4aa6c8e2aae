//! Main Menu Screen
//!
//! Three stacked buttons over the menu background:
//! - Play Game: starts a fresh round
//! - Instructions: shows the controls screen
//! - Exit: quits

use super::{Button, ButtonAction, ButtonPanel};
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

const BUTTON_WIDTH: u32 = 200;
const BUTTON_HEIGHT: u32 = 50;

pub struct MainMenu {
    panel: ButtonPanel,
}

impl MainMenu {
    /// Lays the buttons out around the center of a `screen_width` x `screen_height` viewport.
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        let x = screen_width as i32 / 2 - 100;
        let center_y = screen_height as i32 / 2;

        let buttons = vec![
            Button::new(
                Rect::new(x, center_y - 50, BUTTON_WIDTH, BUTTON_HEIGHT),
                "Play Game",
                ButtonAction::PlayGame,
            ),
            Button::new(
                Rect::new(x, center_y + 10, BUTTON_WIDTH, BUTTON_HEIGHT),
                "Instructions",
                ButtonAction::ShowInstructions,
            ),
            Button::new(
                Rect::new(x, center_y + 70, BUTTON_WIDTH, BUTTON_HEIGHT),
                "Exit",
                ButtonAction::Exit,
            ),
        ];

        MainMenu {
            panel: ButtonPanel::new(buttons),
        }
    }

    pub fn panel(&self) -> &ButtonPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut ButtonPanel {
        &mut self.panel
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, background: &Texture) -> Result<(), String> {
        canvas.clear();
        canvas.copy(background, None, None)?;
        self.panel.render(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_viewport_center() {
        let menu = MainMenu::new(1080, 680);
        let rects: Vec<Rect> = menu.panel().buttons().iter().map(|b| b.rect).collect();

        assert_eq!(rects[0], Rect::new(440, 290, 200, 50));
        assert_eq!(rects[1], Rect::new(440, 350, 200, 50));
        assert_eq!(rects[2], Rect::new(440, 410, 200, 50));
    }

    #[test]
    fn test_actions_in_display_order() {
        let menu = MainMenu::new(1080, 680);
        let actions: Vec<ButtonAction> = menu.panel().buttons().iter().map(|b| b.action).collect();
        assert_eq!(
            actions,
            vec![ButtonAction::PlayGame, ButtonAction::ShowInstructions, ButtonAction::Exit]
        );
    }
}
