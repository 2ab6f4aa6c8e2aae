// UIManager struct
//
// Holds the three non-gameplay screens and keeps their hover state in sync
// with the cursor.

use crate::gui::{GameOverScreen, InstructionsScreen, MainMenu};

pub struct UIManager {
    pub main_menu: MainMenu,
    pub game_over: GameOverScreen,
    pub instructions: InstructionsScreen,
}

impl UIManager {
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        UIManager {
            main_menu: MainMenu::new(screen_width, screen_height),
            game_over: GameOverScreen::new(screen_width, screen_height),
            instructions: InstructionsScreen::new(screen_width),
        }
    }

    /// Recomputes hover for every button on every screen.
    pub fn update_hover(&mut self, mouse_x: i32, mouse_y: i32) {
        self.main_menu.panel_mut().update_hover(mouse_x, mouse_y);
        self.game_over.panel_mut().update_hover(mouse_x, mouse_y);
    }
}
