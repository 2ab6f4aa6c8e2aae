//! Screen-Space GUI
//!
//! Everything drawn at fixed screen positions outside the play field:
//! the main menu, the instructions page and the game over screen.
//!
//! # Architecture
//!
//! - [`Button`] / [`ButtonPanel`]: hover-tracked buttons tagged with a
//!   [`ButtonAction`] instead of matching on label text
//! - Screens own their panel and know how to draw themselves
//!
//! # Example Usage
//!
//! ```rust
//! use crate::gui::{ButtonAction, MainMenu};
//!
//! let mut menu = MainMenu::new(1080, 680);
//!
//! // Every frame
//! menu.panel_mut().update_hover(mouse_x, mouse_y);
//!
//! // On left click
//! if let Some(ButtonAction::PlayGame) = menu.panel_mut().click(x, y) {
//!     /* start a round */
//! }
//! ```

pub mod button;
pub mod game_over;
pub mod instructions;
pub mod main_menu;

pub use button::{Button, ButtonAction, ButtonPanel};
pub use game_over::GameOverScreen;
pub use instructions::InstructionsScreen;
pub use main_menu::MainMenu;
