// Game module - the per-frame state machine
//
// This module contains:
// - types.rs: GameState, TickReport and Rules
// - world.rs: GameWorld (snake, food, score)
// - ui_manager.rs: the menu, instructions and game over screens
//
// `Game` ties them together: it routes input actions to the active screen,
// advances the world while in Gameplay and performs every state transition.

pub mod types;
pub mod ui_manager;
pub mod world;

pub use types::*;
pub use ui_manager::UIManager;
pub use world::GameWorld;

use crate::config::GameConfig;
use crate::grid::Grid;
use crate::gui::ButtonAction;
use crate::input_system::GameAction;
use log::{debug, info};
use rand::rngs::StdRng;

pub struct Game {
    state: GameState,
    world: GameWorld,
    ui: UIManager,
    running: bool,
}

impl Game {
    pub fn new(config: &GameConfig, rng: StdRng) -> Self {
        let grid = Grid::new(config.screen_width, config.screen_height, config.cell_size);

        Game {
            state: GameState::MainMenu,
            world: GameWorld::new(grid, Rules::from_config(config), rng),
            ui: UIManager::new(config.screen_width, config.screen_height),
            running: true,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    pub fn ui(&self) -> &UIManager {
        &self.ui
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Cursor sample for this frame.
    pub fn update_hover(&mut self, mouse_x: i32, mouse_y: i32) {
        self.ui.update_hover(mouse_x, mouse_y);
    }

    pub fn handle_action(&mut self, action: &GameAction) {
        match *action {
            GameAction::Quit => self.quit(),
            GameAction::Steer(heading) if self.state == GameState::Gameplay => {
                if !self.world.steer(heading) {
                    debug!("Ignored reversing turn to {:?}", heading);
                }
            }
            GameAction::LeftClick(x, y) => {
                let clicked = match self.state {
                    GameState::MainMenu => self.ui.main_menu.panel_mut().click(x, y),
                    GameState::GameOver => self.ui.game_over.panel_mut().click(x, y),
                    GameState::Gameplay | GameState::Instructions => None,
                };
                if let Some(button) = clicked {
                    self.press(button);
                }
            }
            GameAction::StartGame if self.state == GameState::MainMenu => self.start_round(),
            GameAction::Back if self.state == GameState::Instructions => {
                self.transition(GameState::MainMenu)
            }
            _ => {
                // Not meaningful in the current state
            }
        }
    }

    /// Runs one gameplay tick. Does nothing outside Gameplay.
    pub fn update(&mut self) -> Option<TickReport> {
        if self.state != GameState::Gameplay {
            return None;
        }

        let report = self.world.tick();

        if report.ate_food {
            debug!("Food eaten, score {}", self.world.score());
        }
        if let Some(crash) = report.crash {
            info!(
                "Round over ({:?}) with score {} and length {}",
                crash,
                self.world.score(),
                self.world.snake().len()
            );
            self.transition(GameState::GameOver);
        }

        Some(report)
    }

    fn press(&mut self, button: ButtonAction) {
        match button {
            ButtonAction::PlayGame | ButtonAction::PlayAgain => self.start_round(),
            ButtonAction::ShowInstructions => self.transition(GameState::Instructions),
            ButtonAction::ReturnToMainMenu => self.transition(GameState::MainMenu),
            ButtonAction::Exit => self.quit(),
        }
    }

    fn start_round(&mut self) {
        self.world.reset();
        self.transition(GameState::Gameplay);
    }

    fn quit(&mut self) {
        info!("Exit requested from {:?}", self.state);
        self.running = false;
    }

    fn transition(&mut self, next: GameState) {
        debug!("{:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
