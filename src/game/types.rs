// Shared enums and small structs used by the game state machine

use crate::collision::Crash;
use crate::config::GameConfig;
use crate::food::FoodPlacement;

/// Which screen is active. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    MainMenu,
    Gameplay,
    GameOver,
    Instructions,
}

/// Outcome of one gameplay tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub ate_food: bool,
    pub crash: Option<Crash>,
}

/// Gameplay tuning pulled out of the config once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub initial_length: usize,
    pub points_per_food: u32,
    pub food_placement: FoodPlacement,
}

impl Rules {
    pub fn from_config(config: &GameConfig) -> Self {
        Rules {
            initial_length: config.initial_length,
            points_per_food: config.points_per_food,
            food_placement: config.food_placement,
        }
    }
}
