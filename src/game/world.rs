// GameWorld: the play field model
//
// Owns the snake, the food, the score and the random source, and advances
// them one tick at a time. Knows nothing about screens or input devices.

use crate::collision::detect_crash;
use crate::food::Food;
use crate::grid::Grid;
use crate::snake::{Heading, Snake};
use rand::rngs::StdRng;

use super::{Rules, TickReport};

pub struct GameWorld {
    pub(super) grid: Grid,
    pub(super) rules: Rules,
    pub(super) snake: Snake,
    pub(super) food: Food,
    pub(super) score: u32,
    /// Set by eating; the next advance keeps its tail.
    pub(super) grow: bool,
    rng: StdRng,
}

impl GameWorld {
    pub fn new(grid: Grid, rules: Rules, mut rng: StdRng) -> Self {
        let snake = Snake::spawn(&grid, rules.initial_length);
        let food = Food::spawn(&mut rng, &grid, &snake, rules.food_placement);

        GameWorld {
            grid,
            rules,
            snake,
            food,
            score: 0,
            grow: false,
            rng,
        }
    }

    /// Fresh centered snake heading right, new food, zero score.
    pub fn reset(&mut self) {
        self.snake = Snake::spawn(&self.grid, self.rules.initial_length);
        self.food
            .reposition(&mut self.rng, &self.grid, &self.snake, self.rules.food_placement);
        self.score = 0;
        self.grow = false;
    }

    pub fn steer(&mut self, heading: Heading) -> bool {
        self.snake.set_heading(heading)
    }

    /// Advance, eat, then check for crashes, in that order.
    pub fn tick(&mut self) -> TickReport {
        self.snake.advance(self.grow);
        self.grow = false;

        let mut report = TickReport::default();

        if self.food.is_eaten_by(&self.snake) {
            self.food
                .reposition(&mut self.rng, &self.grid, &self.snake, self.rules.food_placement);
            self.grow = true;
            self.score = self.score.saturating_add(self.rules.points_per_food);
            report.ate_food = true;
        }

        report.crash = detect_crash(&self.snake, &self.grid);
        report
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}
