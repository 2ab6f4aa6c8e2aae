//! Food Model

use crate::grid::{Cell, Grid};
use crate::snake::Snake;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How a new food cell is chosen after the old one is eaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodPlacement {
    /// Column and row drawn independently; may land on the snake.
    Uniform,
    /// Uniform over cells the snake does not occupy.
    #[default]
    AvoidSnake,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    pub fn new(position: Cell) -> Self {
        Food { position }
    }

    /// Places food somewhere on `grid` following `placement`.
    pub fn spawn<R: Rng>(rng: &mut R, grid: &Grid, snake: &Snake, placement: FoodPlacement) -> Self {
        let mut food = Food::new(Cell::new(0, 0));
        food.reposition(rng, grid, snake, placement);
        food
    }

    /// Moves the food to a freshly drawn cell.
    pub fn reposition<R: Rng>(
        &mut self,
        rng: &mut R,
        grid: &Grid,
        snake: &Snake,
        placement: FoodPlacement,
    ) {
        self.position = match placement {
            FoodPlacement::Uniform => uniform_cell(rng, grid),
            FoodPlacement::AvoidSnake => {
                let free: Vec<Cell> = grid.cells().filter(|cell| !snake.occupies(*cell)).collect();
                if free.is_empty() {
                    // Board is full, nothing left to avoid
                    uniform_cell(rng, grid)
                } else {
                    free[rng.gen_range(0..free.len())]
                }
            }
        };
    }

    /// True when the snake's head sits on the food.
    pub fn is_eaten_by(&self, snake: &Snake) -> bool {
        snake.head() == self.position
    }
}

fn uniform_cell<R: Rng>(rng: &mut R, grid: &Grid) -> Cell {
    let col = rng.gen_range(0..grid.columns());
    let row = rng.gen_range(0..grid.rows());
    grid.cell_at(col, row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_uniform_placement_is_grid_aligned_and_inside() {
        let grid = Grid::new(1080, 680, 20);
        let snake = Snake::spawn(&grid, 3);
        let mut rng = StdRng::seed_from_u64(7);
        let mut food = Food::new(Cell::new(0, 0));

        for _ in 0..500 {
            food.reposition(&mut rng, &grid, &snake, FoodPlacement::Uniform);
            assert!(grid.contains(food.position));
            assert_eq!(food.position.x % 20, 0);
            assert_eq!(food.position.y % 20, 0);
        }
    }

    #[test]
    fn test_avoid_snake_never_overlaps_body() {
        // 3x1 board with a 2-long snake leaves exactly one free cell
        let grid = Grid::new(60, 20, 20);
        let snake = Snake::new(Cell::new(20, 0), 2, 20);
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..50 {
            let food = Food::spawn(&mut rng, &grid, &snake, FoodPlacement::AvoidSnake);
            assert_eq!(food.position, Cell::new(40, 0));
        }
    }

    #[test]
    fn test_avoid_snake_on_full_board_still_places() {
        let grid = Grid::new(40, 20, 20);
        let snake = Snake::new(Cell::new(20, 0), 2, 20);
        let mut rng = StdRng::seed_from_u64(3);

        let food = Food::spawn(&mut rng, &grid, &snake, FoodPlacement::AvoidSnake);
        assert!(grid.contains(food.position));
    }

    #[test]
    fn test_is_eaten_by_compares_head_only() {
        let grid = Grid::new(1080, 520, 20);
        let snake = Snake::spawn(&grid, 3);

        assert!(Food::new(Cell::new(540, 260)).is_eaten_by(&snake));
        assert!(!Food::new(Cell::new(520, 260)).is_eaten_by(&snake));
        assert!(!Food::new(Cell::new(560, 260)).is_eaten_by(&snake));
    }
}
