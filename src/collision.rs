/// Collision rules for the snake
///
/// Both checks are pure functions over the snake and the grid. They run once
/// per gameplay tick, after the snake has advanced, and either one ends the
/// round.
///
/// # Rust Learning Notes
///
/// - **Enums for outcomes**: [`Crash`] names *why* a round ended so the game
///   loop can log it without re-running the checks.
/// - **Iterator adaptors**: `any()` short-circuits the O(n) body scan.
use crate::grid::Grid;
use crate::snake::Snake;

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crash {
    /// Head ran into the body.
    SelfCollision,
    /// Head left the viewport.
    Border,
}

/// True iff the head shares a cell with any segment behind it.
pub fn check_self_collision(snake: &Snake) -> bool {
    let head = snake.head();
    snake.body().any(|segment| *segment == head)
}

/// True iff the head is outside `[0, width) x [0, height)`.
pub fn check_border_collision(snake: &Snake, grid: &Grid) -> bool {
    !grid.contains(snake.head())
}

/// Runs both checks, self-collision first.
pub fn detect_crash(snake: &Snake, grid: &Grid) -> Option<Crash> {
    if check_self_collision(snake) {
        Some(Crash::SelfCollision)
    } else if check_border_collision(snake, grid) {
        Some(Crash::Border)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use crate::snake::Heading;

    fn grid() -> Grid {
        Grid::new(200, 100, 20)
    }

    #[test]
    fn test_fresh_snake_has_no_self_collision() {
        let snake = Snake::spawn(&grid(), 3);
        assert!(!check_self_collision(&snake));
        assert_eq!(detect_crash(&snake, &grid()), None);
    }

    #[test]
    fn test_self_collision_after_tight_loop() {
        let mut snake = Snake::new(Cell::new(100, 40), 5, 20);
        snake.set_heading(Heading::Down);
        snake.advance(false);
        snake.set_heading(Heading::Left);
        snake.advance(false);
        snake.set_heading(Heading::Up);
        snake.advance(false);

        assert!(check_self_collision(&snake));
        assert_eq!(detect_crash(&snake, &grid()), Some(Crash::SelfCollision));
    }

    #[test]
    fn test_border_collision_left_edge() {
        let mut snake = Snake::new(Cell::new(0, 40), 1, 20);
        assert!(!check_border_collision(&snake, &grid()));

        // Reverse is rejected, so turn twice to face left
        snake.set_heading(Heading::Up);
        snake.set_heading(Heading::Left);
        snake.advance(false);

        assert_eq!(snake.head(), Cell::new(-20, 40));
        assert!(check_border_collision(&snake, &grid()));
        assert_eq!(detect_crash(&snake, &grid()), Some(Crash::Border));
    }

    #[test]
    fn test_self_collision_wins_when_both_hold() {
        // Body starts off screen at (-20, 40) and (-40, 40)
        let mut snake = Snake::new(Cell::new(0, 40), 3, 20);
        snake.set_heading(Heading::Up);
        snake.set_heading(Heading::Left);
        snake.advance(false);

        assert_eq!(snake.head(), Cell::new(-20, 40));
        assert!(check_border_collision(&snake, &grid()));
        assert!(check_self_collision(&snake));
        assert_eq!(detect_crash(&snake, &grid()), Some(Crash::SelfCollision));
    }

    #[test]
    fn test_border_collision_exclusive_upper_bounds() {
        let grid = grid();

        let inside = Snake::new(Cell::new(180, 80), 1, 20);
        assert!(!check_border_collision(&inside, &grid));

        let right = Snake::new(Cell::new(200, 80), 1, 20);
        assert!(check_border_collision(&right, &grid));

        let bottom = Snake::new(Cell::new(180, 100), 1, 20);
        assert!(check_border_collision(&bottom, &grid));

        let top = Snake::new(Cell::new(0, -20), 1, 20);
        assert!(check_border_collision(&top, &grid));
    }
}
