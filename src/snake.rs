//! Snake Model
//!
//! The snake is an ordered run of grid cells with the head at index 0.
//! Movement pushes a new head one cell along the heading and, unless the
//! snake is growing, drops the tail. Bounds are not checked here; see
//! [`crate::collision`].

use crate::grid::{Cell, Grid};
use std::collections::VecDeque;

/// Direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub fn reverse(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    /// Unit step in cells as `(dx, dy)`; screen y grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }
}

pub struct Snake {
    segments: VecDeque<Cell>,
    heading: Heading,
    cell_size: i32,
}

impl Snake {
    /// Builds a straight snake heading right, head at `head`, body trailing left.
    pub fn new(head: Cell, length: usize, cell_size: i32) -> Self {
        let segments = (0..length as i32)
            .map(|i| head.offset(-i * cell_size, 0))
            .collect();

        Snake {
            segments,
            heading: Heading::Right,
            cell_size,
        }
    }

    /// Fresh snake centered in the viewport.
    pub fn spawn(grid: &Grid, length: usize) -> Self {
        Snake::new(grid.center(), length, grid.cell_size)
    }

    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Segments in order, head first.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.segments.iter()
    }

    /// Everything behind the head.
    pub fn body(&self) -> impl Iterator<Item = &Cell> {
        self.segments.iter().skip(1)
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }

    /// Changes heading unless `requested` would turn the snake back on itself.
    ///
    /// Returns whether the heading was accepted.
    pub fn set_heading(&mut self, requested: Heading) -> bool {
        if requested == self.heading.reverse() {
            return false;
        }
        self.heading = requested;
        true
    }

    /// Moves one cell along the current heading.
    ///
    /// With `grow` set the tail is kept and the snake is one segment longer.
    pub fn advance(&mut self, grow: bool) {
        let (dx, dy) = self.heading.delta();
        let new_head = self.head().offset(dx * self.cell_size, dy * self.cell_size);
        self.segments.push_front(new_head);

        if !grow {
            self.segments.pop_back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_HEADINGS: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    fn centered_snake() -> Snake {
        Snake::spawn(&Grid::new(1080, 520, 20), 3)
    }

    #[test]
    fn test_spawn_layout() {
        let snake = centered_snake();
        let segments: Vec<Cell> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![Cell::new(540, 260), Cell::new(520, 260), Cell::new(500, 260)]
        );
        assert_eq!(snake.heading(), Heading::Right);
    }

    #[test]
    fn test_set_heading_rejects_exact_reverse_only() {
        for current in ALL_HEADINGS {
            for requested in ALL_HEADINGS {
                let mut snake = centered_snake();
                // Put the snake on `current` through a legal turn if needed
                if current == Heading::Left {
                    snake.set_heading(Heading::Up);
                }
                snake.set_heading(current);
                assert_eq!(snake.heading(), current);

                let accepted = snake.set_heading(requested);
                if requested == current.reverse() {
                    assert!(!accepted);
                    assert_eq!(snake.heading(), current);
                } else {
                    assert!(accepted);
                    assert_eq!(snake.heading(), requested);
                }
            }
        }
    }

    #[test]
    fn test_move_up_drops_tail() {
        let mut snake = centered_snake();
        assert!(snake.set_heading(Heading::Up));
        snake.advance(false);

        let segments: Vec<Cell> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![Cell::new(540, 240), Cell::new(540, 260), Cell::new(520, 260)]
        );
        assert!(!snake.occupies(Cell::new(500, 260)));
    }

    #[test]
    fn test_length_invariant_without_growth() {
        let mut snake = centered_snake();
        for _ in 0..5 {
            snake.advance(false);
            assert_eq!(snake.len(), 3);
        }
    }

    #[test]
    fn test_growth_adds_exactly_one() {
        let mut snake = centered_snake();
        snake.advance(true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Cell::new(560, 260));
        snake.advance(false);
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_adjacent_segments_one_cell_apart() {
        let mut snake = centered_snake();
        snake.set_heading(Heading::Down);
        snake.advance(true);
        snake.set_heading(Heading::Left);
        snake.advance(false);

        let segments: Vec<Cell> = snake.segments().copied().collect();
        for pair in segments.windows(2) {
            let distance = (pair[0].x - pair[1].x).abs() + (pair[0].y - pair[1].y).abs();
            assert_eq!(distance, 20);
        }
    }
}
