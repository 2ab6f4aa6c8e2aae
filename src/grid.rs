//! Grid Geometry
//!
//! The play field is a pixel viewport divided into square cells. Every
//! snake segment and every food item sits on a cell origin, so positions are
//! stored in pixels but are always multiples of the cell size.

use sdl2::rect::Rect;

/// A grid-aligned position, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// Returns the cell shifted by `dx`/`dy` pixels.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Cell {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Viewport dimensions plus the cell edge length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl Grid {
    pub fn new(width: u32, height: u32, cell_size: u32) -> Self {
        Grid {
            width: width as i32,
            height: height as i32,
            cell_size: cell_size as i32,
        }
    }

    /// Number of whole cells across the viewport.
    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of whole cells down the viewport.
    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Pixel origin of the cell at column `col`, row `row`.
    pub fn cell_at(&self, col: i32, row: i32) -> Cell {
        Cell::new(col * self.cell_size, row * self.cell_size)
    }

    /// Snaps an arbitrary pixel position down onto the grid.
    pub fn snap(&self, x: i32, y: i32) -> Cell {
        Cell::new(
            x.div_euclid(self.cell_size) * self.cell_size,
            y.div_euclid(self.cell_size) * self.cell_size,
        )
    }

    /// Viewport center, snapped to a cell origin.
    pub fn center(&self) -> Cell {
        self.snap(self.width / 2, self.height / 2)
    }

    /// True when the cell origin lies inside `[0, width) x [0, height)`.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Iterates every cell origin, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.columns()).map(move |col| self.cell_at(col, row)))
    }

    /// Screen rectangle covered by `cell`.
    pub fn cell_rect(&self, cell: Cell) -> Rect {
        Rect::new(cell.x, cell.y, self.cell_size as u32, self.cell_size as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_in_cells() {
        let grid = Grid::new(1080, 680, 20);
        assert_eq!(grid.columns(), 54);
        assert_eq!(grid.rows(), 34);
        assert_eq!(grid.cells().count(), 54 * 34);
    }

    #[test]
    fn test_center_is_grid_aligned() {
        let grid = Grid::new(1080, 520, 20);
        assert_eq!(grid.center(), Cell::new(540, 260));

        // 250 / 20 rounds down to column 6
        let odd = Grid::new(250, 250, 20);
        assert_eq!(odd.center(), Cell::new(120, 120));
    }

    #[test]
    fn test_snap_handles_negative_positions() {
        let grid = Grid::new(100, 100, 20);
        assert_eq!(grid.snap(-1, 39), Cell::new(-20, 20));
    }

    #[test]
    fn test_contains_boundaries() {
        let grid = Grid::new(100, 60, 20);
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(80, 40)));
        assert!(!grid.contains(Cell::new(100, 0)));
        assert!(!grid.contains(Cell::new(0, 60)));
        assert!(!grid.contains(Cell::new(-20, 0)));
    }

    #[test]
    fn test_cells_iterates_whole_grid() {
        let grid = Grid::new(60, 40, 20);
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[5], Cell::new(40, 20));
    }
}
