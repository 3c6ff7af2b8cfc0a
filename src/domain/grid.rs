use std::fmt;

use super::{Cell, CellColor};

/// Grid holds one generated frame of the pattern.
/// Cells are stored row-major; position is the only identity a cell has.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from row-major cells. `cells.len()` must equal `rows * cols`.
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols)
            .then(|| self.cells[row * self.cols + col])
    }

    /// Borrow a single row
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Iterate over rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i / self.cols, i % self.cols, cell))
    }

    /// Count cells of the given color
    pub fn count(&self, color: CellColor) -> usize {
        self.cells.iter().filter(|cell| cell.color() == color).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|cell| cell.color().symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        let cells = (0..6)
            .map(|i| {
                let color = if i % 2 == 0 { CellColor::Red } else { CellColor::Black };
                Cell::new(i + 1, color)
            })
            .collect();
        Grid::from_cells(2, 3, cells)
    }

    #[test]
    fn test_get_bounds() {
        let grid = sample();
        assert_eq!(grid.get(1, 2).map(Cell::number), Some(6));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_rows_are_row_major() {
        let grid = sample();
        let numbers: Vec<Vec<usize>> = grid
            .rows()
            .map(|row| row.iter().map(|c| c.number()).collect())
            .collect();
        assert_eq!(numbers, vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(grid.row(1).map(<[Cell]>::len), Some(3));
        assert!(grid.row(2).is_none());
    }

    #[test]
    fn test_iter_cells_positions() {
        let grid = sample();
        let last = grid.iter_cells().last();
        assert_eq!(last, Some((1, 2, Cell::new(6, CellColor::Black))));
        assert_eq!(grid.iter_cells().count(), 6);
    }

    #[test]
    fn test_count_and_display() {
        let grid = sample();
        assert_eq!(grid.count(CellColor::Red), 3);
        assert_eq!(grid.count(CellColor::Green), 0);
        assert_eq!(grid.to_string(), "R.R\n.R.\n");
    }
}
