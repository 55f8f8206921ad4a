//! Rectangular cell arena shared by the grid puzzles.
//!
//! Cells live in one row-major `Vec`; neighbours are looked up by coordinate
//! every time, so a neighbour's value is never a stale copy.

use std::ops::{Index, IndexMut};

use arrayvec::ArrayVec;

use crate::error::{BadLine, PuzzleError, Result};

/// (row, col)
pub type Pos = (usize, usize);

/// Scan order for orthogonal neighbours: up, down, left, right.
pub const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {self.rows}
    pub fn cols(&self) -> usize {self.cols}
    pub fn len(&self) -> usize {self.cells.len()}
    pub fn is_empty(&self) -> bool {self.cells.is_empty()}

    pub fn get(&self, (r, c): Pos) -> Option<&T> {
        (r < self.rows && c < self.cols).then(|| &self.cells[r * self.cols + c])
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let cols = self.cols;
        (0 .. self.rows * cols).map(move |ix| (ix / cols, ix % cols))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, &T)> {
        let cols = self.cols;
        self.cells.iter().enumerate().map(move |(ix, cell)| ((ix / cols, ix % cols), cell))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.cells.iter_mut()
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {rows: self.rows, cols: self.cols, cells: self.cells.iter().map(f).collect()}
    }

    fn step(&self, (r, c): Pos, (dr, dc): (isize, isize)) -> Option<Pos> {
        let r = r.checked_add_signed(dr).filter(|&r| r < self.rows)?;
        let c = c.checked_add_signed(dc).filter(|&c| c < self.cols)?;
        Some((r, c))
    }

    /// In-bounds orthogonal neighbours, in [`ORTHOGONAL`] order.
    pub fn neighbors4(&self, pos: Pos) -> ArrayVec<Pos, 4> {
        ORTHOGONAL.iter().filter_map(|&d| self.step(pos, d)).collect()
    }

    /// In-bounds orthogonal and diagonal neighbours.
    pub fn neighbors8(&self, pos: Pos) -> ArrayVec<Pos, 8> {
        ORTHOGONAL.iter().chain(DIAGONAL.iter()).filter_map(|&d| self.step(pos, d)).collect()
    }
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;
    fn index(&self, (r, c): Pos) -> &T {
        assert!(r < self.rows && c < self.cols, "({}, {}) outside {}x{} grid", r, c, self.rows, self.cols);
        &self.cells[r * self.cols + c]
    }
}

impl<T> IndexMut<Pos> for Grid<T> {
    fn index_mut(&mut self, (r, c): Pos) -> &mut T {
        assert!(r < self.rows && c < self.cols, "({}, {}) outside {}x{} grid", r, c, self.rows, self.cols);
        &mut self.cells[r * self.cols + c]
    }
}

impl Grid<u8> {
    /// Parses rows of single decimal digits. Rows must all have the same length.
    pub fn parse_digits(input: &str) -> Result<Grid<u8>> {
        let mut cols = None;
        let mut rows = 0;
        let mut cells = Vec::with_capacity(input.len());
        for (ix, line) in input.trim().lines().enumerate() {
            let line = line.trim();
            let before = cells.len();
            for b in line.bytes() {
                match b {
                    b'0' ..= b'9' => cells.push(b - b'0'),
                    _ => return Err(PuzzleError::Parse(BadLine::new(ix, line)))
                }
            }
            let found = cells.len() - before;
            match cols {
                None => cols = Some(found),
                Some(expected) if expected != found =>
                    return Err(PuzzleError::RaggedGrid {row: ix + 1, expected, found}),
                _ => ()
            }
            rows += 1;
        }
        match cols {
            Some(cols) if cols > 0 => Ok(Grid {rows, cols, cells}),
            _ => Err(PuzzleError::EmptyInput)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_digits_row_major() {
        let grid = Grid::parse_digits("123\n456\n").unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 3));
        assert_eq!(grid[(1, 0)], 4);
        assert_eq!(grid.get((2, 0)), None);
    }

    #[test]
    fn rejects_ragged_rows() {
        assert_eq!(
            Grid::parse_digits("123\n45\n"),
            Err(PuzzleError::RaggedGrid {row: 2, expected: 3, found: 2})
        );
    }

    #[test]
    fn rejects_non_digits() {
        assert!(matches!(Grid::parse_digits("12\n4x\n"), Err(PuzzleError::Parse(BadLine {line: 2, ..}))));
        assert_eq!(Grid::parse_digits("\n\n"), Err(PuzzleError::EmptyInput));
    }

    #[test]
    fn corner_and_edge_neighbours() {
        let grid = Grid::parse_digits("000\n000\n000").unwrap();
        assert_eq!(grid.neighbors4((0, 0)).as_slice(), &[(1, 0), (0, 1)]);
        assert_eq!(grid.neighbors4((1, 1)).as_slice(), &[(0, 1), (2, 1), (1, 0), (1, 2)]);
        assert_eq!(grid.neighbors8((0, 0)).len(), 3);
        assert_eq!(grid.neighbors8((0, 1)).len(), 5);
        assert_eq!(grid.neighbors8((1, 1)).len(), 8);
    }
}
