//! Square grid of cell markers reflecting the shot history.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Marker shown on a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Not shot at yet.
    Empty,
    /// Shot at, nothing there.
    Miss,
    /// Ship hit but still afloat.
    Hit,
    /// Ship destroyed on this cell.
    Destroyed,
}

impl Cell {
    pub fn as_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Miss => 'o',
            Cell::Hit => 'H',
            Cell::Destroyed => 'X',
        }
    }
}

/// `size` x `size` cells stored row-major. The size never changes.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with every cell empty.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// `true` iff 0 <= row < size and 0 <= col < size.
    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        self.index(row, col).is_some()
    }

    /// Marker at (row, col), or `None` outside the board.
    pub fn cell(&self, row: i64, col: i64) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = row * self.size + col;
        self.cells[idx] = cell;
    }

    fn index(&self, row: i64, col: i64) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        if row < self.size && col < self.size {
            Some(row * self.size + col)
        } else {
            None
        }
    }

    /// Flattened view: every cell followed by a single space, row-major,
    /// without row separators. Clients need the board size to split rows.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 2);
        for cell in &self.cells {
            out.push(cell.as_char());
            out.push(' ');
        }
        out
    }

    /// One line per row, cells separated by spaces.
    pub fn rows(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() * 2);
        for row in self.cells.chunks(self.size.max(1)) {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push(cell.as_char());
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{} ", cell.as_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board {{ size: {}, cells: \"{}\" }}", self.size, self.render())
    }
}
