//! Board storage and line sums.
//!
//! Cells hold signed marks: `0` empty, `+1` player one, `-1` player two.
//! The encoding keeps win detection arithmetic: a row, column or diagonal
//! of n cells is monochrome exactly when its signed sum reaches ±n, which
//! a mixed line can never produce.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// An n×n grid of signed cell marks, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<i8>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Grid size n.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (n²).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Get the mark at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> i8 {
        self.cells[row * self.size + col]
    }

    /// Place a mark at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, mark: i8) {
        debug_assert!(matches!(mark, -1 | 0 | 1), "marks are signs");
        self.cells[row * self.size + col] = mark;
    }

    /// Whether `(row, col)` is unmarked.
    #[must_use]
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == 0
    }

    /// Count of marked cells.
    #[must_use]
    pub fn marks(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != 0).count()
    }

    /// Raw cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[i8] {
        &self.cells
    }

    /// Rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[i8]> {
        self.cells.chunks(self.size)
    }

    /// The board as seen by `player`.
    ///
    /// Player one sees the raw grid; player two sees the elementwise
    /// negation, so `+1` always means "my mark" for the viewer. Always an
    /// owned copy - callers never alias the live board.
    #[must_use]
    pub fn perspective(&self, player: Player) -> Board {
        if player == Player::ONE {
            self.clone()
        } else {
            Board {
                size: self.size,
                cells: self.cells.iter().map(|&cell| -cell).collect(),
            }
        }
    }

    // === Line Sums ===

    /// Signed sum of a row.
    #[must_use]
    pub fn row_sum(&self, row: usize) -> i32 {
        self.cells[row * self.size..(row + 1) * self.size]
            .iter()
            .map(|&cell| i32::from(cell))
            .sum()
    }

    /// Signed sum of a column.
    #[must_use]
    pub fn col_sum(&self, col: usize) -> i32 {
        (0..self.size).map(|row| i32::from(self.get(row, col))).sum()
    }

    /// Signed sum of the main diagonal (top-left to bottom-right).
    #[must_use]
    pub fn main_diag_sum(&self) -> i32 {
        (0..self.size).map(|i| i32::from(self.get(i, i))).sum()
    }

    /// Signed sum of the anti-diagonal (top-right to bottom-left).
    #[must_use]
    pub fn anti_diag_sum(&self) -> i32 {
        (0..self.size)
            .map(|i| i32::from(self.get(i, self.size - 1 - i)))
            .sum()
    }
}
