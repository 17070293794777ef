//! Win and draw evaluation.
//!
//! Cells hold ±1, so a line of n cells is monochrome exactly when the
//! absolute value of its signed sum is n; the winner is the sign of the
//! sum. Each line check is O(n) and a full evaluation O(n²) - no
//! per-cell equality rescans.
//!
//! [`evaluate`] applies a fixed precedence: rows, columns, main diagonal,
//! anti-diagonal, then move exhaustion. The exhaustion check runs last so
//! a move that completes a line while filling the final cell is a win,
//! never a draw.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player};

/// Outcome of a game, in progress or finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Moves remain and no line is complete.
    InProgress,

    /// A player completed a row, column or diagonal.
    Win(Player),

    /// Every cell is marked and no line is complete.
    Draw,
}

impl GameResult {
    /// Signed winner value: `+1` / `-1` for a win, `0` for draw or
    /// in-progress.
    #[must_use]
    pub fn signed(self) -> i8 {
        match self {
            GameResult::Win(player) => player.sign(),
            GameResult::InProgress | GameResult::Draw => 0,
        }
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self == GameResult::Win(player)
    }
}

/// Winner implied by one line sum, if the line is monochrome.
fn line_winner(sum: i32, size: usize) -> Option<Player> {
    if sum == size as i32 {
        Some(Player::ONE)
    } else if sum == -(size as i32) {
        Some(Player::TWO)
    } else {
        None
    }
}

/// Winner of any row, or `None`.
#[must_use]
pub fn row_winner(board: &Board) -> Option<Player> {
    (0..board.size()).find_map(|row| line_winner(board.row_sum(row), board.size()))
}

/// Winner of any column, or `None`. The transpose of the row check.
#[must_use]
pub fn col_winner(board: &Board) -> Option<Player> {
    (0..board.size()).find_map(|col| line_winner(board.col_sum(col), board.size()))
}

/// Winner of the main diagonal (top-left to bottom-right), or `None`.
#[must_use]
pub fn main_diag_winner(board: &Board) -> Option<Player> {
    line_winner(board.main_diag_sum(), board.size())
}

/// Winner of the anti-diagonal (top-right to bottom-left), or `None`.
#[must_use]
pub fn anti_diag_winner(board: &Board) -> Option<Player> {
    line_winner(board.anti_diag_sum(), board.size())
}

/// Evaluate a board after a move.
///
/// Line checks run strictly before the exhaustion check, in the order
/// rows, columns, main diagonal, anti-diagonal.
#[must_use]
pub fn evaluate(board: &Board, moves_played: usize) -> GameResult {
    let winner = row_winner(board)
        .or_else(|| col_winner(board))
        .or_else(|| main_diag_winner(board))
        .or_else(|| anti_diag_winner(board));

    if let Some(player) = winner {
        return GameResult::Win(player);
    }
    if moves_played == board.cell_count() {
        return GameResult::Draw;
    }
    GameResult::InProgress
}
