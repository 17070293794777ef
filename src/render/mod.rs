//! Text rendering of boards.
//!
//! Rendering is a collaborator, not part of the rules: the engine never
//! prints. Marks map to `.`, `X` and `O` for `0`, `+1` and `-1`, one row
//! per line. Render the `+1` perspective for the conventional view.

use std::fmt;

use crate::core::Board;

/// Render a board as text, one row per line.
///
/// ```
/// use rust_tictactoe::{Action, Player, TicTacToe, to_text};
///
/// let mut game = TicTacToe::default();
/// game.step(Action::new(4)).unwrap();
/// game.step(Action::new(0)).unwrap();
///
/// assert_eq!(to_text(&game.observation(Player::ONE)), "O..\n.X.\n...\n");
/// ```
#[must_use]
pub fn to_text(board: &Board) -> String {
    let mut out = String::with_capacity(board.cell_count() + board.size());
    for row in board.rows() {
        for &cell in row {
            out.push(match cell {
                1 => 'X',
                -1 => 'O',
                _ => '.',
            });
        }
        out.push('\n');
    }
    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_text(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_renders_dots() {
        assert_eq!(to_text(&Board::new(2)), "..\n..\n");
    }

    #[test]
    fn test_marks_render_as_x_and_o() {
        let mut board = Board::new(3);
        board.set(0, 0, 1);
        board.set(1, 1, -1);
        board.set(2, 2, 1);

        assert_eq!(to_text(&board), "X..\n.O.\n..X\n");
    }

    #[test]
    fn test_display_matches_to_text() {
        let mut board = Board::new(2);
        board.set(0, 1, -1);

        assert_eq!(format!("{}", board), to_text(&board));
    }
}
