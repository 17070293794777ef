//! Game state aggregate and caller-facing snapshots.
//!
//! ## GameState
//!
//! The single mutable aggregate of a game: board, turn pointer, move
//! history, terminal flag and result. It is mutated only through
//! [`crate::engine::TicTacToe::step`] and replaced wholesale on reset.
//!
//! ## GameInfo
//!
//! A snapshot handed back alongside observations. Always freshly built
//! with an owned history copy, so callers can never mutate live state
//! through it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::Action;
use super::board::Board;
use super::player::Player;
use crate::rules::GameResult;

/// A single applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,

    /// The cell they marked.
    pub action: Action,
}

/// The complete state of one game.
///
/// `Clone` yields a fully independent copy: the board is copied by value
/// and the history is a persistent vector, so no mutation of one copy is
/// ever visible through the other.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current board.
    pub board: Board,

    /// Player to move next, or the last mover once terminal.
    pub current_player: Player,

    /// Applied moves in order. Introspection only - the rules never read it
    /// beyond its length.
    pub history: Vector<MoveRecord>,

    /// Whether the game has ended.
    pub terminal: bool,

    /// Result so far.
    pub result: GameResult,
}

impl GameState {
    /// Fresh state: empty board, player one to move.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            current_player: Player::ONE,
            history: Vector::new(),
            terminal: false,
            result: GameResult::InProgress,
        }
    }

    /// Number of moves applied so far.
    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.history.len()
    }
}

/// Snapshot of game information returned alongside observations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    /// Actions applied so far, in order.
    pub history: Vec<Action>,

    /// Player to move, or the last mover once terminal.
    pub player: Player,

    /// Result at snapshot time.
    pub result: GameResult,
}
