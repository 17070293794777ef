//! # rust-tictactoe
//!
//! A generalized tic-tac-toe engine (n×n board, n-in-a-row to win) with a
//! turn-based step/reset interface for automated agents and human-driven
//! loops.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: The crate owns the rules - board, turn order,
//!    legality, win/draw detection. Rendering and the interactive prompt
//!    loop are thin collaborators on top of it; there is no opponent
//!    policy inside.
//!
//! 2. **Signed Marks**: Cells hold `{0, +1, -1}`, players are the sign of
//!    their mark. Win detection is integer arithmetic: a line is
//!    monochrome exactly when its sum reaches ±n.
//!
//! 3. **Failures Are Values**: An illegal move returns an error and leaves
//!    the state untouched. The engine never logs or prints.
//!
//! 4. **Cheap Branching**: `Clone` produces a fully independent game, with
//!    a persistent history vector so mid-game copies for lookahead stay
//!    inexpensive.
//!
//! ## Modules
//!
//! - `core`: Players, actions, board, state aggregate, configuration, errors
//! - `rules`: Win and draw evaluation
//! - `engine`: The step/reset state machine
//! - `render`: Text rendering collaborator
//! - `python`: PyO3 bindings (feature = "python")

pub mod core;
pub mod engine;
pub mod render;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionMap, Board, EngineConfig, EngineError, GameInfo, GameState, MoveRecord, Player,
};

pub use crate::engine::{Step, TicTacToe};

pub use crate::render::to_text;

pub use crate::rules::GameResult;
