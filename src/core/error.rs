//! Engine error taxonomy.
//!
//! Exactly two categories exist. An illegal action is recoverable: the
//! engine state is untouched and the caller may retry immediately. An
//! invalid grid size is fatal at construction time - an engine is never
//! instantiated in an invalid state. Failures are values; the core never
//! logs or prints on its own behalf.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::action::Action;

/// Errors signaled by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineError {
    /// The action is out of range, targets an occupied cell, or the game
    /// is already over. State is left untouched.
    IllegalAction(Action),

    /// Grid size of zero at construction.
    InvalidGridSize(usize),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::IllegalAction(action) => {
                write!(f, "illegal action {}", action.index())
            }
            EngineError::InvalidGridSize(size) => {
                write!(f, "invalid grid size {}: must be at least 1", size)
            }
        }
    }
}

impl Error for EngineError {}
