//! Engine configuration.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Grid configuration, validated at construction.
///
/// The only parameter is the grid size n. The board is always square and
/// the size is immutable once an engine is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    size: usize,
}

impl Default for EngineConfig {
    /// The classic 3×3 game.
    fn default() -> Self {
        Self { size: 3 }
    }
}

impl EngineConfig {
    /// Create a config for an n×n grid.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidGridSize`] when `size` is zero.
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if size == 0 {
            return Err(EngineError::InvalidGridSize(size));
        }
        Ok(Self { size })
    }

    /// Grid size n.
    #[must_use]
    pub const fn size(self) -> usize {
        self.size
    }

    /// Number of cells / distinct actions (n²).
    #[must_use]
    pub const fn action_count(self) -> usize {
        self.size * self.size
    }
}
