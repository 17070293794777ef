//! Action representation and the action -> coordinate lookup table.
//!
//! An action is a cell index in `[0, n²)`, row-major: action 0 is the
//! top-left corner, action `n² - 1` the bottom-right. The coordinate of an
//! action is a pure function of the grid size; [`ActionMap`] caches the
//! full table eagerly since every legality check and step goes through it.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A cell index in row-major order.
///
/// ```
/// use rust_tictactoe::Action;
///
/// // On a 3x3 grid, action 5 is row 1, column 2.
/// assert_eq!(Action::new(5).coords(3), (1, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action(pub u32);

impl Action {
    /// Create a new action.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw cell index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Compute the `(row, col)` coordinate for a grid of the given size.
    #[must_use]
    pub const fn coords(self, size: usize) -> (usize, usize) {
        (self.0 as usize / size, self.0 as usize % size)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Eagerly-built action -> `(row, col)` table for a fixed grid size.
///
/// The mapping is cheap to recompute, but it sits on the hot path of every
/// step, so it is built once at engine construction. Lookups double as the
/// bounds check: an out-of-range action simply has no entry.
#[derive(Clone, Debug)]
pub struct ActionMap {
    size: usize,
    coords: FxHashMap<Action, (usize, usize)>,
}

impl ActionMap {
    /// Build the table for an n×n grid.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let mut coords = FxHashMap::default();
        for index in 0..(size * size) as u32 {
            let action = Action::new(index);
            coords.insert(action, action.coords(size));
        }
        Self { size, coords }
    }

    /// Grid size n.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of distinct actions (n²).
    #[must_use]
    pub fn action_count(&self) -> usize {
        self.coords.len()
    }

    /// Look up the coordinate for an action.
    ///
    /// Returns `None` when the index is out of range, so callers reject
    /// bad actions before ever touching the board.
    #[must_use]
    pub fn get(&self, action: Action) -> Option<(usize, usize)> {
        self.coords.get(&action).copied()
    }

    /// Iterate all actions in ascending index order.
    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        (0..self.coords.len() as u32).map(Action::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_coords() {
        assert_eq!(Action::new(0).coords(3), (0, 0));
        assert_eq!(Action::new(1).coords(3), (0, 1));
        assert_eq!(Action::new(3).coords(3), (1, 0));
        assert_eq!(Action::new(8).coords(3), (2, 2));

        // Size-dependent: the same index maps elsewhere on a 4x4 grid.
        assert_eq!(Action::new(8).coords(4), (2, 0));
    }

    #[test]
    fn test_action_ordering() {
        assert!(Action::new(0) < Action::new(1));
        assert!(Action::new(7) < Action::new(8));
    }

    #[test]
    fn test_action_map_covers_grid() {
        let map = ActionMap::new(3);

        assert_eq!(map.size(), 3);
        assert_eq!(map.action_count(), 9);
        for index in 0..9 {
            let action = Action::new(index);
            assert_eq!(map.get(action), Some(action.coords(3)));
        }
    }

    #[test]
    fn test_action_map_rejects_out_of_range() {
        let map = ActionMap::new(3);

        assert_eq!(map.get(Action::new(9)), None);
        assert_eq!(map.get(Action::new(100)), None);
    }

    #[test]
    fn test_action_map_iterates_ascending() {
        let map = ActionMap::new(2);
        let actions: Vec<_> = map.actions().collect();

        assert_eq!(
            actions,
            vec![Action::new(0), Action::new(1), Action::new(2), Action::new(3)]
        );
    }

    #[test]
    fn test_action_map_size_one() {
        let map = ActionMap::new(1);

        assert_eq!(map.action_count(), 1);
        assert_eq!(map.get(Action::new(0)), Some((0, 0)));
        assert_eq!(map.get(Action::new(1)), None);
    }
}
