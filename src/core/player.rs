//! Player identification.
//!
//! A player *is* the sign of the marks it places: [`Player::ONE`] is `+1`
//! and moves first, [`Player::TWO`] is `-1`. Keeping players as signs makes
//! win detection plain integer arithmetic (see [`crate::rules`]) and lets
//! observations be re-signed for the viewer with a single negation.

use serde::{Deserialize, Serialize};

/// One of the two players, identified by the sign of its mark.
///
/// ```
/// use rust_tictactoe::Player;
///
/// assert_eq!(Player::ONE.sign(), 1);
/// assert_eq!(Player::ONE.opponent(), Player::TWO);
/// assert_eq!(Player::TWO.opponent().sign(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player(i8);

impl Player {
    /// The player who moves first (`+1`, rendered as `X`).
    pub const ONE: Player = Player(1);

    /// The second player (`-1`, rendered as `O`).
    pub const TWO: Player = Player(-1);

    /// Convert a signed mark value, rejecting anything but `+1` / `-1`.
    #[must_use]
    pub const fn from_sign(sign: i8) -> Option<Player> {
        match sign {
            1 => Some(Player::ONE),
            -1 => Some(Player::TWO),
            _ => None,
        }
    }

    /// Get the signed mark value (`+1` or `-1`).
    #[must_use]
    pub const fn sign(self) -> i8 {
        self.0
    }

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        Player(-self.0)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
