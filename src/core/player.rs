//! The two sides of a match.
//!
//! Turn ownership is never stored: it is derived from the length of the
//! turn log. Even turns belong to the host, odd turns to the challenger.

use serde::{Deserialize, Serialize};

/// One side of a two-player match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The player who created the match. Moves on even turns.
    Host,
    /// The player who joined. Moves on odd turns.
    Challenger,
}

impl Side {
    /// Whose move it is on the given turn index.
    ///
    /// ```
    /// use tile_match::core::Side;
    ///
    /// assert_eq!(Side::from_turn(0), Side::Host);
    /// assert_eq!(Side::from_turn(1), Side::Challenger);
    /// assert_eq!(Side::from_turn(4), Side::Host);
    /// ```
    #[must_use]
    pub const fn from_turn(turn: usize) -> Self {
        if turn % 2 == 0 {
            Side::Host
        } else {
            Side::Challenger
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Host => Side::Challenger,
            Side::Challenger => Side::Host,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Host => write!(f, "Host"),
            Side::Challenger => write!(f, "Challenger"),
        }
    }
}
