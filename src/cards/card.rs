//! Card identity.
//!
//! A `Card` is a small `Copy` identifier. Tiles, hands and the deck all
//! store their own copy, so no card value is ever aliased across tiles.
//!
//! `Card::INVALID` is the "no card" sentinel used by empty tiles and by
//! `pick_up_card` on an empty tile.

use serde::{Deserialize, Serialize};

/// Identifier for a playable card.
///
/// ```
/// use tile_match::cards::Card;
///
/// let card = Card::new(7);
/// assert!(card.is_valid());
/// assert!(!Card::INVALID.is_valid());
/// assert_eq!(Card::default(), Card::INVALID);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card(pub u32);

impl Card {
    /// The "no card" sentinel.
    pub const INVALID: Card = Card(u32::MAX);

    /// Create a card from its raw ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check whether this is a real card rather than the sentinel.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::INVALID
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "Card({})", self.0)
        } else {
            write!(f, "Card(invalid)")
        }
    }
}
