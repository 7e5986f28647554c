//! Turn records.
//!
//! A turn record is one entry of the match's turn log. The match only
//! counts records to derive whose move it is; the contents are for replay,
//! scoring and debugging.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::Side;
use crate::board::TilePosition;
use crate::cards::Card;

/// One card put on the board during a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePlacement {
    pub position: TilePosition,

    /// Card shown on the tile.
    pub card: Card,

    /// Card the player actually played.
    pub original_card: Card,
}

impl TilePlacement {
    /// A placement with no transformation.
    #[must_use]
    pub fn new(position: TilePosition, card: Card) -> Self {
        Self {
            position,
            card,
            original_card: card,
        }
    }

    /// A placement whose shown card was transformed.
    #[must_use]
    pub fn transformed(position: TilePosition, card: Card, original_card: Card) -> Self {
        Self {
            position,
            card,
            original_card,
        }
    }
}

/// A completed turn.
///
/// SmallVec keeps the common one-to-three placements inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Who moved. `None` when the record came from a source that does not
    /// carry it; the log position still determines ownership.
    pub side: Option<Side>,

    pub placements: SmallVec<[TilePlacement; 3]>,

    /// Points scored this turn.
    pub score: i64,
}

impl TurnRecord {
    /// Create an empty record for a side.
    #[must_use]
    pub fn new(side: Side) -> Self {
        Self {
            side: Some(side),
            placements: SmallVec::new(),
            score: 0,
        }
    }

    /// Add a placement.
    #[must_use]
    pub fn with_placement(mut self, placement: TilePlacement) -> Self {
        self.placements.push(placement);
        self
    }

    /// Set the score.
    #[must_use]
    pub fn with_score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }

    /// The player passed without placing anything.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.placements.is_empty()
    }
}
