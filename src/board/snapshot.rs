//! Authoritative tile and board snapshots.
//!
//! A snapshot is what a remote peer (or a save file) says a tile looks
//! like. Applying one replaces the local tile wholesale; see
//! `GameBoardTileModel::update_model_from_state`.
//!
//! Snapshots carry no transformation history: a tile only has one card.

use serde::{Deserialize, Serialize};

use super::tile::ModifierList;
use crate::cards::Card;
use crate::error::SnapshotError;

/// Remote view of one tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSnapshot {
    /// Card on the tile. `None` or `Card::INVALID` both mean empty.
    #[serde(default)]
    pub card: Option<Card>,

    /// Turn the card was placed on.
    #[serde(default = "unplaced_turn")]
    pub turn: i32,

    /// Modifier stack, primary modifier first.
    #[serde(default)]
    pub board_modifier_list: ModifierList,
}

fn unplaced_turn() -> i32 {
    super::tile::UNPLACED_TURN
}

impl Default for TileSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl TileSnapshot {
    /// Snapshot of an occupied tile.
    #[must_use]
    pub fn occupied(card: Card, turn: i32) -> Self {
        Self {
            card: Some(card),
            turn,
            board_modifier_list: ModifierList::new(),
        }
    }

    /// Snapshot of an empty tile.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            card: None,
            turn: unplaced_turn(),
            board_modifier_list: ModifierList::new(),
        }
    }

    /// Attach a modifier (appended after existing ones).
    #[must_use]
    pub fn with_modifier(mut self, modifier: super::BoardModifier) -> Self {
        self.board_modifier_list.push(modifier);
        self
    }

    /// The card, if it is a real one.
    #[must_use]
    pub fn valid_card(&self) -> Option<Card> {
        self.card.filter(|c| c.is_valid())
    }
}

/// Remote view of a whole board, row-major.
///
/// `None` entries mean the source had no tile object at that position;
/// they reset the local tile to empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub width: u16,
    pub height: u16,
    pub tiles: Vec<Option<TileSnapshot>>,
}

impl BoardSnapshot {
    /// Create a snapshot of an all-empty board.
    #[must_use]
    pub fn empty(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            tiles: vec![None; width as usize * height as usize],
        }
    }

    /// Number of tiles the dimensions call for.
    #[must_use]
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check that the tile list matches the dimensions.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.tiles.len() != self.expected_len() {
            return Err(SnapshotError::new(format!(
                "board snapshot is {}x{} but carries {} tiles",
                self.width,
                self.height,
                self.tiles.len()
            )));
        }
        Ok(())
    }

    /// Encode for transport.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a transported snapshot, rejecting inconsistent dimensions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: BoardSnapshot = bincode::deserialize(bytes)?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}
