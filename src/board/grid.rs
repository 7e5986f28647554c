//! The board: a `width x height` grid of tiles.
//!
//! `GameBoard` owns every `GameBoardTileModel` for a match. Its own rules
//! sit on top of the tile state machine:
//! - cards cannot be placed on null tiles or occupied tiles;
//! - clearing the board never removes a null tile;
//! - a board snapshot is validated before any tile is touched, so it is
//!   applied entirely or not at all.

use derive_more::Display;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::modifier::BoardModifier;
use super::snapshot::BoardSnapshot;
use super::tile::{GameBoardTileModel, TileState};
use crate::cards::Card;
use crate::error::SnapshotError;

/// Column/row address of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[display("({x}, {y})")]
pub struct TilePosition {
    pub x: u16,
    pub y: u16,
}

impl TilePosition {
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Why a placement was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, derive_more::Error)]
pub enum BoardError {
    #[display("position {_0} is outside the board")]
    OutOfBounds(#[error(not(source))] TilePosition),
    #[display("position {_0} is a null tile")]
    NullTile(#[error(not(source))] TilePosition),
    #[display("position {_0} already holds a card")]
    Occupied(#[error(not(source))] TilePosition),
    #[display("cannot place the invalid card")]
    InvalidCard,
}

/// Grid of tiles, row-major.
///
/// Deserialization goes through `RawGameBoard` so a stored board always has
/// exactly `width * height` tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameBoard")]
pub struct GameBoard {
    width: u16,
    height: u16,
    tiles: Vec<GameBoardTileModel>,
}

/// Unchecked wire form of `GameBoard`.
#[derive(Deserialize)]
struct RawGameBoard {
    width: u16,
    height: u16,
    tiles: Vec<GameBoardTileModel>,
}

impl TryFrom<RawGameBoard> for GameBoard {
    type Error = SnapshotError;

    fn try_from(raw: RawGameBoard) -> Result<Self, Self::Error> {
        if raw.width == 0 || raw.height == 0 {
            return Err(SnapshotError::new(format!(
                "board is {}x{}; it must have at least 1 tile",
                raw.width, raw.height
            )));
        }
        let expected = raw.width as usize * raw.height as usize;
        if raw.tiles.len() != expected {
            return Err(SnapshotError::new(format!(
                "board is {}x{} but carries {} tiles",
                raw.width,
                raw.height,
                raw.tiles.len()
            )));
        }
        Ok(Self {
            width: raw.width,
            height: raw.height,
            tiles: raw.tiles,
        })
    }
}

impl GameBoard {
    /// Create an empty board.
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "Board must have at least 1 tile");

        Self {
            width,
            height,
            tiles: vec![GameBoardTileModel::new(); width as usize * height as usize],
        }
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    fn index(&self, pos: TilePosition) -> Option<usize> {
        (pos.x < self.width && pos.y < self.height)
            .then(|| pos.y as usize * self.width as usize + pos.x as usize)
    }

    /// Iterate over every position, row by row.
    pub fn positions(&self) -> impl Iterator<Item = TilePosition> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| TilePosition::new(x, y)))
    }

    /// Iterate over `(position, tile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (TilePosition, &GameBoardTileModel)> {
        self.positions().zip(self.tiles.iter())
    }

    #[must_use]
    pub fn tile(&self, pos: TilePosition) -> Option<&GameBoardTileModel> {
        self.index(pos).and_then(|i| self.tiles.get(i))
    }

    pub fn tile_mut(&mut self, pos: TilePosition) -> Option<&mut GameBoardTileModel> {
        self.index(pos).and_then(move |i| self.tiles.get_mut(i))
    }

    /// Attach a modifier to a tile. Returns false if out of bounds.
    pub fn add_modifier(&mut self, pos: TilePosition, modifier: BoardModifier) -> bool {
        match self.tile_mut(pos) {
            Some(tile) => {
                tile.push_modifier(modifier);
                true
            }
            None => false,
        }
    }

    // === Play ===

    /// Place a card for the given turn.
    #[instrument(level = "debug", skip(self))]
    pub fn place_card(
        &mut self,
        pos: TilePosition,
        card: Card,
        original_card: Card,
        turn: i32,
    ) -> Result<(), BoardError> {
        if !card.is_valid() {
            return Err(BoardError::InvalidCard);
        }
        let tile = self.tile_mut(pos).ok_or(BoardError::OutOfBounds(pos))?;
        if tile.is_null_tile() {
            warn!("placement on null tile rejected");
            return Err(BoardError::NullTile(pos));
        }
        if !tile.is_empty() {
            return Err(BoardError::Occupied(pos));
        }

        tile.place_card_on_turn(card, original_card, turn);
        Ok(())
    }

    /// Take back a card. `None` if out of bounds or the tile is empty.
    pub fn pick_up_card(&mut self, pos: TilePosition) -> Option<Card> {
        let card = self.tile_mut(pos)?.pick_up_card();
        card.is_valid().then_some(card)
    }

    /// Commit every card placed this turn. Returns how many were locked.
    #[instrument(level = "debug", skip(self))]
    pub fn lock_placed_cards(&mut self) -> usize {
        let mut locked = 0;
        for tile in &mut self.tiles {
            if tile.state() == TileState::OccupiedUnflipped {
                tile.lock_card_in_place();
                locked += 1;
            }
        }
        debug!(locked, "placed cards committed");
        locked
    }

    /// Pick up every uncommitted card, in row-major order.
    pub fn take_back_unflipped(&mut self) -> Vec<Card> {
        self.tiles
            .iter_mut()
            .filter(|t| t.state() == TileState::OccupiedUnflipped)
            .map(|t| t.pick_up_card())
            .collect()
    }

    /// Count down timed modifiers on every tile.
    pub fn tick_modifiers(&mut self) -> usize {
        self.tiles.iter_mut().map(|t| t.tick_modifiers()).sum()
    }

    /// Remove every card and non-null modifier. Null tiles survive.
    pub fn clear(&mut self) {
        for tile in &mut self.tiles {
            tile.pick_up_card();
            tile.clear_modifiers();
        }
    }

    // === Queries ===

    #[must_use]
    pub fn null_tile_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_null_tile()).count()
    }

    /// Tiles that could still take a card.
    #[must_use]
    pub fn open_positions(&self) -> Vec<TilePosition> {
        self.iter()
            .filter(|(_, t)| t.is_empty() && !t.is_null_tile())
            .map(|(pos, _)| pos)
            .collect()
    }

    /// No playable tile is left.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.iter().all(|(_, t)| !t.is_empty() || t.is_null_tile())
    }

    /// Occupied positions grouped by the turn their card was placed on.
    #[must_use]
    pub fn placements_by_turn(&self) -> FxHashMap<i32, Vec<TilePosition>> {
        let mut by_turn: FxHashMap<i32, Vec<TilePosition>> = FxHashMap::default();
        for (pos, tile) in self.iter().filter(|(_, t)| !t.is_empty()) {
            by_turn.entry(tile.turn()).or_default().push(pos);
        }
        by_turn
    }

    // === Sync ===

    /// Capture the whole board.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            width: self.width,
            height: self.height,
            tiles: self.tiles.iter().map(|t| Some(t.snapshot())).collect(),
        }
    }

    /// Mirror the board from an authoritative snapshot.
    ///
    /// Fails without touching any tile if the snapshot's dimensions do not
    /// match this board.
    #[instrument(level = "debug", skip_all)]
    pub fn apply_snapshot(&mut self, snapshot: &BoardSnapshot) -> Result<(), SnapshotError> {
        snapshot.validate()?;
        if snapshot.width != self.width || snapshot.height != self.height {
            return Err(SnapshotError::new(format!(
                "board is {}x{} but snapshot is {}x{}",
                self.width, self.height, snapshot.width, snapshot.height
            )));
        }

        for (tile, source) in self.tiles.iter_mut().zip(&snapshot.tiles) {
            tile.update_model_from_state(source.as_ref());
        }
        debug!(tiles = self.tiles.len(), "board synchronized");
        Ok(())
    }
}
