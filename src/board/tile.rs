//! One board cell: occupancy state machine plus modifier stack.
//!
//! ```text
//! Empty --place_card--> OccupiedUnflipped --lock_card_in_place--> Occupied
//!   ^                          |                                     |
//!   +--------pick_up_card------+----------------pick_up_card---------+
//! ```
//!
//! Invalid-state calls are silent no-ops, never errors: picking up from an
//! empty tile returns `Card::INVALID`, locking an empty tile does nothing.
//!
//! `card` and `original_card` differ when the displayed card has been
//! transformed (for example by a wildcard); the original is kept for
//! scoring and undo.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, instrument, trace};

use super::modifier::{BoardModifier, BoardModifierType};
use super::snapshot::TileSnapshot;
use crate::cards::Card;

/// Turn value of a tile with no card.
pub const UNPLACED_TURN: i32 = -1;

/// Per-tile modifier stack. Most tiles carry zero or one modifier.
pub type ModifierList = SmallVec<[BoardModifier; 2]>;

/// Occupancy state of a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileState {
    /// No card.
    #[default]
    Empty,
    /// Card placed this turn, not yet committed.
    OccupiedUnflipped,
    /// Card committed and locked.
    Occupied,
}

/// State of a single board tile.
///
/// ## Invariant
///
/// `state == Empty` implies `card == Card::INVALID` and
/// `turn == UNPLACED_TURN`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameBoardTileModel {
    state: TileState,
    card: Card,
    original_card: Card,
    turn: i32,
    board_modifier_list: ModifierList,
}

impl Default for GameBoardTileModel {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoardTileModel {
    /// Create an empty tile with no modifiers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: TileState::Empty,
            card: Card::INVALID,
            original_card: Card::INVALID,
            turn: UNPLACED_TURN,
            board_modifier_list: ModifierList::new(),
        }
    }

    /// Create an empty tile carrying the given modifiers.
    #[must_use]
    pub fn with_modifiers(modifiers: impl IntoIterator<Item = BoardModifier>) -> Self {
        Self {
            board_modifier_list: modifiers.into_iter().collect(),
            ..Self::new()
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> TileState {
        self.state
    }

    /// Card currently shown on the tile.
    #[must_use]
    pub fn card(&self) -> Card {
        self.card
    }

    /// Card the player actually placed, before any transformation.
    #[must_use]
    pub fn original_card(&self) -> Card {
        self.original_card
    }

    /// Turn the card was placed on, `UNPLACED_TURN` if none.
    #[must_use]
    pub fn turn(&self) -> i32 {
        self.turn
    }

    #[must_use]
    pub fn board_modifier_list(&self) -> &[BoardModifier] {
        &self.board_modifier_list
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state == TileState::Empty
    }

    /// The shown card differs from the placed one.
    #[must_use]
    pub fn is_transformed(&self) -> bool {
        !self.is_empty() && self.card != self.original_card
    }

    /// True iff the primary (first) modifier is `Null`.
    #[must_use]
    pub fn is_null_tile(&self) -> bool {
        self.board_modifier_list
            .first()
            .is_some_and(|m| m.kind() == BoardModifierType::Null)
    }

    // === State Machine ===

    /// Put a card on the tile, pending commit.
    ///
    /// The caller must ensure the tile is empty. `turn` is left as is;
    /// use `place_card_on_turn` to stamp it.
    #[instrument(level = "debug", skip(self))]
    pub fn place_card(&mut self, card: Card, original_card: Card) {
        self.card = card;
        self.original_card = original_card;
        self.state = TileState::OccupiedUnflipped;
    }

    /// Put a card on the tile and record the turn it was placed on.
    pub fn place_card_on_turn(&mut self, card: Card, original_card: Card, turn: i32) {
        self.place_card(card, original_card);
        self.turn = turn;
    }

    /// Remove the card and hand it to the caller.
    ///
    /// Returns `Card::INVALID` without touching anything if the tile holds
    /// no card.
    #[instrument(level = "debug", skip(self), fields(state = ?self.state))]
    pub fn pick_up_card(&mut self) -> Card {
        if !self.card.is_valid() {
            trace!("nothing to pick up");
            return Card::INVALID;
        }

        let card = self.card;
        self.card = Card::INVALID;
        self.original_card = Card::INVALID;
        self.turn = UNPLACED_TURN;
        self.state = TileState::Empty;
        debug!(%card, "card picked up");
        card
    }

    /// Commit the placed card. Idempotent; no-op when there is no card.
    pub fn lock_card_in_place(&mut self) {
        if self.card.is_valid() {
            self.state = TileState::Occupied;
        }
    }

    /// Mirror this tile from an authoritative snapshot.
    ///
    /// Full replace, never a merge:
    /// - no source, or no valid card: the tile becomes empty;
    /// - otherwise both `card` and `original_card` take the source card
    ///   (transformation history is not carried by snapshots), the state
    ///   jumps straight to `Occupied`, and `turn` is copied.
    ///
    /// The modifier list is always replaced by a copy of the source's,
    /// or emptied when there is no source.
    #[instrument(level = "debug", skip_all, fields(has_source = source.is_some()))]
    pub fn update_model_from_state(&mut self, source: Option<&TileSnapshot>) {
        match source.and_then(|s| s.valid_card().map(|card| (card, s.turn))) {
            Some((card, turn)) => {
                self.card = card;
                self.original_card = card;
                self.state = TileState::Occupied;
                self.turn = turn;
            }
            None => {
                self.card = Card::INVALID;
                self.original_card = Card::INVALID;
                self.state = TileState::Empty;
                self.turn = UNPLACED_TURN;
            }
        }

        self.board_modifier_list = source
            .map(|s| s.board_modifier_list.clone())
            .unwrap_or_default();
    }

    /// Capture this tile as a snapshot.
    ///
    /// The snapshot carries the shown card only.
    #[must_use]
    pub fn snapshot(&self) -> TileSnapshot {
        TileSnapshot {
            card: self.card.is_valid().then_some(self.card),
            turn: self.turn,
            board_modifier_list: self.board_modifier_list.clone(),
        }
    }

    // === Modifiers ===

    /// Append a modifier to the stack.
    pub fn push_modifier(&mut self, modifier: BoardModifier) {
        self.board_modifier_list.push(modifier);
    }

    /// Drop all modifiers except a leading `Null`.
    pub fn clear_modifiers(&mut self) {
        let keep_null = self.is_null_tile();
        self.board_modifier_list.clear();
        if keep_null {
            self.board_modifier_list.push(BoardModifier::Null);
        }
    }

    /// Count every timed modifier down one turn, dropping lapsed ones.
    ///
    /// Returns the number of modifiers removed.
    pub fn tick_modifiers(&mut self) -> usize {
        let before = self.board_modifier_list.len();
        self.board_modifier_list.retain(|m| m.tick());
        before - self.board_modifier_list.len()
    }
}
