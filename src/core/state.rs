//! Match state: turn log and card pools.
//!
//! ## Turn ownership
//!
//! `turn()` is the length of the turn log and is never stored separately.
//! Even turns belong to the host, odd turns to the challenger. There is no
//! turn limit; the controller decides when the game ends.
//!
//! ## Ownership
//!
//! `deck` and `board_modifiers` are moved in at construction and never
//! changed by `MatchState` itself. Hands and the turn log are grown by the
//! controller.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::action::TurnRecord;
use super::player::Side;
use crate::board::BoardModifier;
use crate::cards::Card;

/// Shared mutable state of one match.
///
/// The turn log uses `im::Vector` so snapshots of a long match clone in
/// O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Ordered turn log.
    pub turns: Vector<TurnRecord>,

    /// Cards in the local player's hand.
    pub player_hand: Vec<Card>,

    /// Cards in the opponent's hand.
    pub opponent_hand: Vec<Card>,

    deck: Vec<Card>,

    /// Board-wide modifiers, distinct from per-tile ones.
    board_modifiers: Vec<BoardModifier>,
}

impl MatchState {
    /// Create a match state around a deck and board-wide modifiers.
    ///
    /// Both are taken by value; the state is their only owner.
    #[must_use]
    pub fn new(deck: Vec<Card>, board_modifiers: Vec<BoardModifier>) -> Self {
        Self {
            turns: Vector::new(),
            player_hand: Vec::new(),
            opponent_hand: Vec::new(),
            deck,
            board_modifiers,
        }
    }

    /// Number of turns played so far, which is also the index of the
    /// pending turn.
    #[must_use]
    pub fn turn(&self) -> usize {
        self.turns.len()
    }

    /// Whose move is pending.
    #[must_use]
    pub fn active_side(&self) -> Side {
        Side::from_turn(self.turn())
    }

    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    #[must_use]
    pub fn board_modifiers(&self) -> &[BoardModifier] {
        &self.board_modifiers
    }

    // === Hands ===

    /// Hand held by a side. The host is the local player.
    #[must_use]
    pub fn hand(&self, side: Side) -> &[Card] {
        match side {
            Side::Host => &self.player_hand,
            Side::Challenger => &self.opponent_hand,
        }
    }

    /// Mutable hand held by a side.
    pub fn hand_mut(&mut self, side: Side) -> &mut Vec<Card> {
        match side {
            Side::Host => &mut self.player_hand,
            Side::Challenger => &mut self.opponent_hand,
        }
    }

    // === Turn Log ===

    /// Append a finished turn.
    ///
    /// Records without a side are stamped with the side whose turn it was.
    #[instrument(level = "debug", skip_all, fields(turn = self.turns.len()))]
    pub fn record_turn(&mut self, mut record: TurnRecord) {
        if record.side.is_none() {
            record.side = Some(self.active_side());
        }
        self.turns.push_back(record);
        debug!(next = %self.active_side(), "turn recorded");
    }

    /// The most recent turn, if any.
    #[must_use]
    pub fn last_turn(&self) -> Option<&TurnRecord> {
        self.turns.back()
    }

    /// Total score recorded for a side.
    #[must_use]
    pub fn score(&self, side: Side) -> i64 {
        self.turns
            .iter()
            .enumerate()
            .filter(|(i, r)| r.side.unwrap_or(Side::from_turn(*i)) == side)
            .map(|(_, r)| r.score)
            .sum()
    }
}
