//! Board modifiers: special effects attached to tiles.
//!
//! ## BoardModifierType
//!
//! The bare tag, used where only the kind of effect matters (the null-tile
//! check, rendering lookups).
//!
//! ## BoardModifier
//!
//! The tag plus its effect-specific fields. Timed effects carry
//! `turns_remaining`; `None` means the effect is permanent.

use serde::{Deserialize, Serialize};

/// Tag identifying the kind of board modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardModifierType {
    /// Permanently unplayable tile with its own look. Never expires.
    Null,
    /// Multiplies the score of a card placed on the tile.
    ScoreMultiplier,
    /// Adds flat points to a card placed on the tile.
    BonusPoints,
    /// A card placed here may be transformed into another card.
    Wildcard,
}

/// A special effect attached to a tile.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardModifier {
    /// Unplayable tile.
    Null,
    /// Score multiplier.
    ScoreMultiplier {
        factor: u32,
        turns_remaining: Option<u32>,
    },
    /// Flat bonus points.
    BonusPoints {
        points: i64,
        turns_remaining: Option<u32>,
    },
    /// Transforming tile.
    Wildcard { turns_remaining: Option<u32> },
}

impl BoardModifier {
    /// Permanent score multiplier.
    #[must_use]
    pub fn multiplier(factor: u32) -> Self {
        BoardModifier::ScoreMultiplier {
            factor,
            turns_remaining: None,
        }
    }

    /// Permanent flat bonus.
    #[must_use]
    pub fn bonus(points: i64) -> Self {
        BoardModifier::BonusPoints {
            points,
            turns_remaining: None,
        }
    }

    /// Permanent wildcard.
    #[must_use]
    pub fn wildcard() -> Self {
        BoardModifier::Wildcard {
            turns_remaining: None,
        }
    }

    /// Limit this modifier to a number of turns.
    ///
    /// Has no effect on `Null`, which never expires.
    #[must_use]
    pub fn for_turns(mut self, turns: u32) -> Self {
        if let Some(remaining) = self.turns_remaining_mut() {
            *remaining = Some(turns);
        }
        self
    }

    /// The modifier's tag.
    #[must_use]
    pub fn kind(&self) -> BoardModifierType {
        match self {
            BoardModifier::Null => BoardModifierType::Null,
            BoardModifier::ScoreMultiplier { .. } => BoardModifierType::ScoreMultiplier,
            BoardModifier::BonusPoints { .. } => BoardModifierType::BonusPoints,
            BoardModifier::Wildcard { .. } => BoardModifierType::Wildcard,
        }
    }

    /// Turns left before the effect lapses. `None` for permanent effects.
    #[must_use]
    pub fn turns_remaining(&self) -> Option<u32> {
        match self {
            BoardModifier::Null => None,
            BoardModifier::ScoreMultiplier { turns_remaining, .. }
            | BoardModifier::BonusPoints { turns_remaining, .. }
            | BoardModifier::Wildcard { turns_remaining } => *turns_remaining,
        }
    }

    fn turns_remaining_mut(&mut self) -> Option<&mut Option<u32>> {
        match self {
            BoardModifier::Null => None,
            BoardModifier::ScoreMultiplier { turns_remaining, .. }
            | BoardModifier::BonusPoints { turns_remaining, .. }
            | BoardModifier::Wildcard { turns_remaining } => Some(turns_remaining),
        }
    }

    /// Cards can never be placed on a tile carrying this modifier.
    #[must_use]
    pub fn blocks_placement(&self) -> bool {
        matches!(self, BoardModifier::Null)
    }

    /// Whether this modifier can lapse.
    #[must_use]
    pub fn expires(&self) -> bool {
        self.turns_remaining().is_some()
    }

    /// Whether the rendering layer must special-case the tile.
    #[must_use]
    pub fn alters_rendering(&self) -> bool {
        matches!(self, BoardModifier::Null | BoardModifier::Wildcard { .. })
    }

    /// Count down one turn.
    ///
    /// Returns `false` once the modifier has lapsed and should be dropped.
    pub fn tick(&mut self) -> bool {
        match self.turns_remaining_mut() {
            Some(Some(remaining)) => {
                *remaining = remaining.saturating_sub(1);
                *remaining > 0
            }
            _ => true,
        }
    }
}
