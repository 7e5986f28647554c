//! Match configuration.
//!
//! Controllers describe a match up front with a `MatchConfig` and hand it
//! to `start_match`. Builder methods follow the usual `with_*` shape.

use serde::{Deserialize, Serialize};

use crate::board::{BoardModifier, TilePosition};

/// Setup parameters for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Board columns.
    pub board_width: u16,

    /// Board rows.
    pub board_height: u16,

    /// Cards dealt to each side at the start.
    pub hand_size: usize,

    /// Seed for the deck shuffle and random layout.
    pub seed: u64,

    /// The opponent is a bot.
    pub has_bot: bool,

    /// Tiles that start as null tiles.
    pub null_tiles: Vec<TilePosition>,

    /// Additional null tiles placed at random open positions.
    pub random_null_tiles: usize,

    /// Board-wide modifiers for the whole match.
    pub board_modifiers: Vec<BoardModifier>,
}

impl MatchConfig {
    /// Create a configuration for a board of the given size.
    ///
    /// Defaults: hand size 5, seed 0, no bot, no null tiles.
    pub fn new(board_width: u16, board_height: u16) -> Self {
        assert!(board_width > 0 && board_height > 0, "Board must have at least 1 tile");

        Self {
            board_width,
            board_height,
            hand_size: 5,
            seed: 0,
            has_bot: false,
            null_tiles: Vec::new(),
            random_null_tiles: 0,
            board_modifiers: Vec::new(),
        }
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Play against a bot.
    #[must_use]
    pub fn with_bot(mut self) -> Self {
        self.has_bot = true;
        self
    }

    /// Mark a tile as null from the start.
    #[must_use]
    pub fn with_null_tile(mut self, pos: TilePosition) -> Self {
        self.null_tiles.push(pos);
        self
    }

    /// Scatter null tiles over random positions.
    #[must_use]
    pub fn with_random_null_tiles(mut self, count: usize) -> Self {
        self.random_null_tiles = count;
        self
    }

    /// Add a board-wide modifier.
    #[must_use]
    pub fn with_board_modifier(mut self, modifier: BoardModifier) -> Self {
        self.board_modifiers.push(modifier);
        self
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.board_width as usize * self.board_height as usize
    }

    /// Cards needed to deal both opening hands, or `None` if the hand size
    /// is too large to count.
    #[must_use]
    pub fn cards_to_deal(&self) -> Option<usize> {
        self.hand_size.checked_mul(2)
    }
}
