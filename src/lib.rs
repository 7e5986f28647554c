//! # tile-match
//!
//! Board-tile and match-state model for a two-player card/tile matching
//! game.
//!
//! ## Design Principles
//!
//! 1. **Model Only**: No rendering, transport, or editor wiring. A game
//!    controller owns the model and mutates it synchronously.
//!
//! 2. **Silent Tile Transitions**: Tile operations on the wrong state are
//!    no-ops, never errors. Errors appear only where external data enters
//!    (snapshots, JSON configuration objects).
//!
//! 3. **Derived Turn Ownership**: Whose move it is comes from the length
//!    of the turn log, never from a stored field.
//!
//! 4. **Full-Replace Sync**: Remote state is applied as whole-tile
//!    snapshots. No merging, no conflict resolution.
//!
//! ## Modules
//!
//! - `cards`: Card values with an `INVALID` sentinel
//! - `board`: Tile state machine, modifiers, board grid, snapshots
//! - `core`: Sides, turn records, match state, match envelope, setup
//! - `data`: Configuration objects and event payloads
//! - `fx`: Scrolling-texture settings
//! - `error`: Snapshot/data errors

pub mod board;
pub mod cards;
pub mod core;
pub mod data;
pub mod error;
pub mod fx;

// Re-export commonly used types
pub use crate::cards::Card;

pub use crate::board::{
    BoardError, BoardModifier, BoardModifierType, BoardSnapshot, GameBoard, GameBoardTileModel,
    TilePosition, TileSnapshot, TileState, UNPLACED_TURN,
};

pub use crate::core::{
    start_match, GameRng, Match, MatchConfig, MatchState, SetupError, Side, TilePlacement,
    TurnRecord,
};

pub use crate::data::{
    PowerupUsageContext, PurchaseResult, RoomAndNodeAndProp, TaskUpdatedEventData,
    UpsellItemConfig,
};

pub use crate::error::SnapshotError;
