//! Board system: tiles, modifiers, and snapshots.
//!
//! ## Key Types
//!
//! - `GameBoardTileModel`: One tile's occupancy state machine
//! - `BoardModifier`: Special effect attached to a tile (`Null` tiles are unplayable)
//! - `GameBoard`: Owning grid of tiles
//! - `TileSnapshot` / `BoardSnapshot`: Authoritative remote state, applied as full replace

pub mod grid;
pub mod modifier;
pub mod snapshot;
pub mod tile;

pub use grid::{BoardError, GameBoard, TilePosition};
pub use modifier::{BoardModifier, BoardModifierType};
pub use snapshot::{BoardSnapshot, TileSnapshot};
pub use tile::{GameBoardTileModel, ModifierList, TileState, UNPLACED_TURN};
