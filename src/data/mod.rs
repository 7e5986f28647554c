//! Data objects exchanged with the surrounding game.
//!
//! - `RoomAndNodeAndProp`, `UpsellItemConfig`: parsed from loose JSON with
//!   `from_object`, failing with `SnapshotError` on missing fields
//! - `PurchaseResult`: store outcome
//! - `TaskUpdatedEventData`, `PowerupUsageContext`: event payloads

pub mod events;
pub mod fields;
pub mod room;
pub mod upsell;

pub use events::{PowerupUsageContext, TaskUpdatedEventData};
pub use room::RoomAndNodeAndProp;
pub use upsell::{PurchaseResult, UpsellItemConfig, DEFAULT_CURRENCY};
