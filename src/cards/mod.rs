//! Card values.
//!
//! Cards are opaque, equality-comparable identifiers with an `INVALID`
//! sentinel. The model never interprets card IDs; scoring and matching
//! rules live with the caller.

pub mod card;

pub use card::Card;
