//! Core match types: sides, turn records, match state, configuration.
//!
//! `MatchState` and `Match` are plain records mutated synchronously by a
//! single owning controller. Nothing here locks, blocks, or awaits.

pub mod action;
pub mod config;
pub mod game_match;
pub mod player;
pub mod rng;
pub mod setup;
pub mod state;

pub use action::{TilePlacement, TurnRecord};
pub use config::MatchConfig;
pub use game_match::Match;
pub use player::Side;
pub use rng::GameRng;
pub use setup::{start_match, SetupError};
pub use state::MatchState;
