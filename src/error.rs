//! Error types for snapshot and data-object handling.
//!
//! Tile operations never fail (invalid-state calls are silent no-ops), so
//! errors only appear where external data enters the model: loose JSON
//! configuration objects, encoded board snapshots, and snapshot
//! application.

use derive_more::{Display, Error};

/// Malformed external data, with the location that rejected it.
///
/// Intended as a loud developer-facing failure. Callers propagate it with
/// `?` and never retry.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Snapshot error: {} at {}:{}", message, file, line)]
pub struct SnapshotError {
    /// Error message.
    pub message: String,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl SnapshotError {
    /// Create a new error tagged with the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// A required field was absent, null, or of the wrong type.
    #[track_caller]
    pub fn missing_field(object: &str, field: &str) -> Self {
        Self::new(format!("{object}: required field `{field}` is missing or invalid"))
    }
}

impl From<bincode::Error> for SnapshotError {
    #[track_caller]
    fn from(err: bincode::Error) -> Self {
        Self::new(format!("Encoding error: {}", err))
    }
}

impl From<serde_json::Error> for SnapshotError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}
