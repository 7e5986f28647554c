//! Room / node / property triple.
//!
//! Addresses one property of one node inside a named room, e.g. for the
//! editor's property bindings. Parsed from loose JSON and rejected loudly
//! if any part is missing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fields::{as_object, required_str};
use crate::error::SnapshotError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomAndNodeAndProp {
    pub room: String,
    pub node: String,
    pub prop: String,
}

impl RoomAndNodeAndProp {
    const NAME: &'static str = "RoomAndNodeAndProp";

    #[must_use]
    pub fn new(room: impl Into<String>, node: impl Into<String>, prop: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            node: node.into(),
            prop: prop.into(),
        }
    }

    /// Parse from a JSON object with string fields `room`, `node`, `prop`.
    #[track_caller]
    pub fn from_object(value: &Value) -> Result<Self, SnapshotError> {
        as_object(value, Self::NAME)?;
        Ok(Self {
            room: required_str(value, Self::NAME, "room")?,
            node: required_str(value, Self::NAME, "node")?,
            prop: required_str(value, Self::NAME, "prop")?,
        })
    }

    /// `room/node.prop`
    #[must_use]
    pub fn path(&self) -> String {
        format!("{}/{}.{}", self.room, self.node, self.prop)
    }
}
