//! Event payloads passed from the match to the surrounding game.
//!
//! Each payload is built from explicit required arguments plus `with_*`
//! setters for optional fields. Every instance owns fresh collections.

use serde::{Deserialize, Serialize};

use crate::board::TilePosition;
use crate::core::Side;

/// Progress update for a player task (daily quest, achievement).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdatedEventData {
    pub task_id: String,
    pub progress: u32,
    /// Progress needed to finish. `None` for open-ended tasks.
    pub target: Option<u32>,
    pub completed: bool,
    /// Reward item IDs granted on completion.
    #[serde(default)]
    pub rewards: Vec<String>,
}

impl TaskUpdatedEventData {
    #[must_use]
    pub fn new(task_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            progress: 0,
            target: None,
            completed: false,
            rewards: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: u32) -> Self {
        self.progress = progress;
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: u32) -> Self {
        self.target = Some(target);
        self
    }

    #[must_use]
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    #[must_use]
    pub fn with_reward(mut self, item_id: impl Into<String>) -> Self {
        self.rewards.push(item_id.into());
        self
    }

    /// Completed explicitly, or progress has reached the target.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed || self.target.is_some_and(|t| self.progress >= t)
    }
}

/// Where and when a powerup was used.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerupUsageContext {
    pub powerup_id: String,
    pub side: Side,
    /// Tiles the powerup acts on. Empty for board-wide powerups.
    #[serde(default)]
    pub targets: Vec<TilePosition>,
    /// Turn index the powerup was used on.
    pub turn: Option<usize>,
}

impl PowerupUsageContext {
    #[must_use]
    pub fn new(powerup_id: impl Into<String>, side: Side) -> Self {
        Self {
            powerup_id: powerup_id.into(),
            side,
            targets: Vec::new(),
            turn: None,
        }
    }

    #[must_use]
    pub fn with_target(mut self, pos: TilePosition) -> Self {
        self.targets.push(pos);
        self
    }

    #[must_use]
    pub fn with_turn(mut self, turn: usize) -> Self {
        self.turn = Some(turn);
        self
    }

    #[must_use]
    pub fn is_board_wide(&self) -> bool {
        self.targets.is_empty()
    }
}
