//! Match envelope.
//!
//! A `Match` wraps one `MatchState` with match-level metadata. Beyond
//! construction, the controller mutates it by direct field assignment.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::state::MatchState;

/// One game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Wall-clock creation time. Serialized as an ISO-8601 string.
    creation_time: DateTime<Utc>,

    pub state: MatchState,

    pub is_complete: bool,

    /// Whether the local player won. Only meaningful once complete.
    pub player_won: bool,

    /// The opponent is a bot.
    pub has_bot: bool,
}

impl Default for Match {
    fn default() -> Self {
        Self::new(MatchState::default())
    }
}

impl Match {
    /// Create a match around its state, stamped with the current time.
    #[must_use]
    pub fn new(state: MatchState) -> Self {
        Self {
            creation_time: Utc::now(),
            state,
            is_complete: false,
            player_won: false,
            has_bot: false,
        }
    }

    /// Mark the opponent as a bot.
    #[must_use]
    pub fn with_bot(mut self) -> Self {
        self.has_bot = true;
        self
    }

    #[must_use]
    pub fn creation_time(&self) -> DateTime<Utc> {
        self.creation_time
    }

    /// Creation time as `YYYY-MM-DDTHH:MM:SS.sssZ`.
    #[must_use]
    pub fn creation_time_iso(&self) -> String {
        self.creation_time.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// End the match.
    #[instrument(level = "debug", skip(self))]
    pub fn finish(&mut self, player_won: bool) {
        self.is_complete = true;
        self.player_won = player_won;
        debug!(turns = self.state.turn(), "match finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_defaults() {
        let before = Utc::now();
        let m = Match::default();
        let after = Utc::now();

        assert!(!m.is_complete);
        assert!(!m.player_won);
        assert!(!m.has_bot);
        assert!(m.creation_time() >= before && m.creation_time() <= after);
    }

    #[test]
    fn test_creation_time_iso() {
        let m = Match::default();
        let iso = m.creation_time_iso();

        assert!(iso.ends_with('Z'));
        assert_eq!(iso.len(), "2024-01-01T00:00:00.000Z".len());

        let parsed = DateTime::parse_from_rfc3339(&iso).unwrap();
        let drift = m.creation_time() - parsed.with_timezone(&Utc);
        assert!(drift.num_milliseconds().abs() < 1);
    }

    #[test]
    fn test_finish() {
        let mut m = Match::default().with_bot();
        m.finish(true);

        assert!(m.is_complete);
        assert!(m.player_won);
        assert!(m.has_bot);
    }

    #[test]
    fn test_match_serialization() {
        let m = Match::default();
        let json = serde_json::to_value(&m).unwrap();

        assert!(json["creation_time"].is_string());
        let deserialized: Match = serde_json::from_value(json).unwrap();
        assert_eq!(deserialized, m);
    }
}
