//! Completed-game records.

use serde::{Deserialize, Serialize};

use crate::core::clock::Millis;
use crate::core::ids::ResultId;
use crate::gameplay::GameOverEvent;

/// One completed game, as persisted.
///
/// Serialized with camelCase keys: `{"id", "completedAt", "durationMs"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub id: ResultId,
    /// Completion time, epoch milliseconds.
    pub completed_at: Millis,
    pub duration_ms: Millis,
}

/// Input to `ResultsStore::record_new_result`. Missing fields are defaulted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewResult {
    pub id: Option<ResultId>,
    pub completed_at: Option<Millis>,
    pub duration_ms: Millis,
}

impl NewResult {
    #[must_use]
    pub fn new(duration_ms: Millis) -> Self {
        Self {
            duration_ms,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<ResultId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_completed_at(mut self, at: Millis) -> Self {
        self.completed_at = Some(at);
        self
    }

    /// Fill in defaults: a fresh id and `now` as completion time.
    #[must_use]
    pub fn into_record(self, now: Millis) -> ResultRecord {
        ResultRecord {
            id: self.id.unwrap_or_else(ResultId::generate),
            completed_at: self.completed_at.unwrap_or(now),
            duration_ms: self.duration_ms,
        }
    }
}

impl From<GameOverEvent> for NewResult {
    fn from(event: GameOverEvent) -> Self {
        NewResult::new(event.duration_ms).with_completed_at(event.completed_at)
    }
}
