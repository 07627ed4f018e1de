//! Card instances and their lifecycle status.

use serde::{Deserialize, Serialize};

use crate::core::ids::{InstanceId, PairId};

/// Lifecycle status of a card.
///
/// Transitions: `Closed → Open → {Closed | Hidden}`. `Hidden` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    /// Matched and removed from play.
    Hidden,
    /// Face down and clickable.
    Closed,
    /// Face up.
    Open,
}

impl CardStatus {
    /// Whether moving from `self` to `next` is a legal lifecycle step.
    #[must_use]
    pub fn can_transition_to(self, next: CardStatus) -> bool {
        matches!(
            (self, next),
            (CardStatus::Closed, CardStatus::Open)
                | (CardStatus::Open, CardStatus::Closed)
                | (CardStatus::Open, CardStatus::Hidden)
        )
    }
}

/// Reference to a face image.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceRef {
    /// File name, e.g. `3.jpg`.
    pub file_name: String,
    /// Base directory joined with the file name, e.g. `/img/cardGame/3.jpg`.
    pub path: String,
}

impl FaceRef {
    /// Face for positional index `index`.
    pub fn positional(base_dir: &str, index: usize, extension: &str) -> Self {
        let file_name = format!("{index}.{extension}");
        Self {
            path: format!("{base_dir}{file_name}"),
            file_name,
        }
    }
}

/// A single card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub pair_id: PairId,
    pub instance_id: InstanceId,
    pub face: FaceRef,
    pub status: CardStatus,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(pair_id: PairId, instance_id: InstanceId, face: FaceRef) -> Self {
        Self {
            pair_id,
            instance_id,
            face,
            status: CardStatus::Closed,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status == CardStatus::Open
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.status == CardStatus::Hidden
    }
}
