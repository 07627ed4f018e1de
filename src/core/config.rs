//! Game configuration.
//!
//! `GameConfig` holds the tunables of a game: deck size, the two close
//! delays, asset addressing, RNG seed and the storage key for results.
//! Every field has a default, so partial configs deserialize cleanly.

use serde::{Deserialize, Serialize};

use super::clock::Millis;

/// Number of distinct faces in the default deck (36 cards).
pub const DEFAULT_UNIQUE_FACES: usize = 18;

/// Delay before a lone open card closes.
pub const FIRST_CARD_TIMEOUT_MS: Millis = 5000;

/// Delay before two open, unmatched cards close.
pub const SECOND_CARD_TIMEOUT_MS: Millis = 5000;

pub const DEFAULT_ASSET_BASE_DIR: &str = "/img/cardGame/";
pub const DEFAULT_ASSET_EXTENSION: &str = "jpg";
pub const DEFAULT_RESULTS_KEY: &str = "card-game-results";

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of distinct faces. The deck holds twice as many cards.
    pub unique_faces: usize,

    /// Close delay scheduled when the first card of a turn opens.
    pub first_card_timeout_ms: Millis,

    /// Close delay scheduled when the second card of a turn opens.
    pub second_card_timeout_ms: Millis,

    /// Directory prefix for face images.
    pub asset_base_dir: String,

    /// File extension of face images, without the dot.
    pub asset_extension: String,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Storage key holding the serialized results list.
    pub results_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            unique_faces: DEFAULT_UNIQUE_FACES,
            first_card_timeout_ms: FIRST_CARD_TIMEOUT_MS,
            second_card_timeout_ms: SECOND_CARD_TIMEOUT_MS,
            asset_base_dir: DEFAULT_ASSET_BASE_DIR.to_string(),
            asset_extension: DEFAULT_ASSET_EXTENSION.to_string(),
            seed: None,
            results_key: DEFAULT_RESULTS_KEY.to_string(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with `unique_faces` pairs and default delays.
    pub fn new(unique_faces: usize) -> Self {
        assert!(unique_faces > 0, "Must have at least 1 face");

        Self {
            unique_faces,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_first_card_timeout(mut self, ms: Millis) -> Self {
        self.first_card_timeout_ms = ms;
        self
    }

    #[must_use]
    pub fn with_second_card_timeout(mut self, ms: Millis) -> Self {
        self.second_card_timeout_ms = ms;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_assets(mut self, base_dir: impl Into<String>, extension: impl Into<String>) -> Self {
        self.asset_base_dir = base_dir.into();
        self.asset_extension = extension.into();
        self
    }

    #[must_use]
    pub fn with_results_key(mut self, key: impl Into<String>) -> Self {
        self.results_key = key.into();
        self
    }

    /// Total number of cards in a deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.unique_faces * 2
    }
}
