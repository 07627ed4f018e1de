//! Facade composing gameplay and results.
//!
//! The view layer talks only to `CardGame`. A finished game is handed from
//! `Gameplay` to `ResultsStore` by a direct call inside `click_card`.
//!
//! ```
//! use memory_match::{CardGame, ClickOutcome, GameConfig, InMemoryStorage, ManualClock};
//!
//! let clock = ManualClock::new(0);
//! let mut game = CardGame::new(GameConfig::new(1).with_seed(3), InMemoryStorage::new(), clock.clone());
//! game.start_game();
//!
//! let ids: Vec<_> = game.gameplay().cards().iter().map(|c| c.instance_id).collect();
//! game.click_card(ids[0]);
//! clock.advance(1_200);
//! let outcome = game.click_card(ids[1]);
//!
//! assert!(matches!(outcome, ClickOutcome::GameOver(e) if e.duration_ms == 1_200));
//! assert!(game.results().is_informer_visible());
//! ```

use std::path::PathBuf;

use tracing::warn;

use crate::core::clock::{Clock, SystemClock};
use crate::core::config::GameConfig;
use crate::core::ids::{InstanceId, TimerHandle};
use crate::gameplay::{ClickOutcome, Gameplay};
use crate::results::{NewResult, ResultsStore};
use crate::storage::{FileStorage, KeyValueStorage};

/// A game session plus its results.
#[derive(Debug)]
pub struct CardGame<S: KeyValueStorage, C: Clock + Clone> {
    gameplay: Gameplay<C>,
    results: ResultsStore<S, C>,
}

impl<S: KeyValueStorage, C: Clock + Clone> CardGame<S, C> {
    pub fn new(config: GameConfig, storage: S, clock: C) -> Self {
        let results = ResultsStore::new(storage, clock.clone(), config.results_key.clone());
        Self {
            gameplay: Gameplay::new(config, clock),
            results,
        }
    }

    // === Game view ===

    /// Game view mounted.
    pub fn start_game(&mut self) {
        self.gameplay.start_game();
    }

    /// Game view unmounted.
    pub fn end_game(&mut self) {
        self.gameplay.end_game();
    }

    /// Card clicked. A completed game is recorded before returning.
    pub fn click_card(&mut self, id: InstanceId) -> ClickOutcome {
        let outcome = self.gameplay.click_card(id);

        if let ClickOutcome::GameOver(event) = outcome {
            if let Err(err) = self.results.record_new_result(NewResult::from(event)) {
                warn!(error = %err, "result not persisted");
            }
        }

        outcome
    }

    /// Fire the close timer if due.
    pub fn poll_timer(&mut self) -> bool {
        self.gameplay.poll_timer()
    }

    /// Deliver a timer callback from an external scheduler.
    pub fn fire_timer(&mut self, handle: TimerHandle) -> bool {
        self.gameplay.fire_timer(handle)
    }

    // === Results view ===

    /// Results view mounted.
    pub fn load_results(&mut self) {
        self.results.load_results();
    }

    /// Results view unmounted.
    pub fn unload_results(&mut self) {
        self.results.unload_results();
    }

    /// Informer closed by the player.
    pub fn dismiss_informer(&mut self) {
        self.results.dismiss_informer();
    }

    // === Queries ===

    #[must_use]
    pub fn gameplay(&self) -> &Gameplay<C> {
        &self.gameplay
    }

    #[must_use]
    pub fn results(&self) -> &ResultsStore<S, C> {
        &self.results
    }
}

impl CardGame<FileStorage, SystemClock> {
    /// Game on the system clock with results stored under `dir`.
    pub fn open(config: GameConfig, dir: impl Into<PathBuf>) -> Self {
        Self::new(config, FileStorage::new(dir), SystemClock)
    }
}
