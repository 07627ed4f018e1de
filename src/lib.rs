//! # memory-match
//!
//! Gameplay and results core for a memory-matching ("concentration") card
//! game.
//!
//! ## Design Principles
//!
//! 1. **View-Agnostic**: Rendering, routing and input are external. The view
//!    calls actions (`start_game`, `click_card`, ...) and reads queries.
//!
//! 2. **Deterministic**: Time comes from an injected `Clock`, shuffling from
//!    a seedable `GameRng`. A seeded game with a `ManualClock` replays
//!    exactly.
//!
//! 3. **Single Timer**: At most one close timer is pending. Scheduling
//!    replaces it; matching or finishing a game cancels it.
//!
//! ## Modules
//!
//! - `core`: Identifiers, RNG, clock, configuration
//! - `cards`: Cards, statuses, deck building
//! - `gameplay`: Click handling, close timer, win detection
//! - `storage`: Key-value storage trait and backends
//! - `results`: Completed-game records and the informer flag
//! - `game`: `CardGame` facade wiring gameplay to results

pub mod cards;
pub mod core;
pub mod game;
pub mod gameplay;
pub mod results;
pub mod storage;

// Re-export commonly used types
pub use crate::core::{
    Clock, GameConfig, GameRng, IdAllocator, InstanceId, ManualClock, Millis, PairId, ResultId,
    SystemClock, TimerHandle,
};

pub use crate::cards::{build_deck, Card, CardStatus, Deck, FaceRef, OpenCards};

pub use crate::gameplay::{ClickOutcome, GameOverEvent, Gameplay, PendingTimer};

pub use crate::storage::{FileStorage, InMemoryStorage, KeyValueStorage, StorageError};

pub use crate::results::{NewResult, ResultRecord, ResultsError, ResultsStore};

pub use crate::game::CardGame;
