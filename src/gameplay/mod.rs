//! Gameplay: card open/close/match transitions, the close timer and win
//! detection.

pub mod engine;
pub mod timer;

pub use engine::{ClickOutcome, GameOverEvent, Gameplay};
pub use timer::{PendingTimer, TimerSlot};
