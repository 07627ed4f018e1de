//! Core building blocks: identifiers, RNG, clock, configuration.
//!
//! These types know nothing about gameplay rules; the `cards`, `gameplay`
//! and `results` modules are built on top of them.

pub mod clock;
pub mod config;
pub mod ids;
pub mod rng;

pub use clock::{Clock, ManualClock, Millis, SystemClock};
pub use config::GameConfig;
pub use ids::{IdAllocator, InstanceId, PairId, ResultId, TimerHandle};
pub use rng::GameRng;
