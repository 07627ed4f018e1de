//! Card system: card instances, statuses and the deck.
//!
//! ## Key Types
//!
//! - `Card`: one physical card (pair id, instance id, face, status)
//! - `CardStatus`: `Closed`, `Open` or `Hidden`
//! - `FaceRef`: positional face image reference
//! - `Deck`: shuffled cards with lookup by instance id

pub mod card;
pub mod deck;

pub use card::{Card, CardStatus, FaceRef};
pub use deck::{build_deck, Deck, OpenCards};
