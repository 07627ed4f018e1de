//! Identifier types.
//!
//! Cards carry two identities:
//! - `PairId`: shared by the two instances showing the same face
//! - `InstanceId`: unique to one physical card in the deck
//!
//! Both are opaque. The engine only compares them for equality.
//!
//! ```
//! use memory_match::core::{IdAllocator, PairId};
//!
//! let mut ids = IdAllocator::new();
//! let a = ids.next_instance();
//! let b = ids.next_instance();
//! assert_ne!(a, b);
//!
//! assert_eq!(PairId::new(3), PairId::new(3));
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity shared by the two cards that show the same face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairId(pub u32);

impl PairId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// Identity of a single card instance.
///
/// Instance ids are never reused across decks built from the same allocator,
/// so a click that refers to a card from a previous deck is simply unknown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u64);

impl InstanceId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identifier of a stored result record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultId(pub String);

impl ResultId {
    /// Generate a fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ResultId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for ResultId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Handle of a scheduled close timer.
///
/// Handles are issued from a monotonically increasing counter, so a handle
/// that has been replaced never matches the pending one again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerHandle(pub u64);

/// Monotonic allocator for instance ids and timer handles.
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    next_instance: u64,
    next_timer: u64,
}

impl IdAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_instance(&mut self) -> InstanceId {
        let id = InstanceId(self.next_instance);
        self.next_instance += 1;
        id
    }

    pub fn next_timer(&mut self) -> TimerHandle {
        let handle = TimerHandle(self.next_timer);
        self.next_timer += 1;
        handle
    }
}
