//! Single-slot close timer.
//!
//! A session has at most one pending close. Scheduling replaces whatever was
//! pending, and a replaced handle can never fire.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::clock::Millis;
use crate::core::ids::TimerHandle;

/// A scheduled close of all open cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTimer {
    pub handle: TimerHandle,
    /// Time at which the close becomes due.
    pub due_at: Millis,
}

/// Holder for the one outstanding timer.
#[derive(Clone, Debug, Default)]
pub struct TimerSlot {
    pending: Option<PendingTimer>,
}

impl TimerSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any pending timer and store the new one.
    ///
    /// Returns the timer that was replaced, if any.
    pub fn schedule(&mut self, handle: TimerHandle, due_at: Millis) -> Option<PendingTimer> {
        let replaced = self.cancel();
        debug!(handle = handle.0, due_at, "close timer scheduled");
        self.pending = Some(PendingTimer { handle, due_at });
        replaced
    }

    /// Cancel the pending timer, if any.
    pub fn cancel(&mut self) -> Option<PendingTimer> {
        let cancelled = self.pending.take();
        if let Some(timer) = cancelled {
            debug!(handle = timer.handle.0, "close timer cancelled");
        }
        cancelled
    }

    #[must_use]
    pub fn pending(&self) -> Option<PendingTimer> {
        self.pending
    }

    /// Take the pending timer if it is due at `now`.
    pub fn take_due(&mut self, now: Millis) -> Option<PendingTimer> {
        match self.pending {
            Some(timer) if timer.due_at <= now => self.pending.take(),
            _ => None,
        }
    }

    /// Take the pending timer if its handle is `handle`.
    pub fn take_if(&mut self, handle: TimerHandle) -> Option<PendingTimer> {
        match self.pending {
            Some(timer) if timer.handle == handle => self.pending.take(),
            _ => None,
        }
    }
}
