//! Deadline-ordered event queue driving toast continuations.
//!
//! Entries fire in `(deadline, sequence)` order, so two events due at the
//! same instant run in the order they were scheduled.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::toast::ToastId;

/// What should happen when a queued entry comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// The fade-in finished; the toast becomes visible.
    FadeInFinished,
    /// The fade-out finished; the toast is detached.
    FadeOutFinished,
    /// The auto-hide timer fired.
    AutoHide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub toast: ToastId,
    pub kind: EventKind,
}

/// Handle used to cancel a queued entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventKey {
    at: Duration,
    seq: u64,
}

impl EventKey {
    /// When the entry is due, measured on the controller clock.
    pub fn deadline(&self) -> Duration {
        self.at
    }
}

#[derive(Debug, Default)]
pub struct EventQueue {
    entries: BTreeMap<EventKey, ScheduledEvent>,
    next_seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at: Duration, event: ScheduledEvent) -> EventKey {
        let key = EventKey {
            at,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.entries.insert(key, event);
        tracing::trace!(?at, toast = event.toast.0, kind = ?event.kind, "scheduled event");
        key
    }

    /// Remove a queued entry. Returns the event if it had not fired yet.
    pub fn cancel(&mut self, key: EventKey) -> Option<ScheduledEvent> {
        let event = self.entries.remove(&key);
        if let Some(event) = event {
            tracing::trace!(toast = event.toast.0, kind = ?event.kind, "cancelled event");
        }
        event
    }

    /// Deadline of the earliest entry.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.keys().next().map(EventKey::deadline)
    }

    /// Pop the earliest entry if it is due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<(EventKey, ScheduledEvent)> {
        let (&key, _) = self.entries.first_key_value()?;
        if key.at > now {
            return None;
        }
        self.entries.pop_first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
