// SPDX-License-Identifier: MPL-2.0
//! Deadline bookkeeping for toast timers.
//!
//! The scheduler does not sleep. It stores deadlines ordered by time and
//! hands back the ones that are due; whoever owns it decides when to look.

use super::item::ToastId;
use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimerKind {
    /// Hide the toast.
    AutoClose,
    /// Drop a closed toast once its exit animation is over.
    Purge,
}

/// Handle to one scheduled timer.
///
/// A handle only cancels the exact timer it was returned for: if the same
/// toast/kind pair was rescheduled since, the old handle is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    id: ToastId,
    kind: TimerKind,
    generation: u64,
}

impl TimerHandle {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> TimerKind {
        self.kind
    }
}

/// A timer whose deadline has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueTimer {
    pub id: ToastId,
    pub kind: TimerKind,
    pub deadline: Instant,
}

type QueueKey = (Instant, ToastId, TimerKind);

/// Fire-once timers, at most one per (toast, kind).
#[derive(Debug, Default)]
pub struct TimerScheduler {
    /// Pending timers ordered by deadline, then id.
    queue: BTreeMap<QueueKey, u64>,
    /// Reverse index for cancellation.
    index: HashMap<(ToastId, TimerKind), (Instant, u64)>,
    next_generation: u64,
}

impl TimerScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a timer, replacing any pending one of the same kind for `id`.
    pub fn schedule(&mut self, id: ToastId, kind: TimerKind, deadline: Instant) -> TimerHandle {
        if let Some((previous, _)) = self.index.remove(&(id, kind)) {
            self.queue.remove(&(previous, id, kind));
        }

        self.next_generation += 1;
        let generation = self.next_generation;
        self.queue.insert((deadline, id, kind), generation);
        self.index.insert((id, kind), (deadline, generation));
        tracing::trace!(toast = %id, ?kind, "timer scheduled");

        TimerHandle {
            id,
            kind,
            generation,
        }
    }

    /// Cancels the timer behind `handle`.
    ///
    /// Returns `false` if it already fired, was cancelled, or was replaced.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let key = (handle.id, handle.kind);
        match self.index.get(&key) {
            Some(&(deadline, generation)) if generation == handle.generation => {
                self.index.remove(&key);
                self.queue.remove(&(deadline, handle.id, handle.kind));
                tracing::trace!(toast = %handle.id, kind = ?handle.kind, "timer cancelled");
                true
            }
            _ => false,
        }
    }

    /// Cancels every pending timer for `id`.
    pub fn cancel_all(&mut self, id: ToastId) {
        for kind in [TimerKind::AutoClose, TimerKind::Purge] {
            if let Some((deadline, _)) = self.index.remove(&(id, kind)) {
                self.queue.remove(&(deadline, id, kind));
            }
        }
    }

    /// Removes and returns every timer due at `now`, earliest first.
    pub fn pop_due(&mut self, now: Instant) -> Vec<DueTimer> {
        let mut due = Vec::new();
        while let Some((&(deadline, id, kind), _)) = self.queue.first_key_value() {
            if deadline > now {
                break;
            }
            self.queue.pop_first();
            self.index.remove(&(id, kind));
            due.push(DueTimer { id, kind, deadline });
        }
        due
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.first_key_value().map(|(&(deadline, _, _), _)| deadline)
    }

    #[must_use]
    pub fn is_scheduled(&self, id: ToastId, kind: TimerKind) -> bool {
        self.index.contains_key(&(id, kind))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
