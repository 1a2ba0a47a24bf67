// SPDX-License-Identifier: MPL-2.0
//! Lifecycle events emitted by the store.
//!
//! The rendering layer consumes these to animate toasts in and out; the
//! store itself never renders anything.

use super::item::{ToastId, ToastSnapshot};

/// Why a toast was hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// `hide`, `hide_all` or `hide_group`.
    Dismissed,
    /// The auto-close timer fired.
    Expired,
    /// The user clicked a toast created with `close_on_click`.
    Clicked,
}

/// A toast lifecycle transition.
#[derive(Debug, Clone, PartialEq)]
pub enum ToastEvent {
    /// A new toast was added.
    Shown(ToastSnapshot),
    /// A toast was hidden; it stays listed until `Removed`.
    Closed { id: ToastId, reason: CloseReason },
    /// A closed toast was purged.
    Removed { id: ToastId },
}

impl ToastEvent {
    #[must_use]
    pub fn id(&self) -> ToastId {
        match self {
            ToastEvent::Shown(snapshot) => snapshot.id,
            ToastEvent::Closed { id, .. } | ToastEvent::Removed { id } => *id,
        }
    }
}

/// Lifecycle events recorded between drains.
///
/// Recording is off by default so a store nobody drains does not collect
/// three events per toast forever. While recording, nothing is dropped: the
/// owner drains after every operation.
#[derive(Debug, Default)]
pub(crate) struct EventLog {
    events: Vec<ToastEvent>,
    recording: bool,
}

impl EventLog {
    pub(crate) fn recording() -> Self {
        Self {
            events: Vec::new(),
            recording: true,
        }
    }

    pub(crate) fn is_recording(&self) -> bool {
        self.recording
    }

    pub(crate) fn push(&mut self, event: ToastEvent) {
        if self.recording {
            self.events.push(event);
        }
    }

    pub(crate) fn drain(&mut self) -> Vec<ToastEvent> {
        std::mem::take(&mut self.events)
    }
}
