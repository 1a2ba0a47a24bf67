// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `ToastItem` record owned by the store, its
//! `ToastId` and the `Variant` severity levels.

use super::options::ToastCallback;
use super::scheduler::TimerHandle;
use crate::domain::toast::ToastDuration;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

/// Unique identifier for a toast, assigned by the store that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Returns the raw numeric id.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out strictly increasing ids, starting at 1.
#[derive(Debug, Default)]
pub(crate) struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    pub(crate) fn next(&mut self) -> ToastId {
        self.last += 1;
        ToastId(self.last)
    }
}

/// Severity level of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Error requiring attention.
    Error,
    /// Operation completed successfully.
    Success,
    /// Warning that doesn't block operation.
    Warning,
    /// Informational message.
    #[default]
    Info,
}

impl Variant {
    /// All variants.
    pub const ALL: [Variant; 4] = [
        Variant::Error,
        Variant::Warning,
        Variant::Success,
        Variant::Info,
    ];

    /// Returns the lowercase name used by the rendering layer.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Error => "error",
            Variant::Success => "success",
            Variant::Warning => "warning",
            Variant::Info => "info",
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown toast variant '{s}'"))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single notification tracked by a [`ToastStore`](super::ToastStore).
///
/// Items are only reachable through the store; callers keep the
/// [`ToastId`].
pub struct ToastItem {
    pub(crate) id: ToastId,
    pub(crate) message: String,
    pub(crate) variant: Variant,
    pub(crate) group: Option<String>,
    pub(crate) unique: bool,
    pub(crate) duration: ToastDuration,
    pub(crate) auto_close: bool,
    pub(crate) close_on_click: bool,
    pub(crate) closed: bool,
    pub(crate) created_at: Instant,
    pub(crate) closed_at: Option<Instant>,
    pub(crate) auto_close_timer: Option<TimerHandle>,
    pub(crate) on_close: Option<ToastCallback>,
}

impl ToastItem {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    #[must_use]
    pub fn duration(&self) -> ToastDuration {
        self.duration
    }

    #[must_use]
    pub fn auto_close(&self) -> bool {
        self.auto_close
    }

    #[must_use]
    pub fn close_on_click(&self) -> bool {
        self.close_on_click
    }

    /// Returns whether the toast has been hidden and is waiting to be purged.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns when this toast was shown.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns when this toast was hidden, if it has been.
    #[must_use]
    pub fn closed_at(&self) -> Option<Instant> {
        self.closed_at
    }

    /// Returns whether this toast has a pending auto-close timer.
    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.auto_close_timer.is_some()
    }

    /// Same `group`+`message` pair, which is what uniqueness is keyed on.
    pub(crate) fn same_key(&self, group: Option<&str>, message: &str) -> bool {
        self.group.as_deref() == group && self.message == message
    }

    /// Returns a detached copy of the displayable fields.
    #[must_use]
    pub fn snapshot(&self) -> ToastSnapshot {
        ToastSnapshot {
            id: self.id,
            message: self.message.clone(),
            variant: self.variant,
            group: self.group.clone(),
            duration: self.duration,
            auto_close: self.auto_close,
            close_on_click: self.close_on_click,
            closed: self.closed,
        }
    }
}

impl fmt::Debug for ToastItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastItem")
            .field("id", &self.id)
            .field("message", &self.message)
            .field("variant", &self.variant)
            .field("group", &self.group)
            .field("unique", &self.unique)
            .field("duration", &self.duration)
            .field("auto_close", &self.auto_close)
            .field("closed", &self.closed)
            .field("on_close", &self.on_close.is_some())
            .finish_non_exhaustive()
    }
}

/// Owned, cloneable view of a toast for the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastSnapshot {
    pub id: ToastId,
    pub message: String,
    pub variant: Variant,
    pub group: Option<String>,
    pub duration: ToastDuration,
    pub auto_close: bool,
    pub close_on_click: bool,
    pub closed: bool,
}
