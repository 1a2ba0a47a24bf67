// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastStore` owns every toast, assigns ids, keeps insertion order and
//! drives the `active → closed → removed` transitions through its timer
//! scheduler. Unknown ids and empty messages are silently ignored.

use super::clock::{Clock, SystemClock};
use super::event::{CloseReason, EventLog, ToastEvent};
use super::item::{IdAllocator, ToastId, ToastItem, Variant};
use super::options::ToastOptions;
use super::scheduler::{TimerKind, TimerScheduler};
use crate::config::ToastConfig;
use std::sync::Arc;
use std::time::Instant;

/// What a call to [`ToastStore::tick`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Toasts hidden by their auto-close timer.
    pub expired: Vec<ToastId>,
    /// Closed toasts purged after their exit delay.
    pub removed: Vec<ToastId>,
}

impl TickReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expired.is_empty() && self.removed.is_empty()
    }
}

/// Owns the tracked toasts and their timers.
#[derive(Debug)]
pub struct ToastStore {
    /// Tracked toasts in insertion order, closing ones included.
    items: Vec<ToastItem>,
    ids: IdAllocator,
    timers: TimerScheduler,
    events: EventLog,
    config: ToastConfig,
    clock: Arc<dyn Clock>,
}

impl ToastStore {
    /// Creates an empty store on the system clock.
    #[must_use]
    pub fn new(config: ToastConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates an empty store reading time from `clock`.
    #[must_use]
    pub fn with_clock(config: ToastConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            items: Vec::new(),
            ids: IdAllocator::default(),
            timers: TimerScheduler::new(),
            events: EventLog::default(),
            config,
            clock,
        }
    }

    /// Turns on lifecycle event recording for [`Self::drain_events`].
    ///
    /// Recorded events are kept until drained, so only enable this when
    /// something drains after each operation.
    #[must_use]
    pub fn record_events(mut self) -> Self {
        self.events = EventLog::recording();
        self
    }

    /// Returns whether lifecycle events are being recorded.
    #[must_use]
    pub fn records_events(&self) -> bool {
        self.events.is_recording()
    }

    /// Returns the defaults applied to `show` calls.
    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Replaces the defaults. Already tracked toasts keep their settings.
    pub fn set_config(&mut self, config: ToastConfig) {
        self.config = config;
    }

    /// Shows a toast and returns its id.
    ///
    /// Returns `None` for an empty message. With `unique`, an active toast
    /// with the same group and message is reused and its id returned.
    pub fn show(&mut self, message: impl Into<String>, options: ToastOptions) -> Option<ToastId> {
        let message = message.into();
        if message.trim().is_empty() {
            tracing::debug!("ignoring toast with empty message");
            return None;
        }

        let ToastOptions {
            variant,
            group,
            duration,
            auto_close,
            unique,
            close_on_click,
            on_show,
            on_close,
        } = options;
        let group = group.or_else(|| self.config.group.clone());

        if unique {
            if let Some(existing) = self
                .active()
                .find(|item| item.same_key(group.as_deref(), &message))
            {
                tracing::debug!(toast = %existing.id, "duplicate unique toast suppressed");
                return Some(existing.id);
            }
        }

        let now = self.clock.now();
        let id = self.ids.next();
        let duration = duration.unwrap_or_else(|| self.config.duration());
        let auto_close = auto_close.unwrap_or(self.config.auto_close);
        // A duration past the clock's range never fires.
        let auto_close_timer = auto_close
            .then(|| now.checked_add(duration.as_duration()))
            .flatten()
            .map(|deadline| self.timers.schedule(id, TimerKind::AutoClose, deadline));

        let item = ToastItem {
            id,
            message,
            variant,
            group,
            unique,
            duration,
            auto_close,
            close_on_click: close_on_click.unwrap_or(self.config.close_on_click),
            closed: false,
            created_at: now,
            closed_at: None,
            auto_close_timer,
            on_close,
        };

        tracing::debug!(toast = %id, variant = %item.variant, group = ?item.group, auto_close, "toast shown");
        if let Some(callback) = on_show {
            callback(&item);
        }
        self.events.push(ToastEvent::Shown(item.snapshot()));
        self.items.push(item);

        Some(id)
    }

    /// Shows an error toast with default options.
    pub fn error(&mut self, message: impl Into<String>) -> Option<ToastId> {
        self.show(message, ToastOptions::error())
    }

    /// Shows a success toast with default options.
    pub fn success(&mut self, message: impl Into<String>) -> Option<ToastId> {
        self.show(message, ToastOptions::success())
    }

    /// Shows a warning toast with default options.
    pub fn warning(&mut self, message: impl Into<String>) -> Option<ToastId> {
        self.show(message, ToastOptions::warning())
    }

    /// Shows an info toast with default options.
    pub fn info(&mut self, message: impl Into<String>) -> Option<ToastId> {
        self.show(message, ToastOptions::info())
    }

    /// Hides a toast.
    ///
    /// Returns `true` if the toast was active. Hiding a closed or unknown id
    /// does nothing.
    pub fn hide(&mut self, id: ToastId) -> bool {
        self.close(id, CloseReason::Dismissed)
    }

    /// Hides every active toast. Returns how many were hidden.
    pub fn hide_all(&mut self) -> usize {
        let ids: Vec<ToastId> = self.active().map(ToastItem::id).collect();
        ids.into_iter()
            .filter(|id| self.close(*id, CloseReason::Dismissed))
            .count()
    }

    /// Hides every active toast in `group`. Returns how many were hidden.
    pub fn hide_group(&mut self, group: &str) -> usize {
        let ids: Vec<ToastId> = self
            .active()
            .filter(|item| item.group() == Some(group))
            .map(ToastItem::id)
            .collect();
        ids.into_iter()
            .filter(|id| self.close(*id, CloseReason::Dismissed))
            .count()
    }

    /// Handles a click on a rendered toast.
    ///
    /// Hides it only if it was created with `close_on_click`.
    pub fn click(&mut self, id: ToastId) -> bool {
        let closable = self
            .get(id)
            .is_some_and(|item| item.close_on_click && !item.closed);
        closable && self.close(id, CloseReason::Clicked)
    }

    /// Fires every timer that is due.
    ///
    /// Should be called whenever [`Self::next_deadline`] passes.
    pub fn tick(&mut self) -> TickReport {
        let now = self.clock.now();
        let mut report = TickReport::default();

        // A zero exit delay schedules the purge at `now`, so keep draining.
        loop {
            let due = self.timers.pop_due(now);
            if due.is_empty() {
                break;
            }
            for timer in due {
                match timer.kind {
                    TimerKind::AutoClose => {
                        if let Some(item) = self.item_mut(timer.id) {
                            // The timer has fired; there is nothing left to cancel.
                            item.auto_close_timer = None;
                        }
                        if self.close(timer.id, CloseReason::Expired) {
                            report.expired.push(timer.id);
                        }
                    }
                    TimerKind::Purge => {
                        if self.purge(timer.id) {
                            report.removed.push(timer.id);
                        }
                    }
                }
            }
        }

        report
    }

    /// Returns the earliest pending timer deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Takes the lifecycle events recorded since the last drain.
    ///
    /// Always empty unless the store was built with [`Self::record_events`].
    pub fn drain_events(&mut self) -> Vec<ToastEvent> {
        self.events.drain()
    }

    /// Returns a tracked toast, closing ones included.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ToastItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns every tracked toast in insertion order, closing ones included.
    pub fn items(&self) -> impl Iterator<Item = &ToastItem> {
        self.items.iter()
    }

    /// Returns the toasts that have not been hidden, in insertion order.
    pub fn active(&self) -> impl Iterator<Item = &ToastItem> {
        self.items.iter().filter(|item| !item.closed)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Returns the number of tracked toasts, closing ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the active toasts of a given variant.
    pub fn active_of(&self, variant: Variant) -> impl Iterator<Item = &ToastItem> {
        self.active().filter(move |item| item.variant == variant)
    }

    fn item_mut(&mut self, id: ToastId) -> Option<&mut ToastItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    fn close(&mut self, id: ToastId, reason: CloseReason) -> bool {
        let now = self.clock.now();
        let exit_delay = self.config.exit_delay();

        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        if item.closed {
            return false;
        }

        item.closed = true;
        item.closed_at = Some(now);
        if let Some(handle) = item.auto_close_timer.take() {
            self.timers.cancel(handle);
        }
        if let Some(callback) = item.on_close.take() {
            callback(&*item);
        }

        tracing::debug!(toast = %id, ?reason, "toast closed");
        self.timers
            .schedule(id, TimerKind::Purge, now + exit_delay.as_duration());
        self.events.push(ToastEvent::Closed { id, reason });
        true
    }

    fn purge(&mut self, id: ToastId) -> bool {
        let Some(pos) = self
            .items
            .iter()
            .position(|item| item.id == id && item.closed)
        else {
            return false;
        };

        self.items.remove(pos);
        self.timers.cancel_all(id);
        tracing::debug!(toast = %id, "toast removed");
        self.events.push(ToastEvent::Removed { id });
        true
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new(ToastConfig::default())
    }
}
