// SPDX-License-Identifier: MPL-2.0
//! Per-call options for [`ToastStore::show`](super::ToastStore::show).
//!
//! Every field left unset falls back to the store's
//! [`ToastConfig`](crate::config::ToastConfig).

use super::item::{ToastItem, Variant};
use crate::domain::toast::ToastDuration;
use std::fmt;

/// Lifecycle hook. Runs at most once, while the store is still borrowed, so it
/// cannot call back into the store.
pub type ToastCallback = Box<dyn FnOnce(&ToastItem) + Send + 'static>;

/// Options for a single toast.
#[derive(Default)]
pub struct ToastOptions {
    pub(crate) variant: Variant,
    pub(crate) group: Option<String>,
    pub(crate) duration: Option<ToastDuration>,
    pub(crate) auto_close: Option<bool>,
    pub(crate) unique: bool,
    pub(crate) close_on_click: Option<bool>,
    pub(crate) on_show: Option<ToastCallback>,
    pub(crate) on_close: Option<ToastCallback>,
}

impl ToastOptions {
    /// Creates options with every field left to the store defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates error options.
    #[must_use]
    pub fn error() -> Self {
        Self::new().variant(Variant::Error)
    }

    /// Creates success options.
    #[must_use]
    pub fn success() -> Self {
        Self::new().variant(Variant::Success)
    }

    /// Creates warning options.
    #[must_use]
    pub fn warning() -> Self {
        Self::new().variant(Variant::Warning)
    }

    /// Creates info options.
    #[must_use]
    pub fn info() -> Self {
        Self::new().variant(Variant::Info)
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Puts the toast in a group so it can be dismissed with its siblings.
    #[must_use]
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Sets a custom auto-close duration, overriding the configured default.
    #[must_use]
    pub fn duration(mut self, duration: ToastDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Shorthand for [`Self::duration`] in seconds.
    #[must_use]
    pub fn duration_secs(self, secs: f32) -> Self {
        self.duration(ToastDuration::new(secs))
    }

    #[must_use]
    pub fn auto_close(mut self, auto_close: bool) -> Self {
        self.auto_close = Some(auto_close);
        self
    }

    /// Suppresses duplicates: while an active toast has the same
    /// group and message, `show` returns its id instead.
    #[must_use]
    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    #[must_use]
    pub fn close_on_click(mut self, close_on_click: bool) -> Self {
        self.close_on_click = Some(close_on_click);
        self
    }

    /// Runs once, right after the toast is added.
    #[must_use]
    pub fn on_show(mut self, callback: impl FnOnce(&ToastItem) + Send + 'static) -> Self {
        self.on_show = Some(Box::new(callback));
        self
    }

    /// Runs once, when the toast is hidden (manually, by click or by timer).
    #[must_use]
    pub fn on_close(mut self, callback: impl FnOnce(&ToastItem) + Send + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for ToastOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastOptions")
            .field("variant", &self.variant)
            .field("group", &self.group)
            .field("duration", &self.duration)
            .field("auto_close", &self.auto_close)
            .field("unique", &self.unique)
            .field("close_on_click", &self.close_on_click)
            .field("on_show", &self.on_show.is_some())
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}
