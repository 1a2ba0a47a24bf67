// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Notifications are transient messages that inform users about actions
//! (save success, errors, etc.) without blocking interaction. This module
//! owns their lifecycle; drawing them is left to the rendering layer, which
//! follows [`ToastEvent`]s or polls [`ToastStore::items`].
//!
//! # Components
//!
//! - [`store`] - `ToastStore`: ids, ordering, grouping, uniqueness, hide operations
//! - [`scheduler`] - `TimerScheduler`: cancellable auto-close and purge deadlines
//! - [`runtime`] - `ToastRuntime`: tokio task that drives a store on real time
//! - [`item`] / [`options`] - the toast record and its per-call options
//!
//! # Usage
//!
//! ```
//! use toast_queue::config::ToastConfig;
//! use toast_queue::notifications::{ToastOptions, ToastStore};
//!
//! let mut store = ToastStore::new(ToastConfig::default());
//!
//! let id = store
//!     .show("Image saved", ToastOptions::success().group("editor"))
//!     .expect("non-empty message");
//! assert_eq!(store.active_count(), 1);
//!
//! store.hide_group("editor");
//! assert!(store.get(id).is_some_and(|toast| toast.is_closed()));
//! ```
//!
//! # Lifecycle
//!
//! `active → closed → removed`. A closed toast stays listed for the
//! configured exit delay so it can animate out, then it is purged on the
//! next [`ToastStore::tick`]. Ids are never reused.

pub mod clock;
pub mod event;
pub mod item;
pub mod options;
pub mod runtime;
pub mod scheduler;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock, TokioClock};
pub use event::{CloseReason, ToastEvent};
pub use item::{ToastId, ToastItem, ToastSnapshot, Variant};
pub use options::{ToastCallback, ToastOptions};
pub use runtime::{ToastHandle, ToastRuntime};
pub use scheduler::{DueTimer, TimerHandle, TimerKind, TimerScheduler};
pub use store::{TickReport, ToastStore};
