// SPDX-License-Identifier: MPL-2.0
//! `toast_queue` is the notification engine of a UI component library.
//!
//! It keeps an explicitly owned store of toasts with ordered display,
//! grouping, duplicate suppression, lifecycle hooks and cancellable
//! auto-close timers, plus a tokio runtime that drives the store on real
//! time for multi-producer UIs.

#![doc(html_root_url = "https://docs.rs/toast_queue/0.1.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod notifications;

pub use error::{Error, Result};
pub use notifications::{ToastHandle, ToastId, ToastOptions, ToastRuntime, ToastStore, Variant};
