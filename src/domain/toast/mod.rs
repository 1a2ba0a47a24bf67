// SPDX-License-Identifier: MPL-2.0
//! Toast domain types.
//!
//! Value objects for notification timing that are independent of any
//! runtime or presentation layer.

pub mod newtypes;

pub use newtypes::{ExitDelay, ToastDuration};
