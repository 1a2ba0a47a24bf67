// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`toast`]: Toast timing types ([`ToastDuration`](toast::ToastDuration),
//!   [`ExitDelay`](toast::ExitDelay))

pub mod toast;
