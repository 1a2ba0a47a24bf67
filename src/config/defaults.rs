// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! applied to `show` calls that omit an option.
//!
//! # Categories
//!
//! - **Timing**: Auto-close duration and exit animation window
//! - **Behavior**: Auto-close and click-to-close flags
//! - **Runtime**: Channel capacities for the async driver

use crate::domain::toast::newtypes::{duration_bounds, exit_delay_bounds};

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default time before a toast auto-closes (in seconds).
pub const DEFAULT_DURATION_SECS: f32 = duration_bounds::DEFAULT_SECS;

/// Minimum auto-close duration (in seconds).
pub const MIN_DURATION_SECS: f32 = duration_bounds::MIN_SECS;

/// Maximum auto-close duration (in seconds).
pub const MAX_DURATION_SECS: f32 = duration_bounds::MAX_SECS;

/// Default exit animation window before a closed toast is purged (in ms).
pub const DEFAULT_EXIT_DELAY_MS: u64 = exit_delay_bounds::DEFAULT_MS;

/// Maximum exit animation window (in ms).
pub const MAX_EXIT_DELAY_MS: u64 = exit_delay_bounds::MAX_MS;

// ==========================================================================
// Behavior Defaults
// ==========================================================================

/// Toasts close themselves unless told otherwise.
pub const DEFAULT_AUTO_CLOSE: bool = true;

/// Clicking a toast dismisses it unless told otherwise.
pub const DEFAULT_CLOSE_ON_CLICK: bool = true;

// ==========================================================================
// Runtime Defaults
// ==========================================================================

/// Capacity of the command channel between handles and the runtime loop.
pub const COMMAND_CHANNEL_CAPACITY: usize = 64;

/// Capacity of the lifecycle event broadcast channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 256;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_DURATION_SECS > 0.0);
    assert!(MAX_DURATION_SECS > MIN_DURATION_SECS);
    assert!(DEFAULT_DURATION_SECS >= MIN_DURATION_SECS);
    assert!(DEFAULT_DURATION_SECS <= MAX_DURATION_SECS);

    assert!(DEFAULT_EXIT_DELAY_MS <= MAX_EXIT_DELAY_MS);

    assert!(COMMAND_CHANNEL_CAPACITY > 0);
    assert!(EVENT_CHANNEL_CAPACITY > 0);
};
