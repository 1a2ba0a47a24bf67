// SPDX-License-Identifier: MPL-2.0
//! Toast timing newtypes.
//!
//! These wrappers reject unusable timing values up front so the store and
//! the scheduler never have to validate at usage sites.

use std::time::Duration;

// =============================================================================
// Duration Bounds
// =============================================================================

/// Auto-close duration bounds applied to values read from the config file
/// (0.5 to 120 seconds).
pub mod duration_bounds {
    /// Minimum configured auto-close duration in seconds.
    pub const MIN_SECS: f32 = 0.5;
    /// Maximum configured auto-close duration in seconds.
    pub const MAX_SECS: f32 = 120.0;
    /// Default auto-close duration in seconds.
    pub const DEFAULT_SECS: f32 = 3.0;
}

// =============================================================================
// ToastDuration
// =============================================================================

/// Time a toast stays visible before auto-closing, in seconds.
///
/// Always finite and strictly positive. Non-finite, zero or negative input
/// falls back to the default; any other value is kept as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastDuration(f32);

impl ToastDuration {
    /// Creates a new duration, replacing unusable values with the default.
    #[must_use]
    pub fn new(secs: f32) -> Self {
        if secs.is_finite() && secs > 0.0 {
            Self(secs)
        } else {
            Self::default()
        }
    }

    /// Creates a duration from a stored setting, clamped to
    /// [`duration_bounds`].
    #[must_use]
    pub fn clamped(secs: f32) -> Self {
        let secs = Self::new(secs).0;
        Self(secs.clamp(duration_bounds::MIN_SECS, duration_bounds::MAX_SECS))
    }

    /// Returns the raw value in seconds.
    #[must_use]
    pub fn secs(self) -> f32 {
        self.0
    }

    /// Returns the value as a [`Duration`], saturating at [`Duration::MAX`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::try_from_secs_f32(self.0).unwrap_or(Duration::MAX)
    }
}

impl Default for ToastDuration {
    fn default() -> Self {
        Self(duration_bounds::DEFAULT_SECS)
    }
}

// =============================================================================
// Exit Delay Bounds
// =============================================================================

/// Exit animation window bounds (0 to 5000 milliseconds).
pub mod exit_delay_bounds {
    /// Minimum exit delay in milliseconds (purge on the next tick).
    pub const MIN_MS: u64 = 0;
    /// Maximum exit delay in milliseconds.
    pub const MAX_MS: u64 = 5_000;
    /// Default exit delay in milliseconds.
    pub const DEFAULT_MS: u64 = 300;
}

// =============================================================================
// ExitDelay
// =============================================================================

/// Time a closed toast is kept around for its exit animation before purge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitDelay(u64);

impl ExitDelay {
    /// Creates a new exit delay, clamping to the valid range.
    #[must_use]
    pub fn new(value_ms: u64) -> Self {
        Self(value_ms.clamp(exit_delay_bounds::MIN_MS, exit_delay_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the delay as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ExitDelay {
    fn default() -> Self {
        Self(exit_delay_bounds::DEFAULT_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_duration_keeps_any_positive_value() {
        assert_eq!(ToastDuration::new(0.1).secs(), 0.1);
        assert_eq!(ToastDuration::new(5.0).secs(), 5.0);
        assert_eq!(ToastDuration::new(300.0).secs(), 300.0);
        assert_eq!(
            ToastDuration::new(300.0).as_duration(),
            Duration::from_secs(300)
        );
    }

    #[test]
    fn toast_duration_rejects_unusable_values() {
        assert_eq!(ToastDuration::new(f32::NAN), ToastDuration::default());
        assert_eq!(ToastDuration::new(f32::INFINITY), ToastDuration::default());
        assert_eq!(ToastDuration::new(0.0), ToastDuration::default());
        assert_eq!(ToastDuration::new(-2.0), ToastDuration::default());
    }

    #[test]
    fn toast_duration_default_and_conversion() {
        let duration = ToastDuration::default();
        assert_eq!(duration.secs(), duration_bounds::DEFAULT_SECS);
        assert_eq!(duration.as_duration(), Duration::from_secs(3));
    }

    #[test]
    fn toast_duration_saturates_huge_values() {
        assert_eq!(ToastDuration::new(f32::MAX).as_duration(), Duration::MAX);
    }

    #[test]
    fn clamped_duration_stays_in_config_bounds() {
        assert_eq!(ToastDuration::clamped(0.1).secs(), duration_bounds::MIN_SECS);
        assert_eq!(ToastDuration::clamped(1_000.0).secs(), duration_bounds::MAX_SECS);
        assert_eq!(ToastDuration::clamped(5.0).secs(), 5.0);
        assert_eq!(ToastDuration::clamped(f32::NAN), ToastDuration::default());
    }

    #[test]
    fn exit_delay_clamps() {
        assert_eq!(ExitDelay::new(60_000).value(), exit_delay_bounds::MAX_MS);
        assert_eq!(ExitDelay::new(0).value(), 0);
        assert_eq!(ExitDelay::default().as_duration(), Duration::from_millis(300));
    }
}
