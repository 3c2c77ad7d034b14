// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for the alert timing
//! values. The fade duration in particular is read by both the lifecycle
//! scheduler and the banner styling, so it must only ever be defined here.
//!
//! # Categories
//!
//! - **Timing**: Alert lifecycle durations
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Delay in milliseconds before a discovered alert becomes visible.
///
/// Deliberately not configurable: it only exists to let the freshly laid
/// out banner start its entrance transition from the transparent state.
pub const ENTER_DELAY_MS: u64 = 100;

/// Default hold time in milliseconds before the exit transition starts.
pub const DEFAULT_DISPLAY_MS: u64 = 1500;

/// Minimum allowed hold time.
pub const MIN_DISPLAY_MS: u64 = 250;

/// Maximum allowed hold time.
pub const MAX_DISPLAY_MS: u64 = 60_000;

/// Default fade transition length in milliseconds.
///
/// The same value drives the removal timer and the rendered opacity ramp.
pub const DEFAULT_FADE_MS: u64 = 500;

/// Minimum allowed fade length.
pub const MIN_FADE_MS: u64 = 50;

/// Maximum allowed fade length.
pub const MAX_FADE_MS: u64 = 5_000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default capacity of the diagnostics event buffer.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 256;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 4096;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Timing validation
    assert!(ENTER_DELAY_MS > 0);
    assert!(MIN_DISPLAY_MS > ENTER_DELAY_MS);
    assert!(MAX_DISPLAY_MS >= MIN_DISPLAY_MS);
    assert!(DEFAULT_DISPLAY_MS >= MIN_DISPLAY_MS);
    assert!(DEFAULT_DISPLAY_MS <= MAX_DISPLAY_MS);
    assert!(MAX_FADE_MS >= MIN_FADE_MS);
    assert!(DEFAULT_FADE_MS >= MIN_FADE_MS);
    assert!(DEFAULT_FADE_MS <= MAX_FADE_MS);

    // Diagnostics validation
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults_are_valid() {
        assert_eq!(ENTER_DELAY_MS, 100);
        assert_eq!(DEFAULT_DISPLAY_MS, 1500);
        assert_eq!(DEFAULT_FADE_MS, 500);
        assert!(DEFAULT_DISPLAY_MS > ENTER_DELAY_MS);
    }

    #[test]
    fn diagnostics_defaults_are_valid() {
        assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
        assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
    }
}
