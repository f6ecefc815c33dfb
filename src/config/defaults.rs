// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Queue**: Visible toast bound and auto-dismiss timeouts
//! - **Tick**: Polling interval of the auto-dismiss driver

// ==========================================================================
// Queue Defaults
// ==========================================================================

/// Default number of toasts displayed at once.
pub const DEFAULT_MAX_VISIBLE_TOASTS: usize = 5;

/// Minimum allowed visible toast bound.
pub const MIN_MAX_VISIBLE_TOASTS: usize = 1;

/// Maximum allowed visible toast bound.
pub const MAX_MAX_VISIBLE_TOASTS: usize = 20;

/// Shortest auto-dismiss timeout written to `settings.toml` (in milliseconds).
/// Toasts need enough time to be read before they disappear. Queues built
/// without a config have no floor.
pub const DEFAULT_MIN_TIMEOUT_MS: u64 = 5_000;

/// Upper bound for the configurable minimum timeout (in milliseconds).
pub const MAX_MIN_TIMEOUT_MS: u64 = 60_000;

/// Timeout applied by the demo application when none is given (in milliseconds).
pub const DEFAULT_TOAST_TIMEOUT_MS: u64 = 5_000;

/// Longest accepted default timeout (in milliseconds).
pub const MAX_TOAST_TIMEOUT_MS: u64 = 600_000;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Interval between auto-dismiss checks (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_MAX_VISIBLE_TOASTS >= MIN_MAX_VISIBLE_TOASTS);
    assert!(DEFAULT_MAX_VISIBLE_TOASTS <= MAX_MAX_VISIBLE_TOASTS);
    assert!(DEFAULT_MIN_TIMEOUT_MS <= MAX_MIN_TIMEOUT_MS);
    assert!(DEFAULT_TOAST_TIMEOUT_MS >= DEFAULT_MIN_TIMEOUT_MS);
    assert!(DEFAULT_TOAST_TIMEOUT_MS <= MAX_TOAST_TIMEOUT_MS);
    assert!(TICK_INTERVAL_MS < DEFAULT_MIN_TIMEOUT_MS);
};
