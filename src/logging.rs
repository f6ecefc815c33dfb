// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup for the demo binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the application.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "iced_toasts=info";

/// Installs a formatted stderr subscriber honouring `RUST_LOG`.
///
/// `verbose` switches the fallback filter to `debug` so queue mutations show
/// up without setting `RUST_LOG`. Returns `false` if a global subscriber
/// was already installed.
pub fn init(verbose: bool) -> bool {
    let fallback = if verbose {
        "iced_toasts=debug"
    } else {
        DEFAULT_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
