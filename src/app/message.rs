// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::notifications::{self, Severity};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Enqueue a sample toast of the given severity.
    Enqueue(Severity),
    /// Remove every toast.
    ClearAll,
    /// Forwarded toast widget message.
    Toast(notifications::Message),
    /// Periodic tick driving auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    /// Overrides `queue.max_visible_toasts` from the config file.
    pub max_visible: Option<usize>,
    /// Overrides `queue.default_timeout_ms` from the config file.
    pub timeout_ms: Option<u64>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOASTS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
