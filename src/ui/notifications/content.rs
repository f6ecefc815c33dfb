// SPDX-License-Identifier: MPL-2.0
//! Toast payload rendered by the display layer.

use crate::config::Config;
use crate::queue::ToastOptions;
use crate::ui::design_tokens::palette;
use iced::Color;

/// Severity level determines the accent color, icon and dismissal policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    #[default]
    Success,
    /// Informational message (blue).
    Info,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Error requiring attention (red, manual dismiss).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Glyph shown at the start of the toast card.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Info => "ℹ",
            Severity::Warning | Severity::Error => "⚠",
        }
    }

    /// Errors stay on screen until the user closes them.
    #[must_use]
    pub fn is_persistent(self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Enqueue options for this severity under the given settings.
    #[must_use]
    pub fn toast_options(self, config: &Config) -> ToastOptions {
        if self.is_persistent() {
            ToastOptions::default()
        } else {
            config.default_toast_options()
        }
    }
}

/// Title and description of a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastContent {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl ToastContent {
    /// Creates a success toast.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::default(),
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description)
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description).with_severity(Severity::Info)
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description).with_severity(Severity::Warning)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description).with_severity(Severity::Error)
    }

    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}
