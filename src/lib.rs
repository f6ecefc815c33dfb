// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a toast notification queue with an Iced display layer.
//!
//! The [`queue`] module holds the toolkit-independent core: a bounded,
//! ordered [`ToastQueue`](queue::ToastQueue) with synchronous subscribers
//! and pausable auto-dismiss timers. [`ui::notifications`] renders the
//! visible toasts with Iced widgets, and [`app`] is a small demo window.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod queue;
pub mod ui;
