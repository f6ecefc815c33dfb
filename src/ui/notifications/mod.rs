// SPDX-License-Identifier: MPL-2.0
//! Toast display layer for a [`ToastQueue`] of [`ToastContent`].
//!
//! # Components
//!
//! - [`content`] - `ToastContent` payload and `Severity` levels
//! - [`toast`] - Toast card and region widgets
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::ui::notifications::{self, Toast, ToastContent};
//!
//! // Enqueue
//! queue.add(ToastContent::success("Saved", "Settings written"), options);
//!
//! // In your view function, render the region
//! let overlay = Toast::view_region(queue.visible_toasts(), position).map(Message::Toast);
//!
//! // In your update function
//! notifications::update(&mut queue, &message);
//! ```

mod content;
mod toast;

pub use content::{Severity, ToastContent};
pub use toast::Toast;

use crate::queue::{ToastKey, ToastQueue};

/// Messages emitted by the toast widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The close button of a toast was pressed.
    Close(ToastKey),
    /// The pointer entered the toast region.
    PauseTimers,
    /// The pointer left the toast region.
    ResumeTimers,
    /// Periodic check for expired toasts.
    Tick,
}

/// Applies a toast widget message to the queue.
pub fn update(queue: &mut ToastQueue<ToastContent>, message: &Message) {
    match message {
        Message::Close(key) => {
            queue.close(*key);
        }
        Message::PauseTimers => queue.pause_all(),
        Message::ResumeTimers => queue.resume_all(),
        Message::Tick => {
            queue.tick();
        }
    }
}
