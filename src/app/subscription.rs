// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for toast auto-dismiss.
///
/// Only runs while there are toasts whose timers could fire.
pub fn create_tick_subscription(has_timers: bool) -> Subscription<Message> {
    if has_timers {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
