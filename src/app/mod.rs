// SPDX-License-Identifier: MPL-2.0
//! Demo application wiring a [`ToastQueue`] to the Iced runtime.
//!
//! The window offers one button per severity. Each press enqueues a toast;
//! the region in the configured corner shows the visible set, and a periodic
//! tick closes toasts whose timer expired.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, paths, Config};
use crate::queue::{Clock, SystemClock, ToastQueue};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{self, Severity, Toast, ToastContent};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Root Iced state.
pub struct App {
    queue: ToastQueue<ToastContent>,
    config: Config,
    /// Number of toasts enqueued from the buttons, used to number titles.
    enqueued: u32,
    /// Visible-set notifications received by the region subscriber.
    region_updates: Rc<Cell<u64>>,
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced requires a `Fn` boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

/// Applies CLI overrides on top of the loaded settings.
fn apply_flags(config: &mut Config, flags: &Flags) {
    if let Some(max_visible) = flags.max_visible {
        config.queue.max_visible_toasts = Some(max_visible);
    }
    if let Some(timeout_ms) = flags.timeout_ms {
        config.queue.default_timeout_ms = Some(timeout_ms);
    }
}

impl App {
    /// Loads settings, applies flags and builds the queue.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        if !paths::init_cli_override(flags.config_dir.clone()) {
            tracing::debug!(
                ignored = ?flags.config_dir,
                "config dir override already recorded, keeping the first"
            );
        }
        let (mut config, warning) = config::load();
        apply_flags(&mut config, &flags);

        let mut app = Self::with_clock(config, Rc::new(SystemClock));
        if let Some(warning) = warning {
            app.enqueue(ToastContent::warning("Settings not loaded", warning));
        }
        (app, Task::none())
    }

    /// Builds the application around a queue driven by `clock`.
    pub fn with_clock(config: Config, clock: Rc<dyn Clock>) -> Self {
        let mut queue = ToastQueue::with_clock(config.queue_options(), clock);

        let region_updates = Rc::new(Cell::new(0));
        let counter = Rc::clone(&region_updates);
        queue.subscribe(move |visible: &[crate::queue::Toast<ToastContent>]| {
            counter.set(counter.get() + 1);
            tracing::info!(visible = visible.len(), "toast region updated");
        });

        tracing::debug!(
            max_visible = queue.max_visible_toasts(),
            position = ?config.position(),
            "toast queue ready"
        );

        Self {
            queue,
            config,
            enqueued: 0,
            region_updates,
        }
    }

    #[must_use]
    pub fn queue(&self) -> &ToastQueue<ToastContent> {
        &self.queue
    }

    #[must_use]
    pub fn region_updates(&self) -> u64 {
        self.region_updates.get()
    }

    fn enqueue(&mut self, content: ToastContent) {
        let options = content.severity.toast_options(&self.config);
        self.queue.add(content, options);
    }

    fn sample_content(&self, severity: Severity) -> ToastContent {
        let n = self.enqueued;
        match severity {
            Severity::Success => ToastContent::success(
                format!("Saved #{n}"),
                "Your changes have been stored.",
            ),
            Severity::Info => ToastContent::info(
                format!("Heads up #{n}"),
                "A new version of this page is available.",
            ),
            Severity::Warning => ToastContent::warning(
                format!("Low space #{n}"),
                "Less than 10% of storage remains.",
            ),
            Severity::Error => ToastContent::error(
                format!("Upload failed #{n}"),
                "The server rejected the file. Close this toast to dismiss it.",
            ),
        }
    }

    fn title(&self) -> String {
        match self.queue.len() {
            0 => "Iced Toasts".to_string(),
            n => format!("Iced Toasts ({n})"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.queue.next_deadline().is_some())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Enqueue(severity) => {
                self.enqueued += 1;
                let content = self.sample_content(severity);
                self.enqueue(content);
            }
            Message::ClearAll => self.queue.clear(),
            Message::Toast(toast_message) => notifications::update(&mut self.queue, &toast_message),
            Message::Tick(_) => {
                let expired = self.queue.tick();
                if !expired.is_empty() {
                    tracing::debug!(count = expired.len(), "toasts expired");
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let heading = Text::new("Toast queue").size(typography::TITLE_MD);

        let severity_button = |label: &'static str, severity: Severity| {
            button(Text::new(label).size(typography::BODY))
                .on_press(Message::Enqueue(severity))
                .padding(spacing::XS)
        };
        let buttons = Row::new()
            .spacing(spacing::XS)
            .push(severity_button("Success", Severity::Success))
            .push(severity_button("Info", Severity::Info))
            .push(severity_button("Warning", Severity::Warning))
            .push(severity_button("Error", Severity::Error))
            .push(
                button(Text::new("Clear all").size(typography::BODY))
                    .on_press(Message::ClearAll)
                    .padding(spacing::XS)
                    .style(button::secondary),
            );

        let status = Text::new(format!(
            "{} visible, {} pending, max {} - {} region updates",
            self.queue.visible_count(),
            self.queue.pending_count(),
            self.queue.max_visible_toasts(),
            self.region_updates(),
        ))
        .size(typography::BODY);

        let controls = Container::new(
            Column::new()
                .spacing(spacing::MD)
                .push(heading)
                .push(buttons)
                .push(status),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG);

        let region = Toast::view_region(self.queue.visible_toasts(), self.config.position())
            .map(Message::Toast);

        Stack::new().push(controls).push(region).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QueueConfig;
    use crate::queue::ManualClock;
    use std::time::Duration;

    fn app_with(max_visible: usize) -> (App, ManualClock) {
        let clock = ManualClock::new();
        let config = Config {
            queue: QueueConfig {
                max_visible_toasts: Some(max_visible),
                ..QueueConfig::default()
            },
            ..Config::default()
        };
        (App::with_clock(config, Rc::new(clock.clone())), clock)
    }

    #[test]
    fn enqueue_adds_toast_and_notifies_region() {
        let (mut app, _) = app_with(2);
        let _ = app.update(Message::Enqueue(Severity::Success));

        assert_eq!(app.queue().visible_count(), 1);
        assert_eq!(app.region_updates(), 1);
        assert_eq!(app.title(), "Iced Toasts (1)");
    }

    #[test]
    fn overflowing_toasts_wait_in_pending() {
        let (mut app, _) = app_with(2);
        for _ in 0..3 {
            let _ = app.update(Message::Enqueue(Severity::Info));
        }

        assert_eq!(app.queue().visible_count(), 2);
        assert_eq!(app.queue().pending_count(), 1);
    }

    #[test]
    fn close_message_promotes_pending_toast() {
        let (mut app, _) = app_with(1);
        let _ = app.update(Message::Enqueue(Severity::Error));
        let _ = app.update(Message::Enqueue(Severity::Error));
        let first = app.queue().visible_toasts()[0].key();

        let _ = app.update(Message::Toast(notifications::Message::Close(first)));

        assert_eq!(app.queue().visible_count(), 1);
        assert_eq!(app.queue().pending_count(), 0);
        assert_ne!(app.queue().visible_toasts()[0].key(), first);
    }

    #[test]
    fn tick_expires_non_error_toasts_only() {
        let (mut app, clock) = app_with(5);
        let _ = app.update(Message::Enqueue(Severity::Success));
        let _ = app.update(Message::Enqueue(Severity::Error));

        clock.advance(Duration::from_millis(config::DEFAULT_TOAST_TIMEOUT_MS));
        let _ = app.update(Message::Tick(clock.now()));

        assert_eq!(app.queue().len(), 1);
        assert_eq!(
            app.queue().visible_toasts()[0].content().severity,
            Severity::Error
        );
    }

    #[test]
    fn clear_all_empties_queue() {
        let (mut app, _) = app_with(1);
        let _ = app.update(Message::Enqueue(Severity::Warning));
        let _ = app.update(Message::Enqueue(Severity::Warning));
        let _ = app.update(Message::ClearAll);

        assert!(app.queue().is_empty());
        assert_eq!(app.title(), "Iced Toasts");
    }

    #[test]
    fn flags_override_config() {
        let mut config = Config::default();
        let flags = Flags {
            max_visible: Some(2),
            timeout_ms: Some(8_000),
            ..Flags::default()
        };
        apply_flags(&mut config, &flags);

        assert_eq!(config.queue_options().max_visible_toasts, 2);
        assert_eq!(
            config.default_toast_options().timeout,
            Some(Duration::from_secs(8))
        );
    }
}
