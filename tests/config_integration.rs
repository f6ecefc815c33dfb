// SPDX-License-Identifier: MPL-2.0
use iced_toasts::config::{self, Config, QueueConfig, TimerStartMode};
use iced_toasts::queue::{ManualClock, TimerStart, ToastQueue};
use iced_toasts::ui::notifications::{Severity, ToastContent};
use std::rc::Rc;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn queue_built_from_saved_settings_honours_them() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let settings = Config {
        queue: QueueConfig {
            max_visible_toasts: Some(2),
            default_timeout_ms: Some(7_000),
            timer_start: Some(TimerStartMode::OnVisible),
            ..QueueConfig::default()
        },
        ..Config::default()
    };
    config::save_with_override(&settings, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let options = loaded.queue_options();
    assert_eq!(options.max_visible_toasts, 2);
    assert_eq!(options.timer_start, TimerStart::OnVisible);

    let clock = ManualClock::new();
    let mut queue = ToastQueue::with_clock(options, Rc::new(clock.clone()));
    for i in 0..3 {
        let content = ToastContent::success(format!("toast {i}"), "saved");
        let toast_options = Severity::Success.toast_options(&loaded);
        queue.add(content, toast_options);
    }
    assert_eq!(queue.visible_count(), 2);

    // The pending toast's timer has not started yet
    clock.advance(Duration::from_secs(7));
    let expired = queue.tick();
    assert_eq!(expired.len(), 2);
    assert_eq!(queue.visible_count(), 1);
    assert_eq!(queue.pending_count(), 0);

    clock.advance(Duration::from_secs(7));
    assert_eq!(queue.tick().len(), 1);
    assert!(queue.is_empty());
}

#[test]
fn written_file_uses_sections() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    config::save_to_path(&Config::default(), &path).expect("Failed to write config file");

    let content = std::fs::read_to_string(&path).expect("Failed to read config file");
    assert!(content.contains("[queue]"));
    assert!(content.contains("max_visible_toasts = 5"));
    assert!(content.contains("timer_start = \"on-add\""));
}
