// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the floating alert lifecycle, driven through the
//! public API with a simulated clock: timers are applied in deadline order,
//! exactly as the event loop would deliver them.

use iced_alerts::config::Config;
use iced_alerts::ui::alerts::{Alert, Manager, Message, Severity, Timer, Timings};
use std::time::Duration;

/// Applies every timer with a deadline in `(from, to]` milliseconds,
/// in deadline order.
fn advance(manager: &mut Manager, timers: &[Timer], from: u64, to: u64) {
    let mut due: Vec<&Timer> = timers
        .iter()
        .filter(|timer| {
            timer.delay > Duration::from_millis(from) && timer.delay <= Duration::from_millis(to)
        })
        .collect();
    due.sort_by_key(|timer| timer.delay);
    for timer in due {
        let _ = manager.handle_message(&timer.message);
    }
}

fn default_manager() -> Manager {
    let config = Config {
        display_ms: Some(1500),
        fade_ms: Some(500),
    };
    Manager::new(Timings::from_config(&config))
}

#[test]
fn seeded_alerts_run_the_full_lifecycle() {
    let mut manager = default_manager();
    let a = manager.push(Alert::floating(Severity::Success, "Changes saved"));
    let b = manager.push(Alert::floating(Severity::Info, "Welcome back"));
    let timers = manager.manage();

    advance(&mut manager, &timers, 0, 50);
    assert!(!manager.is_visible(a) && !manager.is_visible(b));
    assert!(manager.is_attached(a) && manager.is_attached(b));

    advance(&mut manager, &timers, 50, 200);
    assert!(manager.is_visible(a) && manager.is_visible(b));

    advance(&mut manager, &timers, 200, 1600);
    assert!(!manager.is_visible(a) && !manager.is_visible(b));
    assert!(manager.is_attached(a) && manager.is_attached(b));

    advance(&mut manager, &timers, 1600, 2100);
    assert!(!manager.is_attached(a) && !manager.is_attached(b));
}

#[test]
fn an_empty_view_schedules_nothing() {
    let mut manager = default_manager();
    let timers = manager.manage();

    assert!(timers.is_empty());
    assert!(manager.is_empty());
}

#[test]
fn pinned_alerts_outlive_their_floating_neighbors() {
    let mut manager = default_manager();
    let pinned = manager.push(Alert::pinned(Severity::Error, "Could not save"));
    let floating = manager.push(Alert::floating(Severity::Success, "Done"));
    let timers = manager.manage();

    advance(&mut manager, &timers, 0, 5000);

    assert!(manager.is_attached(pinned));
    assert!(!manager.is_visible(pinned));
    assert!(!manager.is_attached(floating));
}

#[test]
fn manual_dismissal_detaches_after_the_fade() {
    let mut manager = default_manager();
    let id = manager.push(Alert::pinned(Severity::Warning, "Storage is almost full"));
    manager.manage();

    let followups = manager.handle_message(&Message::Dismiss(id));
    assert_eq!(followups.len(), 1);
    assert_eq!(followups[0].delay, Duration::from_millis(500));
    assert!(manager.is_attached(id));

    let _ = manager.handle_message(&followups[0].message);
    assert!(!manager.is_attached(id));
}

#[test]
fn alerts_attached_after_boot_are_left_alone() {
    let mut manager = default_manager();
    manager.push(Alert::floating(Severity::Info, "early"));
    let timers = manager.manage();

    let late = manager.push(Alert::floating(Severity::Info, "late"));

    advance(&mut manager, &timers, 0, 2100);
    assert!(manager.is_attached(late));
    assert!(!manager.is_visible(late));
}

#[test]
fn custom_timings_shift_the_whole_schedule() {
    let config = Config {
        display_ms: Some(3000),
        fade_ms: Some(250),
    };
    let mut manager = Manager::new(Timings::from_config(&config));
    let id = manager.push(Alert::floating(Severity::Info, "slow page"));
    let timers = manager.manage();

    advance(&mut manager, &timers, 0, 2900);
    assert!(manager.is_visible(id));

    advance(&mut manager, &timers, 2900, 3100);
    assert!(!manager.is_visible(id));
    assert!(manager.is_attached(id));

    advance(&mut manager, &timers, 3100, 3300);
    assert!(!manager.is_attached(id));
}
