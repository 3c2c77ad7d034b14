// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the alert manager, diagnostics, and the
//! theme, and translates CLI flags into the startup alert set. This file
//! intentionally keeps policy decisions (seeding, config fallback, the
//! one-shot lifecycle trigger) close to the boot path so it is easy to audit
//! user-facing behavior.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::diagnostics::{DiagnosticsCollector, WarningEvent, WarningType};
use crate::ui::alerts::{self, Alert, Severity};
use iced::{window, Element, Subscription, Task, Theme};
use std::path::Path;

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 360;

/// Root Iced application state.
pub struct App {
    /// Attached alerts and their lifecycle phases.
    alerts: alerts::Manager,
    /// Buffered warning/error events.
    diagnostics: DiagnosticsCollector,
    /// Theme resolved from the system preference at boot.
    theme: Theme,
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and schedules the alert lifecycle based
    /// on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (diagnostics, handle) =
            DiagnosticsCollector::new(config::DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY);

        let config = match load_config(&flags) {
            Ok(config) => config,
            Err(err) => {
                handle.log_warning(WarningEvent::new(
                    WarningType::ConfigFallback,
                    err.to_string(),
                ));
                config::Config::default()
            }
        };

        let mut manager = alerts::Manager::new(alerts::Timings::from_config(&config));
        manager.set_diagnostics(handle);

        for alert in seed_alerts(&flags) {
            manager.push(alert);
        }

        // The one-shot lifecycle trigger: alerts attached after this point
        // are not picked up.
        let timers = manager.manage();

        let app = App {
            alerts: manager,
            diagnostics,
            theme: detect_theme(),
        };

        (app, alerts::spawn(timers).map(Message::Alert))
    }

    fn title(&self) -> String {
        String::from("Iced Alerts")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.alerts.has_alerts())
    }
}

/// Loads the configuration, honoring a `--config-dir` override.
fn load_config(flags: &Flags) -> crate::error::Result<config::Config> {
    match &flags.config_dir {
        Some(dir) => {
            let path = Path::new(dir).join(config::CONFIG_FILE);
            if path.exists() {
                config::load_from_path(&path)
            } else {
                Ok(config::Config::default())
            }
        }
        None => config::load(),
    }
}

/// Parses a positional `[severity:]message` argument.
///
/// Arguments without a recognized severity prefix become info alerts with
/// the full text as their message, so `10:30 meeting` is not split.
fn parse_alert_arg(arg: &str) -> (Severity, &str) {
    if let Some((label, message)) = arg.split_once(':') {
        if let Some(severity) = Severity::from_label(label) {
            return (severity, message);
        }
    }
    (Severity::default(), arg)
}

/// Builds the startup alert set from the CLI flags, falling back to a small
/// demo set when no messages were given.
fn seed_alerts(flags: &Flags) -> Vec<Alert> {
    let build = |severity, message: &str| {
        if flags.pinned {
            Alert::pinned(severity, message)
        } else {
            Alert::floating(severity, message)
        }
    };

    if flags.messages.is_empty() {
        return vec![
            build(Severity::Success, "Changes saved"),
            build(Severity::Info, "A new version is available"),
            build(Severity::Warning, "Storage is almost full"),
        ];
    }

    flags
        .messages
        .iter()
        .map(|arg| {
            let (severity, message) = parse_alert_arg(arg);
            build(severity, message)
        })
        .collect()
}

/// Resolves the system light/dark preference, defaulting to light.
fn detect_theme() -> Theme {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => Theme::Dark,
        _ => Theme::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_alert_arg_recognizes_severity_prefixes() {
        assert_eq!(
            parse_alert_arg("success:Saved"),
            (Severity::Success, "Saved")
        );
        assert_eq!(
            parse_alert_arg("danger:Access denied"),
            (Severity::Error, "Access denied")
        );
    }

    #[test]
    fn parse_alert_arg_keeps_unrecognized_prefixes_intact() {
        assert_eq!(
            parse_alert_arg("10:30 meeting"),
            (Severity::Info, "10:30 meeting")
        );
        assert_eq!(parse_alert_arg("plain text"), (Severity::Info, "plain text"));
    }

    #[test]
    fn seed_alerts_uses_demo_set_without_messages() {
        let alerts = seed_alerts(&Flags::default());
        assert_eq!(alerts.len(), 3);
        assert!(alerts.iter().all(Alert::is_floating));
    }

    #[test]
    fn seed_alerts_honors_the_pinned_flag() {
        let flags = Flags {
            pinned: true,
            messages: vec!["error:Could not save".into()],
            ..Flags::default()
        };
        let alerts = seed_alerts(&flags);
        assert_eq!(alerts.len(), 1);
        assert!(!alerts[0].is_floating());
        assert_eq!(alerts[0].severity(), Severity::Error);
        assert_eq!(alerts[0].message(), "Could not save");
    }
}
