// SPDX-License-Identifier: MPL-2.0
//! Floating alert lifecycle management.
//!
//! The `Manager` owns the alerts that belong to the current view and drives
//! the three-phase lifecycle of the floating ones: enter, hold, exit and
//! remove. Phase changes are message-driven so they always happen on the UI
//! event loop; [`Manager::manage`] emits the deferred [`Timer`]s once at boot
//! and [`spawn`] turns them into independent tasks.

use super::alert::{Alert, AlertId, Severity};
use crate::config::{
    DEFAULT_DISPLAY_MS, DEFAULT_FADE_MS, ENTER_DELAY_MS, MAX_DISPLAY_MS, MAX_FADE_MS,
    MIN_DISPLAY_MS, MIN_FADE_MS,
};
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType, WarningEvent, WarningType};
use iced::Task;
use std::time::{Duration, Instant};

/// Delay before a discovered floating alert becomes visible.
pub const ENTER_DELAY: Duration = Duration::from_millis(ENTER_DELAY_MS);

/// Messages for alert lifecycle changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Apply the visible marker (starts the entrance transition).
    Show(AlertId),
    /// Remove the visible marker (starts the exit transition).
    BeginExit(AlertId),
    /// Detach the alert entirely.
    Remove(AlertId),
    /// Manual dismissal requested by the user.
    Dismiss(AlertId),
}

/// Visibility phase of an attached alert.
///
/// `Visible` is the phase carrying the marker; `Pending` and `Leaving` both
/// render transparent but are distinct so the banner styling knows which
/// direction the transition runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Attached, marker not yet applied.
    Pending,
    /// Marker applied; the entrance transition runs from `since`.
    Visible { since: Instant },
    /// Marker removed; the exit transition runs from `since`.
    Leaving { since: Instant },
}

impl Phase {
    /// Returns whether the visible marker is currently applied.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self, Phase::Visible { .. })
    }
}

/// A deferred lifecycle action: after `delay` from the scheduling instant,
/// apply `message`.
#[derive(Debug, Clone)]
pub struct Timer {
    pub delay: Duration,
    pub message: Message,
}

impl Timer {
    fn new(delay: Duration, message: Message) -> Self {
        Self { delay, message }
    }
}

/// Lifecycle durations shared between the scheduler and the banner styling.
///
/// `fade` is both the gap between the exit transition starting and the alert
/// being detached, and the length of the rendered opacity ramp. Keeping the
/// two in one place is what guarantees they cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Hold time before the exit transition starts, measured from boot.
    pub display: Duration,
    /// Fade transition length, entrance and exit alike.
    pub fade: Duration,
}

impl Timings {
    /// Builds timings from the loaded configuration, clamping out-of-range
    /// values so a hand-edited file cannot request nonsensical durations.
    #[must_use]
    pub fn from_config(config: &crate::config::Config) -> Self {
        let display = config
            .display_ms
            .unwrap_or(DEFAULT_DISPLAY_MS)
            .clamp(MIN_DISPLAY_MS, MAX_DISPLAY_MS);
        let fade = config
            .fade_ms
            .unwrap_or(DEFAULT_FADE_MS)
            .clamp(MIN_FADE_MS, MAX_FADE_MS);

        Self {
            display: Duration::from_millis(display),
            fade: Duration::from_millis(fade),
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            display: Duration::from_millis(DEFAULT_DISPLAY_MS),
            fade: Duration::from_millis(DEFAULT_FADE_MS),
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    alert: Alert,
    phase: Phase,
}

/// Manages the attached alerts and their lifecycle phases.
#[derive(Debug)]
pub struct Manager {
    /// Attached alerts in insertion order.
    entries: Vec<Entry>,
    timings: Timings,
    /// Whether the one-shot boot scheduling has already run.
    managed: bool,
    /// Optional diagnostics handle for logging warnings/errors.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    /// Creates an empty manager with the given lifecycle timings.
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            entries: Vec::new(),
            timings,
            managed: false,
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle for logging warnings and errors.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Attaches an alert and returns its ID.
    ///
    /// Warning and error alerts are logged to the diagnostics system.
    /// Attaching does not schedule anything: the lifecycle only covers
    /// floating alerts that are present when [`Manager::manage`] runs.
    pub fn push(&mut self, alert: Alert) -> AlertId {
        if let Some(handle) = &self.diagnostics {
            match alert.severity() {
                Severity::Warning => {
                    handle.log_warning(WarningEvent::new(WarningType::Alert, alert.message()));
                }
                Severity::Error => {
                    handle.log_error(ErrorEvent::new(ErrorType::Alert, alert.message()));
                }
                Severity::Success | Severity::Info => {}
            }
        }

        let id = alert.id();
        self.entries.push(Entry {
            alert,
            phase: Phase::Pending,
        });
        id
    }

    /// Schedules the fade lifecycle for every floating alert attached now.
    ///
    /// Called once, when the application finishes booting. Emits three
    /// independent timers per floating alert, all measured from the same
    /// zero point: show after [`ENTER_DELAY`], begin the exit at
    /// `timings.display`, detach at `timings.display + timings.fade`.
    /// Alerts attached later are not scheduled; subsequent calls are no-ops.
    pub fn manage(&mut self) -> Vec<Timer> {
        if self.managed {
            return Vec::new();
        }
        self.managed = true;

        let exit_at = self.timings.display;
        let remove_at = self.timings.display + self.timings.fade;

        self.entries
            .iter()
            .filter(|entry| entry.alert.is_floating())
            .flat_map(|entry| {
                let id = entry.alert.id();
                [
                    Timer::new(ENTER_DELAY, Message::Show(id)),
                    Timer::new(exit_at, Message::BeginExit(id)),
                    Timer::new(remove_at, Message::Remove(id)),
                ]
            })
            .collect()
    }

    /// Handles a lifecycle message.
    ///
    /// Returns any follow-up timers to schedule (manual dismissal defers the
    /// detach until its exit transition has run). Messages whose target is
    /// gone are silently absorbed.
    pub fn handle_message(&mut self, message: &Message) -> Vec<Timer> {
        match message {
            Message::Show(id) => {
                self.show(*id);
                Vec::new()
            }
            Message::BeginExit(id) => {
                self.begin_exit(*id);
                Vec::new()
            }
            Message::Remove(id) => {
                self.remove(*id);
                Vec::new()
            }
            Message::Dismiss(id) => self.dismiss(*id),
        }
    }

    /// Applies the visible marker. No-op if the alert is gone, pinned, or
    /// already past its `Pending` phase.
    fn show(&mut self, id: AlertId) {
        if let Some(entry) = self.entry_mut(id) {
            if entry.alert.is_floating() && entry.phase == Phase::Pending {
                entry.phase = Phase::Visible {
                    since: Instant::now(),
                };
            }
        }
    }

    /// Removes the visible marker and starts the exit transition. No-op if
    /// the alert is gone, pinned, or already leaving.
    fn begin_exit(&mut self, id: AlertId) {
        if let Some(entry) = self.entry_mut(id) {
            if entry.alert.is_floating() && !matches!(entry.phase, Phase::Leaving { .. }) {
                entry.phase = Phase::Leaving {
                    since: Instant::now(),
                };
            }
        }
    }

    /// Detaches an alert. Detaching an already-absent alert has no effect.
    ///
    /// Returns `true` if the alert was found and removed.
    fn remove(&mut self, id: AlertId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.alert.id() != id);
        self.entries.len() < before
    }

    /// Starts the exit transition immediately and defers the detach by the
    /// fade duration. Applies to pinned alerts too: dismissal is user-driven.
    fn dismiss(&mut self, id: AlertId) -> Vec<Timer> {
        let fade = self.timings.fade;
        match self.entry_mut(id) {
            Some(entry) if !matches!(entry.phase, Phase::Leaving { .. }) => {
                entry.phase = Phase::Leaving {
                    since: Instant::now(),
                };
                vec![Timer::new(fade, Message::Remove(id))]
            }
            _ => Vec::new(),
        }
    }

    fn entry_mut(&mut self, id: AlertId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.alert.id() == id)
    }

    /// Returns the attached alerts and their phases, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Alert, Phase)> {
        self.entries.iter().map(|entry| (&entry.alert, entry.phase))
    }

    /// Returns whether any alert is still attached.
    #[must_use]
    pub fn has_alerts(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Returns the number of attached alerts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no alerts are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether the alert with the given ID is still attached.
    #[must_use]
    pub fn is_attached(&self, id: AlertId) -> bool {
        self.entries.iter().any(|entry| entry.alert.id() == id)
    }

    /// Returns whether the alert with the given ID carries the visible marker.
    #[must_use]
    pub fn is_visible(&self, id: AlertId) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.alert.id() == id && entry.phase.is_visible())
    }

    /// Returns the lifecycle timings.
    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }
}

/// Turns timers into independent deferred tasks on the runtime's event loop.
///
/// Each timer becomes its own task; nothing synchronizes them beyond the
/// single-threaded message dispatch that applies their completion messages.
pub fn spawn(timers: Vec<Timer>) -> Task<Message> {
    Task::batch(timers.into_iter().map(|timer| {
        let Timer { delay, message } = timer;
        Task::perform(tokio::time::sleep(delay), move |()| message.clone())
    }))
}
