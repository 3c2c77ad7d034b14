// SPDX-License-Identifier: MPL-2.0
//! Core alert data structures.
//!
//! This module defines the `Alert` struct and `Severity` enum
//! used throughout the alert system.

use crate::ui::design_tokens::palette;
use iced::Color;

/// Unique identifier for an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlertId(u64);

impl AlertId {
    /// Creates a new unique alert ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for AlertId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines the banner's visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    Success,
    /// Informational message (blue).
    #[default]
    Info,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Error requiring attention (red).
    Error,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Parses a Bootstrap-style severity label.
    ///
    /// Recognizes `success`, `info`, `warning` and `error` (with `danger` as
    /// an alias). Returns `None` for anything else.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "success" => Some(Severity::Success),
            "info" => Some(Severity::Info),
            "warning" => Some(Severity::Warning),
            "error" | "danger" => Some(Severity::Error),
            _ => None,
        }
    }

    /// Returns the canonical label for this severity.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// A notification banner shown to the user.
///
/// Floating alerts carry the marker picked up by the lifecycle scheduler;
/// pinned alerts stay on screen until manually dismissed.
#[derive(Debug, Clone)]
pub struct Alert {
    /// Unique identifier for this alert.
    id: AlertId,
    /// Severity level (determines accent color).
    severity: Severity,
    /// The message text to display.
    message: String,
    /// Whether this alert carries the floating marker.
    floating: bool,
}

impl Alert {
    fn new(severity: Severity, message: impl Into<String>, floating: bool) -> Self {
        Self {
            id: AlertId::new(),
            severity,
            message: message.into(),
            floating,
        }
    }

    /// Creates a floating alert, subject to the timed fade lifecycle.
    pub fn floating(severity: Severity, message: impl Into<String>) -> Self {
        Self::new(severity, message, true)
    }

    /// Creates a pinned alert that stays until manually dismissed.
    pub fn pinned(severity: Severity, message: impl Into<String>) -> Self {
        Self::new(severity, message, false)
    }

    /// Returns the alert's unique ID.
    #[must_use]
    pub fn id(&self) -> AlertId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns whether this alert carries the floating marker.
    #[must_use]
    pub fn is_floating(&self) -> bool {
        self.floating
    }
}
