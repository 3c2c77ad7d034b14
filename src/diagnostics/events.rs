// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for warning and error tracking.

use std::time::Instant;

/// Categories of warning conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningType {
    /// A warning-severity alert was displayed to the user.
    Alert,
    /// Configuration could not be read and defaults were used instead.
    ConfigFallback,
    /// Uncategorized warning.
    Other,
}

/// Categories of error conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// An error-severity alert was displayed to the user.
    Alert,
    /// File system access failed.
    Io,
    /// Uncategorized error.
    Other,
}

/// A warning with its category and human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// An error with its category and human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// The payload of a captured diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEventKind {
    Warning { event: WarningEvent },
    Error { event: ErrorEvent },
}

/// A diagnostic event with its capture timestamp (monotonic).
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    at: Instant,
    kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            at: Instant::now(),
            kind,
        }
    }

    /// Returns when this event was captured.
    #[must_use]
    pub fn at(&self) -> Instant {
        self.at
    }

    /// Returns the event payload.
    #[must_use]
    pub fn kind(&self) -> &DiagnosticEventKind {
        &self.kind
    }
}
