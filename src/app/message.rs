// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::alerts;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Alert lifecycle message (timer completion or manual dismiss).
    Alert(alerts::Message),
    /// Periodic tick that repaints running fade transitions.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
    /// Seed the startup alerts as pinned instead of floating.
    pub pinned: bool,
    /// Positional `[severity:]message` arguments to show at startup.
    pub messages: Vec<String>,
}
