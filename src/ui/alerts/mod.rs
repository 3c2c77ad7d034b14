// SPDX-License-Identifier: MPL-2.0
//! Floating alert system.
//!
//! This module drives the lifecycle of transient alert banners: every
//! floating alert present when the application finishes booting fades in,
//! stays visible for a fixed hold time, fades out, and is removed.
//!
//! # Components
//!
//! - [`alert`] - Core `Alert` struct with severity levels and the floating marker
//! - [`fader`] - `Manager` scheduling the enter/hold/exit lifecycle timers
//! - [`banner`] - Banner widget component for rendering alerts
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::alerts::{self, Alert, Severity};
//!
//! // Create a manager and seed the alerts that are part of the initial view
//! let mut manager = alerts::Manager::new(alerts::Timings::default());
//! manager.push(Alert::floating(Severity::Success, "Changes saved"));
//!
//! // Schedule the lifecycle once, at boot
//! let task = alerts::spawn(manager.manage()).map(Message::Alert);
//!
//! // In your view function, render the overlay
//! let overlay = alerts::Banner::view_overlay(&manager).map(Message::Alert);
//! ```
//!
//! # Design Considerations
//!
//! - Lifecycle timers are independent per alert; no ordering between alerts
//! - Pinned (non-floating) alerts are left alone until manually dismissed
//! - The fade duration is shared with the banner styling via [`Timings`]

pub mod alert;
pub mod banner;
pub mod fader;

pub use alert::{Alert, AlertId, Severity};
pub use banner::Banner;
pub use fader::{spawn, Manager, Message, Phase, Timer, Timings, ENTER_DELAY};
