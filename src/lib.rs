// SPDX-License-Identifier: MPL-2.0
//! `iced_alerts` displays transient floating alert banners built with the
//! Iced GUI framework.
//!
//! Alerts present at application boot fade in, remain visible for a fixed
//! hold time, fade out, and are removed. The crate demonstrates timer-driven
//! widget lifecycles, user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_alerts/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod ui;
