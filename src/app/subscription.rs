// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Repaint cadence while fade transitions are running.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates a periodic tick subscription for repainting fade transitions.
///
/// Active only while alerts are attached; an idle application produces no
/// ticks at all.
pub fn create_tick_subscription(has_alerts: bool) -> Subscription<Message> {
    if has_alerts {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
