// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.

use super::{App, Message};
use crate::ui::alerts;
use iced::Task;

/// Applies a message to the application state.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    // Move any pending diagnostic events into the buffer.
    app.diagnostics.drain();

    match message {
        Message::Alert(alert_message) => {
            let followups = app.alerts.handle_message(&alert_message);
            alerts::spawn(followups).map(Message::Alert)
        }
        // Ticks only exist to repaint running transitions; processing the
        // message is enough to trigger a redraw.
        Message::Tick(_) => Task::none(),
    }
}
