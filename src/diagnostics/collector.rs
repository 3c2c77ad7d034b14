// SPDX-License-Identifier: MPL-2.0
//! Event collection plumbing.
//!
//! The [`DiagnosticsCollector`] owns the event buffer; any number of
//! [`DiagnosticsHandle`] clones can log events into it through a bounded
//! channel without blocking the UI thread.

use super::buffer::CircularBuffer;
use super::events::{DiagnosticEvent, DiagnosticEventKind, ErrorEvent, WarningEvent};
use tokio::sync::mpsc::{self, error::TryRecvError, Receiver, Sender};

/// Capacity of the channel between handles and the collector. Events logged
/// while the channel is full are dropped rather than blocking the sender.
const CHANNEL_CAPACITY: usize = 64;

/// Cheap, cloneable logging endpoint handed out to event producers.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a warning event.
    ///
    /// This method is non-blocking and will drop the event if the
    /// internal channel is full (backpressure protection).
    pub fn log_warning(&self, event: WarningEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning { event });
        // Non-blocking send - drop if channel is full
        let _ = self.event_tx.try_send(event);
    }

    /// Logs an error event.
    ///
    /// This method is non-blocking and will drop the event if the
    /// internal channel is full (backpressure protection).
    pub fn log_error(&self, event: ErrorEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error { event });
        let _ = self.event_tx.try_send(event);
    }
}

/// Owns the diagnostic event buffer and the receiving end of the channel.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    event_rx: Receiver<DiagnosticEvent>,
    buffer: CircularBuffer<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    /// Creates a collector with the given buffer capacity and its first handle.
    #[must_use]
    pub fn new(capacity: usize) -> (Self, DiagnosticsHandle) {
        let (event_tx, event_rx) = mpsc::channel(CHANNEL_CAPACITY);
        (
            Self {
                event_rx,
                buffer: CircularBuffer::with_capacity(capacity),
            },
            DiagnosticsHandle { event_tx },
        )
    }

    /// Moves all pending events from the channel into the buffer.
    ///
    /// Returns the number of events drained. Called periodically from the
    /// application's update loop.
    pub fn drain(&mut self) -> usize {
        let mut drained = 0;
        loop {
            match self.event_rx.try_recv() {
                Ok(event) => {
                    self.buffer.push(event);
                    drained += 1;
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        drained
    }

    /// Returns the buffered events in chronological order (oldest first).
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Returns the number of buffered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no events have been buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::events::{ErrorType, WarningType};

    #[test]
    fn logged_events_appear_after_drain() {
        let (mut collector, handle) = DiagnosticsCollector::new(8);
        handle.log_warning(WarningEvent::new(WarningType::Other, "careful"));
        handle.log_error(ErrorEvent::new(ErrorType::Other, "broken"));

        assert!(collector.is_empty());
        assert_eq!(collector.drain(), 2);
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn drain_on_empty_channel_returns_zero() {
        let (mut collector, _handle) = DiagnosticsCollector::new(8);
        assert_eq!(collector.drain(), 0);
    }

    #[test]
    fn cloned_handles_feed_the_same_collector() {
        let (mut collector, handle) = DiagnosticsCollector::new(8);
        let second = handle.clone();

        handle.log_warning(WarningEvent::new(WarningType::Alert, "one"));
        second.log_warning(WarningEvent::new(WarningType::Alert, "two"));

        assert_eq!(collector.drain(), 2);
    }

    #[test]
    fn buffer_keeps_newest_events_at_capacity() {
        let (mut collector, handle) = DiagnosticsCollector::new(2);
        for i in 0..4 {
            handle.log_warning(WarningEvent::new(WarningType::Other, format!("event-{i}")));
        }
        collector.drain();

        assert_eq!(collector.len(), 2);
        let last = collector.events().last().expect("buffer is non-empty");
        match last.kind() {
            DiagnosticEventKind::Warning { event } => assert_eq!(event.message, "event-3"),
            DiagnosticEventKind::Error { .. } => panic!("expected warning kind"),
        }
    }
}
