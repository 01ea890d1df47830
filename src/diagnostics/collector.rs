// SPDX-License-Identifier: MPL-2.0
//! Collector aggregating lifecycle events from managers.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::events::{DiagnosticEvent, LifecycleEvent};
use super::log::EventLog;

/// Capacity of the handle-to-collector channel. Events beyond this are
/// dropped rather than blocking the sender.
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Handle for reporting lifecycle events to the collector.
///
/// Cheap to clone and safe to share across threads; every method is
/// non-blocking.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records a lifecycle event, dropping it when the channel is full.
    pub fn record(&self, kind: LifecycleEvent) {
        match self.event_tx.try_send(DiagnosticEvent::new(kind)) {
            Ok(()) | Err(TrySendError::Full(_)) | Err(TrySendError::Disconnected(_)) => {}
        }
    }
}

/// Receives lifecycle events and retains them in a bounded [`EventLog`].
#[derive(Debug)]
pub struct DiagnosticsCollector {
    log: EventLog,
    event_tx: Sender<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    /// Creates a collector retaining at most `capacity` events.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (event_tx, event_rx) = bounded(EVENT_CHANNEL_CAPACITY);
        Self {
            log: EventLog::with_capacity(capacity),
            event_tx,
            event_rx,
        }
    }

    /// Returns a handle managers can report through.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves pending events from the channel into the log, returning how
    /// many were received. Call this periodically, e.g. from the UI tick.
    pub fn drain(&mut self) -> usize {
        let mut received = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.log.push(event);
            received += 1;
        }
        received
    }

    /// Iterates over retained events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.log.iter()
    }

    /// Returns the number of retained events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.log.len()
    }

    /// Returns whether no events are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Discards all retained events.
    pub fn clear(&mut self) {
        self.log.clear();
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::with_capacity(super::log::DEFAULT_LOG_CAPACITY)
    }
}
