// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for notification lifecycle tracking.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::lifecycle::Phase;
use crate::notification::{Notification, NotificationId};

/// What happened to a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// A notification was mounted on the surface.
    Displayed {
        id: u64,
        /// The opaque style-class token, recorded verbatim.
        class: String,
        duration_ms: u64,
    },
    /// A mounted notification entered a new phase.
    PhaseEntered { id: u64, phase: &'static str },
    /// A notification was detached from the surface.
    Detached { id: u64 },
}

impl LifecycleEvent {
    /// Builds the event for a freshly mounted notification.
    #[must_use]
    pub fn displayed(notification: &Notification, duration: Duration) -> Self {
        Self::Displayed {
            id: notification.id().value(),
            class: notification.class_token().to_string(),
            duration_ms: duration.as_millis() as u64,
        }
    }

    /// Builds the event for a phase transition.
    #[must_use]
    pub fn phase_entered(id: NotificationId, phase: Phase) -> Self {
        Self::PhaseEntered {
            id: id.value(),
            phase: phase.name(),
        }
    }

    /// Builds the event for a detached notification.
    #[must_use]
    pub fn detached(id: NotificationId) -> Self {
        Self::Detached { id: id.value() }
    }
}

/// A lifecycle event with its capture instant.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    at: Instant,
    kind: LifecycleEvent,
}

impl DiagnosticEvent {
    /// Captures `kind` at the current instant.
    #[must_use]
    pub fn new(kind: LifecycleEvent) -> Self {
        Self {
            at: Instant::now(),
            kind,
        }
    }

    /// Returns the captured event.
    #[must_use]
    pub fn kind(&self) -> &LifecycleEvent {
        &self.kind
    }

    /// Returns the capture instant.
    #[must_use]
    pub fn at(&self) -> Instant {
        self.at
    }

    /// Returns how long ago the event was captured.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.at.elapsed()
    }
}
