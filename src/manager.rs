// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The [`Manager`] mounts notifications on its [`Surface`], stamps each one
//! with a deadline [`Schedule`] from the injected [`Clock`], and advances
//! the resulting state machines on every tick. There is no cancellation,
//! no cap on concurrently mounted notifications, and no de-duplication:
//! every `display` call runs its four-phase sequence to completion
//! independently of all others.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::clock::{Clock, SystemClock};
use crate::diagnostics::{DiagnosticsHandle, LifecycleEvent};
use crate::lifecycle::{Phase, Schedule, Timing};
use crate::notification::{Notification, NotificationId};
use crate::surface::{Mounted, Surface};

/// Mounts notifications and drives their lifecycles.
#[derive(Debug)]
pub struct Manager {
    surface: Surface,
    clock: Arc<dyn Clock>,
    timing: Timing,
    /// Optional diagnostics handle for lifecycle event reporting.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    /// Creates a manager owning a fresh surface, driven by the system
    /// clock with default timing.
    #[must_use]
    pub fn new() -> Self {
        Self::with_surface(Surface::new())
    }

    /// Creates a manager on the surface installed in `slot`, installing one
    /// if absent.
    ///
    /// Constructing any number of managers over the same slot yields
    /// exactly one surface.
    pub fn attached(slot: &mut Option<Surface>) -> Self {
        Self::with_surface(Surface::obtain(slot))
    }

    /// Creates a manager on an existing surface handle.
    #[must_use]
    pub fn with_surface(surface: Surface) -> Self {
        Self {
            surface,
            clock: Arc::new(SystemClock),
            timing: Timing::default(),
            diagnostics: None,
        }
    }

    /// Replaces the timing applied to subsequently mounted notifications.
    #[must_use]
    pub fn timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Replaces the clock. Schedules of already-mounted notifications keep
    /// their original deadlines.
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Sets the diagnostics handle lifecycle events are reported through.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Returns the surface this manager mounts notifications on.
    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Returns the current instant of the injected clock.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Returns whether any notifications are mounted.
    #[must_use]
    pub fn has_mounted(&self) -> bool {
        !self.surface.is_empty()
    }

    /// Mounts `notification` on the surface and returns immediately.
    ///
    /// The notification's duration override applies when present, the
    /// manager default otherwise. The four-phase schedule is fixed at this
    /// instant and runs to completion unconditionally; `display` has no
    /// failure channel.
    pub fn display(&mut self, notification: Notification) -> NotificationId {
        let mounted_at = self.clock.now();
        let duration = notification
            .duration_override()
            .unwrap_or(self.timing.default_duration);
        let schedule = Schedule::new(mounted_at, &self.timing, duration);
        let id = notification.id();

        if let Some(handle) = &self.diagnostics {
            handle.record(LifecycleEvent::displayed(&notification, duration));
        }

        self.surface.mount(Mounted::new(notification, schedule));
        id
    }

    /// Displays a success notification with the default duration.
    pub fn show_success(&mut self, message: impl Into<String>) -> NotificationId {
        self.display(Notification::success(message))
    }

    /// Displays an alert notification with the default duration.
    pub fn show_alert(&mut self, message: impl Into<String>) -> NotificationId {
        self.display(Notification::alert(message))
    }

    /// Displays an info notification with the default duration.
    pub fn show_info(&mut self, message: impl Into<String>) -> NotificationId {
        self.display(Notification::info(message))
    }

    /// Displays a warning notification with the default duration.
    pub fn show_warning(&mut self, message: impl Into<String>) -> NotificationId {
        self.display(Notification::warning(message))
    }

    /// Displays a notification with caller-supplied class and icon tokens
    /// and an explicit duration.
    pub fn show_custom(
        &mut self,
        message: impl Into<String>,
        class: impl Into<String>,
        icon: impl Into<String>,
        duration: Duration,
    ) -> NotificationId {
        self.display(Notification::custom(message, class, icon).duration(duration))
    }

    /// Advances every mounted notification to the clock's current instant.
    ///
    /// Suitable for a periodic UI tick; the cadence only affects how
    /// promptly transitions are applied, never which transitions happen.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        self.tick_at(now);
    }

    /// Advances every mounted notification to `now`, detaching those whose
    /// sequence completed. Entry point for virtual-clock tests and the
    /// async driver.
    pub fn tick_at(&mut self, now: Instant) {
        let transitions = self.surface.advance_to(now);
        if let Some(handle) = &self.diagnostics {
            for transition in &transitions {
                handle.record(LifecycleEvent::phase_entered(transition.id, transition.phase));
                if transition.phase == Phase::Removed {
                    handle.record(LifecycleEvent::detached(transition.id));
                }
            }
        }
    }

    /// Returns the earliest pending phase deadline, or `None` when nothing
    /// is mounted or every sequence has completed.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.surface.next_deadline(self.clock.now())
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}
