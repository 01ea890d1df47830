// SPDX-License-Identifier: MPL-2.0
//! The display surface: the single container that hosts every mounted
//! notification.
//!
//! A [`Surface`] is a cheaply cloneable handle; clones share one container.
//! The composition root owns the canonical handle (usually through
//! [`Surface::obtain`]) and hands clones to whichever managers need it, so
//! the "exactly one surface" invariant holds without any global state.
//! Mounted notifications stay in append order.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use crate::lifecycle::{Phase, Schedule};
use crate::notification::{Notification, NotificationId};

/// A notification mounted on the surface, together with its lifecycle state.
#[derive(Debug, Clone)]
pub struct Mounted {
    notification: Notification,
    schedule: Schedule,
    phase: Phase,
}

impl Mounted {
    pub(crate) fn new(notification: Notification, schedule: Schedule) -> Self {
        Self {
            notification,
            schedule,
            phase: Phase::Created,
        }
    }

    /// Returns the mounted notification.
    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the lifecycle schedule.
    #[must_use]
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Advances the stored phase toward what the schedule prescribes at
    /// `now`, returning every phase traversed, in order.
    ///
    /// Phases only move forward; a stale `now` is a no-op. Intermediate
    /// phases skipped over by a coarse tick are still traversed one by one,
    /// so each transition is observed exactly once.
    fn advance_to(&mut self, now: Instant) -> Vec<Phase> {
        let target = self.schedule.phase_at(now);
        let mut traversed = Vec::new();
        while self.phase < target {
            match self.phase.successor() {
                Some(next) => {
                    self.phase = next;
                    traversed.push(next);
                }
                None => break,
            }
        }
        traversed
    }
}

/// A phase change observed while advancing the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The notification that changed phase.
    pub id: NotificationId,
    /// The phase it entered.
    pub phase: Phase,
}

#[derive(Debug, Default)]
struct Inner {
    mounted: Vec<Mounted>,
}

/// Handle to the shared display surface.
#[derive(Debug, Clone)]
pub struct Surface {
    inner: Arc<Mutex<Inner>>,
}

impl Surface {
    /// Creates a fresh, empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    /// Reuses the surface installed in `slot`, installing a fresh one when
    /// absent.
    ///
    /// Idempotent and re-entrant: any number of calls, in any order
    /// relative to manager construction, yields handles to the same single
    /// surface.
    pub fn obtain(slot: &mut Option<Surface>) -> Surface {
        match slot {
            Some(surface) => surface.clone(),
            None => {
                let surface = Surface::new();
                *slot = Some(surface.clone());
                surface
            }
        }
    }

    /// Returns whether `self` and `other` are handles to the same surface.
    #[must_use]
    pub fn same_surface(&self, other: &Surface) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns the number of mounted notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().mounted.len()
    }

    /// Returns whether no notifications are mounted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().mounted.is_empty()
    }

    /// Returns whether `id` is currently mounted.
    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.lock()
            .mounted
            .iter()
            .any(|m| m.notification.id() == id)
    }

    /// Returns the phase of `id`, or `None` once detached.
    #[must_use]
    pub fn phase_of(&self, id: NotificationId) -> Option<Phase> {
        self.lock()
            .mounted
            .iter()
            .find(|m| m.notification.id() == id)
            .map(Mounted::phase)
    }

    /// Returns a snapshot of the mounted notifications in append order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Mounted> {
        self.lock().mounted.clone()
    }

    /// Returns the earliest pending phase deadline across mounted
    /// notifications.
    ///
    /// An entry whose stored phase lags behind what its schedule prescribes
    /// at `now` (because ticks were coarse or delayed) is due immediately.
    #[must_use]
    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        self.lock()
            .mounted
            .iter()
            .filter_map(|m| {
                if m.phase < m.schedule.phase_at(now) {
                    Some(now)
                } else {
                    m.schedule.next_deadline(now)
                }
            })
            .min()
    }

    pub(crate) fn mount(&self, mounted: Mounted) {
        self.lock().mounted.push(mounted);
    }

    /// Advances every mounted notification to `now` and detaches those that
    /// reached [`Phase::Removed`]. Returns the transitions in the order they
    /// were traversed.
    pub(crate) fn advance_to(&self, now: Instant) -> Vec<Transition> {
        let mut transitions = Vec::new();
        let removed: Vec<NotificationId> = {
            let mut inner = self.lock();
            for mounted in &mut inner.mounted {
                let id = mounted.notification.id();
                for phase in mounted.advance_to(now) {
                    transitions.push(Transition { id, phase });
                }
            }
            inner
                .mounted
                .iter()
                .filter(|m| m.phase == Phase::Removed)
                .map(|m| m.notification.id())
                .collect()
        };
        for id in removed {
            self.detach(id);
        }
        transitions
    }

    /// Detaches `id` if still attached. Detaching an already-detached
    /// notification is a no-op, never an error.
    pub(crate) fn detach(&self, id: NotificationId) -> bool {
        let mut inner = self.lock();
        let before = inner.mounted.len();
        inner.mounted.retain(|m| m.notification.id() != id);
        inner.mounted.len() != before
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("surface mutex poisoned")
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}
