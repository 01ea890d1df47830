// SPDX-License-Identifier: MPL-2.0
//! Per-notification lifecycle state machine.
//!
//! Every mounted notification moves through four phases:
//!
//! ```text
//! Created --(enter delay)--> Shown --(duration)--> Hiding --(exit transition)--> Removed
//! ```
//!
//! All deadlines are fixed at mount time, measured from the mount instant.
//! The hide deadline is measured from mount, not from the moment the
//! notification became shown, so a duration shorter than the enter delay
//! starts hiding immediately. The sequence always runs to completion; there
//! is no cancellation.

use std::time::{Duration, Instant};

/// Default delay before a mounted notification enters the shown state.
pub const DEFAULT_ENTER_DELAY: Duration = Duration::from_millis(10);

/// Default display duration when the caller does not supply one.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

/// Default length of the exit transition before detaching.
pub const DEFAULT_EXIT_TRANSITION: Duration = Duration::from_millis(500);

/// Lifecycle phase of a mounted notification.
///
/// Phases are ordered; a notification only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Attached to the surface, entry transition not yet started.
    Created,
    /// Visible.
    Shown,
    /// Exit transition running.
    Hiding,
    /// Detached from the surface.
    Removed,
}

impl Phase {
    /// Returns the next phase, or `None` once removed.
    #[must_use]
    pub fn successor(self) -> Option<Phase> {
        match self {
            Phase::Created => Some(Phase::Shown),
            Phase::Shown => Some(Phase::Hiding),
            Phase::Hiding => Some(Phase::Removed),
            Phase::Removed => None,
        }
    }

    /// Stable lowercase name, used for diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Phase::Created => "created",
            Phase::Shown => "shown",
            Phase::Hiding => "hiding",
            Phase::Removed => "removed",
        }
    }
}

/// Timing applied by a manager to every notification it mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Delay before the shown state is applied.
    pub enter_delay: Duration,
    /// Display duration used when a notification carries no override.
    pub default_duration: Duration,
    /// Length of the exit transition before detaching.
    pub exit_transition: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            enter_delay: DEFAULT_ENTER_DELAY,
            default_duration: DEFAULT_DURATION,
            exit_transition: DEFAULT_EXIT_TRANSITION,
        }
    }
}

/// The fixed deadlines of one mounted notification.
#[derive(Debug, Clone, Copy)]
pub struct Schedule {
    mounted_at: Instant,
    shown_at: Instant,
    hiding_at: Instant,
    removed_at: Instant,
}

impl Schedule {
    /// Computes the deadlines for a notification mounted at `mounted_at`
    /// displaying for `duration`.
    #[must_use]
    pub fn new(mounted_at: Instant, timing: &Timing, duration: Duration) -> Self {
        let hiding_at = mounted_at + duration;
        Self {
            mounted_at,
            shown_at: mounted_at + timing.enter_delay,
            hiding_at,
            removed_at: hiding_at + timing.exit_transition,
        }
    }

    /// Returns the instant the notification was mounted.
    #[must_use]
    pub fn mounted_at(&self) -> Instant {
        self.mounted_at
    }

    /// Returns the instant the notification is detached.
    #[must_use]
    pub fn removed_at(&self) -> Instant {
        self.removed_at
    }

    /// Returns the phase this schedule prescribes at `now`.
    ///
    /// Later deadlines win, so a duration shorter than the enter delay
    /// yields `Hiding` straight away.
    #[must_use]
    pub fn phase_at(&self, now: Instant) -> Phase {
        if now >= self.removed_at {
            Phase::Removed
        } else if now >= self.hiding_at {
            Phase::Hiding
        } else if now >= self.shown_at {
            Phase::Shown
        } else {
            Phase::Created
        }
    }

    /// Returns the next instant at which the phase changes, or `None` once
    /// no further change is pending at `now`.
    #[must_use]
    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        let current = self.phase_at(now);
        [self.shown_at, self.hiding_at, self.removed_at]
            .into_iter()
            .filter(|deadline| *deadline > now && self.phase_at(*deadline) != current)
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(duration_ms: u64) -> (Instant, Schedule) {
        let mounted_at = Instant::now();
        let schedule = Schedule::new(
            mounted_at,
            &Timing::default(),
            Duration::from_millis(duration_ms),
        );
        (mounted_at, schedule)
    }

    #[test]
    fn phase_successors_run_forward_only() {
        assert_eq!(Phase::Created.successor(), Some(Phase::Shown));
        assert_eq!(Phase::Shown.successor(), Some(Phase::Hiding));
        assert_eq!(Phase::Hiding.successor(), Some(Phase::Removed));
        assert_eq!(Phase::Removed.successor(), None);
    }

    #[test]
    fn phases_are_ordered() {
        assert!(Phase::Created < Phase::Shown);
        assert!(Phase::Shown < Phase::Hiding);
        assert!(Phase::Hiding < Phase::Removed);
    }

    #[test]
    fn default_timing_matches_documented_constants() {
        let timing = Timing::default();
        assert_eq!(timing.enter_delay, Duration::from_millis(10));
        assert_eq!(timing.default_duration, Duration::from_millis(3000));
        assert_eq!(timing.exit_transition, Duration::from_millis(500));
    }

    #[test]
    fn standard_schedule_walks_all_four_phases() {
        let (t0, schedule) = schedule(3000);

        assert_eq!(schedule.phase_at(t0), Phase::Created);
        assert_eq!(schedule.phase_at(t0 + Duration::from_millis(5)), Phase::Created);
        assert_eq!(schedule.phase_at(t0 + Duration::from_millis(10)), Phase::Shown);
        assert_eq!(
            schedule.phase_at(t0 + Duration::from_millis(2999)),
            Phase::Shown
        );
        assert_eq!(
            schedule.phase_at(t0 + Duration::from_millis(3000)),
            Phase::Hiding
        );
        assert_eq!(
            schedule.phase_at(t0 + Duration::from_millis(3499)),
            Phase::Hiding
        );
        assert_eq!(
            schedule.phase_at(t0 + Duration::from_millis(3500)),
            Phase::Removed
        );
    }

    #[test]
    fn zero_duration_hides_immediately() {
        let (t0, schedule) = schedule(0);

        assert_eq!(schedule.phase_at(t0), Phase::Hiding);
        assert_eq!(
            schedule.phase_at(t0 + Duration::from_millis(499)),
            Phase::Hiding
        );
        assert_eq!(
            schedule.phase_at(t0 + Duration::from_millis(500)),
            Phase::Removed
        );
    }

    #[test]
    fn duration_below_enter_delay_never_reports_shown() {
        let (t0, schedule) = schedule(5);

        assert_eq!(schedule.phase_at(t0 + Duration::from_millis(4)), Phase::Created);
        assert_eq!(schedule.phase_at(t0 + Duration::from_millis(5)), Phase::Hiding);
        assert_eq!(schedule.phase_at(t0 + Duration::from_millis(20)), Phase::Hiding);
    }

    #[test]
    fn next_deadline_walks_the_schedule() {
        let (t0, schedule) = schedule(3000);

        assert_eq!(
            schedule.next_deadline(t0),
            Some(t0 + Duration::from_millis(10))
        );
        assert_eq!(
            schedule.next_deadline(t0 + Duration::from_millis(10)),
            Some(t0 + Duration::from_millis(3000))
        );
        assert_eq!(
            schedule.next_deadline(t0 + Duration::from_millis(3000)),
            Some(t0 + Duration::from_millis(3500))
        );
        assert_eq!(schedule.next_deadline(t0 + Duration::from_millis(3500)), None);
    }

    #[test]
    fn next_deadline_skips_shadowed_shown_deadline() {
        // Duration 0: the shown deadline at +10ms no longer changes the
        // phase, so the only remaining deadline is the removal.
        let (t0, schedule) = schedule(0);

        assert_eq!(
            schedule.next_deadline(t0),
            Some(t0 + Duration::from_millis(500))
        );
    }
}
