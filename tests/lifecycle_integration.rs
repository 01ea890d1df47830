// SPDX-License-Identifier: MPL-2.0
//! End-to-end lifecycle scenarios driven through the public API with a
//! manual clock.

use std::sync::Arc;
use std::time::Duration;

use iced_snackbar::{ManualClock, Manager, Notification, Phase, Surface};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn manual_manager() -> (Manager, ManualClock) {
    let clock = ManualClock::new();
    let manager = Manager::new().clock(Arc::new(clock.clone()));
    (manager, clock)
}

#[test]
fn success_notification_runs_the_full_default_schedule() {
    let (mut manager, clock) = manual_manager();

    let id = manager.show_success("Saved");

    // Attached immediately, shown after the enter delay.
    assert_eq!(manager.surface().len(), 1);
    let snapshot = manager.surface().snapshot();
    assert_eq!(snapshot[0].notification().class_token(), "success");
    assert_eq!(snapshot[0].notification().icon_token(), "bi-check-circle-fill");

    clock.advance(ms(10));
    manager.tick();
    assert_eq!(manager.surface().phase_of(id), Some(Phase::Shown));

    // Hiding once the default 3000ms duration elapses, fully detached
    // after the 500ms exit transition.
    clock.advance(ms(2990));
    manager.tick();
    assert_eq!(manager.surface().phase_of(id), Some(Phase::Hiding));

    clock.advance(ms(500));
    manager.tick();
    assert!(!manager.surface().contains(id));
    assert!(manager.surface().is_empty());
}

#[test]
fn custom_notification_carries_tokens_and_short_schedule() {
    let (mut manager, clock) = manual_manager();

    let id = manager.show_custom("Retry?", "warn-custom", "bi-arrow-repeat", ms(1000));

    let snapshot = manager.surface().snapshot();
    assert_eq!(snapshot[0].notification().class_token(), "warn-custom");
    assert_eq!(snapshot[0].notification().icon_token(), "bi-arrow-repeat");

    clock.advance(ms(1499));
    manager.tick();
    assert_eq!(manager.surface().phase_of(id), Some(Phase::Hiding));

    clock.advance(ms(1));
    manager.tick();
    assert!(!manager.surface().contains(id));
}

#[test]
fn zero_duration_alert_hides_immediately() {
    let (mut manager, clock) = manual_manager();

    let id = manager.display(Notification::alert("Failed").duration(ms(0)));

    // The hide begins with no wait at all.
    manager.tick();
    assert_eq!(manager.surface().phase_of(id), Some(Phase::Hiding));

    // Detached after only the fixed exit transition.
    clock.advance(ms(499));
    manager.tick();
    assert!(manager.surface().contains(id));

    clock.advance(ms(1));
    manager.tick();
    assert!(!manager.surface().contains(id));
}

#[test]
fn overlapping_notifications_are_independent() {
    let (mut manager, clock) = manual_manager();

    let short = manager.display(Notification::info("quick").duration(ms(100)));
    let long = manager.display(Notification::info("slow").duration(ms(5000)));
    assert_eq!(manager.surface().len(), 2);

    clock.advance(ms(600));
    manager.tick();
    assert!(!manager.surface().contains(short));
    assert_eq!(manager.surface().phase_of(long), Some(Phase::Shown));

    clock.advance(ms(4400));
    manager.tick();
    assert_eq!(manager.surface().phase_of(long), Some(Phase::Hiding));

    clock.advance(ms(500));
    manager.tick();
    assert!(manager.surface().is_empty());
}

#[test]
fn convenience_wrappers_use_the_default_duration() {
    let (mut manager, clock) = manual_manager();

    let alert = manager.show_alert("Failed");
    let info = manager.show_info("FYI");
    let warning = manager.show_warning("Careful");

    clock.advance(ms(3499));
    manager.tick();
    for id in [alert, info, warning] {
        assert_eq!(manager.surface().phase_of(id), Some(Phase::Hiding));
    }

    clock.advance(ms(1));
    manager.tick();
    assert!(manager.surface().is_empty());
}

#[test]
fn obtaining_the_surface_twice_installs_exactly_one() {
    let mut slot = None;

    let first = Surface::obtain(&mut slot);
    let second = Surface::obtain(&mut slot);
    assert!(first.same_surface(&second));

    // Managers constructed in any order over the slot reuse it too.
    let manager = Manager::attached(&mut slot);
    assert!(manager.surface().same_surface(&first));
}

#[test]
fn managers_sharing_a_surface_see_each_others_notifications() {
    let mut slot = None;
    let mut first = Manager::attached(&mut slot);
    let mut second = Manager::attached(&mut slot);

    first.show_success("from first");
    second.show_alert("from second");

    assert_eq!(first.surface().len(), 2);
    assert_eq!(second.surface().len(), 2);
}

#[test]
fn running_the_removal_path_twice_is_harmless() {
    let clock = ManualClock::new();
    let mut slot = None;
    let mut first = Manager::attached(&mut slot).clock(Arc::new(clock.clone()));
    let mut second = Manager::attached(&mut slot).clock(Arc::new(clock.clone()));

    let id = first.display(Notification::info("ephemeral").duration(ms(100)));

    // Both managers drive the shared surface past the removal deadline;
    // the second pass finds the notification already detached.
    clock.advance(ms(600));
    first.tick();
    assert!(!first.surface().contains(id));

    second.tick();
    assert!(second.surface().is_empty());
}

#[test]
fn ticking_long_after_removal_detaches_in_one_pass() {
    let (mut manager, clock) = manual_manager();

    manager.show_success("Saved");
    manager.show_custom("Retry?", "warn-custom", "bi-arrow-repeat", ms(1000));

    // A single very late tick retires everything.
    clock.advance(ms(60_000));
    manager.tick();
    assert!(manager.surface().is_empty());
    assert_eq!(manager.next_deadline(), None);
}
