// SPDX-License-Identifier: MPL-2.0
//! Async lifecycle driver.
//!
//! A host without a UI tick (headless tools, tests, background tasks) can
//! hand its manager to [`drive_until_clear`], which sleeps to each pending
//! deadline in turn and advances the manager there. The loop is exact: it
//! wakes precisely at phase deadlines rather than polling, and it ends once
//! the surface is empty.

use std::sync::{Arc, Mutex};

use tokio::time;

use crate::manager::Manager;

/// Drives `manager` until every mounted notification has completed its
/// lifecycle and detached.
///
/// Notifications displayed before or during the drive are all retired;
/// once the surface empties the future resolves. Displaying from another
/// task while this loop is between deadlines is supported, but a deadline
/// earlier than the one currently slept toward is only picked up when that
/// sleep ends.
pub async fn drive_until_clear(manager: Arc<Mutex<Manager>>) {
    loop {
        let (deadline, wait) = {
            let locked = manager.lock().expect("manager mutex poisoned");
            match locked.next_deadline() {
                Some(deadline) => (deadline, deadline.saturating_duration_since(locked.now())),
                None => break,
            }
        };

        time::sleep(wait).await;

        manager
            .lock()
            .expect("manager mutex poisoned")
            .tick_at(deadline);
    }
}
