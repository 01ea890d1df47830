// SPDX-License-Identifier: MPL-2.0
//! `iced_snackbar` provides transient snackbar/toast notifications with a
//! clock-driven lifecycle.
//!
//! The core is UI-toolkit independent: a [`Manager`] mounts notifications
//! on a shared [`Surface`] and walks each one through
//! `Created → Shown → Hiding → Removed` on a schedule taken from an
//! injected [`Clock`]. The [`ui`] module renders the surface with Iced, and
//! the [`driver`] module drives lifecycles from a tokio task when no UI
//! tick is available.
//!
//! ```
//! use iced_snackbar::Manager;
//!
//! let mut manager = Manager::new();
//! manager.show_success("Saved");
//! assert!(manager.has_mounted());
//! ```

#![doc(html_root_url = "https://docs.rs/iced_snackbar/0.1.0")]

pub mod app;
pub mod clock;
pub mod config;
pub mod diagnostics;
pub mod driver;
pub mod error;
pub mod lifecycle;
pub mod manager;
pub mod notification;
pub mod surface;
pub mod ui;

pub use clock::{Clock, ManualClock, SystemClock};
pub use lifecycle::{Phase, Timing};
pub use manager::Manager;
pub use notification::{Notification, NotificationId, Severity};
pub use surface::Surface;
