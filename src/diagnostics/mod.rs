// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the notification lifecycle.
//!
//! The manager reports what it does (display, phase transitions, detach)
//! through a cheap-clone [`DiagnosticsHandle`]; a [`DiagnosticsCollector`]
//! stores the events in a bounded [`EventLog`]. Collection is strictly
//! non-blocking: events travel over a bounded channel and are dropped when
//! it is full, so diagnostics can never stall the UI thread.
//!
//! # Example
//!
//! ```
//! use iced_snackbar::diagnostics::DiagnosticsCollector;
//! use iced_snackbar::Manager;
//!
//! let mut collector = DiagnosticsCollector::default();
//! let mut manager = Manager::new();
//! manager.set_diagnostics(collector.handle());
//!
//! manager.show_success("Saved");
//! collector.drain();
//! assert_eq!(collector.len(), 1);
//! ```

mod collector;
mod events;
mod log;

pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, LifecycleEvent};
pub use log::{EventLog, DEFAULT_LOG_CAPACITY};
