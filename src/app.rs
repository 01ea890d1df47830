// SPDX-License-Identifier: MPL-2.0
//! Demo application: a row of buttons firing each notification kind onto
//! the shared surface, with the toast overlay stacked on top.
//!
//! This is also the reference composition root: it owns the surface slot,
//! builds the manager over it with timing from the persisted config, and
//! wires the diagnostics collector into the tick.

use std::time::{Duration, Instant};

use iced::widget::{button, text, Column, Container, Row, Stack};
use iced::{alignment, time, Element, Length, Subscription, Task, Theme};

use crate::config;
use crate::diagnostics::DiagnosticsCollector;
use crate::manager::Manager;
use crate::notification::Notification;
use crate::surface::Surface;
use crate::ui::Toast;

/// Tick cadence while notifications are mounted.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Runtime flags parsed from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Display duration override in milliseconds for the demo buttons.
    pub duration_ms: Option<u64>,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    ShowSuccess,
    ShowAlert,
    ShowInfo,
    ShowWarning,
    ShowCustom,
    /// Periodic tick advancing lifecycles and draining diagnostics.
    Tick(Instant),
}

/// Root application state.
pub struct App {
    manager: Manager,
    collector: DiagnosticsCollector,
    /// Per-run duration override from the CLI.
    duration: Option<Duration>,
    /// Number of notifications fired, used to vary the demo messages.
    fired: u32,
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();

        let mut slot: Option<Surface> = None;
        let mut manager = Manager::attached(&mut slot).timing(config.timing());
        let collector = DiagnosticsCollector::default();
        manager.set_diagnostics(collector.handle());

        let app = Self {
            manager,
            collector,
            duration: flags.duration_ms.map(Duration::from_millis),
            fired: 0,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        "Snackbar Demo".to_string()
    }

    fn theme(&self) -> Theme {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowSuccess => {
                self.fire(Notification::success(self.numbered("Saved")));
            }
            Message::ShowAlert => {
                self.fire(Notification::alert(self.numbered("Something failed")));
            }
            Message::ShowInfo => {
                self.fire(Notification::info(self.numbered("For your information")));
            }
            Message::ShowWarning => {
                self.fire(Notification::warning(self.numbered("Careful now")));
            }
            Message::ShowCustom => {
                self.fire(
                    Notification::custom(self.numbered("Retry?"), "warn-custom", "bi-arrow-repeat")
                        .duration(Duration::from_millis(1000)),
                );
            }
            Message::Tick(_) => {
                self.manager.tick();
                self.collector.drain();
            }
        }
        Task::none()
    }

    fn fire(&mut self, notification: Notification) {
        self.fired += 1;
        let notification = match self.duration {
            Some(duration) => notification.duration(duration),
            None => notification,
        };
        self.manager.display(notification);
    }

    fn numbered(&self, message: &str) -> String {
        format!("{} (#{})", message, self.fired + 1)
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = Row::new()
            .spacing(8.0)
            .push(button(text("Success")).on_press(Message::ShowSuccess))
            .push(button(text("Alert")).on_press(Message::ShowAlert))
            .push(button(text("Info")).on_press(Message::ShowInfo))
            .push(button(text("Warning")).on_press(Message::ShowWarning))
            .push(button(text("Custom")).on_press(Message::ShowCustom));

        let status = text(format!(
            "{} mounted, {} diagnostic events",
            self.manager.surface().len(),
            self.collector.len()
        ))
        .size(13.0);

        let content = Container::new(
            Column::new()
                .spacing(16.0)
                .align_x(alignment::Horizontal::Center)
                .push(controls)
                .push(status),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

        Stack::with_children(vec![
            content.into(),
            Toast::view_overlay(&self.manager),
        ])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.manager.has_mounted() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming them once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .run()
}
