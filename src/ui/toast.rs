// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering mounted notifications.
//!
//! Toasts are the visual form of the lifecycle phases: a `Created` entry is
//! collapsed (attached but not yet visible), a `Shown` entry renders as a
//! card with a severity-colored accent, and a `Hiding` entry renders faded
//! while its exit transition runs.

use iced::widget::{container, text, Column, Container, Row};
use iced::{alignment, Color, Element, Length, Theme};

use super::icons;
use super::style::{self, border, opacity, radius, shadow, spacing, typography};
use crate::lifecycle::Phase;
use crate::manager::Manager;
use crate::surface::Mounted;

/// Toast widget namespace.
pub struct Toast;

impl Toast {
    /// Renders a single mounted notification.
    ///
    /// Produces no messages: toasts are not interactive, the lifecycle
    /// retires them on its own.
    pub fn view<'a, Message: 'a>(mounted: &Mounted) -> Element<'a, Message> {
        let phase = mounted.phase();
        if phase == Phase::Created {
            // Attached but not yet shown: takes no space, like an element
            // whose entry transition has not started.
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let notification = mounted.notification();
        let alpha = phase_alpha(phase);
        let accent = faded(
            style::accent_for_class(notification.class_token()),
            alpha,
        );

        let icon_widget = icons::sized(notification.icon_token(), typography::ICON)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let message_widget = text(notification.message().to_string())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(faded(theme.palette().text, alpha)),
            });

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        Container::new(content)
            .width(Length::Fixed(style::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent, alpha))
            .into()
    }

    /// Renders the overlay with every mounted notification, stacked
    /// top-right in append order.
    ///
    /// The overlay column hugs its corner; the rest of the window stays
    /// free for pointer input.
    pub fn view_overlay<'a, Message: 'a>(manager: &Manager) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .surface()
            .snapshot()
            .iter()
            .map(Self::view)
            .collect();

        if toasts.is_empty() {
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(spacing::MD)
                .into()
        }
    }
}

/// Rendering alpha for a lifecycle phase.
fn phase_alpha(phase: Phase) -> f32 {
    match phase {
        Phase::Hiding => opacity::HIDING,
        _ => opacity::OPAQUE,
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the toast card.
fn toast_container_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let bg_color = faded(theme.extended_palette().background.base.color, alpha);

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(faded(theme.palette().text, alpha)),
        ..Default::default()
    }
}
