// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A [`Notification`] is the ephemeral value handed to the manager: a
//! message, a severity, an icon token, and an optional display duration.
//! Severity and icon tokens are opaque classifiers; the core attaches them
//! to the mounted element and leaves their interpretation to whatever
//! presentation layer renders the surface.

use std::time::Duration;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric value, e.g. for diagnostics.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity classifies a notification for the presentation layer.
///
/// The four fixed variants carry well-known class tokens; `Custom` carries
/// a caller-supplied one. Tokens are never validated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Operation completed successfully.
    Success,
    /// Something went wrong.
    Alert,
    /// Informational message.
    Info,
    /// Something the user should look at, short of a failure.
    Warning,
    /// Caller-supplied classifier token.
    Custom(String),
}

impl Severity {
    /// Returns the style-class token attached to the mounted element.
    #[must_use]
    pub fn class_token(&self) -> &str {
        match self {
            Severity::Success => "success",
            Severity::Alert => "alert",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Custom(token) => token,
        }
    }

    /// Returns the default icon token for this severity.
    ///
    /// `Custom` notifications always carry a caller-supplied icon, so their
    /// default is empty.
    #[must_use]
    pub fn default_icon_token(&self) -> &str {
        match self {
            Severity::Success => "bi-check-circle-fill",
            Severity::Alert | Severity::Warning => "bi-exclamation-triangle-fill",
            Severity::Info => "bi-info-circle-fill",
            Severity::Custom(_) => "",
        }
    }
}

/// A notification to be displayed on the surface.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    icon: String,
    /// Display duration override; the manager's default applies when unset.
    duration: Option<Duration>,
}

impl Notification {
    /// Creates a notification with the given severity and its default icon.
    ///
    /// The message is carried verbatim; callers are responsible for any
    /// sanitizing their presentation layer requires.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        let icon = severity.default_icon_token().to_string();
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            icon,
            duration: None,
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an alert notification.
    pub fn alert(message: impl Into<String>) -> Self {
        Self::new(Severity::Alert, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates a notification with caller-supplied class and icon tokens.
    pub fn custom(
        message: impl Into<String>,
        class: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            severity: Severity::Custom(class.into()),
            message: message.into(),
            icon: icon.into(),
            duration: None,
        }
    }

    /// Sets the display duration, overriding the manager default.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Replaces the icon token.
    #[must_use]
    pub fn icon(mut self, token: impl Into<String>) -> Self {
        self.icon = token.into();
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity.
    #[must_use]
    pub fn severity(&self) -> &Severity {
        &self.severity
    }

    /// Returns the style-class token.
    #[must_use]
    pub fn class_token(&self) -> &str {
        self.severity.class_token()
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the icon token.
    #[must_use]
    pub fn icon_token(&self) -> &str {
        &self.icon
    }

    /// Returns the duration override, if any.
    #[must_use]
    pub fn duration_override(&self) -> Option<Duration> {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("saved");
        let n2 = Notification::success("saved");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn constructors_bind_class_tokens() {
        assert_eq!(Notification::success("m").class_token(), "success");
        assert_eq!(Notification::alert("m").class_token(), "alert");
        assert_eq!(Notification::info("m").class_token(), "info");
        assert_eq!(Notification::warning("m").class_token(), "warning");
    }

    #[test]
    fn constructors_bind_default_icons() {
        assert_eq!(
            Notification::success("m").icon_token(),
            "bi-check-circle-fill"
        );
        assert_eq!(
            Notification::alert("m").icon_token(),
            "bi-exclamation-triangle-fill"
        );
        assert_eq!(Notification::info("m").icon_token(), "bi-info-circle-fill");
        assert_eq!(
            Notification::warning("m").icon_token(),
            "bi-exclamation-triangle-fill"
        );
    }

    #[test]
    fn custom_carries_caller_tokens_verbatim() {
        let n = Notification::custom("Retry?", "warn-custom", "bi-arrow-repeat");
        assert_eq!(n.class_token(), "warn-custom");
        assert_eq!(n.icon_token(), "bi-arrow-repeat");
        assert_eq!(n.message(), "Retry?");
    }

    #[test]
    fn duration_defaults_to_unset() {
        assert!(Notification::info("m").duration_override().is_none());
    }

    #[test]
    fn duration_builder_overrides() {
        let n = Notification::info("m").duration(Duration::from_millis(1000));
        assert_eq!(n.duration_override(), Some(Duration::from_millis(1000)));
    }

    #[test]
    fn icon_builder_replaces_default() {
        let n = Notification::success("m").icon("bi-floppy");
        assert_eq!(n.icon_token(), "bi-floppy");
    }

    #[test]
    fn message_is_not_sanitized() {
        let raw = "<b>Saved & sound</b>";
        assert_eq!(Notification::success(raw).message(), raw);
    }
}
