// SPDX-License-Identifier: MPL-2.0
//! Styling constants and class-token mapping for toast rendering.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Semantic accents
    pub const SUCCESS: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const ALERT: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const INFO: Color = Color::from_rgb(0.392, 0.588, 1.0);
    pub const WARNING: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

pub mod opacity {
    /// Alpha applied to a toast while its exit transition runs.
    pub const HIDING: f32 = 0.45;
    pub const OPAQUE: f32 = 1.0;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

pub mod typography {
    /// Toast message text.
    pub const BODY: f32 = 14.0;
    /// Icon glyph.
    pub const ICON: f32 = 18.0;
}

pub mod border {
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const MD: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

/// Fixed toast card width.
pub const TOAST_WIDTH: f32 = 320.0;

/// Maps a style-class token to its accent color.
///
/// Unknown tokens get the neutral accent; tokens are never validated.
#[must_use]
pub fn accent_for_class(token: &str) -> Color {
    match token {
        "success" => palette::SUCCESS,
        "alert" => palette::ALERT,
        "info" => palette::INFO,
        "warning" => palette::WARNING,
        _ => palette::GRAY_400,
    }
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(opacity::HIDING > 0.0 && opacity::HIDING < opacity::OPAQUE);
    assert!(TOAST_WIDTH > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_class_tokens_have_distinct_accents() {
        let success = accent_for_class("success");
        let alert = accent_for_class("alert");
        let info = accent_for_class("info");
        let warning = accent_for_class("warning");

        assert_ne!(success, alert);
        assert_ne!(success, info);
        assert_ne!(success, warning);
        assert_ne!(alert, info);
        assert_ne!(alert, warning);
        assert_ne!(info, warning);
    }

    #[test]
    fn unknown_class_token_falls_back_to_neutral() {
        assert_eq!(accent_for_class("warn-custom"), palette::GRAY_400);
        assert_eq!(accent_for_class(""), palette::GRAY_400);
    }
}
