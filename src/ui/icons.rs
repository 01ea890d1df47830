// SPDX-License-Identifier: MPL-2.0
//! Icon-token rendering.
//!
//! Icon tokens are opaque strings chosen by callers (the built-in
//! severities use Bootstrap Icons names). This module maps the tokens it
//! knows to text glyphs; anything else renders as a neutral bullet, so a
//! misspelled token degrades gracefully instead of failing.

use iced::widget::{text, Text};

/// Returns the glyph for an icon token.
#[must_use]
pub fn glyph(token: &str) -> char {
    match token {
        "bi-check-circle-fill" => '\u{2714}',        // heavy check mark
        "bi-exclamation-triangle-fill" => '\u{26A0}', // warning sign
        "bi-info-circle-fill" => '\u{2139}',          // information source
        "bi-arrow-repeat" => '\u{27F3}',              // clockwise arrow
        "bi-x-circle-fill" => '\u{2716}',             // heavy multiplication x
        "bi-bell-fill" => '\u{1F514}',                // bell
        _ => '\u{2022}',                              // bullet
    }
}

/// Builds a sized text widget for an icon token.
#[must_use]
pub fn sized<'a>(token: &str, size: f32) -> Text<'a> {
    text(glyph(token).to_string()).size(size)
}
