//! Theming system for Gasa

mod han_river_night;

pub use han_river_night::HAN_RIVER_NIGHT;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// A color theme for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,

    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,

    // Foreground colors
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // UI elements
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::han_river_night()
    }
}

/// Parse an opaque "#rrggbb" catalog color into a terminal color
///
/// Falls back to the given color when the string is not a 7-char hex
/// triplet; the data layer never guarantees one.
pub fn parse_hex(hex: &str, fallback: Color) -> Color {
    let Some(hex) = hex.strip_prefix('#') else {
        return fallback;
    };
    if hex.len() != 6 {
        return fallback;
    }

    match (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_han_river_night() {
        let theme = Theme::default();
        assert_eq!(theme.name, "Han River Night");
    }

    #[test]
    fn parse_hex_reads_song_accents() {
        assert_eq!(parse_hex("#9333ea", Color::White), Color::Rgb(0x93, 0x33, 0xea));
        assert_eq!(parse_hex("#f97316", Color::White), Color::Rgb(0xf9, 0x73, 0x16));
    }

    #[test]
    fn parse_hex_falls_back_on_garbage() {
        assert_eq!(parse_hex("red", Color::White), Color::White);
        assert_eq!(parse_hex("#zzzzzz", Color::White), Color::White);
        assert_eq!(parse_hex("#fff", Color::White), Color::White);
    }
}
