//! Han River Night theme implementation

use ratatui::style::Color;

use super::Theme;

/// Han River Night color palette
pub const HAN_RIVER_NIGHT: Theme = Theme {
    name: String::new(), // Will be set properly with const fn when stabilized

    // Background colors
    bg_primary: Color::Rgb(22, 22, 34),   // #161622
    bg_secondary: Color::Rgb(34, 36, 54), // #222436

    // Foreground colors
    fg_primary: Color::Rgb(200, 205, 230),   // #c8cde6
    fg_secondary: Color::Rgb(170, 178, 210), // #aab2d2
    fg_muted: Color::Rgb(94, 102, 140),      // #5e668c

    // Accent colors
    accent_primary: Color::Rgb(236, 72, 153),   // #ec4899
    accent_secondary: Color::Rgb(147, 51, 234), // #9333ea

    // Semantic colors
    success: Color::Rgb(34, 197, 94),   // #22c55e
    warning: Color::Rgb(234, 179, 8),   // #eab308
    error: Color::Rgb(244, 63, 94),     // #f43f5e
    info: Color::Rgb(59, 130, 246),     // #3b82f6

    // UI elements
    border: Color::Rgb(64, 70, 104),          // #404668
    border_focused: Color::Rgb(236, 72, 153), // #ec4899
    selection: Color::Rgb(48, 42, 72),        // #302a48
};

// Workaround for const String
impl Theme {
    pub fn han_river_night() -> Self {
        Theme { name: "Han River Night".to_string(), ..HAN_RIVER_NIGHT }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn han_river_night_has_correct_name() {
        let theme = Theme::han_river_night();
        assert_eq!(theme.name, "Han River Night");
    }

    #[test]
    fn han_river_night_colors_are_rgb() {
        let theme = Theme::han_river_night();
        assert!(matches!(theme.bg_primary, Color::Rgb(_, _, _)));
        assert!(matches!(theme.accent_primary, Color::Rgb(_, _, _)));
    }
}
