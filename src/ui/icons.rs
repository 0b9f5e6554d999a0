//! Achievement icon resolution
//!
//! The data layer stores icons as opaque string keys; this table is the only
//! place they become visible glyphs.

/// Resolve an icon key to a terminal glyph
pub fn glyph(icon: &str) -> &'static str {
    match icon {
        "award" => "★",
        "book-open" => "▤",
        "music" => "♪",
        "flame" => "♨",
        "sparkles" => "✧",
        "repeat" => "↻",
        "crown" => "♛",
        "target" => "◎",
        _ => "•",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::achievements;

    #[test]
    fn every_default_achievement_icon_resolves() {
        for achievement in achievements::defaults() {
            assert_ne!(glyph(&achievement.icon), "•", "no glyph for {}", achievement.icon);
        }
    }

    #[test]
    fn unknown_icon_falls_back_to_bullet() {
        assert_eq!(glyph("no-such-icon"), "•");
    }
}
