//! The built-in song list
//!
//! Each song owns an ordered slice of the word ids defined in
//! [`super::words`]. Color fields are opaque hex strings; nothing in the
//! data layer interprets them.

use super::model::Song;

fn song(
    id: &str,
    title: &str,
    artist: &str,
    words: &[&str],
    accent: &str,
    gradient_from: &str,
    gradient_to: &str,
) -> Song {
    Song {
        id: id.into(),
        title: title.into(),
        artist: artist.into(),
        words: words.iter().map(|w| (*w).into()).collect(),
        accent: accent.into(),
        gradient_from: gradient_from.into(),
        gradient_to: gradient_to.into(),
    }
}

/// The full song list, in catalog order
pub fn songs() -> Vec<Song> {
    vec![
        song(
            "bts-dynamite",
            "Dynamite",
            "BTS",
            &[
                "w1", "w2", "w3", "w4", "w5", "w6", "w7", "w8", "w9", "w10", "w11", "w12", "w13",
                "w14", "w15",
            ],
            "#9333ea",
            "#9333ea",
            "#4f46e5",
        ),
        song(
            "blackpink-hylt",
            "How You Like That",
            "BLACKPINK",
            &["w16", "w17", "w18", "w19", "w20", "w21", "w22", "w23", "w24", "w25", "w26", "w27"],
            "#ec4899",
            "#ec4899",
            "#f43f5e",
        ),
        song(
            "iu-blueming",
            "Blueming",
            "IU",
            &["w28", "w29", "w30", "w31", "w32", "w33", "w34", "w35", "w36", "w37"],
            "#3b82f6",
            "#3b82f6",
            "#06b6d4",
        ),
        song(
            "newjeans-hypeboy",
            "Hype Boy",
            "NewJeans",
            &["w38", "w39", "w40", "w41", "w42", "w43", "w44", "w45", "w46", "w47", "w48", "w49"],
            "#22c55e",
            "#22c55e",
            "#10b981",
        ),
        song(
            "straykids-godsmenu",
            "God's Menu",
            "Stray Kids",
            &[
                "w50", "w51", "w52", "w53", "w54", "w55", "w56", "w57", "w58", "w59", "w60", "w61",
                "w62", "w63",
            ],
            "#f97316",
            "#f97316",
            "#eab308",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn song_list_has_five_entries() {
        assert_eq!(songs().len(), 5);
    }

    #[test]
    fn songs_reference_sequential_word_ids() {
        let total: usize = songs().iter().map(|s| s.words.len()).sum();
        assert_eq!(total, 63);
    }

    #[test]
    fn song_colors_are_hex_strings() {
        for s in songs() {
            assert!(s.accent.starts_with('#'), "{} accent {}", s.id, s.accent);
            assert_eq!(s.accent.len(), 7);
        }
    }
}
