//! Data model for the vocabulary catalog
//!
//! Words and songs are immutable reference data compiled into the binary.
//! Progress tracking never writes back into these types.

use serde::{Deserialize, Serialize};

/// Grammatical category of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Particle,
}

impl PartOfSpeech {
    /// Short label for display next to a word
    pub fn label(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adj.",
            PartOfSpeech::Adverb => "adv.",
            PartOfSpeech::Particle => "part.",
        }
    }
}

/// An illustrative sentence from the song a word appears in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Example {
    /// Korean sentence
    pub hangul: String,
    /// English translation
    pub translation: String,
    /// The song this example is taken from
    pub song_id: String,
}

/// A vocabulary word
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    /// Unique identifier (e.g., "w17")
    pub id: String,
    /// The word in Hangul
    pub hangul: String,
    /// One or more English glosses
    pub meanings: Vec<String>,
    /// Romanized pronunciation
    pub romanization: String,
    /// Grammatical category
    pub part_of_speech: PartOfSpeech,
    /// Difficulty tier, 1 (easiest) to 3
    pub difficulty: u8,
    /// Example sentence tied to the owning song
    pub example: Example,
}

impl Word {
    /// Primary gloss, used where only one translation fits
    pub fn primary_meaning(&self) -> &str {
        self.meanings.first().map(String::as_str).unwrap_or_default()
    }
}

/// A song and the words it teaches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    /// Unique identifier (e.g., "bts-dynamite")
    pub id: String,
    /// Song title
    pub title: String,
    /// Performing artist
    pub artist: String,
    /// Word ids taught by this song, in teaching order
    pub words: Vec<String>,
    /// Accent color as an opaque hex string, resolved only by the UI
    pub accent: String,
    /// Gradient start color (hex string)
    pub gradient_from: String,
    /// Gradient end color (hex string)
    pub gradient_to: String,
}

impl Song {
    /// Number of words this song teaches
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}
