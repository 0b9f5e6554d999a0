//! The static vocabulary catalog
//!
//! An immutable lookup structure over the built-in words and songs. The
//! catalog is constructed once at startup and shared by reference; progress
//! state lives elsewhere and never writes back into it.

pub mod model;
mod songs;
mod words;

use std::collections::HashMap;

use rand::seq::SliceRandom;

pub use model::{Example, PartOfSpeech, Song, Word};

/// Immutable word/song reference data with id lookup tables
#[derive(Debug)]
pub struct Catalog {
    words: Vec<Word>,
    songs: Vec<Song>,
    word_index: HashMap<String, usize>,
    song_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build the catalog from the built-in data
    pub fn new() -> Self {
        let words = words::words();
        let songs = songs::songs();

        let word_index = words.iter().enumerate().map(|(i, w)| (w.id.clone(), i)).collect();
        let song_index = songs.iter().enumerate().map(|(i, s)| (s.id.clone(), i)).collect();

        Self { words, songs, word_index, song_index }
    }

    /// All words, in catalog order
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// All songs, in catalog order
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Look up a word by id
    pub fn word(&self, word_id: &str) -> Option<&Word> {
        self.word_index.get(word_id).map(|&i| &self.words[i])
    }

    /// Look up a song by id
    pub fn song(&self, song_id: &str) -> Option<&Song> {
        self.song_index.get(song_id).map(|&i| &self.songs[i])
    }

    /// The words a song teaches, in teaching order
    ///
    /// Unknown song ids and word ids missing from the word list both
    /// resolve to an empty/short result rather than an error.
    pub fn words_for_song(&self, song_id: &str) -> Vec<&Word> {
        let Some(song) = self.song(song_id) else {
            return Vec::new();
        };
        song.words.iter().filter_map(|id| self.word(id)).collect()
    }

    /// A uniform random sample of `count` words, without replacement,
    /// excluding the given ids
    pub fn random_words(&self, count: usize, exclude: &[&str]) -> Vec<&Word> {
        let available: Vec<&Word> =
            self.words.iter().filter(|w| !exclude.contains(&w.id.as_str())).collect();

        let mut rng = rand::thread_rng();
        available.choose_multiple(&mut rng, count).copied().collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn word_lookup_round_trips() {
        let catalog = Catalog::new();
        let word = catalog.word("w18").unwrap();
        assert_eq!(word.hangul, "사랑");
        assert!(catalog.word("nope").is_none());
    }

    #[test]
    fn song_lookup_round_trips() {
        let catalog = Catalog::new();
        let song = catalog.song("iu-blueming").unwrap();
        assert_eq!(song.artist, "IU");
        assert!(catalog.song("nope").is_none());
    }

    #[test]
    fn words_for_song_preserves_teaching_order() {
        let catalog = Catalog::new();
        let words = catalog.words_for_song("iu-blueming");
        assert_eq!(words.len(), 10);
        assert_eq!(words[0].id, "w28");
        assert_eq!(words[9].id, "w37");
    }

    #[test]
    fn words_for_unknown_song_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.words_for_song("missing").is_empty());
    }

    #[test]
    fn every_song_word_resolves() {
        let catalog = Catalog::new();
        for song in catalog.songs() {
            assert_eq!(catalog.words_for_song(&song.id).len(), song.word_count());
        }
    }

    #[test]
    fn random_words_respects_count_and_exclusions() {
        let catalog = Catalog::new();
        let sample = catalog.random_words(5, &["w1", "w2"]);
        assert_eq!(sample.len(), 5);

        let ids: HashSet<&str> = sample.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids.len(), 5, "sample must not repeat words");
        assert!(!ids.contains("w1"));
        assert!(!ids.contains("w2"));
    }

    #[test]
    fn random_words_caps_at_available() {
        let catalog = Catalog::new();
        let all: Vec<&str> = catalog.words().iter().map(|w| w.id.as_str()).collect();
        let sample = catalog.random_words(10, &all[..60]);
        assert_eq!(sample.len(), 3);
    }
}
