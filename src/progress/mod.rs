//! Progress tracking engine
//!
//! The [`ProgressStore`] owns every piece of mutable learning state: per-word
//! review records, per-song aggregates, global statistics, achievement
//! unlocks, and the denormalized favorites list. It is constructed
//! explicitly with its data directory and passed by reference; there is no
//! process-wide singleton.
//!
//! Every mutating operation snapshots the affected keys to durable storage
//! as a best-effort side effect. Storage failures are logged and swallowed;
//! the in-memory state change always applies.

pub mod achievements;
pub mod model;
pub mod scheduler;
pub mod storage;

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{Days, Duration, Utc};
use serde::Serialize;

use crate::catalog::Catalog;
use achievements::Achievement;
use model::{SongProgress, UserStats, WordProgress, WordStatus};
use storage::StorageError;

/// The mutable learning-state store
#[derive(Debug)]
pub struct ProgressStore {
    data_dir: PathBuf,
    word_progress: HashMap<String, WordProgress>,
    song_progress: HashMap<String, SongProgress>,
    stats: UserStats,
    achievements: Vec<Achievement>,
    /// Word ids with `is_favorite` set, kept in sync with the flag
    favorites: Vec<String>,
}

impl ProgressStore {
    /// Load the store from the snapshots under `data_dir`
    ///
    /// Missing or corrupt snapshots fall back to defaults. The favorites
    /// list is rebuilt from the word-progress map so the flag/list
    /// invariant holds across restarts.
    pub fn load(data_dir: PathBuf) -> Self {
        let word_progress: HashMap<String, WordProgress> =
            storage::load_key(&data_dir, storage::WORD_PROGRESS);
        let song_progress = storage::load_key(&data_dir, storage::SONG_PROGRESS);
        let stats = storage::load_key(&data_dir, storage::USER_STATS);

        let stored: Vec<Achievement> = storage::load_key(&data_dir, storage::ACHIEVEMENTS);
        let achievements = if stored.is_empty() { achievements::defaults() } else { stored };

        let favorites = word_progress
            .values()
            .filter(|p| p.is_favorite)
            .map(|p| p.word_id.clone())
            .collect();

        Self { data_dir, word_progress, song_progress, stats, achievements, favorites }
    }

    /// Write every snapshot, propagating the first failure
    pub fn save(&self) -> Result<(), StorageError> {
        storage::save_key(&self.data_dir, storage::WORD_PROGRESS, &self.word_progress)?;
        storage::save_key(&self.data_dir, storage::SONG_PROGRESS, &self.song_progress)?;
        storage::save_key(&self.data_dir, storage::USER_STATS, &self.stats)?;
        storage::save_key(&self.data_dir, storage::ACHIEVEMENTS, &self.achievements)?;
        Ok(())
    }

    fn persist<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(err) = storage::save_key(&self.data_dir, key, value) {
            tracing::warn!("snapshot not persisted, continuing in memory: {err}");
        }
    }

    /// Record a study interaction with a word
    ///
    /// `answer` carries review correctness when the interaction was a quiz
    /// or flashcard answer; `mark_as_learned` promotes the word to learned.
    /// A word id unknown to the catalog still creates a progress record.
    pub fn record_answer(&mut self, word_id: &str, answer: Option<bool>, mark_as_learned: bool) {
        let now = Utc::now();

        let progress = self
            .word_progress
            .entry(word_id.to_string())
            .or_insert_with(|| WordProgress::new(word_id));

        if let Some(correct) = answer {
            if correct {
                progress.correct_count += 1;
            } else {
                progress.wrong_count += 1;
            }
            progress.interval = scheduler::next_interval(progress.interval, correct);
            progress.last_reviewed = Some(now);
            progress.next_review = Some(now + Duration::days(i64::from(progress.interval)));
            self.stats.total_reviews += 1;
        }

        if mark_as_learned && progress.status != WordStatus::Learned {
            progress.status = WordStatus::Learned;
            progress.learned_at = Some(now);
            self.stats.total_words_learned += 1;
            self.stats.today_words += 1;
        } else if progress.status == WordStatus::New {
            progress.status = WordStatus::Learning;
        }

        self.persist(storage::WORD_PROGRESS, &self.word_progress);
        self.persist(storage::USER_STATS, &self.stats);
    }

    /// Flip a word's favorite flag, creating its record if needed
    pub fn toggle_favorite(&mut self, word_id: &str) {
        // A first toggle on an untouched word creates the record and
        // favorites it
        let progress = self
            .word_progress
            .entry(word_id.to_string())
            .or_insert_with(|| WordProgress::new(word_id));
        progress.is_favorite = !progress.is_favorite;

        // Flag and list change together so readers never see them disagree
        if progress.is_favorite {
            if !self.favorites.iter().any(|id| id == word_id) {
                self.favorites.push(word_id.to_string());
            }
        } else {
            self.favorites.retain(|id| id != word_id);
        }

        self.persist(storage::WORD_PROGRESS, &self.word_progress);
    }

    /// Begin tracking a song; no-op for unknown ids or songs already started
    pub fn start_song(&mut self, catalog: &Catalog, song_id: &str) {
        if self.song_progress.contains_key(song_id) {
            return;
        }
        let Some(song) = catalog.song(song_id) else {
            return;
        };

        self.song_progress.insert(
            song_id.to_string(),
            SongProgress {
                song_id: song_id.to_string(),
                started_at: Utc::now(),
                completed_at: None,
                words_learned: 0,
                total_words: song.word_count(),
            },
        );
        self.persist(storage::SONG_PROGRESS, &self.song_progress);
    }

    /// Recompute a song's learned-word count from the word records
    ///
    /// Sets `completed_at` and bumps the songs-completed counter exactly
    /// once, the first time every word reaches learned. Idempotent when
    /// nothing changed underneath.
    pub fn refresh_song_progress(&mut self, catalog: &Catalog, song_id: &str) {
        let Some(song) = catalog.song(song_id) else {
            return;
        };
        let Some(progress) = self.song_progress.get_mut(song_id) else {
            return;
        };

        let learned = song
            .words
            .iter()
            .filter(|id| {
                self.word_progress.get(*id).is_some_and(|p| p.status == WordStatus::Learned)
            })
            .count();

        progress.words_learned = learned;

        if learned == song.words.len() && progress.completed_at.is_none() {
            progress.completed_at = Some(Utc::now());
            self.stats.total_songs_completed += 1;
        }

        self.persist(storage::SONG_PROGRESS, &self.song_progress);
        self.persist(storage::USER_STATS, &self.stats);
    }

    /// Roll the daily streak forward
    ///
    /// Meant to run once per session; repeated calls on the same day only
    /// re-apply the longest-streak clamp. A gap of two or more days (or the
    /// first session ever) restarts the streak at 1.
    pub fn update_streak(&mut self) {
        let today = Utc::now().date_naive();
        let today_str = today.to_string();

        if self.stats.last_active_date != today_str {
            let yesterday =
                today.checked_sub_days(Days::new(1)).map(|d| d.to_string()).unwrap_or_default();

            if self.stats.last_active_date == yesterday {
                self.stats.current_streak += 1;
            } else {
                self.stats.current_streak = 1;
            }
            self.stats.today_words = 0;
        }

        self.stats.last_active_date = today_str;
        self.stats.longest_streak = self.stats.longest_streak.max(self.stats.current_streak);

        self.persist(storage::USER_STATS, &self.stats);
    }

    /// Unlock any achievement whose requirement is now satisfied
    ///
    /// Evaluates locked achievements in definition order; ties unlocked in
    /// the same call share a timestamp. Idempotent once everything eligible
    /// is unlocked.
    pub fn check_achievements(&mut self) {
        let now = Utc::now();
        let mut changed = false;

        for achievement in &mut self.achievements {
            if achievement.unlocked_at.is_some() {
                continue;
            }
            if achievement.requirement.satisfied_by(&self.stats) {
                achievement.unlocked_at = Some(now);
                changed = true;
            }
        }

        if changed {
            self.persist(storage::ACHIEVEMENTS, &self.achievements);
        }
    }

    /// Change the daily word goal
    pub fn set_daily_goal(&mut self, goal: u32) {
        self.stats.daily_goal = goal;
        self.persist(storage::USER_STATS, &self.stats);
    }

    /// Wipe all progress, restore defaults, and clear durable storage
    pub fn reset(&mut self) {
        self.word_progress.clear();
        self.song_progress.clear();
        self.stats = UserStats::default();
        self.achievements = achievements::defaults();
        self.favorites.clear();
        storage::clear(&self.data_dir);
    }

    // Read accessors for the presentation layer

    pub fn stats(&self) -> &UserStats {
        &self.stats
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn word_progress(&self, word_id: &str) -> Option<&WordProgress> {
        self.word_progress.get(word_id)
    }

    pub fn song_progress(&self, song_id: &str) -> Option<&SongProgress> {
        self.song_progress.get(song_id)
    }

    /// Favorited word ids, in the order they were first favorited
    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn is_favorite(&self, word_id: &str) -> bool {
        self.word_progress.get(word_id).is_some_and(|p| p.is_favorite)
    }

    /// Status of a word, `New` when it has never been touched
    pub fn word_status(&self, word_id: &str) -> WordStatus {
        self.word_progress.get(word_id).map(|p| p.status).unwrap_or_default()
    }

    /// How many of a song's words are currently learned
    pub fn learned_count(&self, catalog: &Catalog, song_id: &str) -> usize {
        catalog
            .words_for_song(song_id)
            .iter()
            .filter(|w| self.word_status(&w.id) == WordStatus::Learned)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> ProgressStore {
        ProgressStore::load(dir.path().to_path_buf())
    }

    #[test]
    fn correct_answer_updates_counts_and_schedule() {
        let dir = TempDir::new().unwrap();
        let mut store = store(&dir);

        store.record_answer("w1", Some(true), false);

        let progress = store.word_progress("w1").unwrap();
        assert_eq!(progress.correct_count, 1);
        assert_eq!(progress.wrong_count, 0);
        assert_eq!(progress.interval, 3);
        assert!(progress.last_reviewed.is_some());
        assert!(progress.next_review.is_some());
        assert_eq!(store.stats().total_reviews, 1);
    }

    #[test]
    fn wrong_answer_resets_interval_without_demoting() {
        let dir = TempDir::new().unwrap();
        let mut store = store(&dir);

        store.record_answer("w1", Some(true), true);
        store.record_answer("w1", Some(true), false);
        assert_eq!(store.word_progress("w1").unwrap().interval, 7);

        store.record_answer("w1", Some(false), false);
        let progress = store.word_progress("w1").unwrap();
        assert_eq!(progress.interval, 1);
        assert_eq!(progress.status, WordStatus::Learned, "wrong answers never demote");
        assert_eq!(progress.wrong_count, 1);
    }

    #[test]
    fn answerless_interaction_promotes_new_to_learning() {
        let dir = TempDir::new().unwrap();
        let mut store = store(&dir);

        store.record_answer("w1", None, false);

        let progress = store.word_progress("w1").unwrap();
        assert_eq!(progress.status, WordStatus::Learning);
        assert_eq!(store.stats().total_reviews, 0);
        assert!(progress.last_reviewed.is_none());
    }

    #[test]
    fn mark_as_learned_counts_exactly_once() {
        let dir = TempDir::new().unwrap();
        let mut store = store(&dir);

        store.record_answer("w1", Some(true), true);
        assert_eq!(store.stats().total_words_learned, 1);
        assert_eq!(store.stats().today_words, 1);

        store.record_answer("w1", Some(true), true);
        assert_eq!(store.stats().total_words_learned, 1, "no double count");
        assert_eq!(store.stats().today_words, 1);
        assert_eq!(store.stats().total_reviews, 2, "reviews still accrue");
    }

    #[test]
    fn unknown_word_id_still_creates_a_record() {
        let dir = TempDir::new().unwrap();
        let mut store = store(&dir);

        store.record_answer("no-such-word", Some(true), false);
        assert!(store.word_progress("no-such-word").is_some());
    }

    #[test]
    fn favorite_flag_and_list_stay_consistent() {
        let dir = TempDir::new().unwrap();
        let mut store = store(&dir);

        store.toggle_favorite("w5");
        assert!(store.is_favorite("w5"));
        assert_eq!(store.favorites(), ["w5".to_string()]);

        store.toggle_favorite("w5");
        assert!(!store.is_favorite("w5"));
        assert!(store.favorites().is_empty());

        store.toggle_favorite("w5");
        assert!(store.is_favorite("w5"));
        assert_eq!(store.favorites(), ["w5".to_string()]);
    }

    #[test]
    fn favorites_survive_a_reload() {
        let dir = TempDir::new().unwrap();
        let mut store = ProgressStore::load(dir.path().to_path_buf());
        store.toggle_favorite("w5");
        store.toggle_favorite("w9");
        drop(store);

        let reloaded = ProgressStore::load(dir.path().to_path_buf());
        assert!(reloaded.is_favorite("w5"));
        assert!(reloaded.is_favorite("w9"));
        assert_eq!(reloaded.favorites().len(), 2);
    }

    #[test]
    fn start_song_snapshots_total_words_once() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::new();
        let mut store = store(&dir);

        store.start_song(&catalog, "iu-blueming");
        let progress = store.song_progress("iu-blueming").unwrap();
        assert_eq!(progress.total_words, 10);
        assert!(progress.completed_at.is_none());
        let started = progress.started_at;

        store.start_song(&catalog, "iu-blueming");
        assert_eq!(store.song_progress("iu-blueming").unwrap().started_at, started);
    }

    #[test]
    fn start_song_ignores_unknown_ids() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::new();
        let mut store = store(&dir);

        store.start_song(&catalog, "not-a-song");
        assert!(store.song_progress("not-a-song").is_none());
    }

    #[test]
    fn song_completes_exactly_once() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::new();
        let mut store = store(&dir);

        store.start_song(&catalog, "iu-blueming");
        for word in catalog.words_for_song("iu-blueming") {
            store.record_answer(&word.id, Some(true), true);
        }

        store.refresh_song_progress(&catalog, "iu-blueming");
        let completed_at = store.song_progress("iu-blueming").unwrap().completed_at;
        assert!(completed_at.is_some());
        assert_eq!(store.stats().total_songs_completed, 1);

        // Idempotent: a second refresh with nothing changed mutates nothing
        store.refresh_song_progress(&catalog, "iu-blueming");
        assert_eq!(store.song_progress("iu-blueming").unwrap().completed_at, completed_at);
        assert_eq!(store.stats().total_songs_completed, 1);
    }

    #[test]
    fn refresh_recomputes_partial_counts() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::new();
        let mut store = store(&dir);

        store.start_song(&catalog, "iu-blueming");
        store.record_answer("w28", Some(true), true);
        store.record_answer("w29", Some(true), true);

        store.refresh_song_progress(&catalog, "iu-blueming");
        let progress = store.song_progress("iu-blueming").unwrap();
        assert_eq!(progress.words_learned, 2);
        assert!(progress.completed_at.is_none());
        assert_eq!(store.stats().total_songs_completed, 0);
    }

    #[test]
    fn streak_continues_from_yesterday() {
        let dir = TempDir::new().unwrap();
        let mut store = store(&dir);

        let yesterday = Utc::now().date_naive().checked_sub_days(Days::new(1)).unwrap();
        store.stats.last_active_date = yesterday.to_string();
        store.stats.current_streak = 4;
        store.stats.longest_streak = 4;
        store.stats.today_words = 7;

        store.update_streak();

        assert_eq!(store.stats().current_streak, 5);
        assert_eq!(store.stats().longest_streak, 5);
        assert_eq!(store.stats().today_words, 0, "daily counter resets on a new day");
        assert_eq!(store.stats().last_active_date, Utc::now().date_naive().to_string());
    }

    #[test]
    fn streak_resets_after_a_gap() {
        let dir = TempDir::new().unwrap();
        let mut store = store(&dir);

        let long_ago = Utc::now().date_naive().checked_sub_days(Days::new(3)).unwrap();
        store.stats.last_active_date = long_ago.to_string();
        store.stats.current_streak = 9;
        store.stats.longest_streak = 9;

        store.update_streak();

        assert_eq!(store.stats().current_streak, 1);
        assert_eq!(store.stats().longest_streak, 9, "record streak is kept");
    }

    #[test]
    fn first_session_starts_streak_at_one() {
        let dir = TempDir::new().unwrap();
        let mut store = store(&dir);
        assert!(store.stats().last_active_date.is_empty());

        store.update_streak();

        assert_eq!(store.stats().current_streak, 1);
        assert_eq!(store.stats().longest_streak, 1);
    }

    #[test]
    fn same_day_update_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut store = store(&dir);

        store.update_streak();
        store.record_answer("w1", Some(true), true);
        assert_eq!(store.stats().today_words, 1);

        store.update_streak();
        assert_eq!(store.stats().current_streak, 1);
        assert_eq!(store.stats().today_words, 1, "same-day call must not reset the counter");
    }

    #[test]
    fn achievement_unlocks_at_the_threshold() {
        let dir = TempDir::new().unwrap();
        let mut store = store(&dir);

        store.stats.total_words_learned = 9;
        store.check_achievements();
        let first_10 = store.achievements().iter().find(|a| a.id == "first_10").unwrap();
        assert!(!first_10.is_unlocked());

        store.stats.total_words_learned = 10;
        store.check_achievements();
        let first_10 = store.achievements().iter().find(|a| a.id == "first_10").unwrap();
        assert!(first_10.is_unlocked());
    }

    #[test]
    fn unlocked_achievement_keeps_its_timestamp() {
        let dir = TempDir::new().unwrap();
        let mut store = store(&dir);

        store.stats.total_words_learned = 10;
        store.check_achievements();
        let stamped =
            store.achievements().iter().find(|a| a.id == "first_10").unwrap().unlocked_at;

        store.stats.total_words_learned = 50;
        store.check_achievements();
        let first_10 = store.achievements().iter().find(|a| a.id == "first_10").unwrap();
        assert_eq!(first_10.unlocked_at, stamped);
    }

    #[test]
    fn learning_ten_words_unlocks_only_first_10() {
        let dir = TempDir::new().unwrap();
        let mut store = store(&dir);

        for i in 1..=10 {
            store.record_answer(&format!("w{i}"), Some(true), true);
        }
        store.check_achievements();

        assert_eq!(store.stats().total_words_learned, 10);
        for achievement in store.achievements() {
            if achievement.id == "first_10" {
                assert!(achievement.is_unlocked());
            } else {
                assert!(!achievement.is_unlocked(), "{} should stay locked", achievement.id);
            }
        }
    }

    #[test]
    fn reset_restores_defaults_and_clears_disk() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::new();
        let mut store = store(&dir);

        store.start_song(&catalog, "bts-dynamite");
        for i in 1..=10 {
            store.record_answer(&format!("w{i}"), Some(true), true);
        }
        store.toggle_favorite("w1");
        store.check_achievements();

        store.reset();

        assert_eq!(store.stats(), &UserStats::default());
        assert!(store.word_progress("w1").is_none());
        assert!(store.song_progress("bts-dynamite").is_none());
        assert!(store.favorites().is_empty());
        assert!(store.achievements().iter().all(|a| !a.is_unlocked()));

        let reloaded = ProgressStore::load(dir.path().to_path_buf());
        assert_eq!(reloaded.stats(), &UserStats::default());
        assert!(reloaded.word_progress("w1").is_none());
    }

    #[test]
    fn state_round_trips_through_disk() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::new();

        let mut store = ProgressStore::load(dir.path().to_path_buf());
        store.start_song(&catalog, "bts-dynamite");
        store.record_answer("w1", Some(true), true);
        store.update_streak();
        drop(store);

        let reloaded = ProgressStore::load(dir.path().to_path_buf());
        assert_eq!(reloaded.stats().total_words_learned, 1);
        assert_eq!(reloaded.word_status("w1"), WordStatus::Learned);
        assert!(reloaded.song_progress("bts-dynamite").is_some());
        assert_eq!(reloaded.stats().current_streak, 1);
    }
}
