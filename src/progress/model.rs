//! Mutable learning-state records
//!
//! One [`WordProgress`] per word (created lazily), one [`SongProgress`] per
//! song, and a singleton [`UserStats`]. All three serialize into the
//! key-value snapshots managed by [`super::storage`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Learning status of a word
///
/// Transitions only move forward: new → learning → learned. Wrong answers
/// reset the review interval but never demote the status. `Review` is kept
/// for snapshot compatibility; no operation currently produces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordStatus {
    #[default]
    New,
    Learning,
    Learned,
    Review,
}

/// Per-word review state, created on first interaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordProgress {
    pub word_id: String,
    pub status: WordStatus,
    pub correct_count: u32,
    pub wrong_count: u32,
    pub last_reviewed: Option<DateTime<Utc>>,
    pub next_review: Option<DateTime<Utc>>,
    /// Days until the next review, one of the scheduler ladder rungs
    pub interval: u32,
    pub is_favorite: bool,
    pub learned_at: Option<DateTime<Utc>>,
}

impl WordProgress {
    /// Fresh record for a word that has never been seen
    pub fn new(word_id: impl Into<String>) -> Self {
        Self {
            word_id: word_id.into(),
            status: WordStatus::New,
            correct_count: 0,
            wrong_count: 0,
            last_reviewed: None,
            next_review: None,
            interval: 1,
            is_favorite: false,
            learned_at: None,
        }
    }
}

/// Per-song aggregate state, created when study starts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongProgress {
    pub song_id: String,
    pub started_at: DateTime<Utc>,
    /// Set exactly once, when every word of the song reaches learned
    pub completed_at: Option<DateTime<Utc>>,
    /// Recomputed by full scan, never incrementally maintained
    pub words_learned: usize,
    /// Snapshot of the song's catalog word count at start
    pub total_words: usize,
}

/// Global user statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_words_learned: u32,
    pub total_songs_completed: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// ISO calendar date (UTC) of the last active day; empty before the
    /// first session
    pub last_active_date: String,
    pub daily_goal: u32,
    /// Words learned today; resets on the first session of a new day
    pub today_words: u32,
    pub total_reviews: u32,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            total_words_learned: 0,
            total_songs_completed: 0,
            current_streak: 0,
            longest_streak: 0,
            last_active_date: String::new(),
            daily_goal: 10,
            today_words: 0,
            total_reviews: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_word_progress_defaults() {
        let progress = WordProgress::new("w1");
        assert_eq!(progress.status, WordStatus::New);
        assert_eq!(progress.interval, 1);
        assert_eq!(progress.correct_count, 0);
        assert!(progress.last_reviewed.is_none());
        assert!(!progress.is_favorite);
    }

    #[test]
    fn default_stats_have_daily_goal_of_ten() {
        let stats = UserStats::default();
        assert_eq!(stats.daily_goal, 10);
        assert!(stats.last_active_date.is_empty());
    }

    #[test]
    fn word_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&WordStatus::Learned).unwrap(), "\"learned\"");
        let status: WordStatus = serde_json::from_str("\"review\"").unwrap();
        assert_eq!(status, WordStatus::Review);
    }
}
