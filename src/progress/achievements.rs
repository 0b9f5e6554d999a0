//! Achievement definitions and unlock predicates
//!
//! Definitions are static; only `unlocked_at` mutates. The `icon` field is
//! an opaque key resolved to a glyph at the UI boundary, never here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::UserStats;

/// Which statistic an achievement thresholds on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementKind {
    WordsLearned,
    SongsCompleted,
    Streak,
    Reviews,
}

/// Threshold predicate over the user statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub kind: RequirementKind,
    pub count: u32,
}

impl Requirement {
    /// Whether the current statistics satisfy this requirement
    pub fn satisfied_by(&self, stats: &UserStats) -> bool {
        let value = match self.kind {
            RequirementKind::WordsLearned => stats.total_words_learned,
            RequirementKind::SongsCompleted => stats.total_songs_completed,
            RequirementKind::Streak => stats.current_streak,
            RequirementKind::Reviews => stats.total_reviews,
        };
        value >= self.count
    }
}

/// A one-time unlockable milestone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Opaque icon key, e.g. "flame"
    pub icon: String,
    /// Set at most once; cleared only by a global reset
    pub unlocked_at: Option<DateTime<Utc>>,
    pub requirement: Requirement,
}

impl Achievement {
    fn new(
        id: &str,
        title: &str,
        description: &str,
        icon: &str,
        kind: RequirementKind,
        count: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
            unlocked_at: None,
            requirement: Requirement { kind, count },
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked_at.is_some()
    }
}

/// The static achievement list, in evaluation order
pub fn defaults() -> Vec<Achievement> {
    use self::RequirementKind::{Reviews, SongsCompleted, Streak, WordsLearned};

    vec![
        Achievement::new("first_10", "First Steps", "Learn your first 10 words", "award", WordsLearned, 10),
        Achievement::new("scholar_50", "Diligent Scholar", "Learn 50 words", "book-open", WordsLearned, 50),
        Achievement::new("song_master", "Song Master", "Learn every word of one song", "music", SongsCompleted, 1),
        Achievement::new("streak_7", "Week on Fire", "Study 7 days in a row", "flame", Streak, 7),
        Achievement::new("topik_master", "TOPIK 1 Master", "Learn 250 TOPIK 1 words", "sparkles", WordsLearned, 250),
        Achievement::new("review_100", "Repetition Pays", "Complete 100 reviews", "repeat", Reviews, 100),
        Achievement::new("all_songs", "K-Pop Guru", "Master every available song", "crown", SongsCompleted, 5),
        Achievement::new("streak_30", "Month of Discipline", "Study 30 days in a row", "target", Streak, 30),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_start_locked() {
        let list = defaults();
        assert_eq!(list.len(), 8);
        assert!(list.iter().all(|a| !a.is_unlocked()));
    }

    #[test]
    fn default_ids_are_unique() {
        let list = defaults();
        let ids: std::collections::HashSet<&str> = list.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), list.len());
    }

    #[test]
    fn words_learned_requirement_thresholds() {
        let req = Requirement { kind: RequirementKind::WordsLearned, count: 10 };
        let mut stats = UserStats::default();

        stats.total_words_learned = 9;
        assert!(!req.satisfied_by(&stats));

        stats.total_words_learned = 10;
        assert!(req.satisfied_by(&stats));
    }

    #[test]
    fn streak_requirement_reads_current_streak() {
        let req = Requirement { kind: RequirementKind::Streak, count: 7 };
        let stats = UserStats { current_streak: 7, longest_streak: 30, ..UserStats::default() };
        assert!(req.satisfied_by(&stats));

        let stats = UserStats { current_streak: 3, longest_streak: 30, ..UserStats::default() };
        assert!(!req.satisfied_by(&stats), "longest streak must not count");
    }

    #[test]
    fn requirement_kind_serializes_snake_case() {
        let json = serde_json::to_string(&RequirementKind::WordsLearned).unwrap();
        assert_eq!(json, "\"words_learned\"");
    }
}
