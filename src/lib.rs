//! Gasa - a TUI for learning Korean vocabulary through K-pop songs
//!
//! Gasa teaches TOPIK 1 vocabulary grouped by the songs that use it, with
//! flashcards, quizzes, spaced-repetition scheduling, streaks, and
//! achievements.

pub mod app;
pub mod catalog;
pub mod config;
pub mod progress;
pub mod speech;
pub mod theme;
pub mod ui;

pub use app::App;
pub use catalog::Catalog;
pub use config::Config;
pub use progress::ProgressStore;
pub use theme::Theme;
