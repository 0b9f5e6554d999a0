//! Application state definitions

use std::collections::HashSet;

use crate::app::quiz::QuizState;

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    /// Song library overview
    #[default]
    Library,
    /// Studying a single song
    Song,
    /// Favorited words across all songs
    Favorites,
    /// Stats and achievements
    Progress,
    Help,
}

/// Study mode within the song screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StudyMode {
    #[default]
    Vocabulary,
    Flashcards,
    Quiz,
}

/// Library filter over song progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SongFilter {
    #[default]
    All,
    Started,
    Completed,
}

impl SongFilter {
    /// Cycle to the next filter
    pub fn next(self) -> Self {
        match self {
            SongFilter::All => SongFilter::Started,
            SongFilter::Started => SongFilter::Completed,
            SongFilter::Completed => SongFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SongFilter::All => "all",
            SongFilter::Started => "started",
            SongFilter::Completed => "completed",
        }
    }
}

/// State for the song library screen
#[derive(Debug, Clone, Default)]
pub struct LibraryState {
    /// Selected index within the filtered song list
    pub selected: usize,
    pub filter: SongFilter,
}

impl LibraryState {
    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the selection inside a list that may have shrunk after a
    /// filter change
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

/// State for a scrollable word list
#[derive(Debug, Clone, Default)]
pub struct WordListState {
    pub selected: usize,
    pub scroll_offset: usize,
    /// Visible height in rows (updated on render)
    pub visible_height: usize,
}

impl WordListState {
    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
        self.ensure_selection_visible();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.ensure_selection_visible();
    }

    /// Ensure the selected row is visible by adjusting scroll offset
    pub fn ensure_selection_visible(&mut self) {
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        }
        let visible = self.visible_height.saturating_sub(1);
        if visible > 0 && self.selected >= self.scroll_offset + visible {
            self.scroll_offset = self.selected.saturating_sub(visible) + 1;
        }
    }

    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }
}

/// State for a flashcard run over a song's words
#[derive(Debug, Clone, Default)]
pub struct FlashcardState {
    pub index: usize,
    pub flipped: bool,
    /// Words marked known during this run
    pub learned_in_session: HashSet<String>,
}

impl FlashcardState {
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn next(&mut self, len: usize) {
        if len > 0 && self.index + 1 < len {
            self.index += 1;
            self.flipped = false;
        }
    }

    pub fn prev(&mut self) {
        if self.index > 0 {
            self.index -= 1;
            self.flipped = false;
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.flipped = false;
        self.learned_in_session.clear();
    }

    /// Every card in a deck of `len` words has been marked known
    pub fn session_complete(&self, len: usize) -> bool {
        len > 0 && self.learned_in_session.len() >= len
    }
}

/// Transient status line shown at the bottom of the screen
#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: Option<String>,
    pub is_error: bool,
}

impl StatusState {
    /// Set a status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = false;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = true;
    }

    pub fn clear(&mut self) {
        self.message = None;
    }
}

/// Full application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Current screen
    pub screen: Screen,

    /// Library browser state
    pub library: LibraryState,

    /// Song currently being studied (id into the catalog)
    pub current_song: Option<String>,

    /// Study mode within the song screen
    pub study_mode: StudyMode,

    /// Word list state for the vocabulary and favorites views
    pub word_list: WordListState,

    /// Flashcard run state
    pub flashcards: FlashcardState,

    /// Quiz session state
    pub quiz: QuizState,

    /// Status line
    pub status: StatusState,
}

impl AppState {
    /// Enter the song screen for the given song id
    pub fn open_song(&mut self, song_id: impl Into<String>) {
        self.current_song = Some(song_id.into());
        self.screen = Screen::Song;
        self.study_mode = StudyMode::Vocabulary;
        self.word_list.reset();
        self.flashcards.reset();
        self.quiz = QuizState::default();
    }

    /// Leave the song screen back to the library
    pub fn close_song(&mut self) {
        self.current_song = None;
        self.screen = Screen::Library;
        self.quiz = QuizState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn song_filter_cycles_through_all_variants() {
        let start = SongFilter::All;
        assert_eq!(start.next(), SongFilter::Started);
        assert_eq!(start.next().next(), SongFilter::Completed);
        assert_eq!(start.next().next().next(), SongFilter::All);
    }

    #[test]
    fn library_selection_stays_in_bounds() {
        let mut library = LibraryState::default();
        library.select_next(2);
        library.select_next(2);
        assert_eq!(library.selected, 1, "cannot move past the end");

        library.select_prev();
        library.select_prev();
        assert_eq!(library.selected, 0);
    }

    #[test]
    fn library_clamp_handles_shrunk_lists() {
        let mut library = LibraryState { selected: 4, filter: SongFilter::All };
        library.clamp(2);
        assert_eq!(library.selected, 1);
        library.clamp(0);
        assert_eq!(library.selected, 0);
    }

    #[test]
    fn word_list_scrolls_to_keep_selection_visible() {
        let mut list = WordListState { visible_height: 5, ..WordListState::default() };
        for _ in 0..9 {
            list.select_next(10);
        }
        assert_eq!(list.selected, 9);
        assert!(list.scroll_offset > 0);
        assert!(list.selected >= list.scroll_offset);

        for _ in 0..9 {
            list.select_prev();
        }
        assert_eq!(list.scroll_offset, 0);
    }

    #[test]
    fn flashcard_flip_resets_on_navigation() {
        let mut cards = FlashcardState::default();
        cards.flip();
        assert!(cards.flipped);

        cards.next(3);
        assert_eq!(cards.index, 1);
        assert!(!cards.flipped, "navigating shows the new card front first");
    }

    #[test]
    fn flashcard_session_completes_when_all_known() {
        let mut cards = FlashcardState::default();
        assert!(!cards.session_complete(2));

        cards.learned_in_session.insert("w1".into());
        cards.learned_in_session.insert("w2".into());
        assert!(cards.session_complete(2));
    }

    #[test]
    fn open_song_resets_study_state() {
        let mut state = AppState::default();
        state.study_mode = StudyMode::Quiz;
        state.word_list.selected = 7;

        state.open_song("bts-dynamite");

        assert_eq!(state.screen, Screen::Song);
        assert_eq!(state.study_mode, StudyMode::Vocabulary);
        assert_eq!(state.word_list.selected, 0);
        assert_eq!(state.current_song.as_deref(), Some("bts-dynamite"));
    }
}
