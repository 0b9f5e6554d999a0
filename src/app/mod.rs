//! Application state and event handling

pub mod input;
pub mod quiz;
pub mod state;

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::progress::ProgressStore;
use crate::speech::Speech;
use crate::ui;
use input::Action;
use quiz::{QuizKind, QuizState};
use state::{AppState, Screen, SongFilter, StudyMode};

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Static word/song reference data
    catalog: Catalog,

    /// Mutable learning state
    store: ProgressStore,

    /// Text-to-speech pipeline
    speech: Speech,

    /// Current application state
    state: AppState,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Result<Self> {
        let catalog = Catalog::new();

        let mut store = ProgressStore::load(Config::data_dir()?);
        store.update_streak();
        store.check_achievements();

        let speech = Speech::new(config.speech_rate);
        let terminal = Self::setup_terminal()?;

        Ok(Self { config, catalog, store, speech, state: AppState::default(), terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        loop {
            self.terminal.draw(|frame| {
                ui::draw(frame, &mut self.state, &self.catalog, &self.store, &self.config);
            })?;

            if event::poll(std::time::Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match self.handle_key(key.code) {
                            Ok(true) => break, // Exit requested
                            Ok(false) => {}    // Continue
                            Err(e) => {
                                tracing::error!("Error handling key: {}", e);
                                self.state.status.set_error(e.to_string());
                            }
                        }
                    }
                }
            }
        }

        self.speech.stop();
        if let Err(err) = self.store.save() {
            tracing::warn!("final snapshot failed: {err}");
        }
        self.restore_terminal()?;
        Ok(())
    }

    /// Handle a key press, returns true if should exit
    fn handle_key(&mut self, key: crossterm::event::KeyCode) -> Result<bool> {
        let Some(action) = input::key_to_action(key) else {
            return Ok(false);
        };
        self.state.status.clear();

        if action == Action::Quit {
            return Ok(true);
        }

        match self.state.screen {
            Screen::Library => self.handle_library(action),
            Screen::Song => self.handle_song(action),
            Screen::Favorites => self.handle_favorites(action),
            Screen::Progress => self.handle_progress(action),
            Screen::Help => self.handle_help(action),
        }
        Ok(false)
    }

    /// Song ids visible under the current library filter
    fn filtered_song_ids(&self) -> Vec<String> {
        self.catalog
            .songs()
            .iter()
            .filter(|song| match self.state.library.filter {
                SongFilter::All => true,
                SongFilter::Started => self.store.song_progress(&song.id).is_some(),
                SongFilter::Completed => self
                    .store
                    .song_progress(&song.id)
                    .is_some_and(|progress| progress.completed_at.is_some()),
            })
            .map(|song| song.id.clone())
            .collect()
    }

    /// (id, hangul) of the word at `index` within the current song
    fn song_word_at(&self, index: usize) -> Option<(String, String)> {
        let song_id = self.state.current_song.as_deref()?;
        let words = self.catalog.words_for_song(song_id);
        words.get(index).map(|w| (w.id.clone(), w.hangul.clone()))
    }

    fn song_word_count(&self) -> usize {
        match self.state.current_song.as_deref() {
            Some(song_id) => self.catalog.words_for_song(song_id).len(),
            None => 0,
        }
    }

    fn handle_library(&mut self, action: Action) {
        let filtered = self.filtered_song_ids();
        match action {
            Action::Down => self.state.library.select_next(filtered.len()),
            Action::Up => self.state.library.select_prev(),
            Action::Top => self.state.library.selected = 0,
            Action::Bottom => self.state.library.selected = filtered.len().saturating_sub(1),
            Action::CycleFilter => {
                self.state.library.filter = self.state.library.filter.next();
                let len = self.filtered_song_ids().len();
                self.state.library.clamp(len);
            }
            Action::Select => {
                if let Some(song_id) = filtered.get(self.state.library.selected).cloned() {
                    self.store.start_song(&self.catalog, &song_id);
                    self.state.open_song(song_id);
                }
            }
            Action::GoFavorites => {
                self.state.screen = Screen::Favorites;
                self.state.word_list.reset();
            }
            Action::GoProgress => self.state.screen = Screen::Progress,
            Action::Help => self.state.screen = Screen::Help,
            _ => {}
        }
    }

    fn handle_song(&mut self, action: Action) {
        // Mode switches and leaving the song work in any study mode
        match action {
            Action::Back => {
                if let Some(song_id) = self.state.current_song.clone() {
                    self.store.refresh_song_progress(&self.catalog, &song_id);
                    self.store.check_achievements();
                }
                self.state.close_song();
                return;
            }
            Action::ModeVocabulary => {
                self.state.study_mode = StudyMode::Vocabulary;
                return;
            }
            Action::ModeFlashcards => {
                self.state.study_mode = StudyMode::Flashcards;
                self.state.flashcards.reset();
                self.autoplay_current_card();
                return;
            }
            Action::ModeQuiz => {
                self.start_quiz();
                return;
            }
            _ => {}
        }

        match self.state.study_mode {
            StudyMode::Vocabulary => self.handle_vocabulary(action),
            StudyMode::Flashcards => self.handle_flashcards(action),
            StudyMode::Quiz => self.handle_quiz(action),
        }
    }

    fn handle_vocabulary(&mut self, action: Action) {
        let len = self.song_word_count();
        let selected = self.song_word_at(self.state.word_list.selected);

        match action {
            Action::Down => self.state.word_list.select_next(len),
            Action::Up => self.state.word_list.select_prev(),
            Action::Top => {
                self.state.word_list.selected = 0;
                self.state.word_list.ensure_selection_visible();
            }
            Action::Bottom => {
                self.state.word_list.selected = len.saturating_sub(1);
                self.state.word_list.ensure_selection_visible();
            }
            Action::ToggleFavorite => {
                if let Some((id, _)) = selected {
                    self.store.toggle_favorite(&id);
                }
            }
            Action::Speak => {
                if let Some((_, hangul)) = selected {
                    self.speech.speak(&hangul);
                }
            }
            _ => {}
        }
    }

    fn handle_flashcards(&mut self, action: Action) {
        let len = self.song_word_count();
        let current = self.song_word_at(self.state.flashcards.index);

        match action {
            Action::Flip => self.state.flashcards.flip(),
            Action::Right => {
                self.state.flashcards.next(len);
                self.autoplay_current_card();
            }
            Action::Left => {
                self.state.flashcards.prev();
                self.autoplay_current_card();
            }
            Action::Know => {
                if let Some((id, _)) = current {
                    self.store.record_answer(&id, Some(true), true);
                    self.state.flashcards.learned_in_session.insert(id);
                    self.after_word_mutation();
                    self.state.flashcards.next(len);
                    self.autoplay_current_card();
                }
            }
            Action::Again => {
                if let Some((id, _)) = current {
                    self.store.record_answer(&id, Some(false), false);
                    self.after_word_mutation();
                    self.state.flashcards.next(len);
                    self.autoplay_current_card();
                }
            }
            Action::ToggleFavorite => {
                if let Some((id, _)) = current {
                    self.store.toggle_favorite(&id);
                }
            }
            Action::Speak => {
                if let Some((_, hangul)) = current {
                    self.speech.speak(&hangul);
                }
            }
            _ => {}
        }
    }

    fn start_quiz(&mut self) {
        let Some(song_id) = self.state.current_song.clone() else {
            return;
        };
        let words = self.catalog.words_for_song(&song_id);
        if words.is_empty() {
            self.state.status.set_error("No words to quiz");
            return;
        }
        let questions = quiz::generate(&self.catalog, &words, &mut rand::thread_rng());
        self.state.quiz = QuizState::start(questions);
        self.state.study_mode = StudyMode::Quiz;
        self.speak_if_listening();
    }

    fn handle_quiz(&mut self, action: Action) {
        if self.state.quiz.completed {
            if action == Action::Select {
                self.state.study_mode = StudyMode::Vocabulary;
                self.state.quiz = QuizState::default();
            }
            return;
        }

        match action {
            Action::Down => self.state.quiz.select_next(),
            Action::Up => self.state.quiz.select_prev(),
            Action::Speak => {
                if let Some(prompt) =
                    self.state.quiz.current_question().map(|q| q.prompt.clone())
                {
                    self.speech.speak(&prompt);
                }
            }
            Action::Select => {
                if self.state.quiz.revealed {
                    self.state.quiz.advance();
                    self.speak_if_listening();
                } else if let Some(correct) = self.state.quiz.answer() {
                    let word_id = self
                        .state
                        .quiz
                        .current_question()
                        .map(|q| q.word_id.clone())
                        .unwrap_or_default();
                    self.store.record_answer(&word_id, Some(correct), false);
                    self.after_word_mutation();
                }
            }
            _ => {}
        }
    }

    fn handle_favorites(&mut self, action: Action) {
        let favorites: Vec<String> = self.store.favorites().to_vec();
        let selected_id = favorites.get(self.state.word_list.selected).cloned();

        match action {
            Action::Back => {
                self.state.screen = Screen::Library;
                self.state.word_list.reset();
            }
            Action::Down => self.state.word_list.select_next(favorites.len()),
            Action::Up => self.state.word_list.select_prev(),
            Action::ToggleFavorite => {
                if let Some(id) = selected_id {
                    self.store.toggle_favorite(&id);
                    let len = self.store.favorites().len();
                    if len > 0 && self.state.word_list.selected >= len {
                        self.state.word_list.selected = len - 1;
                    }
                }
            }
            Action::Speak => {
                if let Some(hangul) =
                    selected_id.and_then(|id| self.catalog.word(&id)).map(|w| w.hangul.clone())
                {
                    self.speech.speak(&hangul);
                }
            }
            Action::Select => {
                // Jump to the song that teaches the selected word
                if let Some(song_id) = selected_id
                    .and_then(|id| self.catalog.word(&id))
                    .map(|w| w.example.song_id.clone())
                {
                    self.store.start_song(&self.catalog, &song_id);
                    self.state.open_song(song_id);
                }
            }
            _ => {}
        }
    }

    fn handle_progress(&mut self, action: Action) {
        match action {
            Action::Back => self.state.screen = Screen::Library,
            Action::Left => {
                let goal = self.store.stats().daily_goal.saturating_sub(1).max(1);
                self.store.set_daily_goal(goal);
                self.state.status.set_message(format!("Daily goal: {goal} words"));
            }
            Action::Right => {
                let goal = (self.store.stats().daily_goal + 1).min(100);
                self.store.set_daily_goal(goal);
                self.state.status.set_message(format!("Daily goal: {goal} words"));
            }
            _ => {}
        }
    }

    fn handle_help(&mut self, action: Action) {
        if matches!(action, Action::Back | Action::Help | Action::Select) {
            self.state.screen = Screen::Library;
        }
    }

    /// Re-derive song aggregates and achievement unlocks after a word change
    fn after_word_mutation(&mut self) {
        if let Some(song_id) = self.state.current_song.clone() {
            self.store.refresh_song_progress(&self.catalog, &song_id);
        }
        self.store.check_achievements();
    }

    fn autoplay_current_card(&self) {
        if !self.config.auto_play_audio {
            return;
        }
        if let Some((_, hangul)) = self.song_word_at(self.state.flashcards.index) {
            self.speech.speak(&hangul);
        }
    }

    /// Listening questions are spoken as soon as they appear
    fn speak_if_listening(&self) {
        if let Some(question) = self.state.quiz.current_question() {
            if question.kind == QuizKind::Listening && !self.state.quiz.revealed {
                self.speech.speak(&question.prompt);
            }
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}
