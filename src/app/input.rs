//! Event handling utilities

use crossterm::event::KeyCode;

/// Vim-style key mapping
pub fn key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::Left),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::Right),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::Top),
        KeyCode::Char('G') | KeyCode::End => Some(Action::Bottom),
        KeyCode::Enter => Some(Action::Select),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Char(' ') => Some(Action::Flip),
        // Flashcard verdicts
        KeyCode::Char('y') => Some(Action::Know),
        KeyCode::Char('n') => Some(Action::Again),
        KeyCode::Char('f') => Some(Action::ToggleFavorite),
        KeyCode::Char('s') => Some(Action::Speak),
        // Study modes within a song
        KeyCode::Char('1') => Some(Action::ModeVocabulary),
        KeyCode::Char('2') => Some(Action::ModeFlashcards),
        KeyCode::Char('3') => Some(Action::ModeQuiz),
        KeyCode::Tab => Some(Action::CycleFilter),
        // Screen switches
        KeyCode::Char('v') => Some(Action::GoFavorites),
        KeyCode::Char('p') => Some(Action::GoProgress),
        KeyCode::Char('?') => Some(Action::Help),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Up,
    Down,
    Left,
    Right,
    Top,
    Bottom,

    // Selection
    Select,
    Back,

    // Study
    Flip,
    Know,
    Again,
    ToggleFavorite,
    Speak,

    // Modes
    ModeVocabulary,
    ModeFlashcards,
    ModeQuiz,
    CycleFilter,

    // Screens
    GoFavorites,
    GoProgress,
    Help,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vim_j_maps_to_down() {
        assert_eq!(key_to_action(KeyCode::Char('j')), Some(Action::Down));
    }

    #[test]
    fn vim_k_maps_to_up() {
        assert_eq!(key_to_action(KeyCode::Char('k')), Some(Action::Up));
    }

    #[test]
    fn space_flips_a_card() {
        assert_eq!(key_to_action(KeyCode::Char(' ')), Some(Action::Flip));
    }

    #[test]
    fn digits_switch_study_modes() {
        assert_eq!(key_to_action(KeyCode::Char('1')), Some(Action::ModeVocabulary));
        assert_eq!(key_to_action(KeyCode::Char('2')), Some(Action::ModeFlashcards));
        assert_eq!(key_to_action(KeyCode::Char('3')), Some(Action::ModeQuiz));
    }

    #[test]
    fn verdict_keys_map_to_know_and_again() {
        assert_eq!(key_to_action(KeyCode::Char('y')), Some(Action::Know));
        assert_eq!(key_to_action(KeyCode::Char('n')), Some(Action::Again));
    }

    #[test]
    fn unknown_key_returns_none() {
        assert_eq!(key_to_action(KeyCode::Char('x')), None);
    }
}
