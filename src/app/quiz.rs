//! Quiz question generation and session state

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::{Catalog, Word};

/// Number of questions per quiz session (capped by the word set size)
pub const QUESTION_COUNT: usize = 10;

/// How a question is asked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizKind {
    /// Show Hangul, pick the English meaning
    ChooseMeaning,
    /// Show an English meaning, pick the Hangul
    ChooseHangul,
    /// Speak the word, pick the English meaning
    Listening,
}

/// A single multiple-choice question
#[derive(Debug, Clone)]
pub struct QuizQuestion {
    pub kind: QuizKind,
    pub word_id: String,
    /// The word under test, in whichever script the kind shows
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

/// Generate a quiz over the given word set
///
/// Wrong options are sampled from the whole catalog, excluding the word
/// under test and any option that would display identically to the answer.
pub fn generate<R: Rng>(catalog: &Catalog, words: &[&Word], rng: &mut R) -> Vec<QuizQuestion> {
    let mut pool: Vec<&Word> = words.to_vec();
    pool.shuffle(rng);
    pool.truncate(QUESTION_COUNT.min(pool.len()));

    pool.iter().map(|word| build_question(catalog, word, rng)).collect()
}

fn build_question<R: Rng>(catalog: &Catalog, word: &Word, rng: &mut R) -> QuizQuestion {
    let kind = match rng.gen_range(0..3) {
        0 => QuizKind::ChooseMeaning,
        1 => QuizKind::ChooseHangul,
        _ => QuizKind::Listening,
    };

    let correct = match kind {
        QuizKind::ChooseMeaning | QuizKind::Listening => word.primary_meaning().to_string(),
        QuizKind::ChooseHangul => word.hangul.clone(),
    };

    // Oversample so collisions (two words sharing a gloss) can be skipped
    let mut options: Vec<String> = vec![correct.clone()];
    for wrong in catalog.random_words(8, &[word.id.as_str()]) {
        if options.len() == 4 {
            break;
        }
        let label = match kind {
            QuizKind::ChooseMeaning | QuizKind::Listening => wrong.primary_meaning().to_string(),
            QuizKind::ChooseHangul => wrong.hangul.clone(),
        };
        if !options.contains(&label) {
            options.push(label);
        }
    }
    options.shuffle(rng);

    let correct_index = options.iter().position(|o| *o == correct).unwrap_or(0);
    let prompt = match kind {
        QuizKind::ChooseMeaning | QuizKind::Listening => word.hangul.clone(),
        QuizKind::ChooseHangul => word.primary_meaning().to_string(),
    };

    QuizQuestion { kind, word_id: word.id.clone(), prompt, options, correct_index }
}

/// State of an in-progress quiz session
#[derive(Debug, Clone, Default)]
pub struct QuizState {
    pub active: bool,
    pub questions: Vec<QuizQuestion>,
    pub current: usize,
    pub selected_option: usize,
    /// Chosen option index per question, None while unanswered
    pub answers: Vec<Option<usize>>,
    /// Feedback for the current question is being shown
    pub revealed: bool,
    pub completed: bool,
}

impl QuizState {
    /// Start a session over freshly generated questions
    pub fn start(questions: Vec<QuizQuestion>) -> Self {
        let answers = vec![None; questions.len()];
        Self {
            active: true,
            questions,
            current: 0,
            selected_option: 0,
            answers,
            revealed: false,
            completed: false,
        }
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current)
    }

    /// Lock in the highlighted option; true if it was correct
    ///
    /// No-op (returns None) when feedback is already showing or the session
    /// is over.
    pub fn answer(&mut self) -> Option<bool> {
        if self.revealed || self.completed {
            return None;
        }
        let question = self.questions.get(self.current)?;
        let correct = self.selected_option == question.correct_index;

        self.answers[self.current] = Some(self.selected_option);
        self.revealed = true;
        Some(correct)
    }

    /// Move past the feedback to the next question, or finish
    pub fn advance(&mut self) {
        if !self.revealed {
            return;
        }
        self.revealed = false;
        self.selected_option = 0;

        if self.current + 1 < self.questions.len() {
            self.current += 1;
        } else {
            self.completed = true;
        }
    }

    /// (correct, total) for the session so far
    pub fn score(&self) -> (usize, usize) {
        let correct = self
            .answers
            .iter()
            .zip(&self.questions)
            .filter(|(answer, q)| **answer == Some(q.correct_index))
            .count();
        (correct, self.questions.len())
    }

    pub fn select_next(&mut self) {
        if let Some(question) = self.current_question() {
            if !self.revealed {
                self.selected_option = (self.selected_option + 1) % question.options.len();
            }
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(question) = self.current_question() {
            if !self.revealed {
                let len = question.options.len();
                self.selected_option = (self.selected_option + len - 1) % len;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixed_rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn generate_caps_at_question_count() {
        let catalog = Catalog::new();
        let words: Vec<&Word> = catalog.words().iter().collect();
        let questions = generate(&catalog, &words, &mut fixed_rng());
        assert_eq!(questions.len(), QUESTION_COUNT);
    }

    #[test]
    fn generate_uses_all_words_when_fewer_than_count() {
        let catalog = Catalog::new();
        let words = catalog.words_for_song("iu-blueming");
        let questions = generate(&catalog, &words, &mut fixed_rng());
        assert_eq!(questions.len(), QUESTION_COUNT.min(words.len()));
    }

    #[test]
    fn questions_have_four_distinct_options() {
        let catalog = Catalog::new();
        let words: Vec<&Word> = catalog.words().iter().collect();

        for question in generate(&catalog, &words, &mut fixed_rng()) {
            assert_eq!(question.options.len(), 4, "{}", question.word_id);
            let unique: std::collections::HashSet<&String> = question.options.iter().collect();
            assert_eq!(unique.len(), 4, "duplicate option for {}", question.word_id);
            assert!(question.correct_index < 4);
        }
    }

    #[test]
    fn correct_index_points_at_the_right_label() {
        let catalog = Catalog::new();
        let words: Vec<&Word> = catalog.words().iter().collect();

        for question in generate(&catalog, &words, &mut fixed_rng()) {
            let word = catalog.word(&question.word_id).unwrap();
            let expected = match question.kind {
                QuizKind::ChooseHangul => word.hangul.clone(),
                _ => word.primary_meaning().to_string(),
            };
            assert_eq!(question.options[question.correct_index], expected);
        }
    }

    #[test]
    fn answer_then_advance_walks_the_session() {
        let catalog = Catalog::new();
        let words = catalog.words_for_song("iu-blueming");
        let questions = generate(&catalog, &words, &mut fixed_rng());
        let total = questions.len();
        let mut quiz = QuizState::start(questions);

        for i in 0..total {
            assert_eq!(quiz.current, i);
            quiz.selected_option = quiz.questions[i].correct_index;
            assert_eq!(quiz.answer(), Some(true));
            assert!(quiz.answer().is_none(), "second answer while revealed is ignored");
            quiz.advance();
        }

        assert!(quiz.completed);
        assert_eq!(quiz.score(), (total, total));
    }

    #[test]
    fn advance_requires_revealed_feedback() {
        let catalog = Catalog::new();
        let words = catalog.words_for_song("iu-blueming");
        let mut quiz = QuizState::start(generate(&catalog, &words, &mut fixed_rng()));

        quiz.advance();
        assert_eq!(quiz.current, 0, "cannot skip an unanswered question");
    }

    #[test]
    fn option_selection_wraps() {
        let catalog = Catalog::new();
        let words = catalog.words_for_song("iu-blueming");
        let mut quiz = QuizState::start(generate(&catalog, &words, &mut fixed_rng()));

        quiz.select_prev();
        assert_eq!(quiz.selected_option, 3);
        quiz.select_next();
        assert_eq!(quiz.selected_option, 0);
    }
}
