//! Flashcard study view

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::state::AppState;
use crate::catalog::{Catalog, Word};
use crate::config::Config;
use crate::progress::ProgressStore;
use crate::theme::Theme;

use super::layout::centered_rect;

/// Draw the flashcard for the current word
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    catalog: &Catalog,
    store: &ProgressStore,
    config: &Config,
    theme: &Theme,
) {
    let Some(song_id) = state.current_song.as_deref() else {
        return;
    };
    let words = catalog.words_for_song(song_id);

    if words.is_empty() {
        let empty = Paragraph::new(Line::styled(
            "No words to study",
            Style::default().fg(theme.fg_muted),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let card_area = centered_rect(70, 80, area);
    frame.render_widget(Clear, card_area);

    if state.flashcards.session_complete(words.len()) {
        draw_session_complete(frame, card_area, words.len(), theme);
        return;
    }

    let Some(word) = words.get(state.flashcards.index) else {
        return;
    };

    let title = format!(" Card {} of {} ", state.flashcards.index + 1, words.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));
    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    if state.flashcards.flipped {
        draw_back(frame, inner, word, store, theme);
    } else {
        draw_front(frame, inner, word, store, config, theme);
    }
}

fn draw_front(
    frame: &mut Frame,
    area: Rect,
    word: &Word,
    store: &ProgressStore,
    config: &Config,
    theme: &Theme,
) {
    let favorite = if store.is_favorite(&word.id) { "★" } else { "" };

    let mut lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(favorite, Style::default().fg(theme.warning))),
        Line::from(Span::styled(
            word.hangul.clone(),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )),
    ];

    if config.show_romanization {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("[{}]", word.romanization),
            Style::default().fg(theme.fg_muted),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Space] Show meaning",
        Style::default().fg(theme.fg_muted),
    )));

    let para = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(para, area);
}

fn draw_back(frame: &mut Frame, area: Rect, word: &Word, store: &ProgressStore, theme: &Theme) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            word.meanings.join(", "),
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            word.part_of_speech.label(),
            Style::default().fg(theme.info),
        )),
        Line::from(""),
    ];

    // Example sentence, wrapped to the card width
    let wrap_width = (area.width as usize).saturating_sub(4).max(10);
    for part in textwrap::wrap(&word.example.hangul, wrap_width) {
        lines.push(Line::from(Span::styled(
            part.to_string(),
            Style::default().fg(theme.fg_primary),
        )));
    }
    for part in textwrap::wrap(&word.example.translation, wrap_width) {
        lines.push(Line::from(Span::styled(
            part.to_string(),
            Style::default().fg(theme.fg_secondary),
        )));
    }

    lines.push(Line::from(""));
    if let Some(progress) = store.word_progress(&word.id) {
        lines.push(Line::from(Span::styled(
            format!(
                "✓ {} correct  ✗ {} wrong  next review in {}d",
                progress.correct_count, progress.wrong_count, progress.interval
            ),
            Style::default().fg(theme.fg_muted),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[y] I know this  [n] Again",
        Style::default().fg(theme.fg_muted),
    )));

    let para = Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}

fn draw_session_complete(frame: &mut Frame, area: Rect, total: usize, theme: &Theme) {
    let block = Block::default()
        .title(" Done ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.success))
        .style(Style::default().bg(theme.bg_secondary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            format!("All {total} words marked known!"),
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[1] Back to vocabulary  [3] Take the quiz",
            Style::default().fg(theme.fg_muted),
        )),
    ];
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(para, inner);
}
