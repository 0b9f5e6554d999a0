//! Song study screen: header, mode tabs, and the active study mode

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::{AppState, StudyMode};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::progress::ProgressStore;
use crate::progress::model::WordStatus;
use crate::theme::{Theme, parse_hex};

use super::layout::gauge_line;
use super::{flashcard, quiz};

/// Draw the song screen
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    state: &mut AppState,
    catalog: &Catalog,
    store: &ProgressStore,
    config: &Config,
    theme: &Theme,
) {
    let Some(song_id) = state.current_song.clone() else {
        return;
    };
    if catalog.song(&song_id).is_none() {
        // Unknown id: render the not-found state rather than failing
        let msg = Paragraph::new(Line::styled("Song not found", Style::default().fg(theme.fg_muted)));
        frame.render_widget(msg, area);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(4), // header
        Constraint::Length(1), // mode tabs
        Constraint::Min(3),    // mode content
        Constraint::Length(1), // footer
    ])
    .split(area);

    draw_header(frame, chunks[0], catalog, store, song_id.as_str(), theme);
    draw_mode_tabs(frame, chunks[1], state.study_mode, theme);

    match state.study_mode {
        StudyMode::Vocabulary => draw_word_list(frame, chunks[2], state, catalog, store, config, theme),
        StudyMode::Flashcards => flashcard::draw(frame, chunks[2], state, catalog, store, config, theme),
        StudyMode::Quiz => quiz::draw(frame, chunks[2], state, theme),
    }

    draw_footer(frame, chunks[3], state.study_mode, theme);
}

fn draw_header(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    store: &ProgressStore,
    song_id: &str,
    theme: &Theme,
) {
    let Some(song) = catalog.song(song_id) else {
        return;
    };
    let accent = parse_hex(&song.accent, theme.accent_primary);
    let gradient_to = parse_hex(&song.gradient_to, theme.accent_secondary);

    let learned = store.learned_count(catalog, song_id);
    let total = song.word_count();
    let ratio = if total == 0 { 0.0 } else { learned as f64 / total as f64 };

    let block = Block::default().borders(Borders::ALL).border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", song.title),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("· {}", song.artist), Style::default().fg(theme.fg_secondary)),
            Span::styled("  TOPIK 1", Style::default().fg(theme.fg_muted)),
        ]),
        Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(gauge_line(ratio, 30), Style::default().fg(gradient_to)),
            Span::styled(
                format!(" {learned}/{total} words learned"),
                Style::default().fg(theme.fg_muted),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_mode_tabs(frame: &mut Frame, area: Rect, mode: StudyMode, theme: &Theme) {
    let tab = |label: &str, active: bool| {
        if active {
            Span::styled(
                format!(" {label} "),
                Style::default().fg(theme.bg_primary).bg(theme.accent_primary).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {label} "), Style::default().fg(theme.fg_muted))
        }
    };

    let line = Line::from(vec![
        tab("[1] Vocabulary", mode == StudyMode::Vocabulary),
        Span::raw(" "),
        tab("[2] Flashcards", mode == StudyMode::Flashcards),
        Span::raw(" "),
        tab("[3] Quiz", mode == StudyMode::Quiz),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn status_marker(status: WordStatus) -> (&'static str, bool) {
    match status {
        WordStatus::Learned => ("✓", true),
        WordStatus::Learning | WordStatus::Review => ("~", false),
        WordStatus::New => ("·", false),
    }
}

fn draw_word_list(
    frame: &mut Frame,
    area: Rect,
    state: &mut AppState,
    catalog: &Catalog,
    store: &ProgressStore,
    config: &Config,
    theme: &Theme,
) {
    let Some(song_id) = state.current_song.as_deref() else {
        return;
    };
    let words = catalog.words_for_song(song_id);

    let block = Block::default()
        .title(" Vocabulary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    state.word_list.visible_height = inner.height as usize;
    state.word_list.ensure_selection_visible();

    let mut lines = Vec::new();
    let window = words
        .iter()
        .enumerate()
        .skip(state.word_list.scroll_offset)
        .take(inner.height as usize);

    for (i, word) in window {
        let selected = i == state.word_list.selected;
        let (marker, learned) = status_marker(store.word_status(&word.id));
        let marker_style = if learned {
            Style::default().fg(theme.success)
        } else {
            Style::default().fg(theme.fg_muted)
        };

        let favorite = if store.is_favorite(&word.id) { "★ " } else { "  " };
        let romanization = if config.show_romanization {
            format!("[{}] ", word.romanization)
        } else {
            String::new()
        };

        let row_style = if selected {
            Style::default().bg(theme.selection)
        } else {
            Style::default()
        };

        lines.push(
            Line::from(vec![
                Span::styled(format!(" {marker} "), marker_style),
                Span::styled(favorite, Style::default().fg(theme.warning)),
                Span::styled(
                    format!("{:<8}", word.hangul),
                    Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{romanization:<14}"), Style::default().fg(theme.fg_muted)),
                Span::styled(
                    format!("{:<18}", word.meanings.join(", ")),
                    Style::default().fg(theme.fg_secondary),
                ),
                Span::styled(word.part_of_speech.label(), Style::default().fg(theme.info)),
                Span::styled(
                    format!("  tier {}", word.difficulty),
                    Style::default().fg(theme.fg_muted),
                ),
            ])
            .style(row_style),
        );
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_footer(frame: &mut Frame, area: Rect, mode: StudyMode, theme: &Theme) {
    let hint = match mode {
        StudyMode::Vocabulary => "[j/k] Move  [f] Favorite  [s] Speak  [1/2/3] Mode  [Esc] Back",
        StudyMode::Flashcards => {
            "[Space] Flip  [y] Know  [n] Again  [h/l] Prev/Next  [s] Speak  [f] Favorite  [Esc] Back"
        }
        StudyMode::Quiz => "[j/k] Select  [Enter] Confirm  [s] Speak  [Esc] Back",
    };
    frame.render_widget(
        Paragraph::new(Line::styled(hint, Style::default().fg(theme.fg_muted))),
        area,
    );
}
