//! Favorites screen

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::AppState;
use crate::catalog::Catalog;
use crate::progress::ProgressStore;
use crate::theme::Theme;

/// Draw the favorited words across all songs
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    state: &mut AppState,
    catalog: &Catalog,
    store: &ProgressStore,
    theme: &Theme,
) {
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);

    let block = Block::default()
        .title(format!(" Favorites ({}) ", store.favorites().len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused));
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    if store.favorites().is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No favorites yet. Press [f] on a word to star it",
                Style::default().fg(theme.fg_muted),
            )),
        ]);
        frame.render_widget(empty, inner);
    } else {
        draw_list(frame, inner, state, catalog, store, theme);
    }

    let hint = "[j/k] Move  [f] Unfavorite  [s] Speak  [Enter] Open song  [Esc] Back  [q] Quit";
    frame.render_widget(
        Paragraph::new(Line::styled(hint, Style::default().fg(theme.fg_muted))),
        chunks[1],
    );
}

fn draw_list(
    frame: &mut Frame,
    area: Rect,
    state: &mut AppState,
    catalog: &Catalog,
    store: &ProgressStore,
    theme: &Theme,
) {
    state.word_list.visible_height = area.height as usize;
    state.word_list.ensure_selection_visible();

    let mut lines = Vec::new();
    let window = store
        .favorites()
        .iter()
        .enumerate()
        .skip(state.word_list.scroll_offset)
        .take(area.height as usize);

    for (i, word_id) in window {
        let selected = i == state.word_list.selected;
        let row_style = if selected {
            Style::default().bg(theme.selection)
        } else {
            Style::default()
        };

        let line = match catalog.word(word_id) {
            Some(word) => {
                let song_title = catalog
                    .song(&word.example.song_id)
                    .map(|s| s.title.clone())
                    .unwrap_or_default();
                Line::from(vec![
                    Span::styled(" ★ ", Style::default().fg(theme.warning)),
                    Span::styled(
                        format!("{:<8}", word.hangul),
                        Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{:<20}", word.meanings.join(", ")),
                        Style::default().fg(theme.fg_secondary),
                    ),
                    Span::styled(format!("♪ {song_title}"), Style::default().fg(theme.fg_muted)),
                ])
            }
            // An orphaned favorite (id unknown to the catalog) still renders
            None => Line::from(vec![
                Span::styled(" ★ ", Style::default().fg(theme.warning)),
                Span::styled(word_id.clone(), Style::default().fg(theme.fg_muted)),
            ]),
        };

        lines.push(line.style(row_style));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
