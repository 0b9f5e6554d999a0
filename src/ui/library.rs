//! Song library screen

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::{AppState, SongFilter};
use crate::catalog::{Catalog, Song};
use crate::progress::ProgressStore;
use crate::theme::{Theme, parse_hex};

use super::layout::gauge_line;

/// Draw the song library with the stats strip and filter footer
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    catalog: &Catalog,
    store: &ProgressStore,
    theme: &Theme,
) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // stats strip
        Constraint::Min(3),    // song list
        Constraint::Length(1), // footer
    ])
    .split(area);

    draw_stats_strip(frame, chunks[0], store, theme);
    draw_song_list(frame, chunks[1], state, catalog, store, theme);
    draw_footer(frame, chunks[2], state.library.filter, theme);
}

fn draw_stats_strip(frame: &mut Frame, area: Rect, store: &ProgressStore, theme: &Theme) {
    let stats = store.stats();

    let line = Line::from(vec![
        Span::styled(" gasa ", Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)),
        Span::styled("· learn Korean through K-pop  ", Style::default().fg(theme.fg_muted)),
        Span::styled(format!("♨ {} day streak  ", stats.current_streak), Style::default().fg(theme.warning)),
        Span::styled(format!("▤ {} words  ", stats.total_words_learned), Style::default().fg(theme.success)),
        Span::styled(
            format!("◎ today {}/{}", stats.today_words, stats.daily_goal),
            Style::default().fg(theme.info),
        ),
    ]);

    let block = Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme.border));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_song_list(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    catalog: &Catalog,
    store: &ProgressStore,
    theme: &Theme,
) {
    let filtered: Vec<&Song> = catalog
        .songs()
        .iter()
        .filter(|song| match state.library.filter {
            SongFilter::All => true,
            SongFilter::Started => store.song_progress(&song.id).is_some(),
            SongFilter::Completed => store
                .song_progress(&song.id)
                .is_some_and(|progress| progress.completed_at.is_some()),
        })
        .collect();

    let block = Block::default()
        .title(" Songs ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if filtered.is_empty() {
        let empty = Paragraph::new(Line::styled(
            "No songs match this filter",
            Style::default().fg(theme.fg_muted),
        ));
        frame.render_widget(empty, inner);
        return;
    }

    let mut lines = Vec::new();
    for (i, song) in filtered.iter().enumerate() {
        let selected = i == state.library.selected;
        let accent = parse_hex(&song.accent, theme.accent_primary);

        let learned = store.learned_count(catalog, &song.id);
        let total = song.word_count();
        let ratio = if total == 0 { 0.0 } else { learned as f64 / total as f64 };

        let marker = if selected { "▶ " } else { "  " };
        let completed = store
            .song_progress(&song.id)
            .is_some_and(|progress| progress.completed_at.is_some());
        let badge = if completed { " ✓" } else { "" };

        let row_style = if selected {
            Style::default().bg(theme.selection)
        } else {
            Style::default()
        };

        lines.push(
            Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.accent_primary)),
                Span::styled(format!("{:<20}", song.title), Style::default().fg(accent).add_modifier(Modifier::BOLD)),
                Span::styled(format!("{:<12}", song.artist), Style::default().fg(theme.fg_secondary)),
                Span::styled(gauge_line(ratio, 14), Style::default().fg(accent)),
                Span::styled(format!(" {learned:>2}/{total} words"), Style::default().fg(theme.fg_muted)),
                Span::styled(badge, Style::default().fg(theme.success)),
            ])
            .style(row_style),
        );
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_footer(frame: &mut Frame, area: Rect, filter: SongFilter, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(format!(" filter: {} ", filter.label()), Style::default().fg(theme.accent_secondary)),
        Span::styled(
            "[Tab] Filter  [j/k] Move  [Enter] Study  [v] Favorites  [p] Progress  [?] Help  [q] Quit",
            Style::default().fg(theme.fg_muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
