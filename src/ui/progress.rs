//! Progress and achievements screen

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::progress::ProgressStore;
use crate::progress::achievements::{Achievement, RequirementKind};
use crate::theme::Theme;

use super::icons;
use super::layout::gauge_line;

/// Draw the stats and achievements screen
pub fn draw(frame: &mut Frame, area: Rect, store: &ProgressStore, theme: &Theme) {
    let chunks = Layout::vertical([
        Constraint::Length(4), // daily goal
        Constraint::Length(4), // stat tiles
        Constraint::Min(3),    // achievements
        Constraint::Length(1), // footer
    ])
    .split(area);

    draw_daily_goal(frame, chunks[0], store, theme);
    draw_stat_tiles(frame, chunks[1], store, theme);
    draw_achievements(frame, chunks[2], store, theme);

    let hint = "[←/→] Adjust daily goal  [Esc] Back  [q] Quit";
    frame.render_widget(
        Paragraph::new(Line::styled(hint, Style::default().fg(theme.fg_muted))),
        chunks[3],
    );
}

fn draw_daily_goal(frame: &mut Frame, area: Rect, store: &ProgressStore, theme: &Theme) {
    let stats = store.stats();
    let ratio = if stats.daily_goal == 0 {
        0.0
    } else {
        f64::from(stats.today_words) / f64::from(stats.daily_goal)
    };

    let block = Block::default()
        .title(" Daily Goal ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![
        Span::styled(gauge_line(ratio, 30), Style::default().fg(theme.accent_primary)),
        Span::styled(
            format!("  {} / {} words today", stats.today_words, stats.daily_goal),
            Style::default().fg(theme.fg_secondary),
        ),
    ];
    if stats.today_words >= stats.daily_goal {
        spans.push(Span::styled(
            "  goal reached!",
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn draw_stat_tiles(frame: &mut Frame, area: Rect, store: &ProgressStore, theme: &Theme) {
    let stats = store.stats();

    let tiles = Layout::horizontal([
        Constraint::Percentage(25),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
    ])
    .split(area);

    let tile = |frame: &mut Frame, area: Rect, label: &str, value: String, extra: Option<String>| {
        let block =
            Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![Line::from(vec![
            Span::styled(value, Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD)),
            Span::styled(format!(" {label}"), Style::default().fg(theme.fg_muted)),
        ])];
        if let Some(extra) = extra {
            lines.push(Line::from(Span::styled(extra, Style::default().fg(theme.fg_muted))));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    };

    tile(
        frame,
        tiles[0],
        "day streak ♨",
        stats.current_streak.to_string(),
        Some(format!("best: {}", stats.longest_streak)),
    );
    tile(frame, tiles[1], "words learned", stats.total_words_learned.to_string(), None);
    tile(frame, tiles[2], "songs completed", stats.total_songs_completed.to_string(), None);
    tile(frame, tiles[3], "reviews", stats.total_reviews.to_string(), None);
}

fn requirement_progress(achievement: &Achievement, store: &ProgressStore) -> String {
    let stats = store.stats();
    let current = match achievement.requirement.kind {
        RequirementKind::WordsLearned => stats.total_words_learned,
        RequirementKind::SongsCompleted => stats.total_songs_completed,
        RequirementKind::Streak => stats.current_streak,
        RequirementKind::Reviews => stats.total_reviews,
    };
    format!("{current}/{}", achievement.requirement.count)
}

fn unlock_date(unlocked_at: DateTime<Utc>) -> String {
    unlocked_at.format("%Y-%m-%d").to_string()
}

fn draw_achievements(frame: &mut Frame, area: Rect, store: &ProgressStore, theme: &Theme) {
    let unlocked = store.achievements().iter().filter(|a| a.is_unlocked()).count();
    let total = store.achievements().len();

    let block = Block::default()
        .title(format!(" Achievements ({unlocked}/{total}) "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for achievement in store.achievements() {
        let glyph = icons::glyph(&achievement.icon);

        let line = if let Some(unlocked_at) = achievement.unlocked_at {
            Line::from(vec![
                Span::styled(format!(" {glyph} "), Style::default().fg(theme.warning)),
                Span::styled(
                    format!("{:<20}", achievement.title),
                    Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:<36}", achievement.description),
                    Style::default().fg(theme.fg_secondary),
                ),
                Span::styled(
                    format!("✓ {}", unlock_date(unlocked_at)),
                    Style::default().fg(theme.success),
                ),
            ])
        } else {
            Line::from(vec![
                Span::styled(format!(" {glyph} "), Style::default().fg(theme.fg_muted)),
                Span::styled(format!("{:<20}", achievement.title), Style::default().fg(theme.fg_muted)),
                Span::styled(
                    format!("{:<36}", achievement.description),
                    Style::default().fg(theme.fg_muted),
                ),
                Span::styled(
                    requirement_progress(achievement, store),
                    Style::default().fg(theme.fg_muted),
                ),
            ])
        };
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
