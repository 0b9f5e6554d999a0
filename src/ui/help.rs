//! Help screen

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::theme::Theme;

/// Draw the key binding reference
pub fn draw(frame: &mut Frame, area: Rect, theme: &Theme) {
    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let section = |title: &str| {
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        ))
    };
    let binding = |keys: &str, what: &str| {
        Line::from(vec![
            Span::styled(format!("  {keys:<14}"), Style::default().fg(theme.fg_primary)),
            Span::styled(what.to_string(), Style::default().fg(theme.fg_secondary)),
        ])
    };

    let lines = vec![
        section("Navigation"),
        binding("j/k  ↓/↑", "Move selection"),
        binding("g / G", "Jump to top / bottom"),
        binding("Enter", "Select / confirm"),
        binding("Esc", "Back"),
        binding("q", "Quit"),
        Line::from(""),
        section("Library"),
        binding("Tab", "Cycle filter (all / started / completed)"),
        binding("v", "Favorites"),
        binding("p", "Progress and achievements"),
        Line::from(""),
        section("Studying"),
        binding("1 / 2 / 3", "Vocabulary / Flashcards / Quiz"),
        binding("Space", "Flip flashcard"),
        binding("y / n", "I know this / show it again"),
        binding("f", "Toggle favorite"),
        binding("s", "Speak the word"),
        Line::from(""),
        section("Progress"),
        binding("← / →", "Adjust daily word goal"),
        Line::from(""),
        Line::from(Span::styled("Press Esc to return", Style::default().fg(theme.fg_muted))),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
