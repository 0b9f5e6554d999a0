//! Quiz overlay component

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::quiz::QuizKind;
use crate::app::state::AppState;
use crate::theme::Theme;

use super::layout::centered_rect;

/// Draw the quiz as a centered overlay
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    if !state.quiz.active {
        return;
    }

    let overlay_area = centered_rect(70, 80, area);
    frame.render_widget(Clear, overlay_area);

    let title = if state.quiz.completed { " Quiz Results " } else { " Quiz " };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    if state.quiz.completed {
        draw_results(frame, inner, state, theme);
    } else {
        draw_question(frame, inner, state, theme);
    }
}

/// Draw results screen
fn draw_results(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let (correct, total) = state.quiz.score();
    let percent = if total == 0 { 0 } else { correct * 100 / total };

    let (headline, color) = if percent >= 80 {
        ("Excellent work!", theme.success)
    } else if percent >= 60 {
        ("Good job!", theme.info)
    } else {
        ("Keep practicing!", theme.warning)
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{correct} / {total}"),
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{percent}% correct"),
            Style::default().fg(theme.fg_muted),
        )),
        Line::from(""),
        Line::from(""),
    ];

    // Per-question markers
    let mut result_spans = vec![Span::raw("  ")];
    for (i, question) in state.quiz.questions.iter().enumerate() {
        let user_answer = state.quiz.answers.get(i).copied().flatten();
        let is_correct = user_answer == Some(question.correct_index);

        let marker = if is_correct { " \u{2713} " } else { " \u{2717} " }; // ✓ or ✗
        let style = if is_correct {
            Style::default().fg(theme.success)
        } else {
            Style::default().fg(theme.error)
        };

        result_spans.push(Span::styled(format!("Q{}{}", i + 1, marker), style));
    }
    lines.push(Line::from(result_spans));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Back to vocabulary",
        Style::default().fg(theme.fg_muted),
    )));

    let para = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(para, area);
}

/// Draw current question
fn draw_question(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let current = state.quiz.current;
    let total = state.quiz.questions.len();

    let Some(question) = state.quiz.current_question() else {
        return;
    };

    let instruction = match question.kind {
        QuizKind::ChooseMeaning => "Choose the correct meaning:",
        QuizKind::ChooseHangul => "Choose the Korean word:",
        QuizKind::Listening => "Listen and choose the meaning:",
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Question {} of {}", current + 1, total),
            Style::default().fg(theme.fg_muted),
        )),
        Line::from(""),
        Line::from(Span::styled(instruction, Style::default().fg(theme.fg_secondary))),
        Line::from(""),
    ];

    // The word under test
    match question.kind {
        QuizKind::Listening => {
            lines.push(Line::from(Span::styled(
                "\u{1F50A}  [s] replay", // 🔊
                Style::default().fg(theme.info).add_modifier(Modifier::BOLD),
            )));
        }
        _ => {
            lines.push(Line::from(Span::styled(
                question.prompt.clone(),
                Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
            )));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(""));

    // Options
    let answered = state.quiz.answers.get(current).copied().flatten();
    for (i, option) in question.options.iter().enumerate() {
        let is_selected = i == state.quiz.selected_option;
        let prefix = if is_selected { "\u{25CF}" } else { "\u{25CB}" }; // ● or ○
        let letter = (b'A' + i as u8) as char;

        let style = if state.quiz.revealed {
            if i == question.correct_index {
                Style::default().fg(theme.success).add_modifier(Modifier::BOLD)
            } else if answered == Some(i) {
                Style::default().fg(theme.error)
            } else {
                Style::default().fg(theme.fg_muted)
            }
        } else if is_selected {
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_secondary)
        };

        lines.push(Line::from(Span::styled(format!("  {prefix} {letter}) {option}"), style)));
        lines.push(Line::from(""));
    }

    // Feedback
    if state.quiz.revealed {
        let correct = answered == Some(question.correct_index);
        if correct {
            lines.push(Line::from(Span::styled(
                "Correct!",
                Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                format!("Wrong. The answer is: {}", question.options[question.correct_index]),
                Style::default().fg(theme.error),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[Enter] Continue",
            Style::default().fg(theme.fg_muted),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "[j/k] Select    [Enter] Confirm    [Esc] Back",
            Style::default().fg(theme.fg_muted),
        )));
    }

    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}
