//! UI rendering components

pub mod favorites;
pub mod flashcard;
pub mod help;
pub mod icons;
pub mod layout;
pub mod library;
pub mod progress;
pub mod quiz;
pub mod song;

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::app::state::{AppState, Screen};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::progress::ProgressStore;

/// Main draw function
pub fn draw(
    frame: &mut Frame,
    state: &mut AppState,
    catalog: &Catalog,
    store: &ProgressStore,
    config: &Config,
) {
    let theme = config.active_theme();

    let chunks =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(frame.area());
    let body = chunks[0];
    let status_area = chunks[1];

    match state.screen {
        Screen::Library => library::draw(frame, body, state, catalog, store, &theme),
        Screen::Song => song::draw(frame, body, state, catalog, store, config, &theme),
        Screen::Favorites => favorites::draw(frame, body, state, catalog, store, &theme),
        Screen::Progress => progress::draw(frame, body, store, &theme),
        Screen::Help => help::draw(frame, body, &theme),
    }

    // Status line
    if let Some(message) = &state.status.message {
        let style = if state.status.is_error {
            Style::default().fg(theme.error)
        } else {
            Style::default().fg(theme.fg_muted)
        };
        frame.render_widget(
            Paragraph::new(Line::styled(message.clone(), style)),
            status_area,
        );
    }
}
