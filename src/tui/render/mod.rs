pub mod error_view;
pub mod list_view;
pub mod prompt;
pub mod status_row;

mod helpers;
#[cfg(test)]
pub(crate) mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode};

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // A startup error replaces the whole screen
    if let Some(ref message) = app.load_error {
        error_view::render_error_view(frame, app, message, area);
        return;
    }

    // Layout: content | status row (1 row) | help row (1 row).
    // The two footer rows are FOOTER_HEIGHT.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    match app.mode {
        Mode::View => list_view::render_list_view(frame, app, chunks[0]),
        Mode::Add | Mode::Edit { .. } => prompt::render_prompt(frame, app, chunks[0]),
    }

    status_row::render_status_row(frame, app, chunks[1]);
    status_row::render_help_row(frame, app, chunks[2]);
}
