use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, Mode};

use super::helpers::take_width;

const FIELD_PREFIX: &str = " > ";

/// Render the Add / Edit title prompt and place the terminal cursor in it
pub fn render_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let header = match app.mode {
        Mode::Edit { .. } => " Edit Task",
        _ => " Add New Task",
    };
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    // Horizontal scroll so the cursor stays inside the field
    let field_width = (area.width as usize).saturating_sub(FIELD_PREFIX.len());
    let value = app.input.value();
    let start = app.input.scroll_start(field_width);
    let visible = take_width(&value[start..], field_width);

    let lines = vec![
        Line::from(Span::styled(header, header_style)),
        Line::from(""),
        Line::from(vec![
            Span::styled(FIELD_PREFIX, Style::default().fg(app.theme.highlight).bg(bg)),
            Span::styled(visible.to_string(), Style::default().fg(app.theme.text_bright).bg(bg)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);

    if area.height > 2 {
        let col = app.input.cursor_col() - value[..start].width();
        let x = area.x + (FIELD_PREFIX.len() + col).min(area.width.saturating_sub(1) as usize) as u16;
        frame.set_cursor_position(Position::new(x, area.y + 2));
    }
}
