use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::{Task, TaskStatus};
use crate::tui::app::App;

use super::helpers::{spans_width, status_symbol, truncate_to_width};

/// Render the task list, scrolled to the list's current offset
pub fn render_list_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    if app.list.is_empty() {
        let empty = Paragraph::new(" No tasks yet. Press a to add one.")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let cursor = app.list.cursor();
    let width = area.width as usize;

    let lines: Vec<Line> = app
        .list
        .items()
        .iter()
        .enumerate()
        .skip(app.list.scroll_offset())
        .take(area.height as usize)
        .filter_map(|(i, &id)| {
            let task = app.find_task(id)?;
            Some(task_line(app, task, i == cursor, width))
        })
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn task_line<'a>(app: &App, task: &Task, is_cursor: bool, width: usize) -> Line<'a> {
    let theme = &app.theme;
    let bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };

    let mut spans: Vec<Span> = Vec::new();
    if is_cursor {
        spans.push(Span::styled(
            "\u{258E}",
            Style::default().fg(theme.highlight).bg(bg),
        ));
    } else {
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }

    spans.push(Span::styled(
        format!("{} ", status_symbol(task.status)),
        Style::default().fg(theme.status_color(task.status)).bg(bg),
    ));

    let mut title_style = match task.status {
        TaskStatus::Done => Style::default()
            .fg(theme.dim)
            .add_modifier(Modifier::CROSSED_OUT),
        TaskStatus::InProgress => Style::default().fg(theme.text_bright),
        TaskStatus::Todo => Style::default().fg(theme.text),
    }
    .bg(bg);
    if is_cursor {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }
    let room = width.saturating_sub(spans_width(&spans));
    spans.push(Span::styled(truncate_to_width(&task.title, room), title_style));

    // Pad cursor line
    if is_cursor {
        let content_width = spans_width(&spans);
        if content_width < width {
            spans.push(Span::styled(
                " ".repeat(width - content_width),
                Style::default().bg(bg),
            ));
        }
    }

    Line::from(spans)
}
