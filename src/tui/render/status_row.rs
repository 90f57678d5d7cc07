use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::helpers::spans_width;

const VIEW_BINDINGS: &[(&str, &str)] = &[
    ("\u{2191}\u{2193}/jk", "move"),
    ("a", "add"),
    ("enter", "edit"),
    ("d", "done"),
    ("p", "in progress"),
    ("q", "quit"),
];

const PROMPT_BINDINGS: &[(&str, &str)] = &[("enter", "save"), ("esc", "cancel")];

/// Render the status row: transient message on the left, counts on the right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = Vec::new();
    if let Some(ref msg) = app.status_message {
        let fg = if app.status_is_error {
            app.theme.red
        } else {
            app.theme.text
        };
        spans.push(Span::styled(format!(" {}", msg), Style::default().fg(fg).bg(bg)));
    }

    if app.mode == Mode::View {
        let (total, done) = app.counts();
        let counts = format!("{} tasks, {} done ", total, done);
        let content_width = spans_width(&spans);
        let counts_width = counts.chars().count();
        if content_width + counts_width < width {
            let padding = width - content_width - counts_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(counts, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Render the one-line key legend for the current mode
pub fn render_help_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.dim).bg(bg);

    let bindings = match app.mode {
        Mode::View => VIEW_BINDINGS,
        Mode::Add | Mode::Edit { .. } => PROMPT_BINDINGS,
    };

    let mut spans = vec![Span::styled(" ", desc_style)];
    for (i, (key, desc)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", desc_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {}", desc), desc_style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Task;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn view_legend_lists_all_bindings() {
        let dir = TempDir::new().unwrap();
        let app = app_with_tasks(&dir, Vec::new());
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_help_row(frame, &app, area);
        });
        assert_eq!(
            output,
            " \u{2191}\u{2193}/jk move  a add  enter edit  d done  p in progress  q quit"
        );
    }

    #[test]
    fn prompt_legend_has_cancel_hint() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_tasks(&dir, Vec::new());
        app.mode = Mode::Add;
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_help_row(frame, &app, area);
        });
        assert_eq!(output, " enter save  esc cancel");
    }

    #[test]
    fn status_row_shows_message_and_counts() {
        let mut tasks = vec![Task::new(1, "a"), Task::new(2, "b")];
        tasks[1].toggle_done();
        let dir = TempDir::new().unwrap();
        let mut app = app_with_tasks(&dir, tasks);
        app.status_message = Some("save failed: disk full".into());
        app.status_is_error = true;
        let output = render_to_string(40, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.starts_with(" save failed: disk full"));
        assert!(output.ends_with("2 tasks, 1 done"));
    }
}
