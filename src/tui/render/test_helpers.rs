use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
pub use tempfile::TempDir;

use crate::model::Task;
use crate::tui::app::App;
use crate::tui::theme::Theme;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An App over `tasks` backed by `dir/tasks.json`, sized to the standard
/// test terminal. Nothing is saved unless a test triggers a mutation.
pub fn app_with_tasks(dir: &TempDir, tasks: Vec<Task>) -> App {
    let mut app = App::new(dir.path().join("tasks.json"), tasks, Theme::default());
    app.resize(TERM_W, TERM_H);
    app
}

/// One task in each status
pub fn sample_tasks() -> Vec<Task> {
    let mut review = Task::new(2, "Review PR");
    review.mark_in_progress();
    let mut ship = Task::new(3, "Ship it");
    ship.toggle_done();
    vec![Task::new(1, "Write spec"), review, ship]
}
