use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

/// Keys while the title prompt is open (Add or Edit)
pub(super) fn handle_prompt(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => cancel_edit(app),
        KeyCode::Enter => confirm_edit(app),
        _ => {
            app.input.handle_key(key);
        }
    }
}

/// Commit the prompt. A blank title is ignored and the prompt stays open.
fn confirm_edit(app: &mut App) {
    let title = app.input.value().trim().to_string();
    if title.is_empty() {
        return;
    }
    match app.mode {
        Mode::Add => {
            app.add_task(&title);
        }
        Mode::Edit { id } => {
            app.rename_task(id, &title);
        }
        Mode::View => return,
    }
    app.input.clear();
    app.mode = Mode::View;
}

fn cancel_edit(app: &mut App) {
    app.input.clear();
    app.mode = Mode::View;
}
