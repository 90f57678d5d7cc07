use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_view(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) | (_, KeyCode::Esc) => app.quit(),
        (KeyModifiers::NONE, KeyCode::Char('a')) => {
            app.input.clear();
            app.mode = Mode::Add;
        }
        (_, KeyCode::Enter) => {
            let Some(id) = app.list.selected() else {
                return;
            };
            // The list can outlive a task only if it's out of sync; don't
            // enter Edit for an id we can't resolve
            let Some(task) = app.find_task(id) else {
                log::warn!("selected id {} not found", id);
                return;
            };
            let title = task.title.clone();
            app.input.set_value(&title);
            app.mode = Mode::Edit { id };
        }
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            if let Some(id) = app.list.selected() {
                app.toggle_done(id);
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('p')) => {
            if let Some(id) = app.list.selected() {
                app.mark_in_progress(id);
            }
        }
        _ => {
            app.list.handle_key(key);
        }
    }
}
