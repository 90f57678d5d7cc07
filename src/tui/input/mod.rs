mod edit;
mod navigate;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, Mode};

use edit::handle_prompt;
use navigate::handle_view;

/// Handle one terminal event. Everything happens synchronously: by the time
/// this returns, any mutation has been saved.
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Resize(width, height) => app.resize(width, height),
        _ => {}
    }
}

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // A broken task file leaves only the way out
    if app.load_error.is_some() {
        if is_quit_key(key) {
            app.quit();
        }
        return;
    }

    app.clear_status();

    if is_interrupt(key) {
        app.quit();
        return;
    }

    match app.mode {
        Mode::View => handle_view(app, key),
        Mode::Add | Mode::Edit { .. } => handle_prompt(app, key),
    }
}

fn is_interrupt(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

fn is_quit_key(key: KeyEvent) -> bool {
    is_interrupt(key)
        || matches!(
            (key.modifiers, key.code),
            (KeyModifiers::NONE, KeyCode::Char('q')) | (_, KeyCode::Esc)
        )
}
