mod confirm;
mod form;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // A validation notice blocks until acknowledged; the key is consumed
    if app.notice.take().is_some() {
        return;
    }
    app.status_message = None;

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::NewFolder => form::handle_folder_name(app, key),
        Mode::AddTask => form::handle_task_form(app, key),
        Mode::Confirm => confirm::handle_confirm(app, key),
    }
}
