use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode, TaskForm};
use crate::util::unicode::pop_grapheme;

/// Typing a new folder name in the status row
pub(super) fn handle_folder_name(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_folder_name(),
        KeyCode::Esc => {
            app.folder_input.clear();
            app.mode = Mode::Navigate;
        }
        KeyCode::Backspace => pop_grapheme(&mut app.folder_input),
        KeyCode::Char(c) => app.folder_input.push(c),
        _ => {}
    }
}

/// The add-task form: Tab/BackTab move between fields, Enter submits
pub(super) fn handle_task_form(app: &mut App, key: KeyEvent) {
    let show_subject = app.view().panel.is_some_and(|p| p.show_subject);
    let fields = TaskForm::fields(show_subject);
    let focused = app.form.focused();
    let pos = fields.iter().position(|f| *f == focused).unwrap_or(0);

    match key.code {
        KeyCode::Enter => app.submit_task_form(),
        KeyCode::Esc => {
            app.form.clear();
            app.mode = Mode::Navigate;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form.focus = Some(fields[(pos + 1) % fields.len()]);
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form.focus = Some(fields[(pos + fields.len() - 1) % fields.len()]);
        }
        KeyCode::Backspace => pop_grapheme(app.form.value_mut(focused)),
        KeyCode::Char(c) => app.form.value_mut(focused).push(c),
        _ => {}
    }
}
