use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode, Pane};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
        }
        (_, KeyCode::Tab) => {
            app.pane = match app.pane {
                Pane::Tree if app.task_count() > 0 => Pane::Tasks,
                _ => Pane::Tree,
            };
        }
        (_, KeyCode::Char('j')) | (_, KeyCode::Down) => move_cursor(app, 1),
        (_, KeyCode::Char('k')) | (_, KeyCode::Up) => move_cursor(app, -1),
        (_, KeyCode::Char('J')) => {
            app.pane = Pane::Tasks;
            move_cursor(app, 1);
        }
        (_, KeyCode::Char('K')) => {
            app.pane = Pane::Tasks;
            move_cursor(app, -1);
        }
        (_, KeyCode::Enter) => {
            if app.pane == Pane::Tree {
                app.select_cursor();
            }
        }
        (_, KeyCode::Esc) => {
            app.session.clear_selection();
            app.pane = Pane::Tree;
        }
        (_, KeyCode::Char('N')) => {
            app.folder_input.clear();
            app.mode = Mode::NewFolder;
        }
        (_, KeyCode::Char('+')) => app.begin_new_list(),
        (_, KeyCode::Char('a')) => app.begin_add_task(),
        (_, KeyCode::Char(' ')) => {
            if app.pane == Pane::Tasks {
                app.toggle_cursor_task();
            }
        }
        (_, KeyCode::Char('d')) | (_, KeyCode::Delete) => app.request_delete(),
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let (cursor, len) = match app.pane {
        Pane::Tree => (&mut app.tree_cursor, app.session.view(app.today).tree.len()),
        Pane::Tasks => {
            let len = app.task_count();
            (&mut app.task_cursor, len)
        }
    };
    if len == 0 {
        *cursor = 0;
        return;
    }
    *cursor = cursor.saturating_add_signed(delta).min(len - 1);
}
