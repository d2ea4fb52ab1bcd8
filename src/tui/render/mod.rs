pub mod sidebar;
pub mod status_row;
pub mod task_panel;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function: sidebar | task panel, status row underneath
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    // One projection per frame, shared by both panes
    let view = app.view();
    sidebar::render_sidebar(frame, app, &view, columns[0]);
    task_panel::render_task_panel(frame, app, &view, columns[1]);
    status_row::render_status_row(frame, app, rows[1]);
}

/// Move `scroll` just enough that `cursor` falls inside `visible` rows.
pub(super) fn scroll_to_cursor(cursor: usize, scroll: &mut usize, visible: usize) {
    if visible == 0 {
        return;
    }
    if cursor < *scroll {
        *scroll = cursor;
    } else if cursor >= *scroll + visible {
        *scroll = cursor + 1 - visible;
    }
}
