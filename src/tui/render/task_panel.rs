use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode, Pane, TaskForm};
use crate::util::unicode::{display_width, truncate_to_width};
use crate::view::{RowKind, TaskPanel, TaskRow, View};

use super::scroll_to_cursor;

/// Render the right-hand panel: the selected list's tasks, or a prompt
pub fn render_task_panel(frame: &mut Frame, app: &mut App, view: &View, area: Rect) {
    let Some(panel) = view.panel.as_ref() else {
        let block = panel_block(app, " Tasks ");
        let hint = Paragraph::new(Line::from(Span::styled(
            " Select a folder or list (Enter)",
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        )))
        .block(block)
        .style(Style::default().bg(app.theme.background));
        frame.render_widget(hint, area);
        return;
    };

    let (list_area, form_area) = if app.mode == Mode::AddTask {
        let fields = TaskForm::fields(panel.show_subject).len() as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(fields + 2)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    let title = match panel.kind {
        RowKind::Folder => format!(" {} ", panel.title),
        RowKind::List => format!(" {} · {} ", panel.title, counts_label(view)),
    };
    let visible_height = list_area.height.saturating_sub(2) as usize;
    app.task_scroll = app.task_scroll.min(panel.tasks.len().saturating_sub(1));
    scroll_to_cursor(app.task_cursor, &mut app.task_scroll, visible_height);
    let app = &*app;

    let block = panel_block(app, &title);
    let inner_width = list_area.width.saturating_sub(2) as usize;

    let lines = match panel.kind {
        RowKind::Folder => vec![Line::from(Span::styled(
            " No list selected. Press a to add a task; its subject names the list.",
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        ))],
        RowKind::List => task_lines(app, panel, inner_width, visible_height),
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, list_area);

    if let Some(form_area) = form_area {
        render_form(frame, app, panel, form_area);
    }
}

fn panel_block<'a>(app: &App, title: &str) -> Block<'a> {
    let border = if app.pane == Pane::Tasks || app.mode == Mode::AddTask {
        app.theme.selection_border
    } else {
        app.theme.dim
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border).bg(app.theme.background))
        .title(Span::styled(
            title.to_string(),
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ))
}

fn counts_label(view: &View) -> String {
    format!(
        "{} total, {} active, {} completed",
        view.counts.total, view.counts.active, view.counts.completed
    )
}

fn task_lines<'a>(app: &App, panel: &TaskPanel, width: usize, height: usize) -> Vec<Line<'a>> {
    if panel.tasks.is_empty() {
        return vec![Line::from(Span::styled(
            " No tasks",
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        ))];
    }
    panel
        .tasks
        .iter()
        .skip(app.task_scroll)
        .take(height)
        .map(|row| {
            let is_cursor = app.pane == Pane::Tasks && row.index == app.task_cursor;
            task_line(app, row, is_cursor, width)
        })
        .collect()
}

fn task_line<'a>(app: &App, row: &TaskRow, is_cursor: bool, width: usize) -> Line<'a> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let base = Style::default().bg(bg);

    // Trailing metadata first, so the text gets what is left
    let mut meta: Vec<Span> = Vec::new();
    if let Some(date) = row.date {
        meta.push(Span::styled(
            format!("  {}", date),
            base.fg(app.theme.dim),
        ));
    }
    if let Some(status) = row.status {
        meta.push(Span::styled(
            format!("  {}", status.label()),
            base.fg(app.theme.due_color(status)).add_modifier(Modifier::BOLD),
        ));
    }
    if let Some(ref link) = row.link {
        meta.push(Span::styled(
            format!("  {}", link),
            base.fg(app.theme.cyan).add_modifier(Modifier::UNDERLINED),
        ));
    }

    let check = if row.completed { "[x]" } else { "[ ]" };
    let prefix = format!(" {} ", check);
    let meta_width: usize = meta.iter().map(|s| display_width(&s.content)).sum();
    let text_budget = width
        .saturating_sub(display_width(&prefix))
        .saturating_sub(meta_width)
        .max(8);

    let text_style = if row.completed {
        base.fg(app.theme.dim).add_modifier(Modifier::CROSSED_OUT)
    } else {
        base.fg(app.theme.text_bright)
    };
    let check_style = if row.completed {
        base.fg(app.theme.green)
    } else {
        base.fg(app.theme.text)
    };

    let mut spans = vec![
        Span::styled(prefix, check_style),
        Span::styled(truncate_to_width(&row.text, text_budget), text_style),
    ];
    spans.extend(meta);
    Line::from(spans)
}

/// The add-task form, one labelled field per line
fn render_form(frame: &mut Frame, app: &App, panel: &TaskPanel, area: Rect) {
    let title = match panel.kind {
        RowKind::Folder => " New list ",
        RowKind::List => " Add task ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(app.theme.highlight)
                .bg(app.theme.background),
        )
        .title(Span::styled(
            title,
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ));

    let focused = app.form.focused();
    let lines: Vec<Line> = TaskForm::fields(panel.show_subject)
        .into_iter()
        .map(|field| {
            let is_focused = field == focused;
            let label_style = if is_focused {
                Style::default().fg(app.theme.highlight).bg(app.theme.background)
            } else {
                Style::default().fg(app.theme.dim).bg(app.theme.background)
            };
            let mut spans = vec![
                Span::styled(format!(" {}: ", field.label()), label_style),
                Span::styled(
                    app.form.value(field).to_string(),
                    Style::default()
                        .fg(app.theme.text_bright)
                        .bg(app.theme.background),
                ),
            ];
            if is_focused {
                spans.push(Span::styled(
                    "\u{258C}",
                    Style::default().fg(app.theme.highlight).bg(app.theme.background),
                )); // ▌ cursor
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}
