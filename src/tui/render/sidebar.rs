use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Pane};
use crate::util::unicode::truncate_to_width;
use crate::view::{RowKind, View};

use super::scroll_to_cursor;

/// Render the folder/list tree
pub fn render_sidebar(frame: &mut Frame, app: &mut App, view: &View, area: Rect) {
    let visible_height = area.height.saturating_sub(2) as usize;
    app.tree_scroll = app.tree_scroll.min(view.tree.len().saturating_sub(1));
    scroll_to_cursor(app.tree_cursor, &mut app.tree_scroll, visible_height);
    let app = &*app;

    let focused = app.pane == Pane::Tree;
    let border = if focused {
        app.theme.selection_border
    } else {
        app.theme.dim
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border).bg(app.theme.background))
        .title(Span::styled(
            " Folders ",
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ));
    let inner_width = area.width.saturating_sub(2) as usize;

    let mut lines: Vec<Line> = Vec::new();
    for (i, row) in view
        .tree
        .iter()
        .enumerate()
        .skip(app.tree_scroll)
        .take(visible_height)
    {
        let icon = match row.kind {
            RowKind::Folder => "📁",
            RowKind::List => "📝",
        };
        let indent = "  ".repeat(row.depth);
        let label = format!(" {}{} {}", indent, icon, row.name);

        let mut style = Style::default().fg(app.theme.text).bg(app.theme.background);
        if row.active {
            style = style
                .fg(app.theme.highlight)
                .add_modifier(Modifier::BOLD);
        }
        if focused && i == app.tree_cursor {
            style = style.bg(app.theme.selection_bg);
        }
        lines.push(Line::from(Span::styled(
            truncate_to_width(&label, inner_width),
            style,
        )));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            " No folders yet",
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;
    use super::*;

    #[test]
    fn tree_rows_are_indented() {
        let (_dir, mut app) = sample_app();
        let view = app.view();
        let out = render_to_string(30, 6, |frame, area| {
            render_sidebar(frame, &mut app, &view, area)
        });
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("Folders"));
        // Wide icons take two cells, so compare columns rather than text
        let school = lines[1].find("School").unwrap();
        let math = lines[2].find("Math").unwrap();
        let home = lines[3].find("Home").unwrap();
        assert_eq!(math, school + 2);
        assert_eq!(home, school);
    }

    #[test]
    fn long_names_are_truncated() {
        let (_dir, mut app) = empty_app();
        app.session
            .create_folder("An extremely long folder name indeed")
            .unwrap();
        let view = app.view();
        let out = render_to_string(20, 4, |frame, area| {
            render_sidebar(frame, &mut app, &view, area)
        });
        assert!(out.contains('\u{2026}'));
    }

    #[test]
    fn cursor_row_stays_visible() {
        let (_dir, mut app) = empty_app();
        for i in 0..20 {
            app.session.create_folder(&format!("folder-{:02}", i)).unwrap();
        }
        app.tree_cursor = 15;
        let view = app.view();
        let out = render_to_string(30, 6, |frame, area| {
            render_sidebar(frame, &mut app, &view, area)
        });
        assert!(out.contains("folder-15"));
        assert!(!out.contains("folder-00"));
        assert_eq!(app.tree_scroll, 12);
    }
}
