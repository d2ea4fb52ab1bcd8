use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, Pane};
use crate::util::unicode::display_width;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    // A pending validation notice wins over everything else
    let line = if let Some(ref notice) = app.notice {
        Line::from(vec![
            Span::styled(
                format!(" {} ", notice),
                Style::default()
                    .fg(app.theme.red)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("(any key)", Style::default().fg(app.theme.dim).bg(bg)),
        ])
    } else {
        match app.mode {
            Mode::Confirm => {
                let message = app
                    .confirm_state
                    .as_ref()
                    .map_or("", |c| c.message.as_str());
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", message),
                        Style::default().fg(app.theme.text_bright).bg(bg),
                    ),
                    Span::styled(
                        "[y/n]",
                        Style::default().fg(app.theme.highlight).bg(bg),
                    ),
                ])
            }
            Mode::NewFolder => with_hint(
                vec![
                    Span::styled(
                        format!(" New folder: {}", app.folder_input),
                        Style::default().fg(app.theme.text_bright).bg(bg),
                    ),
                    Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)), // ▌ cursor
                ],
                "Enter create  Esc cancel",
                app,
                width,
            ),
            Mode::AddTask => with_hint(
                Vec::new(),
                "Tab next field  Enter save  Esc cancel",
                app,
                width,
            ),
            Mode::Navigate => {
                let spans = match app.status_message {
                    Some(ref msg) => vec![Span::styled(
                        format!(" {}", msg),
                        Style::default().fg(app.theme.green).bg(bg),
                    )],
                    None => Vec::new(),
                };
                if app.ui.show_key_hints {
                    with_hint(spans, navigate_hint(app), app, width)
                } else {
                    Line::from(spans)
                }
            }
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn navigate_hint(app: &App) -> &'static str {
    match app.pane {
        Pane::Tree => "Enter select  N folder  + list  a add  d delete  Tab tasks  q quit",
        Pane::Tasks => "Space toggle  a add  d delete  Tab folders  q quit",
    }
}

/// Right-align a dim key hint after `spans` when it fits.
fn with_hint<'a>(mut spans: Vec<Span<'a>>, hint: &'a str, app: &App, width: usize) -> Line<'a> {
    let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let hint_width = display_width(hint);
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(
            " ".repeat(padding),
            Style::default().bg(app.theme.background),
        ));
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        ));
    }
    Line::from(spans)
}
