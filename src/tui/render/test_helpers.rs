use chrono::NaiveDate;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::io::store::Store;
use crate::model::UiConfig;
use crate::ops::session::Session;
use crate::ops::task_ops::TaskDraft;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// The fixed day render tests are drawn on.
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 2).unwrap()
}

/// An App over an empty temporary store. Keep the TempDir alive.
pub fn empty_app() -> (TempDir, App) {
    let dir = TempDir::new().unwrap();
    let session = Session::load(Store::open(dir.path()).unwrap());
    let mut app = App::new(session, UiConfig::default());
    app.today = test_today();
    (dir, app)
}

/// School/Math (Worksheet due today, Quiz done) and an empty Home folder,
/// with School/Math selected.
pub fn sample_app() -> (TempDir, App) {
    let (dir, mut app) = empty_app();
    let s = &mut app.session;
    s.create_folder("School").unwrap();
    s.create_folder("Home").unwrap();
    s.select(0, None).unwrap();
    let math = s
        .add_task(
            TaskDraft::new("Worksheet")
                .subject("Math")
                .date(Some(test_today())),
        )
        .unwrap();
    s.add_task(TaskDraft::new("Quiz")).unwrap();
    s.toggle_task(math, 1).unwrap();
    (dir, app)
}
