use std::io;
use std::path::Path;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::store::Store;
use crate::io::{config_io, logging};
use crate::model::UiConfig;
use crate::model::selection::ListRef;
use crate::model::task::parse_date;
use crate::ops::session::{QuestError, Session};
use crate::ops::task_ops::TaskDraft;
use crate::view::{RowKind, TreeRow, View};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a new folder name in the status row
    NewFolder,
    /// Filling in the add-task form
    AddTask,
    /// Waiting for y/n on `confirm_state`
    Confirm,
}

/// Which pane has keyboard focus in Navigate mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Tree,
    Tasks,
}

/// Fields of the add-task form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Text,
    Date,
    Subject,
    Link,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Text => "Task",
            FormField::Date => "Due (YYYY-MM-DD)",
            FormField::Subject => "Subject (list name)",
            FormField::Link => "Link",
        }
    }
}

/// Add-task form contents
#[derive(Debug, Clone, Default)]
pub struct TaskForm {
    pub text: String,
    pub date: String,
    pub subject: String,
    pub link: String,
    pub focus: Option<FormField>,
}

impl TaskForm {
    pub fn clear(&mut self) {
        *self = TaskForm::default();
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Text => &self.text,
            FormField::Date => &self.date,
            FormField::Subject => &self.subject,
            FormField::Link => &self.link,
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Text => &mut self.text,
            FormField::Date => &mut self.date,
            FormField::Subject => &mut self.subject,
            FormField::Link => &mut self.link,
        }
    }

    pub fn focused(&self) -> FormField {
        self.focus.unwrap_or(FormField::Text)
    }

    /// Fields shown for the current selection (subject only at folder level)
    pub fn fields(show_subject: bool) -> Vec<FormField> {
        if show_subject {
            vec![
                FormField::Text,
                FormField::Date,
                FormField::Subject,
                FormField::Link,
            ]
        } else {
            vec![FormField::Text, FormField::Date, FormField::Link]
        }
    }
}

/// A destructive action waiting for confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteFolder { folder: usize },
    DeleteList { folder: usize, list: usize },
    DeleteTask { list: ListRef, index: usize },
}

#[derive(Debug, Clone)]
pub struct ConfirmState {
    /// Prompt naming the target, e.g. `Delete folder 'Work'?`
    pub message: String,
    pub action: ConfirmAction,
}

/// Main application state
pub struct App {
    pub session: Session,
    pub ui: UiConfig,
    pub theme: Theme,
    pub mode: Mode,
    pub pane: Pane,
    pub should_quit: bool,
    /// Cursor into the flattened folder/list tree
    pub tree_cursor: usize,
    /// Cursor into the task panel rows
    pub task_cursor: usize,
    /// First tree row drawn; kept around the cursor by the renderer
    pub tree_scroll: usize,
    /// First task row drawn
    pub task_scroll: usize,
    pub form: TaskForm,
    /// New folder name being typed
    pub folder_input: String,
    pub confirm_state: Option<ConfirmState>,
    /// Validation error shown until the next key press
    pub notice: Option<String>,
    /// One-shot feedback line
    pub status_message: Option<String>,
    /// Calendar day used for due labels; refreshed every frame
    pub today: NaiveDate,
}

impl App {
    pub fn new(session: Session, ui: UiConfig) -> Self {
        let theme = Theme::from_config(&ui);
        App {
            session,
            ui,
            theme,
            mode: Mode::Navigate,
            pane: Pane::Tree,
            should_quit: false,
            tree_cursor: 0,
            task_cursor: 0,
            tree_scroll: 0,
            task_scroll: 0,
            form: TaskForm::default(),
            folder_input: String::new(),
            confirm_state: None,
            notice: None,
            status_message: None,
            today: Local::now().date_naive(),
        }
    }

    pub fn view(&self) -> View {
        self.session.view(self.today)
    }

    /// The tree row under the cursor, if any
    pub fn cursor_row(&self) -> Option<TreeRow> {
        self.view().tree.get(self.tree_cursor).cloned()
    }

    /// Number of rows in the task panel for the current selection
    pub fn task_count(&self) -> usize {
        self.view().panel.map_or(0, |p| p.tasks.len())
    }

    /// Keep both cursors inside their lists after a mutation.
    pub fn clamp_cursors(&mut self) {
        let view = self.view();
        self.tree_cursor = self.tree_cursor.min(view.tree.len().saturating_sub(1));
        let tasks = view.panel.map_or(0, |p| p.tasks.len());
        self.task_cursor = self.task_cursor.min(tasks.saturating_sub(1));
    }

    /// Move the tree cursor onto the active row (e.g. after a list was
    /// created by adding a task).
    pub fn sync_tree_cursor(&mut self) {
        if let Some(i) = self.view().tree.iter().position(|r| r.active) {
            self.tree_cursor = i;
        }
    }

    /// Record the outcome of a command: errors become a blocking notice.
    pub fn report<T>(&mut self, result: Result<T, QuestError>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::info!(error = %e, "command rejected");
                self.notice = Some(e.to_string());
                None
            }
        }
    }

    /// Select the folder or list under the tree cursor.
    pub fn select_cursor(&mut self) {
        let Some(row) = self.cursor_row() else {
            return;
        };
        let result = self.session.select(row.folder, row.list);
        if self.report(result).is_some() {
            self.task_cursor = 0;
        }
    }

    /// Start a new list under the folder at the cursor (or the cursor's parent
    /// folder): selects the folder and opens the add form with a subject field.
    pub fn begin_new_list(&mut self) {
        let Some(row) = self.cursor_row() else {
            self.notice = Some("create a folder first".into());
            return;
        };
        let result = self.session.create_list(row.folder);
        if self.report(result).is_some() {
            self.sync_tree_cursor();
            self.begin_add_task();
        }
    }

    /// Open the add-task form for the current selection.
    pub fn begin_add_task(&mut self) {
        if self.view().panel.is_none() {
            self.notice = Some("select a folder or list first".into());
            return;
        }
        self.form.clear();
        self.mode = Mode::AddTask;
    }

    pub fn submit_task_form(&mut self) {
        let date = match parse_date(&self.form.date) {
            Ok(date) => date,
            Err(_) => {
                self.notice = Some(format!(
                    "invalid date '{}': expected YYYY-MM-DD",
                    self.form.date.trim()
                ));
                return;
            }
        };
        let link = Some(self.form.link.clone());
        let draft = TaskDraft::new(self.form.text.clone())
            .subject(self.form.subject.clone())
            .date(date)
            .link(link);
        let result = self.session.add_task(draft);
        if let Some(r) = self.report(result) {
            self.form.clear();
            self.mode = Mode::Navigate;
            self.sync_tree_cursor();
            let count = self.session.folders()[r.folder].lists[r.list].tasks.len();
            self.task_cursor = count.saturating_sub(1);
        }
    }

    pub fn submit_folder_name(&mut self) {
        let result = self.session.create_folder(&self.folder_input);
        if let Some(index) = self.report(result) {
            self.folder_input.clear();
            self.mode = Mode::Navigate;
            if let Some(i) = self
                .view()
                .tree
                .iter()
                .position(|r| r.kind == RowKind::Folder && r.folder == index)
            {
                self.tree_cursor = i;
            }
        }
    }

    pub fn toggle_cursor_task(&mut self) {
        let Some(list) = self.selected_list() else {
            return;
        };
        if self.task_cursor >= self.task_count() {
            return;
        }
        let result = self.session.toggle_task(list, self.task_cursor);
        self.report(result);
    }

    /// The selected list, if the selection currently resolves to one
    pub fn selected_list(&self) -> Option<ListRef> {
        match self.session.selection().resolve(self.session.folders()) {
            crate::model::Focus::List(r) => Some(r),
            _ => None,
        }
    }

    /// Ask to delete whatever is under the focused cursor.
    pub fn request_delete(&mut self) {
        let Some(state) = self.delete_target() else {
            return;
        };
        if self.ui.confirm_deletes {
            self.confirm_state = Some(state);
            self.mode = Mode::Confirm;
        } else {
            self.perform(state.action);
        }
    }

    fn delete_target(&self) -> Option<ConfirmState> {
        match self.pane {
            Pane::Tree => {
                let row = self.cursor_row()?;
                let (message, action) = match row.list {
                    None => (
                        format!("Delete folder '{}'?", row.name),
                        ConfirmAction::DeleteFolder { folder: row.folder },
                    ),
                    Some(list) => (
                        format!("Delete list '{}'?", row.name),
                        ConfirmAction::DeleteList {
                            folder: row.folder,
                            list,
                        },
                    ),
                };
                Some(ConfirmState { message, action })
            }
            Pane::Tasks => {
                let list = self.selected_list()?;
                let panel = self.view().panel?;
                let task = panel.tasks.get(self.task_cursor)?;
                Some(ConfirmState {
                    message: format!("Delete task '{}'?", task.text),
                    action: ConfirmAction::DeleteTask {
                        list,
                        index: self.task_cursor,
                    },
                })
            }
        }
    }

    /// Run a confirmed destructive action.
    pub fn perform(&mut self, action: ConfirmAction) {
        let message = match action {
            ConfirmAction::DeleteFolder { folder } => {
                let result = self.session.delete_folder(folder);
                self.report(result).map(|f| format!("deleted folder '{}'", f.name))
            }
            ConfirmAction::DeleteList { folder, list } => {
                let result = self.session.delete_list(folder, list);
                self.report(result).map(|l| format!("deleted list '{}'", l.name))
            }
            ConfirmAction::DeleteTask { list, index } => {
                let result = self.session.delete_task(list, index);
                self.report(result).map(|t| format!("deleted task '{}'", t.text))
            }
        };
        if message.is_some() {
            self.status_message = message;
        }
        self.clamp_cursors();
    }
}

/// Launch the TUI against the data directory (flag, env, or platform default).
pub fn run(data_dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = config_io::resolve_data_dir(data_dir)?;
    let store = Store::open(&dir)?;
    let config = config_io::read_config(&dir)?;
    let _log_guard = logging::init_file_logging(&dir, &config.log.level);
    tracing::info!(data_dir = %dir.display(), "starting tui");

    let session = Session::load(store);
    let mut app = App::new(session, config.ui);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.today = Local::now().date_naive();
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
