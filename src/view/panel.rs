use chrono::NaiveDate;
use serde::Serialize;

use crate::model::folder::Folder;
use crate::model::selection::Focus;
use crate::model::task::Task;

use super::due::{DueStatus, due_status};
use super::tree::RowKind;

/// The right-hand task panel for the current selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskPanel {
    /// Whether a folder or a list is shown
    pub kind: RowKind,
    /// Name of the selected folder or list
    pub title: String,
    /// The add form asks for a subject only at folder level
    pub show_subject: bool,
    /// Tasks of the selected list; empty at folder level
    pub tasks: Vec<TaskRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    /// Position within the list (0-based)
    pub index: usize,
    pub text: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DueStatus>,
}

/// Summary counts for the displayed list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl Counts {
    pub fn of(rows: &[TaskRow]) -> Self {
        let completed = rows.iter().filter(|r| r.completed).count();
        Counts {
            total: rows.len(),
            active: rows.len() - completed,
            completed,
        }
    }
}

pub fn task_row(index: usize, task: &Task, today: NaiveDate) -> TaskRow {
    TaskRow {
        index,
        text: task.text.clone(),
        completed: task.completed,
        date: task.date,
        link: task.link.clone(),
        status: task.date.and_then(|d| due_status(d, today)),
    }
}

pub fn build_panel(folders: &[Folder], focus: Focus, today: NaiveDate) -> Option<TaskPanel> {
    match focus {
        Focus::Nothing => None,
        Focus::Folder(fi) => Some(TaskPanel {
            kind: RowKind::Folder,
            title: folders[fi].name.clone(),
            show_subject: true,
            tasks: Vec::new(),
        }),
        Focus::List(r) => {
            let list = &folders[r.folder].lists[r.list];
            Some(TaskPanel {
                kind: RowKind::List,
                title: list.name.clone(),
                show_subject: false,
                tasks: list
                    .tasks
                    .iter()
                    .enumerate()
                    .map(|(i, t)| task_row(i, t, today))
                    .collect(),
            })
        }
    }
}
