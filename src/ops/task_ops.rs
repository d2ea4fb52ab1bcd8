use chrono::NaiveDate;

use crate::model::folder::{Folder, List};
use crate::model::selection::{Focus, ListRef, Selection};
use crate::model::task::Task;
use crate::ops::ValidationError;

/// User input for a new task, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub text: String,
    pub date: Option<NaiveDate>,
    /// Names the target list when only a folder is selected
    pub subject: String,
    pub link: Option<String>,
}

impl TaskDraft {
    pub fn new(text: impl Into<String>) -> Self {
        TaskDraft {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn date(mut self, date: Option<NaiveDate>) -> Self {
        self.date = date;
        self
    }

    pub fn link(mut self, link: Option<String>) -> Self {
        self.link = link;
        self
    }
}

/// Append a task to the selected list.
///
/// With only a folder selected, the draft's subject picks the list: an
/// existing list with the same name (case-insensitive) is reused, otherwise a
/// new list named after the subject is created. Either way the selection then
/// points at that list. Returns the list the task went into.
pub fn add_task(
    folders: &mut [Folder],
    selection: &mut Selection,
    draft: TaskDraft,
) -> Result<ListRef, ValidationError> {
    let text = draft.text.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyTaskText);
    }
    let subject = draft.subject.trim();
    let link = draft
        .link
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string);

    let target = match selection.resolve(folders) {
        Focus::Nothing => return Err(ValidationError::NoSelection),
        Focus::List(list_ref) => list_ref,
        Focus::Folder(fi) => {
            if subject.is_empty() {
                return Err(ValidationError::EmptySubject);
            }
            let folder = &mut folders[fi];
            let li = match folder.find_list(subject) {
                Some(li) => li,
                None => {
                    folder.lists.push(List::new(subject.to_string()));
                    folder.lists.len() - 1
                }
            };
            ListRef { folder: fi, list: li }
        }
    };

    *selection = Selection::list(target.folder, target.list);
    folders[target.folder].lists[target.list].tasks.push(Task::new(
        text.to_string(),
        draft.date,
        subject.to_string(),
        link,
    ));
    Ok(target)
}

/// Flip a task's completed flag. Returns the new value.
pub fn toggle_task(
    folders: &mut [Folder],
    list_ref: ListRef,
    index: usize,
) -> Result<bool, ValidationError> {
    let task = list_mut(folders, list_ref)?
        .tasks
        .get_mut(index)
        .ok_or(ValidationError::TaskNotFound(index + 1))?;
    task.completed = !task.completed;
    Ok(task.completed)
}

/// Remove the task at `index`. Returns the removed task.
pub fn delete_task(
    folders: &mut [Folder],
    list_ref: ListRef,
    index: usize,
) -> Result<Task, ValidationError> {
    let list = list_mut(folders, list_ref)?;
    if index >= list.tasks.len() {
        return Err(ValidationError::TaskNotFound(index + 1));
    }
    Ok(list.tasks.remove(index))
}

fn list_mut(folders: &mut [Folder], list_ref: ListRef) -> Result<&mut List, ValidationError> {
    folders
        .get_mut(list_ref.folder)
        .ok_or_else(|| ValidationError::FolderNotFound(format!("#{}", list_ref.folder + 1)))?
        .lists
        .get_mut(list_ref.list)
        .ok_or_else(|| ValidationError::ListNotFound(format!("#{}", list_ref.list + 1)))
}
