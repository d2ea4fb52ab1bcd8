use chrono::NaiveDate;

use crate::io::store::{FOLDERS_KEY, LEGACY_LISTS_KEY, Store, StoreError};
use crate::model::folder::{Folder, List};
use crate::model::selection::{ListRef, Selection};
use crate::model::task::Task;
use crate::ops::task_ops::TaskDraft;
use crate::ops::{ValidationError, folder_ops, task_ops};
use crate::view::{self, View};

/// Error type for session commands
#[derive(Debug, thiserror::Error)]
pub enum QuestError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The single owner of the folder collection and the selection.
///
/// Every command validates, mutates, then writes the whole collection to
/// the store before returning. A failed write rolls the in-memory state back
/// so memory and disk never disagree.
#[derive(Debug)]
pub struct Session {
    store: Store,
    folders: Vec<Folder>,
    selection: Selection,
}

impl Session {
    /// Load folders from the store. Selection always starts empty.
    pub fn load(store: Store) -> Self {
        let folders: Vec<Folder> = store.load(FOLDERS_KEY);
        let legacy: Vec<List> = store.load(LEGACY_LISTS_KEY);
        tracing::debug!(
            folders = folders.len(),
            legacy_lists = legacy.len(),
            "loaded store"
        );
        Session {
            store,
            folders,
            selection: Selection::none(),
        }
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Project the current state for display.
    pub fn view(&self, today: NaiveDate) -> View {
        view::project(&self.folders, self.selection, today)
    }

    pub fn create_folder(&mut self, name: &str) -> Result<usize, QuestError> {
        let index = self.commit(|folders, _| folder_ops::create_folder(folders, name))?;
        tracing::info!(folder = %self.folders[index].name, "created folder");
        Ok(index)
    }

    pub fn delete_folder(&mut self, index: usize) -> Result<Folder, QuestError> {
        let folder = self.commit(|folders, sel| folder_ops::delete_folder(folders, sel, index))?;
        tracing::info!(folder = %folder.name, lists = folder.lists.len(), "deleted folder");
        Ok(folder)
    }

    /// Select `folder_index` alone so the next task add names a new list.
    /// Nothing is persisted: no list exists until a task lands in it.
    pub fn create_list(&mut self, folder_index: usize) -> Result<(), QuestError> {
        folder_ops::create_list(&self.folders, &mut self.selection, folder_index)?;
        Ok(())
    }

    pub fn delete_list(&mut self, folder_index: usize, list_index: usize) -> Result<List, QuestError> {
        let list = self.commit(|folders, sel| {
            folder_ops::delete_list(folders, sel, folder_index, list_index)
        })?;
        tracing::info!(list = %list.name, tasks = list.tasks.len(), "deleted list");
        Ok(list)
    }

    pub fn select(&mut self, folder_index: usize, list_index: Option<usize>) -> Result<(), QuestError> {
        folder_ops::select(&self.folders, &mut self.selection, folder_index, list_index)?;
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::none();
    }

    pub fn add_task(&mut self, draft: TaskDraft) -> Result<ListRef, QuestError> {
        let list_ref = self.commit(|folders, sel| task_ops::add_task(folders, sel, draft))?;
        tracing::info!(
            list = %self.folders[list_ref.folder].lists[list_ref.list].name,
            "added task"
        );
        Ok(list_ref)
    }

    pub fn toggle_task(&mut self, list_ref: ListRef, index: usize) -> Result<bool, QuestError> {
        let completed = self.commit(|folders, _| task_ops::toggle_task(folders, list_ref, index))?;
        tracing::info!(task = index, completed, "toggled task");
        Ok(completed)
    }

    pub fn delete_task(&mut self, list_ref: ListRef, index: usize) -> Result<Task, QuestError> {
        let task = self.commit(|folders, _| task_ops::delete_task(folders, list_ref, index))?;
        tracing::info!(task = %task.text, "deleted task");
        Ok(task)
    }

    /// Run a validated mutation, then persist. On a failed write, restore the
    /// state from before the mutation.
    fn commit<R>(
        &mut self,
        op: impl FnOnce(&mut Vec<Folder>, &mut Selection) -> Result<R, ValidationError>,
    ) -> Result<R, QuestError> {
        let before = (self.folders.clone(), self.selection);
        let result = op(&mut self.folders, &mut self.selection)?;
        if let Err(e) = self.store.save(FOLDERS_KEY, &self.folders) {
            tracing::warn!(error = %e, "write failed, rolling back");
            (self.folders, self.selection) = before;
            return Err(e.into());
        }
        Ok(result)
    }
}
