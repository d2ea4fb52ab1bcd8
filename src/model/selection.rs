use serde::Serialize;

use super::folder::Folder;

/// Address of one list: folder position plus list position within it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListRef {
    pub folder: usize,
    pub list: usize,
}

/// The active folder/list pointer. Never persisted; starts empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub folder: Option<usize>,
    pub list: Option<usize>,
}

/// What a selection points at once checked against the current folders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Nothing,
    Folder(usize),
    List(ListRef),
}

impl Selection {
    pub fn none() -> Self {
        Selection::default()
    }

    /// Folder-level selection (no list)
    pub fn folder(folder: usize) -> Self {
        Selection {
            folder: Some(folder),
            list: None,
        }
    }

    pub fn list(folder: usize, list: usize) -> Self {
        Selection {
            folder: Some(folder),
            list: Some(list),
        }
    }

    pub fn is_none(&self) -> bool {
        self.folder.is_none()
    }

    /// Bounds-check against `folders`. Stale indices resolve to `Focus::Nothing`.
    pub fn resolve(&self, folders: &[Folder]) -> Focus {
        let Some(fi) = self.folder else {
            return Focus::Nothing;
        };
        let Some(folder) = folders.get(fi) else {
            return Focus::Nothing;
        };
        match self.list {
            None => Focus::Folder(fi),
            Some(li) if li < folder.lists.len() => Focus::List(ListRef {
                folder: fi,
                list: li,
            }),
            Some(_) => Focus::Nothing,
        }
    }

    /// Adjust after the folder at `removed` was deleted.
    pub fn folder_removed(&mut self, removed: usize) {
        match self.folder {
            Some(fi) if fi == removed => *self = Selection::none(),
            Some(fi) if fi > removed => self.folder = Some(fi - 1),
            _ => {}
        }
    }

    /// Adjust after list `removed` of folder `folder` was deleted.
    pub fn list_removed(&mut self, folder: usize, removed: usize) {
        if self.folder != Some(folder) {
            return;
        }
        match self.list {
            Some(li) if li == removed => *self = Selection::none(),
            Some(li) if li > removed => self.list = Some(li - 1),
            _ => {}
        }
    }
}
