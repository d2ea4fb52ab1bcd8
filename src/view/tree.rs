use serde::Serialize;

use crate::model::folder::Folder;
use crate::model::selection::Focus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Folder,
    List,
}

/// One line of the sidebar tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeRow {
    pub kind: RowKind,
    pub name: String,
    /// 0 for folders, 1 for lists
    pub depth: usize,
    /// Marked as the current selection
    pub active: bool,
    pub folder: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<usize>,
}

/// Every folder, each followed by its lists. A folder row is active only
/// when the folder alone is selected.
pub fn build_tree(folders: &[Folder], focus: Focus) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    for (fi, folder) in folders.iter().enumerate() {
        rows.push(TreeRow {
            kind: RowKind::Folder,
            name: folder.name.clone(),
            depth: 0,
            active: focus == Focus::Folder(fi),
            folder: fi,
            list: None,
        });
        for (li, list) in folder.lists.iter().enumerate() {
            let active = matches!(focus, Focus::List(r) if r.folder == fi && r.list == li);
            rows.push(TreeRow {
                kind: RowKind::List,
                name: list.name.clone(),
                depth: 1,
                active,
                folder: fi,
                list: Some(li),
            });
        }
    }
    rows
}
