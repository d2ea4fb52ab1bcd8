use crate::model::folder::{Folder, List, find_folder};
use crate::model::selection::Selection;
use crate::ops::ValidationError;

/// Append a new, empty folder. Returns its index.
pub fn create_folder(folders: &mut Vec<Folder>, name: &str) -> Result<usize, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyFolderName);
    }
    if find_folder(folders, name).is_some() {
        return Err(ValidationError::DuplicateFolder(name.to_string()));
    }
    folders.push(Folder::new(name.to_string()));
    Ok(folders.len() - 1)
}

/// Remove a folder and everything in it. Returns the removed folder.
pub fn delete_folder(
    folders: &mut Vec<Folder>,
    selection: &mut Selection,
    index: usize,
) -> Result<Folder, ValidationError> {
    if index >= folders.len() {
        return Err(ValidationError::FolderNotFound(format!("#{}", index + 1)));
    }
    let folder = folders.remove(index);
    selection.folder_removed(index);
    Ok(folder)
}

/// Prepare a new list under `folder_index`: select the folder alone so the
/// next added task names the list from its subject.
pub fn create_list(
    folders: &[Folder],
    selection: &mut Selection,
    folder_index: usize,
) -> Result<(), ValidationError> {
    select(folders, selection, folder_index, None)
}

/// Remove one list and its tasks. Returns the removed list.
pub fn delete_list(
    folders: &mut [Folder],
    selection: &mut Selection,
    folder_index: usize,
    list_index: usize,
) -> Result<List, ValidationError> {
    let folder = folders
        .get_mut(folder_index)
        .ok_or_else(|| ValidationError::FolderNotFound(format!("#{}", folder_index + 1)))?;
    if list_index >= folder.lists.len() {
        return Err(ValidationError::ListNotFound(format!("#{}", list_index + 1)));
    }
    let list = folder.lists.remove(list_index);
    selection.list_removed(folder_index, list_index);
    Ok(list)
}

/// Point the selection at a folder (list `None`) or at one of its lists.
pub fn select(
    folders: &[Folder],
    selection: &mut Selection,
    folder_index: usize,
    list_index: Option<usize>,
) -> Result<(), ValidationError> {
    let folder = folders
        .get(folder_index)
        .ok_or_else(|| ValidationError::FolderNotFound(format!("#{}", folder_index + 1)))?;
    *selection = match list_index {
        None => Selection::folder(folder_index),
        Some(li) if li < folder.lists.len() => Selection::list(folder_index, li),
        Some(li) => return Err(ValidationError::ListNotFound(format!("#{}", li + 1))),
    };
    Ok(())
}

/// Find a folder by case-insensitive name, or by 1-based position.
pub fn resolve_folder(folders: &[Folder], key: &str) -> Result<usize, ValidationError> {
    let key = key.trim();
    if let Some(i) = find_folder(folders, key) {
        return Ok(i);
    }
    match key.parse::<usize>() {
        Ok(n) if n >= 1 && n <= folders.len() => Ok(n - 1),
        _ => Err(ValidationError::FolderNotFound(key.to_string())),
    }
}

/// Find a list in `folder` by case-insensitive name, or by 1-based position.
pub fn resolve_list(folder: &Folder, key: &str) -> Result<usize, ValidationError> {
    let key = key.trim();
    if let Some(i) = folder.find_list(key) {
        return Ok(i);
    }
    match key.parse::<usize>() {
        Ok(n) if n >= 1 && n <= folder.lists.len() => Ok(n - 1),
        _ => Err(ValidationError::ListNotFound(key.to_string())),
    }
}
