pub mod folder_ops;
pub mod session;
pub mod task_ops;

/// A command was rejected before touching any state
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("folder name cannot be empty")]
    EmptyFolderName,
    #[error("folder name already exists: {0}")]
    DuplicateFolder(String),
    #[error("task text cannot be empty")]
    EmptyTaskText,
    #[error("select a folder or list first")]
    NoSelection,
    #[error("enter a subject (it becomes the list name)")]
    EmptySubject,
    #[error("folder not found: {0}")]
    FolderNotFound(String),
    #[error("list not found: {0}")]
    ListNotFound(String),
    /// 1-based position that had no task
    #[error("no task at position {0}")]
    TaskNotFound(usize),
}
