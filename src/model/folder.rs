use serde::{Deserialize, Serialize};

use super::task::Task;

/// A top-level named container of lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    #[serde(default)]
    pub lists: Vec<List>,
}

impl Folder {
    pub fn new(name: String) -> Self {
        Folder {
            name,
            lists: Vec::new(),
        }
    }

    /// Position of the list whose name matches `name` case-insensitively
    pub fn find_list(&self, name: &str) -> Option<usize> {
        self.lists.iter().position(|l| names_match(&l.name, name))
    }
}

/// A named container of tasks, owned by exactly one folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl List {
    pub fn new(name: String) -> Self {
        List {
            name,
            tasks: Vec::new(),
        }
    }
}

/// Case-insensitive name comparison used for folder and list uniqueness
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Position of the folder whose name matches `name` case-insensitively
pub fn find_folder(folders: &[Folder], name: &str) -> Option<usize> {
    folders.iter().position(|f| names_match(&f.name, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_ignores_case() {
        assert!(names_match("Work", "work"));
        assert!(names_match("ÉCOLE", "école"));
        assert!(!names_match("Work", "Works"));
    }

    #[test]
    fn find_list_by_name() {
        let mut folder = Folder::new("School".into());
        folder.lists.push(List::new("Math".into()));
        folder.lists.push(List::new("History".into()));
        assert_eq!(folder.find_list("history"), Some(1));
        assert_eq!(folder.find_list("Art"), None);
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let folder: Folder = serde_json::from_str(r#"{"name":"Home"}"#).unwrap();
        assert!(folder.lists.is_empty());
    }
}
