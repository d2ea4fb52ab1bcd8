use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::io::recovery::{self, RecoveryCategory, RecoveryEntry};

/// Key holding the whole folder collection (lists and tasks nest inside)
pub const FOLDERS_KEY: &str = "folders";

/// Legacy flat list collection. Read at start, never written.
pub const LEGACY_LISTS_KEY: &str = "globalLists";

/// Error type for store writes
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize {key}: {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// String-keyed JSON documents, one file per key in a data directory.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open (creating if needed) the store rooted at `dir`.
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(dir).map_err(|e| StoreError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        Ok(Store {
            dir: dir.to_path_buf(),
        })
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read and parse the document under `key`.
    ///
    /// An absent, unreadable or unparsable document yields `T::default()`.
    /// Unparsable content is copied to the recovery log first so the next
    /// save does not lose it silently.
    pub fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let path = self.path_for(key);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(key, "no stored document, starting empty");
                return T::default();
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "could not read stored document, starting empty");
                return T::default();
            }
        };

        // `null` is a valid stored value and means "nothing yet"
        match serde_json::from_str::<Option<T>>(&text) {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(key, error = %e, "stored document is corrupt, starting empty");
                recovery::log_recovery(
                    &self.dir,
                    RecoveryEntry::now(RecoveryCategory::Corrupt, "unreadable document replaced by empty default")
                        .field("Key", key)
                        .field("Error", e.to_string())
                        .body(text),
                );
                T::default()
            }
        }
    }

    /// Serialize `value` and write it under `key`, synchronously and atomically.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(value).map_err(|e| StoreError::Serialize {
            key: key.to_string(),
            source: e,
        })?;
        let path = self.path_for(key);
        if let Err(e) = recovery::atomic_write(&path, content.as_bytes()) {
            recovery::log_recovery(
                &self.dir,
                RecoveryEntry::now(RecoveryCategory::Write, "document write failed")
                    .field("Key", key)
                    .field("Error", e.to_string())
                    .body(content),
            );
            return Err(StoreError::Write { path, source: e });
        }
        tracing::debug!(key, bytes = content.len(), "saved document");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Folder, List, Task};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample() -> Vec<Folder> {
        let mut school = Folder::new("School".into());
        let mut math = List::new("Math".into());
        math.tasks.push(Task::new(
            "Worksheet 3".into(),
            chrono::NaiveDate::from_ymd_opt(2025, 2, 1),
            "Math".into(),
            Some("https://example.com/ws3".into()),
        ));
        let mut done = Task::new("Read ch. 4".into(), None, "Math".into(), None);
        done.completed = true;
        math.tasks.push(done);
        school.lists.push(math);
        school.lists.push(List::new("Art".into()));
        vec![school, Folder::new("Home".into())]
    }

    #[test]
    fn save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path()).unwrap();
        let folders = sample();
        store.save(FOLDERS_KEY, &folders).unwrap();
        let loaded: Vec<Folder> = store.load(FOLDERS_KEY);
        assert_eq!(loaded, folders);
    }

    #[test]
    fn missing_document_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path()).unwrap();
        let loaded: Vec<Folder> = store.load(FOLDERS_KEY);
        assert!(loaded.is_empty());
        assert!(!recovery::recovery_log_path(dir.path()).exists());
    }

    #[test]
    fn null_document_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path()).unwrap();
        fs::write(store.path_for(FOLDERS_KEY), "null").unwrap();
        let loaded: Vec<Folder> = store.load(FOLDERS_KEY);
        assert!(loaded.is_empty());
    }

    #[test]
    fn corrupt_document_loads_empty_and_is_preserved_in_recovery_log() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path()).unwrap();
        fs::write(store.path_for(FOLDERS_KEY), "[{\"name\": ").unwrap();
        let loaded: Vec<Folder> = store.load(FOLDERS_KEY);
        assert!(loaded.is_empty());
        let log = fs::read_to_string(recovery::recovery_log_path(dir.path())).unwrap();
        assert!(log.contains("Key: folders"));
        assert!(log.contains("[{\"name\": "));
    }

    #[test]
    fn reads_browser_export() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path()).unwrap();
        fs::write(
            store.path_for(FOLDERS_KEY),
            r#"[{"name":"Work","lists":[{"name":"Reports","tasks":[{"text":"Q3","date":"","subject":"Reports","link":"","completed":false}]}]}]"#,
        )
        .unwrap();
        let loaded: Vec<Folder> = store.load(FOLDERS_KEY);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].lists[0].tasks[0].text, "Q3");
        assert_eq!(loaded[0].lists[0].tasks[0].date, None);
    }

    #[test]
    fn one_bad_date_keeps_the_rest_of_the_document() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path()).unwrap();
        fs::write(
            store.path_for(FOLDERS_KEY),
            r#"[{"name":"Work","lists":[{"name":"Reports","tasks":[{"text":"Q3","date":"2025-13-40","subject":"Reports","link":"","completed":false},{"text":"Q4","date":"2025-10-01","subject":"Reports","link":"","completed":false}]}]},{"name":"Home","lists":[]}]"#,
        )
        .unwrap();
        let loaded: Vec<Folder> = store.load(FOLDERS_KEY);
        assert_eq!(loaded.len(), 2);
        let tasks = &loaded[0].lists[0].tasks;
        assert_eq!(tasks[0].text, "Q3");
        assert_eq!(tasks[0].date, None);
        assert_eq!(tasks[1].date, chrono::NaiveDate::from_ymd_opt(2025, 10, 1));
        assert!(!recovery::recovery_log_path(dir.path()).exists());
    }

    #[test]
    fn open_creates_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b");
        let store = Store::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(store.path_for("folders"), nested.join("folders.json"));
    }
}
