use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

use quest::io::store::{FOLDERS_KEY, Store};
use quest::model::Folder;
use quest::ops::session::Session;
use quest::ops::task_ops::TaskDraft;
use tempfile::TempDir;

fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Could not read fixture {}: {}", name, e))
}

/// Store a fixture under `folders.json` in a fresh directory.
fn store_with(content: &str) -> (TempDir, Store) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("folders.json"), content).unwrap();
    let store = Store::open(dir.path()).unwrap();
    (dir, store)
}

#[test]
fn stored_document_round_trips_byte_for_byte() {
    let source = fixture("folders.json");
    let (dir, store) = store_with(&source);

    let folders: Vec<Folder> = store.load(FOLDERS_KEY);
    assert_eq!(folders.len(), 2);
    store.save(FOLDERS_KEY, &folders).unwrap();

    let output = fs::read_to_string(dir.path().join("folders.json")).unwrap();
    assert_eq!(output, source);
}

#[test]
fn compact_browser_layout_loads() {
    // Written by the browser version: compact, nulls for missing fields
    let (_dir, store) = store_with(
        r#"[{"name":"Work","lists":[{"name":"Reports","tasks":[{"text":"Q3","date":null,"subject":"Reports","link":null,"completed":false}]}]}]"#,
    );
    let folders: Vec<Folder> = store.load(FOLDERS_KEY);
    let task = &folders[0].lists[0].tasks[0];
    assert_eq!(task.text, "Q3");
    assert_eq!(task.date, None);
    assert_eq!(task.link, None);
}

#[test]
fn session_edits_keep_the_layout() {
    let (dir, store) = store_with(&fixture("folders.json"));
    let mut session = Session::load(store);
    session.select(1, None).unwrap();
    session
        .add_task(TaskDraft::new("Buy milk").subject("Groceries"))
        .unwrap();

    let reloaded: Vec<Folder> = Store::open(dir.path()).unwrap().load(FOLDERS_KEY);
    assert_eq!(reloaded[0], session.folders()[0]);
    assert_eq!(reloaded[1].lists[0].name, "Groceries");
    assert_eq!(reloaded[1].lists[0].tasks[0].subject, "Groceries");

    let text = fs::read_to_string(dir.path().join("folders.json")).unwrap();
    assert!(text.contains(r#""date": """#));
}
