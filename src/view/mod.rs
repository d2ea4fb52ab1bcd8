//! Pure projection of folders + selection into what the UI shows.
//!
//! Nothing here holds state: every frame (TUI) or command (CLI) calls
//! [`project`] again on the current data.

pub mod due;
pub mod panel;
pub mod tree;

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::folder::Folder;
use crate::model::selection::Selection;

pub use due::{DueStatus, due_status};
pub use panel::{Counts, TaskPanel, TaskRow};
pub use tree::{RowKind, TreeRow};

/// Everything the UI renders for one state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub tree: Vec<TreeRow>,
    /// `None` when nothing (or a stale index) is selected
    pub panel: Option<TaskPanel>,
    pub counts: Counts,
}

/// Build the view for `folders` under `selection`, with due statuses relative to `today`.
pub fn project(folders: &[Folder], selection: Selection, today: NaiveDate) -> View {
    let focus = selection.resolve(folders);
    let panel = panel::build_panel(folders, focus, today);
    let counts = panel
        .as_ref()
        .map(|p| Counts::of(&p.tasks))
        .unwrap_or_default();
    View {
        tree: tree::build_tree(folders, focus),
        panel,
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::folder::List;
    use crate::model::task::Task;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 2).unwrap()
    }

    fn sample() -> Vec<Folder> {
        let mut school = Folder::new("School".into());
        let mut math = List::new("Math".into());
        math.tasks.push(Task::new(
            "Worksheet".into(),
            Some(today()),
            "Math".into(),
            None,
        ));
        let mut done = Task::new("Quiz".into(), None, "Math".into(), None);
        done.completed = true;
        math.tasks.push(done);
        school.lists.push(math);
        vec![school]
    }

    #[test]
    fn nothing_selected_has_tree_but_no_panel() {
        let view = project(&sample(), Selection::none(), today());
        assert_eq!(view.tree.len(), 2);
        assert!(view.tree.iter().all(|r| !r.active));
        assert!(view.panel.is_none());
        assert_eq!(view.counts, Counts::default());
    }

    #[test]
    fn list_selected_shows_tasks_and_counts() {
        let view = project(&sample(), Selection::list(0, 0), today());
        let panel = view.panel.unwrap();
        assert_eq!(panel.title, "Math");
        assert_eq!(panel.tasks.len(), 2);
        assert_eq!(panel.tasks[0].status, Some(DueStatus::DueToday));
        assert_eq!(
            view.counts,
            Counts {
                total: 2,
                active: 1,
                completed: 1
            }
        );
    }

    #[test]
    fn stale_selection_renders_as_nothing() {
        let view = project(&sample(), Selection::list(0, 3), today());
        assert!(view.panel.is_none());
        assert!(view.tree.iter().all(|r| !r.active));
    }
}
