use crate::view::{Counts, RowKind, TaskPanel, TaskRow, TreeRow};

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format the folder tree with 1-based positions (usable as CLI addresses)
pub fn format_tree(rows: &[TreeRow]) -> Vec<String> {
    rows.iter()
        .map(|row| {
            let pos = match row.list {
                Some(li) => li + 1,
                None => row.folder + 1,
            };
            let marker = if row.active { " *" } else { "" };
            format!("{}{}. {}{}", "    ".repeat(row.depth), pos, row.name, marker)
        })
        .collect()
}

/// Format a single task row: `3. [x] text  (due 2025-04-02, Overdue)  <link>`
pub fn format_task_row(row: &TaskRow) -> String {
    let check = if row.completed { 'x' } else { ' ' };
    let mut line = format!("{}. [{}] {}", row.index + 1, check, row.text);
    if let Some(date) = row.date {
        match row.status {
            Some(status) => line.push_str(&format!("  (due {}, {})", date, status.label())),
            None => line.push_str(&format!("  (due {})", date)),
        }
    }
    if let Some(ref link) = row.link {
        line.push_str(&format!("  <{}>", link));
    }
    line
}

pub fn format_counts(counts: &Counts) -> String {
    format!(
        "{} total, {} active, {} completed",
        counts.total, counts.active, counts.completed
    )
}

/// Format the task panel: header, task rows, counts
pub fn format_panel(panel: &TaskPanel, counts: &Counts) -> Vec<String> {
    let mut lines = Vec::new();
    match panel.kind {
        RowKind::Folder => {
            lines.push(format!("== {} (folder) ==", panel.title));
            lines.push("add a task with --subject to start a list here".to_string());
        }
        RowKind::List => {
            lines.push(format!("== {} ==", panel.title));
            if panel.tasks.is_empty() {
                lines.push("(no tasks)".to_string());
            }
            for row in &panel.tasks {
                lines.push(format_task_row(row));
            }
            lines.push(format_counts(counts));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::DueStatus;
    use chrono::NaiveDate;

    fn row(index: usize, text: &str) -> TaskRow {
        TaskRow {
            index,
            text: text.into(),
            completed: false,
            date: None,
            link: None,
            status: None,
        }
    }

    #[test]
    fn task_row_variants() {
        assert_eq!(format_task_row(&row(0, "Plain")), "1. [ ] Plain");

        let mut r = row(2, "Essay");
        r.completed = true;
        r.date = NaiveDate::from_ymd_opt(2025, 4, 2);
        r.status = Some(DueStatus::Overdue);
        r.link = Some("https://example.com".into());
        assert_eq!(
            format_task_row(&r),
            "3. [x] Essay  (due 2025-04-02, Overdue)  <https://example.com>"
        );

        let mut r = row(0, "Later");
        r.date = NaiveDate::from_ymd_opt(2030, 1, 1);
        assert_eq!(format_task_row(&r), "1. [ ] Later  (due 2030-01-01)");
    }

    #[test]
    fn tree_positions_and_marker() {
        let rows = vec![
            TreeRow {
                kind: RowKind::Folder,
                name: "School".into(),
                depth: 0,
                active: false,
                folder: 0,
                list: None,
            },
            TreeRow {
                kind: RowKind::List,
                name: "Math".into(),
                depth: 1,
                active: true,
                folder: 0,
                list: Some(0),
            },
        ];
        insta::assert_snapshot!(format_tree(&rows).join("\n"), @r"
        1. School
            1. Math *
        ");
    }

    #[test]
    fn list_panel_with_counts() {
        let panel = TaskPanel {
            kind: RowKind::List,
            title: "Math".into(),
            show_subject: false,
            tasks: vec![row(0, "Worksheet")],
        };
        let counts = Counts::of(&panel.tasks);
        assert_eq!(
            format_panel(&panel, &counts),
            vec![
                "== Math ==".to_string(),
                "1. [ ] Worksheet".to_string(),
                "1 total, 1 active, 0 completed".to_string(),
            ]
        );
    }
}
