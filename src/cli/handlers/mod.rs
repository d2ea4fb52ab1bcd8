mod prompt;
pub use prompt::confirm;

use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::store::Store;
use crate::model::selection::ListRef;
use crate::model::task::parse_date;
use crate::ops::ValidationError;
use crate::ops::folder_ops::{resolve_folder, resolve_list};
use crate::ops::session::Session;
use crate::ops::task_ops::TaskDraft;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CmdResult {
    let json = cli.json;
    let mut session = open_session(cli.data_dir.as_deref())?;

    match cli.command {
        None => Err("no subcommand (run `qt` without arguments for the TUI)".into()),
        Some(cmd) => match cmd {
            Commands::Tree => cmd_tree(&session, json),
            Commands::Folder(args) => match args.action {
                FolderAction::Add { name } => cmd_folder_add(&mut session, &name, json),
                FolderAction::Rm { folder, yes } => cmd_folder_rm(&mut session, &folder, yes, json),
            },
            Commands::List(args) => match args.action {
                ListAction::Rm { folder, list, yes } => {
                    cmd_list_rm(&mut session, &folder, &list, yes, json)
                }
            },
            Commands::Add(args) => cmd_add(&mut session, args, json),
            Commands::Show(args) => cmd_show(&mut session, args, json),
            Commands::Toggle(args) => cmd_toggle(&mut session, args, json),
            Commands::Rm(args) => cmd_rm(&mut session, args, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve the data directory and load the session from it.
pub fn open_session(data_dir: Option<&Path>) -> Result<Session, Box<dyn std::error::Error>> {
    let dir = config_io::resolve_data_dir(data_dir)?;
    let store = Store::open(&dir)?;
    Ok(Session::load(store))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Print the re-rendered view as JSON (mutations and reads alike).
fn print_view_json(session: &Session) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(&session.view(today()))?);
    Ok(())
}

/// Resolve `folder` / `list` addresses into a list reference.
fn resolve_list_ref(session: &Session, folder: &str, list: &str) -> Result<ListRef, Box<dyn std::error::Error>> {
    let fi = resolve_folder(session.folders(), folder)?;
    let li = resolve_list(&session.folders()[fi], list)?;
    Ok(ListRef { folder: fi, list: li })
}

/// 1-based CLI position to list index
fn task_index(position: usize) -> Result<usize, ValidationError> {
    position
        .checked_sub(1)
        .ok_or(ValidationError::TaskNotFound(position))
}

fn cancelled() -> CmdResult {
    println!("cancelled");
    Ok(())
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_tree(session: &Session, json: bool) -> CmdResult {
    if json {
        return print_view_json(session);
    }
    let view = session.view(today());
    if view.tree.is_empty() {
        println!("no folders yet (create one with `qt folder add <name>`)");
        return Ok(());
    }
    for line in format_tree(&view.tree) {
        println!("{}", line);
    }
    Ok(())
}

fn cmd_show(session: &mut Session, args: ShowArgs, json: bool) -> CmdResult {
    let fi = resolve_folder(session.folders(), &args.folder)?;
    let li = match args.list {
        Some(ref list) => Some(resolve_list(&session.folders()[fi], list)?),
        None => None,
    };
    session.select(fi, li)?;

    if json {
        return print_view_json(session);
    }
    let view = session.view(today());
    if let Some(ref panel) = view.panel {
        for line in format_panel(panel, &view.counts) {
            println!("{}", line);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Folder / list commands
// ---------------------------------------------------------------------------

fn cmd_folder_add(session: &mut Session, name: &str, json: bool) -> CmdResult {
    let index = session.create_folder(name)?;
    if json {
        return print_view_json(session);
    }
    println!("created folder '{}'", session.folders()[index].name);
    Ok(())
}

fn cmd_folder_rm(session: &mut Session, folder: &str, yes: bool, json: bool) -> CmdResult {
    let fi = resolve_folder(session.folders(), folder)?;
    let name = session.folders()[fi].name.clone();
    if !confirm(&format!("Delete folder '{}'?", name), yes)? {
        return cancelled();
    }
    session.delete_folder(fi)?;
    if json {
        return print_view_json(session);
    }
    println!("deleted folder '{}'", name);
    Ok(())
}

fn cmd_list_rm(session: &mut Session, folder: &str, list: &str, yes: bool, json: bool) -> CmdResult {
    let r = resolve_list_ref(session, folder, list)?;
    let name = session.folders()[r.folder].lists[r.list].name.clone();
    if !confirm(&format!("Delete list '{}'?", name), yes)? {
        return cancelled();
    }
    session.delete_list(r.folder, r.list)?;
    if json {
        return print_view_json(session);
    }
    println!("deleted list '{}'", name);
    Ok(())
}

// ---------------------------------------------------------------------------
// Task commands
// ---------------------------------------------------------------------------

fn cmd_add(session: &mut Session, args: AddArgs, json: bool) -> CmdResult {
    let fi = resolve_folder(session.folders(), &args.folder)?;
    let li = match args.list {
        Some(ref list) => Some(resolve_list(&session.folders()[fi], list)?),
        None => None,
    };
    let date = match args.date {
        Some(ref d) => parse_date(d)
            .map_err(|_| format!("invalid date '{}': expected YYYY-MM-DD", d))?,
        None => None,
    };

    session.select(fi, li)?;
    let r = session.add_task(
        TaskDraft::new(args.text)
            .subject(args.subject)
            .date(date)
            .link(args.link),
    )?;

    if json {
        return print_view_json(session);
    }
    let list = &session.folders()[r.folder].lists[r.list];
    println!("added task {} to '{}'", list.tasks.len(), list.name);
    Ok(())
}

fn cmd_toggle(session: &mut Session, args: TaskArgs, json: bool) -> CmdResult {
    let r = resolve_list_ref(session, &args.folder, &args.list)?;
    session.select(r.folder, Some(r.list))?;
    let index = task_index(args.task)?;
    let completed = session.toggle_task(r, index)?;

    if json {
        return print_view_json(session);
    }
    let task = &session.folders()[r.folder].lists[r.list].tasks[index];
    let check = if completed { 'x' } else { ' ' };
    println!("[{}] {}", check, task.text);
    Ok(())
}

fn cmd_rm(session: &mut Session, args: RmArgs, json: bool) -> CmdResult {
    let target = args.target;
    let r = resolve_list_ref(session, &target.folder, &target.list)?;
    let index = task_index(target.task)?;
    let text = session.folders()[r.folder].lists[r.list]
        .tasks
        .get(index)
        .map(|t| t.text.clone())
        .ok_or_else(|| format!("no task at position {}", target.task))?;
    if !confirm(&format!("Delete task '{}'?", text), args.yes)? {
        return cancelled();
    }
    session.select(r.folder, Some(r.list))?;
    session.delete_task(r, index)?;
    if json {
        return print_view_json(session);
    }
    println!("deleted task '{}'", text);
    Ok(())
}
