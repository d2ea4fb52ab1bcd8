use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "qt", about = concat!("quest v", env!("CARGO_PKG_VERSION"), " - folders, lists and tasks"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different data directory (default: $QUEST_DIR, then the platform data dir)
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print all folders and their lists
    Tree,
    /// Folder management
    Folder(FolderCmd),
    /// List management
    List(ListCmd),
    /// Add a task to a list (or to a folder, naming the list with --subject)
    Add(AddArgs),
    /// Show the tasks of a list, with due status and counts
    Show(ShowArgs),
    /// Toggle a task's completion
    Toggle(TaskArgs),
    /// Delete a task
    Rm(RmArgs),
}

// ---------------------------------------------------------------------------
// Folder / list management
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct FolderCmd {
    #[command(subcommand)]
    pub action: FolderAction,
}

#[derive(Subcommand)]
pub enum FolderAction {
    /// Create a new folder
    Add {
        /// Folder name (must be unique, case-insensitive)
        name: String,
    },
    /// Delete a folder with all of its lists and tasks
    Rm {
        /// Folder name or 1-based position
        folder: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args)]
pub struct ListCmd {
    #[command(subcommand)]
    pub action: ListAction,
}

#[derive(Subcommand)]
pub enum ListAction {
    /// Delete a list with all of its tasks
    Rm {
        /// Folder name or 1-based position
        folder: String,
        /// List name or 1-based position
        list: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

// ---------------------------------------------------------------------------
// Task commands
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    pub text: String,
    /// Folder name or 1-based position
    #[arg(short, long)]
    pub folder: String,
    /// List name or 1-based position (omit to add at folder level)
    #[arg(short, long)]
    pub list: Option<String>,
    /// Subject; at folder level it names the list (reused if it exists)
    #[arg(short, long, default_value = "")]
    pub subject: String,
    /// Due date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,
    /// Link URL
    #[arg(long)]
    pub link: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Folder name or 1-based position
    pub folder: String,
    /// List name or 1-based position (omit to show the folder)
    pub list: Option<String>,
}

#[derive(Args)]
pub struct TaskArgs {
    /// Folder name or 1-based position
    pub folder: String,
    /// List name or 1-based position
    pub list: String,
    /// 1-based task position
    pub task: usize,
}

#[derive(Args)]
pub struct RmArgs {
    #[command(flatten)]
    pub target: TaskArgs,
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}
