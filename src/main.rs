use clap::Parser;
use quest::cli::commands::Cli;
use quest::cli::handlers;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        // No subcommand → launch TUI
        None => quest::tui::run(cli.data_dir.as_deref()),
        Some(_) => {
            quest::io::logging::init_stderr_logging();
            handlers::dispatch(cli)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
