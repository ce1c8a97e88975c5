use clap::{Parser, Subcommand};
use eyre::Result;
use std::io;
use std::path::PathBuf;
use taskboard::filter::{PriorityFilter, StatusFilter};
use taskboard::{Board, Config, Shell, TaskStore, render};
use tracing::Level;

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "Taskboard - create, edit, filter and delete tasks in an interactive session")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to a YAML config file (default: <config dir>/taskboard/taskboard.yml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with an empty board instead of the example tasks
    #[arg(long)]
    no_seed: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Shell,

    /// Print the board once, optionally filtered
    List {
        /// all, pending, in-progress or completed
        #[arg(long, default_value = "all")]
        status: String,

        /// all, low, medium or high
        #[arg(long, default_value = "all")]
        priority: String,

        /// Case-insensitive text to match in title or description
        #[arg(long, default_value = "")]
        search: String,

        /// Print JSON instead of cards
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing; logs go to stderr so they never mix with the board
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref())?;

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let tasks = if config.seed_examples && !cli.no_seed {
        TaskStore::seeded()
    } else {
        TaskStore::new()
    };
    let mut board = Board::new(tasks);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = io::stdin();
            let mut shell = Shell::new(board, config.defaults, stdin.lock(), io::stdout());
            shell.run()?;
        }
        Commands::List {
            status,
            priority,
            search,
            json,
        } => {
            board.filter.set_status(status.parse::<StatusFilter>()?);
            board.filter.set_priority(priority.parse::<PriorityFilter>()?);
            board.filter.set_search_term(search);

            let visible = board.visible();
            if json {
                println!("{}", render::tasks_json(&visible)?);
            } else {
                render::write_dashboard(&mut io::stdout().lock(), &visible)?;
            }
        }
    }

    Ok(())
}
