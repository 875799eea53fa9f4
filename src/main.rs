mod cli;
mod config;
mod display;
mod error;
mod models;
mod query;
mod store;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// Environment variable holding the log filter
const LOG_ENV: &str = "STAMP_LOG";

#[derive(Parser)]
#[command(name = "stamp")]
#[command(about = "Bare-bones, file-based note-taking with timestamps", long_about = None)]
#[command(after_help = "Append a note with:  stamp - <note>  (or pipe text into `stamp -`)")]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Path to config file (defaults to $STAMP_CONFIG or ~/.timestampr/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show notes by position: foot (default), head, all, first, last, <n> or <n> to <m>
    Show {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        arg: Vec<String>,
    },
    /// Show notes by time or date, e.g. "08:30", "2025-07-30", "08:00 to 09:30"
    Times {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },
    /// Rewrite the active page's times as 12h or 24h
    Clock {
        /// 12h or 24h
        format: String,
    },
    /// Find notes containing a term (case-insensitive)
    Search {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        term: Vec<String>,
    },
    /// Show the timestamp of note #idx (1-based)
    Notetime { index: String },
    /// Show the first note stamped at HH:MM[:SS]
    Timenote { time: String },
    /// Show the active notebook and page
    Active,
    /// Choose an existing page or create a new one
    #[command(alias = "newpage")]
    Page { name: Option<String> },
    /// Choose an existing notebook folder or create a new one
    #[command(alias = "newnotebook")]
    Notebook { path: Option<String> },
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    // A leading "-" means "new note"; clap never sees it
    let result = if args.get(1).map(String::as_str) == Some("-") {
        append(&args[2..])
    } else {
        run(Cli::parse())
    };

    if let Err(e) = result {
        eprintln!("stamp failed: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn append(words: &[String]) -> Result<()> {
    let config_path = config::resolve_path(None)?;
    let mut config = config::load(&config_path)?;
    cli::note::append(&config_path, &mut config, words)
}

fn run(cli: Cli) -> Result<()> {
    let config_path = config::resolve_path(cli.config)?;
    let mut config = config::load(&config_path)?;
    tracing::debug!(config = %config_path.display(), "loaded configuration");

    match cli.command {
        Commands::Show { arg } => cli::show::run(&config_path, &mut config, &arg),
        Commands::Times { query } => cli::times::run(&config_path, &mut config, &query),
        Commands::Clock { format } => cli::clock::run(&config_path, &mut config, &format),
        Commands::Search { term } => cli::search::run(&config_path, &mut config, &term),
        Commands::Notetime { index } => cli::legacy::notetime(&config_path, &mut config, &index),
        Commands::Timenote { time } => cli::legacy::timenote(&config_path, &mut config, &time),
        Commands::Active => cli::page::active(&config),
        Commands::Page { name } => cli::page::page(&config_path, &mut config, name),
        Commands::Notebook { path } => cli::page::notebook(&config_path, &mut config, path),
    }
}
