mod cli;
mod clock;
mod config;
mod dates;
mod display;
mod error;
mod models;
mod store;

use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::clock::SystemClock;
use crate::error::Result;

#[derive(Parser)]
#[command(name = "days", version)]
#[command(about = "Track days since habits, life progress and a daily journal", long_about = None)]
struct Cli {
    /// Directory holding the tracker and journal files (defaults to ~/.days)
    #[arg(long, global = true, env = "DAYS_DIR")]
    data_dir: Option<PathBuf>,

    /// Path to config file (defaults to <data-dir>/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start tracking a habit
    Track {
        /// Habit name
        #[arg(allow_hyphen_values = true)]
        habit: String,
    },
    /// Show days since a habit was last reset
    Since {
        /// Habit name or 1-based position
        #[arg(allow_hyphen_values = true)]
        habit: String,
    },
    /// Reset the day count of a habit
    Reset {
        /// Habit name or 1-based position
        #[arg(allow_hyphen_values = true)]
        habit: String,
    },
    /// List all habits with their day counts
    List,
    /// Life span commands
    Life {
        #[command(subcommand)]
        command: LifeCommands,
    },
    /// Journal commands
    Journal {
        #[command(subcommand)]
        command: JournalCommands,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum LifeCommands {
    /// Set the life start date
    Start {
        /// Date in the form YYYY-MM-DD
        date: String,
    },
    /// Show how much of the estimated life span has passed
    End {
        /// Also print one cell per day
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Subcommand)]
enum JournalCommands {
    /// Write a journal entry (read from stdin)
    Write,
    /// Read journal entries
    Read {
        /// First day, YYYY-MM-DD (defaults to today)
        start: Option<String>,
        /// Last day, YYYY-MM-DD (defaults to start)
        end: Option<String>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Create a config.toml with default settings
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            if !e.use_stderr() {
                e.exit();
            }
            let _ = e.print();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let data_dir = config::data_dir(cli.data_dir)?;
    let config_path = cli
        .config
        .unwrap_or_else(|| data_dir.join(config::CONFIG_FILE));
    let config = config::load_or_default(&config_path)?;

    init_tracing(&config.log_level);
    tracing::debug!(data_dir = %data_dir.display(), "starting");

    let clock = SystemClock;
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    let mut status = io::stderr();

    let mut ctx = cli::Context {
        config,
        config_path,
        data_dir,
        clock: &clock,
        input: &mut input,
        out: &mut out,
        status: &mut status,
    };

    match cli.command {
        Commands::Track { habit } => cli::habit::track(&mut ctx, &habit),
        Commands::Since { habit } => cli::habit::since(&mut ctx, &habit),
        Commands::Reset { habit } => cli::habit::reset(&mut ctx, &habit),
        Commands::List => cli::habit::list(&mut ctx),
        Commands::Life { command } => match command {
            LifeCommands::Start { date } => cli::life::start(&mut ctx, &date),
            LifeCommands::End { verbose } => cli::life::end(&mut ctx, verbose),
        },
        Commands::Journal { command } => match command {
            JournalCommands::Write => cli::journal::write(&mut ctx),
            JournalCommands::Read { start, end } => {
                cli::journal::read(&mut ctx, start.as_deref(), end.as_deref())
            }
        },
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(&mut ctx, path),
        },
    }
}

/// Log to stderr; RUST_LOG wins over the configured level
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
