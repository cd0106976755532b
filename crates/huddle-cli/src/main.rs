//! `huddle` CLI: rank shared meeting windows from weekly availability.
//!
//! ## Usage
//!
//! ```sh
//! # Participants JSON on stdin, ranked windows on stdout
//! cat room.json | huddle options
//!
//! # From file to file, as JSON, best three only
//! huddle options -i room.json -o windows.json --format json --limit 3
//!
//! # Drop unreadable labels instead of failing
//! huddle options -i room.json --skip-invalid
//!
//! # List the 24 slot labels of the grid
//! huddle labels
//!
//! # Write a default .huddle.toml
//! huddle init-config
//! ```

mod config;
mod render;

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use huddle_engine::{parse_participants, summarize, LabelPolicy, TimeSlot};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::{Config, OutputFormat, DEFAULT_CONFIG_FILE};

#[derive(Parser)]
#[command(
    name = "huddle",
    version,
    about = "Find the weekly time windows most of the room can meet"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (defaults to ./.huddle.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank meeting windows from a JSON array of participants
    Options {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format (overrides the config file)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Show at most this many windows
        #[arg(long)]
        limit: Option<usize>,
        /// Drop unreadable day names and time labels instead of failing
        #[arg(long)]
        skip_invalid: bool,
    },
    /// Print the slot labels of one grid day, in order
    Labels,
    /// Write a default config file
    InitConfig {
        /// Where to write it
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Options {
            input,
            output,
            format,
            limit,
            skip_invalid,
        } => {
            let config = Config::resolve(cli.config.as_deref())?;
            debug!(?config, "resolved config");

            let policy = if skip_invalid || config.input.skip_invalid {
                LabelPolicy::Skip
            } else {
                LabelPolicy::Strict
            };

            let json = read_input(input.as_deref())?;
            let participants = parse_participants(&json, policy)
                .context("Failed to read participant availability")?;
            info!(participants = participants.len(), "loaded participants");

            let mut report = summarize(&participants);
            if let Some(limit) = limit.or(config.output.limit) {
                report.truncate(limit);
            }
            info!(windows = report.windows.len(), "ranked meeting windows");

            let rendered = match format.unwrap_or(config.output.format) {
                OutputFormat::Text => render::text(&report),
                OutputFormat::Json => render::json(&report)?,
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Labels => {
            for slot in TimeSlot::all() {
                println!("{}", slot);
            }
        }
        Commands::InitConfig { path } => init_config(&path)?,
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins over `-v` when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!(
            "{} already exists. Remove it first or edit it manually.",
            path.display()
        );
    }

    let content = Config::default_toml()?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
