//! `roster`: team roster browser CLI.
//!
//! # Usage
//!
//! ```text
//! roster [--config <path>]                 (same as `roster shell`)
//! roster info [--json]
//! roster list [--category players|coaches|staff] [--json]
//! roster show <number> [--card | --json]
//! roster search <text> [--category ...] [--json]
//! roster sign-in --name <name> [--contact ...] [--affiliation ...] [--log <path>]
//! roster shell
//! ```

mod commands;
mod sample;
mod view;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use commands::{
    info::InfoArgs, list::ListArgs, search::SearchArgs, shell::ShellArgs, show::ShowArgs,
    sign_in::SignInArgs,
};
use roster_core::{config, RosterConfig, RosterError};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    version,
    about = "Browse and search a team roster",
    long_about = None,
)]
struct Cli {
    /// Config file to use instead of ~/.roster/config.yaml.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show team identity, player count and season stats.
    Info(InfoArgs),

    /// List one roster category.
    List(ListArgs),

    /// Show one player by jersey number.
    Show(ShowArgs),

    /// Search a roster category by name (players also by exact number).
    Search(SearchArgs),

    /// Record a visitor sign-in in the CSV log.
    SignIn(SignInArgs),

    /// Start the interactive command loop.
    Shell(ShellArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let team = sample::sample_team();
    tracing::debug!(team = team.name(), players = team.player_count(), "roster loaded");

    match cli.command.unwrap_or_else(|| Commands::Shell(ShellArgs::default())) {
        Commands::Info(args) => args.run(&team),
        Commands::List(args) => args.run(&team),
        Commands::Show(args) => args.run(&team),
        Commands::Search(args) => args.run(&team),
        Commands::SignIn(args) => args.run(&config),
        Commands::Shell(args) => args.run(&team, &config),
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<RosterConfig> {
    match path {
        Some(path) => config::load_from(path)
            .with_context(|| format!("failed to load config '{}'", path.display())),
        None => default_without_home(config::load())
            .context("failed to load ~/.roster/config.yaml"),
    }
}

/// With no home directory there is no config file to read, so defaults apply.
fn default_without_home(
    loaded: Result<RosterConfig, RosterError>,
) -> Result<RosterConfig, RosterError> {
    match loaded {
        Err(RosterError::HomeNotFound) => {
            tracing::warn!("no home directory found; using default config");
            Ok(RosterConfig::default())
        }
        other => other,
    }
}

/// Logs go to stderr so stdout stays clean for roster output.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
