//! `dialogue` - authoring tool for branching dialogue graphs
//!
//! - `validate`: list issues; exit 1 if any of them blocks loading
//! - `coverage`: translation coverage per locale and unreachable nodes
//! - `play`: walk a graph in the terminal
//! - `convert`: rewrite a graph document between JSON and TOML

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use config::CliConfig;
use dialogue_engine::LoadPolicy;
use error::CliResult;

#[derive(Parser)]
#[command(name = "dialogue")]
#[command(about = "Validate, inspect and play branching dialogue graphs", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "DIALOGUE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a graph and print one line per issue
    Validate {
        graph: PathBuf,

        /// Treat missing default-locale text as fatal
        #[arg(long)]
        strict: bool,
    },

    /// Report translation coverage and unreachable nodes
    Coverage { graph: PathBuf },

    /// Play through a graph, reading choices from stdin
    Play {
        graph: PathBuf,

        /// Display locale (defaults to the config, then the graph default)
        #[arg(short, long)]
        locale: Option<String>,

        #[arg(long)]
        strict: bool,
    },

    /// Convert a graph document; formats follow the file extensions
    Convert { input: PathBuf, output: PathBuf },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `false` when the command completed but the graph did not pass.
fn run(cli: Cli) -> CliResult<bool> {
    let config = CliConfig::load(cli.config.as_deref())?;
    let policy = |strict: bool| {
        if strict {
            LoadPolicy::Strict
        } else {
            config.validation.policy
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Validate { graph, strict } => {
            commands::validate::execute(&graph, policy(strict), &mut out)
        }
        Commands::Coverage { graph } => {
            commands::coverage::execute(&graph, &mut out)?;
            Ok(true)
        }
        Commands::Play {
            graph,
            locale,
            strict,
        } => {
            let mut session = config.session.clone();
            if let Some(locale) = locale {
                session.locale = Some(locale.into());
            }
            let stdin = std::io::stdin();
            commands::play::execute(&graph, policy(strict), session, stdin.lock(), &mut out)?;
            Ok(true)
        }
        Commands::Convert { input, output } => {
            commands::convert::execute(&input, &output)?;
            Ok(true)
        }
    }
}
