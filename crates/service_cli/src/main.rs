//! Lehmer CLI - Command Line Entry Point for the Generator Labs
//!
//! # Commands
//!
//! - `lehmer lab1` - Analyse the reference Lehmer generator
//! - `lehmer lab2` - Sample the derived distributions
//! - `lehmer generate --seed <r0> --multiplier <a> --modulus <m>` - Analyse any generator
//!
//! # Configuration
//!
//! Settings come from, in decreasing priority: command line flags,
//! `LEHMER_*` environment variables, a TOML file given with `--config`,
//! and built-in defaults. `RUST_LOG` overrides the configured log level.
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate wires configuration,
//! the sampling and analysis crates, and console or JSON output together.

use clap::{Parser, Subcommand};
use lehmer_core::GeneratorState;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod report;

pub use error::{CliError, Result};

use config::{build_config, CliArgs};
use report::OutputFormat;

/// Lehmer generator labs
#[derive(Parser)]
#[command(name = "lehmer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Seed for stream parameter draws (random when omitted)
    #[arg(long, global = true)]
    rng_seed: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse the reference Lehmer generator (r0 = 15, a = 1643, m = 12031278)
    Lab1 {
        /// Sequence length
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Sample uniform, normal, exponential, gamma, triangular and Simpson distributions
    Lab2 {
        /// Values per distribution
        #[arg(short = 'n', long)]
        samples: Option<usize>,
    },

    /// Analyse a Lehmer sequence with explicit parameters
    Generate {
        /// Initial value r0
        #[arg(long)]
        seed: u64,

        /// Multiplier a
        #[arg(long)]
        multiplier: u64,

        /// Modulus m
        #[arg(long)]
        modulus: u64,

        /// Sequence length
        #[arg(short = 'n', long, default_value = "1000000")]
        count: usize,
    },
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        let (count, samples) = match cli.command {
            Commands::Lab1 { count } => (count, None),
            Commands::Lab2 { samples } => (None, samples),
            Commands::Generate { .. } => (None, None),
        };
        CliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            seed: cli.rng_seed,
            samples,
            count,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Lab1 { .. } => commands::lab1::run(&config, cli.format),
        Commands::Lab2 { .. } => commands::lab2::run(&config, cli.format),
        Commands::Generate {
            seed,
            multiplier,
            modulus,
            count,
        } => {
            let state = GeneratorState::new(seed, multiplier, modulus)?;
            commands::generate::run(&config, state, count, cli.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_lab1_count_override() {
        let cli = Cli::parse_from(["lehmer", "lab1", "-n", "5000", "--log-level", "debug"]);
        let args = CliArgs::from(&cli);
        assert_eq!(args.count, Some(5_000));
        assert_eq!(args.samples, None);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn test_lab2_global_flags() {
        let cli = Cli::parse_from([
            "lehmer",
            "lab2",
            "--samples",
            "10",
            "--rng-seed",
            "3",
            "-f",
            "json",
        ]);
        let args = CliArgs::from(&cli);
        assert_eq!(args.samples, Some(10));
        assert_eq!(args.seed, Some(3));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_generate_requires_parameters() {
        assert!(Cli::try_parse_from(["lehmer", "generate", "--seed", "1"]).is_err());

        let cli = Cli::parse_from([
            "lehmer",
            "generate",
            "--seed",
            "1",
            "--multiplier",
            "3",
            "--modulus",
            "7",
        ]);
        match cli.command {
            Commands::Generate { count, modulus, .. } => {
                assert_eq!(count, 1_000_000);
                assert_eq!(modulus, 7);
            }
            _ => panic!("expected generate"),
        }
    }
}
