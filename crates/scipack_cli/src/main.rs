//! SCIPACK CLI - Command Line Access to the Random Number Generators
//!
//! # Commands
//!
//! - `scipack next --count <n>` - Raw 64-bit outputs
//! - `scipack rand --count <n> --min <a> --max <b>` - Unbiased integers in `[a, b]`
//! - `scipack bias --count <n> --numerator <k> --exponent <m>` - Biased words
//! - `scipack unid --count <n>` - Reals in `[0, 1)`
//! - `scipack binomial --count <n> --trials <t> --probability <p>` - Binomial counts
//! - `scipack pi --samples <n> --streams <t>` - Parallel Monte Carlo estimate of π
//! - `scipack check` - Known-answer and entropy self-check
//!
//! # Configuration
//!
//! Global flags override `SCIPACK_*` environment variables, which override
//! the TOML file given by `--config`. A seed of `0` requests hardware seeding.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::sample::{self, ProbabilityArg};
use config::{build_config, CliArgs as ConfigCliArgs};

/// SCIPACK random number generator CLI
#[derive(Parser, Debug)]
#[command(name = "scipack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Generator kind (pcg64i, xorshift64)
    #[arg(short, long, global = true)]
    generator: Option<String>,

    /// Seed; 0 requests hardware seeding
    #[arg(short, long, global = true)]
    seed: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Raw 64-bit outputs
    Next {
        /// Number of values
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Unbiased integers in an inclusive range
    Rand {
        /// Number of values
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Inclusive lower bound
        #[arg(long, default_value = "0")]
        min: u64,

        /// Inclusive upper bound
        #[arg(long)]
        max: u64,
    },

    /// Words of 64 Bernoulli trials at probability numerator / 2^exponent
    Bias {
        /// Number of words
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Probability numerator
        #[arg(long, conflicts_with = "probability")]
        numerator: Option<u64>,

        /// Real probability, rounded to the exponent's resolution
        #[arg(short, long)]
        probability: Option<f64>,

        /// Power of two in the denominator (1-64)
        #[arg(short, long, default_value = "8")]
        exponent: u32,
    },

    /// Uniform reals in [0, 1)
    Unid {
        /// Number of values
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Successes in repeated Bernoulli trials
    Binomial {
        /// Number of values
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Trials per value
        #[arg(short, long)]
        trials: u64,

        /// Probability numerator
        #[arg(long, conflicts_with = "probability")]
        numerator: Option<u64>,

        /// Real probability, rounded to the exponent's resolution
        #[arg(short, long)]
        probability: Option<f64>,

        /// Power of two in the denominator (1-64)
        #[arg(short, long, default_value = "8")]
        exponent: u32,
    },

    /// Parallel Monte Carlo estimate of pi
    Pi {
        /// Total number of points
        #[arg(long, default_value = "10000000")]
        samples: u64,

        /// Number of independent streams
        #[arg(long, default_value = "4")]
        streams: usize,
    },

    /// Check generators and the entropy source
    Check,
}

impl From<&Cli> for ConfigCliArgs {
    fn from(cli: &Cli) -> Self {
        ConfigCliArgs {
            config_file: cli.config.clone(),
            generator: cli.generator.clone(),
            seed: cli.seed.clone(),
            log_level: cli.log_level.clone(),
            format: cli.format.clone(),
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
    let config = build_config(&ConfigCliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    debug!(
        generator = %config.generator,
        seed = config.seed,
        format = %config.format,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Next { count } => sample::print(&config, &sample::next(&config, count)?),
        Commands::Rand { count, min, max } => {
            sample::print(&config, &sample::rand(&config, count, min, max)?)
        }
        Commands::Bias {
            count,
            numerator,
            probability,
            exponent,
        } => {
            let p = ProbabilityArg::from_options(numerator, probability, exponent)?;
            sample::print(&config, &sample::bias(&config, count, p)?)
        }
        Commands::Unid { count } => sample::print(&config, &sample::unid(&config, count)?),
        Commands::Binomial {
            count,
            trials,
            numerator,
            probability,
            exponent,
        } => {
            let p = ProbabilityArg::from_options(numerator, probability, exponent)?;
            sample::print(&config, &sample::binomial(&config, count, trials, p)?)
        }
        Commands::Pi { samples, streams } => commands::pi::run(&config, samples, streams),
        Commands::Check => commands::check::run(),
    }
}
