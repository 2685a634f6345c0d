//! Randgen CLI - Command Line Operations for the Pseudo-Random Laboratory
//!
//! This is the operational entry point for the randgen workspace.
//!
//! # Commands
//!
//! - `randgen generate` - Produce a sequence with a middle-digit recurrence
//! - `randgen test` - Run goodness-of-fit tests over a ratio sequence
//! - `randgen map` - Map a ratio sequence through a probability distribution
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate orchestrates the
//! engine crates (`randgen_core`, `randgen_stats`, `randgen_dist`) behind a
//! unified command-line interface. All engine state lives in memory for the
//! duration of one command; sequences move between commands as CSV files.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use randgen_core::generators::DEFAULT_MULTIPLIER;
use randgen_stats::DEFAULT_INTERVALS;

mod commands;
mod error;

pub use error::{CliError, Result};

/// Randgen pseudo-random number laboratory CLI
#[derive(Parser)]
#[command(name = "randgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Produce a sequence with a middle-digit recurrence
    Generate {
        /// Algorithm (squares, products, constant)
        #[arg(short, long)]
        algorithm: String,

        /// Seed with at least 4 decimal digits (the X seed for products)
        #[arg(short, long)]
        seed: u64,

        /// Y seed for the products algorithm
        #[arg(long)]
        seed_y: Option<u64>,

        /// Multiplier constant for the constant algorithm
        #[arg(long, default_value_t = DEFAULT_MULTIPLIER)]
        constant: u64,

        /// Number of records to generate
        #[arg(short = 'n', long)]
        count: usize,

        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Run goodness-of-fit tests over a ratio sequence
    Test {
        /// CSV file with a ratio column (e.g. from `randgen generate`)
        #[arg(short, long)]
        input: String,

        /// Test to run (mean, variance, uniformity, all)
        #[arg(short = 't', long, default_value = "all")]
        kind: String,

        /// Significance level alpha, strictly between 0 and 1
        #[arg(short, long, default_value_t = 0.05)]
        alpha: f64,

        /// Interval count for the uniformity test
        #[arg(short = 'k', long, default_value_t = DEFAULT_INTERVALS)]
        intervals: usize,
    },

    /// Map a ratio sequence through a probability distribution
    Map {
        /// CSV file with a ratio column (e.g. from `randgen generate`)
        #[arg(short, long)]
        input: String,

        /// Distribution (uniform, erlang, exponential, gamma, normal,
        /// weibull, uniform-discrete, bernoulli, binomial, poisson)
        #[arg(short, long)]
        distribution: String,

        /// Range minimum (uniform, uniform-discrete)
        #[arg(long)]
        min: Option<f64>,

        /// Range maximum (uniform, uniform-discrete)
        #[arg(long)]
        max: Option<f64>,

        /// Distribution mean
        #[arg(long)]
        mean: Option<f64>,

        /// Distribution variance
        #[arg(long)]
        variance: Option<f64>,

        /// Erlang shape K
        #[arg(long)]
        k: Option<u32>,

        /// Weibull shape alpha
        #[arg(long)]
        shape: Option<f64>,

        /// Weibull scale beta (enters the formula squared)
        #[arg(long)]
        beta: Option<f64>,

        /// Weibull location offset
        #[arg(long)]
        offset: Option<f64>,

        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Generate {
            algorithm,
            seed,
            seed_y,
            constant,
            count,
            format,
            output,
        } => commands::generate::run(
            &algorithm,
            seed,
            seed_y,
            constant,
            count,
            &format,
            output.as_deref(),
        ),
        Commands::Test {
            input,
            kind,
            alpha,
            intervals,
        } => commands::test::run(&input, &kind, alpha, intervals),
        Commands::Map {
            input,
            distribution,
            min,
            max,
            mean,
            variance,
            k,
            shape,
            beta,
            offset,
            format,
            output,
        } => commands::map::run(
            &input,
            &distribution,
            &commands::map::MapParams {
                min,
                max,
                mean,
                variance,
                k,
                shape,
                beta,
                offset,
            },
            &format,
            output.as_deref(),
        ),
    }
}
