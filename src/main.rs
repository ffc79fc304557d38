#![forbid(unsafe_code)]
//! hookforge Command Line Interface

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hookforge::commands::{
    execute_ideas, execute_pool, execute_run, IdeasOptions, PoolOptions, RunOptions,
};

#[derive(Parser)]
#[command(name = "hookforge")]
#[command(about = "Psychology-driven short-video concept pipeline")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = "hookforge.config.json")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: synthesize, eliminate, draft, critique, refine
    Run {
        /// RNG seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Custom idea pool file (JSON)
        #[arg(long)]
        pool: Option<PathBuf>,

        /// Emit the full run report as JSON
        #[arg(long)]
        json: bool,

        /// Skip the pacing wait before results render
        #[arg(long)]
        no_wait: bool,
    },

    /// Synthesize one idea batch and show the elimination verdict
    Ideas {
        /// RNG seed for a reproducible batch
        #[arg(long)]
        seed: Option<u64>,

        /// Custom idea pool file (JSON)
        #[arg(long)]
        pool: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the active idea pool
    Pool {
        /// Custom idea pool file (JSON)
        #[arg(long)]
        pool: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            seed,
            pool,
            json,
            no_wait,
        } => {
            execute_run(RunOptions {
                config: cli.config,
                pool,
                seed,
                json,
                no_wait,
            })?;
        }

        Commands::Ideas { seed, pool, json } => {
            execute_ideas(IdeasOptions {
                config: cli.config,
                pool,
                seed,
                json,
            })?;
        }

        Commands::Pool { pool, json } => {
            execute_pool(PoolOptions {
                config: cli.config,
                pool,
                json,
            })?;
        }
    }

    Ok(())
}
