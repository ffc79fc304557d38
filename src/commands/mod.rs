//! CLI command implementations.
//!
//! Each command lives in its own submodule. Commands resolve configuration,
//! build the RNG and pool, invoke the pipeline, and render; the pipeline
//! itself stays free of I/O.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::pipeline::IdeaPool;

pub mod ideas;
pub mod pool;
pub mod run;

pub use ideas::{execute_ideas, IdeasOptions};
pub use pool::{execute_pool, PoolOptions};
pub use run::{execute_run, RunOptions};

/// Seeded RNG for reproducible runs, OS entropy otherwise.
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Resolve the active pool: CLI flag, then config file, then built-in.
fn load_pool(config: &Config, cli_pool: Option<&Path>) -> Result<IdeaPool> {
    let path: Option<PathBuf> = cli_pool.map(Path::to_path_buf).or_else(|| config.pool.clone());
    match path {
        Some(path) => IdeaPool::from_json(&path)
            .with_context(|| format!("failed to load idea pool from {}", path.display())),
        None => Ok(IdeaPool::default()),
    }
}
