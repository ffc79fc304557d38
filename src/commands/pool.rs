//! Pool command: inspect the active idea pool.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::config::Config;

/// Options for the pool command
#[derive(Debug, Clone)]
pub struct PoolOptions {
    /// Config file path
    pub config: PathBuf,
    /// Custom pool file, overriding the config
    pub pool: Option<PathBuf>,
    /// Output as JSON
    pub json: bool,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            config: PathBuf::from("hookforge.config.json"),
            pool: None,
            json: false,
        }
    }
}

/// Execute the pool command
pub fn execute_pool(options: PoolOptions) -> Result<()> {
    let config = Config::load(&options.config)?;
    let pool = super::load_pool(&config, options.pool.as_deref())?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&pool)?);
        return Ok(());
    }

    println!(
        "{} ({} seeds)\n",
        style("Active idea pool").bold(),
        pool.len()
    );
    for seed in &pool.seeds {
        println!("  {}", style(&seed.title).bold());
        println!("    {}", style(&seed.hook).dim());
        println!(
            "    {}",
            style(format!(
                "discomfort {:.1}  curiosity {:.1}  novelty {:.1}  interrupts {}",
                seed.discomfort,
                seed.curiosity,
                seed.novelty,
                seed.pattern_interrupts.len()
            ))
            .dim()
        );
    }

    Ok(())
}
