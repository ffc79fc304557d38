//! Ideas command: synthesize one batch and show the elimination verdict.

use std::path::PathBuf;

use anyhow::Result;
use console::style;
use serde::Serialize;

use crate::config::Config;
use crate::pipeline::{generate_ideas, kill_weak_ideas, score_idea, Idea};

/// Options for the ideas command
#[derive(Debug, Clone)]
pub struct IdeasOptions {
    /// Config file path
    pub config: PathBuf,
    /// Custom pool file, overriding the config
    pub pool: Option<PathBuf>,
    /// RNG seed, overriding the config
    pub seed: Option<u64>,
    /// Output as JSON
    pub json: bool,
}

impl Default for IdeasOptions {
    fn default() -> Self {
        Self {
            config: PathBuf::from("hookforge.config.json"),
            pool: None,
            seed: None,
            json: false,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoredIdea<'a> {
    #[serde(flatten)]
    idea: &'a Idea,
    score: f64,
    eliminated: bool,
}

/// Execute the ideas command
pub fn execute_ideas(options: IdeasOptions) -> Result<()> {
    let config = Config::load(&options.config)?;
    let pool = super::load_pool(&config, options.pool.as_deref())?;
    let mut rng = super::make_rng(options.seed.or(config.seed));

    let ideas = generate_ideas(&pool, &mut rng);
    let verdict = kill_weak_ideas(&ideas)?;

    let scored: Vec<ScoredIdea> = ideas
        .iter()
        .map(|idea| ScoredIdea {
            idea,
            score: score_idea(idea),
            eliminated: verdict.casualties.iter().any(|c| c.id == idea.id),
        })
        .collect();

    if options.json {
        println!("{}", serde_json::to_string_pretty(&scored)?);
        return Ok(());
    }

    println!("{}\n", style("Idea batch, ranked for survival").bold());
    for entry in &scored {
        let verdict_label = if entry.eliminated {
            style("kill").red()
        } else {
            style("keep").green().bold()
        };
        println!(
            "  {:5.1}  [{}]  {}",
            entry.score,
            verdict_label,
            style(&entry.idea.title).bold()
        );
        println!("                {}", style(&entry.idea.hook).dim());
    }

    Ok(())
}
