#![forbid(unsafe_code)]

//! # hookforge
//!
//! Psychology-driven short-video concept pipeline: synthesize a batch of
//! candidate ideas, kill the weak ones, draft a script around the survivor,
//! critique the draft, and refine it.
//!
//! The pipeline is a single synchronous pass of pure functions; randomness is
//! injected, so seeded runs are fully reproducible.
//!
//! ## Example
//!
//! ```rust
//! use hookforge::{run_pipeline, IdeaPool};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! fn main() -> hookforge::Result<()> {
//!     let pool = IdeaPool::default();
//!     let mut rng = StdRng::seed_from_u64(7);
//!
//!     let report = run_pipeline(&pool, &mut rng)?;
//!     println!("winner: {}", report.winner.hook);
//!     Ok(())
//! }
//! ```
//!
//! The individual stages are also exposed for callers that want to drive the
//! sequence themselves: [`generate_ideas`], [`score_idea`], [`kill_weak_ideas`],
//! [`choose_winning_idea`], [`craft_script`], [`critique_script`],
//! [`improve_script`].

pub mod commands;
pub mod config;
pub mod error;
pub mod pipeline;

// Re-exports
pub use config::Config;
pub use error::{PipelineError, Result};
pub use pipeline::{
    choose_winning_idea, craft_script, critique_script, generate_ideas, improve_script,
    kill_weak_ideas, run_pipeline, score_idea, Beat, Critique, Idea, IdeaPool, IdeaSeed,
    RunReport, Script, Severity, Verdict, ADAPTIVE_MOVES, BATCH_SIZE, SURVIVOR_COUNT,
};
