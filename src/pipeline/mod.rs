//! The generation pipeline: idea synthesis, scoring, elimination, selection,
//! drafting, critique, and refinement. Every stage is a pure function over
//! the previous stage's output.

pub mod critique;
pub mod draft;
pub mod elimination;
pub mod pool;
pub mod refine;
pub mod runner;
pub mod scoring;
pub mod synth;
pub mod types;

pub use critique::critique_script;
pub use draft::craft_script;
pub use elimination::{choose_winning_idea, kill_weak_ideas, Verdict, SURVIVOR_COUNT};
pub use pool::{IdeaPool, IdeaSeed};
pub use refine::improve_script;
pub use runner::{run_pipeline, ADAPTIVE_MOVES};
pub use scoring::{score_idea, ScoreWeights, WEIGHTS};
pub use synth::{generate_ideas, BATCH_SIZE};
pub use types::{Beat, Critique, Idea, RunReport, Script, Severity};
