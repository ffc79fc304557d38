//! Elimination and selection: rank the batch, keep the strong, pick the winner.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PipelineError, Result};
use crate::pipeline::scoring::{rank_order, score_idea};
use crate::pipeline::types::Idea;

/// Exactly this many ideas survive elimination. A hard business rule paired
/// with the five-idea batch, not a top-K knob inferred from input size.
pub const SURVIVOR_COUNT: usize = 2;

/// Smallest batch the fixed survivor policy can be applied to.
pub const MIN_BATCH: usize = SURVIVOR_COUNT;

/// Outcome of one elimination round. Survivors and casualties partition the
/// input batch exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub survivors: Vec<Idea>,
    pub casualties: Vec<Idea>,
}

/// Rank the batch and keep the top [`SURVIVOR_COUNT`] ideas.
///
/// Ordering: score descending, then curiosity descending, then input position
/// (stable, so identical input always produces the identical verdict).
pub fn kill_weak_ideas(ideas: &[Idea]) -> Result<Verdict> {
    if ideas.len() < MIN_BATCH {
        return Err(PipelineError::InvalidBatch {
            min: MIN_BATCH,
            got: ideas.len(),
        });
    }

    let mut ranked: Vec<(usize, &Idea)> = ideas.iter().enumerate().collect();
    ranked.sort_by(|(ai, a), (bi, b)| rank_order(a, b).then(ai.cmp(bi)));

    let survivors: Vec<Idea> = ranked[..SURVIVOR_COUNT]
        .iter()
        .map(|(_, idea)| (*idea).clone())
        .collect();

    // Casualties keep their original batch order for rendering.
    let mut casualty_indices: Vec<usize> =
        ranked[SURVIVOR_COUNT..].iter().map(|(i, _)| *i).collect();
    casualty_indices.sort_unstable();
    let casualties: Vec<Idea> = casualty_indices.iter().map(|&i| ideas[i].clone()).collect();

    for idea in &survivors {
        debug!(id = %idea.id, score = score_idea(idea), "idea survived");
    }
    for idea in &casualties {
        debug!(id = %idea.id, score = score_idea(idea), "idea eliminated");
    }

    Ok(Verdict {
        survivors,
        casualties,
    })
}

/// Pick the single highest-ranked idea from the survivor set.
///
/// An empty set means an upstream stage broke its contract, so this is fatal
/// for the run rather than recoverable.
pub fn choose_winning_idea(survivors: &[Idea]) -> Result<Idea> {
    if survivors.is_empty() {
        return Err(PipelineError::EmptySurvivorSet);
    }

    let mut ranked: Vec<(usize, &Idea)> = survivors.iter().enumerate().collect();
    ranked.sort_by(|(ai, a), (bi, b)| rank_order(a, b).then(ai.cmp(bi)));
    Ok(ranked[0].1.clone())
}
