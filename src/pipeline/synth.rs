//! Idea synthesis: stamp a batch of candidate concepts out of the pool.

use rand::Rng;
use tracing::debug;

use crate::pipeline::pool::{IdeaPool, IdeaSeed};
use crate::pipeline::types::{Idea, ATTR_MAX, ATTR_MIN};

/// Ideas per generation batch. Fixed business rule, paired with the
/// two-survivor elimination policy.
pub const BATCH_SIZE: usize = 5;

/// Jitter half-width applied to each axis when stamping an idea from a seed.
const AXIS_JITTER: f64 = 0.5;

/// Produce exactly [`BATCH_SIZE`] ideas from the pool.
///
/// Seeds are sampled without replacement, so hooks stay distinct whenever the
/// pool holds at least a full batch. A smaller pool cycles as a last resort.
/// Axis values get a small random jitter, clamped back into [0, 10], so
/// repeated runs over the same pool still differentiate.
pub fn generate_ideas<R: Rng + ?Sized>(pool: &IdeaPool, rng: &mut R) -> Vec<Idea> {
    let picks: Vec<usize> = if pool.len() >= BATCH_SIZE {
        rand::seq::index::sample(rng, pool.len(), BATCH_SIZE).into_vec()
    } else {
        // Duplicate fallback for undersized pools.
        (0..BATCH_SIZE).map(|i| i % pool.len()).collect()
    };

    let ideas: Vec<Idea> = picks
        .iter()
        .enumerate()
        .map(|(index, &seed_index)| stamp(&pool.seeds[seed_index], index, rng))
        .collect();

    debug!(
        batch = ideas.len(),
        pool = pool.len(),
        "synthesized idea batch"
    );
    ideas
}

fn stamp<R: Rng + ?Sized>(seed: &IdeaSeed, index: usize, rng: &mut R) -> Idea {
    Idea {
        id: format!("idea-{}", index + 1),
        title: seed.title.clone(),
        hook: seed.hook.clone(),
        angle: seed.angle.clone(),
        why_stop: seed.why_stop.clone(),
        pattern_interrupts: seed.pattern_interrupts.clone(),
        discomfort: jitter(seed.discomfort, rng),
        curiosity: jitter(seed.curiosity, rng),
        novelty: jitter(seed.novelty, rng),
    }
}

fn jitter<R: Rng + ?Sized>(value: f64, rng: &mut R) -> f64 {
    let nudged = value + rng.random_range(-AXIS_JITTER..=AXIS_JITTER);
    nudged.clamp(ATTR_MIN, ATTR_MAX)
}
