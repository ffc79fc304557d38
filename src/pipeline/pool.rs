//! The idea pool: templated concept variations the synthesizer draws from.
//!
//! The pool is an explicit, stateless value passed into `generate_ideas`
//! rather than a process-wide template table. Custom pools load from JSON and
//! are validated against the idea invariants before the pipeline ever sees
//! them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};
use crate::pipeline::types::{ATTR_MAX, ATTR_MIN};

/// One templated concept variation.
///
/// Seeds carry the same content fields as an `Idea`; the synthesizer assigns
/// batch ids and jitters the axis values when it stamps ideas out of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaSeed {
    pub title: String,
    pub hook: String,
    pub angle: String,
    pub why_stop: String,
    pub pattern_interrupts: Vec<String>,
    pub discomfort: f64,
    pub curiosity: f64,
    pub novelty: f64,
}

/// A validated collection of idea seeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaPool {
    pub seeds: Vec<IdeaSeed>,
}

impl IdeaPool {
    /// Build a pool from seeds, rejecting any that violate the idea invariants.
    pub fn new(seeds: Vec<IdeaSeed>) -> Result<Self> {
        validate_seeds(&seeds)?;
        Ok(Self { seeds })
    }

    /// Load a custom pool from a JSON file.
    pub fn from_json(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let pool: IdeaPool = serde_json::from_str(&raw)?;
        validate_seeds(&pool.seeds)?;
        Ok(pool)
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }
}

impl Default for IdeaPool {
    /// The built-in pool of dark-psychology concept variations.
    fn default() -> Self {
        Self {
            seeds: builtin_seeds(),
        }
    }
}

fn validate_seeds(seeds: &[IdeaSeed]) -> Result<()> {
    if seeds.is_empty() {
        return Err(PipelineError::InvalidPool("pool has no seeds".into()));
    }

    for (index, seed) in seeds.iter().enumerate() {
        if seed.title.trim().is_empty() || seed.hook.trim().is_empty() {
            return Err(PipelineError::InvalidPool(format!(
                "seed {index} has an empty title or hook"
            )));
        }
        if seed.pattern_interrupts.is_empty()
            || seed.pattern_interrupts.iter().any(|p| p.trim().is_empty())
        {
            return Err(PipelineError::InvalidPool(format!(
                "seed {index} ({}) needs at least one non-empty pattern interrupt",
                seed.title
            )));
        }
        for (axis, value) in [
            ("discomfort", seed.discomfort),
            ("curiosity", seed.curiosity),
            ("novelty", seed.novelty),
        ] {
            if !value.is_finite() || !(ATTR_MIN..=ATTR_MAX).contains(&value) {
                return Err(PipelineError::InvalidPool(format!(
                    "seed {index} ({}) has {axis} = {value}, outside [{ATTR_MIN}, {ATTR_MAX}]",
                    seed.title
                )));
            }
        }
    }

    // Duplicate hooks in the pool would let a sampled batch violate the
    // distinct-hook guarantee.
    for (index, seed) in seeds.iter().enumerate() {
        if seeds[..index].iter().any(|other| other.hook == seed.hook) {
            return Err(PipelineError::InvalidPool(format!(
                "seed {index} ({}) duplicates the hook of an earlier seed",
                seed.title
            )));
        }
    }

    Ok(())
}

fn seed(
    title: &str,
    hook: &str,
    angle: &str,
    why_stop: &str,
    interrupts: &[&str],
    discomfort: f64,
    curiosity: f64,
    novelty: f64,
) -> IdeaSeed {
    IdeaSeed {
        title: title.to_string(),
        hook: hook.to_string(),
        angle: angle.to_string(),
        why_stop: why_stop.to_string(),
        pattern_interrupts: interrupts.iter().map(|s| s.to_string()).collect(),
        discomfort,
        curiosity,
        novelty,
    }
}

fn builtin_seeds() -> Vec<IdeaSeed> {
    vec![
        seed(
            "The compliment that was an insult",
            "The nicest thing anyone ever said to you was an insult. Replay it.",
            "Backhanded praise rewires how you hear every compliment afterward",
            "Viewers immediately audit their own memories for the compliment that stung",
            &[
                "Freeze mid-sentence and whisper the compliment back at the camera",
                "Cut to a list of three compliments, cross two out",
                "Ask the viewer to type the compliment they never trusted",
            ],
            7.5,
            8.0,
            6.0,
        ),
        seed(
            "Your therapist has a file on you",
            "Your therapist writes one sentence about you after every session. Want to guess it?",
            "Professional observation strips away the story you tell about yourself",
            "The gap between self-image and an expert's one-line verdict is unbearable not to fill",
            &[
                "Read three fake session notes in a flat clinical voice",
                "Hold up a folder, open it, show a blank page",
            ],
            8.5,
            9.0,
            7.0,
        ),
        seed(
            "The friend who studies you",
            "One of your friends keeps a mental list of your weaknesses. You made their list twice this week.",
            "Social paranoia disguised as insight about observational friendships",
            "Naming an unspoken social fear makes scrolling past feel like denial",
            &[
                "Switch to POV of the friend narrating the list",
                "Snap back and accuse the viewer of being the friend",
                "End the beat on an unfinished sentence",
            ],
            9.0,
            7.5,
            5.5,
        ),
        seed(
            "You rehearse conversations that never happen",
            "You have won a thousand arguments in the shower and lost every real one.",
            "The fantasy-rehearsal loop as evidence of avoided conflict",
            "It describes a private habit viewers believed was theirs alone",
            &[
                "Act out a shower argument, then smash-cut to silence at a dinner table",
                "Count rehearsed arguments on fingers until running out of hands",
            ],
            6.5,
            8.5,
            6.5,
        ),
        seed(
            "The last text you didn't send",
            "Somewhere in your drafts is a text that would change a relationship. You keep it as a hostage.",
            "Unsent messages as controlled leverage over our own feelings",
            "Everyone has the draft; the hook threatens to make them open it",
            &[
                "Scroll a fake drafts folder on screen",
                "Read one draft aloud and delete it mid-word",
                "Dare the viewer to screenshot their oldest draft",
            ],
            7.0,
            9.5,
            8.0,
        ),
        seed(
            "Your mentor wanted you smaller",
            "The person who taught you the most also taught you your ceiling.",
            "Mentor-as-villain: guidance that quietly installed a limit",
            "Gratitude and resentment colliding forces a re-evaluation viewers cannot defer",
            &[
                "List three lessons, reveal the third was a leash",
                "Impersonate the mentor giving advice that shrinks",
            ],
            8.0,
            7.0,
            9.0,
        ),
        seed(
            "The apology you owe yourself",
            "You have apologized to everyone except the person doing the apologizing.",
            "Self-directed guilt reframed as an unpaid debt",
            "The sentence flips the apology script viewers have been running for years",
            &[
                "Write an apology on paper, address it, refuse to sign it",
                "Cut to a mirror shot held one beat too long",
            ],
            6.0,
            7.0,
            7.5,
        ),
        seed(
            "Your sibling kept score",
            "Your sibling remembers every contest you forgot you were in. The score is not close.",
            "Family rivalry as an invisible ledger only one side maintains",
            "Viewers with siblings must know which side of the ledger they are on",
            &[
                "Flash a handwritten scoreboard with absurd categories",
                "Recount one childhood loss in sports-commentary voice",
                "Stop and ask who taught them to keep score",
            ],
            7.0,
            8.0,
            6.0,
        ),
    ]
}
