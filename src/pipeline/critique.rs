//! Script critique: a fixed battery of structural heuristics.
//!
//! Checks run in definition order and emit in that order; sorting by severity
//! is a presentation concern. Thresholds are named constants so the battery
//! reads as policy, not magic numbers.

use crate::pipeline::types::{Critique, Script, Severity};

/// A hook with fewer words than this cannot carry an open loop.
const HOOK_MIN_WORDS: usize = 4;
/// A hook longer than this overruns the three-second window.
const HOOK_MAX_CHARS: usize = 120;
/// Fewer beats than this reads flat.
pub(crate) const MIN_BEATS: usize = 2;
/// More beats than this bleeds pacing.
pub(crate) const MAX_BEATS: usize = 5;
/// Beats sharing this many opening words count as repetition.
const REPEAT_PREFIX_WORDS: usize = 4;
/// A takeaway with fewer words than this is too thin to be memorable.
const TAKEAWAY_MIN_WORDS: usize = 6;

/// Stock phrases that mark a takeaway as generic.
const GENERIC_PHRASES: [&str; 5] = [
    "be yourself",
    "stay tuned",
    "like and subscribe",
    "that's it",
    "food for thought",
];

/// Run the heuristic battery against a script.
///
/// Zero critiques means the script passed every check; fresh drafts rarely do.
pub fn critique_script(script: &Script) -> Vec<Critique> {
    let mut critiques = Vec::new();

    let hook_words = word_count(&script.hook);
    if hook_words < HOOK_MIN_WORDS {
        critiques.push(flag(
            Severity::High,
            "Hook is too short to open a loop",
            "Extend the hook into a direct challenge the viewer has to answer",
        ));
    }
    if script.hook.chars().count() > HOOK_MAX_CHARS {
        critiques.push(flag(
            Severity::Medium,
            "Hook runs past the three-second window",
            "Cut the hook down to its sharpest single sentence",
        ));
    }
    if !addresses_viewer(&script.hook) {
        critiques.push(flag(
            Severity::Medium,
            "Hook never addresses the viewer",
            "Rewrite the hook in second person so it lands as an accusation",
        ));
    }

    if script.beats.len() < MIN_BEATS {
        critiques.push(flag(
            Severity::High,
            "Too few beats to build an arc; the script reads flat",
            "Split the narrative into at least two escalating beats",
        ));
    }
    if script.beats.len() > MAX_BEATS {
        critiques.push(flag(
            Severity::Medium,
            "Beat count overruns the pacing budget",
            "Merge adjacent beats until at most five remain",
        ));
    }
    if beats_repeat_wording(script) {
        critiques.push(flag(
            Severity::Medium,
            "Beats repeat their opening wording",
            "Vary how each beat opens so the escalation is audible",
        ));
    }

    if word_count(&script.takeaway) < TAKEAWAY_MIN_WORDS {
        critiques.push(flag(
            Severity::Medium,
            "Takeaway is too thin to stick after the video ends",
            "Close on one concrete action the viewer can take today",
        ));
    }
    if is_generic(&script.takeaway) {
        critiques.push(flag(
            Severity::Low,
            "Takeaway leans on a stock phrase",
            "Swap the stock phrase for this idea's specific payoff",
        ));
    }

    critiques
}

fn flag(severity: Severity, note: &str, remedy: &str) -> Critique {
    Critique {
        severity,
        note: note.to_string(),
        remedy: remedy.to_string(),
    }
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn addresses_viewer(hook: &str) -> bool {
    hook.split_whitespace().any(|word| {
        let word: String = word
            .chars()
            .filter(|c| c.is_alphabetic())
            .collect::<String>()
            .to_lowercase();
        matches!(word.as_str(), "you" | "your" | "yours" | "yourself")
    })
}

fn beats_repeat_wording(script: &Script) -> bool {
    let prefixes: Vec<String> = script
        .beats
        .iter()
        .map(|beat| {
            beat.content
                .split_whitespace()
                .take(REPEAT_PREFIX_WORDS)
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase()
        })
        .collect();

    prefixes
        .iter()
        .enumerate()
        .any(|(i, prefix)| prefixes[..i].contains(prefix))
}

fn is_generic(takeaway: &str) -> bool {
    let lowered = takeaway.to_lowercase();
    GENERIC_PHRASES.iter().any(|phrase| lowered.contains(phrase))
}
