//! Script refinement: apply critique remedies in a single pass.
//!
//! Each critique is routed to the part of the script its note targets and a
//! mechanical rewrite applied. One pass only; the result is not re-critiqued,
//! so it may still carry flags on a second look.

use tracing::debug;

use crate::pipeline::critique::MAX_BEATS;
use crate::pipeline::types::{Beat, Critique, Script};

/// Produce an improved script by applying each critique's remedy in order.
///
/// Critiques with no matching rewrite rule are skipped. The output always
/// satisfies the script invariants; an empty critique list returns the script
/// unchanged.
pub fn improve_script(script: &Script, critiques: &[Critique]) -> Script {
    let mut improved = script.clone();

    for critique in critiques {
        let note = critique.note.to_lowercase();
        if note.contains("hook") {
            rewrite_hook(&mut improved, &note);
        } else if note.contains("beat") {
            rewrite_beats(&mut improved, &note);
        } else if note.contains("takeaway") {
            rewrite_takeaway(&mut improved, &note);
        } else {
            debug!(note = %critique.note, "no rewrite rule for critique, skipping");
        }
    }

    improved
}

fn rewrite_hook(script: &mut Script, note: &str) {
    if note.contains("too short") {
        script.hook = format!(
            "{} If you scroll past this, that reaction is the answer.",
            script.hook
        );
    } else if note.contains("three-second") {
        script.hook = first_sentence(&script.hook);
    } else if note.contains("addresses the viewer") {
        script.hook = format!("You need to hear this one: {}", script.hook);
    }
}

fn rewrite_beats(script: &mut Script, note: &str) {
    if note.contains("too few") {
        script.beats.push(Beat {
            label: "Escalation".to_string(),
            content: "Hold the silence, then repeat the hook back at the viewer word for word."
                .to_string(),
        });
    } else if note.contains("pacing") {
        while script.beats.len() > MAX_BEATS {
            merge_last_pair(&mut script.beats);
        }
    } else if note.contains("repeat") {
        vary_beat_openings(&mut script.beats);
    }
}

fn rewrite_takeaway(script: &mut Script, note: &str) {
    if note.contains("too thin") {
        script.takeaway = format!(
            "{} Do one thing before you keep scrolling: say it out loud once.",
            script.takeaway
        );
    } else if note.contains("stock phrase") {
        script.takeaway =
            "Trade the cliche for something concrete: name the exact fear this video exposed, then post anyway."
                .to_string();
    }
}

fn first_sentence(text: &str) -> String {
    let end = text
        .char_indices()
        .find(|(_, c)| matches!(c, '.' | '!' | '?'))
        .map(|(i, c)| i + c.len_utf8());
    match end {
        Some(end) if !text[..end].trim().is_empty() => text[..end].trim().to_string(),
        _ => text.to_string(),
    }
}

fn merge_last_pair(beats: &mut Vec<Beat>) {
    if beats.len() < 2 {
        return;
    }
    if let Some(tail) = beats.pop() {
        if let Some(prev) = beats.last_mut() {
            prev.content = format!("{} Then, without a breath: {}", prev.content, tail.content);
        }
    }
}

/// Prefix a distinct pivot cue onto any beat that reuses an earlier opening.
fn vary_beat_openings(beats: &mut [Beat]) {
    const PIVOTS: [&str; 3] = ["Now shift:", "Turn it again:", "Push further:"];

    let openings: Vec<String> = beats
        .iter()
        .map(|b| {
            b.content
                .split_whitespace()
                .take(4)
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase()
        })
        .collect();

    let mut pivot = 0usize;
    for index in 1..beats.len() {
        if openings[..index].contains(&openings[index]) {
            let cue = PIVOTS[pivot % PIVOTS.len()];
            beats[index].content = format!("{cue} {}", beats[index].content);
            pivot += 1;
        }
    }
}
