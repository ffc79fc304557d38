//! Script drafting: expand the winning idea into a structured script.

use crate::pipeline::types::{Beat, Idea, Script};

/// Ordinal labels for the escalation sequence.
const ORDINALS: [&str; 5] = ["Opening", "Second", "Third", "Fourth", "Fifth"];

/// Escalation cues, one rung per beat. The last rung repeats for long
/// interrupt lists so tension never resets.
const ESCALATIONS: [&str; 4] = [
    "Open the loop and let it hang",
    "Raise the stakes past comfortable",
    "Make it personal enough to sting",
    "Close every exit except watching to the end",
];

/// Build a draft script from an idea.
///
/// One beat per pattern interrupt, in the idea's order; the interrupts are
/// sequenced to build tension, so reordering them would flatten the arc.
pub fn craft_script(idea: &Idea) -> Script {
    let beats: Vec<Beat> = idea
        .pattern_interrupts
        .iter()
        .enumerate()
        .map(|(index, interrupt)| Beat {
            label: beat_label(index),
            content: beat_content(index, interrupt, &idea.angle),
        })
        .collect();

    Script {
        hook: format!("{} You have three seconds to prove me wrong.", idea.hook),
        beats,
        takeaway: format!(
            "{}. Say the quiet part on camera and the scroll stops with you.",
            idea.why_stop
        ),
    }
}

fn beat_label(index: usize) -> String {
    match ORDINALS.get(index) {
        Some(ordinal) => format!("{ordinal} interrupt"),
        None => format!("Interrupt {}", index + 1),
    }
}

fn beat_content(index: usize, interrupt: &str, angle: &str) -> String {
    let escalation = ESCALATIONS[index.min(ESCALATIONS.len() - 1)];
    format!("{interrupt}. {escalation}, and keep the angle in frame: {angle}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea_with_interrupts(interrupts: &[&str]) -> Idea {
        Idea {
            id: "idea-1".to_string(),
            title: "title".to_string(),
            hook: "Your drafts folder is a hostage situation.".to_string(),
            angle: "unsent messages as leverage".to_string(),
            why_stop: "Everyone has the draft".to_string(),
            pattern_interrupts: interrupts.iter().map(|s| s.to_string()).collect(),
            discomfort: 7.0,
            curiosity: 9.0,
            novelty: 8.0,
        }
    }

    #[test]
    fn one_beat_per_interrupt_in_order() {
        let idea = idea_with_interrupts(&["first tactic", "second tactic", "third tactic"]);
        let script = craft_script(&idea);

        assert_eq!(script.beats.len(), idea.pattern_interrupts.len());
        for (beat, interrupt) in script.beats.iter().zip(&idea.pattern_interrupts) {
            assert!(beat.content.starts_with(interrupt.as_str()));
            assert!(!beat.content.is_empty());
        }
    }

    #[test]
    fn hook_derives_from_idea_hook() {
        let idea = idea_with_interrupts(&["tactic"]);
        let script = craft_script(&idea);
        assert!(script.hook.contains(&idea.hook));
    }

    #[test]
    fn takeaway_synthesizes_why_stop() {
        let idea = idea_with_interrupts(&["tactic"]);
        let script = craft_script(&idea);
        assert!(script.takeaway.contains(&idea.why_stop));
    }

    #[test]
    fn beats_reference_the_angle() {
        let idea = idea_with_interrupts(&["tactic one", "tactic two"]);
        let script = craft_script(&idea);
        for beat in &script.beats {
            assert!(beat.content.contains(&idea.angle));
        }
    }

    #[test]
    fn labels_are_ordinal_and_distinct() {
        let idea =
            idea_with_interrupts(&["one", "two", "three", "four", "five", "six", "seven"]);
        let script = craft_script(&idea);

        assert_eq!(script.beats[0].label, "Opening interrupt");
        assert_eq!(script.beats[4].label, "Fifth interrupt");
        assert_eq!(script.beats[6].label, "Interrupt 7");
        for (i, beat) in script.beats.iter().enumerate() {
            assert!(script.beats[..i].iter().all(|b| b.label != beat.label));
        }
    }
}
