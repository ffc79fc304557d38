//! End-to-end tests for the generation pipeline.
//!
//! Covers the pipeline's observable guarantees: batch invariants, the fixed
//! two-survivor elimination policy, deterministic tie-breaks, script
//! structure, critique routing, and full runs that never abort.

use std::collections::BTreeSet;
use std::io::Write;

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use hookforge::{
    choose_winning_idea, craft_script, critique_script, generate_ideas, improve_script,
    kill_weak_ideas, run_pipeline, score_idea, Beat, Idea, IdeaPool, PipelineError, Script,
    Severity, BATCH_SIZE, SURVIVOR_COUNT,
};

fn idea(id: &str, discomfort: f64, curiosity: f64, novelty: f64) -> Idea {
    Idea {
        id: id.to_string(),
        title: format!("title {id}"),
        hook: format!("You will not like what hook {id} says about you."),
        angle: "an angle".to_string(),
        why_stop: "a reason viewers freeze mid-scroll".to_string(),
        pattern_interrupts: vec!["a pattern interrupt".to_string()],
        discomfort,
        curiosity,
        novelty,
    }
}

// =============================================================================
// Synthesizer guarantees
// =============================================================================

mod synthesis_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_batch_satisfies_the_idea_invariants() {
        let pool = IdeaPool::default();
        for seed in 0..32u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let batch = generate_ideas(&pool, &mut rng);

            assert_eq!(batch.len(), BATCH_SIZE);
            for idea in &batch {
                assert!(!idea.pattern_interrupts.is_empty());
                for axis in [idea.discomfort, idea.curiosity, idea.novelty] {
                    assert!(axis.is_finite());
                    assert!((0.0..=10.0).contains(&axis));
                }
            }
        }
    }

    #[test]
    fn batches_differentiate_on_the_scoring_axes() {
        let pool = IdeaPool::default();
        let mut rng = StdRng::seed_from_u64(5);
        let batch = generate_ideas(&pool, &mut rng);

        let scores: Vec<f64> = batch.iter().map(score_idea).collect();
        let max = scores.iter().cloned().fold(f64::MIN, f64::max);
        let min = scores.iter().cloned().fold(f64::MAX, f64::min);
        assert!(max - min > f64::EPSILON, "batch scored flat: {scores:?}");
    }
}

// =============================================================================
// Elimination policy
// =============================================================================

mod elimination_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn five_ideas_always_split_two_and_three() {
        let batch: Vec<Idea> = (0..5)
            .map(|i| idea(&format!("idea-{i}"), i as f64, 9.0 - i as f64, 3.0))
            .collect();
        let verdict = kill_weak_ideas(&batch).unwrap();

        assert_eq!(verdict.survivors.len(), SURVIVOR_COUNT);
        assert_eq!(verdict.casualties.len(), batch.len() - SURVIVOR_COUNT);

        let survivors: BTreeSet<&str> = verdict.survivors.iter().map(|i| i.id.as_str()).collect();
        let casualties: BTreeSet<&str> =
            verdict.casualties.iter().map(|i| i.id.as_str()).collect();
        let input: BTreeSet<&str> = batch.iter().map(|i| i.id.as_str()).collect();

        assert!(survivors.is_disjoint(&casualties));
        assert_eq!(
            survivors.union(&casualties).copied().collect::<BTreeSet<_>>(),
            input
        );
    }

    #[test]
    fn curiosity_eight_three_nine_two_seven_keeps_nine_and_eight() {
        let batch: Vec<Idea> = [8.0, 3.0, 9.0, 2.0, 7.0]
            .iter()
            .enumerate()
            .map(|(i, &c)| idea(&format!("idea-{i}"), 5.0, c, 5.0))
            .collect();

        let verdict = kill_weak_ideas(&batch).unwrap();
        let kept: BTreeSet<i64> = verdict
            .survivors
            .iter()
            .map(|i| i.curiosity as i64)
            .collect();
        assert_eq!(kept, BTreeSet::from([9, 8]));
    }

    #[test]
    fn full_ties_resolve_to_the_earlier_index_every_time() {
        let batch: Vec<Idea> = (0..5)
            .map(|i| idea(&format!("idea-{i}"), 5.0, 5.0, 5.0))
            .collect();

        for _ in 0..10 {
            let verdict = kill_weak_ideas(&batch).unwrap();
            let kept: Vec<&str> = verdict.survivors.iter().map(|i| i.id.as_str()).collect();
            assert_eq!(kept, vec!["idea-0", "idea-1"]);
        }
    }

    #[test]
    fn one_idea_is_an_invalid_batch() {
        let batch = vec![idea("only", 5.0, 5.0, 5.0)];
        assert!(matches!(
            kill_weak_ideas(&batch),
            Err(PipelineError::InvalidBatch { .. })
        ));
    }

    #[test]
    fn winner_is_always_the_survivor_with_the_maximum_score() {
        let survivors = vec![
            idea("low", 3.0, 3.0, 3.0),
            idea("high", 9.0, 9.0, 9.0),
            idea("mid", 6.0, 6.0, 6.0),
        ];
        let winner = choose_winning_idea(&survivors).unwrap();
        assert_eq!(winner.id, "high");

        let best = survivors
            .iter()
            .map(score_idea)
            .fold(f64::MIN, f64::max);
        assert!((score_idea(&winner) - best).abs() < 1e-9);
    }

    #[test]
    fn empty_survivor_set_is_a_contract_violation() {
        assert!(matches!(
            choose_winning_idea(&[]),
            Err(PipelineError::EmptySurvivorSet)
        ));
    }
}

// =============================================================================
// Drafting and critique
// =============================================================================

mod script_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn beat_count_and_order_mirror_the_pattern_interrupts() {
        let mut winner = idea("winner", 8.0, 9.0, 7.0);
        winner.pattern_interrupts = vec![
            "open with the accusation".to_string(),
            "cut to the receipts".to_string(),
            "let the silence run".to_string(),
        ];

        let script = craft_script(&winner);
        assert_eq!(script.beats.len(), winner.pattern_interrupts.len());
        for (beat, interrupt) in script.beats.iter().zip(&winner.pattern_interrupts) {
            assert!(beat.content.contains(interrupt));
        }
    }

    #[test]
    fn minimal_script_draws_a_high_severity_critique() {
        let script = Script {
            hook: "Look.".to_string(),
            beats: vec![Beat {
                label: "Only beat".to_string(),
                content: "State the premise.".to_string(),
            }],
            takeaway: "The end.".to_string(),
        };
        let critiques = critique_script(&script);
        assert!(!critiques.is_empty());
        assert!(critiques.iter().any(|c| c.severity == Severity::High));
    }

    #[test]
    fn refined_script_is_valid_even_with_no_critiques() {
        let winner = idea("winner", 8.0, 9.0, 7.0);
        let draft = craft_script(&winner);
        let refined = improve_script(&draft, &[]);

        assert!(!refined.beats.is_empty());
        assert!(refined.beats.iter().all(|b| !b.content.is_empty()));
        assert_eq!(refined.hook, draft.hook);
    }

    #[test]
    fn refinement_preserves_invariants_under_full_critique_load() {
        let script = Script {
            hook: "Hm.".to_string(),
            beats: vec![Beat {
                label: "Only beat".to_string(),
                content: "One flat beat.".to_string(),
            }],
            takeaway: "Stay tuned.".to_string(),
        };
        let refined = improve_script(&script, &critique_script(&script));

        assert!(!refined.hook.is_empty());
        assert!(!refined.beats.is_empty());
        assert!(refined.beats.iter().all(|b| !b.content.is_empty()));
        assert!(!refined.takeaway.is_empty());
    }
}

// =============================================================================
// Full runs
// =============================================================================

mod end_to_end_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn a_synthesized_batch_always_survives_the_whole_pipeline() {
        let pool = IdeaPool::default();
        for seed in 0..64u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let report = run_pipeline(&pool, &mut rng)
                .unwrap_or_else(|e| panic!("run with seed {seed} aborted: {e}"));

            assert_eq!(report.ideas.len(), BATCH_SIZE);
            assert_eq!(report.survivors.len(), SURVIVOR_COUNT);
            assert!(report.survivors.iter().any(|i| i.id == report.winner.id));
            assert_eq!(
                report.draft.beats.len(),
                report.winner.pattern_interrupts.len()
            );
            assert!(!report.refined.beats.is_empty());
        }
    }

    #[test]
    fn report_round_trips_through_json() {
        let pool = IdeaPool::default();
        let mut rng = StdRng::seed_from_u64(13);
        let report = run_pipeline(&pool, &mut rng).unwrap();

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("whyStop"));
        assert!(json.contains("patternInterrupts"));

        let back: hookforge::RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.run_id, report.run_id);
        assert_eq!(back.winner.id, report.winner.id);
    }

    #[test]
    fn custom_pool_files_feed_the_pipeline() {
        let pool = IdeaPool::default();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&pool).unwrap()).unwrap();

        let loaded = IdeaPool::from_json(file.path()).unwrap();
        assert_eq!(loaded.len(), pool.len());

        let mut rng = StdRng::seed_from_u64(21);
        assert!(run_pipeline(&loaded, &mut rng).is_ok());
    }

    #[test]
    fn corrupt_pool_file_is_rejected_before_the_run() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"seeds\": []}}").unwrap();
        assert!(matches!(
            IdeaPool::from_json(file.path()),
            Err(PipelineError::InvalidPool(_))
        ));
    }
}
