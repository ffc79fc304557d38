//! Scoring: collapse an idea's engagement axes into one comparable value.

use std::cmp::Ordering;

use crate::pipeline::types::Idea;

/// Axis weights for [`score_idea`].
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    pub discomfort: f64,
    pub curiosity: f64,
    pub novelty: f64,
}

/// Stopping power is dominated by emotional provocation; novelty is a
/// tie-breaker, weighted at half of either primary axis.
pub const WEIGHTS: ScoreWeights = ScoreWeights {
    discomfort: 0.40,
    curiosity: 0.40,
    novelty: 0.20,
};

/// Weighted sum of the three axes. Pure and total over any valid idea.
pub fn score_idea(idea: &Idea) -> f64 {
    idea.discomfort * WEIGHTS.discomfort
        + idea.curiosity * WEIGHTS.curiosity
        + idea.novelty * WEIGHTS.novelty
}

/// Ranking order shared by the eliminator and the selector: score descending,
/// ties broken by higher curiosity. Callers break remaining ties by input
/// position to keep runs reproducible.
pub fn rank_order(a: &Idea, b: &Idea) -> Ordering {
    score_idea(b)
        .partial_cmp(&score_idea(a))
        .unwrap_or(Ordering::Equal)
        .then(
            b.curiosity
                .partial_cmp(&a.curiosity)
                .unwrap_or(Ordering::Equal),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea(discomfort: f64, curiosity: f64, novelty: f64) -> Idea {
        Idea {
            id: "test".to_string(),
            title: "t".to_string(),
            hook: "h".to_string(),
            angle: "a".to_string(),
            why_stop: "w".to_string(),
            pattern_interrupts: vec!["x".to_string()],
            discomfort,
            curiosity,
            novelty,
        }
    }

    #[test]
    fn weighted_sum_matches_constants() {
        let score = score_idea(&idea(10.0, 5.0, 2.0));
        // 10*0.4 + 5*0.4 + 2*0.2 = 6.4
        assert!((score - 6.4).abs() < 1e-9);
    }

    #[test]
    fn novelty_alone_cannot_outrank_the_primary_axes() {
        let provocative = idea(8.0, 8.0, 0.0);
        let merely_novel = idea(5.0, 5.0, 10.0);
        assert!(score_idea(&provocative) > score_idea(&merely_novel));
    }

    #[test]
    fn equal_scores_break_on_curiosity() {
        // Same weighted score, curiosity differs.
        let curious = idea(4.0, 6.0, 5.0);
        let uncomfortable = idea(6.0, 4.0, 5.0);
        assert!((score_idea(&curious) - score_idea(&uncomfortable)).abs() < 1e-9);
        assert_eq!(rank_order(&curious, &uncomfortable), Ordering::Less);
    }
}
