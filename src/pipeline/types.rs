//! Value records passed between pipeline stages.
//!
//! Every stage consumes the previous stage's output and constructs fresh
//! instances; nothing here is mutated in place. Field names serialize in
//! camelCase so reports match the shape the presentation layer expects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inclusive bounds for the three engagement axes.
pub const ATTR_MIN: f64 = 0.0;
pub const ATTR_MAX: f64 = 10.0;

/// A candidate video concept with quantified engagement attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    /// Unique within one generation batch
    pub id: String,

    pub title: String,

    /// Opening line intended to stop scrolling
    pub hook: String,

    /// Psychological premise behind the hook
    pub angle: String,

    /// Why a viewer would stop scrolling
    pub why_stop: String,

    /// Attention-renewal tactics, in escalation order; never empty
    pub pattern_interrupts: Vec<String>,

    /// Each axis is finite and within [0, 10]
    pub discomfort: f64,
    pub curiosity: f64,
    pub novelty: f64,
}

/// One section of a drafted script.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beat {
    pub label: String,
    pub content: String,
}

/// A structured video script: hook, ordered beats, closing takeaway.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    pub hook: String,

    /// Insertion order is narrative order
    pub beats: Vec<Beat>,

    pub takeaway: String,
}

/// Urgency ranking for a critique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
            Severity::Low => write!(f, "low"),
        }
    }
}

/// One flagged structural weakness in a script.
///
/// `remedy` is a directive for fixing the problem, not a restatement of
/// `note`; the refiner routes on the note text and applies the remedy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Critique {
    pub severity: Severity,
    pub note: String,
    pub remedy: String,
}

/// Every artifact produced by one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,

    /// The full batch, before elimination
    pub ideas: Vec<Idea>,
    pub survivors: Vec<Idea>,
    pub casualties: Vec<Idea>,
    pub winner: Idea,

    pub draft: Script,
    pub critiques: Vec<Critique>,
    pub refined: Script,
}
