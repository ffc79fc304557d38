//! Error types for the pipeline and its loaders

use thiserror::Error;

/// Pipeline error type
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Eliminator received a batch too small for the fixed survivor policy
    #[error("invalid batch: elimination needs at least {min} ideas, got {got}")]
    InvalidBatch { min: usize, got: usize },

    /// Selector received zero survivors; an upstream stage broke its contract
    #[error("empty survivor set: selection requires at least one surviving idea")]
    EmptySurvivorSet,

    /// A pool or config file could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A pool or config file could not be parsed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A loaded pool template violates the idea invariants
    #[error("invalid pool: {0}")]
    InvalidPool(String),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
