//! Sustainability score prediction engine

mod fallback;
mod features;
mod inference;
mod output;

pub use fallback::FallbackScorer;
pub use features::{FeatureRow, FEATURE_NAMES, NUM_FEATURES};
pub use inference::OnnxScorer;
pub use output::{finalize_raw, format_score, SCORE_MAX, SCORE_MIN};
pub(crate) use output::round_two;

use crate::error::ScoreError;
use std::path::Path;

/// Trait for scoring implementations
pub trait Scorer: Send + Sync {
    /// Produce a clamped, rounded sustainability score for one feature row
    fn score(&self, row: &FeatureRow) -> Result<f64, ScoreError>;
}

/// One-shot prediction: load the model artifact and score a single row
///
/// This is the whole pipeline of the subprocess contract. Embedding callers
/// that score repeatedly should hold an [`OnnxScorer`] instead of paying the
/// load on every call.
pub fn predict(model_path: impl AsRef<Path>, row: &FeatureRow) -> Result<f64, ScoreError> {
    let scorer = OnnxScorer::from_path(model_path)?;
    scorer.score(row)
}
