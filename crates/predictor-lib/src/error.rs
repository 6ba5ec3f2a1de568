//! Error taxonomy for scoring failures
//!
//! Every failure mode of the prediction pipeline maps to one variant here.
//! The CLI collapses any of them into a single `ERROR: <message>` stderr
//! line plus exit code 1, so the variants exist for embedding callers that
//! want to distinguish a bad artifact from a bad input.

use thiserror::Error;

/// Failure during feature coercion, model loading, or inference
#[derive(Debug, Error)]
pub enum ScoreError {
    /// The model artifact is missing, unreadable, or not a loadable ONNX graph
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// A supplied value could not be coerced to its feature's numeric type
    #[error("invalid value {value:?} for {field}: expected {expected}")]
    InputType {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// The model failed during inference or produced an unusable score
    #[error("prediction failed: {0}")]
    Prediction(String),
}
