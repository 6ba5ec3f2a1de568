//! Library for vendor sustainability score prediction
//!
//! This crate provides the core functionality for:
//! - Feature row construction and coercion
//! - ONNX model loading and single-row inference (tract)
//! - Score post-processing (clamp, round, format)
//! - Heuristic fallback scoring
//! - Transaction-driven buyer score adjustment

pub mod error;
pub mod predictor;
pub mod scoring;

pub use error::ScoreError;
pub use predictor::{
    format_score, predict, FallbackScorer, FeatureRow, OnnxScorer, Scorer, FEATURE_NAMES,
};
pub use scoring::buyer_score_change;
