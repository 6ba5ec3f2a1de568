//! ONNX model loading and single-row inference using tract
//!
//! The artifact is an externally-trained regression model; this module only
//! requires that tract can load it and that the graph maps one `[1, 4]` f32
//! row to at least one f32 output value.

use super::features::{FeatureRow, NUM_FEATURES};
use super::output::finalize_raw;
use super::Scorer;
use crate::error::ScoreError;
use std::path::Path;
use std::time::Instant;
use tracing::debug;
use tract_onnx::prelude::*;

type TractModel = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// ONNX-based scorer using tract for lightweight inference
pub struct OnnxScorer {
    model: TractModel,
}

impl OnnxScorer {
    /// Load the model artifact from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScoreError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            ScoreError::ModelLoad(format!("failed to read {}: {e}", path.display()))
        })?;
        let scorer = Self::from_bytes(&bytes)?;
        debug!(path = %path.display(), size_bytes = bytes.len(), "Loaded model");
        Ok(scorer)
    }

    /// Load and optimize an ONNX model from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ScoreError> {
        let model = tract_onnx::onnx()
            .model_for_read(&mut std::io::Cursor::new(bytes))
            .map_err(|e| ScoreError::ModelLoad(format!("failed to parse ONNX model: {e}")))?
            .with_input_fact(0, f32::fact([1, NUM_FEATURES]).into())
            .map_err(|e| ScoreError::ModelLoad(format!("failed to set input shape: {e}")))?
            .into_optimized()
            .map_err(|e| ScoreError::ModelLoad(format!("failed to optimize model: {e}")))?
            .into_runnable()
            .map_err(|e| ScoreError::ModelLoad(format!("failed to create runnable model: {e}")))?;
        Ok(Self { model })
    }

    /// Convert a feature row to the model's input tensor
    fn row_to_tensor(row: &FeatureRow) -> Tensor {
        tract_ndarray::Array2::from_shape_vec((1, NUM_FEATURES), row.to_model_input().to_vec())
            .unwrap()
            .into()
    }
}

impl Scorer for OnnxScorer {
    fn score(&self, row: &FeatureRow) -> Result<f64, ScoreError> {
        let start = Instant::now();
        let input = Self::row_to_tensor(row);

        let result = self
            .model
            .run(tvec!(input.into()))
            .map_err(|e| ScoreError::Prediction(format!("model inference failed: {e}")))?;
        let output = result
            .first()
            .ok_or_else(|| ScoreError::Prediction("model produced no output".to_string()))?;
        let view = output.to_array_view::<f32>().map_err(|e| {
            ScoreError::Prediction(format!("model output is not an f32 tensor: {e}"))
        })?;
        let raw = view.iter().next().copied().ok_or_else(|| {
            ScoreError::Prediction("model output tensor is empty".to_string())
        })?;

        debug!(elapsed_us = start.elapsed().as_micros(), raw, "Inference completed");
        finalize_raw(f64::from(raw))
    }
}
