//! Score post-processing and stdout formatting
//!
//! Raw model outputs are clamped into the score range, rounded to two
//! decimal places, and rendered as minimal decimal text.

use crate::error::ScoreError;

/// Lower bound of the sustainability score range
pub const SCORE_MIN: f64 = 0.0;

/// Upper bound of the sustainability score range
pub const SCORE_MAX: f64 = 100.0;

/// Rounding scale for two decimal places
const ROUND_SCALE: f64 = 100.0;

/// Clamp a raw model output into [0, 100] and round half away from zero
/// to two decimal places. Non-finite raw scores are inference failures,
/// not clampable values.
pub fn finalize_raw(raw: f64) -> Result<f64, ScoreError> {
    if !raw.is_finite() {
        return Err(ScoreError::Prediction(format!(
            "model produced non-finite score {raw}"
        )));
    }
    Ok(round_two(raw.clamp(SCORE_MIN, SCORE_MAX)))
}

/// Round half away from zero to two decimal places
pub(crate) fn round_two(value: f64) -> f64 {
    (value * ROUND_SCALE).round() / ROUND_SCALE
}

/// Render a finalized score as the text the supervising caller parses:
/// minimal decimal form with at least one fractional digit (`50.0`, `73.42`)
pub fn format_score(score: f64) -> String {
    let text = format!("{score}");
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}
