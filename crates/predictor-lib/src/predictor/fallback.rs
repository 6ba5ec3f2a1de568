//! Heuristic scorer used when the model cannot produce a score
//!
//! Mirrors the supervising application's fallback formula: a base score from
//! the vendor's history nudged by price, delivery speed, and locality.

use super::features::FeatureRow;
use super::output::finalize_raw;
use super::Scorer;
use crate::error::ScoreError;
use tracing::debug;

/// Base score assumed when the vendor has no scoring history
const DEFAULT_BASE_SCORE: f64 = 50.0;

/// Price above which the price factor bottoms out
const PRICE_CEILING: f64 = 200.0;

/// Maximum contribution of the price factor
const PRICE_WEIGHT: f64 = 5.0;

/// Delivery duration at or beyond which the delivery factor bottoms out
const DELIVERY_HORIZON_DAYS: f64 = 10.0;

/// Maximum contribution of the delivery factor
const DELIVERY_WEIGHT: f64 = 3.0;

/// Contribution of a local vendor
const LOCAL_WEIGHT: f64 = 2.0;

/// Heuristic scorer: never loads the model artifact
pub struct FallbackScorer;

impl Scorer for FallbackScorer {
    fn score(&self, row: &FeatureRow) -> Result<f64, ScoreError> {
        // The `.max(0.0)` floors below would absorb a NaN operand, so
        // non-finite inputs must be rejected before any factor math.
        if !row.vendor_price_today.is_finite() || !row.past_sustainability_avg.is_finite() {
            return Err(ScoreError::Prediction(
                "non-finite feature value".to_string(),
            ));
        }

        // An absent history arrives as a zero average
        let base = if row.past_sustainability_avg == 0.0 {
            DEFAULT_BASE_SCORE
        } else {
            row.past_sustainability_avg
        };

        let price_factor = (1.0 - row.vendor_price_today / PRICE_CEILING).max(0.0) * PRICE_WEIGHT;
        let delivery_factor = ((DELIVERY_HORIZON_DAYS - row.vendor_delivery_days as f64)
            / DELIVERY_HORIZON_DAYS)
            .max(0.0)
            * DELIVERY_WEIGHT;
        let local_factor = row.local_flag_numeric as f64 * LOCAL_WEIGHT;

        debug!(base, price_factor, delivery_factor, local_factor, "Computed heuristic score");
        finalize_raw(base + price_factor + delivery_factor + local_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(price: f64, days: i64, local: i64, past_avg: f64) -> FeatureRow {
        FeatureRow {
            vendor_price_today: price,
            vendor_delivery_days: days,
            local_flag_numeric: local,
            past_sustainability_avg: past_avg,
        }
    }

    #[test]
    fn test_known_value() {
        // 60 + 4.7375 (price) + 2.1 (delivery) + 2 (local) = 68.8375
        let score = FallbackScorer.score(&row(10.5, 3, 1, 60.0)).unwrap();
        assert_eq!(score, 68.84);
    }

    #[test]
    fn test_zero_history_uses_default_base() {
        let score = FallbackScorer.score(&row(200.0, 10, 0, 0.0)).unwrap();
        assert_eq!(score, DEFAULT_BASE_SCORE);
    }

    #[test]
    fn test_expensive_slow_vendor_gets_no_bonus() {
        let score = FallbackScorer.score(&row(500.0, 30, 0, 40.0)).unwrap();
        assert_eq!(score, 40.0);
    }

    #[test]
    fn test_result_clamped_to_range() {
        let high = FallbackScorer.score(&row(0.0, 0, 1, 99.0)).unwrap();
        assert_eq!(high, 100.0);

        let low = FallbackScorer.score(&row(500.0, 30, 0, -20.0)).unwrap();
        assert_eq!(low, 0.0);
    }

    #[test]
    fn test_non_finite_input_is_prediction_error() {
        let bad_rows = [
            row(f64::NAN, 3, 1, 60.0),
            row(f64::INFINITY, 3, 1, 60.0),
            row(10.5, 3, 1, f64::NAN),
            row(10.5, 3, 1, f64::NEG_INFINITY),
        ];
        for bad in bad_rows {
            let err = FallbackScorer.score(&bad).unwrap_err();
            assert!(matches!(err, ScoreError::Prediction(_)), "row: {bad:?}");
        }
    }
}
