//! Transaction-driven score adjustment
//!
//! After a completed transaction the buyer's running sustainability score
//! moves toward the seller's score, weighted by transaction value. Computed
//! by the supervising application, never by the prediction subprocess.

use crate::predictor::{round_two, SCORE_MAX, SCORE_MIN};

/// Transaction value at which a transaction carries full weight
const FULL_WEIGHT_VALUE: f64 = 10_000.0;

/// Fraction of the score difference transferred per full-weight transaction
const TRANSFER_RATE: f64 = 0.1;

/// Maximum score movement per transaction
const MAX_CHANGE: f64 = 5.0;

/// New buyer score after a transaction with the given seller
///
/// The buyer's score drifts toward the seller's, faster for high-value
/// transactions, damped to at most [`MAX_CHANGE`] points either way, and
/// kept inside the score range.
pub fn buyer_score_change(buyer_current: f64, seller_score: f64, transaction_value: f64) -> f64 {
    let weight = (transaction_value / FULL_WEIGHT_VALUE).min(1.0);
    let change = (seller_score - buyer_current) * TRANSFER_RATE * weight;
    let damped = change.clamp(-MAX_CHANGE, MAX_CHANGE);

    let new_score = buyer_current + damped;
    round_two(new_score).clamp(SCORE_MIN, SCORE_MAX)
}
