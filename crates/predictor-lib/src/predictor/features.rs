//! Feature row construction and coercion
//!
//! The model was trained on a four-column table; the struct field order here
//! must stay in training order because it defines the tensor layout handed
//! to the model.

use crate::error::ScoreError;
use serde::{Deserialize, Serialize};

/// Number of input features expected by the model
pub const NUM_FEATURES: usize = 4;

/// Feature column names in training order
pub const FEATURE_NAMES: [&str; NUM_FEATURES] = [
    "vendor_price_today",
    "vendor_delivery_days",
    "local_flag_numeric",
    "past_sustainability_avg",
];

/// One prediction input: the four vendor features in training order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    /// Seller's price today
    pub vendor_price_today: f64,
    /// Delivery duration in days
    pub vendor_delivery_days: i64,
    /// 1 when the vendor is local, 0 otherwise (not validated)
    pub local_flag_numeric: i64,
    /// Average of the vendor's past sustainability scores
    pub past_sustainability_avg: f64,
}

impl FeatureRow {
    /// Coerce four raw argument strings into a typed row
    ///
    /// Float fields accept anything `f64` parses; integer fields reject
    /// fractional text, matching the coercion the model's training pipeline
    /// applied to its columns.
    pub fn parse(
        price: &str,
        delivery_days: &str,
        local_flag: &str,
        past_avg: &str,
    ) -> Result<Self, ScoreError> {
        Ok(Self {
            vendor_price_today: parse_float(FEATURE_NAMES[0], price)?,
            vendor_delivery_days: parse_int(FEATURE_NAMES[1], delivery_days)?,
            local_flag_numeric: parse_int(FEATURE_NAMES[2], local_flag)?,
            past_sustainability_avg: parse_float(FEATURE_NAMES[3], past_avg)?,
        })
    }

    /// Feature values in training order, widened to the model's input dtype
    pub fn to_model_input(&self) -> [f32; NUM_FEATURES] {
        [
            self.vendor_price_today as f32,
            self.vendor_delivery_days as f32,
            self.local_flag_numeric as f32,
            self.past_sustainability_avg as f32,
        ]
    }
}

fn parse_float(field: &'static str, value: &str) -> Result<f64, ScoreError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ScoreError::InputType {
            field,
            value: value.to_string(),
            expected: "a number",
        })
}

fn parse_int(field: &'static str, value: &str) -> Result<i64, ScoreError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ScoreError::InputType {
            field,
            value: value.to_string(),
            expected: "an integer",
        })
}
