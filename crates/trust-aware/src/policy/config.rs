use serde::Serialize;

use super::error::InvalidInput;

/// Minimum top-1 probability before a prediction counts as confident.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Gap between the top two probabilities below which a prediction is unstable.
pub const DEFAULT_MARGIN_THRESHOLD: f64 = 0.2;

/// Number of fired risk signals at which the case is deferred to a reviewer.
pub const RISK_REVIEW_THRESHOLD: usize = 2;

/// Thresholds the decision policy is evaluated against.
///
/// Only the confidence threshold is caller-adjustable; the margin and review
/// thresholds are fixed policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecisionConfig {
    confidence_threshold: f64,
    margin_threshold: f64,
    risk_score_threshold: usize,
}

impl DecisionConfig {
    pub fn with_confidence_threshold(threshold: f64) -> Result<Self, InvalidInput> {
        validate_threshold(threshold)?;
        Ok(Self {
            confidence_threshold: threshold,
            ..Self::default()
        })
    }

    pub fn confidence_threshold(&self) -> f64 {
        self.confidence_threshold
    }

    pub fn margin_threshold(&self) -> f64 {
        self.margin_threshold
    }

    pub fn risk_score_threshold(&self) -> usize {
        self.risk_score_threshold
    }
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            margin_threshold: DEFAULT_MARGIN_THRESHOLD,
            risk_score_threshold: RISK_REVIEW_THRESHOLD,
        }
    }
}

pub(crate) fn validate_threshold(threshold: f64) -> Result<(), InvalidInput> {
    if threshold.is_finite() && (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(InvalidInput::ThresholdOutOfRange(threshold))
    }
}
