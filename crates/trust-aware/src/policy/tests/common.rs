use std::collections::BTreeMap;

use crate::policy::domain::ClassificationResult;
use crate::policy::DecisionConfig;

pub(super) const CONFIDENT_TEXT: &str =
    "I absolutely love this product, it works perfectly and I would recommend it to everyone.";
pub(super) const CONTRASTIVE_TEXT: &str =
    "The product quality is great, but the customer service was awful.";
pub(super) const HEDGED_TEXT: &str = "The experience was kind of okay.";
pub(super) const PLAIN_TEXT: &str = "The package arrived on Tuesday.";

pub(super) fn binary(label: &str, confidence: f64) -> ClassificationResult {
    let other = if label == "POSITIVE" {
        "NEGATIVE"
    } else {
        "POSITIVE"
    };
    ClassificationResult {
        label: label.to_string(),
        confidence,
        scores: BTreeMap::from([
            (label.to_string(), confidence),
            (other.to_string(), 1.0 - confidence),
        ]),
    }
}

pub(super) fn three_way(top: f64, second: f64) -> ClassificationResult {
    ClassificationResult {
        label: "POSITIVE".to_string(),
        confidence: top,
        scores: BTreeMap::from([
            ("POSITIVE".to_string(), top),
            ("NEUTRAL".to_string(), second),
            ("NEGATIVE".to_string(), 1.0 - top - second),
        ]),
    }
}

pub(super) fn config_with(threshold: f64) -> DecisionConfig {
    DecisionConfig::with_confidence_threshold(threshold).expect("threshold in range")
}
