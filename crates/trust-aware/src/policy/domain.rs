use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Output of the classification collaborator for a single text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: String,
    pub confidence: f64,
    pub scores: BTreeMap<String, f64>,
}

impl ClassificationResult {
    /// Build a result from a probability map, predicting the arg-max label.
    ///
    /// Returns `None` for an empty map. Ties resolve to the label that sorts
    /// first so the prediction is stable.
    pub fn from_scores(scores: BTreeMap<String, f64>) -> Option<Self> {
        let (label, confidence) = scores
            .iter()
            .fold(None::<(&String, f64)>, |best, (label, &score)| match best {
                Some((_, top)) if top >= score => best,
                _ => Some((label, score)),
            })?;
        let label = label.clone();

        Some(Self {
            label,
            confidence,
            scores,
        })
    }
}

/// Named reason to distrust full automation, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskSignal {
    LowConfidence,
    LowMargin,
    Ambiguity,
    MixedSentiment,
}

impl RiskSignal {
    pub const ALL: [RiskSignal; 4] = [
        RiskSignal::LowConfidence,
        RiskSignal::LowMargin,
        RiskSignal::Ambiguity,
        RiskSignal::MixedSentiment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskSignal::LowConfidence => "low_confidence",
            RiskSignal::LowMargin => "low_margin",
            RiskSignal::Ambiguity => "ambiguity",
            RiskSignal::MixedSentiment => "mixed_sentiment",
        }
    }
}

impl fmt::Display for RiskSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a prediction may be used automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Accepted,
    NeedsHumanReview,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Accepted => "accepted",
            Decision::NeedsHumanReview => "needs_human_review",
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Decision::NeedsHumanReview)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
