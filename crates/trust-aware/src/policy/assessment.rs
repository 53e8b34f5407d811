use serde::Serialize;

use super::config::{validate_threshold, DecisionConfig};
use super::domain::{ClassificationResult, Decision, RiskSignal};
use super::error::{AssessmentError, MalformedClassification};
use super::signals::{self, AmbiguitySignals};

/// Allowed drift from 1.0 when summing a probability map.
pub const SCORE_SUM_TOLERANCE: f64 = 1e-3;

/// Allowed drift between the reported confidence and the top score.
pub const CONFIDENCE_TOLERANCE: f64 = 1e-6;

/// Outcome of running the decision policy over one classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub margin: f64,
    pub risk_signals: Vec<RiskSignal>,
    pub decision: Decision,
    pub cues: AmbiguitySignals,
    pub config: DecisionConfig,
}

impl RiskAssessment {
    pub fn risk_score(&self) -> usize {
        self.risk_signals.len()
    }

    pub fn has_signal(&self, signal: RiskSignal) -> bool {
        self.risk_signals.contains(&signal)
    }

    pub fn signal_names(&self) -> Vec<String> {
        self.risk_signals
            .iter()
            .map(|signal| signal.as_str().to_string())
            .collect()
    }
}

/// Combine classifier uncertainty and textual cues into an accept/defer call.
pub fn assess(
    result: &ClassificationResult,
    text: &str,
    config: &DecisionConfig,
) -> Result<RiskAssessment, AssessmentError> {
    validate_threshold(config.confidence_threshold())?;
    let margin = margin_of(result)?;
    let cues = signals::extract(text);

    let factors = [
        (
            RiskSignal::LowConfidence,
            result.confidence < config.confidence_threshold(),
        ),
        (RiskSignal::LowMargin, margin < config.margin_threshold()),
        (RiskSignal::Ambiguity, cues.ambiguity()),
        (RiskSignal::MixedSentiment, cues.mixed_sentiment()),
    ];

    let risk_signals: Vec<RiskSignal> = factors
        .into_iter()
        .filter_map(|(signal, fired)| fired.then_some(signal))
        .collect();

    let decision = if risk_signals.len() >= config.risk_score_threshold() {
        Decision::NeedsHumanReview
    } else {
        Decision::Accepted
    };

    Ok(RiskAssessment {
        margin,
        risk_signals,
        decision,
        cues,
        config: *config,
    })
}

/// Validate the classifier contract and return the top-1/top-2 gap.
fn margin_of(result: &ClassificationResult) -> Result<f64, MalformedClassification> {
    if result.scores.len() < 2 {
        return Err(MalformedClassification::TooFewLabels(result.scores.len()));
    }

    for (label, &value) in &result.scores {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(MalformedClassification::ProbabilityOutOfRange {
                label: label.clone(),
                value,
            });
        }
    }

    let total: f64 = result.scores.values().sum();
    if (total - 1.0).abs() > SCORE_SUM_TOLERANCE {
        return Err(MalformedClassification::UnnormalizedScores(total));
    }

    let labelled = *result
        .scores
        .get(&result.label)
        .ok_or_else(|| MalformedClassification::UnknownLabel(result.label.clone()))?;

    let mut ordered: Vec<f64> = result.scores.values().copied().collect();
    ordered.sort_by(|a, b| b.total_cmp(a));
    let (top1, top2) = (ordered[0], ordered[1]);

    for expected in [labelled, top1] {
        if (result.confidence - expected).abs() > CONFIDENCE_TOLERANCE {
            return Err(MalformedClassification::ConfidenceMismatch {
                reported: result.confidence,
                expected,
            });
        }
    }

    Ok((top1 - top2).max(0.0))
}
