use super::assessment::RiskAssessment;
use super::config::DecisionConfig;
use super::domain::{ClassificationResult, RiskSignal};

pub(crate) const DEFERRAL_RATIONALE: &str = "the system prefers deferring to a human over risking a confidently wrong automated decision";

/// Narrate an assessment as a single paragraph.
///
/// Reads fired factors and the thresholds they were judged against from
/// `assessment` only; nothing is re-derived from the raw scores or text.
/// `config` must be the configuration the assessment was produced with.
pub fn explain(
    result: &ClassificationResult,
    assessment: &RiskAssessment,
    config: &DecisionConfig,
) -> String {
    debug_assert_eq!(
        *config, assessment.config,
        "explanation requested with a config other than the assessment's"
    );
    let config = &assessment.config;
    let mut parts: Vec<String> = Vec::new();

    let confidence_relation = if assessment.has_signal(RiskSignal::LowConfidence) {
        "below"
    } else {
        "at or above"
    };
    parts.push(format!(
        "The system predicted {} with confidence {:.2}, {} the confidence threshold of {:.2}.",
        result.label,
        result.confidence,
        confidence_relation,
        config.confidence_threshold()
    ));

    if assessment.has_signal(RiskSignal::LowMargin) {
        parts.push(format!(
            "The margin between the top two labels is {:.2}, which is narrow compared to the stability threshold of {:.2}.",
            assessment.margin,
            config.margin_threshold()
        ));
    } else {
        parts.push(format!(
            "The margin between the top two labels is {:.2}, clear of the stability threshold of {:.2}.",
            assessment.margin,
            config.margin_threshold()
        ));
    }

    if assessment.risk_signals.is_empty() {
        parts.push(
            "No risk factors were detected, so automation is considered safe and the prediction is accepted."
                .to_string(),
        );
        return parts.join(" ");
    }

    let clauses: Vec<String> = assessment
        .risk_signals
        .iter()
        .map(|signal| signal_clause(*signal, assessment))
        .collect();
    parts.push(format!(
        "Risk factors detected: {}.",
        join_clauses(&clauses)
    ));

    let score = assessment.risk_score();
    let review_threshold = config.risk_score_threshold();
    if assessment.decision.is_deferred() {
        parts.push(format!(
            "The risk score of {score} meets the review threshold of {review_threshold}, so the case needs human review because {DEFERRAL_RATIONALE}."
        ));
    } else {
        parts.push(format!(
            "The risk score of {score} stays below the review threshold of {review_threshold}, so the prediction is accepted."
        ));
    }

    parts.join(" ")
}

fn signal_clause(signal: RiskSignal, assessment: &RiskAssessment) -> String {
    match signal {
        RiskSignal::LowConfidence => "confidence is below the configured threshold".to_string(),
        RiskSignal::LowMargin => {
            "the score margin between the top two labels is narrow".to_string()
        }
        RiskSignal::Ambiguity => {
            let cues = assessment.cues.cue_labels();
            if cues.is_empty() {
                "the text contains hedging, questions, or contrastive language".to_string()
            } else {
                format!("the text contains {}", join_clauses(&cues))
            }
        }
        RiskSignal::MixedSentiment => {
            "the text shows mixed or conflicting sentiment cues".to_string()
        }
    }
}

fn join_clauses<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|item| item.as_ref()).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}
