/// Request-side problems the caller can fix and resubmit.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    #[error("text input cannot be empty")]
    EmptyText,
    #[error("text input is too long ({length} characters, limit is {limit})")]
    TextTooLong { length: usize, limit: usize },
    #[error("confidence threshold {0} must be within [0, 1]")]
    ThresholdOutOfRange(f64),
}

/// The classifier broke its output contract; the policy refuses to guess.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MalformedClassification {
    #[error("at least two label scores are required to compute a margin, got {0}")]
    TooFewLabels(usize),
    #[error("probability {value} for label '{label}' is outside [0, 1]")]
    ProbabilityOutOfRange { label: String, value: f64 },
    #[error("label probabilities sum to {0:.4}, expected 1.0")]
    UnnormalizedScores(f64),
    #[error("predicted label '{0}' is missing from the score map")]
    UnknownLabel(String),
    #[error("reported confidence {reported:.4} does not match the top score {expected:.4}")]
    ConfidenceMismatch { reported: f64, expected: f64 },
}

/// Failure raised by the risk assessment engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssessmentError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    #[error("malformed classification result: {0}")]
    MalformedClassification(#[from] MalformedClassification),
}
