//! Classification collaborator consumed by the decision policy.
//!
//! The policy only depends on [`TextClassifier`]; any backend that produces a
//! normalized per-label probability map can be plugged in.

use std::collections::BTreeMap;

use crate::policy::ClassificationResult;

pub const POSITIVE_LABEL: &str = "POSITIVE";
pub const NEGATIVE_LABEL: &str = "NEGATIVE";

/// Source of label probabilities for raw text.
pub trait TextClassifier: Send + Sync {
    fn model_name(&self) -> &str;

    fn classify(&self, text: &str) -> Result<ClassificationResult, ClassifierError>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    #[error("classifier produced no label scores")]
    EmptyOutput,
    #[error("classifier backend unavailable: {0}")]
    Unavailable(String),
}

/// Normalize raw logits into probabilities.
pub fn softmax(logits: &[(String, f64)]) -> BTreeMap<String, f64> {
    let max = logits
        .iter()
        .map(|(_, logit)| *logit)
        .fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<(String, f64)> = logits
        .iter()
        .map(|(label, logit)| (label.clone(), (logit - max).exp()))
        .collect();
    let total: f64 = exps.iter().map(|(_, value)| value).sum();

    exps.into_iter()
        .map(|(label, value)| (label, value / total))
        .collect()
}

const POSITIVE_TERMS: &[(&str, f64)] = &[
    ("love", 2.0),
    ("loved", 2.0),
    ("excellent", 2.0),
    ("perfect", 2.0),
    ("perfectly", 2.0),
    ("amazing", 2.0),
    ("fantastic", 2.0),
    ("wonderful", 2.0),
    ("great", 1.5),
    ("recommend", 1.5),
    ("happy", 1.5),
    ("good", 1.0),
    ("nice", 1.0),
    ("fast", 0.75),
    ("works", 0.75),
    ("okay", 0.5),
    ("fine", 0.5),
];

const NEGATIVE_TERMS: &[(&str, f64)] = &[
    ("hate", 2.0),
    ("hated", 2.0),
    ("awful", 2.0),
    ("terrible", 2.0),
    ("horrible", 2.0),
    ("worst", 2.0),
    ("broken", 1.5),
    ("bad", 1.5),
    ("poor", 1.5),
    ("disappointed", 1.5),
    ("disappointing", 1.5),
    ("slow", 1.0),
    ("late", 1.0),
    ("crushed", 1.0),
    ("weak", 1.0),
    ("expensive", 0.75),
];

const NEGATORS: &[&str] = &["not", "no", "never", "hardly", "don't", "doesn't", "isn't", "wasn't"];

/// Polarity weight counted when no term matches.
const NEUTRAL_PRIOR: f64 = 0.25;

/// Sharpens the logit gap before softmax. A lone mild term (weight 0.5)
/// must still clear a 0.7 confidence and a 0.2 margin.
const LOGIT_SCALE: f64 = 2.5;

/// Deterministic two-label sentiment scorer over weighted polarity terms.
///
/// Each matched term adds its weight to the positive or negative logit; a
/// negator within the two preceding tokens flips the polarity. The logits are
/// scaled by [`LOGIT_SCALE`] and turned into probabilities with [`softmax`].
#[derive(Debug, Clone, Default)]
pub struct LexiconSentimentClassifier;

impl LexiconSentimentClassifier {
    pub const MODEL_NAME: &'static str = "lexicon-sentiment-v1";

    pub fn new() -> Self {
        Self
    }

    fn logits(text: &str) -> (f64, f64) {
        let tokens: Vec<String> = text
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|token| !token.is_empty())
            .map(str::to_lowercase)
            .collect();

        let mut positive = NEUTRAL_PRIOR;
        let mut negative = NEUTRAL_PRIOR;

        for (index, token) in tokens.iter().enumerate() {
            let weight_of = |terms: &[(&str, f64)]| {
                terms
                    .iter()
                    .find(|(term, _)| *term == token.as_str())
                    .map(|(_, weight)| *weight)
            };

            let negated = tokens[index.saturating_sub(2)..index]
                .iter()
                .any(|previous| NEGATORS.contains(&previous.as_str()));

            if let Some(weight) = weight_of(POSITIVE_TERMS) {
                if negated {
                    negative += weight;
                } else {
                    positive += weight;
                }
            } else if let Some(weight) = weight_of(NEGATIVE_TERMS) {
                if negated {
                    positive += weight;
                } else {
                    negative += weight;
                }
            }
        }

        (positive * LOGIT_SCALE, negative * LOGIT_SCALE)
    }
}

impl TextClassifier for LexiconSentimentClassifier {
    fn model_name(&self) -> &str {
        Self::MODEL_NAME
    }

    fn classify(&self, text: &str) -> Result<ClassificationResult, ClassifierError> {
        let (positive, negative) = Self::logits(text);
        let scores = softmax(&[
            (POSITIVE_LABEL.to_string(), positive),
            (NEGATIVE_LABEL.to_string(), negative),
        ]);

        ClassificationResult::from_scores(scores).ok_or(ClassifierError::EmptyOutput)
    }
}
