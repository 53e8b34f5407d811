use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::classifier::{ClassifierError, TextClassifier};
use crate::policy::{
    AssessmentError, Decision, DecisionConfig, DecisionEngine, InvalidInput, RiskSignal,
    DEFAULT_CONFIDENCE_THRESHOLD,
};

/// Longest text accepted for a single analysis.
pub const DEFAULT_MAX_TEXT_CHARS: usize = 4000;

/// Inbound request to analyze a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default)]
    pub confidence_threshold: Option<f64>,
}

/// Machine- and human-readable outcome of an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub label: String,
    pub decision: Decision,
    pub confidence: f64,
    pub margin: f64,
    pub risk_score: usize,
    pub risk_signals: Vec<RiskSignal>,
    pub explanation: String,
    pub model_name: String,
    pub scores: BTreeMap<String, f64>,
}

/// Defaults applied by the service when a request leaves them out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisSettings {
    pub default_confidence_threshold: f64,
    pub max_text_chars: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            default_confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
        }
    }
}

/// Service composing the classifier, the decision policy and the explainer.
pub struct AnalysisService<C> {
    classifier: Arc<C>,
    settings: AnalysisSettings,
}

impl<C> AnalysisService<C>
where
    C: TextClassifier + 'static,
{
    pub fn new(classifier: Arc<C>, settings: AnalysisSettings) -> Self {
        Self {
            classifier,
            settings,
        }
    }

    pub fn model_name(&self) -> &str {
        self.classifier.model_name()
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Classify the request text and decide whether it can be automated.
    pub fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse, AnalysisError> {
        let text = request.text.trim();
        if text.is_empty() {
            return Err(InvalidInput::EmptyText.into());
        }

        let length = text.chars().count();
        if length > self.settings.max_text_chars {
            return Err(InvalidInput::TextTooLong {
                length,
                limit: self.settings.max_text_chars,
            }
            .into());
        }

        let threshold = request
            .confidence_threshold
            .unwrap_or(self.settings.default_confidence_threshold);
        let engine = DecisionEngine::new(DecisionConfig::with_confidence_threshold(threshold)?);

        let result = self.classifier.classify(text)?;
        let assessment = engine.assess(&result, text).map_err(|error| {
            if let AssessmentError::MalformedClassification(detail) = &error {
                warn!(model = self.model_name(), %detail, "classifier broke its output contract");
            }
            error
        })?;
        let explanation = engine.explain(&result, &assessment);

        debug!(
            label = %result.label,
            risk_score = assessment.risk_score(),
            decision = %assessment.decision,
            "analysis complete"
        );

        Ok(AnalyzeResponse {
            risk_score: assessment.risk_score(),
            decision: assessment.decision,
            margin: assessment.margin,
            risk_signals: assessment.risk_signals,
            label: result.label,
            confidence: result.confidence,
            scores: result.scores,
            explanation,
            model_name: self.model_name().to_string(),
        })
    }
}

/// Error raised by the analysis service.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

impl From<InvalidInput> for AnalysisError {
    fn from(value: InvalidInput) -> Self {
        Self::Assessment(AssessmentError::InvalidInput(value))
    }
}

impl AnalysisError {
    /// True when the caller sent something the service cannot accept.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AnalysisError::Assessment(AssessmentError::InvalidInput(_)))
    }
}
