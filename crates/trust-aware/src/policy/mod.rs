//! Decision policy layered over a text classifier.
//!
//! The policy turns a classification and its source text into an
//! accept/defer decision plus a narrative explaining it. Every function here
//! is pure; callers pass an immutable [`DecisionConfig`] per evaluation.

pub mod assessment;
mod config;
pub mod domain;
mod error;
pub mod explanation;
pub mod signals;

#[cfg(test)]
mod tests;

pub use assessment::{assess, RiskAssessment};
pub use config::{
    DecisionConfig, DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_MARGIN_THRESHOLD, RISK_REVIEW_THRESHOLD,
};
pub use domain::{ClassificationResult, Decision, RiskSignal};
pub use error::{AssessmentError, InvalidInput, MalformedClassification};
pub use explanation::explain;
pub use signals::{extract, AmbiguitySignals};

/// Stateless evaluator binding the policy functions to one configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionEngine {
    config: DecisionConfig,
}

impl DecisionEngine {
    pub fn new(config: DecisionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    pub fn assess(
        &self,
        result: &ClassificationResult,
        text: &str,
    ) -> Result<RiskAssessment, AssessmentError> {
        assess(result, text, &self.config)
    }

    pub fn explain(&self, result: &ClassificationResult, assessment: &RiskAssessment) -> String {
        explain(result, assessment, &self.config)
    }
}
