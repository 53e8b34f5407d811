use std::collections::BTreeMap;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::analysis::{analysis_router, AnalysisService, AnalysisSettings, AnalyzeRequest};
use crate::classifier::{ClassifierError, TextClassifier};
use crate::policy::ClassificationResult;

/// Returns the same canned result for every text.
pub(super) struct FixedClassifier {
    result: ClassificationResult,
}

impl FixedClassifier {
    pub(super) fn binary(label: &str, confidence: f64) -> Self {
        let other = if label == "POSITIVE" {
            "NEGATIVE"
        } else {
            "POSITIVE"
        };
        Self {
            result: ClassificationResult {
                label: label.to_string(),
                confidence,
                scores: BTreeMap::from([
                    (label.to_string(), confidence),
                    (other.to_string(), 1.0 - confidence),
                ]),
            },
        }
    }

    pub(super) fn single_label() -> Self {
        Self {
            result: ClassificationResult {
                label: "POSITIVE".to_string(),
                confidence: 1.0,
                scores: BTreeMap::from([("POSITIVE".to_string(), 1.0)]),
            },
        }
    }
}

impl TextClassifier for FixedClassifier {
    fn model_name(&self) -> &str {
        "fixed-test-model"
    }

    fn classify(&self, _text: &str) -> Result<ClassificationResult, ClassifierError> {
        Ok(self.result.clone())
    }
}

pub(super) struct OfflineClassifier;

impl TextClassifier for OfflineClassifier {
    fn model_name(&self) -> &str {
        "offline-test-model"
    }

    fn classify(&self, _text: &str) -> Result<ClassificationResult, ClassifierError> {
        Err(ClassifierError::Unavailable("model weights missing".to_string()))
    }
}

pub(super) fn service<C: TextClassifier + 'static>(classifier: C) -> AnalysisService<C> {
    AnalysisService::new(Arc::new(classifier), AnalysisSettings::default())
}

pub(super) fn request(text: &str) -> AnalyzeRequest {
    AnalyzeRequest {
        text: text.to_string(),
        confidence_threshold: None,
    }
}

pub(super) fn router_with<C: TextClassifier + 'static>(classifier: C) -> axum::Router {
    analysis_router(Arc::new(service(classifier)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
