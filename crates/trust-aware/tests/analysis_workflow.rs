//! End-to-end checks for the analysis service and its HTTP router using the
//! bundled lexicon classifier.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use trust_aware::analysis::{analysis_router, AnalysisService, AnalysisSettings, AnalyzeRequest};
use trust_aware::classifier::{LexiconSentimentClassifier, TextClassifier};
use trust_aware::policy::{Decision, RiskSignal};

fn service() -> AnalysisService<LexiconSentimentClassifier> {
    AnalysisService::new(
        Arc::new(LexiconSentimentClassifier::new()),
        AnalysisSettings::default(),
    )
}

async fn post_analyze(payload: Value) -> (StatusCode, Value) {
    let router = analysis_router(Arc::new(service()));
    let request = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).expect("serialize payload")))
        .expect("request builds");

    let response = router.oneshot(request).await.expect("router responds");
    let status = response.status();
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let value = serde_json::from_slice(&body).expect("json body");
    (status, value)
}

#[test]
fn lexicon_classifier_honours_the_policy_contract() {
    let classifier = LexiconSentimentClassifier::new();
    for text in [
        "I absolutely love this product.",
        "Terrible, broken, and late.",
        "The package arrived on Tuesday.",
    ] {
        let result = classifier.classify(text).expect("classification succeeds");
        let total: f64 = result.scores.values().sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(result.confidence, result.scores[&result.label]);
        assert!(result.scores.len() >= 2);
    }
}

#[test]
fn mixed_review_is_deferred_by_the_service() {
    let response = service()
        .analyze(AnalyzeRequest {
            text: "The product quality is great, but the customer service was awful.".to_string(),
            confidence_threshold: None,
        })
        .expect("analysis succeeds");

    assert_eq!(response.label, "NEGATIVE");
    assert_eq!(
        response.risk_signals,
        vec![RiskSignal::Ambiguity, RiskSignal::MixedSentiment]
    );
    assert_eq!(response.risk_score, 2);
    assert_eq!(response.decision, Decision::NeedsHumanReview);
}

#[test]
fn hedged_review_is_accepted_by_the_service() {
    let response = service()
        .analyze(AnalyzeRequest {
            text: "The experience was kind of okay.".to_string(),
            confidence_threshold: None,
        })
        .expect("analysis succeeds");

    assert_eq!(response.label, "POSITIVE");
    assert!(response.confidence >= 0.7);
    assert!(response.margin >= 0.2);
    assert_eq!(response.risk_signals, vec![RiskSignal::Ambiguity]);
    assert_eq!(response.risk_score, 1);
    assert_eq!(response.decision, Decision::Accepted);
}

#[tokio::test]
async fn analyze_endpoint_returns_the_response_contract() {
    let (status, body) = post_analyze(json!({
        "text": "I absolutely love this product, it works perfectly and I would recommend it to everyone."
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    for field in [
        "label",
        "decision",
        "confidence",
        "margin",
        "risk_score",
        "risk_signals",
        "explanation",
        "model_name",
        "scores",
    ] {
        assert!(body.get(field).is_some(), "missing field {field}");
    }
    assert_eq!(body["label"], json!("POSITIVE"));
    assert_eq!(body["decision"], json!("accepted"));
    assert_eq!(body["risk_signals"], json!([]));
    assert_eq!(body["risk_score"], json!(0));
    assert_eq!(body["model_name"], json!(LexiconSentimentClassifier::MODEL_NAME));
}

#[tokio::test]
async fn analyze_endpoint_rejects_blank_text() {
    let (status, body) = post_analyze(json!({ "text": "   " })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn analyze_endpoint_applies_request_threshold() {
    let (_, lenient) = post_analyze(json!({
        "text": "Good product overall.",
        "confidence_threshold": 0.0
    }))
    .await;
    let (_, strict) = post_analyze(json!({
        "text": "Good product overall.",
        "confidence_threshold": 1.0
    }))
    .await;

    let signals = |body: &Value| -> Vec<String> {
        body["risk_signals"]
            .as_array()
            .expect("signal list")
            .iter()
            .map(|signal| signal.as_str().expect("signal name").to_string())
            .collect()
    };

    assert!(!signals(&lenient).contains(&"low_confidence".to_string()));
    assert!(signals(&strict).contains(&"low_confidence".to_string()));
    assert_eq!(lenient["margin"], strict["margin"]);
}
