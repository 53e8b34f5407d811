use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::service::{AnalysisService, AnalyzeRequest};
use crate::classifier::TextClassifier;

/// Router builder exposing the analysis endpoint.
pub fn analysis_router<C>(service: Arc<AnalysisService<C>>) -> Router
where
    C: TextClassifier + 'static,
{
    Router::new()
        .route("/analyze", post(analyze_handler::<C>))
        .with_state(service)
}

pub(crate) async fn analyze_handler<C>(
    State(service): State<Arc<AnalysisService<C>>>,
    axum::Json(request): axum::Json<AnalyzeRequest>,
) -> Response
where
    C: TextClassifier + 'static,
{
    match service.analyze(request) {
        Ok(response) => (StatusCode::OK, axum::Json(response)).into_response(),
        Err(error) if error.is_invalid_input() => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
