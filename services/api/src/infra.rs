use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use trust_aware::analysis::{AnalysisService, AnalysisSettings};
use trust_aware::classifier::LexiconSentimentClassifier;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) model_name: Arc<str>,
}

pub(crate) type DefaultAnalysisService = AnalysisService<LexiconSentimentClassifier>;

pub(crate) fn default_analysis_service(settings: AnalysisSettings) -> DefaultAnalysisService {
    AnalysisService::new(Arc::new(LexiconSentimentClassifier::new()), settings)
}

pub(crate) fn parse_threshold(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|err| format!("failed to parse '{raw}' as a number ({err})"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("threshold {value} must be within [0, 1]"))
    }
}
