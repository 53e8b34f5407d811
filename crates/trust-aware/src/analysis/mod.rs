//! Request-level plumbing around the decision policy: validation, the
//! classifier call and the HTTP surface.

pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use router::analysis_router;
pub use service::{
    AnalysisError, AnalysisService, AnalysisSettings, AnalyzeRequest, AnalyzeResponse,
    DEFAULT_MAX_TEXT_CHARS,
};
