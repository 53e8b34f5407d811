use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::analysis::{AnalysisSettings, DEFAULT_MAX_TEXT_CHARS};
use crate::policy::{DecisionConfig, InvalidInput, DEFAULT_CONFIDENCE_THRESHOLD};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub policy: PolicyConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let confidence_threshold = match env::var("APP_CONFIDENCE_THRESHOLD") {
            Ok(raw) => {
                let value = raw
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| ConfigError::InvalidConfidenceThreshold { raw: raw.clone() })?;
                DecisionConfig::with_confidence_threshold(value)
                    .map_err(|source| ConfigError::ConfidenceThresholdOutOfRange { source })?;
                value
            }
            Err(_) => DEFAULT_CONFIDENCE_THRESHOLD,
        };

        let max_text_chars = match env::var("APP_MAX_TEXT_CHARS") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or(ConfigError::InvalidMaxTextChars)?,
            Err(_) => DEFAULT_MAX_TEXT_CHARS,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            policy: PolicyConfig {
                confidence_threshold,
                max_text_chars,
            },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Service-wide defaults for the decision policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicyConfig {
    pub confidence_threshold: f64,
    pub max_text_chars: usize,
}

impl PolicyConfig {
    pub fn analysis_settings(&self) -> AnalysisSettings {
        AnalysisSettings {
            default_confidence_threshold: self.confidence_threshold,
            max_text_chars: self.max_text_chars,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidConfidenceThreshold { raw: String },
    ConfidenceThresholdOutOfRange { source: InvalidInput },
    InvalidMaxTextChars,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidConfidenceThreshold { raw } => {
                write!(f, "APP_CONFIDENCE_THRESHOLD '{raw}' is not a number")
            }
            ConfigError::ConfidenceThresholdOutOfRange { .. } => {
                write!(f, "APP_CONFIDENCE_THRESHOLD must be within [0, 1]")
            }
            ConfigError::InvalidMaxTextChars => {
                write!(f, "APP_MAX_TEXT_CHARS must be a positive integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::ConfidenceThresholdOutOfRange { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidConfidenceThreshold { .. }
            | ConfigError::InvalidMaxTextChars => None,
        }
    }
}
