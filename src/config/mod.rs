//! Configuration handling for the application.
//!
//! Every setting is read from an environment variable and falls back to a
//! development default. `Config::from_env` only fails when a variable is
//! present but cannot be parsed.

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Environment variable names. Public so tests and the binary can refer to them.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_APP_ENV: &str = "APP_ENV";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "FETCH_TIMEOUT_SECS";
pub const ENV_MAX_CONTENT_CHARS: &str = "MAX_CONTENT_CHARS";
pub const ENV_INFERENCE_API_URL: &str = "INFERENCE_API_URL";
pub const ENV_INFERENCE_API_TOKEN: &str = "INFERENCE_API_TOKEN";
pub const ENV_SUMMARIZATION_MODEL: &str = "SUMMARIZATION_MODEL";
pub const ENV_TRANSLATION_MODEL_PREFIX: &str = "TRANSLATION_MODEL_PREFIX";
pub const ENV_REMOTE_TIMEOUT_SECS: &str = "REMOTE_TIMEOUT_SECS";
pub const ENV_SUMMARY_KEYWORDS: &str = "SUMMARY_KEYWORDS";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

const ALL_VARS: [&str; 11] = [
    ENV_BIND_ADDR,
    ENV_APP_ENV,
    ENV_FETCH_TIMEOUT_SECS,
    ENV_MAX_CONTENT_CHARS,
    ENV_INFERENCE_API_URL,
    ENV_INFERENCE_API_TOKEN,
    ENV_SUMMARIZATION_MODEL,
    ENV_TRANSLATION_MODEL_PREFIX,
    ENV_REMOTE_TIMEOUT_SECS,
    ENV_SUMMARY_KEYWORDS,
    ENV_LOG_FORMAT,
];

/// Default development values used when environment variables are absent.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;
const DEFAULT_MAX_CONTENT_CHARS: usize = 8000;
const DEFAULT_INFERENCE_API_URL: &str = "https://api-inference.huggingface.co/models";
const DEFAULT_SUMMARIZATION_MODEL: &str = "facebook/bart-large-cnn";
const DEFAULT_TRANSLATION_MODEL_PREFIX: &str = "Helsinki-NLP/opus-mt-en-";
const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 20;

/// Deployment environment. Production hides error details from responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Settings for the remote inference service. Absent when no token is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceConfig {
    pub base_url: String,
    pub api_token: String,
    pub summarization_model: String,
    pub translation_model_prefix: String,
    pub timeout: Duration,
}

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    environment: Environment,
    fetch_timeout: Duration,
    max_content_chars: usize,
    inference: Option<InferenceConfig>,
    summary_keywords: Option<Vec<String>>,
    log_format: LogFormat,
}

impl Config {
    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let environment = match env::var(ENV_APP_ENV).ok().as_deref().map(str::trim) {
            None | Some("") | Some("development") | Some("dev") => Environment::Development,
            Some("production") | Some("prod") => Environment::Production,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    field: ENV_APP_ENV,
                    reason: format!("unknown environment '{}'", other),
                });
            }
        };

        let fetch_timeout = Duration::from_secs(parse_var(
            ENV_FETCH_TIMEOUT_SECS,
            DEFAULT_FETCH_TIMEOUT_SECS,
        )?);
        if fetch_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: ENV_FETCH_TIMEOUT_SECS,
                reason: "must be greater than zero".to_string(),
            });
        }

        let max_content_chars = parse_var(ENV_MAX_CONTENT_CHARS, DEFAULT_MAX_CONTENT_CHARS)?;
        if max_content_chars == 0 {
            return Err(ConfigError::InvalidValue {
                field: ENV_MAX_CONTENT_CHARS,
                reason: "must be greater than zero".to_string(),
            });
        }

        let inference = match non_empty_var(ENV_INFERENCE_API_TOKEN) {
            Some(api_token) => Some(InferenceConfig {
                base_url: non_empty_var(ENV_INFERENCE_API_URL)
                    .unwrap_or_else(|| DEFAULT_INFERENCE_API_URL.to_string()),
                api_token,
                summarization_model: non_empty_var(ENV_SUMMARIZATION_MODEL)
                    .unwrap_or_else(|| DEFAULT_SUMMARIZATION_MODEL.to_string()),
                translation_model_prefix: non_empty_var(ENV_TRANSLATION_MODEL_PREFIX)
                    .unwrap_or_else(|| DEFAULT_TRANSLATION_MODEL_PREFIX.to_string()),
                timeout: Duration::from_secs(parse_var(
                    ENV_REMOTE_TIMEOUT_SECS,
                    DEFAULT_REMOTE_TIMEOUT_SECS,
                )?),
            }),
            None => None,
        };

        let summary_keywords = non_empty_var(ENV_SUMMARY_KEYWORDS).map(|raw| {
            raw.split(',')
                .map(|word| word.trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect::<Vec<_>>()
        });

        let log_format = match non_empty_var(ENV_LOG_FORMAT).as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    field: ENV_LOG_FORMAT,
                    reason: format!("expected 'text' or 'json', got '{}'", other),
                });
            }
        };

        Ok(Self {
            bind_addr,
            environment,
            fetch_timeout,
            max_content_chars,
            inference,
            summary_keywords,
            log_format,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Total timeout for fetching an article page.
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    /// Character budget for normalized article content.
    pub fn max_content_chars(&self) -> usize {
        self.max_content_chars
    }

    /// Remote inference settings, `None` when remote services are disabled.
    pub fn inference(&self) -> Option<&InferenceConfig> {
        self.inference.as_ref()
    }

    /// Deployment-specific salience keywords, if overridden.
    pub fn summary_keywords(&self) -> Option<&[String]> {
        self.summary_keywords.as_deref()
    }

    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn with_inference(mut self, inference: InferenceConfig) -> Self {
        self.inference = Some(inference);
        self
    }
}

impl Default for Config {
    /// Development defaults, as `from_env` with no variables set.
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            environment: Environment::Development,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            max_content_chars: DEFAULT_MAX_CONTENT_CHARS,
            inference: None,
            summary_keywords: None,
            log_format: LogFormat::Text,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_var<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match non_empty_var(key) {
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            field: key,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
