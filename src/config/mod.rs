//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `RESOLVER_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::time::Duration;

use crate::constants::{DEFAULT_ITEM_FALLBACK, DEFAULT_PARTNER_FALLBACK};
use crate::decision::GateConfig;

/// Resolver configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `RESOLVER_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the OpenAI-compatible embedding API. Default: [`DEFAULT_EMBEDDING_URL`].
    pub embedding_url: String,

    /// Embedding model name. Default: [`DEFAULT_EMBEDDING_MODEL`].
    pub embedding_model: String,

    /// Bearer token for the embedding API. Falls back to `OPENAI_API_KEY`.
    pub embedding_api_key: Option<String>,

    /// Model used for arbitration. Default: [`DEFAULT_CHAT_MODEL`].
    pub chat_model: String,

    /// Code returned for unresolved sellers. Default: `V10000`.
    pub partner_fallback: String,

    /// Code returned for unresolved lines. Default: `E10000`.
    pub item_fallback: String,

    /// HTTP timeout for embedding requests. Default: 30 seconds.
    pub request_timeout: Duration,

    /// Decision gate thresholds.
    pub gate: GateConfig,
}

pub const DEFAULT_EMBEDDING_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-large";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4.1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

impl Default for Config {
    fn default() -> Self {
        Self {
            embedding_url: DEFAULT_EMBEDDING_URL.to_string(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            embedding_api_key: None,
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            partner_fallback: DEFAULT_PARTNER_FALLBACK.to_string(),
            item_fallback: DEFAULT_ITEM_FALLBACK.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            gate: GateConfig::default(),
        }
    }
}

impl Config {
    const ENV_EMBEDDING_URL: &'static str = "RESOLVER_EMBEDDING_URL";
    const ENV_EMBEDDING_MODEL: &'static str = "RESOLVER_EMBEDDING_MODEL";
    const ENV_EMBEDDING_API_KEY: &'static str = "RESOLVER_EMBEDDING_API_KEY";
    const ENV_OPENAI_API_KEY: &'static str = "OPENAI_API_KEY";
    const ENV_CHAT_MODEL: &'static str = "RESOLVER_CHAT_MODEL";
    const ENV_PARTNER_FALLBACK: &'static str = "RESOLVER_PARTNER_FALLBACK";
    const ENV_ITEM_FALLBACK: &'static str = "RESOLVER_ITEM_FALLBACK";
    const ENV_REQUEST_TIMEOUT_SECS: &'static str = "RESOLVER_REQUEST_TIMEOUT_SECS";
    const ENV_ACCEPT_SCORE: &'static str = "RESOLVER_ACCEPT_SCORE";
    const ENV_MARGIN_SCORE: &'static str = "RESOLVER_MARGIN_SCORE";
    const ENV_MIN_DELTA: &'static str = "RESOLVER_MIN_DELTA";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let embedding_url =
            Self::parse_string_from_env(Self::ENV_EMBEDDING_URL, defaults.embedding_url);
        let embedding_model =
            Self::parse_string_from_env(Self::ENV_EMBEDDING_MODEL, defaults.embedding_model);
        let embedding_api_key = Self::parse_optional_string_from_env(Self::ENV_EMBEDDING_API_KEY)
            .or_else(|| Self::parse_optional_string_from_env(Self::ENV_OPENAI_API_KEY));
        let chat_model = Self::parse_string_from_env(Self::ENV_CHAT_MODEL, defaults.chat_model);
        let partner_fallback =
            Self::parse_string_from_env(Self::ENV_PARTNER_FALLBACK, defaults.partner_fallback);
        let item_fallback =
            Self::parse_string_from_env(Self::ENV_ITEM_FALLBACK, defaults.item_fallback);
        let request_timeout = Duration::from_secs(Self::parse_u64_from_env(
            Self::ENV_REQUEST_TIMEOUT_SECS,
            defaults.request_timeout.as_secs(),
        ));

        let gate = GateConfig {
            accept_score: Self::parse_f64_from_env(
                Self::ENV_ACCEPT_SCORE,
                defaults.gate.accept_score,
            )?,
            margin_score: Self::parse_f64_from_env(
                Self::ENV_MARGIN_SCORE,
                defaults.gate.margin_score,
            )?,
            min_delta: Self::parse_f64_from_env(Self::ENV_MIN_DELTA, defaults.gate.min_delta)?,
        };

        Ok(Self {
            embedding_url,
            embedding_model,
            embedding_api_key,
            chat_model,
            partner_fallback,
            item_fallback,
            request_timeout,
            gate,
        })
    }

    /// Checks URLs, blank values and threshold ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.embedding_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl {
                value: self.embedding_url.clone(),
            });
        }

        for (name, value) in [
            (Self::ENV_EMBEDDING_MODEL, &self.embedding_model),
            (Self::ENV_CHAT_MODEL, &self.chat_model),
            (Self::ENV_PARTNER_FALLBACK, &self.partner_fallback),
            (Self::ENV_ITEM_FALLBACK, &self.item_fallback),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::BlankValue { name });
            }
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        for (name, value) in [
            (Self::ENV_ACCEPT_SCORE, self.gate.accept_score),
            (Self::ENV_MARGIN_SCORE, self.gate.margin_score),
            (Self::ENV_MIN_DELTA, self.gate.min_delta),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { name, value });
            }
        }

        if self.gate.margin_score > self.gate.accept_score {
            return Err(ConfigError::ThresholdOrder {
                margin: self.gate.margin_score,
                accept: self.gate.accept_score,
            });
        }

        Ok(())
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        Self::parse_optional_string_from_env(var_name).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    fn parse_f64_from_env(name: &'static str, default: f64) -> Result<f64, ConfigError> {
        match env::var(name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::InvalidNumber {
                    name,
                    value,
                    source: e,
                }),
            Err(_) => Ok(default),
        }
    }
}
