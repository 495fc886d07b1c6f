//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric setting could not be parsed.
    #[error("failed to parse {name} '{value}': {source}")]
    InvalidNumber {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Embedding endpoint is not an http(s) URL.
    #[error("invalid embedding URL '{value}': must start with http:// or https://")]
    InvalidUrl { value: String },

    /// A setting that must carry a value is blank.
    #[error("{name} must not be blank")]
    BlankValue { name: &'static str },

    /// A gate threshold lies outside `[0, 1]`.
    #[error("{name} must be between 0 and 1, got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f64 },

    /// The margin score is above the accept score, so margin acceptance can never apply.
    #[error("margin score {margin} must not exceed accept score {accept}")]
    ThresholdOrder { margin: f64, accept: f64 },

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}
