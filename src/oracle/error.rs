use thiserror::Error;

/// Failure of an external embedding or completion call.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    #[error("{endpoint} returned status {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },

    #[error("provider returned no content")]
    EmptyResponse,

    #[error("completion provider error: {0}")]
    Provider(String),
}

impl OracleError {
    /// Stable short name of the variant, reported alongside the message.
    pub fn kind(&self) -> &'static str {
        match self {
            OracleError::Transport { .. } => "Transport",
            OracleError::Status { .. } => "Status",
            OracleError::MalformedResponse { .. } => "MalformedResponse",
            OracleError::EmptyResponse => "EmptyResponse",
            OracleError::Provider(_) => "Provider",
        }
    }
}

impl From<genai::Error> for OracleError {
    fn from(err: genai::Error) -> Self {
        OracleError::Provider(err.to_string())
    }
}

pub type OracleResult<T> = Result<T, OracleError>;
