use thiserror::Error;

/// Everything that can go wrong talking to the upstream API.
///
/// Pages do not distinguish between the variants: any of them turns into the
/// page's generic failure message. The variants exist for logging.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} responded with HTTP {status}: {message}")]
    Status {
        endpoint: String,
        status: u16,
        message: String,
    },
    #[error("{endpoint} rejected the request: {message}")]
    Rejected { endpoint: String, message: String },
    #[error("unexpected payload from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Server-provided (or fallback) message, suitable for showing to a visitor.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } | ApiError::Rejected { message, .. } => {
                Some(message.as_str())
            }
            ApiError::Transport { .. } | ApiError::Decode { .. } => None,
        }
    }
}
