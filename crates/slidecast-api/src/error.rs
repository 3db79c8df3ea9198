use slidecast_types::Endpoint;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response; `message` is the body's `error` field if any
    #[error("backend returned {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Backend { status: u16, message: Option<String> },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Script generated but no playable audio came back
    #[error("no narration audio: {0}")]
    MissingAudio(String),

    #[error("failed to read {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// Text to show the user for a failed call to `endpoint`
    pub fn user_message(&self, endpoint: Endpoint) -> String {
        match self {
            ApiError::Backend {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Backend { message: None, .. } => {
                endpoint.backend_error_message().to_string()
            }
            ApiError::MissingAudio(message) => message.clone(),
            ApiError::Transport(_) | ApiError::Decode(_) | ApiError::File { .. } => {
                endpoint.transport_error_message().to_string()
            }
        }
    }
}
