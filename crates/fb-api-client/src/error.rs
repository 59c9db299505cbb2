use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// 401/403 on an authenticated call. The session has been cleared.
    #[error("unauthorized (HTTP {status})")]
    Unauthorized { status: u16 },

    /// Any other non-2xx response; `message` is the backend's `error` field.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request rejected"))]
    Rejected { status: u16, message: Option<String> },

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Network and parse failures, reported to users as a connection problem.
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Decode(_))
    }

    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
