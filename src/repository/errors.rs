use thiserror::Error;

/// Failures of the listing endpoint.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to load: {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Invalid url: {0}")]
    InvalidUrl(String),
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Failures of the like-toggle endpoint.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LikeError {
    /// The endpoint answered 401 or 403.
    #[error("Authentication required")]
    AuthRequired,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to toggle like, status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(String),
}

pub type LikeResult<T> = Result<T, LikeError>;

impl From<url::ParseError> for FetchError {
    fn from(err: url::ParseError) -> Self {
        FetchError::InvalidUrl(err.to_string())
    }
}

impl From<url::ParseError> for LikeError {
    fn from(err: url::ParseError) -> Self {
        LikeError::Transport(format!("Invalid url: {err}"))
    }
}

impl LikeError {
    /// Maps an HTTP status of the toggle endpoint to an error, if any.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 | 403 => Some(LikeError::AuthRequired),
            other => Some(LikeError::Status(other)),
        }
    }
}
