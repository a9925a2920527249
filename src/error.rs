use std::fmt;

/// Failures reported by the library operations.
///
/// `Config` and `Auth` abort whatever operation hits them. `Request` errors
/// coming from a single playlist, search page or enrichment fetch are
/// tolerated by the aggregation pipeline and only shrink its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Required configuration (credentials, API key) is missing.
    Config(String),
    /// The client-credentials token exchange failed.
    Auth(String),
    /// A downstream HTTP call failed.
    Request { status: Option<u16>, cause: String },
    /// An operation was invoked with invalid arguments or state.
    Precondition(String),
}

impl ApiError {
    pub fn request(status: Option<u16>, cause: impl Into<String>) -> Self {
        ApiError::Request {
            status,
            cause: cause.into(),
        }
    }

    /// Whether the error must stop the whole operation instead of being skipped.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ApiError::Config(_) | ApiError::Auth(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::Request {
                status: Some(401),
                ..
            }
        )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "configuration error: {}", msg),
            ApiError::Auth(msg) => write!(f, "authentication failed: {}", msg),
            ApiError::Request {
                status: Some(status),
                cause,
            } => write!(f, "request failed with status {}: {}", status, cause),
            ApiError::Request {
                status: None,
                cause,
            } => write!(f, "request failed: {}", cause),
            ApiError::Precondition(msg) => write!(f, "invalid request: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Request {
            status: err.status().map(|s| s.as_u16()),
            cause: err.to_string(),
        }
    }
}
