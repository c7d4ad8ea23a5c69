use thiserror::Error;

use crate::list::PageInvariantError;

/// Transport-level failure taxonomy for backend calls.
///
/// Zero results is never an error: an empty page comes back as a successful
/// `Page` with `total_pages == 0`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (DNS, connect, timeout).
    #[error("backend unreachable: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("backend returned status {status}")]
    Server { status: u16 },

    /// The response body did not match the expected shape.
    #[error("malformed backend response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Server {
                status: status.as_u16(),
            }
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<PageInvariantError> for ApiError {
    fn from(err: PageInvariantError) -> Self {
        ApiError::Decode(err.to_string())
    }
}
