//! Remote Store Errors

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent, or no response came back
    #[error("network error: {0}")]
    Network(String),

    /// The store answered with a non-success status
    #[error("store rejected {method} {url}: HTTP {status}")]
    Store {
        method: &'static str,
        url: String,
        status: u16,
    },

    /// The response body was not the JSON we expected
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
