//! Error type for drawing commentary requests.

use thiserror::Error;

/// Errors produced while asking a model to describe a drawing.
///
/// None of these reach the user; they are logged and replaced by the
/// fallback reply.
#[derive(Debug, Error)]
pub enum CommentaryError {
    /// The API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The endpoint or model produced an unusable URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The response held no text.
    #[error("API response contained no text")]
    EmptyResponse,
}
