//! Error handling for Function URL translation

use thiserror::Error;

/// Result type for Function URL translation operations
pub type Result<T> = std::result::Result<T, UrlwrapError>;

/// Errors that can occur while translating an inbound event into a request
///
/// Both variants abort the invocation before the handler runs. Nothing a
/// handler does produces an error through this type.
#[derive(Error, Debug)]
pub enum UrlwrapError {
    /// The event's request path is not a well-formed URI
    #[error("invalid request path: {0}")]
    InvalidPath(#[from] http::uri::InvalidUri),

    /// The event's request path contains a `%` not followed by two hex digits
    #[error("invalid percent-encoding in request path: {0}")]
    InvalidPercentEncoding(String),

    /// Request assembly failed (e.g. a malformed HTTP method string)
    #[error("HTTP error: {0}")]
    Http(#[from] http::Error),
}
