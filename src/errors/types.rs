use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Upstream unreachable: {0}")]
    UpstreamUnreachable(String),

    #[error("Unexpected upstream status code: {0}")]
    UpstreamError(u16),

    #[error("Unauthorized")]
    UpstreamUnauthorized,

    #[error("Malformed upstream response: {0}")]
    MalformedUpstreamResponse(String),

    #[error("Failed to extract question, answer, and explanation")]
    ExtractionFailed,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
