use thiserror::Error;

/// Errors surfaced by mutating backend calls.
///
/// 504s map to [`ApiError::UpstreamUnavailable`] and are retryable by the
/// user; 401 means something different per endpoint (a version conflict on
/// upload, a bad token on delete); anything else carries the server's
/// message verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("server unreachable")]
    UpstreamUnavailable,

    #[error("version already exists")]
    Conflict,

    #[error("invalid token")]
    Unauthorized,

    #[error("{0}")]
    ServerRejected(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
