use thiserror::Error;

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

/// Failure of a single backend call.
///
/// The payloads are rendered strings so the error can live in UI state and be
/// compared in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered 401. Stored credentials have already been cleared
    /// and the caller must stop the current operation.
    #[error("session expired or credentials were rejected")]
    Unauthorized,

    /// Any other non-2xx answer.
    #[error("API error: {status}")]
    Transport { status: u16 },

    /// No response was received at all.
    #[error("network error: {0}")]
    Network(String),

    /// The body did not match the expected shape.
    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("invalid endpoint path: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}
