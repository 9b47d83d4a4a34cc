use thiserror::Error;

/// Error taxonomy for room service operations
///
/// Every operation returns one of these four kinds; nothing is retried or
/// downgraded to a default value inside this crate. Retry and backoff policy
/// belong to the caller.
#[derive(Debug, Error)]
pub enum RoomServiceError {
    /// A local precondition failed before any request was issued.
    /// Carries the name of the offending field.
    #[error("validation failed for field `{field}`: {reason}")]
    Validation {
        field: &'static str,
        reason: &'static str,
    },

    /// The request never completed: connection, timeout, or TLS failure.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote API responded but signaled failure.
    /// Carries the HTTP status code and the remote message verbatim.
    #[error("remote API error (status {code}): {message}")]
    Remote { code: u16, message: String },

    /// The remote API reported success but the payload did not match the
    /// expected schema. This signals a contract violation, not user error.
    #[error("unexpected response payload: {message}")]
    Decode { message: String },
}

impl RoomServiceError {
    pub(crate) fn validation(field: &'static str, reason: &'static str) -> Self {
        RoomServiceError::Validation { field, reason }
    }
}

impl From<serde_json::Error> for RoomServiceError {
    fn from(err: serde_json::Error) -> Self {
        RoomServiceError::Decode {
            message: err.to_string(),
        }
    }
}
