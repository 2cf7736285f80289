use thiserror::Error;

/// Every failure a use case can report. Handlers map each kind to a status
/// and a localized message, see [`crate::errors::error_status`].
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Bad request")]
    BadRequest,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Not found")]
    NotFound,

    #[error("Conflict")]
    Conflict,

    #[error("Service unavailable")]
    ServiceUnavailable,

    #[error("Internal server error")]
    Internal,
}
