//! Error types for the payment service.

use crate::domain::{PaymentId, ReservationId, StatusId};
use crate::ports::{GatewayError, RemoteError};

/// Domain-level errors (business rule violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Entity not found")]
    NotFound,
}

/// Application-level errors (for HTTP responses).
///
/// One variant per failure kind a caller can observe. Remote failures keep
/// the underlying error as their `source()`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Payment not found with id: {0}")]
    PaymentNotFound(PaymentId),

    #[error("Status not found with id: {0}")]
    StatusNotFound(StatusId),

    #[error("Reservation not found with id: {id}")]
    ReservationNotFound {
        id: ReservationId,
        #[source]
        source: RemoteError,
    },

    #[error("Payment gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Reservation service error: {0}")]
    Remote(#[from] RemoteError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Domain(DomainError::ValidationError(msg)) => AppError::BadRequest(msg),
            RepoError::Domain(e) => AppError::BadRequest(e.to_string()),
            RepoError::NotFound => AppError::Internal("Resource vanished during write".into()),
            RepoError::Database(e) => AppError::Internal(e),
        }
    }
}
