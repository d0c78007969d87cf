//! Reservation service port.
//!
//! Implementations call the reservation microservice; tests use in-memory
//! fakes.

use crate::domain::{Reservation, ReservationId};

/// Error type for reservation service calls.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("Reservation {0} does not exist")]
    NotFound(ReservationId),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Unexpected response: HTTP {status} - {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Port trait for the reservation service.
#[async_trait::async_trait]
pub trait ReservationClient: Send + Sync + 'static {
    /// Fetches a fresh snapshot of a reservation.
    async fn get_reservation(&self, id: ReservationId) -> Result<Reservation, RemoteError>;
}
