//! Data Transfer Objects (DTOs) for requests and responses.
//!
//! Field names are camelCase on the wire, matching the rest of the platform's
//! services.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    NewPayment, Payment, PaymentId, Reservation, ReservationId, Status, StatusId, local_datetime,
};
use crate::error::DomainError;

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to add, update or process a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Reservation being paid for (owned by the reservation service)
    pub reservation_id: ReservationId,
    /// Amount in smallest currency unit (e.g., céntimos)
    #[schema(example = 24100)]
    pub amount: i64,
    #[schema(example = "CARD")]
    pub payment_method: String,
    pub status_id: StatusId,
    #[serde(with = "local_datetime")]
    #[schema(value_type = String, example = "2024-05-01T18:30:00")]
    pub payment_date: NaiveDateTime,
}

impl TryFrom<PaymentRequest> for NewPayment {
    type Error = DomainError;

    fn try_from(req: PaymentRequest) -> Result<Self, Self::Error> {
        NewPayment::new(
            req.reservation_id,
            req.amount,
            req.payment_method,
            req.status_id,
            req.payment_date,
        )
    }
}

/// Status sub-view of a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status_id: StatusId,
    #[schema(example = "PENDING")]
    pub description: String,
}

impl From<Status> for StatusResponse {
    fn from(status: Status) -> Self {
        Self {
            status_id: status.id,
            description: status.description,
        }
    }
}

/// A payment as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub payment_id: PaymentId,
    /// Live reservation snapshot; null when it was not fetched or the
    /// reservation service could not provide it
    pub reservation: Option<Reservation>,
    /// Amount in smallest currency unit
    #[schema(example = 24100)]
    pub amount: i64,
    #[schema(example = "CARD")]
    pub payment_method: String,
    pub status: StatusResponse,
    #[serde(with = "local_datetime")]
    #[schema(value_type = String, example = "2024-05-01T18:30:00")]
    pub payment_date: NaiveDateTime,
}

impl PaymentResponse {
    /// Maps a stored payment plus an optional reservation snapshot.
    pub fn from_payment(payment: Payment, reservation: Option<Reservation>) -> Self {
        Self {
            payment_id: payment.id,
            reservation,
            amount: payment.amount,
            payment_method: payment.payment_method,
            status: payment.status.into(),
            payment_date: payment.payment_date,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Event DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    #[schema(example = "Lima Jazz Night")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "local_datetime")]
    #[schema(value_type = String, example = "2024-06-01T20:00:00")]
    pub start_date: NaiveDateTime,
    #[serde(with = "local_datetime")]
    #[schema(value_type = String, example = "2024-06-01T23:30:00")]
    pub end_date: NaiveDateTime,
    #[serde(default)]
    pub location: String,
    pub organizer_id: i64,
    pub category_id: i64,
    #[serde(default)]
    pub url: String,
}

impl EventRequest {
    /// Checks the request before an event is created from it.
    ///
    /// # Validation
    /// - Title cannot be blank
    /// - End date cannot be before start date
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Event title cannot be empty".into(),
            ));
        }
        if self.end_date < self.start_date {
            return Err(DomainError::ValidationError(
                "Event end date cannot be before its start date".into(),
            ));
        }
        Ok(())
    }
}
