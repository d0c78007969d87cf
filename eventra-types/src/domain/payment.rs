//! Payment domain model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::reservation::ReservationId;
use crate::error::DomainError;

define_id!(
    /// Unique identifier for a Payment, assigned by the store.
    PaymentId
);

define_id!(
    /// Identifier of a row in the payment status lookup table.
    StatusId
);

/// A payment status from the lookup table (e.g. PENDING, COMPLETED).
///
/// Read-only from the payment service's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Status {
    pub id: StatusId,
    #[schema(example = "PENDING")]
    pub description: String,
}

impl Status {
    pub fn new(id: StatusId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
        }
    }
}

/// Validated field set for creating or overwriting a payment.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub reservation_id: ReservationId,
    /// Amount in smallest currency unit
    pub amount: i64,
    pub payment_method: String,
    pub status_id: StatusId,
    pub payment_date: NaiveDateTime,
}

impl NewPayment {
    /// Builds a payment field set.
    ///
    /// # Validation
    /// - Amount cannot be negative
    /// - Payment method cannot be blank
    pub fn new(
        reservation_id: ReservationId,
        amount: i64,
        payment_method: String,
        status_id: StatusId,
        payment_date: NaiveDateTime,
    ) -> Result<Self, DomainError> {
        if amount < 0 {
            return Err(DomainError::NegativeAmount);
        }
        if payment_method.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Payment method cannot be empty".into(),
            ));
        }

        Ok(Self {
            reservation_id,
            amount,
            payment_method,
            status_id,
            payment_date,
        })
    }
}

/// A stored payment record.
///
/// The reservation is referenced by id only; it is owned by the reservation
/// service and never checked by a database constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub reservation_id: ReservationId,
    /// Amount in smallest currency unit
    pub amount: i64,
    pub payment_method: String,
    pub status: Status,
    pub payment_date: NaiveDateTime,
}

impl Payment {
    /// Reconstructs a payment from database fields.
    pub fn from_parts(
        id: PaymentId,
        reservation_id: ReservationId,
        amount: i64,
        payment_method: String,
        status: Status,
        payment_date: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            reservation_id,
            amount,
            payment_method,
            status,
            payment_date,
        }
    }

    /// Overwrites every mutable field in place. The identity is kept.
    pub fn apply(&mut self, changes: NewPayment, status: Status) {
        self.reservation_id = changes.reservation_id;
        self.amount = changes.amount;
        self.payment_method = changes.payment_method;
        self.status = status;
        self.payment_date = changes.payment_date;
    }
}
