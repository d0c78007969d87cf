//! Shared database row types for SQLite and PostgreSQL.

use sqlx::FromRow;

use eventra_types::{Payment, PaymentId, RepoError, ReservationId, Status, StatusId};
use chrono::NaiveDateTime;

/// Column list shared by every payment read. The status table is LEFT JOINed:
/// a payment whose status row disappeared still reads, with an empty
/// description.
pub const SELECT_PAYMENTS: &str = r#"SELECT p.id, p.reservation_id, p.amount, p.payment_method, p.status_id,
       COALESCE(s.description, '') AS status_description, p.payment_date
FROM payments p
LEFT JOIN payment_status s ON s.id = p.status_id"#;

// ─────────────────────────────────────────────────────────────────────────────
// Database row structs (derive FromRow for automatic mapping)
// ─────────────────────────────────────────────────────────────────────────────

/// Payment row joined with its status description.
#[derive(FromRow)]
pub struct DbPayment {
    pub id: i64,
    pub reservation_id: i64,
    pub amount: i64,
    pub payment_method: String,
    pub status_id: i64,
    pub status_description: String,
    pub payment_date: NaiveDateTime,
}

/// Status lookup row.
#[derive(FromRow)]
pub struct DbStatus {
    pub id: i64,
    pub description: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Domain conversion
// ─────────────────────────────────────────────────────────────────────────────

impl DbPayment {
    /// Convert database row to domain Payment.
    pub fn into_domain(self) -> Payment {
        Payment::from_parts(
            PaymentId::new(self.id),
            ReservationId::new(self.reservation_id),
            self.amount,
            self.payment_method,
            Status::new(StatusId::new(self.status_id), self.status_description),
            self.payment_date,
        )
    }
}

impl DbStatus {
    pub fn into_domain(self) -> Status {
        Status::new(StatusId::new(self.id), self.description)
    }
}

/// Maps a sqlx failure into the repository error type.
pub fn db_err(e: sqlx::Error) -> RepoError {
    RepoError::Database(e.to_string())
}
