//! Repository port traits.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (Postgres, SQLite, in-memory) implement these traits.

use crate::domain::{NewPayment, Payment, PaymentId, Status, StatusId};
use crate::error::RepoError;

/// Store for payment records.
///
/// Each method is a single write or read against the local database; none of
/// them coordinates with remote services.
#[async_trait::async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
    /// Inserts a payment; the store assigns its id.
    async fn create_payment(&self, payment: NewPayment) -> Result<Payment, RepoError>;

    /// Gets a payment by ID.
    async fn get_payment(&self, id: PaymentId) -> Result<Option<Payment>, RepoError>;

    /// Lists all payments.
    async fn list_payments(&self) -> Result<Vec<Payment>, RepoError>;

    /// Overwrites every mutable field of an existing payment.
    ///
    /// Returns `RepoError::NotFound` when no row has the payment's id.
    async fn update_payment(&self, payment: &Payment) -> Result<Payment, RepoError>;

    /// Deletes a payment by ID. Returns `false` when nothing was deleted.
    async fn delete_payment(&self, id: PaymentId) -> Result<bool, RepoError>;

    /// Checks whether a payment exists.
    async fn payment_exists(&self, id: PaymentId) -> Result<bool, RepoError>;
}

/// Read-only lookup of payment statuses.
#[async_trait::async_trait]
pub trait StatusRepository: Send + Sync + 'static {
    /// Gets a status by ID.
    async fn get_status(&self, id: StatusId) -> Result<Option<Status>, RepoError>;

    /// Lists all statuses ordered by id.
    async fn list_statuses(&self) -> Result<Vec<Status>, RepoError>;
}

/// Everything the payment service needs from the local database.
pub trait PaymentStore: PaymentRepository + StatusRepository {}

impl<T: PaymentRepository + StatusRepository> PaymentStore for T {}
