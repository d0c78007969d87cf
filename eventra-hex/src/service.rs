//! Payment Application Service
//!
//! Orchestrates the payment store, the reservation service and the checkout
//! gateway through their ports. Contains NO infrastructure logic.

use eventra_types::{
    AppError, NewPayment, Payment, PaymentGateway, PaymentId, PaymentRequest, PaymentResponse,
    PaymentStore, Preference, PreferenceItem, Reservation, ReservationClient, ReservationId,
    Status, StatusId, StatusResponse,
};

/// Application service for payment operations.
///
/// Generic over its three ports, so adapters are injected at compile time:
/// - `R: PaymentStore` - local payment and status tables
/// - `C: ReservationClient` - the reservation microservice
/// - `G: PaymentGateway` - the hosted-checkout provider
pub struct PaymentService<R: PaymentStore, C: ReservationClient, G: PaymentGateway> {
    repo: R,
    reservations: C,
    gateway: G,
}

impl<R, C, G> PaymentService<R, C, G>
where
    R: PaymentStore,
    C: ReservationClient,
    G: PaymentGateway,
{
    /// Creates a new payment service from its adapters.
    pub fn new(repo: R, reservations: C, gateway: G) -> Self {
        Self {
            repo,
            reservations,
            gateway,
        }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Payment Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Records a new payment.
    ///
    /// The reservation must resolve remotely and the status must exist
    /// locally. The returned view carries no reservation snapshot.
    pub async fn add_payment(&self, req: PaymentRequest) -> Result<PaymentResponse, AppError> {
        let new = NewPayment::try_from(req)?;

        self.require_reservation(new.reservation_id).await?;
        let status = self.require_status(new.status_id).await?;

        let payment = self.repo.create_payment(new).await?;
        tracing::info!(
            payment_id = %payment.id,
            reservation_id = %payment.reservation_id,
            status = %status.description,
            "Payment recorded"
        );

        Ok(PaymentResponse::from_payment(payment, None))
    }

    /// Creates a checkout preference for the request's reservation.
    ///
    /// Nothing is persisted. The gateway's answer is returned untouched.
    pub async fn process_payment(&self, req: PaymentRequest) -> Result<Preference, AppError> {
        let reservation = self.require_reservation(req.reservation_id).await?;

        let item = PreferenceItem::for_reservation(&reservation);
        let preference = self.gateway.create_preference(vec![item]).await?;

        tracing::info!(
            reservation_id = %req.reservation_id,
            preference_id = %preference.id,
            "Checkout preference created"
        );
        Ok(preference)
    }

    /// Lists every payment, each with a best-effort reservation snapshot.
    pub async fn list_payments(&self) -> Result<Vec<PaymentResponse>, AppError> {
        let payments = self.repo.list_payments().await?;

        let mut responses = Vec::with_capacity(payments.len());
        for payment in payments {
            responses.push(self.to_response(payment).await);
        }
        Ok(responses)
    }

    /// Gets a payment by ID with a best-effort reservation snapshot.
    pub async fn get_payment(&self, id: PaymentId) -> Result<PaymentResponse, AppError> {
        let payment = self.find_payment(id).await?;
        Ok(self.to_response(payment).await)
    }

    /// Overwrites every mutable field of an existing payment.
    ///
    /// The reservation is fetched again after the write; if that fetch fails
    /// the call fails even though the new values are already stored.
    pub async fn update_payment(
        &self,
        id: PaymentId,
        req: PaymentRequest,
    ) -> Result<PaymentResponse, AppError> {
        let mut payment = self.find_payment(id).await?;
        let changes = NewPayment::try_from(req)?;

        self.require_reservation(changes.reservation_id).await?;
        let status = self.require_status(changes.status_id).await?;

        payment.apply(changes, status);
        let payment = self.repo.update_payment(&payment).await?;
        tracing::info!(payment_id = %payment.id, "Payment updated");

        let reservation = self.reservations.get_reservation(payment.reservation_id).await?;
        Ok(PaymentResponse::from_payment(payment, Some(reservation)))
    }

    /// Deletes a payment. No remote service is notified.
    pub async fn delete_payment(&self, id: PaymentId) -> Result<(), AppError> {
        if !self.repo.payment_exists(id).await? {
            return Err(AppError::PaymentNotFound(id));
        }

        if !self.repo.delete_payment(id).await? {
            return Err(AppError::PaymentNotFound(id));
        }
        tracing::info!(payment_id = %id, "Payment deleted");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Status Lookup
    // ─────────────────────────────────────────────────────────────────────────────

    /// Lists the payment status table.
    pub async fn list_statuses(&self) -> Result<Vec<StatusResponse>, AppError> {
        let statuses = self.repo.list_statuses().await?;
        Ok(statuses.into_iter().map(Into::into).collect())
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────────────

    async fn find_payment(&self, id: PaymentId) -> Result<Payment, AppError> {
        self.repo
            .get_payment(id)
            .await?
            .ok_or(AppError::PaymentNotFound(id))
    }

    async fn require_reservation(&self, id: ReservationId) -> Result<Reservation, AppError> {
        self.reservations
            .get_reservation(id)
            .await
            .map_err(|source| AppError::ReservationNotFound { id, source })
    }

    async fn require_status(&self, id: StatusId) -> Result<Status, AppError> {
        self.repo
            .get_status(id)
            .await?
            .ok_or(AppError::StatusNotFound(id))
    }

    /// Builds a response view; a failed reservation fetch leaves the
    /// reservation empty instead of failing.
    async fn to_response(&self, payment: Payment) -> PaymentResponse {
        let reservation = match self.reservations.get_reservation(payment.reservation_id).await {
            Ok(reservation) => Some(reservation),
            Err(e) => {
                tracing::error!(
                    payment_id = %payment.id,
                    reservation_id = %payment.reservation_id,
                    error = %e,
                    "Could not fetch reservation for payment"
                );
                None
            }
        };
        PaymentResponse::from_payment(payment, reservation)
    }
}
