//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use eventra_types::{
    AppError, PaymentGateway, PaymentId, PaymentRequest, PaymentStore, ReservationClient,
};

use crate::PaymentService;

/// Application state shared across handlers.
pub struct AppState<R: PaymentStore, C: ReservationClient, G: PaymentGateway> {
    pub service: PaymentService<R, C, G>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PaymentNotFound(_)
            | AppError::StatusNotFound(_)
            | AppError::ReservationNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Gateway(_) | AppError::Remote(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = ?self.0, "Request failed");
        }

        let body = serde_json::json!({
            "error": self.0.to_string(),
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

fn parse_payment_id(raw: &str) -> Result<PaymentId, ApiError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid payment ID: {raw}")).into())
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Record a payment.
#[tracing::instrument(skip(state, req), fields(reservation_id = %req.reservation_id))]
pub async fn add_payment<R: PaymentStore, C: ReservationClient, G: PaymentGateway>(
    State(state): State<Arc<AppState<R, C, G>>>,
    Json(req): Json<PaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let payment = state.service.add_payment(req).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

/// Create a checkout preference for a reservation.
#[tracing::instrument(skip(state, req), fields(reservation_id = %req.reservation_id))]
pub async fn process_payment<R: PaymentStore, C: ReservationClient, G: PaymentGateway>(
    State(state): State<Arc<AppState<R, C, G>>>,
    Json(req): Json<PaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let preference = state.service.process_payment(req).await?;
    Ok((StatusCode::CREATED, Json(preference)))
}

/// List all payments.
#[tracing::instrument(skip(state))]
pub async fn list_payments<R: PaymentStore, C: ReservationClient, G: PaymentGateway>(
    State(state): State<Arc<AppState<R, C, G>>>,
) -> Result<impl IntoResponse, ApiError> {
    let payments = state.service.list_payments().await?;
    Ok(Json(payments))
}

/// Get payment by ID.
#[tracing::instrument(skip(state), fields(payment_id = %id))]
pub async fn get_payment<R: PaymentStore, C: ReservationClient, G: PaymentGateway>(
    State(state): State<Arc<AppState<R, C, G>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let payment_id = parse_payment_id(&id)?;
    let payment = state.service.get_payment(payment_id).await?;
    Ok(Json(payment))
}

/// Update a payment.
#[tracing::instrument(skip(state, req), fields(payment_id = %id))]
pub async fn update_payment<R: PaymentStore, C: ReservationClient, G: PaymentGateway>(
    State(state): State<Arc<AppState<R, C, G>>>,
    Path(id): Path<String>,
    Json(req): Json<PaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let payment_id = parse_payment_id(&id)?;
    let payment = state.service.update_payment(payment_id, req).await?;
    Ok(Json(payment))
}

/// Delete a payment.
#[tracing::instrument(skip(state), fields(payment_id = %id))]
pub async fn delete_payment<R: PaymentStore, C: ReservationClient, G: PaymentGateway>(
    State(state): State<Arc<AppState<R, C, G>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let payment_id = parse_payment_id(&id)?;
    state.service.delete_payment(payment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List payment statuses.
#[tracing::instrument(skip(state))]
pub async fn list_statuses<R: PaymentStore, C: ReservationClient, G: PaymentGateway>(
    State(state): State<Arc<AppState<R, C, G>>>,
) -> Result<impl IntoResponse, ApiError> {
    let statuses = state.service.list_statuses().await?;
    Ok(Json(statuses))
}
