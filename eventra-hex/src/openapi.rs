//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use eventra_types::domain::{
    PaymentId, PreferenceItem, Reservation, ReservationId, ReservationUser, StatusId, Ticket,
    TicketEvent,
};
use eventra_types::dto::{EventRequest, PaymentRequest, PaymentResponse, StatusResponse};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Record a payment for a reservation
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = "payments",
    request_body = PaymentRequest,
    responses(
        (status = 201, description = "Payment recorded", body = PaymentResponse),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Reservation or status not found")
    )
)]
async fn add_payment() {}

/// Create a checkout preference for a reservation
#[utoipa::path(
    post,
    path = "/api/payments/process",
    tag = "payments",
    request_body = PaymentRequest,
    responses(
        (status = 201, description = "Preference created by the payment gateway", body = inline(serde_json::Value)),
        (status = 404, description = "Reservation not found"),
        (status = 502, description = "Payment gateway error")
    )
)]
async fn process_payment() {}

/// List all payments
#[utoipa::path(
    get,
    path = "/api/payments",
    tag = "payments",
    responses(
        (status = 200, description = "List of payments; reservation is null when it could not be fetched", body = Vec<PaymentResponse>)
    )
)]
async fn list_payments() {}

/// Get payment by ID
#[utoipa::path(
    get,
    path = "/api/payments/{id}",
    tag = "payments",
    params(
        ("id" = PaymentId, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Payment details", body = PaymentResponse),
        (status = 404, description = "Payment not found")
    )
)]
async fn get_payment() {}

/// Update a payment
#[utoipa::path(
    put,
    path = "/api/payments/{id}",
    tag = "payments",
    request_body = PaymentRequest,
    params(
        ("id" = PaymentId, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Payment updated", body = PaymentResponse),
        (status = 404, description = "Payment, reservation or status not found"),
        (status = 502, description = "Reservation service error after the update was stored")
    )
)]
async fn update_payment() {}

/// Delete a payment
#[utoipa::path(
    delete,
    path = "/api/payments/{id}",
    tag = "payments",
    params(
        ("id" = PaymentId, Path, description = "Payment ID")
    ),
    responses(
        (status = 204, description = "Payment deleted"),
        (status = 404, description = "Payment not found")
    )
)]
async fn delete_payment() {}

/// List payment statuses
#[utoipa::path(
    get,
    path = "/api/statuses",
    tag = "statuses",
    responses(
        (status = 200, description = "Payment status lookup table", body = Vec<StatusResponse>)
    )
)]
async fn list_statuses() {}

/// OpenAPI documentation for the Eventra Payments API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Eventra Payment Service API",
        version = "1.0.0",
        description = "Payment records for event reservations, plus hosted-checkout preferences.\n\nDates use the local `yyyy-MM-ddTHH:mm:ss` format. Amounts are in the smallest currency unit.",
        license(name = "MIT"),
    ),
    paths(
        health,
        add_payment,
        process_payment,
        list_payments,
        get_payment,
        update_payment,
        delete_payment,
        list_statuses,
    ),
    components(
        schemas(
            PaymentRequest,
            PaymentResponse,
            StatusResponse,
            EventRequest,
            Reservation,
            ReservationUser,
            Ticket,
            TicketEvent,
            PreferenceItem,
            PaymentId,
            ReservationId,
            StatusId,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payments", description = "Payment records and checkout"),
        (name = "statuses", description = "Payment status lookup"),
    )
)]
pub struct ApiDoc;
