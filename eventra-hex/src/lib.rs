//! # Eventra Hex
//!
//! Application service layer and HTTP adapters for the payment service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (orchestrates domain operations)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `outbound/` - HTTP clients for the reservation service and MercadoPago
//! - `openapi/` - OpenAPI document served by Swagger UI
//!
//! The service is generic over its ports (`PaymentStore`,
//! `ReservationClient`, `PaymentGateway`), allowing different adapters to be
//! injected.

pub mod inbound;
pub mod openapi;
pub mod outbound;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use outbound::{HttpReservationClient, MercadoPagoGateway};
pub use service::PaymentService;
