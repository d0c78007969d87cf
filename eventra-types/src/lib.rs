//! # Eventra Types
//!
//! Domain types and port traits for the event-reservation platform's payment
//! and event services. This crate has ZERO external IO dependencies - only
//! data structures, business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Payment, Status, the read-only Reservation view, checkout preferences
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    CHECKOUT_CURRENCY_ID, NewPayment, Payment, PaymentId, Preference, PreferenceItem,
    Reservation, ReservationId, ReservationUser, Status, StatusId, Ticket, TicketEvent,
    local_datetime,
};
pub use dto::*;
pub use error::{AppError, DomainError, RepoError};
pub use ports::{
    GatewayError, PaymentGateway, PaymentRepository, PaymentStore, RemoteError,
    ReservationClient, StatusRepository,
};
