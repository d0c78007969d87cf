//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod gateway;
mod repository;
mod reservation;

pub use gateway::{GatewayError, PaymentGateway};
pub use repository::{PaymentRepository, PaymentStore, StatusRepository};
pub use reservation::{RemoteError, ReservationClient};
