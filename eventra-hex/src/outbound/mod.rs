//! HTTP Outbound Adapters
//!
//! reqwest-based clients for the services this one depends on.

mod mercadopago;
mod reservation;

pub use mercadopago::MercadoPagoGateway;
pub use reservation::HttpReservationClient;
