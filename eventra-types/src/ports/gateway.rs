//! Payment gateway port.

use crate::domain::{Preference, PreferenceItem};

/// Error type for hosted-checkout gateway calls.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The gateway answered with an error status.
    #[error("Gateway API error: HTTP {status} - {message}")]
    Api { status: u16, message: String },

    /// The request never produced a usable answer (network, TLS, decoding).
    #[error("Gateway client error: {0}")]
    Client(String),
}

/// Port trait for hosted-checkout payment gateways.
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
    /// Creates a checkout preference for the given line items.
    async fn create_preference(
        &self,
        items: Vec<PreferenceItem>,
    ) -> Result<Preference, GatewayError>;
}
