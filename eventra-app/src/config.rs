//! Configuration loading from environment.

use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_RESERVATION_SERVICE_URL: &str = "http://localhost:8083";
const DEFAULT_MERCADOPAGO_API_URL: &str = "https://api.mercadopago.com";

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub reservation_service_url: String,
    pub mercadopago_api_url: String,
    pub mercadopago_access_token: String,
    /// OTLP collector; span export is off when unset.
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("PORT must be a port number, got {raw:?}: {e}"))?,
            None => DEFAULT_PORT,
        };

        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let mercadopago_access_token = lookup("MERCADOPAGO_ACCESS_TOKEN").ok_or_else(|| {
            anyhow::anyhow!("MERCADOPAGO_ACCESS_TOKEN environment variable is required")
        })?;

        Ok(Self {
            port,
            database_url,
            reservation_service_url: lookup("RESERVATION_SERVICE_URL")
                .unwrap_or_else(|| DEFAULT_RESERVATION_SERVICE_URL.to_string()),
            mercadopago_api_url: lookup("MERCADOPAGO_API_URL")
                .unwrap_or_else(|| DEFAULT_MERCADOPAGO_API_URL.to_string()),
            mercadopago_access_token,
            otlp_endpoint: lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|v| !v.is_empty()),
        })
    }
}
