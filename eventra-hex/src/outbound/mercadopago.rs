//! MercadoPago checkout preferences client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use eventra_types::{GatewayError, PaymentGateway, Preference, PreferenceItem};

/// Creates checkout preferences through the MercadoPago REST API.
#[derive(Clone)]
pub struct MercadoPagoGateway {
    base_url: String,
    access_token: String,
    client: Client,
}

#[derive(Serialize)]
struct PreferenceRequest<'a> {
    items: &'a [PreferenceItem],
}

impl MercadoPagoGateway {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self::with_client(base_url, access_token, Client::new())
    }

    /// Uses an existing `reqwest::Client` (shares its connection pool).
    pub fn with_client(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            client,
        }
    }
}

/// Pulls the human-readable message out of an error body, falling back to
/// the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.chars().take(200).collect())
}

#[async_trait]
impl PaymentGateway for MercadoPagoGateway {
    #[tracing::instrument(skip(self, items), fields(items = items.len()))]
    async fn create_preference(
        &self,
        items: Vec<PreferenceItem>,
    ) -> Result<Preference, GatewayError> {
        let url = format!("{}/checkout/preferences", self.base_url);

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&PreferenceRequest { items: &items })
            .send()
            .await
            .map_err(|e| GatewayError::Client(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Checkout preference rejected");
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        resp.json::<Preference>()
            .await
            .map_err(|e| GatewayError::Client(e.to_string()))
    }
}
