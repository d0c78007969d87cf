//! # Eventra Client SDK
//!
//! A typed Rust client for the eventra payments API.

use eventra_types::{PaymentId, PaymentRequest, PaymentResponse, Preference, StatusResponse};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status of an API error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Payments API client.
pub struct PaymentsClient {
    base_url: String,
    http: Client,
}

impl PaymentsClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Records a payment.
    pub async fn add_payment(&self, req: &PaymentRequest) -> Result<PaymentResponse, ClientError> {
        self.send(self.http.post(self.url("/api/payments")).json(req))
            .await
    }

    /// Creates a checkout preference for the request's reservation.
    pub async fn process_payment(&self, req: &PaymentRequest) -> Result<Preference, ClientError> {
        self.send(self.http.post(self.url("/api/payments/process")).json(req))
            .await
    }

    /// Lists all payments.
    pub async fn list_payments(&self) -> Result<Vec<PaymentResponse>, ClientError> {
        self.send(self.http.get(self.url("/api/payments"))).await
    }

    /// Gets a payment by ID.
    pub async fn get_payment(&self, id: PaymentId) -> Result<PaymentResponse, ClientError> {
        self.send(self.http.get(self.url(&format!("/api/payments/{}", id))))
            .await
    }

    /// Overwrites a payment.
    pub async fn update_payment(
        &self,
        id: PaymentId,
        req: &PaymentRequest,
    ) -> Result<PaymentResponse, ClientError> {
        self.send(
            self.http
                .put(self.url(&format!("/api/payments/{}", id)))
                .json(req),
        )
        .await
    }

    /// Deletes a payment.
    pub async fn delete_payment(&self, id: PaymentId) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(self.url(&format!("/api/payments/{}", id)))
            .send()
            .await?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(api_error(resp).await)
        }
    }

    /// Lists payment statuses.
    pub async fn list_statuses(&self) -> Result<Vec<StatusResponse>, ClientError> {
        self.send(self.http.get(self.url("/api/statuses"))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ClientError> {
        let resp = req.send().await?;
        if resp.status().is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(api_error(resp).await)
        }
    }
}

/// Reads the `error` field of a failed response, falling back to the raw body.
async fn api_error(resp: reqwest::Response) -> ClientError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or(body);
    ClientError::Api {
        status: status.as_u16(),
        message,
    }
}
