//! Reservation service client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use eventra_types::{RemoteError, Reservation, ReservationClient, ReservationId};

/// Fetches reservations from the reservation microservice over HTTP.
#[derive(Clone)]
pub struct HttpReservationClient {
    base_url: String,
    client: Client,
}

impl HttpReservationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Uses an existing `reqwest::Client` (shares its connection pool).
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }
}

#[async_trait]
impl ReservationClient for HttpReservationClient {
    #[tracing::instrument(skip(self), fields(reservation_id = %id))]
    async fn get_reservation(&self, id: ReservationId) -> Result<Reservation, RemoteError> {
        let url = format!("{}/api/reservations/{}", self.base_url, id);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RemoteError::Unavailable(e.to_string()))?;

        match resp.status() {
            status if status.is_success() => resp
                .json::<Reservation>()
                .await
                .map_err(|e| RemoteError::Decode(e.to_string())),
            StatusCode::NOT_FOUND => Err(RemoteError::NotFound(id)),
            status => {
                let body = resp.text().await.unwrap_or_default();
                tracing::warn!(status = status.as_u16(), "Reservation service returned an error");
                Err(RemoteError::Status {
                    status: status.as_u16(),
                    message: body.chars().take(200).collect(),
                })
            }
        }
    }
}
