//! Hosted-checkout preference types.
//!
//! Field names follow the gateway's JSON (snake_case). A preference is created
//! by the gateway and handed back to the caller as-is; it is never stored.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::reservation::Reservation;

/// Currency code attached to every checkout line item (Peruvian sol).
pub const CHECKOUT_CURRENCY_ID: &str = "PEN";

/// One line item of a checkout preference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PreferenceItem {
    #[schema(example = "11")]
    pub id: String,
    #[schema(example = "Lima Jazz Night")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[schema(example = 2)]
    pub quantity: i32,
    #[schema(example = "PEN")]
    pub currency_id: String,
    /// Price per unit in major currency units
    #[schema(example = 120.5)]
    pub unit_price: f64,
}

impl PreferenceItem {
    /// Builds the single checkout line item for a reservation.
    ///
    /// Title comes from the event, description and unit price from the
    /// ticket, quantity from the reservation.
    pub fn for_reservation(reservation: &Reservation) -> Self {
        Self {
            id: reservation.reservation_id.to_string(),
            title: reservation.ticket.event.title.clone(),
            description: reservation.ticket.description.clone(),
            quantity: reservation.quantity,
            currency_id: CHECKOUT_CURRENCY_ID.to_string(),
            unit_price: reservation.ticket.price,
        }
    }
}

/// A checkout preference as returned by the gateway.
///
/// Fields this service does not model are kept in `extra` so the object can
/// be returned to callers unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preference {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init_point: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sandbox_init_point: Option<String>,
    #[serde(default)]
    pub items: Vec<PreferenceItem>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
