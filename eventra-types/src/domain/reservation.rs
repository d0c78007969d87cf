//! Read-only view of a reservation owned by the reservation service.
//!
//! Field names follow the reservation service's JSON (camelCase). Every read
//! is a fresh remote fetch; nothing here is cached or persisted.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

define_id!(
    /// Identifier of a reservation in the reservation service.
    ReservationId
);

/// Snapshot of a reservation as returned by the reservation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub reservation_id: ReservationId,
    #[serde(default)]
    pub user: Option<ReservationUser>,
    pub ticket: Ticket,
    pub quantity: i32,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "2024-04-20T10:00:00")]
    pub reservation_date: Option<NaiveDateTime>,
}

/// The user who holds the reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationUser {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// The ticket that was reserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[serde(default)]
    pub ticket_id: Option<i64>,
    pub event: TicketEvent,
    #[serde(default)]
    pub description: String,
    /// Unit price in major currency units, as priced by the events service
    #[schema(example = 120.5)]
    pub price: f64,
}

/// The event a ticket belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketEvent {
    #[serde(default)]
    pub event_id: Option<i64>,
    #[schema(example = "Lima Jazz Night")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}
