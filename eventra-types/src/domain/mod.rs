//! Domain models for the payment service.

#[macro_use]
mod id;

pub mod datetime;
pub mod payment;
pub mod preference;
pub mod reservation;

pub use datetime as local_datetime;
pub use payment::{NewPayment, Payment, PaymentId, Status, StatusId};
pub use preference::{CHECKOUT_CURRENCY_ID, Preference, PreferenceItem};
pub use reservation::{Reservation, ReservationId, ReservationUser, Ticket, TicketEvent};
