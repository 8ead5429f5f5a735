//! Booking model and request types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A guest reservation.
///
/// The `room` field carries the room title as text, captured at booking time.
/// There is no foreign key to the rooms table: renaming or deleting a room
/// leaves existing bookings untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Booking {
    pub id: i64,
    pub guest_name: String,
    pub room: String,
    /// Free-form date string, e.g. "Dec 10, 2024"
    pub checkin: Option<String>,
    pub checkout: Option<String>,
    /// Caller-set free text, e.g. "Pending" or "Confirmed"
    pub status: Option<String>,
    pub nights: Option<i64>,
    pub total: Option<f64>,
}

/// Request body for creating or replacing a booking
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BookingPayload {
    pub guest_name: String,
    pub room: String,
    pub checkin: Option<String>,
    pub checkout: Option<String>,
    pub status: Option<String>,
    pub nights: Option<i64>,
    pub total: Option<f64>,
}
