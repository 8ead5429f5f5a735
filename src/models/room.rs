//! Room model and request types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A bookable room as stored and served by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Room {
    pub id: i64,
    pub title: String,
    pub price: f64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub room_type: Option<String>,
    pub capacity: Option<i64>,
    pub image_url: Option<String>,
    /// Caller-set free text, e.g. "available" or "Occupied"
    pub status: Option<String>,
    pub description: Option<String>,
}

/// Request body for creating or replacing a room.
///
/// `id` is normally omitted and assigned by the server. Supplying one on
/// create engages the legacy compatibility path: the id is stored as-is when
/// free and rejected with a conflict when already taken. Update ignores it in
/// favor of the path id.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RoomPayload {
    pub id: Option<i64>,
    pub title: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub room_type: Option<String>,
    pub capacity: Option<i64>,
    pub image_url: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
}
