//! User model and request types
//!
//! Users known to the Resource API carry no credentials. Login sessions are
//! owned entirely by the frontend and are not synchronized with this table.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// An account known to the Resource API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i64,
    /// Unique, compared case-sensitively
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

/// Request body for creating or replacing a user
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserPayload {
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
}
