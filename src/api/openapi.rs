//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{bookings, health, rooms, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Staycation API",
        version = "1.0.0",
        description = "API for Staycation Hotel Booking System"
    ),
    paths(
        // Health
        health::root,
        health::health_check,
        health::readiness_check,
        // Rooms
        rooms::list_rooms,
        rooms::get_room,
        rooms::create_room,
        rooms::update_room,
        rooms::delete_room,
        // Bookings
        bookings::list_bookings,
        bookings::get_booking,
        bookings::create_booking,
        bookings::update_booking,
        bookings::delete_booking,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
    ),
    components(
        schemas(
            crate::models::room::Room,
            crate::models::room::RoomPayload,
            crate::models::booking::Booking,
            crate::models::booking::BookingPayload,
            crate::models::user::User,
            crate::models::user::UserPayload,
            crate::api::DeleteResponse,
            health::HealthResponse,
            health::ApiInfo,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health and service information"),
        (name = "rooms", description = "Room management"),
        (name = "bookings", description = "Booking management"),
        (name = "users", description = "User management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
