//! Booking endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppResult, ErrorResponse},
    models::booking::{Booking, BookingPayload},
};

use super::{ApiJson, DeleteResponse};

/// List all bookings
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = "bookings",
    responses(
        (status = 200, description = "List of bookings", body = [Booking])
    )
)]
pub async fn list_bookings(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Booking>>> {
    let bookings = state.services.bookings.list().await?;
    Ok(Json(bookings))
}

/// Get booking details by ID
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = "bookings",
    params(
        ("id" = i64, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking details", body = Booking),
        (status = 404, description = "Booking not found", body = ErrorResponse)
    )
)]
pub async fn get_booking(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Booking>> {
    let booking = state.services.bookings.get(id).await?;
    Ok(Json(booking))
}

/// Create a new booking
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "bookings",
    request_body = BookingPayload,
    responses(
        (status = 201, description = "Booking created", body = Booking),
        (status = 422, description = "Invalid input", body = ErrorResponse)
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    ApiJson(booking): ApiJson<BookingPayload>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let created = state.services.bookings.create(booking).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace an existing booking
#[utoipa::path(
    put,
    path = "/api/bookings/{id}",
    tag = "bookings",
    params(
        ("id" = i64, Path, description = "Booking ID")
    ),
    request_body = BookingPayload,
    responses(
        (status = 200, description = "Booking updated", body = Booking),
        (status = 404, description = "Booking not found", body = ErrorResponse),
        (status = 422, description = "Invalid input", body = ErrorResponse)
    )
)]
pub async fn update_booking(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    ApiJson(booking): ApiJson<BookingPayload>,
) -> AppResult<Json<Booking>> {
    let updated = state.services.bookings.update(id, booking).await?;
    Ok(Json(updated))
}

/// Delete a booking
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = "bookings",
    params(
        ("id" = i64, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking deleted", body = DeleteResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse)
    )
)]
pub async fn delete_booking(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DeleteResponse>> {
    state.services.bookings.delete(id).await?;
    Ok(Json(DeleteResponse::deleted()))
}
