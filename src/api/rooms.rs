//! Room endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppResult, ErrorResponse},
    models::room::{Room, RoomPayload},
};

use super::{ApiJson, DeleteResponse};

/// List all rooms
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = "rooms",
    responses(
        (status = 200, description = "List of rooms", body = [Room])
    )
)]
pub async fn list_rooms(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Room>>> {
    let rooms = state.services.rooms.list().await?;
    Ok(Json(rooms))
}

/// Get room details by ID
#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    tag = "rooms",
    params(
        ("id" = i64, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Room details", body = Room),
        (status = 404, description = "Room not found", body = ErrorResponse)
    )
)]
pub async fn get_room(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Room>> {
    let room = state.services.rooms.get(id).await?;
    Ok(Json(room))
}

/// Create a new room
#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = "rooms",
    request_body = RoomPayload,
    responses(
        (status = 201, description = "Room created", body = Room),
        (status = 400, description = "Supplied id already exists", body = ErrorResponse),
        (status = 422, description = "Invalid input", body = ErrorResponse)
    )
)]
pub async fn create_room(
    State(state): State<crate::AppState>,
    ApiJson(room): ApiJson<RoomPayload>,
) -> AppResult<(StatusCode, Json<Room>)> {
    let created = state.services.rooms.create(room).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace an existing room
#[utoipa::path(
    put,
    path = "/api/rooms/{id}",
    tag = "rooms",
    params(
        ("id" = i64, Path, description = "Room ID")
    ),
    request_body = RoomPayload,
    responses(
        (status = 200, description = "Room updated", body = Room),
        (status = 404, description = "Room not found", body = ErrorResponse),
        (status = 422, description = "Invalid input", body = ErrorResponse)
    )
)]
pub async fn update_room(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    ApiJson(room): ApiJson<RoomPayload>,
) -> AppResult<Json<Room>> {
    let updated = state.services.rooms.update(id, room).await?;
    Ok(Json(updated))
}

/// Delete a room
#[utoipa::path(
    delete,
    path = "/api/rooms/{id}",
    tag = "rooms",
    params(
        ("id" = i64, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Room deleted", body = DeleteResponse),
        (status = 404, description = "Room not found", body = ErrorResponse)
    )
)]
pub async fn delete_room(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DeleteResponse>> {
    state.services.rooms.delete(id).await?;
    Ok(Json(DeleteResponse::deleted()))
}
