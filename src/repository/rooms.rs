//! Rooms repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::room::{Room, RoomPayload},
};

#[derive(Clone)]
pub struct RoomsRepository {
    pool: Pool<Sqlite>,
}

impl RoomsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all rooms in insertion order
    pub async fn list(&self) -> AppResult<Vec<Room>> {
        let rooms = sqlx::query_as::<_, Room>(
            r#"
            SELECT id, title, price, type, capacity, image_url, status, description
            FROM rooms
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rooms)
    }

    /// Get room by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Room> {
        sqlx::query_as::<_, Room>(
            r#"
            SELECT id, title, price, type, capacity, image_url, status, description
            FROM rooms
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Room not found".to_string()))
    }

    /// Check whether a room with the given id exists
    pub async fn id_exists(&self, id: i64) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM rooms WHERE id = ?1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// Create a new room. A caller-supplied id is stored as-is; otherwise the
    /// database assigns the next id.
    pub async fn create(&self, room: &RoomPayload) -> AppResult<Room> {
        let id = match room.id {
            Some(id) => {
                sqlx::query(
                    r#"
                    INSERT INTO rooms (id, title, price, type, capacity, image_url, status, description)
                    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                    "#,
                )
                .bind(id)
                .bind(&room.title)
                .bind(room.price)
                .bind(&room.room_type)
                .bind(room.capacity)
                .bind(&room.image_url)
                .bind(&room.status)
                .bind(&room.description)
                .execute(&self.pool)
                .await?;
                id
            }
            None => {
                sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO rooms (title, price, type, capacity, image_url, status, description)
                    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                    RETURNING id
                    "#,
                )
                .bind(&room.title)
                .bind(room.price)
                .bind(&room.room_type)
                .bind(room.capacity)
                .bind(&room.image_url)
                .bind(&room.status)
                .bind(&room.description)
                .fetch_one(&self.pool)
                .await?
            }
        };

        self.get_by_id(id).await
    }

    /// Replace every stored field of a room
    pub async fn update(&self, id: i64, room: &RoomPayload) -> AppResult<Room> {
        let result = sqlx::query(
            r#"
            UPDATE rooms
            SET title = ?1, price = ?2, type = ?3, capacity = ?4,
                image_url = ?5, status = ?6, description = ?7
            WHERE id = ?8
            "#,
        )
        .bind(&room.title)
        .bind(room.price)
        .bind(&room.room_type)
        .bind(room.capacity)
        .bind(&room.image_url)
        .bind(&room.status)
        .bind(&room.description)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Room not found".to_string()));
        }

        self.get_by_id(id).await
    }

    /// Delete a room permanently. Bookings referencing the room by title are
    /// left untouched.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Room not found".to_string()));
        }

        Ok(())
    }
}
