//! Bookings repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::booking::{Booking, BookingPayload},
};

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Sqlite>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all bookings in insertion order
    pub async fn list(&self) -> AppResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, guest_name, room, checkin, checkout, status, nights, total
            FROM bookings
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    /// Get booking by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, guest_name, room, checkin, checkout, status, nights, total
            FROM bookings
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))
    }

    /// Create a new booking with a database-assigned id
    pub async fn create(&self, booking: &BookingPayload) -> AppResult<Booking> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO bookings (guest_name, room, checkin, checkout, status, nights, total)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            RETURNING id
            "#,
        )
        .bind(&booking.guest_name)
        .bind(&booking.room)
        .bind(&booking.checkin)
        .bind(&booking.checkout)
        .bind(&booking.status)
        .bind(booking.nights)
        .bind(booking.total)
        .fetch_one(&self.pool)
        .await?;

        self.get_by_id(id).await
    }

    /// Replace every stored field of a booking
    pub async fn update(&self, id: i64, booking: &BookingPayload) -> AppResult<Booking> {
        let result = sqlx::query(
            r#"
            UPDATE bookings
            SET guest_name = ?1, room = ?2, checkin = ?3, checkout = ?4,
                status = ?5, nights = ?6, total = ?7
            WHERE id = ?8
            "#,
        )
        .bind(&booking.guest_name)
        .bind(&booking.room)
        .bind(&booking.checkin)
        .bind(&booking.checkout)
        .bind(&booking.status)
        .bind(booking.nights)
        .bind(booking.total)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Booking not found".to_string()));
        }

        self.get_by_id(id).await
    }

    /// Delete a booking permanently
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Booking not found".to_string()));
        }

        Ok(())
    }
}
