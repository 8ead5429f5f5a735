//! Booking management service

use crate::{
    error::AppResult,
    models::booking::{Booking, BookingPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
}

impl BookingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Booking>> {
        self.repository.bookings.list().await
    }

    pub async fn get(&self, id: i64) -> AppResult<Booking> {
        self.repository.bookings.get_by_id(id).await
    }

    pub async fn create(&self, booking: BookingPayload) -> AppResult<Booking> {
        let created = self.repository.bookings.create(&booking).await?;
        tracing::info!(
            "Created booking id={} guest={:?} room={:?}",
            created.id,
            created.guest_name,
            created.room
        );
        Ok(created)
    }

    pub async fn update(&self, id: i64, booking: BookingPayload) -> AppResult<Booking> {
        self.repository.bookings.update(id, &booking).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.bookings.delete(id).await?;
        tracing::info!("Deleted booking id={}", id);
        Ok(())
    }
}
