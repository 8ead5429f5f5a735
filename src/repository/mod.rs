//! Repository layer for database operations

pub mod bookings;
pub mod rooms;
pub mod seed;
pub mod users;

use sqlx::{Pool, Sqlite};

use crate::error::AppResult;

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
    pub rooms: rooms::RoomsRepository,
    pub bookings: bookings::BookingsRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            rooms: rooms::RoomsRepository::new(pool.clone()),
            bookings: bookings::BookingsRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            pool,
        }
    }

    /// Insert the sample rows into any table that is still empty
    pub async fn seed_if_empty(&self) -> AppResult<()> {
        seed::seed_if_empty(&self.pool).await
    }

    /// Verify the database answers a round trip
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
