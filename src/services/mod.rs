//! Business logic services

pub mod bookings;
pub mod rooms;
pub mod users;

use crate::{error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub rooms: rooms::RoomsService,
    pub bookings: bookings::BookingsService,
    pub users: users::UsersService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            rooms: rooms::RoomsService::new(repository.clone()),
            bookings: bookings::BookingsService::new(repository.clone()),
            users: users::UsersService::new(repository.clone()),
            repository,
        }
    }

    /// Verify the storage backend answers a round trip
    pub async fn ping_storage(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
