//! Room management service

use crate::{
    error::{AppError, AppResult},
    models::room::{Room, RoomPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct RoomsService {
    repository: Repository,
}

impl RoomsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Room>> {
        self.repository.rooms.list().await
    }

    pub async fn get(&self, id: i64) -> AppResult<Room> {
        self.repository.rooms.get_by_id(id).await
    }

    /// Create a room.
    ///
    /// Ids are server-assigned. A payload carrying an explicit id engages the
    /// legacy compatibility path: the id is rejected when already taken and
    /// stored as-is otherwise.
    pub async fn create(&self, room: RoomPayload) -> AppResult<Room> {
        if let Some(id) = room.id {
            if self.repository.rooms.id_exists(id).await? {
                return Err(AppError::Conflict("ID already exists".to_string()));
            }
        }

        let created = self.repository.rooms.create(&room).await?;
        tracing::info!("Created room id={} title={:?}", created.id, created.title);
        Ok(created)
    }

    pub async fn update(&self, id: i64, room: RoomPayload) -> AppResult<Room> {
        self.repository.rooms.update(id, &room).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.rooms.delete(id).await?;
        tracing::info!("Deleted room id={}", id);
        Ok(())
    }
}
