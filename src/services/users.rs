//! User management service

use crate::{
    error::{AppError, AppResult},
    models::user::{User, UserPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }

    pub async fn get(&self, id: i64) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }

    /// Create a user, rejecting usernames that are already taken
    pub async fn create(&self, user: UserPayload) -> AppResult<User> {
        if self.repository.users.username_exists(&user.username, None).await? {
            return Err(AppError::Conflict(format!(
                "Username '{}' already exists",
                user.username
            )));
        }

        let created = self.repository.users.create(&user).await?;
        tracing::info!("Created user id={} username={}", created.id, created.username);
        Ok(created)
    }

    /// Replace a user, keeping the username unique across the table
    pub async fn update(&self, id: i64, user: UserPayload) -> AppResult<User> {
        self.repository.users.get_by_id(id).await?;

        if self
            .repository
            .users
            .username_exists(&user.username, Some(id))
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Username '{}' already exists",
                user.username
            )));
        }

        self.repository.users.update(id, &user).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.users.delete(id).await?;
        tracing::info!("Deleted user id={}", id);
        Ok(())
    }
}
