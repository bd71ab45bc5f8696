use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{
    errors::{DomainError, DomainResult},
    models::User,
    repositories::UserRepository,
};

pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Removes the user and returns the record as it was stored.
    pub async fn execute(&self, user_id: Uuid) -> DomainResult<User> {
        let user = self
            .repo
            .remove(&user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user {user_id}")))?;

        info!(%user_id, "user deleted");
        Ok(user)
    }
}
