use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::domain::{errors::DomainResult, models::User, repositories::UserRepository};

pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

/// Full replacement of a user's mutable fields; the id never changes.
pub struct UpdateUserRequest {
    pub user_id: Uuid,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
}

impl UpdateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: UpdateUserRequest) -> DomainResult<User> {
        let user = User {
            user_id: request.user_id,
            email: request.email,
            password: request.password,
            first_name: request.first_name,
            last_name: request.last_name,
            birth_date: request.birth_date,
        };
        user.validate()?;

        self.repo.replace(&user).await?;

        info!(user_id = %user.user_id, "user updated");
        Ok(user)
    }
}
