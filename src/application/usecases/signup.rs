use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::domain::{errors::DomainResult, models::User, repositories::UserRepository};

pub struct SignupUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct SignupRequest {
    pub user_id: Option<Uuid>,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
}

impl SignupUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: SignupRequest) -> DomainResult<User> {
        let user = User {
            user_id: request.user_id.unwrap_or_else(Uuid::new_v4),
            email: request.email,
            password: request.password,
            first_name: request.first_name,
            last_name: request.last_name,
            birth_date: request.birth_date,
        };
        user.validate()?;

        self.repo.insert(&user).await?;
        info!(user_id = %user.user_id, "user signed up");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::errors::DomainError, infrastructure::repositories::InMemoryUserRepository};

    fn request(email: &str) -> SignupRequest {
        SignupRequest {
            user_id: None,
            email: email.into(),
            password: "pass".into(),
            first_name: "Margaret".into(),
            last_name: "Hamilton".into(),
            birth_date: None,
        }
    }

    #[tokio::test]
    async fn signup_stores_exactly_one_user() -> Result<(), anyhow::Error> {
        let repo = Arc::new(InMemoryUserRepository::new());
        let usecase = SignupUseCase::new(repo.clone());

        let user = usecase.execute(request("margaret@example.com")).await?;

        let users = repo.list().await?;
        assert_eq!(users, vec![user]);
        Ok(())
    }

    #[tokio::test]
    async fn signup_keeps_a_provided_id() -> Result<(), anyhow::Error> {
        let usecase = SignupUseCase::new(Arc::new(InMemoryUserRepository::new()));
        let id = Uuid::new_v4();

        let user = usecase
            .execute(SignupRequest { user_id: Some(id), ..request("m@example.com") })
            .await?;
        assert_eq!(user.user_id, id);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_user_is_never_written() -> Result<(), anyhow::Error> {
        let repo = Arc::new(InMemoryUserRepository::new());
        let usecase = SignupUseCase::new(repo.clone());

        let result = usecase
            .execute(SignupRequest { password: "no".into(), ..request("m@example.com") })
            .await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert!(repo.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() -> Result<(), anyhow::Error> {
        let usecase = SignupUseCase::new(Arc::new(InMemoryUserRepository::new()));
        usecase.execute(request("same@example.com")).await?;

        let result = usecase.execute(request("same@example.com")).await;
        assert!(matches!(result, Err(DomainError::AlreadyExists(_))));
        Ok(())
    }
}
