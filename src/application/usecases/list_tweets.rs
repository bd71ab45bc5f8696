use std::sync::Arc;

use crate::domain::{errors::DomainResult, models::Tweet, repositories::TweetRepository};

pub struct ListTweetsUseCase {
    repo: Arc<dyn TweetRepository>,
}

impl ListTweetsUseCase {
    pub fn new(repo: Arc<dyn TweetRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> DomainResult<Vec<Tweet>> {
        self.repo.list().await
    }
}
