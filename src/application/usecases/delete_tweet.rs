use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{
    errors::{DomainError, DomainResult},
    models::Tweet,
    repositories::TweetRepository,
};

pub struct DeleteTweetUseCase {
    repo: Arc<dyn TweetRepository>,
}

impl DeleteTweetUseCase {
    pub fn new(repo: Arc<dyn TweetRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, tweet_id: Uuid) -> DomainResult<Tweet> {
        let tweet = self
            .repo
            .remove(&tweet_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("tweet {tweet_id}")))?;

        info!(%tweet_id, "tweet deleted");
        Ok(tweet)
    }
}
