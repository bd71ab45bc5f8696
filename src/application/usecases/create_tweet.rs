use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{
    errors::DomainResult,
    models::{Author, Tweet},
    repositories::TweetRepository,
};

pub struct CreateTweetUseCase {
    repo: Arc<dyn TweetRepository>,
}

pub struct CreateTweetRequest {
    pub tweet_id: Option<Uuid>,
    pub content: String,
    pub by: Author,
}

impl CreateTweetUseCase {
    pub fn new(repo: Arc<dyn TweetRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: CreateTweetRequest) -> DomainResult<Tweet> {
        let tweet = Tweet::new(
            request.tweet_id.unwrap_or_else(Uuid::new_v4),
            request.content,
            request.by,
        );
        tweet.validate()?;

        self.repo.insert(&tweet).await?;
        info!(tweet_id = %tweet.tweet_id, author = %tweet.by.user_id, "tweet created");
        Ok(tweet)
    }
}
