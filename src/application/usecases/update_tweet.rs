use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{
    errors::DomainResult,
    models::Tweet,
    repositories::TweetRepository,
};

pub struct UpdateTweetUseCase {
    repo: Arc<dyn TweetRepository>,
}

pub struct UpdateTweetRequest {
    pub tweet_id: Uuid,
    pub content: String,
}

impl UpdateTweetUseCase {
    pub fn new(repo: Arc<dyn TweetRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: UpdateTweetRequest) -> DomainResult<Tweet> {
        let content = request.content;
        let tweet = self
            .repo
            .modify(&request.tweet_id, &|tweet: &mut Tweet| {
                tweet.edit(content.clone());
                tweet.validate()
            })
            .await?;

        info!(tweet_id = %tweet.tweet_id, "tweet updated");
        Ok(tweet)
    }
}
