use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    errors::{DomainError, DomainResult},
    models::{Tweet, User},
    repositories::{TweetEdit, TweetRepository, UserRepository},
};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> DomainResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn get(&self, id: &Uuid) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.user_id == *id).cloned())
    }

    async fn insert(&self, user: &User) -> DomainResult<()> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.user_id == user.user_id) {
            return Err(DomainError::AlreadyExists(format!("user {}", user.user_id)));
        }
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
            return Err(DomainError::AlreadyExists(format!("email {}", user.email)));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn replace(&self, user: &User) -> DomainResult<()> {
        let mut users = self.users.write().await;
        if users
            .iter()
            .any(|u| u.user_id != user.user_id && u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(DomainError::AlreadyExists(format!("email {}", user.email)));
        }
        match users.iter_mut().find(|u| u.user_id == user.user_id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound(format!("user {}", user.user_id))),
        }
    }

    async fn remove(&self, id: &Uuid) -> DomainResult<Option<User>> {
        let mut users = self.users.write().await;
        let index = users.iter().position(|u| u.user_id == *id);
        Ok(index.map(|i| users.remove(i)))
    }
}

#[derive(Default)]
pub struct InMemoryTweetRepository {
    tweets: Arc<RwLock<Vec<Tweet>>>,
}

impl InMemoryTweetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TweetRepository for InMemoryTweetRepository {
    async fn list(&self) -> DomainResult<Vec<Tweet>> {
        Ok(self.tweets.read().await.clone())
    }

    async fn get(&self, id: &Uuid) -> DomainResult<Option<Tweet>> {
        let tweets = self.tweets.read().await;
        Ok(tweets.iter().find(|t| t.tweet_id == *id).cloned())
    }

    async fn insert(&self, tweet: &Tweet) -> DomainResult<()> {
        let mut tweets = self.tweets.write().await;
        if tweets.iter().any(|t| t.tweet_id == tweet.tweet_id) {
            return Err(DomainError::AlreadyExists(format!("tweet {}", tweet.tweet_id)));
        }
        tweets.push(tweet.clone());
        Ok(())
    }

    async fn modify(&self, id: &Uuid, edit: TweetEdit<'_>) -> DomainResult<Tweet> {
        let mut tweets = self.tweets.write().await;
        let existing = tweets
            .iter_mut()
            .find(|t| t.tweet_id == *id)
            .ok_or_else(|| DomainError::NotFound(format!("tweet {id}")))?;
        let mut edited = existing.clone();
        edit(&mut edited)?;
        *existing = edited.clone();
        Ok(edited)
    }

    async fn remove(&self, id: &Uuid) -> DomainResult<Option<Tweet>> {
        let mut tweets = self.tweets.write().await;
        let index = tweets.iter().position(|t| t.tweet_id == *id);
        Ok(index.map(|i| tweets.remove(i)))
    }
}
