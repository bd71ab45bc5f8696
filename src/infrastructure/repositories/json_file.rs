use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    domain::{
        errors::{DomainError, DomainResult},
        models::{Tweet, User},
        repositories::{TweetEdit, TweetRepository, UserRepository},
    },
    infrastructure::storage::RecordStore,
};

pub const USERS_FILE: &str = "users.json";
pub const TWEETS_FILE: &str = "tweets.json";

pub struct JsonFileUserRepository {
    store: RecordStore<User>,
}

impl JsonFileUserRepository {
    /// Opens `users.json` inside `data_dir`, creating it when missing.
    pub async fn open(data_dir: &Path) -> DomainResult<Arc<Self>> {
        let store = RecordStore::init(data_dir.join(USERS_FILE)).await?;
        Ok(Arc::new(Self { store }))
    }

    pub fn from_store(store: RecordStore<User>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for JsonFileUserRepository {
    async fn list(&self) -> DomainResult<Vec<User>> {
        Ok(self.store.list_all().await?)
    }

    async fn get(&self, id: &Uuid) -> DomainResult<Option<User>> {
        let users = self.store.list_all().await?;
        Ok(users.into_iter().find(|u| u.user_id == *id))
    }

    async fn insert(&self, user: &User) -> DomainResult<()> {
        self.store
            .append(user.clone(), |users, user| -> DomainResult<()> {
                if users.iter().any(|u| u.user_id == user.user_id) {
                    return Err(DomainError::AlreadyExists(format!("user {}", user.user_id)));
                }
                if users.iter().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
                    return Err(DomainError::AlreadyExists(format!("email {}", user.email)));
                }
                Ok(())
            })
            .await
    }

    async fn replace(&self, user: &User) -> DomainResult<()> {
        self.store
            .update(|users| -> DomainResult<()> {
                if users
                    .iter()
                    .any(|u| u.user_id != user.user_id && u.email.eq_ignore_ascii_case(&user.email))
                {
                    return Err(DomainError::AlreadyExists(format!("email {}", user.email)));
                }
                let existing = users
                    .iter_mut()
                    .find(|u| u.user_id == user.user_id)
                    .ok_or_else(|| DomainError::NotFound(format!("user {}", user.user_id)))?;
                *existing = user.clone();
                Ok(())
            })
            .await
    }

    async fn remove(&self, id: &Uuid) -> DomainResult<Option<User>> {
        self.store
            .update(|users| -> DomainResult<Option<User>> {
                let index = users.iter().position(|u| u.user_id == *id);
                Ok(index.map(|i| users.remove(i)))
            })
            .await
    }
}

pub struct JsonFileTweetRepository {
    store: RecordStore<Tweet>,
}

impl JsonFileTweetRepository {
    /// Opens `tweets.json` inside `data_dir`, creating it when missing.
    pub async fn open(data_dir: &Path) -> DomainResult<Arc<Self>> {
        let store = RecordStore::init(data_dir.join(TWEETS_FILE)).await?;
        Ok(Arc::new(Self { store }))
    }
}

#[async_trait]
impl TweetRepository for JsonFileTweetRepository {
    async fn list(&self) -> DomainResult<Vec<Tweet>> {
        Ok(self.store.list_all().await?)
    }

    async fn get(&self, id: &Uuid) -> DomainResult<Option<Tweet>> {
        let tweets = self.store.list_all().await?;
        Ok(tweets.into_iter().find(|t| t.tweet_id == *id))
    }

    async fn insert(&self, tweet: &Tweet) -> DomainResult<()> {
        self.store
            .append(tweet.clone(), |tweets, tweet| -> DomainResult<()> {
                if tweets.iter().any(|t| t.tweet_id == tweet.tweet_id) {
                    return Err(DomainError::AlreadyExists(format!("tweet {}", tweet.tweet_id)));
                }
                Ok(())
            })
            .await
    }

    async fn modify(&self, id: &Uuid, edit: TweetEdit<'_>) -> DomainResult<Tweet> {
        self.store
            .update(|tweets| -> DomainResult<Tweet> {
                let existing = tweets
                    .iter_mut()
                    .find(|t| t.tweet_id == *id)
                    .ok_or_else(|| DomainError::NotFound(format!("tweet {id}")))?;
                let mut edited = existing.clone();
                edit(&mut edited)?;
                *existing = edited.clone();
                Ok(edited)
            })
            .await
    }

    async fn remove(&self, id: &Uuid) -> DomainResult<Option<Tweet>> {
        self.store
            .update(|tweets| -> DomainResult<Option<Tweet>> {
                let index = tweets.iter().position(|t| t.tweet_id == *id);
                Ok(index.map(|i| tweets.remove(i)))
            })
            .await
    }
}
