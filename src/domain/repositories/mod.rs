use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    errors::DomainResult,
    models::{Tweet, User},
};

/// Storage of registered users.
///
/// `insert` must reject a duplicate `user_id` or `email` with
/// [`DomainError::AlreadyExists`](crate::domain::errors::DomainError::AlreadyExists);
/// `replace` must fail with `NotFound` when the id is unknown.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<User>>;
    async fn get(&self, id: &Uuid) -> DomainResult<Option<User>>;
    async fn insert(&self, user: &User) -> DomainResult<()>;
    async fn replace(&self, user: &User) -> DomainResult<()>;
    async fn remove(&self, id: &Uuid) -> DomainResult<Option<User>>;
}

/// Edits applied by [`TweetRepository::modify`]. An error leaves the stored
/// tweet untouched.
pub type TweetEdit<'a> = &'a (dyn Fn(&mut Tweet) -> DomainResult<()> + Send + Sync);

#[async_trait]
pub trait TweetRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<Tweet>>;
    async fn get(&self, id: &Uuid) -> DomainResult<Option<Tweet>>;
    async fn insert(&self, tweet: &Tweet) -> DomainResult<()>;
    /// Reads, edits and stores the tweet as one step, so concurrent edits
    /// apply one after the other. Fails with `NotFound` for an unknown id.
    async fn modify(&self, id: &Uuid, edit: TweetEdit<'_>) -> DomainResult<Tweet>;
    async fn remove(&self, id: &Uuid) -> DomainResult<Option<Tweet>>;
}
