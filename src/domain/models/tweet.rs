use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::Author;
use crate::domain::{errors::DomainResult, validation::check_length};

pub const CONTENT_MIN_LENGTH: usize = 5;
pub const CONTENT_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    pub tweet_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub by: Author,
}

impl Tweet {
    /// Builds a new tweet stamped with the current time.
    pub fn new(tweet_id: Uuid, content: String, by: Author) -> Self {
        Self {
            tweet_id,
            content,
            created_at: Utc::now(),
            updated_at: None,
            by,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        check_length(
            "content",
            &self.content,
            CONTENT_MIN_LENGTH,
            Some(CONTENT_MAX_LENGTH),
        )?;
        self.by.validate()
    }

    pub fn edit(&mut self, content: String) {
        self.content = content;
        self.updated_at = Some(Utc::now());
    }
}
