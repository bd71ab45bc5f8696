use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    errors::DomainResult,
    validation::{check_email, check_length},
};

pub const PASSWORD_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;

/// A registered user as kept in `users.json`.
///
/// The password is stored as given; it must never leave the process in a
/// response, which is why tweets embed an [`Author`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: Uuid,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
}

impl User {
    pub fn validate(&self) -> DomainResult<()> {
        check_email("email", &self.email)?;
        check_length("password", &self.password, PASSWORD_MIN_LENGTH, None)?;
        check_length("first_name", &self.first_name, 1, Some(NAME_MAX_LENGTH))?;
        check_length("last_name", &self.last_name, 1, Some(NAME_MAX_LENGTH))?;
        Ok(())
    }

    pub fn author(&self) -> Author {
        Author {
            user_id: self.user_id,
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            birth_date: self.birth_date,
        }
    }
}

/// Snapshot of a user's public fields, copied into every tweet they write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub user_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
}

impl Author {
    pub fn validate(&self) -> DomainResult<()> {
        check_email("by.email", &self.email)?;
        check_length("by.first_name", &self.first_name, 1, Some(NAME_MAX_LENGTH))?;
        check_length("by.last_name", &self.last_name, 1, Some(NAME_MAX_LENGTH))?;
        Ok(())
    }
}
