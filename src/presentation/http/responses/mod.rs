use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use crate::{presentation::http::requests::LocationDto, presentation::models::HairColor};

/// A user as exposed over HTTP. There is no password field.
#[derive(Object, Debug)]
pub struct UserDto {
    pub user_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
}

#[derive(Object, Debug)]
pub struct TweetDto {
    pub tweet_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub by: UserDto,
}

#[derive(Object)]
pub struct GreetingDto {
    pub greeting: String,
}

#[derive(Object)]
pub struct PersonOutDto {
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
    pub hair_color: Option<HairColor>,
    pub is_married: Option<bool>,
    pub email: String,
}

#[derive(Object)]
pub struct PersonDetailDto {
    pub name: Option<String>,
    pub age: u8,
}

#[derive(Object)]
pub struct PersonFoundDto {
    pub person_id: u32,
    pub message: String,
}

#[derive(Object)]
pub struct PersonLocatedDto {
    pub person_id: u32,
    pub person: PersonOutDto,
    pub location: LocationDto,
}

#[derive(Object)]
pub struct LoginOutDto {
    pub username: String,
    pub message: String,
}

#[derive(Object)]
pub struct ContactReceivedDto {
    pub email: String,
    pub user_agent: Option<String>,
    pub ads: Option<String>,
}

#[derive(Object)]
pub struct ImageInfoDto {
    pub filename: String,
    pub format: String,
    pub size_kb: f64,
}

#[derive(Object)]
pub struct AgeCheckDto {
    pub age: u32,
    pub message: String,
}
