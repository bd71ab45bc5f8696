use chrono::NaiveDate;
use poem_openapi::{
    Multipart, Object,
    types::{Email, multipart::Upload},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::presentation::models::HairColor;

#[derive(Object, Debug)]
pub struct SignupRequestDto {
    /// Generated by the server when omitted.
    pub user_id: Option<Uuid>,
    pub email: Email,
    #[oai(validator(min_length = 3))]
    pub password: String,
    #[oai(validator(min_length = 1, max_length = 255))]
    pub first_name: String,
    #[oai(validator(min_length = 1, max_length = 255))]
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
}

#[derive(Object, Debug)]
pub struct UpdateUserRequestDto {
    pub email: Email,
    #[oai(validator(min_length = 3))]
    pub password: String,
    #[oai(validator(min_length = 1, max_length = 255))]
    pub first_name: String,
    #[oai(validator(min_length = 1, max_length = 255))]
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
}

/// The author as sent by the client. Any extra field, a password
/// included, is ignored.
#[derive(Object, Debug)]
pub struct AuthorDto {
    pub user_id: Uuid,
    pub email: Email,
    #[oai(validator(min_length = 1, max_length = 255))]
    pub first_name: String,
    #[oai(validator(min_length = 1, max_length = 255))]
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
}

#[derive(Object, Debug)]
pub struct CreateTweetRequestDto {
    pub tweet_id: Option<Uuid>,
    #[oai(validator(min_length = 5, max_length = 255))]
    pub content: String,
    pub by: AuthorDto,
}

#[derive(Object, Debug)]
pub struct UpdateTweetRequestDto {
    #[oai(validator(min_length = 5, max_length = 255))]
    pub content: String,
}

#[derive(Object, Debug)]
pub struct PersonDto {
    #[oai(validator(min_length = 1, max_length = 50))]
    pub first_name: String,
    #[oai(validator(min_length = 1, max_length = 50))]
    pub last_name: String,
    #[oai(validator(minimum(value = "1"), maximum(value = "115")))]
    pub age: u8,
    pub hair_color: Option<HairColor>,
    pub is_married: Option<bool>,
    pub email: Email,
    #[oai(validator(min_length = 8))]
    pub password: String,
}

#[derive(Object, Debug, Clone)]
pub struct LocationDto {
    #[oai(validator(min_length = 1, max_length = 50))]
    pub city: String,
    #[oai(validator(min_length = 1, max_length = 50))]
    pub state: String,
    #[oai(validator(min_length = 1, max_length = 50))]
    pub country: String,
}

#[derive(Object, Debug)]
pub struct PersonUpdateRequestDto {
    pub person: PersonDto,
    pub location: LocationDto,
}

#[derive(Object, Deserialize, Debug)]
pub struct LoginFormDto {
    pub username: String,
    pub password: String,
}

#[derive(Object, Deserialize, Debug)]
pub struct ContactFormDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

#[derive(Multipart)]
pub struct UploadImageDto {
    pub image: Upload,
}
