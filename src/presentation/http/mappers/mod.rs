use crate::{
    domain::models::{Author, Tweet, User},
    presentation::http::{
        requests::{AuthorDto, PersonDto},
        responses::{PersonOutDto, TweetDto, UserDto},
    },
};

pub fn map_user(user: &User) -> UserDto {
    UserDto {
        user_id: user.user_id,
        email: user.email.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        birth_date: user.birth_date,
    }
}

pub fn map_author(author: &Author) -> UserDto {
    UserDto {
        user_id: author.user_id,
        email: author.email.clone(),
        first_name: author.first_name.clone(),
        last_name: author.last_name.clone(),
        birth_date: author.birth_date,
    }
}

pub fn map_tweet(tweet: &Tweet) -> TweetDto {
    TweetDto {
        tweet_id: tweet.tweet_id,
        content: tweet.content.clone(),
        created_at: tweet.created_at,
        updated_at: tweet.updated_at,
        by: map_author(&tweet.by),
    }
}

impl From<AuthorDto> for Author {
    fn from(value: AuthorDto) -> Self {
        Author {
            user_id: value.user_id,
            email: value.email.0,
            first_name: value.first_name,
            last_name: value.last_name,
            birth_date: value.birth_date,
        }
    }
}

impl From<PersonDto> for PersonOutDto {
    fn from(value: PersonDto) -> Self {
        PersonOutDto {
            first_name: value.first_name,
            last_name: value.last_name,
            age: value.age,
            hair_color: value.hair_color,
            is_married: value.is_married,
            email: value.email.0,
        }
    }
}
