use std::sync::Arc;

use poem_openapi::Tags;

use crate::{
    application::usecases::{
        create_tweet::CreateTweetUseCase, delete_tweet::DeleteTweetUseCase,
        delete_user::DeleteUserUseCase, get_tweet::GetTweetUseCase, get_user::GetUserUseCase,
        list_tweets::ListTweetsUseCase, list_users::ListUsersUseCase, signup::SignupUseCase,
        update_tweet::UpdateTweetUseCase, update_user::UpdateUserUseCase,
    },
    domain::repositories::{TweetRepository, UserRepository},
};

#[derive(Clone)]
pub struct ApiState {
    pub signup_usecase: Arc<SignupUseCase>,
    pub list_users_usecase: Arc<ListUsersUseCase>,
    pub get_user_usecase: Arc<GetUserUseCase>,
    pub update_user_usecase: Arc<UpdateUserUseCase>,
    pub delete_user_usecase: Arc<DeleteUserUseCase>,
    pub create_tweet_usecase: Arc<CreateTweetUseCase>,
    pub list_tweets_usecase: Arc<ListTweetsUseCase>,
    pub get_tweet_usecase: Arc<GetTweetUseCase>,
    pub update_tweet_usecase: Arc<UpdateTweetUseCase>,
    pub delete_tweet_usecase: Arc<DeleteTweetUseCase>,
}

impl ApiState {
    pub fn new(users: Arc<dyn UserRepository>, tweets: Arc<dyn TweetRepository>) -> Self {
        Self {
            signup_usecase: Arc::new(SignupUseCase::new(users.clone())),
            list_users_usecase: Arc::new(ListUsersUseCase::new(users.clone())),
            get_user_usecase: Arc::new(GetUserUseCase::new(users.clone())),
            update_user_usecase: Arc::new(UpdateUserUseCase::new(users.clone())),
            delete_user_usecase: Arc::new(DeleteUserUseCase::new(users)),
            create_tweet_usecase: Arc::new(CreateTweetUseCase::new(tweets.clone())),
            list_tweets_usecase: Arc::new(ListTweetsUseCase::new(tweets.clone())),
            get_tweet_usecase: Arc::new(GetTweetUseCase::new(tweets.clone())),
            update_tweet_usecase: Arc::new(UpdateTweetUseCase::new(tweets.clone())),
            delete_tweet_usecase: Arc::new(DeleteTweetUseCase::new(tweets)),
        }
    }
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Users,
    Tweets,
    Playground,
}
