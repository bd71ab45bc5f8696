pub mod create_tweet;
pub mod delete_tweet;
pub mod delete_user;
pub mod get_tweet;
pub mod get_user;
pub mod list_tweets;
pub mod list_users;
pub mod signup;
pub mod update_tweet;
pub mod update_user;
