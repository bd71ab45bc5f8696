pub mod in_memory;
pub mod json_file;

pub use in_memory::{InMemoryTweetRepository, InMemoryUserRepository};
pub use json_file::{JsonFileTweetRepository, JsonFileUserRepository};
