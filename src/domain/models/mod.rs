pub mod tweet;
pub mod user;

pub use tweet::Tweet;
pub use user::{Author, User};
