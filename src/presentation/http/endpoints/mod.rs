pub mod health;
pub mod playground;
pub mod root;
pub mod tweets;
pub mod users;
