#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use poem::{Endpoint, test::TestClient};
use serde_json::{Value, json};
use uuid::Uuid;

use twitter_api::{
    infrastructure::repositories::{JsonFileTweetRepository, JsonFileUserRepository},
    presentation::http::{build_app, endpoints::root::ApiState},
};

pub struct TestData {
    pub dir: PathBuf,
}

impl TestData {
    pub fn users_file(&self) -> PathBuf {
        self.dir.join("users.json")
    }

    pub fn tweets_file(&self) -> PathBuf {
        self.dir.join("tweets.json")
    }

    pub async fn stored(&self, file: PathBuf) -> anyhow::Result<Vec<Value>> {
        Ok(serde_json::from_slice(&tokio::fs::read(file).await?)?)
    }
}

impl Drop for TestData {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

/// Builds the whole application on top of a fresh data directory.
pub async fn test_app() -> anyhow::Result<(TestClient<impl Endpoint>, TestData)> {
    let dir = std::env::temp_dir().join(format!("twitter_api_{}", Uuid::new_v4()));
    let users = JsonFileUserRepository::open(&dir).await?;
    let tweets = JsonFileTweetRepository::open(&dir).await?;
    let state = Arc::new(ApiState::new(users, tweets));

    let app = build_app(state, "http://localhost:8000");
    Ok((TestClient::new(app), TestData { dir }))
}

pub fn user_payload(email: &str) -> Value {
    json!({
        "email": email,
        "password": "s3cret",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "birth_date": "1815-12-10",
    })
}

pub fn tweet_payload(content: &str) -> Value {
    json!({
        "content": content,
        "by": {
            "user_id": Uuid::new_v4(),
            "email": "ada@example.com",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "birth_date": null,
        },
    })
}

pub async fn body(response: poem::test::TestResponse) -> anyhow::Result<Value> {
    Ok(response.0.into_body().into_json().await?)
}
