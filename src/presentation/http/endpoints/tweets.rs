use std::sync::Arc;

use poem::Result as PoemResult;
use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use crate::{
    application::usecases::{create_tweet::CreateTweetRequest, update_tweet::UpdateTweetRequest},
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::map_tweet,
        requests::{CreateTweetRequestDto, UpdateTweetRequestDto},
        responses::TweetDto,
    },
};

#[derive(ApiResponse)]
pub enum CreateTweetResponse {
    #[oai(status = 201)]
    Created(Json<TweetDto>),
}

#[derive(Clone)]
pub struct TweetsEndpoints {
    state: Arc<ApiState>,
}

impl TweetsEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl TweetsEndpoints {
    /// List all Tweets
    #[oai(path = "/", method = "get", tag = EndpointsTags::Tweets)]
    pub async fn list_tweets(&self) -> PoemResult<Json<Vec<TweetDto>>> {
        let tweets = self.state.list_tweets_usecase.execute().await?;

        Ok(Json(tweets.iter().map(map_tweet).collect()))
    }

    /// Create a Tweet
    #[oai(path = "/tweets", method = "post", tag = EndpointsTags::Tweets)]
    pub async fn create_tweet(
        &self,
        request: Json<CreateTweetRequestDto>,
    ) -> PoemResult<CreateTweetResponse> {
        let request = request.0;
        let tweet = self
            .state
            .create_tweet_usecase
            .execute(CreateTweetRequest {
                tweet_id: request.tweet_id,
                content: request.content,
                by: request.by.into(),
            })
            .await?;

        Ok(CreateTweetResponse::Created(Json(map_tweet(&tweet))))
    }

    /// Show a Tweet
    #[oai(path = "/tweets/:tweet_id", method = "get", tag = EndpointsTags::Tweets)]
    pub async fn get_tweet(&self, tweet_id: Path<Uuid>) -> PoemResult<Json<TweetDto>> {
        let tweet = self.state.get_tweet_usecase.execute(tweet_id.0).await?;

        Ok(Json(map_tweet(&tweet)))
    }

    /// Update a Tweet
    #[oai(path = "/tweets/:tweet_id", method = "put", tag = EndpointsTags::Tweets)]
    pub async fn update_tweet(
        &self,
        tweet_id: Path<Uuid>,
        request: Json<UpdateTweetRequestDto>,
    ) -> PoemResult<Json<TweetDto>> {
        let tweet = self
            .state
            .update_tweet_usecase
            .execute(UpdateTweetRequest {
                tweet_id: tweet_id.0,
                content: request.0.content,
            })
            .await?;

        Ok(Json(map_tweet(&tweet)))
    }

    /// Delete a Tweet
    #[oai(path = "/tweets/:tweet_id", method = "delete", tag = EndpointsTags::Tweets)]
    pub async fn delete_tweet(&self, tweet_id: Path<Uuid>) -> PoemResult<Json<TweetDto>> {
        let tweet = self.state.delete_tweet_usecase.execute(tweet_id.0).await?;

        Ok(Json(map_tweet(&tweet)))
    }
}
