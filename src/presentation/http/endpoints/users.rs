use std::sync::Arc;

use poem::Result as PoemResult;
use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use crate::{
    application::usecases::{signup::SignupRequest, update_user::UpdateUserRequest},
    domain::errors::DomainError,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::map_user,
        requests::{SignupRequestDto, UpdateUserRequestDto},
        responses::UserDto,
    },
};

#[derive(ApiResponse)]
pub enum SignupResponse {
    #[oai(status = 201)]
    Created(Json<UserDto>),
}

#[derive(Clone)]
pub struct UsersEndpoints {
    state: Arc<ApiState>,
}

impl UsersEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl UsersEndpoints {
    /// Register a User
    #[oai(path = "/signup", method = "post", tag = EndpointsTags::Users)]
    pub async fn signup(&self, request: Json<SignupRequestDto>) -> PoemResult<SignupResponse> {
        let request = request.0;
        let user = self
            .state
            .signup_usecase
            .execute(SignupRequest {
                user_id: request.user_id,
                email: request.email.0,
                password: request.password,
                first_name: request.first_name,
                last_name: request.last_name,
                birth_date: request.birth_date,
            })
            .await?;

        Ok(SignupResponse::Created(Json(map_user(&user))))
    }

    /// Login a User
    ///
    /// Not available: this service has no authentication.
    #[oai(path = "/login", method = "post", tag = EndpointsTags::Users)]
    pub async fn login(&self) -> PoemResult<Json<UserDto>> {
        Err(DomainError::NotImplemented("login").into())
    }

    /// List all Users
    #[oai(path = "/users", method = "get", tag = EndpointsTags::Users)]
    pub async fn list_users(&self) -> PoemResult<Json<Vec<UserDto>>> {
        let users = self.state.list_users_usecase.execute().await?;

        Ok(Json(users.iter().map(map_user).collect()))
    }

    /// Get a User
    #[oai(path = "/users/:user_id", method = "get", tag = EndpointsTags::Users)]
    pub async fn get_user(&self, user_id: Path<Uuid>) -> PoemResult<Json<UserDto>> {
        let user = self.state.get_user_usecase.execute(user_id.0).await?;

        Ok(Json(map_user(&user)))
    }

    /// Update a User
    #[oai(path = "/users/:user_id", method = "put", tag = EndpointsTags::Users)]
    pub async fn update_user(
        &self,
        user_id: Path<Uuid>,
        request: Json<UpdateUserRequestDto>,
    ) -> PoemResult<Json<UserDto>> {
        let request = request.0;
        let user = self
            .state
            .update_user_usecase
            .execute(UpdateUserRequest {
                user_id: user_id.0,
                email: request.email.0,
                password: request.password,
                first_name: request.first_name,
                last_name: request.last_name,
                birth_date: request.birth_date,
            })
            .await?;

        Ok(Json(map_user(&user)))
    }

    /// Delete a User
    #[oai(path = "/users/:user_id", method = "delete", tag = EndpointsTags::Users)]
    pub async fn delete_user(&self, user_id: Path<Uuid>) -> PoemResult<Json<UserDto>> {
        let user = self.state.delete_user_usecase.execute(user_id.0).await?;

        Ok(Json(map_user(&user)))
    }
}
