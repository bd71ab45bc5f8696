use std::sync::Arc;

use poem::{Endpoint, EndpointExt, Route, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::presentation::http::endpoints::{
    health::HealthEndpoints, playground::PlaygroundEndpoints, root::ApiState,
    tweets::TweetsEndpoints, users::UsersEndpoints,
};

pub mod endpoints;
pub mod errors;
pub mod mappers;
pub mod requests;
pub mod responses;

/// Assembles every API section, the Swagger UI (`/docs`) and the raw
/// OpenAPI document (`/openapi.json`) into one endpoint.
pub fn build_app(state: Arc<ApiState>, server_url: &str) -> impl Endpoint + use<> {
    let api_service = OpenApiService::new(
        (
            HealthEndpoints,
            UsersEndpoints::new(state.clone()),
            TweetsEndpoints::new(state),
            PlaygroundEndpoints,
        ),
        "Twitter API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/docs", ui)
        .at("/openapi.json", spec)
        .nest("/", api_service)
        .catch_error(errors::payload_error)
        .catch_error(errors::param_error)
        .catch_error(errors::path_error)
        .catch_error(errors::multipart_error)
        .with(Tracing)
}
