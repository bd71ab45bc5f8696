use std::io::Error;
use std::sync::Arc;

use poem::{Server, listener::TcpListener};
use tokio::main;
use tracing::info;

use twitter_api::{
    config::Config,
    infrastructure::repositories::{JsonFileTweetRepository, JsonFileUserRepository},
    logging::init_logging,
    presentation::http::{build_app, endpoints::root::ApiState},
};

#[main]
async fn main() -> Result<(), Error> {
    let config = Config::try_parse().map_err(Error::other)?;
    init_logging(config.log_format);

    let users = JsonFileUserRepository::open(&config.data_dir)
        .await
        .map_err(Error::other)?;
    let tweets = JsonFileTweetRepository::open(&config.data_dir)
        .await
        .map_err(Error::other)?;
    let state = Arc::new(ApiState::new(users, tweets));

    let server_url = config.server_url();
    info!(%server_url, data_dir = %config.data_dir.display(), "starting server");

    Server::new(TcpListener::bind(format!("{}:{}", config.host, config.port)))
        .run_with_graceful_shutdown(
            build_app(state, &server_url),
            async {
                let _ = tokio::signal::ctrl_c().await;
            },
            None,
        )
        .await
}
