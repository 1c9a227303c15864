mod config;
mod error;
mod routes;
mod session;

use std::net::SocketAddr;
use std::sync::Arc;

use leptos::config::get_configuration;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = Arc::new(ServerConfig::from_env()?);
    if config.fallback_user.is_some() {
        tracing::warn!("fallback user configured; requests without a user header render as that user");
    }

    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let app = routes::app(config.clone(), conf.leptos_options);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, app = %config.app_title, "dvtrack listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
