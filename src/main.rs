mod app;
mod config;
mod github;
mod macros;
mod utils;
mod workflow;

use crate::app::App;
use crate::config::Config;
use crate::github::events;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(if config.debug || cfg!(debug_assertions) {
                "debug"
            } else {
                "info"
            })
        }))
        .init();

    let app = App::new(&config)?;
    let address = config.address();

    info!(
        "Listening on {} for {}/{}",
        address, config.owner, config.repo
    );

    let listener = tokio::net::TcpListener::bind(address).await?;
    axum::serve(listener, router(app)).await?;

    Ok(())
}

fn router(app: App) -> Router {
    Router::new()
        .route("/", post(github_webhook))
        .route("/webhook/github", post(github_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(app)
}

/// Answers as soon as the body is parsed; handlers keep running detached.
async fn github_webhook(State(app): State<App>, headers: HeaderMap, body: Bytes) -> StatusCode {
    let event_name = headers
        .get("X-GitHub-Event")
        .and_then(|name| name.to_str().ok())
        .unwrap_or_default();

    if let Err(e) = serde_json::from_slice::<serde_json::Value>(&body) {
        error!(%e, "Failed to parse {} event body", event_name);
        return StatusCode::BAD_REQUEST;
    }

    events::receive(&app, event_name, &body);

    StatusCode::OK
}
