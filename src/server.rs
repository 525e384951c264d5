use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{error, info};

use crate::dispatch::dispatcher::Dispatcher;
use crate::telegram::telegram_update::Update;

pub fn router(dispatcher: Arc<Dispatcher>) -> Router {
    Router::new()
        .route("/", get(liveness))
        .route("/webhook", post(receive_update))
        .with_state(dispatcher)
}

/// Binds the listener and serves until ctrl-c.
pub async fn serve(dispatcher: Arc<Dispatcher>, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("bind 0.0.0.0:{port} failed"))?;

    info!(port, "webhook server listening");

    axum::serve(listener, router(dispatcher))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("webhook server failed")
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!(?error, "install ctrl-c handler failed");
    }
}

async fn liveness() -> &'static str {
    "Bot is running"
}

async fn receive_update(
    State(dispatcher): State<Arc<Dispatcher>>,
    Json(update): Json<Update>,
) -> StatusCode {
    dispatcher.handle_update(update).await;
    StatusCode::OK
}
