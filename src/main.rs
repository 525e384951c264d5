mod clock;
mod cmc;
mod config;
mod dispatch;
mod format;
mod market;
mod server;
mod telegram;
mod types;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cmc::cmc_client::CmcClient;
use crate::config::AppConfig;
use crate::dispatch::broadcast;
use crate::dispatch::dispatcher::Dispatcher;
use crate::dispatch::registry::ChatRegistry;
use crate::telegram::telegram_client::TelegramClient;

#[derive(Debug, Clone, Parser)]
struct Args {
    /// Seconds between broadcast rounds to active chats.
    #[arg(long, default_value_t = 3600)]
    pub broadcast_interval_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("coinherald=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = AppConfig::from_env()?;

    let telegram = Arc::new(TelegramClient::new(config.telegram_token.clone()));
    let market_data = Arc::new(CmcClient::new(config.cmc_api_key.clone()));
    let registry = Arc::new(ChatRegistry::new());

    let dispatcher = Arc::new(Dispatcher::new(market_data, telegram.clone(), registry));

    let webhook_endpoint = config.webhook_endpoint()?;
    telegram
        .set_webhook(webhook_endpoint.as_str())
        .await
        .context("webhook registration failed")?;
    info!(url = %webhook_endpoint, "webhook registered");

    let broadcast_task = broadcast::spawn(
        dispatcher.clone(),
        Duration::from_secs(args.broadcast_interval_secs),
    );

    let result = server::serve(dispatcher, config.port).await;

    broadcast_task.abort();

    result
}
