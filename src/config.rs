use std::env;

use anyhow::{Context, Result};
use url::Url;

pub struct AppConfig {
    pub telegram_token: String,
    pub cmc_api_key: String,
    pub webhook_base: Url,
    pub port: u16,
}

impl AppConfig {
    /// Loads configuration from the environment. Credentials have no
    /// embedded fallback: startup fails when one is absent.
    pub fn from_env() -> Result<Self> {
        let telegram_token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow::anyhow!("TELEGRAM_BOT_TOKEN not set"))?;

        let cmc_api_key =
            env::var("CMC_API_KEY").map_err(|_| anyhow::anyhow!("CMC_API_KEY not set"))?;

        let webhook_base =
            env::var("WEBHOOK_URL").map_err(|_| anyhow::anyhow!("WEBHOOK_URL not set"))?;
        let webhook_base = Url::parse(&webhook_base).context("WEBHOOK_URL is not a valid URL")?;

        let port = match env::var("PORT") {
            Ok(port) => port.parse().context("PORT is not a valid port number")?,
            Err(_) => 3000,
        };

        Ok(Self {
            telegram_token,
            cmc_api_key,
            webhook_base,
            port,
        })
    }

    /// Externally reachable endpoint registered with the chat platform.
    pub fn webhook_endpoint(&self) -> Result<Url> {
        self.webhook_base
            .join("webhook")
            .context("building webhook endpoint URL failed")
    }
}
