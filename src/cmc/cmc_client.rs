use std::collections::HashMap;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::market::market_source::MarketDataSource;
use crate::types::coin_quote::CoinQuote;
use crate::types::market_overview::MarketOverview;

const CMC_BASE: &str = "https://pro-api.coinmarketcap.com/v1";

/// CoinMarketCap v1 API client, authenticated via a static header key.
#[derive(Clone, Debug)]
pub struct CmcClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CmcClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: CMC_BASE.to_string(),
            api_key,
        }
    }

    pub async fn global_metrics(&self) -> Result<MarketOverview> {
        self.get_json("/global-metrics/quotes/latest", &[]).await
    }

    pub async fn quote(&self, symbol: &str) -> Result<CoinQuote> {
        let symbol = symbol.to_uppercase();

        let mut quotes: HashMap<String, CoinQuote> = self
            .get_json(
                "/cryptocurrency/quotes/latest",
                &[("symbol", symbol.as_str()), ("convert", "USD")],
            )
            .await?;

        quotes
            .remove(&symbol)
            .with_context(|| format!("no quote for {symbol} in response"))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .header("X-CMC_PRO_API_KEY", &self.api_key)
            .query(query)
            .send()
            .await
            .context("coinmarketcap GET failed")?;

        let status = resp.status();
        let text = resp.text().await.context("read response body failed")?;

        if !status.is_success() {
            anyhow::bail!("coinmarketcap http error {status}: {text}");
        }

        let parsed: CmcResponse<T> = serde_json::from_str(&text)
            .with_context(|| format!("parse coinmarketcap response JSON failed; raw={text}"))?;

        if parsed.status.error_code != 0 {
            let message = parsed.status.error_message.unwrap_or_default();
            anyhow::bail!(
                "coinmarketcap api error {}: {message}",
                parsed.status.error_code
            );
        }

        match parsed.data {
            Some(data) => Ok(data),
            None => {
                anyhow::bail!("coinmarketcap response missing `data`; raw={text}")
            }
        }
    }
}

// Failure policy at the source boundary: log and surface None, never a typed
// error.
#[async_trait]
impl MarketDataSource for CmcClient {
    async fn market_overview(&self) -> Option<MarketOverview> {
        match self.global_metrics().await {
            Ok(overview) => Some(overview),
            Err(error) => {
                warn!(?error, "market overview fetch failed");
                None
            }
        }
    }

    async fn coin_quote(&self, symbol: &str) -> Option<CoinQuote> {
        match self.quote(symbol).await {
            Ok(coin) => Some(coin),
            Err(error) => {
                warn!(%symbol, ?error, "coin quote fetch failed");
                None
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct CmcResponse<T> {
    status: CmcStatus,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct CmcStatus {
    error_code: i64,
    #[serde(default)]
    error_message: Option<String>,
}
