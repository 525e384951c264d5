use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::dispatch::transport::ChatTransport;
use crate::types::chat::ChatId;

const TELEGRAM_BASE: &str = "https://api.telegram.org";

/// Telegram Bot API client. Outbound only; inbound updates arrive through
/// the webhook server.
#[derive(Clone, Debug)]
pub struct TelegramClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl TelegramClient {
    pub fn new(token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: TELEGRAM_BASE.to_string(),
            token,
        }
    }

    /// Registers `url` as the webhook target for this bot. Telegram stops
    /// long-polling and POSTs every update there instead.
    pub async fn set_webhook(&self, url: &str) -> Result<()> {
        let _: bool = self.call("setWebhook", &json!({ "url": url })).await?;
        Ok(())
    }

    pub async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()> {
        let _: serde_json::Value = self
            .call(
                "sendMessage",
                &json!({ "chat_id": chat_id.as_i64(), "text": text }),
            )
            .await?;
        Ok(())
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        payload: &serde_json::Value,
    ) -> Result<T> {
        let url = format!("{}/bot{}/{}", self.base_url, self.token, method);

        let resp = self
            .http
            .post(url)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("telegram {method} POST failed"))?;

        let text = resp.text().await.context("read response body failed")?;

        let parsed: TelegramResponse<T> = serde_json::from_str(&text)
            .with_context(|| format!("parse telegram {method} response JSON failed; raw={text}"))?;

        if !parsed.ok {
            let description = parsed.description.unwrap_or_default();
            anyhow::bail!("telegram {method} rejected: {description}");
        }

        match parsed.result {
            Some(result) => Ok(result),
            None => anyhow::bail!("telegram {method} response missing `result`"),
        }
    }
}

#[async_trait]
impl ChatTransport for TelegramClient {
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<()> {
        self.send_text(chat_id, text).await
    }
}

#[derive(Debug, Deserialize)]
struct TelegramResponse<T> {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
    result: Option<T>,
}
