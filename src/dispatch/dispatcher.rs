use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::dispatch::command::Command;
use crate::dispatch::registry::ChatRegistry;
use crate::dispatch::transport::{ChatTransport, SendOutcome};
use crate::format;
use crate::market::market_source::MarketDataSource;
use crate::telegram::telegram_update::Update;
use crate::types::asset::Asset;
use crate::types::chat::ChatId;

const WELCOME: &str = "Welcome! Use /btc, /eth, or /link to get coin data.";

/// Routes inbound updates to replies and runs broadcast rounds. Everything
/// it touches is injected, so tests can drive it without process-wide state.
pub struct Dispatcher {
    market_data: Arc<dyn MarketDataSource>,
    transport: Arc<dyn ChatTransport>,
    registry: Arc<ChatRegistry>,
}

impl Dispatcher {
    pub fn new(
        market_data: Arc<dyn MarketDataSource>,
        transport: Arc<dyn ChatTransport>,
        registry: Arc<ChatRegistry>,
    ) -> Self {
        Self {
            market_data,
            transport,
            registry,
        }
    }

    pub fn registry(&self) -> &ChatRegistry {
        &self.registry
    }

    /// Handles one webhook update. Unrecognized input is dropped without a
    /// reply; recognized commands register the chat for hourly broadcasts.
    pub async fn handle_update(&self, update: Update) {
        let Some(message) = update.message else {
            debug!(update_id = update.update_id, "update without message ignored");
            return;
        };

        let chat_id = message.chat.id;
        let Some(text) = message.text else {
            return;
        };

        let Some(command) = Command::parse(&text) else {
            debug!(%chat_id, "unrecognized message ignored");
            return;
        };

        if self.registry.insert(chat_id) {
            info!(%chat_id, active = self.registry.len(), "chat registered");
        }

        match command {
            Command::Start => {
                self.send(chat_id, WELCOME).await;
                self.send_asset_report(chat_id, Asset::Btc).await;
            }
            Command::Quote(asset) => self.send_asset_report(chat_id, asset).await,
        }
    }

    /// One broadcast round: a single shared fetch of all three assets plus
    /// the overview, then one send per registered chat. Returns the
    /// per-chat outcomes so callers can log, retry, or prune.
    pub async fn broadcast_tick(&self) -> Vec<SendOutcome> {
        let chats = self.registry.snapshot();
        if chats.is_empty() {
            return Vec::new();
        }

        let (btc, eth, link, overview) = tokio::join!(
            self.market_data.coin_quote(Asset::Btc.symbol()),
            self.market_data.coin_quote(Asset::Eth.symbol()),
            self.market_data.coin_quote(Asset::Link.symbol()),
            self.market_data.market_overview(),
        );

        let now = Utc::now();
        let message = [
            format::coin_message(btc.as_ref(), overview.as_ref(), now),
            format::coin_message(eth.as_ref(), overview.as_ref(), now),
            format::coin_message(link.as_ref(), overview.as_ref(), now),
        ]
        .join("\n");

        let mut outcomes = Vec::with_capacity(chats.len());
        for chat in chats {
            let result = self.transport.send_message(chat, &message).await;
            if let Err(error) = &result {
                warn!(%chat, ?error, "broadcast send failed");
            }
            outcomes.push(SendOutcome { chat, result });
        }

        outcomes
    }

    async fn send_asset_report(&self, chat_id: ChatId, asset: Asset) {
        // Both fetches in flight at once; reply latency is bounded by the
        // slower call.
        let (coin, overview) = tokio::join!(
            self.market_data.coin_quote(asset.symbol()),
            self.market_data.market_overview(),
        );

        let text = format::coin_message(coin.as_ref(), overview.as_ref(), Utc::now());
        self.send(chat_id, &text).await;
    }

    async fn send(&self, chat_id: ChatId, text: &str) {
        if let Err(error) = self.transport.send_message(chat_id, text).await {
            warn!(%chat_id, ?error, "send failed");
        }
    }
}
