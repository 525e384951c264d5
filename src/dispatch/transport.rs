use anyhow::Result;
use async_trait::async_trait;

use crate::types::chat::ChatId;

/// Outbound chat delivery seam. The Telegram client implements this; tests
/// substitute a recording mock.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<()>;
}

/// Delivery result for one chat of a batch send.
#[derive(Debug)]
pub struct SendOutcome {
    pub chat: ChatId,
    pub result: Result<()>,
}

impl SendOutcome {
    pub fn is_delivered(&self) -> bool {
        self.result.is_ok()
    }
}
