use serde::Deserialize;

use crate::types::chat::ChatId;

/// One inbound Telegram event, delivered by webhook POST. Only the fields
/// the bot reads are modeled; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<IncomingMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: ChatId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_command_update() {
        let raw = r#"{
            "update_id": 7190001,
            "message": {
                "message_id": 42,
                "date": 1700000000,
                "chat": {"id": 123456789, "type": "private"},
                "text": "/btc"
            }
        }"#;

        let update: Update = serde_json::from_str(raw).unwrap();
        let message = update.message.unwrap();
        assert_eq!(message.chat.id, ChatId::new(123456789));
        assert_eq!(message.text.as_deref(), Some("/btc"));
    }

    #[test]
    fn tolerates_updates_without_message_or_text() {
        let update: Update = serde_json::from_str(r#"{"update_id": 1}"#).unwrap();
        assert!(update.message.is_none());

        let update: Update = serde_json::from_str(
            r#"{"update_id": 2, "message": {"chat": {"id": 5}}}"#,
        )
        .unwrap();
        assert!(update.message.unwrap().text.is_none());
    }
}
