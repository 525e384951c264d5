use std::collections::HashSet;
use std::sync::Mutex;

use crate::types::chat::ChatId;

/// Chats that have issued at least one recognized command. Insert-only for
/// the process lifetime; reset on restart. Shared between the webhook
/// handlers and the broadcast task, so the set sits behind a mutex.
#[derive(Debug, Default)]
pub struct ChatRegistry {
    chats: Mutex<HashSet<ChatId>>,
}

impl ChatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the chat was not registered before.
    pub fn insert(&self, chat: ChatId) -> bool {
        self.lock().insert(chat)
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Stable (id-ordered) copy of the registered chats.
    pub fn snapshot(&self) -> Vec<ChatId> {
        let mut chats: Vec<ChatId> = self.lock().iter().copied().collect();
        chats.sort();
        chats
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<ChatId>> {
        self.chats.lock().expect("chat registry lock poisoned")
    }
}
