use std::collections::{HashMap, VecDeque};

use tokio::sync::RwLock;

/// Number of entries kept per conversation unless configured otherwise
pub const MAX_HISTORY_LENGTH: usize = 10;

/// Rolling per-conversation history window, oldest entry first.
///
/// Entries alternate between user text and assistant replies. Each
/// conversation is created on its first append and lives for the rest of
/// the process.
#[derive(Debug)]
pub struct HistoryStore {
    limit: usize,
    conversations: RwLock<HashMap<String, VecDeque<String>>>,
}

impl HistoryStore {
    /// Create a store keeping at most `limit` entries per conversation.
    /// A limit of zero is bumped to one.
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            conversations: RwLock::new(HashMap::new()),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Append `text` as the newest entry and drop whatever falls outside the
    /// window. Returns the resulting length.
    pub async fn append(&self, conversation_id: &str, text: impl Into<String>) -> usize {
        let mut conversations = self.conversations.write().await;
        let history = conversations.entry(conversation_id.to_string()).or_default();

        history.push_back(text.into());
        while history.len() > self.limit {
            history.pop_front();
        }

        history.len()
    }

    /// Snapshot of the window for `conversation_id`; empty if unknown.
    pub async fn get(&self, conversation_id: &str) -> Vec<String> {
        self.conversations
            .read()
            .await
            .get(conversation_id)
            .map(|history| history.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub async fn conversation_count(&self) -> usize {
        self.conversations.read().await.len()
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(MAX_HISTORY_LENGTH)
    }
}
