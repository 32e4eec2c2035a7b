use anyhow::Result;
use async_trait::async_trait;

/// Formatting applied to outgoing text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    Plain,
    /// The platform's legacy inline Markdown
    Markdown,
}

/// Handle to a message the bot has sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentMessage {
    pub chat_id: i64,
    pub message_id: i32,
}

/// Outbound side of the chat platform.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send a new plain-text message.
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<SentMessage>;

    /// Replace the text of a message sent earlier.
    async fn edit_text(&self, message: SentMessage, text: &str, markup: Markup) -> Result<()>;
}
