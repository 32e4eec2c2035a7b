//! Conversation management for geminibot
//!
//! This crate holds the per-conversation history window, the transport seam
//! the bot talks to the chat platform through, and the turn handler that ties
//! history, completion and delivery together.

pub mod history;
pub mod relay;
pub mod transport;

// Re-export commonly used types
pub use history::{HistoryStore, MAX_HISTORY_LENGTH};
pub use relay::{
    greet,
    relay_text_message,
    welcome_message,
    Delivery,
    IncomingText,
    TurnReport,
    THINKING_MESSAGE,
};
pub use transport::{ChatTransport, Markup, SentMessage};
