use anyhow::{Context, Result};
use geminibot_llm_api::CompletionClient;
use geminibot_logging::safe_truncate;
use tracing::{info, warn};

use crate::history::HistoryStore;
use crate::transport::{ChatTransport, Markup, SentMessage};

/// Placeholder sent while the completion is in flight
pub const THINKING_MESSAGE: &str = "🤖 Thinking about your request...";

/// An incoming chat message as seen by the handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingText {
    pub chat_id: i64,
    pub sender_name: Option<String>,
    pub text: Option<String>,
}

/// How the reply reached the chat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Provisional message edited with Markdown
    Edited,
    /// Markdown was rejected; provisional message edited as plain text
    EditedPlain,
    /// Reply sent as a fresh message
    SentNew,
}

/// Summary of one handled turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub conversation_id: String,
    pub reply: String,
    pub delivery: Delivery,
}

/// Handle one text message end to end.
///
/// Returns `Ok(None)` when the message carries no text. Completion failures
/// never surface here; they arrive as display text in the reply. The only
/// error is a failure to deliver the reply at all.
pub async fn relay_text_message<T, C>(
    transport: &T,
    client: &C,
    history: &HistoryStore,
    incoming: &IncomingText,
) -> Result<Option<TurnReport>>
where
    T: ChatTransport + ?Sized,
    C: CompletionClient + ?Sized,
{
    let Some(text) = incoming.text.as_deref().filter(|text| !text.is_empty()) else {
        return Ok(None);
    };

    let conversation_id = incoming.chat_id.to_string();
    info!(
        conversation = %conversation_id,
        sender = incoming.sender_name.as_deref().unwrap_or("unknown"),
        text = %safe_truncate(text, 80),
        "Received message"
    );

    let provisional = match transport.send_text(incoming.chat_id, THINKING_MESSAGE).await {
        Ok(sent) => Some(sent),
        Err(e) => {
            warn!(conversation = %conversation_id, error = %e, "Could not send provisional message");
            None
        }
    };

    history.append(&conversation_id, text).await;
    let window = history.get(&conversation_id).await;

    let outcome = client.complete(&window).await;
    if !outcome.is_success() {
        warn!(conversation = %conversation_id, outcome = outcome.kind(), "Completion failed");
    }
    let reply = outcome.into_display();

    history.append(&conversation_id, reply.as_str()).await;

    let delivery = deliver_reply(transport, incoming.chat_id, provisional, &reply)
        .await
        .with_context(|| format!("Failed to deliver reply to chat {}", conversation_id))?;

    info!(conversation = %conversation_id, ?delivery, "Reply delivered");

    Ok(Some(TurnReport {
        conversation_id,
        reply,
        delivery,
    }))
}

/// Replace the provisional message with the reply, falling back to a plain
/// edit and then to a new message.
async fn deliver_reply<T>(
    transport: &T,
    chat_id: i64,
    provisional: Option<SentMessage>,
    reply: &str,
) -> Result<Delivery>
where
    T: ChatTransport + ?Sized,
{
    if let Some(sent) = provisional {
        match transport.edit_text(sent, reply, Markup::Markdown).await {
            Ok(()) => return Ok(Delivery::Edited),
            Err(e) => warn!(chat_id, error = %e, "Markdown edit rejected, retrying as plain text"),
        }

        match transport.edit_text(sent, reply, Markup::Plain).await {
            Ok(()) => return Ok(Delivery::EditedPlain),
            Err(e) => warn!(chat_id, error = %e, "Plain edit failed, sending a new message"),
        }
    }

    transport.send_text(chat_id, reply).await?;
    Ok(Delivery::SentNew)
}

/// Greeting for the start command
pub fn welcome_message(sender_name: Option<&str>) -> String {
    let name = sender_name.filter(|name| !name.is_empty()).unwrap_or("there");
    format!("Hello, {}! I'm your Gemini AI bot. Just send me a message.", name)
}

/// Answer the start command. Touches neither history nor the completion API.
pub async fn greet<T>(transport: &T, chat_id: i64, sender_name: Option<&str>) -> Result<SentMessage>
where
    T: ChatTransport + ?Sized,
{
    transport.send_text(chat_id, &welcome_message(sender_name)).await
}
