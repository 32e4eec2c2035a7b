//! Telegram side of the bot: the transport implementation and the polling
//! dispatcher.
//!
//! The dispatcher runs updates from one chat one at a time and different
//! chats concurrently, so a conversation's history is never touched by two
//! turns at once.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use geminibot_chat::{
    greet, relay_text_message, ChatTransport, HistoryStore, IncomingText, Markup, SentMessage,
};
use geminibot_llm_api::CompletionClient;
use teloxide::{
    dispatching::{HandlerExt, UpdateFilterExt},
    dptree,
    error_handlers::LoggingErrorHandler,
    prelude::*,
    types::{MessageId, ParseMode},
    utils::command::BotCommands,
};
use tracing::{debug, error, info, warn};

/// Commands the bot answers
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    #[command(description = "say hello")]
    Start,
}

/// Shared state handed to every handler
pub struct BotState {
    pub history: HistoryStore,
    pub client: Arc<dyn CompletionClient>,
}

/// [`ChatTransport`] backed by the Telegram Bot API
#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ChatTransport for TelegramTransport {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<SentMessage> {
        let sent = self.bot.send_message(ChatId(chat_id), text).await?;
        Ok(SentMessage {
            chat_id,
            message_id: sent.id.0,
        })
    }

    async fn edit_text(&self, message: SentMessage, text: &str, markup: Markup) -> Result<()> {
        let request = self
            .bot
            .edit_message_text(ChatId(message.chat_id), MessageId(message.message_id), text);

        match markup {
            // Legacy Markdown is what model replies are written in; MarkdownV2
            // would need every reserved character escaped.
            #[allow(deprecated)]
            Markup::Markdown => request.parse_mode(ParseMode::Markdown).await?,
            Markup::Plain => request.await?,
        };
        Ok(())
    }
}

/// `true` for message text that is present and not a bot command. Media
/// captions arrive without text and are skipped.
fn is_plain_text(text: Option<&str>) -> bool {
    text.is_some_and(|text| !text.starts_with('/'))
}

fn sender_first_name(msg: &Message) -> Option<String> {
    msg.from.as_ref().map(|user| user.first_name.clone())
}

async fn command_handler(bot: Bot, msg: Message, cmd: Command) -> ResponseResult<()> {
    match cmd {
        Command::Start => {
            let transport = TelegramTransport::new(bot);
            let name = sender_first_name(&msg);
            if let Err(e) = greet(&transport, msg.chat.id.0, name.as_deref()).await {
                error!(chat = msg.chat.id.0, error = %e, "Failed to send welcome message");
            }
        }
    }
    Ok(())
}

async fn text_handler(bot: Bot, msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    let transport = TelegramTransport::new(bot);
    let incoming = IncomingText {
        chat_id: msg.chat.id.0,
        sender_name: sender_first_name(&msg),
        text: msg.text().map(str::to_string),
    };

    match relay_text_message(&transport, state.client.as_ref(), &state.history, &incoming).await {
        Ok(Some(report)) => debug!(conversation = %report.conversation_id, delivery = ?report.delivery, "Turn complete"),
        Ok(None) => {}
        Err(e) => error!(chat = incoming.chat_id, error = ?e, "Error handling message"),
    }
    Ok(())
}

/// Run the bot with long polling until Ctrl+C.
pub async fn run_polling(token: String, state: Arc<BotState>) -> Result<()> {
    let bot = Bot::new(token);

    match bot.get_me().await {
        Ok(me) => info!(
            username = me.username.as_deref().unwrap_or("unknown"),
            id = me.id.0,
            "Bot authenticated"
        ),
        Err(e) => warn!(error = %e, "Could not verify bot token, starting anyway"),
    }

    let handler = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(command_handler),
        )
        .branch(dptree::filter(|msg: Message| is_plain_text(msg.text())).endpoint(text_handler));

    info!("Bot is starting... Press Ctrl+C to stop.");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .default_handler(|upd| async move {
            debug!("Unhandled update: {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Error in message handler",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
    Ok(())
}
