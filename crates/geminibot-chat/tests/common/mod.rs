use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;
use geminibot_chat::{ChatTransport, Markup, SentMessage};
use geminibot_llm_api::{CompletionClient, CompletionOutcome};

/// Every outbound call the transport saw, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportCall {
    Send { chat_id: i64, text: String },
    Edit { message_id: i32, text: String, markup: Markup },
}

/// Transport double that records calls and can be told to fail
#[derive(Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<TransportCall>>,
    next_id: AtomicI32,
    fail_sends: AtomicUsize,
    reject_markdown: bool,
    reject_edits: bool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next `n` sends
    pub fn failing_sends(self, n: usize) -> Self {
        self.fail_sends.store(n, Ordering::SeqCst);
        self
    }

    pub fn rejecting_markdown(mut self) -> Self {
        self.reject_markdown = true;
        self
    }

    pub fn rejecting_edits(mut self) -> Self {
        self.reject_edits = true;
        self
    }

    pub fn calls(&self) -> Vec<TransportCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<SentMessage> {
        let remaining = self.fail_sends.load(Ordering::SeqCst);
        if remaining > 0 {
            self.fail_sends.store(remaining - 1, Ordering::SeqCst);
            bail!("send rejected");
        }

        self.calls.lock().unwrap().push(TransportCall::Send {
            chat_id,
            text: text.to_string(),
        });
        let message_id = self.next_id.fetch_add(1, Ordering::SeqCst) + 100;
        Ok(SentMessage { chat_id, message_id })
    }

    async fn edit_text(&self, message: SentMessage, text: &str, markup: Markup) -> Result<()> {
        if self.reject_edits || (self.reject_markdown && markup == Markup::Markdown) {
            bail!("Bad Request: can't parse entities");
        }

        self.calls.lock().unwrap().push(TransportCall::Edit {
            message_id: message.message_id,
            text: text.to_string(),
            markup,
        });
        Ok(())
    }
}

/// Completion double returning a fixed outcome and recording what it saw
pub struct StubClient {
    outcome: CompletionOutcome,
    seen: Mutex<Vec<Vec<String>>>,
}

impl StubClient {
    pub fn new(outcome: CompletionOutcome) -> Self {
        Self {
            outcome,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(CompletionOutcome::Success(text.to_string()))
    }

    pub fn seen(&self) -> Vec<Vec<String>> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for StubClient {
    async fn complete(&self, history: &[String]) -> CompletionOutcome {
        self.seen.lock().unwrap().push(history.to_vec());
        self.outcome.clone()
    }
}
