//! Chat thread about the slide on screen

use crate::effect::Effect;
use crate::error::InputError;
use crate::ids::{IdAllocator, Ticket};
use serde::{Deserialize, Serialize};
use slidecast_types::SlideId;

pub const PENDING_TEXT: &str = "Thinking...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
    Pending,
}

impl Sender {
    /// Prefix shown in front of the message text
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "You: ",
            Sender::Assistant | Sender::Pending => "Assistant: ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Assistant,
        }
    }

    fn pending() -> Self {
        Self {
            text: PENDING_TEXT.to_string(),
            sender: Sender::Pending,
        }
    }
}

/// Request the pending placeholder belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingReply {
    ticket: Ticket,
    slide: SlideId,
}

/// Append-only message log with at most one reply outstanding
///
/// While a reply is outstanding the `Pending` placeholder is the last
/// message.
#[derive(Debug, Default, Clone)]
pub struct ChatThread {
    messages: Vec<ChatMessage>,
    pending: Option<PendingReply>,
}

impl ChatThread {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.pending.is_some()
    }

    /// Queue `text` as a question about `slide`
    ///
    /// Nothing is appended when the text is blank, no slide is shown, or a
    /// reply is still outstanding.
    pub fn send(
        &mut self,
        text: &str,
        slide: Option<&SlideId>,
        ids: &mut IdAllocator,
    ) -> Result<Effect, InputError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(InputError::EmptyMessage);
        }
        let slide = slide.ok_or(InputError::NoDeck)?;
        if self.pending.is_some() {
            return Err(InputError::ReplyPending);
        }

        let ticket = ids.ticket();
        self.messages.push(ChatMessage::user(text));
        self.messages.push(ChatMessage::pending());
        self.pending = Some(PendingReply {
            ticket,
            slide: slide.clone(),
        });
        log::info!("Chat request {} about {}", ticket, slide);

        Ok(Effect::SendChat {
            ticket,
            message: text.to_string(),
            slide: slide.clone(),
        })
    }

    /// Apply a reply (or its error text); replies to anything but the
    /// outstanding request are dropped
    pub fn resolve(&mut self, ticket: Ticket, result: Result<String, String>) -> bool {
        match &self.pending {
            Some(pending) if pending.ticket == ticket => {
                log::debug!("Chat reply {} for {}", ticket, pending.slide);
            }
            _ => {
                log::debug!("Discarding stale chat reply {}", ticket);
                return false;
            }
        }

        self.pending = None;
        if matches!(self.messages.last(), Some(m) if m.sender == Sender::Pending) {
            self.messages.pop();
        }
        let text = match result {
            Ok(reply) => reply,
            Err(error) => {
                log::warn!("Chat request {} failed: {}", ticket, error);
                error
            }
        };
        self.messages.push(ChatMessage::assistant(text));
        true
    }

    /// Add an assistant-style system message, keeping any placeholder last
    pub fn push_notice(&mut self, text: impl Into<String>) {
        let notice = ChatMessage::assistant(text);
        if self.pending.is_some() {
            let at = self.messages.len().saturating_sub(1);
            self.messages.insert(at, notice);
        } else {
            self.messages.push(notice);
        }
    }

    /// Drop every message; an outstanding reply will be discarded on arrival
    pub fn clear(&mut self) {
        if let Some(pending) = self.pending.take() {
            log::debug!("Abandoning chat request {}", pending.ticket);
        }
        self.messages.clear();
    }
}
