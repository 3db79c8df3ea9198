//! Pure view state for a rendering adapter

use crate::chat::{ChatMessage, ChatThread};
use crate::deck::SlideDeck;
use crate::narration::{NarrationSession, NarrationState};
use serde::Serialize;
use slidecast_types::SlideId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckView {
    /// Slideshow section shown at all
    pub visible: bool,
    pub slide: Option<SlideId>,
    /// "Slide X of N", empty without a deck
    pub label: String,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrationPhase {
    Idle,
    Loading,
    Playing,
    Paused,
}

impl NarrationPhase {
    pub fn toggle_label(&self) -> &'static str {
        match self {
            NarrationPhase::Idle => "🎤 Present Slide",
            NarrationPhase::Loading => "⏳ Loading Audio...",
            NarrationPhase::Playing => "❚❚ Pause Presentation",
            NarrationPhase::Paused => "▶️ Resume Presentation",
        }
    }
}

impl From<&NarrationState> for NarrationPhase {
    fn from(state: &NarrationState) -> Self {
        match state {
            NarrationState::Idle => NarrationPhase::Idle,
            NarrationState::Loading { .. } => NarrationPhase::Loading,
            NarrationState::Playing(_) => NarrationPhase::Playing,
            NarrationState::Paused(_) => NarrationPhase::Paused,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrationView {
    pub phase: NarrationPhase,
    pub toggle_label: &'static str,
    pub toggle_enabled: bool,
    pub transcript: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatView {
    pub visible: bool,
    pub messages: Vec<ChatMessage>,
    pub awaiting_reply: bool,
}

/// Everything a renderer needs, detached from the coordinator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub status: Option<StatusLine>,
    pub deck: DeckView,
    pub narration: NarrationView,
    pub chat: ChatView,
}

impl Snapshot {
    pub fn capture(
        deck: &SlideDeck,
        narration: &NarrationSession,
        chat: &ChatThread,
        status: Option<&StatusLine>,
    ) -> Self {
        let has_deck = !deck.is_empty();
        let phase = NarrationPhase::from(narration.state());

        Self {
            status: status.cloned(),
            deck: DeckView {
                visible: has_deck,
                slide: deck.current_slide().cloned(),
                label: deck
                    .position()
                    .map(|(index, total)| format!("Slide {index} of {total}"))
                    .unwrap_or_default(),
                previous_enabled: has_deck && !deck.is_first(),
                next_enabled: has_deck && !deck.is_last(),
            },
            narration: NarrationView {
                phase,
                toggle_label: phase.toggle_label(),
                toggle_enabled: has_deck && phase != NarrationPhase::Loading,
                transcript: narration.handle().and_then(|h| h.transcript.clone()),
            },
            chat: ChatView {
                visible: has_deck,
                messages: chat.messages().to_vec(),
                awaiting_reply: chat.is_awaiting_reply(),
            },
        }
    }
}
