//! Presentation coordinator
//!
//! Owns the deck, the narration session and the chat thread and keeps them
//! consistent: narration is released before any slide change, chat is
//! cleared with the slide, and late completions are matched by ticket.

use crate::chat::ChatThread;
use crate::deck::SlideDeck;
use crate::effect::{Effect, Event, NarrationClip, UploadOutcome};
use crate::ids::{HandleId, IdAllocator, Ticket};
use crate::narration::{NarrationSession, Transition};
use crate::snapshot::{Snapshot, StatusLine};
use crate::upload::{validate_selection, SelectedFile};

pub const UPLOADING_STATUS: &str = "Uploading and processing PDF...";
pub const UPLOAD_SUCCESS_STATUS: &str = "PDF processed successfully!";

#[derive(Debug, Default)]
pub struct Coordinator {
    deck: SlideDeck,
    narration: NarrationSession,
    chat: ChatThread,
    status: Option<StatusLine>,
    pending_upload: Option<Ticket>,
    ids: IdAllocator,
}

impl Coordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    pub fn narration(&self) -> &NarrationSession {
        &self.narration
    }

    pub fn chat(&self) -> &ChatThread {
        &self.chat
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.deck, &self.narration, &self.chat, self.status.as_ref())
    }

    /// Apply one event and return the effects to execute, in order
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::UploadRequested(file) => self.request_upload(file.as_ref()),
            Event::UploadFinished { ticket, result } => self.finish_upload(ticket, result),
            Event::NextSlide => self.navigate(self.deck.current_index().checked_add(1)),
            Event::PreviousSlide => self.navigate(self.deck.current_index().checked_sub(1)),
            Event::GoToSlide(index) => self.navigate(Some(index)),
            Event::PresentToggled => self.toggle_presentation(),
            Event::NarrationFetched { ticket, result } => self.narration_fetched(ticket, result),
            Event::PlaybackCompleted(handle) => {
                let transition = self.narration.completed(handle);
                self.apply(transition)
            }
            Event::PlaybackFailed { handle, error } => self.playback_failed(handle, &error),
            Event::ChatSubmitted(text) => self.submit_chat(&text),
            Event::ChatReplied { ticket, result } => {
                self.chat.resolve(ticket, result);
                Vec::new()
            }
        }
    }

    fn request_upload(&mut self, file: Option<&SelectedFile>) -> Vec<Effect> {
        let file = match validate_selection(file) {
            Ok(file) => file,
            Err(err) => {
                log::warn!("Upload rejected: {}", err);
                self.status = Some(StatusLine::error(err.to_string()));
                return Vec::new();
            }
        };

        let mut effects = self.narration.stop().effects;
        let ticket = self.ids.ticket();
        log::info!("Uploading {} as {}", file.name, ticket);
        self.pending_upload = Some(ticket);
        self.status = Some(StatusLine::info(UPLOADING_STATUS));
        effects.push(Effect::Upload { ticket });
        effects
    }

    fn finish_upload(&mut self, ticket: Ticket, result: Result<UploadOutcome, String>) -> Vec<Effect> {
        if self.pending_upload != Some(ticket) {
            log::debug!("Discarding stale upload result {}", ticket);
            return Vec::new();
        }
        self.pending_upload = None;

        let effects = self.narration.stop().effects;
        self.chat.clear();
        match result {
            Ok(outcome) => {
                log::info!("Loaded deck with {} slides", outcome.slides.len());
                self.deck.replace(outcome.slides);
                self.status = Some(StatusLine::info(
                    outcome
                        .message
                        .unwrap_or_else(|| UPLOAD_SUCCESS_STATUS.to_string()),
                ));
            }
            Err(error) => {
                log::warn!("Upload failed: {}", error);
                self.deck.clear();
                self.status = Some(StatusLine::error(error));
            }
        }
        effects
    }

    fn navigate(&mut self, target: Option<usize>) -> Vec<Effect> {
        let Some(index) = target.filter(|&index| self.deck.can_go_to(index)) else {
            return Vec::new();
        };

        // Narration goes before the slide does.
        let effects = self.narration.stop().effects;
        self.deck.go_to(index);
        self.chat.clear();
        log::debug!("Showing slide {}", self.deck.current_index() + 1);
        effects
    }

    fn toggle_presentation(&mut self) -> Vec<Effect> {
        let Some(slide) = self.deck.current_slide().cloned() else {
            log::debug!("Present requested without a deck");
            return Vec::new();
        };
        let transition = self.narration.toggle(&slide, &mut self.ids);
        self.apply(transition)
    }

    fn narration_fetched(&mut self, ticket: Ticket, result: Result<NarrationClip, String>) -> Vec<Effect> {
        let transition = self.narration.fetched(ticket, result, &mut self.ids);
        self.apply(transition)
    }

    fn playback_failed(&mut self, handle: HandleId, error: &str) -> Vec<Effect> {
        let transition = self.narration.failed(handle, error);
        self.apply(transition)
    }

    fn submit_chat(&mut self, text: &str) -> Vec<Effect> {
        match self.chat.send(text, self.deck.current_slide(), &mut self.ids) {
            Ok(effect) => vec![effect],
            Err(err) => {
                log::debug!("Chat message not sent: {}", err);
                Vec::new()
            }
        }
    }

    fn apply(&mut self, transition: Transition) -> Vec<Effect> {
        if let Some(notice) = transition.notice {
            self.chat.push_notice(notice);
        }
        transition.effects
    }
}
