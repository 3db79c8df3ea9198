//! Headless driver for the coordinator
//!
//! Network effects run as tokio tasks; each task reports back through an
//! unbounded channel and the result is applied on the next [`Presenter::step`].
//! Audio effects go to a [`MediaOutput`], which reports completion or errors
//! through [`Presenter::events`].

use crate::backend::{PdfUpload, SlideBackend};
use anyhow::{anyhow, Result};
use slidecast_core::{
    AudioHandle, Coordinator, Effect, Event, HandleId, PresenterConfig, Snapshot,
};
use slidecast_types::Endpoint;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Whatever actually plays narration audio
pub trait MediaOutput: Send {
    /// Load `url` for `handle` and start playing once it can
    fn start(&mut self, handle: &AudioHandle, url: &str);
    fn pause(&mut self, handle: HandleId);
    fn resume(&mut self, handle: HandleId);
    /// Stop playback and drop the resource
    fn release(&mut self, handle: HandleId);
}

/// Media output that plays nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullMedia;

impl MediaOutput for NullMedia {
    fn start(&mut self, handle: &AudioHandle, url: &str) {
        log::debug!("(muted) start {} from {}", handle.id, url);
    }

    fn pause(&mut self, _handle: HandleId) {}

    fn resume(&mut self, _handle: HandleId) {}

    fn release(&mut self, _handle: HandleId) {}
}

pub struct Presenter<B, M> {
    coordinator: Coordinator,
    backend: Arc<B>,
    media: M,
    config: PresenterConfig,
    staged_upload: Option<PdfUpload>,
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
}

impl<B, M> Presenter<B, M>
where
    B: SlideBackend + 'static,
    M: MediaOutput,
{
    pub fn new(backend: B, media: M, config: PresenterConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            coordinator: Coordinator::new(),
            backend: Arc::new(backend),
            media,
            config,
            staged_upload: None,
            tx,
            rx,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.coordinator.snapshot()
    }

    pub fn coordinator(&self) -> &Coordinator {
        &self.coordinator
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    /// Sender for completions produced outside the presenter (media callbacks)
    pub fn events(&self) -> mpsc::UnboundedSender<Event> {
        self.tx.clone()
    }

    /// Select `file` and ask for it to be uploaded
    pub fn upload(&mut self, file: Option<PdfUpload>) {
        let selection = file.as_ref().map(PdfUpload::selection);
        self.staged_upload = file;
        self.dispatch(Event::UploadRequested(selection));
    }

    pub fn next_slide(&mut self) {
        self.dispatch(Event::NextSlide);
    }

    pub fn previous_slide(&mut self) {
        self.dispatch(Event::PreviousSlide);
    }

    pub fn toggle_presentation(&mut self) {
        self.dispatch(Event::PresentToggled);
    }

    pub fn send_chat(&mut self, text: impl Into<String>) {
        self.dispatch(Event::ChatSubmitted(text.into()));
    }

    /// Feed one event to the coordinator and execute what it asks for
    pub fn dispatch(&mut self, event: Event) {
        for effect in self.coordinator.handle(event) {
            self.execute(effect);
        }
    }

    /// Wait for the next completion and apply it
    pub async fn step(&mut self) -> Result<()> {
        let event = self
            .rx
            .recv()
            .await
            .ok_or_else(|| anyhow!("event channel closed"))?;
        self.dispatch(event);
        Ok(())
    }

    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::Upload { ticket } => {
                let Some(file) = self.staged_upload.take() else {
                    log::error!("Upload {} requested with no file staged", ticket);
                    let _ = self.tx.send(Event::UploadFinished {
                        ticket,
                        result: Err(Endpoint::Upload.transport_error_message().to_string()),
                    });
                    return;
                };
                let backend = Arc::clone(&self.backend);
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = backend
                        .upload(file)
                        .await
                        .map_err(|e| e.user_message(Endpoint::Upload));
                    let _ = tx.send(Event::UploadFinished { ticket, result });
                });
            }
            Effect::FetchNarration { ticket, slide } => {
                let backend = Arc::clone(&self.backend);
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = backend
                        .generate_script(&slide)
                        .await
                        .map_err(|e| e.user_message(Endpoint::Script));
                    let _ = tx.send(Event::NarrationFetched { ticket, result });
                });
            }
            Effect::SendChat {
                ticket,
                message,
                slide,
            } => {
                let backend = Arc::clone(&self.backend);
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = backend
                        .chat(&message, &slide)
                        .await
                        .map_err(|e| e.user_message(Endpoint::Chat));
                    let _ = tx.send(Event::ChatReplied { ticket, result });
                });
            }
            Effect::StartPlayback(handle) => {
                let url = self.config.audio_url(&handle.audio_url);
                self.media.start(&handle, &url);
            }
            Effect::PausePlayback(handle) => self.media.pause(handle),
            Effect::ResumePlayback(handle) => self.media.resume(handle),
            Effect::ReleasePlayback(handle) => self.media.release(handle),
        }
    }
}
