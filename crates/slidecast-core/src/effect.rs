//! Events the coordinator consumes and effects it asks adapters to perform

use crate::ids::{HandleId, Ticket};
use crate::narration::AudioHandle;
use crate::upload::SelectedFile;
use slidecast_types::{Endpoint, ScriptResponse, SlideId, UploadResponse};

/// Deck produced by a successful upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub message: Option<String>,
    pub slides: Vec<SlideId>,
}

impl From<UploadResponse> for UploadOutcome {
    fn from(response: UploadResponse) -> Self {
        Self {
            message: response.message,
            slides: response.slides,
        }
    }
}

/// Narration returned by the script service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrationClip {
    pub audio_url: String,
    pub transcript: Option<String>,
}

impl NarrationClip {
    pub fn new(audio_url: impl Into<String>) -> Self {
        Self {
            audio_url: audio_url.into(),
            transcript: None,
        }
    }

    /// Turn a 2xx script response into a clip
    ///
    /// A response without `audio_url` cannot be played; the error is the
    /// message to show instead.
    pub fn from_response(response: ScriptResponse) -> Result<Self, String> {
        match response.audio_url {
            Some(audio_url) if !audio_url.is_empty() => Ok(Self {
                audio_url,
                transcript: response.script_text,
            }),
            _ => Err(response
                .error
                .or(response.message)
                .unwrap_or_else(|| Endpoint::Script.backend_error_message().to_string())),
        }
    }
}

/// Something that happened: a user action or a completed async operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // Upload
    UploadRequested(Option<SelectedFile>),
    UploadFinished {
        ticket: Ticket,
        result: Result<UploadOutcome, String>,
    },

    // Navigation
    NextSlide,
    PreviousSlide,
    GoToSlide(usize),

    // Narration
    PresentToggled,
    NarrationFetched {
        ticket: Ticket,
        result: Result<NarrationClip, String>,
    },
    PlaybackCompleted(HandleId),
    PlaybackFailed {
        handle: HandleId,
        error: String,
    },

    // Chat
    ChatSubmitted(String),
    ChatReplied {
        ticket: Ticket,
        result: Result<String, String>,
    },
}

/// Work the coordinator needs an adapter to carry out
///
/// Effects are returned in the order they must be executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Upload the file the adapter is holding for this ticket
    Upload { ticket: Ticket },
    FetchNarration { ticket: Ticket, slide: SlideId },
    /// Create the audio resource for `handle` and play it once it can
    StartPlayback(AudioHandle),
    PausePlayback(HandleId),
    ResumePlayback(HandleId),
    /// Stop and drop the audio resource
    ReleasePlayback(HandleId),
    SendChat {
        ticket: Ticket,
        message: String,
        slide: SlideId,
    },
}

impl Effect {
    pub fn is_release(&self) -> bool {
        matches!(self, Effect::ReleasePlayback(_))
    }
}
