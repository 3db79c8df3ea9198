//! Wire types shared by the slidecast crates
//!
//! These mirror the JSON bodies exchanged with the slide backend. The
//! browser adapter and the native client both decode into them.

use serde::{Deserialize, Serialize};

/// Slide identifier (path of the slide image relative to the static root)
pub type SlideId = String;

/// Multipart field name the backend expects the PDF under
pub const UPLOAD_FIELD: &str = "pdf";

pub const UPLOAD_PATH: &str = "/upload";
pub const SCRIPT_PATH: &str = "/generate-slide-script";
pub const CHAT_PATH: &str = "/chat";

/// The three backend calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Upload,
    Script,
    Chat,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Upload => UPLOAD_PATH,
            Endpoint::Script => SCRIPT_PATH,
            Endpoint::Chat => CHAT_PATH,
        }
    }

    /// Shown when the request never produced a response
    pub fn transport_error_message(&self) -> &'static str {
        match self {
            Endpoint::Upload => "An error occurred during upload.",
            Endpoint::Script => "Failed to fetch audio script.",
            Endpoint::Chat => "Failed to send message.",
        }
    }

    /// Shown when the backend failed without saying why
    pub fn backend_error_message(&self) -> &'static str {
        match self {
            Endpoint::Upload => "Failed to process PDF.",
            Endpoint::Script => "Could not load audio script.",
            Endpoint::Chat => "Error communicating with the assistant.",
        }
    }
}

// ============================================================================
// Upload
// ============================================================================

/// Successful `/upload` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UploadResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub slides: Vec<SlideId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_base: Option<String>,
}

// ============================================================================
// Narration
// ============================================================================

/// Request body for `/generate-slide-script`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptRequest {
    pub slide_image_path: SlideId,
}

/// Response body for `/generate-slide-script`
///
/// `audio_url` is optional on the wire: a backend that only managed to
/// produce the script text answers 2xx without it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScriptResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ============================================================================
// Chat
// ============================================================================

/// Request body for `/chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub slide_image_path: SlideId,
}

/// Successful `/chat` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

// ============================================================================
// Errors
// ============================================================================

/// Error body any endpoint may answer with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Parse an error body, tolerating bodies that are not JSON at all
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}
