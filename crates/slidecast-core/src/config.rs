use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001";
pub const DEFAULT_STATIC_PREFIX: &str = "static";

/// Where the backend lives and how its static resources are addressed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenterConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_static_prefix")]
    pub static_prefix: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_static_prefix() -> String {
    DEFAULT_STATIC_PREFIX.to_string()
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl PresenterConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let api_base_url: String = api_base_url.into();
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            static_prefix: DEFAULT_STATIC_PREFIX.to_string(),
        }
    }

    /// Absolute URL of an API endpoint path such as `/chat`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base(), path.trim_start_matches('/'))
    }

    /// Absolute URL of a slide image
    pub fn slide_url(&self, slide: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base(),
            self.static_prefix.trim_matches('/'),
            slide.trim_start_matches('/')
        )
    }

    /// Absolute URL of a narration clip
    ///
    /// The backend answers with a path under its own origin; absolute URLs
    /// are passed through untouched.
    pub fn audio_url(&self, audio_url: &str) -> String {
        if audio_url.starts_with("http://") || audio_url.starts_with("https://") {
            audio_url.to_string()
        } else {
            format!("{}/{}", self.base(), audio_url.trim_start_matches('/'))
        }
    }

    fn base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}
