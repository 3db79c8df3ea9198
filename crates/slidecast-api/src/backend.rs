use crate::error::ApiError;
use async_trait::async_trait;
use slidecast_core::{NarrationClip, SelectedFile, UploadOutcome};
use slidecast_core::upload::PDF_MIME_TYPE;
use std::path::Path;

/// A PDF ready to be sent to `/upload`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfUpload {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl PdfUpload {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, typing it by extension
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| ApiError::File {
            path: path.display().to_string(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let is_pdf = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        let mime_type = if is_pdf {
            PDF_MIME_TYPE
        } else {
            "application/octet-stream"
        };
        Ok(Self::new(name, mime_type, bytes))
    }

    /// What upload validation looks at
    pub fn selection(&self) -> SelectedFile {
        SelectedFile::new(self.name.clone(), self.mime_type.clone())
    }
}

/// The slide backend: upload processing, narration and chat
#[async_trait]
pub trait SlideBackend: Send + Sync {
    /// Upload a PDF and get back the slide identifiers
    async fn upload(&self, file: PdfUpload) -> Result<UploadOutcome, ApiError>;

    /// Generate narration for one slide
    async fn generate_script(&self, slide: &str) -> Result<NarrationClip, ApiError>;

    /// Ask a question about one slide
    async fn chat(&self, message: &str, slide: &str) -> Result<String, ApiError>;
}
