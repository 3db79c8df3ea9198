use crate::backend::{PdfUpload, SlideBackend};
use crate::error::ApiError;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Serialize;
use slidecast_core::{NarrationClip, PresenterConfig, UploadOutcome};
use slidecast_types::{
    ChatRequest, ChatResponse, Endpoint, ErrorResponse, ScriptRequest, ScriptResponse,
    UploadResponse, UPLOAD_FIELD,
};

/// reqwest client for the slide backend
pub struct HttpBackend {
    config: PresenterConfig,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: PresenterConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &PresenterConfig {
        &self.config
    }

    async fn post_json<B, R>(&self, endpoint: Endpoint, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = self.config.endpoint(endpoint.path());
        log::debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        read_response(response).await
    }
}

async fn read_response<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = ErrorResponse::from_body(&body).error;
        log::warn!("Backend error {}: {:?}", status, message);
        return Err(ApiError::Backend {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl SlideBackend for HttpBackend {
    async fn upload(&self, file: PdfUpload) -> Result<UploadOutcome, ApiError> {
        let url = self.config.endpoint(Endpoint::Upload.path());
        log::info!("Uploading {} ({} bytes) to {}", file.name, file.bytes.len(), url);

        let part = Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(&file.mime_type)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self.client.post(url).multipart(form).send().await?;
        let parsed: UploadResponse = read_response(response).await?;
        Ok(parsed.into())
    }

    async fn generate_script(&self, slide: &str) -> Result<NarrationClip, ApiError> {
        let request = ScriptRequest {
            slide_image_path: slide.to_string(),
        };
        let response: ScriptResponse = self.post_json(Endpoint::Script, &request).await?;
        NarrationClip::from_response(response).map_err(ApiError::MissingAudio)
    }

    async fn chat(&self, message: &str, slide: &str) -> Result<String, ApiError> {
        let request = ChatRequest {
            message: message.to_string(),
            slide_image_path: slide.to_string(),
        };
        let response: ChatResponse = self.post_json(Endpoint::Chat, &request).await?;
        Ok(response.reply)
    }
}
