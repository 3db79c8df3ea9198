//! Backend calls from the browser
//!
//! Every call resolves to the value or to the message the user should see;
//! nothing here throws past its caller.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use slidecast_core::{NarrationClip, PresenterConfig, UploadOutcome};
use slidecast_types::{
    ChatRequest, ChatResponse, Endpoint, ErrorResponse, ScriptRequest, ScriptResponse,
    UploadResponse, UPLOAD_FIELD,
};
use web_sys::{File, FormData};

pub async fn upload(config: &PresenterConfig, file: &File) -> Result<UploadOutcome, String> {
    let endpoint = Endpoint::Upload;
    let form = FormData::new().map_err(|e| transport(endpoint, &format!("{:?}", e)))?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(|e| transport(endpoint, &format!("{:?}", e)))?;

    let response = Request::post(&config.endpoint(endpoint.path()))
        .body(form)
        .map_err(|e| transport(endpoint, &e.to_string()))?
        .send()
        .await
        .map_err(|e| transport(endpoint, &e.to_string()))?;

    read::<UploadResponse>(endpoint, response).await.map(Into::into)
}

pub async fn generate_script(config: &PresenterConfig, slide: &str) -> Result<NarrationClip, String> {
    let body = ScriptRequest {
        slide_image_path: slide.to_string(),
    };
    let response: ScriptResponse = post_json(config, Endpoint::Script, &body).await?;
    NarrationClip::from_response(response)
}

pub async fn chat(config: &PresenterConfig, message: &str, slide: &str) -> Result<String, String> {
    let body = ChatRequest {
        message: message.to_string(),
        slide_image_path: slide.to_string(),
    };
    let response: ChatResponse = post_json(config, Endpoint::Chat, &body).await?;
    Ok(response.reply)
}

async fn post_json<B, R>(config: &PresenterConfig, endpoint: Endpoint, body: &B) -> Result<R, String>
where
    B: serde::Serialize,
    R: DeserializeOwned,
{
    let url = config.endpoint(endpoint.path());
    log::debug!("POST {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| transport(endpoint, &e.to_string()))?
        .send()
        .await
        .map_err(|e| transport(endpoint, &e.to_string()))?;

    read(endpoint, response).await
}

async fn read<R: DeserializeOwned>(endpoint: Endpoint, response: Response) -> Result<R, String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| transport(endpoint, &e.to_string()))?;

    if !response.ok() {
        log::warn!("{} returned {}: {}", endpoint.path(), status, body);
        return Err(ErrorResponse::from_body(&body)
            .error
            .unwrap_or_else(|| endpoint.backend_error_message().to_string()));
    }

    serde_json::from_str(&body).map_err(|e| transport(endpoint, &e.to_string()))
}

fn transport(endpoint: Endpoint, detail: &str) -> String {
    log::error!("{} failed: {}", endpoint.path(), detail);
    endpoint.transport_error_message().to_string()
}
