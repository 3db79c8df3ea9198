use slidecast_core::PresenterConfig;
use std::env;

/// Environment variable overriding the backend base URL
pub const API_URL_ENV: &str = "SLIDECAST_API_URL";

/// Build the presenter configuration from the environment
///
/// A `.env` file in the working directory is honoured. Without an override
/// the local development backend is used.
pub fn load_config() -> PresenterConfig {
    let _ = dotenvy::dotenv();
    match env::var(API_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => {
            log::info!("Using backend at {}", url);
            PresenterConfig::new(url.trim())
        }
        _ => PresenterConfig::default(),
    }
}
