//! # slidecast-api
//!
//! Native client for the slide backend and a headless driver for the
//! presentation coordinator.
//!
//! - [`SlideBackend`]: the three backend calls behind one async trait
//! - [`HttpBackend`]: reqwest implementation of it
//! - [`Presenter`]: runs coordinator effects on tokio tasks and feeds their
//!   completions back as events
//!
//! ## Example
//!
//! ```rust,no_run
//! use slidecast_api::{load_config, HttpBackend, NullMedia, PdfUpload, Presenter};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = load_config();
//!     let backend = HttpBackend::new(config.clone());
//!     let mut presenter = Presenter::new(backend, NullMedia, config);
//!
//!     presenter.upload(Some(PdfUpload::from_path("lecture.pdf").await?));
//!     presenter.step().await?;
//!     println!("{}", presenter.snapshot().deck.label);
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod presenter;

pub use backend::{PdfUpload, SlideBackend};
pub use config::{load_config, API_URL_ENV};
pub use error::ApiError;
pub use http::HttpBackend;
pub use presenter::{MediaOutput, NullMedia, Presenter};
