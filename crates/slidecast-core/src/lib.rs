//! # slidecast-core
//!
//! State coordinator for a narrated slideshow with a per-slide chat.
//!
//! The crate is a pure state machine: adapters feed it [`Event`]s, carry
//! out the [`Effect`]s it returns (network requests, audio playback) and
//! render the [`Snapshot`] it exposes. Nothing in here performs I/O, so
//! the whole behaviour can be exercised without a browser.
//!
//! ## Example
//!
//! ```rust
//! use slidecast_core::{Coordinator, Effect, Event, UploadOutcome};
//!
//! let mut coordinator = Coordinator::default();
//! let effects = coordinator.handle(Event::UploadRequested(Some(
//!     slidecast_core::SelectedFile::new("deck.pdf", "application/pdf"),
//! )));
//! let ticket = match effects.as_slice() {
//!     [Effect::Upload { ticket }] => *ticket,
//!     other => panic!("unexpected effects: {other:?}"),
//! };
//!
//! coordinator.handle(Event::UploadFinished {
//!     ticket,
//!     result: Ok(UploadOutcome {
//!         message: None,
//!         slides: vec!["s1.png".into(), "s2.png".into()],
//!     }),
//! });
//!
//! assert_eq!(coordinator.snapshot().deck.label, "Slide 1 of 2");
//! ```

pub mod chat;
pub mod config;
pub mod coordinator;
pub mod deck;
pub mod effect;
pub mod error;
pub mod ids;
pub mod narration;
pub mod snapshot;
pub mod upload;


pub use chat::{ChatMessage, ChatThread, Sender};
pub use config::PresenterConfig;
pub use coordinator::Coordinator;
pub use deck::SlideDeck;
pub use effect::{Effect, Event, NarrationClip, UploadOutcome};
pub use error::InputError;
pub use ids::{HandleId, Ticket};
pub use narration::{AudioHandle, NarrationSession, NarrationState};
pub use snapshot::{ChatView, DeckView, NarrationPhase, NarrationView, Snapshot, StatusLine};
pub use upload::SelectedFile;

pub use slidecast_types::SlideId;
