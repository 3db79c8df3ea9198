//! Narration session: the single playable audio resource and its lifecycle
//!
//! ```text
//!   Idle --present--> Loading --fetched--> Playing <--toggle--> Paused
//!    ^                   |                    |                   |
//!    +------failed-------+----completed/error/stop/slide change---+
//! ```
//!
//! `Playing` and `Paused` own the one live [`AudioHandle`]; no other state
//! can hold one, so at most one narration exists at any time.

use crate::effect::{Effect, NarrationClip};
use crate::ids::{HandleId, IdAllocator, Ticket};
use slidecast_types::SlideId;

pub const PLAYBACK_ERROR: &str = "Error playing audio.";

/// One narration clip bound to the slide it was generated for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioHandle {
    pub id: HandleId,
    pub slide: SlideId,
    pub audio_url: String,
    pub transcript: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NarrationState {
    #[default]
    Idle,
    Loading {
        ticket: Ticket,
        slide: SlideId,
    },
    Playing(AudioHandle),
    Paused(AudioHandle),
}

/// Result of feeding one event to the session
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Transition {
    pub effects: Vec<Effect>,
    /// Message to surface in the chat log
    pub notice: Option<String>,
}

impl Transition {
    fn effects(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            notice: None,
        }
    }

    fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }
}

#[derive(Debug, Default, Clone)]
pub struct NarrationSession {
    state: NarrationState,
}

impl NarrationSession {
    pub fn state(&self) -> &NarrationState {
        &self.state
    }

    /// The live audio resource, if any
    pub fn handle(&self) -> Option<&AudioHandle> {
        match &self.state {
            NarrationState::Playing(handle) | NarrationState::Paused(handle) => Some(handle),
            NarrationState::Idle | NarrationState::Loading { .. } => None,
        }
    }

    pub fn live_resources(&self) -> usize {
        usize::from(self.handle().is_some())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, NarrationState::Loading { .. })
    }

    /// Present-control press while `slide` is on screen
    pub fn toggle(&mut self, slide: &SlideId, ids: &mut IdAllocator) -> Transition {
        match std::mem::take(&mut self.state) {
            NarrationState::Playing(handle) if &handle.slide == slide => {
                log::debug!("Pausing narration {}", handle.id);
                let effect = Effect::PausePlayback(handle.id);
                self.state = NarrationState::Paused(handle);
                Transition::effects(vec![effect])
            }
            NarrationState::Paused(handle) if &handle.slide == slide => {
                log::debug!("Resuming narration {}", handle.id);
                let effect = Effect::ResumePlayback(handle.id);
                self.state = NarrationState::Playing(handle);
                Transition::effects(vec![effect])
            }
            loading @ NarrationState::Loading { .. } => {
                log::debug!("Ignoring present toggle while narration is loading");
                self.state = loading;
                Transition::default()
            }
            previous => {
                // Idle, or a handle bound to some other slide: release first.
                self.state = previous;
                let mut effects = self.stop().effects;
                effects.push(self.begin_fetch(slide, ids));
                Transition::effects(effects)
            }
        }
    }

    fn begin_fetch(&mut self, slide: &SlideId, ids: &mut IdAllocator) -> Effect {
        let ticket = ids.ticket();
        log::info!("Requesting narration {} for {}", ticket, slide);
        self.state = NarrationState::Loading {
            ticket,
            slide: slide.clone(),
        };
        Effect::FetchNarration {
            ticket,
            slide: slide.clone(),
        }
    }

    /// Narration fetch finished
    pub fn fetched(
        &mut self,
        ticket: Ticket,
        result: Result<NarrationClip, String>,
        ids: &mut IdAllocator,
    ) -> Transition {
        let slide = match &self.state {
            NarrationState::Loading { ticket: expected, slide } if *expected == ticket => {
                slide.clone()
            }
            _ => {
                log::debug!("Discarding stale narration response {}", ticket);
                return Transition::default();
            }
        };

        match result {
            Ok(clip) => {
                let handle = AudioHandle {
                    id: ids.handle(),
                    slide,
                    audio_url: clip.audio_url,
                    transcript: clip.transcript,
                };
                log::info!("Starting narration {} ({})", handle.id, handle.audio_url);
                self.state = NarrationState::Playing(handle.clone());
                Transition::effects(vec![Effect::StartPlayback(handle)])
            }
            Err(error) => {
                log::warn!("Narration fetch {} failed: {}", ticket, error);
                self.state = NarrationState::Idle;
                Transition::default().with_notice(error)
            }
        }
    }

    /// Audio reached its end
    pub fn completed(&mut self, handle: HandleId) -> Transition {
        if self.handle().map(|h| h.id) != Some(handle) {
            log::debug!("Ignoring completion of inactive {}", handle);
            return Transition::default();
        }
        log::info!("Narration {} finished", handle);
        self.stop()
    }

    /// Audio element reported an error
    pub fn failed(&mut self, handle: HandleId, error: &str) -> Transition {
        if self.handle().map(|h| h.id) != Some(handle) {
            log::debug!("Ignoring error from inactive {}: {}", handle, error);
            return Transition::default();
        }
        log::warn!("Narration {} failed: {}", handle, error);
        self.stop().with_notice(PLAYBACK_ERROR)
    }

    /// Tear down whatever is active and return to `Idle`
    ///
    /// An in-flight fetch is abandoned; its response is discarded on arrival
    /// because its ticket no longer matches.
    pub fn stop(&mut self) -> Transition {
        match std::mem::take(&mut self.state) {
            NarrationState::Playing(handle) | NarrationState::Paused(handle) => {
                log::debug!("Releasing narration {}", handle.id);
                Transition::effects(vec![Effect::ReleasePlayback(handle.id)])
            }
            NarrationState::Loading { ticket, .. } => {
                log::debug!("Abandoning narration request {}", ticket);
                Transition::default()
            }
            NarrationState::Idle => Transition::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn slide(name: &str) -> SlideId {
        name.to_string()
    }

    fn start_playing(session: &mut NarrationSession, ids: &mut IdAllocator, name: &str) -> AudioHandle {
        let transition = session.toggle(&slide(name), ids);
        let ticket = match transition.effects.as_slice() {
            [Effect::FetchNarration { ticket, .. }] => *ticket,
            other => panic!("expected a fetch, got {other:?}"),
        };
        session.fetched(ticket, Ok(NarrationClip::new("/static/a1.mp3")), ids);
        session.handle().cloned().unwrap()
    }

    #[test]
    fn test_present_from_idle_fetches() {
        let mut session = NarrationSession::default();
        let mut ids = IdAllocator::default();
        let transition = session.toggle(&slide("s1.png"), &mut ids);

        assert!(matches!(
            transition.effects.as_slice(),
            [Effect::FetchNarration { slide, .. }] if slide == "s1.png"
        ));
        assert!(session.is_loading());
        assert_eq!(session.live_resources(), 0);
    }

    #[test]
    fn test_toggle_while_loading_is_ignored() {
        let mut session = NarrationSession::default();
        let mut ids = IdAllocator::default();
        session.toggle(&slide("s1.png"), &mut ids);
        let before = session.state().clone();

        let transition = session.toggle(&slide("s1.png"), &mut ids);
        assert_eq!(transition, Transition::default());
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_pause_and_resume_same_slide() {
        let mut session = NarrationSession::default();
        let mut ids = IdAllocator::default();
        let handle = start_playing(&mut session, &mut ids, "s1.png");

        let paused = session.toggle(&slide("s1.png"), &mut ids);
        assert_eq!(paused.effects, vec![Effect::PausePlayback(handle.id)]);
        assert!(matches!(session.state(), NarrationState::Paused(_)));

        let resumed = session.toggle(&slide("s1.png"), &mut ids);
        assert_eq!(resumed.effects, vec![Effect::ResumePlayback(handle.id)]);
        assert!(matches!(session.state(), NarrationState::Playing(_)));
    }

    #[test]
    fn test_stale_handle_is_released_before_new_fetch() {
        let mut session = NarrationSession::default();
        let mut ids = IdAllocator::default();
        let handle = start_playing(&mut session, &mut ids, "s1.png");

        let transition = session.toggle(&slide("s2.png"), &mut ids);
        assert_eq!(transition.effects.len(), 2);
        assert_eq!(transition.effects[0], Effect::ReleasePlayback(handle.id));
        assert!(matches!(
            &transition.effects[1],
            Effect::FetchNarration { slide, .. } if slide == "s2.png"
        ));
    }

    #[test]
    fn test_fetch_failure_returns_to_idle_with_notice() {
        let mut session = NarrationSession::default();
        let mut ids = IdAllocator::default();
        session.toggle(&slide("s1.png"), &mut ids);
        let ticket = match session.state() {
            NarrationState::Loading { ticket, .. } => *ticket,
            other => panic!("unexpected state {other:?}"),
        };

        let transition = session.fetched(ticket, Err("Could not load audio script.".into()), &mut ids);
        assert_eq!(session.state(), &NarrationState::Idle);
        assert_eq!(transition.notice.as_deref(), Some("Could not load audio script."));
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let mut session = NarrationSession::default();
        let mut ids = IdAllocator::default();
        session.toggle(&slide("s1.png"), &mut ids);
        session.stop();

        let transition = session.fetched(Ticket(1), Ok(NarrationClip::new("/a.mp3")), &mut ids);
        assert_eq!(transition, Transition::default());
        assert_eq!(session.state(), &NarrationState::Idle);
    }

    #[test]
    fn test_completion_releases() {
        let mut session = NarrationSession::default();
        let mut ids = IdAllocator::default();
        let handle = start_playing(&mut session, &mut ids, "s1.png");

        let transition = session.completed(handle.id);
        assert_eq!(transition.effects, vec![Effect::ReleasePlayback(handle.id)]);
        assert_eq!(session.live_resources(), 0);
    }

    #[test]
    fn test_completion_of_old_handle_is_ignored() {
        let mut session = NarrationSession::default();
        let mut ids = IdAllocator::default();
        let old = start_playing(&mut session, &mut ids, "s1.png");
        session.stop();
        let current = start_playing(&mut session, &mut ids, "s1.png");

        assert_eq!(session.completed(old.id), Transition::default());
        assert_eq!(session.handle(), Some(&current));
    }

    #[test]
    fn test_playback_error_while_paused() {
        let mut session = NarrationSession::default();
        let mut ids = IdAllocator::default();
        let handle = start_playing(&mut session, &mut ids, "s1.png");
        session.toggle(&slide("s1.png"), &mut ids);

        let transition = session.failed(handle.id, "decode error");
        assert_eq!(transition.effects, vec![Effect::ReleasePlayback(handle.id)]);
        assert_eq!(transition.notice.as_deref(), Some(PLAYBACK_ERROR));
        assert_eq!(session.state(), &NarrationState::Idle);
    }
}
