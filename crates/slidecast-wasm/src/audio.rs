//! The one narration audio element
//!
//! Holds at most one `HtmlAudioElement`. Starting a new clip while one is
//! loaded replaces it; releasing detaches every callback so late events
//! from a dropped element cannot reach the coordinator.

use crate::utils;
use slidecast_core::{AudioHandle, Event, HandleId};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// Where media callbacks report to
pub type EventSink = Rc<dyn Fn(Event)>;

struct LoadedClip {
    id: HandleId,
    element: HtmlAudioElement,
    /// Cleared once playback has been kicked off or the user paused
    autoplay: Rc<Cell<bool>>,
    _on_ready: Closure<dyn FnMut()>,
    _on_ended: Closure<dyn FnMut()>,
    _on_error: Closure<dyn FnMut()>,
}

pub struct AudioPlayer {
    clip: Option<LoadedClip>,
    sink: EventSink,
}

impl AudioPlayer {
    pub fn new(sink: EventSink) -> Self {
        Self { clip: None, sink }
    }

    /// Create the element for `handle` and play it once it can play through
    pub fn start(&mut self, handle: &AudioHandle, url: &str) -> Result<(), JsValue> {
        if let Some(old) = self.clip.take() {
            log::warn!("Replacing {} that was never released", old.id);
            detach(old);
        }

        let id = handle.id;
        let element = HtmlAudioElement::new_with_src(url)?;
        let autoplay = Rc::new(Cell::new(true));

        let on_ready = {
            let element = element.clone();
            let autoplay = autoplay.clone();
            let sink = self.sink.clone();
            Closure::wrap(Box::new(move || {
                if autoplay.replace(false) {
                    play(&element, id, sink.clone());
                }
            }) as Box<dyn FnMut()>)
        };
        let on_ended = {
            let sink = self.sink.clone();
            Closure::wrap(Box::new(move || sink(Event::PlaybackCompleted(id))) as Box<dyn FnMut()>)
        };
        let on_error = {
            let sink = self.sink.clone();
            Closure::wrap(Box::new(move || {
                sink(Event::PlaybackFailed {
                    handle: id,
                    error: "media element error".to_string(),
                })
            }) as Box<dyn FnMut()>)
        };

        element.set_oncanplaythrough(Some(on_ready.as_ref().unchecked_ref()));
        element.set_onended(Some(on_ended.as_ref().unchecked_ref()));
        element.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        element.load();
        log::debug!("Loading {} from {}", id, url);

        self.clip = Some(LoadedClip {
            id,
            element,
            autoplay,
            _on_ready: on_ready,
            _on_ended: on_ended,
            _on_error: on_error,
        });
        Ok(())
    }

    pub fn pause(&mut self, id: HandleId) -> Result<(), JsValue> {
        if let Some(clip) = self.active(id) {
            clip.autoplay.set(false);
            clip.element.pause()?;
        }
        Ok(())
    }

    pub fn resume(&mut self, id: HandleId) {
        if let Some(clip) = self.active(id) {
            clip.autoplay.set(false);
            play(&clip.element, id, self.sink.clone());
        }
    }

    pub fn release(&mut self, id: HandleId) {
        match self.clip.take() {
            Some(clip) if clip.id == id => detach(clip),
            other => {
                log::debug!("Release of {} does not match the loaded clip", id);
                self.clip = other;
            }
        }
    }

    fn active(&self, id: HandleId) -> Option<&LoadedClip> {
        self.clip.as_ref().filter(|clip| clip.id == id)
    }
}

/// Start playback; a rejected play promise (autoplay policy, bad source)
/// is reported as a playback failure
///
/// Pausing before the promise settles rejects it with `AbortError`, which
/// is not a failure.
fn play(element: &HtmlAudioElement, id: HandleId, sink: EventSink) {
    match element.play() {
        Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => {}
                Err(e) if utils::is_abort_error(&e) => {
                    log::debug!("Play of {} interrupted by pause", id);
                }
                Err(e) => sink(Event::PlaybackFailed {
                    handle: id,
                    error: utils::describe_js_error(&e),
                }),
            }
        }),
        Err(e) => sink(Event::PlaybackFailed {
            handle: id,
            error: utils::describe_js_error(&e),
        }),
    }
}

fn detach(clip: LoadedClip) {
    let element = &clip.element;
    element.set_oncanplaythrough(None);
    element.set_onended(None);
    element.set_onerror(None);
    let _ = element.pause();
    element.set_src("");
    log::debug!("Released {}", clip.id);
}
