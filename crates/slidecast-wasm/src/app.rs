use crate::api;
use crate::audio::{AudioPlayer, EventSink};
use crate::render::View;
use slidecast_core::{Coordinator, Effect, Event, PresenterConfig, SelectedFile};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsValue;
use web_sys::{File, KeyboardEvent};

/// Browser side of the presenter: owns the coordinator and carries out
/// its effects
pub struct PresenterApp {
    config: PresenterConfig,
    view: View,
    coordinator: RefCell<Coordinator>,
    audio: RefCell<AudioPlayer>,
    staged_upload: RefCell<Option<File>>,
}

impl PresenterApp {
    pub fn new(config: PresenterConfig) -> Result<Rc<Self>, JsValue> {
        let view = View::bind(crate::document()?)?;

        Ok(Rc::new_cyclic(|weak: &Weak<Self>| {
            let weak = weak.clone();
            // Media callbacks are queued rather than dispatched in place so
            // they never run while the player is borrowed.
            let sink: EventSink = Rc::new(move |event: Event| {
                let weak = weak.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Some(app) = weak.upgrade() {
                        app.dispatch(event);
                    }
                });
            });

            Self {
                config,
                view,
                coordinator: RefCell::new(Coordinator::new()),
                audio: RefCell::new(AudioPlayer::new(sink)),
                staged_upload: RefCell::new(None),
            }
        }))
    }

    pub fn start(self: Rc<Self>) -> Result<(), JsValue> {
        self.setup_upload()?;
        self.setup_navigation()?;
        self.setup_present_button()?;
        self.setup_chat()?;
        self.render();
        Ok(())
    }

    fn setup_upload(self: &Rc<Self>) -> Result<(), JsValue> {
        let app = Rc::clone(self);
        crate::dom::add_listener(&self.view.upload_button, "click", move |_: web_sys::Event| {
            let file = app.view.file_input.files().and_then(|files| files.get(0));
            let selection = file
                .as_ref()
                .map(|f| SelectedFile::new(f.name(), f.type_()));
            *app.staged_upload.borrow_mut() = file;
            app.dispatch(Event::UploadRequested(selection));
        })
    }

    fn setup_navigation(self: &Rc<Self>) -> Result<(), JsValue> {
        let app = Rc::clone(self);
        crate::dom::add_listener(&self.view.prev_button, "click", move |_: web_sys::Event| {
            app.dispatch(Event::PreviousSlide);
        })?;

        let app = Rc::clone(self);
        crate::dom::add_listener(&self.view.next_button, "click", move |_: web_sys::Event| {
            app.dispatch(Event::NextSlide);
        })
    }

    fn setup_present_button(self: &Rc<Self>) -> Result<(), JsValue> {
        let app = Rc::clone(self);
        crate::dom::add_listener(&self.view.present_button, "click", move |_: web_sys::Event| {
            app.dispatch(Event::PresentToggled);
        })
    }

    fn setup_chat(self: &Rc<Self>) -> Result<(), JsValue> {
        let app = Rc::clone(self);
        crate::dom::add_listener(&self.view.send_button, "click", move |_: web_sys::Event| {
            app.submit_chat();
        })?;

        let app = Rc::clone(self);
        crate::dom::add_listener(&self.view.chat_input, "keypress", move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                event.prevent_default();
                app.submit_chat();
            }
        })
    }

    fn submit_chat(self: &Rc<Self>) {
        let text = self.view.chat_input.value();
        let was_waiting = self.coordinator.borrow().chat().is_awaiting_reply();
        self.dispatch(Event::ChatSubmitted(text));
        if !was_waiting && self.coordinator.borrow().chat().is_awaiting_reply() {
            self.view.chat_input.set_value("");
        }
    }

    /// Apply an event, run the resulting effects, then re-render
    fn dispatch(self: &Rc<Self>, event: Event) {
        log::debug!("Event: {:?}", event);
        let effects = self.coordinator.borrow_mut().handle(event);
        for effect in effects {
            self.execute(effect);
        }
        self.render();
    }

    fn execute(self: &Rc<Self>, effect: Effect) {
        match effect {
            Effect::Upload { ticket } => {
                let Some(file) = self.staged_upload.borrow_mut().take() else {
                    log::error!("Upload {} requested with no file staged", ticket);
                    return;
                };
                let app = Rc::clone(self);
                wasm_bindgen_futures::spawn_local(async move {
                    let result = api::upload(&app.config, &file).await;
                    app.dispatch(Event::UploadFinished { ticket, result });
                });
            }
            Effect::FetchNarration { ticket, slide } => {
                let app = Rc::clone(self);
                wasm_bindgen_futures::spawn_local(async move {
                    let result = api::generate_script(&app.config, &slide).await;
                    app.dispatch(Event::NarrationFetched { ticket, result });
                });
            }
            Effect::SendChat {
                ticket,
                message,
                slide,
            } => {
                let app = Rc::clone(self);
                wasm_bindgen_futures::spawn_local(async move {
                    let result = api::chat(&app.config, &message, &slide).await;
                    app.dispatch(Event::ChatReplied { ticket, result });
                });
            }
            Effect::StartPlayback(handle) => {
                let url = self.config.audio_url(&handle.audio_url);
                let started = self.audio.borrow_mut().start(&handle, &url);
                if let Err(e) = started {
                    log::error!("Failed to create audio element: {:?}", e);
                    let app = Rc::clone(self);
                    let error = crate::utils::describe_js_error(&e);
                    wasm_bindgen_futures::spawn_local(async move {
                        app.dispatch(Event::PlaybackFailed {
                            handle: handle.id,
                            error,
                        });
                    });
                }
            }
            Effect::PausePlayback(handle) => {
                if let Err(e) = self.audio.borrow_mut().pause(handle) {
                    log::warn!("Pause failed: {:?}", e);
                }
            }
            Effect::ResumePlayback(handle) => self.audio.borrow_mut().resume(handle),
            Effect::ReleasePlayback(handle) => self.audio.borrow_mut().release(handle),
        }
    }

    fn render(&self) {
        let snapshot = self.coordinator.borrow().snapshot();
        if let Err(e) = self.view.render(&snapshot, &self.config) {
            log::error!("Render failed: {:?}", e);
        }
    }
}
