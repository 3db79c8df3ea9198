//! Applies a coordinator snapshot to the page

use crate::dom;
use crate::markdown;
use slidecast_core::{ChatMessage, PresenterConfig, Sender, Snapshot};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlButtonElement, HtmlImageElement, HtmlInputElement};

/// Element handles looked up once at startup
pub struct View {
    pub document: Document,
    pub file_input: HtmlInputElement,
    pub upload_button: Element,
    upload_status: web_sys::HtmlElement,
    slideshow_section: Element,
    slide_image: HtmlImageElement,
    pub prev_button: HtmlButtonElement,
    pub next_button: HtmlButtonElement,
    slide_info: Element,
    pub present_button: HtmlButtonElement,
    transcript: Option<Element>,
    chat_section: Element,
    chat_history: Element,
    pub chat_input: HtmlInputElement,
    pub send_button: HtmlButtonElement,
}

impl View {
    pub fn bind(document: Document) -> Result<Self, JsValue> {
        Ok(Self {
            file_input: dom::get_typed_by_id(&document, "pdf-upload")?,
            upload_button: dom::get_element_by_id(&document, "upload-button")?,
            upload_status: dom::get_typed_by_id(&document, "upload-status")?,
            slideshow_section: dom::get_element_by_id(&document, "slideshow-section")?,
            slide_image: dom::get_typed_by_id(&document, "current-slide-image")?,
            prev_button: dom::get_typed_by_id(&document, "prev-slide")?,
            next_button: dom::get_typed_by_id(&document, "next-slide")?,
            slide_info: dom::get_element_by_id(&document, "slide-info")?,
            present_button: dom::get_typed_by_id(&document, "present-slide-button")?,
            // Optional: pages without a transcript panel still work
            transcript: document.get_element_by_id("slide-transcript"),
            chat_section: dom::get_element_by_id(&document, "chat-section")?,
            chat_history: dom::get_element_by_id(&document, "chat-history")?,
            chat_input: dom::get_typed_by_id(&document, "chat-message")?,
            send_button: dom::get_typed_by_id(&document, "send-chat-button")?,
            document,
        })
    }

    pub fn render(&self, snapshot: &Snapshot, config: &PresenterConfig) -> Result<(), JsValue> {
        self.render_status(snapshot);
        self.render_deck(snapshot, config);
        self.render_narration(snapshot);
        self.render_chat(snapshot)
    }

    fn render_status(&self, snapshot: &Snapshot) {
        match &snapshot.status {
            Some(status) => {
                dom::set_text_content(&self.upload_status, &status.text);
                let color = if status.is_error { "red" } else { "green" };
                let _ = self.upload_status.style().set_property("color", color);
            }
            None => dom::set_text_content(&self.upload_status, ""),
        }
    }

    fn render_deck(&self, snapshot: &Snapshot, config: &PresenterConfig) {
        let deck = &snapshot.deck;
        dom::set_hidden(&self.slideshow_section, !deck.visible);

        if let Some(slide) = &deck.slide {
            let url = config.slide_url(slide);
            if self.slide_image.src() != url {
                self.slide_image.set_src(&url);
            }
        }
        dom::set_text_content(&self.slide_info, &deck.label);
        self.prev_button.set_disabled(!deck.previous_enabled);
        self.next_button.set_disabled(!deck.next_enabled);
    }

    fn render_narration(&self, snapshot: &Snapshot) {
        let narration = &snapshot.narration;
        self.present_button.set_text_content(Some(narration.toggle_label));
        self.present_button.set_disabled(!narration.toggle_enabled);

        if let Some(transcript) = &self.transcript {
            let text = narration.transcript.as_deref().unwrap_or("");
            dom::set_text_content(transcript, text);
            dom::set_hidden(transcript, text.is_empty());
        }
    }

    fn render_chat(&self, snapshot: &Snapshot) -> Result<(), JsValue> {
        let chat = &snapshot.chat;
        dom::set_hidden(&self.chat_section, !chat.visible);
        self.send_button.set_disabled(chat.awaiting_reply);

        dom::clear_element(&self.chat_history);
        for message in &chat.messages {
            let element = self.message_element(message)?;
            self.chat_history.append_child(&element)?;
        }
        dom::scroll_to_bottom(&self.chat_history);
        Ok(())
    }

    fn message_element(&self, message: &ChatMessage) -> Result<Element, JsValue> {
        let class = match message.sender {
            Sender::User => "chat-message user-message",
            Sender::Assistant => "chat-message assistant-message",
            Sender::Pending => "chat-message assistant-message thinking",
        };
        let element = dom::create_element_with_class(&self.document, "div", class)?;

        let label = self.document.create_element("strong")?;
        label.set_text_content(Some(message.sender.label()));
        element.append_child(&label)?;

        let body = dom::create_element_with_class(&self.document, "span", "message-content")?;
        match message.sender {
            Sender::Assistant => body.set_inner_html(&markdown::render_markdown(&message.text)),
            Sender::User | Sender::Pending => body.set_text_content(Some(&message.text)),
        }
        element.append_child(&body)?;
        Ok(element)
    }
}
