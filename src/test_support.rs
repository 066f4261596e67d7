//! In-memory stand-ins for the page, the root theme attribute and the HTTP
//! transport.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::UiError;
use crate::net::api::{HttpResponse, HttpTransport};
use crate::state::form::{FormElement, FormView, TOP_TRACKS_DESCRIPTION};
use crate::util::theme::ThemeDocument;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FakeElement {
    pub value: String,
    pub disabled: bool,
    pub opacity: String,
    pub title: String,
}

/// The playlist form with every element present.
#[derive(Debug, Default)]
pub struct FakeForm {
    elements: RefCell<HashMap<FormElement, FakeElement>>,
}

impl FakeForm {
    pub fn playlist_page() -> Self {
        let form = Self::default();
        for (element, value) in [
            (FormElement::Source, "top"),
            (FormElement::TimeRange, "short_term"),
            (FormElement::Limit, "50"),
            (FormElement::Name, "Meine Lieblingssongs"),
            (FormElement::Description, TOP_TRACKS_DESCRIPTION),
            (FormElement::Public, "false"),
            (FormElement::SelectAll, ""),
            (FormElement::Submit, ""),
            (FormElement::Status, ""),
            (FormElement::ThemeToggle, ""),
        ] {
            form.elements.borrow_mut().insert(
                element,
                FakeElement {
                    value: value.to_owned(),
                    ..FakeElement::default()
                },
            );
        }
        form
    }

    #[must_use]
    pub fn with(self, element: FormElement, value: &str) -> Self {
        self.set_value(element, value);
        self
    }

    #[must_use]
    pub fn without(self, element: FormElement) -> Self {
        self.elements.borrow_mut().remove(&element);
        self
    }

    pub fn element(&self, element: FormElement) -> Option<FakeElement> {
        self.elements.borrow().get(&element).cloned()
    }

    pub fn snapshot(&self) -> Vec<(FormElement, FakeElement)> {
        let mut all: Vec<_> = self
            .elements
            .borrow()
            .iter()
            .map(|(k, v)| (*k, v.clone()))
            .collect();
        all.sort_by_key(|(k, _)| k.id());
        all
    }

    fn update(&self, element: FormElement, f: impl FnOnce(&mut FakeElement)) {
        if let Some(el) = self.elements.borrow_mut().get_mut(&element) {
            f(el);
        }
    }
}

impl FormView for FakeForm {
    fn is_present(&self, element: FormElement) -> bool {
        self.elements.borrow().contains_key(&element)
    }

    fn value(&self, element: FormElement) -> Option<String> {
        self.elements.borrow().get(&element).map(|el| el.value.clone())
    }

    fn set_value(&self, element: FormElement, value: &str) {
        self.update(element, |el| el.value = value.to_owned());
    }

    fn set_disabled(&self, element: FormElement, disabled: bool) {
        self.update(element, |el| el.disabled = disabled);
    }

    fn set_opacity(&self, element: FormElement, opacity: &str) {
        self.update(element, |el| el.opacity = opacity.to_owned());
    }

    fn set_title(&self, element: FormElement, title: &str) {
        self.update(element, |el| el.title = title.to_owned());
    }
}

#[derive(Debug, Default)]
pub struct FakeThemeDocument {
    attribute: RefCell<Option<String>>,
    prefers_dark: bool,
}

impl FakeThemeDocument {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            attribute: RefCell::new(None),
            prefers_dark,
        }
    }
}

impl ThemeDocument for FakeThemeDocument {
    fn theme_attribute(&self) -> Option<String> {
        self.attribute.borrow().clone()
    }

    fn set_theme_attribute(&self, value: &str) {
        *self.attribute.borrow_mut() = Some(value.to_owned());
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }
}

/// Request captured by [`FakeTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentRequest {
    pub path: String,
    pub body: String,
}

/// Replies with a canned response (or error) and records what was sent.
/// While the request is "in flight" it snapshots the submit button state.
pub struct FakeTransport<'a> {
    reply: Result<HttpResponse, UiError>,
    sent: RefCell<Vec<SentRequest>>,
    watch: Option<&'a FakeForm>,
    submit_disabled_during_send: Cell<Option<bool>>,
    status_during_send: RefCell<Option<String>>,
}

impl<'a> FakeTransport<'a> {
    pub fn replying(status: u16, body: &str) -> Self {
        Self::with_reply(Ok(HttpResponse {
            status,
            body: body.to_owned(),
        }))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_reply(Err(UiError::Network(message.to_owned())))
    }

    fn with_reply(reply: Result<HttpResponse, UiError>) -> Self {
        Self {
            reply,
            sent: RefCell::new(Vec::new()),
            watch: None,
            submit_disabled_during_send: Cell::new(None),
            status_during_send: RefCell::new(None),
        }
    }

    #[must_use]
    pub fn watching(mut self, form: &'a FakeForm) -> Self {
        self.watch = Some(form);
        self
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.borrow().clone()
    }

    pub fn submit_disabled_during_send(&self) -> Option<bool> {
        self.submit_disabled_during_send.get()
    }

    pub fn status_during_send(&self) -> Option<String> {
        self.status_during_send.borrow().clone()
    }
}

impl HttpTransport for FakeTransport<'_> {
    async fn post_json(&self, path: &str, body: String) -> Result<HttpResponse, UiError> {
        self.sent.borrow_mut().push(SentRequest {
            path: path.to_owned(),
            body,
        });
        if let Some(form) = self.watch {
            self.submit_disabled_during_send
                .set(form.element(FormElement::Submit).map(|el| el.disabled));
            *self.status_during_send.borrow_mut() = form.value(FormElement::Status);
        }
        self.reply.clone()
    }
}
