//! Browser wiring: binds the theme service, the form controller and the
//! submission handler to the live document.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend renders the form; this module looks elements up by id and
//! registers listeners. Listeners live as long as the page, so their
//! closures are leaked with `forget`.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlButtonElement, HtmlElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement,
};

use crate::config::{CONFIG_ELEMENT_ID, UiConfig};
use crate::lifecycle::{prepare_page, waits_for_dom};
use crate::net::api::{GlooTransport, SubmissionGate, create_playlist};
use crate::state::form::{FormElement, FormView, select_all_songs, update_time_range_state};
use crate::util::storage::BrowserStore;
use crate::util::theme::{BrowserThemeDocument, ThemeService};

/// [`FormView`] over the live document.
pub struct DomForm {
    document: Document,
}

impl DomForm {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, element: FormElement) -> Option<Element> {
        self.document.get_element_by_id(element.id())
    }
}

fn control_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    el.dyn_ref::<HtmlButtonElement>().map(HtmlButtonElement::value)
}

fn set_control_value(el: &Element, value: &str) -> bool {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    } else {
        return false;
    }
    true
}

impl FormView for DomForm {
    fn is_present(&self, element: FormElement) -> bool {
        self.element(element).is_some()
    }

    fn value(&self, element: FormElement) -> Option<String> {
        let el = self.element(element)?;
        if element == FormElement::Status {
            return Some(el.text_content().unwrap_or_default());
        }
        control_value(&el).or_else(|| el.text_content())
    }

    fn set_value(&self, element: FormElement, value: &str) {
        let Some(el) = self.element(element) else {
            return;
        };
        if element == FormElement::Status || !set_control_value(&el, value) {
            el.set_text_content(Some(value));
        }
    }

    fn set_disabled(&self, element: FormElement, disabled: bool) {
        let Some(el) = self.element(element) else {
            return;
        };
        if let Some(button) = el.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.set_disabled(disabled);
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            select.set_disabled(disabled);
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.set_disabled(disabled);
        } else {
            let result = if disabled {
                el.set_attribute("disabled", "")
            } else {
                el.remove_attribute("disabled")
            };
            if let Err(e) = result {
                log::warn!("failed to toggle disabled on #{}: {e:?}", element.id());
            }
        }
    }

    fn set_opacity(&self, element: FormElement, opacity: &str) {
        let Some(el) = self.element(element) else {
            return;
        };
        let Some(el) = el.dyn_ref::<HtmlElement>() else {
            return;
        };
        if let Err(e) = el.style().set_property("opacity", opacity) {
            log::warn!("failed to set opacity on #{}: {e:?}", element.id());
        }
    }

    fn set_title(&self, element: FormElement, title: &str) {
        if let Some(el) = self.element(element) {
            if let Some(el) = el.dyn_ref::<HtmlElement>() {
                el.set_title(title);
            }
        }
    }
}

fn listen<T: AsRef<EventTarget>>(target: Option<T>, event: &str, handler: impl FnMut(Event) + 'static) {
    let Some(target) = target else {
        return;
    };
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    match target
        .as_ref()
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
    {
        Ok(()) => cb.forget(),
        Err(e) => log::warn!("failed to listen for {event}: {e:?}"),
    }
}

/// Read the config, install the console logger, and mount once the DOM is
/// parsed.
pub fn boot() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    let (config, config_err) = match raw.as_deref().map(UiConfig::from_json) {
        Some(Ok(config)) => (config, None),
        Some(Err(e)) => (UiConfig::default(), Some(e)),
        None => (UiConfig::default(), None),
    };

    if let Err(e) = console_log::init_with_level(config.log_level) {
        log::debug!("console logger already installed: {e}");
    }
    if let Some(e) = config_err {
        log::warn!("ignoring page config: {e}");
    }

    if waits_for_dom(&document.ready_state()) {
        let doc = document.clone();
        let config = Cell::new(Some(config));
        listen(Some(document), "DOMContentLoaded", move |_| {
            if let Some(config) = config.take() {
                mount(doc.clone(), config);
            }
        });
    } else {
        mount(document, config);
    }
}

fn mount(document: Document, config: UiConfig) {
    let config = Rc::new(config);
    let form = Rc::new(DomForm::new(document));

    let theme = ThemeService::new(
        BrowserStore::open(),
        BrowserThemeDocument,
        config.theme_storage_key.clone(),
    );
    prepare_page(form.as_ref(), &theme);
    listen(form.element(FormElement::ThemeToggle), "click", move |_| {
        let next = theme.toggle();
        log::debug!("theme toggled to {}", next.as_str());
    });

    let gate = SubmissionGate::new();
    listen(form.element(FormElement::Submit), "click", {
        let form = Rc::clone(&form);
        let config = Rc::clone(&config);
        move |_| {
            let Some(pass) = gate.try_enter() else {
                log::debug!("submission already in flight");
                return;
            };
            let form = Rc::clone(&form);
            let config = Rc::clone(&config);
            wasm_bindgen_futures::spawn_local(async move {
                let _pass = pass;
                if let Err(e) = create_playlist(form.as_ref(), &GlooTransport, &config.endpoint).await {
                    log::error!("create playlist: {e}");
                }
            });
        }
    });

    listen(form.element(FormElement::Source), "change", {
        let form = Rc::clone(&form);
        move |_| update_time_range_state(form.as_ref())
    });

    listen(form.element(FormElement::SelectAll), "click", {
        let form = Rc::clone(&form);
        let limit = config.select_all_limit;
        move |_| select_all_songs(form.as_ref(), limit)
    });

    log::info!("playlist page ready");
}
