//! Browser backend. The module's start function mounts the booking summary
//! on the host page.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

use crate::controller::{config_from_page, PriceSummaryController};
use crate::dom::{Document, Element, EventKind, Listener};
use crate::error::{Result, SummaryError};

#[derive(Clone)]
pub struct WebElement(web_sys::Element);

impl WebElement {
    fn as_input(&self) -> Option<&HtmlInputElement> {
        self.0.dyn_ref::<HtmlInputElement>()
    }

    fn as_select(&self) -> Option<&HtmlSelectElement> {
        self.0.dyn_ref::<HtmlSelectElement>()
    }
}

impl Element for WebElement {
    fn value(&self) -> Option<String> {
        if let Some(input) = self.as_input() {
            return Some(input.value());
        }
        self.as_select().map(|select| select.value())
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.as_input() {
            input.set_value(value);
        } else if let Some(select) = self.as_select() {
            select.set_value(value);
        }
    }

    fn is_checked(&self) -> bool {
        self.as_input().map(|input| input.checked()).unwrap_or(false)
    }

    fn is_checkbox(&self) -> bool {
        self.as_input()
            .map(|input| input.type_().eq_ignore_ascii_case("checkbox"))
            .unwrap_or(false)
    }

    fn selected_option_text(&self) -> Option<String> {
        let select = self.as_select()?;
        let index = u32::try_from(select.selected_index()).ok()?;
        select
            .item(index)?
            .dyn_into::<HtmlOptionElement>()
            .ok()
            .map(|option| option.text())
    }

    fn text_content(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text_content(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn add_listener(&self, kind: EventKind, listener: Listener) -> Result<()> {
        let callback = Closure::<dyn FnMut()>::new(move || listener());
        self.0
            .add_event_listener_with_callback(kind.as_str(), callback.as_ref().unchecked_ref())
            .map_err(|e| SummaryError::Dom(format!("failed to listen for {}: {:?}", kind.as_str(), e)))?;
        // Listeners stay registered until the page unloads.
        callback.forget();
        Ok(())
    }
}

pub struct WebDocument(web_sys::Document);

impl Document for WebDocument {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.0.get_element_by_id(id).map(WebElement)
    }
}

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line),
            log::Level::Warn => web_sys::console::warn_1(&line),
            log::Level::Info => web_sys::console::info_1(&line),
            log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

thread_local! {
    // Listeners hold weak handles; this keeps the page's widget alive.
    static MOUNTED: RefCell<Option<Rc<PriceSummaryController<WebElement>>>> = RefCell::new(None);
}

fn mount(document: WebDocument) {
    let config = config_from_page(&document);
    match PriceSummaryController::initialize(&document, config) {
        Ok(Some(controller)) => MOUNTED.with(|mounted| *mounted.borrow_mut() = Some(controller)),
        Ok(None) => debug!("No booking summary to mount"),
        Err(e) => error!("Booking summary disabled: {}", e),
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    if document.ready_state() != "loading" {
        mount(WebDocument(document));
        return;
    }

    let page = document.clone();
    let on_ready = Closure::<dyn FnMut()>::once(move || mount(WebDocument(page)));
    if let Err(e) = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
    {
        error!("Failed to wait for DOMContentLoaded: {:?}", e);
    }
    on_ready.forget();
}
