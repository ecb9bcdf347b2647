//! In-memory page backend, used by tests and embedders without a browser.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{Document, Element, EventKind, Listener};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Script,
    Container,
    Select,
    NumberInput,
    Checkbox,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

struct ElementState {
    kind: ElementKind,
    value: String,
    checked: bool,
    options: Vec<SelectOption>,
    selected: Option<usize>,
    text: String,
    attributes: HashMap<String, String>,
    listeners: Vec<(EventKind, Listener)>,
}

#[derive(Clone)]
pub struct MemoryElement(Rc<RefCell<ElementState>>);

impl MemoryElement {
    fn with_kind(kind: ElementKind) -> Self {
        Self(Rc::new(RefCell::new(ElementState {
            kind,
            value: String::new(),
            checked: false,
            options: Vec::new(),
            selected: None,
            text: String::new(),
            attributes: HashMap::new(),
            listeners: Vec::new(),
        })))
    }

    /// Inert data script, e.g. `<script type="application/json">`.
    pub fn script(text: &str) -> Self {
        let element = Self::with_kind(ElementKind::Script);
        element.0.borrow_mut().text = text.to_string();
        element
    }

    pub fn container() -> Self {
        Self::with_kind(ElementKind::Container)
    }

    /// Select with `(value, text)` options and the first one selected.
    pub fn select(options: &[(&str, &str)]) -> Self {
        let element = Self::with_kind(ElementKind::Select);
        {
            let mut state = element.0.borrow_mut();
            state.options = options
                .iter()
                .map(|(value, text)| SelectOption {
                    value: value.to_string(),
                    text: text.to_string(),
                })
                .collect();
            let selected = if state.options.is_empty() { None } else { Some(0) };
            state.selected = selected;
        }
        element
    }

    pub fn number_input(value: &str) -> Self {
        let element = Self::with_kind(ElementKind::NumberInput);
        element.0.borrow_mut().value = value.to_string();
        element
    }

    pub fn checkbox(checked: bool) -> Self {
        let element = Self::with_kind(ElementKind::Checkbox);
        element.0.borrow_mut().checked = checked;
        element
    }

    pub fn text() -> Self {
        Self::with_kind(ElementKind::Text)
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.0.borrow().kind
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.0
            .borrow()
            .listeners
            .iter()
            .filter(|(registered, _)| *registered == kind)
            .count()
    }

    /// Run every listener registered for `kind`.
    pub fn dispatch(&self, kind: EventKind) {
        // Listeners may read this element, so release the borrow first.
        let listeners: Vec<Listener> = self
            .0
            .borrow()
            .listeners
            .iter()
            .filter(|(registered, _)| *registered == kind)
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }

    /// Replace the field text the way typing does, firing `input`.
    pub fn type_text(&self, value: &str) {
        self.0.borrow_mut().value = value.to_string();
        self.dispatch(EventKind::Input);
    }

    /// Flip a checkbox the way a click does, firing `change`.
    pub fn toggle(&self) {
        {
            let mut state = self.0.borrow_mut();
            state.checked = !state.checked;
        }
        self.dispatch(EventKind::Change);
    }

    /// Pick the option with `value`, firing `input` then `change`.
    /// Unknown values leave the select without a selection.
    pub fn choose(&self, value: &str) {
        self.set_value(value);
        self.dispatch(EventKind::Input);
        self.dispatch(EventKind::Change);
    }
}

impl Element for MemoryElement {
    fn value(&self) -> Option<String> {
        let state = self.0.borrow();
        match state.kind {
            ElementKind::Select => Some(
                state
                    .selected
                    .and_then(|index| state.options.get(index))
                    .map(|option| option.value.clone())
                    .unwrap_or_default(),
            ),
            ElementKind::NumberInput | ElementKind::Checkbox => Some(state.value.clone()),
            _ => None,
        }
    }

    fn set_value(&self, value: &str) {
        let mut state = self.0.borrow_mut();
        match state.kind {
            ElementKind::Select => {
                let selected = state.options.iter().position(|option| option.value == value);
                state.selected = selected;
            }
            ElementKind::NumberInput | ElementKind::Checkbox => state.value = value.to_string(),
            _ => {}
        }
    }

    fn is_checked(&self) -> bool {
        let state = self.0.borrow();
        state.kind == ElementKind::Checkbox && state.checked
    }

    fn is_checkbox(&self) -> bool {
        self.kind() == ElementKind::Checkbox
    }

    fn selected_option_text(&self) -> Option<String> {
        let state = self.0.borrow();
        state
            .selected
            .and_then(|index| state.options.get(index))
            .map(|option| option.text.clone())
    }

    fn text_content(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text_content(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn add_listener(&self, kind: EventKind, listener: Listener) -> Result<()> {
        self.0.borrow_mut().listeners.push((kind, listener));
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MemoryDocument {
    elements: Rc<RefCell<HashMap<String, MemoryElement>>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `element` under `id` and hand back a handle to it.
    pub fn insert(&self, id: &str, element: MemoryElement) -> MemoryElement {
        self.elements
            .borrow_mut()
            .insert(id.to_string(), element.clone());
        element
    }

    pub fn remove(&self, id: &str) -> Option<MemoryElement> {
        self.elements.borrow_mut().remove(id)
    }

    /// Text of the element with `id`, if present.
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.element_by_id(id).map(|element| element.text_content())
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.elements.borrow().get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_select_reports_selected_option() {
        let select = MemoryElement::select(&[("", "---------"), ("deluxe", "Deluxe Room")]);
        assert_eq!(select.value().as_deref(), Some(""));
        assert_eq!(select.selected_option_text().as_deref(), Some("---------"));

        select.choose("deluxe");
        assert_eq!(select.value().as_deref(), Some("deluxe"));
        assert_eq!(select.selected_option_text().as_deref(), Some("Deluxe Room"));

        select.choose("missing");
        assert_eq!(select.value().as_deref(), Some(""));
        assert_eq!(select.selected_option_text(), None);
    }

    #[test]
    fn test_dispatch_only_reaches_matching_listeners() {
        let input = MemoryElement::number_input("1");
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        input
            .add_listener(EventKind::Input, Rc::new(move || counter.set(counter.get() + 1)))
            .unwrap();

        input.type_text("2");
        input.dispatch(EventKind::Change);
        assert_eq!(fired.get(), 1);
        assert_eq!(input.value().as_deref(), Some("2"));
    }

    #[test]
    fn test_listener_may_read_its_element() {
        let checkbox = MemoryElement::checkbox(false);
        let seen = Rc::new(Cell::new(false));
        let (handle, sink) = (checkbox.clone(), Rc::clone(&seen));
        checkbox
            .add_listener(EventKind::Change, Rc::new(move || sink.set(handle.is_checked())))
            .unwrap();

        checkbox.toggle();
        assert!(seen.get());
    }

    #[test]
    fn test_change_event_follows_field_type() {
        assert_eq!(MemoryElement::checkbox(true).change_event(), EventKind::Change);
        assert_eq!(MemoryElement::number_input("").change_event(), EventKind::Input);
        assert_eq!(MemoryElement::select(&[]).change_event(), EventKind::Input);
    }

    #[test]
    fn test_document_lookup() {
        let document = MemoryDocument::new();
        document.insert("summaryTotal", MemoryElement::text());
        assert!(document.element_by_id("summaryTotal").is_some());
        assert!(document.element_by_id("summaryDays").is_none());
        assert_eq!(document.text_of("summaryTotal").as_deref(), Some(""));
    }
}
