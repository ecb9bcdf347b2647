//! The slice of the DOM the summary widget touches.
//!
//! Handles take `&self` for writes, like browser element handles: the page
//! owns the element state and any number of handles may point at it.

pub mod memory;

use std::rc::Rc;

use crate::error::Result;

/// Event a form field reports changes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Fires on every edit of a text or number field.
    Input,
    /// Fires when a checkbox is toggled.
    Change,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Input => "input",
            EventKind::Change => "change",
        }
    }
}

pub type Listener = Rc<dyn Fn()>;

pub trait Element {
    /// Current value of an input or select; `None` for elements without one.
    fn value(&self) -> Option<String>;

    fn set_value(&self, value: &str);

    fn is_checked(&self) -> bool;

    fn is_checkbox(&self) -> bool;

    /// Text of the selected option of a select element.
    fn selected_option_text(&self) -> Option<String>;

    fn text_content(&self) -> String;

    fn set_text_content(&self, text: &str);

    fn attribute(&self, name: &str) -> Option<String>;

    fn add_listener(&self, kind: EventKind, listener: Listener) -> Result<()>;

    /// The event this field reports its changes through.
    fn change_event(&self) -> EventKind {
        if self.is_checkbox() {
            EventKind::Change
        } else {
            EventKind::Input
        }
    }
}

pub trait Document {
    type Element: Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}
