//! Widgets: the per-type value codec and renderer of a field.

mod button;
mod choice;
mod date;
mod text;

pub use button::{ButtonInput, ButtonsInput};
pub use choice::{CheckboxInput, CheckboxesInput, MultiselectInput, PulldownInput, RadioInput};
pub use date::DateInput;
pub use text::{HiddenInput, IntegerInput, MemoInput, NumberInput, TextDisplay, TextInput};

use std::fmt;

use ironhtml::typed::Element;
use ironhtml_elements::Div;

use crate::error::Result;
use crate::field::FieldState;
use crate::value::Value;

/// Ordered HTML attributes for a widget's input tag.
#[derive(Debug, Clone, Default)]
pub struct WidgetAttrs {
    /// Attributes in insertion order.
    pub attrs: Vec<(String, String)>,
    /// Bare attributes such as `checked`, rendered after `attrs`.
    pub flags: Vec<String>,
}

impl WidgetAttrs {
    /// Creates new empty widget attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, replacing an earlier value for the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((key, value)),
        }
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Renders attributes as an HTML attribute string.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .map(|(k, v)| format!(r#"{k}="{}""#, html_escape(v)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder method to add a bare attribute such as `checked` when `on`.
    #[must_use]
    pub fn flag(mut self, key: &str, on: bool) -> Self {
        if on && !self.flags.iter().any(|flag| flag == key) {
            self.flags.push(key.to_string());
        }
        self
    }

    /// Renders an `<input>` tag carrying these attributes.
    pub fn input(&self) -> String {
        let attrs = self
            .attrs
            .iter()
            .map(|(k, v)| format!(r#"{k}="{}""#, html_escape(v)))
            .chain(self.flags.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");
        format!("<input {attrs}>")
    }
}

/// Per-type behaviour of a field.
///
/// The default methods give the plain text behaviour: values are stored
/// as assigned, evaluate to value-or-default, and are shown as escaped text
/// that disappears when both value and default are empty.
pub trait Widget: fmt::Debug + Send + Sync {
    /// Coerces an assigned value into the stored shape.
    fn assign(&self, state: &FieldState, value: Value) -> Result<Value> {
        let _ = state;
        Ok(value)
    }

    /// Coerces a default value. Unlike `assign` this never fails; a value
    /// the widget cannot read is kept as given.
    fn assign_default(&self, state: &FieldState, value: Value) -> Value {
        let _ = state;
        value
    }

    /// Returns the stored value, or `None` to leave the field out of
    /// evaluation entirely.
    fn evaluate(&self, state: &FieldState) -> Option<Value> {
        Some(state.current().clone())
    }

    /// Returns the value as shown to the user.
    fn display_value(&self, state: &FieldState) -> String {
        if state.visible && state.value.is_truthy() {
            html_escape(&state.value.to_string())
        } else {
            html_escape(&state.default.to_string())
        }
    }

    /// Renders read-only markup.
    fn show(&self, state: &FieldState) -> String {
        if state.is_blank() {
            return String::new();
        }
        layout_field(
            &html_escape(&state.label),
            &self.display_value(state),
            Mode::Show,
        )
    }

    /// Renders editable markup.
    fn edit(&self, state: &FieldState) -> String;

    /// Returns whether the widget needs a multipart form.
    fn requires_multipart_form(&self) -> bool {
        false
    }

    /// Clones the widget into a new box.
    fn boxed_clone(&self) -> Box<dyn Widget>;
}

impl Clone for Box<dyn Widget> {
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}

/// Rendering mode of a field layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Editable widgets.
    Edit,
    /// Read-only text.
    Show,
}

impl Mode {
    fn css_class(self) -> &'static str {
        match self {
            Self::Edit => "field_edit",
            Self::Show => "field_show",
        }
    }
}

/// Lays out a field as a label block followed by a content block.
///
/// Both `label` and `content` are inserted as markup.
pub fn layout_field(label: &str, content: &str, mode: Mode) -> String {
    Element::<Div>::new()
        .class("field")
        .child::<Div, _>(|d| d.class("field_label").raw(label))
        .child::<Div, _>(|d| d.class(mode.css_class()).raw(content))
        .render()
}

/// Places a widget next to its validation message and hint.
pub fn with_hints(widget: &str, hints: &str) -> String {
    format!(
        r#"<table class="transparent"><tr><td nowrap>{widget}</td><td><div class="hint">{hints}</div></td></tr></table>"#
    )
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
