//! Submit buttons. Buttons render only in edit mode and never evaluate.

use super::{html_escape, layout_field, Mode, Widget, WidgetAttrs};
use crate::field::FieldState;
use crate::names::name_for;
use crate::value::Value;

fn submit_input(name: &str, caption: &str) -> String {
    WidgetAttrs::new()
        .with("type", "submit")
        .with("class", "button")
        .with("id", name)
        .with("name", name)
        .with("value", caption)
        .input()
}

fn cancel_link(cancel: Option<&str>) -> String {
    cancel.map_or_else(String::new, |href| {
        format!(r#"&nbsp;<a href="{}">cancel</a>"#, html_escape(href))
    })
}

/// A single submit button.
#[derive(Debug, Clone)]
pub struct ButtonInput {
    /// Text on the button.
    pub caption: String,
    /// Target of an optional cancel link.
    pub cancel: Option<String>,
    /// Whether to wrap the button in the field layout.
    pub framed: bool,
}

impl ButtonInput {
    /// Creates a bare button.
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            cancel: None,
            framed: false,
        }
    }

    /// Adds a cancel link.
    #[must_use]
    pub fn cancel(mut self, href: impl Into<String>) -> Self {
        self.cancel = Some(href.into());
        self
    }

    /// Wraps the button in the field layout with an empty label.
    #[must_use]
    pub fn framed(mut self) -> Self {
        self.framed = true;
        self
    }
}

impl Widget for ButtonInput {
    fn evaluate(&self, _state: &FieldState) -> Option<Value> {
        None
    }

    fn show(&self, _state: &FieldState) -> String {
        String::new()
    }

    fn edit(&self, state: &FieldState) -> String {
        let html = format!(
            "{}{}",
            submit_input(&state.name, &self.caption),
            cancel_link(self.cancel.as_deref())
        );
        if self.framed {
            layout_field("&nbsp;", &html, Mode::Edit)
        } else {
            html
        }
    }

    fn boxed_clone(&self) -> Box<dyn Widget> {
        Box::new(self.clone())
    }
}

/// A row of submit buttons, each named after its caption.
#[derive(Debug, Clone)]
pub struct ButtonsInput {
    /// Button captions, in order.
    pub captions: Vec<String>,
    /// Target of an optional cancel link.
    pub cancel: Option<String>,
}

impl ButtonsInput {
    /// Creates a row of buttons.
    pub fn new<S: Into<String>>(captions: impl IntoIterator<Item = S>) -> Self {
        Self {
            captions: captions.into_iter().map(Into::into).collect(),
            cancel: None,
        }
    }

    /// Adds a cancel link after the last button.
    #[must_use]
    pub fn cancel(mut self, href: impl Into<String>) -> Self {
        self.cancel = Some(href.into());
        self
    }
}

impl Default for ButtonsInput {
    fn default() -> Self {
        Self::new(["Save"])
    }
}

impl Widget for ButtonsInput {
    fn evaluate(&self, _state: &FieldState) -> Option<Value> {
        None
    }

    fn show(&self, _state: &FieldState) -> String {
        String::new()
    }

    fn edit(&self, _state: &FieldState) -> String {
        let buttons = self
            .captions
            .iter()
            .map(|caption| submit_input(&name_for(&format!("{caption} button")), caption))
            .collect::<Vec<_>>()
            .join("&nbsp;");
        let html = format!("{buttons}{}", cancel_link(self.cancel.as_deref()));
        layout_field("&nbsp;", &html, Mode::Edit)
    }

    fn boxed_clone(&self) -> Box<dyn Widget> {
        Box::new(self.clone())
    }
}
