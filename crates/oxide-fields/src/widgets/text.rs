//! Single-line and multi-line text widgets.

use tracing::warn;

use super::{html_escape, layout_field, Mode, Widget, WidgetAttrs};
use crate::error::{FieldError, Result};
use crate::field::FieldState;
use crate::value::Value;

/// How a text value is displayed in show mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextDisplay {
    /// Escaped text.
    #[default]
    Plain,
    /// A `mailto:` link.
    Email,
    /// A link opening in a new window, `http://` added when missing.
    Url,
    /// A link to a twitter profile.
    Twitter,
}

/// Single-line text input.
#[derive(Debug, Clone)]
pub struct TextInput {
    /// The HTML input type (text or password).
    pub input_type: String,
    /// CSS class of the input.
    pub css_class: String,
    /// Visible width in characters.
    pub size: usize,
    /// Maximum accepted length.
    pub maxlength: usize,
    /// Show-mode rendering.
    pub display: TextDisplay,
}

impl Default for TextInput {
    fn default() -> Self {
        Self {
            input_type: "text".to_string(),
            css_class: "text_field".to_string(),
            size: 40,
            maxlength: 40,
            display: TextDisplay::Plain,
        }
    }
}

impl TextInput {
    /// Creates a new text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a password input. Passwords are never shown.
    pub fn password() -> Self {
        Self {
            input_type: "password".to_string(),
            ..Default::default()
        }
    }

    /// Creates a number input.
    pub fn number() -> Self {
        Self {
            css_class: "number_field".to_string(),
            size: 10,
            maxlength: 10,
            ..Default::default()
        }
    }

    /// Sets the visible width.
    #[must_use]
    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the maximum length.
    #[must_use]
    pub fn maxlength(mut self, maxlength: usize) -> Self {
        self.maxlength = maxlength;
        self
    }

    /// Sets the CSS class.
    #[must_use]
    pub fn css_class(mut self, css_class: impl Into<String>) -> Self {
        self.css_class = css_class.into();
        self
    }

    /// Sets the show-mode rendering.
    #[must_use]
    pub fn display(mut self, display: TextDisplay) -> Self {
        self.display = display;
        self
    }

    /// Renders the bare input tag.
    pub fn render_input(&self, state: &FieldState) -> String {
        WidgetAttrs::new()
            .with("type", &self.input_type)
            .with("class", &self.css_class)
            .with("id", &state.id)
            .with("name", &state.name)
            .with("value", state.current().to_string())
            .with("size", self.size.to_string())
            .with("maxlength", self.maxlength.to_string())
            .input()
    }
}

impl Widget for TextInput {
    fn display_value(&self, state: &FieldState) -> String {
        let text = state.current().to_string();
        if !state.visible || text.is_empty() {
            return String::new();
        }
        match self.display {
            TextDisplay::Plain => html_escape(&text),
            TextDisplay::Email => {
                let address = html_escape(&text);
                format!(r#"<a href="mailto:{address}">{address}</a>"#)
            }
            TextDisplay::Url => {
                let url = if text.starts_with("http") {
                    text.clone()
                } else {
                    format!("http://{text}")
                };
                format!(
                    r#"<a target="_window" href="{}">{}</a>"#,
                    html_escape(&url),
                    html_escape(&text)
                )
            }
            TextDisplay::Twitter => {
                let id = html_escape(text.trim().trim_matches('@'));
                if id.is_empty() {
                    return String::new();
                }
                format!(r#"<a href="http://www.twitter.com/{id}">@{id}</a>"#)
            }
        }
    }

    fn show(&self, state: &FieldState) -> String {
        if self.input_type == "password" || state.is_blank() {
            return String::new();
        }
        layout_field(
            &html_escape(&state.label),
            &self.display_value(state),
            Mode::Show,
        )
    }

    fn edit(&self, state: &FieldState) -> String {
        let content = format!(
            "{}{}{}",
            self.render_input(state),
            state.render_msg(),
            state.render_hint()
        );
        layout_field(&html_escape(&state.label), &content, Mode::Edit)
    }

    fn boxed_clone(&self) -> Box<dyn Widget> {
        Box::new(self.clone())
    }
}

/// Number input. Values are kept as entered and evaluate to their text.
#[derive(Debug, Clone)]
pub struct NumberInput {
    /// The underlying text input.
    pub input: TextInput,
}

impl Default for NumberInput {
    fn default() -> Self {
        Self {
            input: TextInput::number(),
        }
    }
}

impl NumberInput {
    /// Creates a new number input.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Widget for NumberInput {
    fn evaluate(&self, state: &FieldState) -> Option<Value> {
        Some(Value::Text(state.value.to_string()))
    }

    fn edit(&self, state: &FieldState) -> String {
        self.input.edit(state)
    }

    fn boxed_clone(&self) -> Box<dyn Widget> {
        Box::new(self.clone())
    }
}

/// Integer input. Assigned text must parse as an integer.
#[derive(Debug, Clone)]
pub struct IntegerInput {
    /// The underlying text input.
    pub input: TextInput,
}

impl Default for IntegerInput {
    fn default() -> Self {
        Self {
            input: TextInput::number(),
        }
    }
}

impl IntegerInput {
    /// Creates a new integer input.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Widget for IntegerInput {
    fn assign(&self, state: &FieldState, value: Value) -> Result<Value> {
        let fail = |value: &Value| {
            warn!(field = %state.name, value = %value, "value is not an integer");
            FieldError::Coercion {
                field: state.name.clone(),
                value: value.to_string(),
                expected: "an integer",
            }
        };
        match value {
            Value::Null | Value::Integer(_) => Ok(value),
            Value::Bool(b) => Ok(Value::Integer(i64::from(b))),
            Value::Text(ref text) if text.trim().is_empty() => Ok(Value::Null),
            Value::Text(ref text) => text
                .trim()
                .parse()
                .map(Value::Integer)
                .map_err(|_| fail(&value)),
            other => Err(fail(&other)),
        }
    }

    fn edit(&self, state: &FieldState) -> String {
        self.input.edit(state)
    }

    fn boxed_clone(&self) -> Box<dyn Widget> {
        Box::new(self.clone())
    }
}

/// Multi-line text area.
#[derive(Debug, Clone)]
pub struct MemoInput {
    /// CSS class of the text area.
    pub css_class: String,
    /// Visible rows.
    pub rows: usize,
    /// Visible columns.
    pub cols: usize,
    /// Legacy size attribute.
    pub size: usize,
}

impl Default for MemoInput {
    fn default() -> Self {
        Self {
            css_class: "memo_field".to_string(),
            rows: 6,
            cols: 60,
            size: 10,
        }
    }
}

impl MemoInput {
    /// Creates a new memo input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the visible rows.
    #[must_use]
    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Sets the visible columns.
    #[must_use]
    pub fn cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }
}

impl Widget for MemoInput {
    fn show(&self, state: &FieldState) -> String {
        if state.is_blank() {
            return String::new();
        }
        let content = format!(r#"<div class="textarea">{}</div>"#, self.display_value(state));
        layout_field(&html_escape(&state.label), &content, Mode::Show)
    }

    fn edit(&self, state: &FieldState) -> String {
        let textarea = format!(
            r#"<textarea class="{}" id="{}" name="{}" size="{}" cols="{}" rows="{}">{}</textarea>"#,
            self.css_class,
            state.id,
            state.name,
            self.size,
            self.cols,
            self.rows,
            html_escape(&state.current().to_string())
        );
        let label = html_escape(&state.label);
        if state.hint.is_empty() && state.msg.is_empty() {
            return layout_field(&label, &textarea, Mode::Edit);
        }
        let content = format!(
            r#"<table class="transparent" width=100%><tr><td width=10%>{textarea}</td><td>{}{}</td></tr></table>"#,
            state.render_msg(),
            state.render_hint()
        );
        layout_field(&label, &content, Mode::Edit)
    }

    fn boxed_clone(&self) -> Box<dyn Widget> {
        Box::new(self.clone())
    }
}

/// Hidden input. Carries a value through the form but never shows it.
#[derive(Debug, Clone, Default)]
pub struct HiddenInput;

impl Widget for HiddenInput {
    fn show(&self, _state: &FieldState) -> String {
        String::new()
    }

    fn edit(&self, state: &FieldState) -> String {
        WidgetAttrs::new()
            .with("type", "hidden")
            .with("id", &state.id)
            .with("name", &state.name)
            .with("value", state.current().to_string())
            .input()
    }

    fn boxed_clone(&self) -> Box<dyn Widget> {
        Box::new(self.clone())
    }
}
