//! The field contract shared by single fields and containers.

use std::fmt;

use tracing::{debug, trace};

use crate::error::{Result, ValidationErrors};
use crate::names::name_for;
use crate::validation::{self, Validator};
use crate::value::{Value, Values};
use crate::widgets::{html_escape, Widget};

/// The update/validate/evaluate/render contract.
///
/// Implemented by [`Field`] and by every container, so containers nest: a
/// form holds sections, a section holds fields.
pub trait Component: fmt::Debug + Send + Sync {
    /// Assigns every submitted value whose key matches a field name,
    /// ignoring case. Keys that match nothing are ignored.
    fn update(&mut self, values: &Values) -> Result<()>;

    /// Sets default values, matching keys the same way as `update`.
    fn initialize(&mut self, defaults: &Values);

    /// Runs validation, recording one message per failing field.
    ///
    /// Containers validate every member before answering.
    fn valid(&mut self) -> bool;

    /// Updates from `values`, then validates.
    fn validate(&mut self, values: &Values) -> Result<bool> {
        self.update(values)?;
        Ok(self.valid())
    }

    /// Returns the canonical stored values, keyed by field name.
    fn evaluate(&self) -> Values;

    /// Returns the display value of every evaluated field.
    fn display_values(&self) -> Values;

    /// Returns the messages recorded by the last validation.
    fn errors(&self) -> ValidationErrors;

    /// Renders read-only markup.
    fn show(&self) -> String;

    /// Renders editable markup.
    fn edit(&self) -> String;

    /// Returns whether an enclosing form must be submitted as multipart.
    fn requires_multipart_form(&self) -> bool {
        false
    }

    /// Finds a field by name, ignoring case.
    fn find(&self, name: &str) -> Option<&Field>;

    /// Finds a field by name for mutation, ignoring case.
    fn find_mut(&mut self, name: &str) -> Option<&mut Field>;

    /// Clones this component into a new box.
    fn boxed_clone(&self) -> Box<dyn Component>;
}

impl Clone for Box<dyn Component> {
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}

/// The per-instance state of a field, handed to its widget.
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    /// Field name, derived from the label unless overridden.
    pub name: String,
    /// HTML id.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Current value.
    pub value: Value,
    /// Default value, used when the current value is not set.
    pub default: Value,
    /// Hint shown next to the widget.
    pub hint: String,
    /// Message from the last failed validation.
    pub msg: String,
    /// Whether a `required` validator was attached.
    pub required: bool,
    /// Whether the field renders at all.
    pub visible: bool,
    /// Validators, run in order until the first failure.
    pub validators: Vec<Validator>,
}

impl FieldState {
    /// Returns the value if set, otherwise the default.
    pub fn current(&self) -> &Value {
        if self.value.is_truthy() {
            &self.value
        } else {
            &self.default
        }
    }

    /// Returns whether neither the value nor the default is set.
    pub fn is_blank(&self) -> bool {
        !self.value.is_truthy() && !self.default.is_truthy()
    }

    /// Returns whether `key` addresses this field.
    pub fn matches(&self, key: &str) -> bool {
        key.to_lowercase() == self.name.to_lowercase()
    }

    /// Renders the hint, if any.
    pub fn render_hint(&self) -> String {
        if self.hint.is_empty() {
            String::new()
        } else {
            format!(r#"<span class="hint">{}</span>"#, self.hint)
        }
    }

    /// Renders the last validation message, if any.
    pub fn render_msg(&self) -> String {
        if self.msg.is_empty() {
            String::new()
        } else {
            format!(r#"<span class="wrong">{}</span>"#, html_escape(&self.msg))
        }
    }
}

/// A single named, typed field.
///
/// The field owns its state; its [`Widget`] decides how values are coerced,
/// evaluated and rendered.
#[derive(Debug, Clone)]
pub struct Field {
    state: FieldState,
    widget: Box<dyn Widget>,
}

impl Field {
    /// Creates a field whose name is derived from `label`.
    pub fn new(label: impl Into<String>, widget: impl Widget + 'static) -> Self {
        let label = label.into();
        let name = name_for(&label);
        Self {
            state: FieldState {
                id: name.clone(),
                name,
                label,
                visible: true,
                ..FieldState::default()
            },
            widget: Box::new(widget),
        }
    }

    /// Overrides the derived name (and id).
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.state.id.clone_from(&name);
        self.state.name = name;
        self
    }

    /// Sets the hint.
    #[must_use]
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.state.hint = hint.into();
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.state.default = self.widget.assign_default(&self.state, value.into());
        self
    }

    /// Assigns an initial value through the widget's coercion.
    pub fn with_value(mut self, value: impl Into<Value>) -> Result<Self> {
        self.assign(value)?;
        Ok(self)
    }

    /// Appends a validator.
    #[must_use]
    pub fn validator(mut self, validator: Validator) -> Self {
        self.state.validators.push(validator);
        self
    }

    /// Marks the field required and appends the `required` validator.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.state.required = true;
        self.validator(validation::required())
    }

    /// Hides the field from both edit and show rendering.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.state.visible = false;
        self
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.state.name
    }

    /// Returns the label.
    pub fn label(&self) -> &str {
        &self.state.label
    }

    /// Returns the current value.
    pub fn value(&self) -> &Value {
        &self.state.value
    }

    /// Returns the default value.
    pub fn default(&self) -> &Value {
        &self.state.default
    }

    /// Returns the message from the last failed validation, if any.
    pub fn msg(&self) -> Option<&str> {
        Some(self.state.msg.as_str()).filter(|msg| !msg.is_empty())
    }

    /// Returns the whole field state.
    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// Returns the widget.
    pub fn widget(&self) -> &dyn Widget {
        self.widget.as_ref()
    }

    /// Stores `value` after the widget's coercion.
    pub fn assign(&mut self, value: impl Into<Value>) -> Result<()> {
        self.state.value = self.widget.assign(&self.state, value.into())?;
        Ok(())
    }

    /// Returns the value as shown to the user.
    pub fn display_value(&self) -> String {
        self.widget.display_value(&self.state)
    }

    /// Renders the hint, if any.
    pub fn render_hint(&self) -> String {
        self.state.render_hint()
    }

    /// Renders the last validation message, if any.
    pub fn render_msg(&self) -> String {
        self.state.render_msg()
    }
}

impl Component for Field {
    fn update(&mut self, values: &Values) -> Result<()> {
        for (key, value) in values {
            if self.state.matches(key) {
                trace!(field = %self.state.name, key = %key, "assigning submitted value");
                self.assign(value.clone())?;
            }
        }
        Ok(())
    }

    fn initialize(&mut self, defaults: &Values) {
        for (key, value) in defaults {
            if self.state.matches(key) {
                trace!(field = %self.state.name, key = %key, "setting default");
                self.state.default = self.widget.assign_default(&self.state, value.clone());
            }
        }
    }

    fn valid(&mut self) -> bool {
        self.state.msg.clear();
        let failed = self
            .state
            .validators
            .iter()
            .find(|v| !v.valid(&self.state.value))
            .map(|v| v.message().to_string());
        match failed {
            Some(message) => {
                debug!(field = %self.state.name, message = %message, "field failed validation");
                self.state.msg = message;
                false
            }
            None => true,
        }
    }

    fn evaluate(&self) -> Values {
        let mut values = Values::new();
        if let Some(value) = self.widget.evaluate(&self.state) {
            values.insert(self.state.name.clone(), value);
        }
        values
    }

    fn display_values(&self) -> Values {
        let mut values = Values::new();
        if self.widget.evaluate(&self.state).is_some() {
            values.insert(
                self.state.name.clone(),
                Value::Text(self.display_value()),
            );
        }
        values
    }

    fn errors(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if let Some(msg) = self.msg() {
            errors.add(&self.state.name, msg);
        }
        errors
    }

    fn show(&self) -> String {
        if self.state.visible {
            self.widget.show(&self.state)
        } else {
            String::new()
        }
    }

    fn edit(&self) -> String {
        if self.state.visible {
            self.widget.edit(&self.state)
        } else {
            String::new()
        }
    }

    fn requires_multipart_form(&self) -> bool {
        self.widget.requires_multipart_form()
    }

    fn find(&self, name: &str) -> Option<&Field> {
        self.state.matches(name).then_some(self)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Field> {
        if self.state.matches(name) {
            Some(self)
        } else {
            None
        }
    }

    fn boxed_clone(&self) -> Box<dyn Component> {
        Box::new(self.clone())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.state.name, self.state.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::TextInput;

    fn values(pairs: &[(&str, &str)]) -> Values {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), Value::from(*v)))
            .collect()
    }

    #[test]
    fn test_name_derived_from_label() {
        let field = Field::new("Start Date", TextInput::new());
        assert_eq!(field.name(), "START_DATE");
        assert_eq!(field.state().id, "START_DATE");
        assert_eq!(field.label(), "Start Date");
    }

    #[test]
    fn test_named_overrides_name() {
        let field = Field::new("Name", TextInput::new()).named("THEME_NAME");
        assert_eq!(field.name(), "THEME_NAME");
        assert_eq!(field.state().id, "THEME_NAME");
    }

    #[test]
    fn test_update_matches_case_insensitively() {
        let mut field = Field::new("Title", TextInput::new());
        field.update(&values(&[("title", "Joe's Pool Hall")])).unwrap();
        assert_eq!(field.value(), &Value::from("Joe's Pool Hall"));

        field.update(&values(&[("OTHER", "ignored")])).unwrap();
        assert_eq!(field.value(), &Value::from("Joe's Pool Hall"));
    }

    #[test]
    fn test_initialize_sets_default_only() {
        let mut field = Field::new("Site Name", TextInput::new());
        field.initialize(&values(&[("site_name", "Oxide")]));
        assert_eq!(field.value(), &Value::Null);
        assert_eq!(field.default(), &Value::from("Oxide"));
        assert_eq!(field.evaluate()["SITE_NAME"], Value::from("Oxide"));
    }

    #[test]
    fn test_valid_stops_at_first_failure() {
        let mut field = Field::new("Name", TextInput::new())
            .required()
            .validator(validation::minimum_length(2, false));

        assert!(!field.validate(&values(&[("NAME", "")])).unwrap());
        assert_eq!(field.msg(), Some("required"));

        assert!(!field.validate(&values(&[("NAME", "J")])).unwrap());
        assert_eq!(field.msg(), Some("minimum length 2"));

        assert!(field.validate(&values(&[("NAME", "Joe")])).unwrap());
        assert_eq!(field.msg(), None);
        assert!(field.errors().is_empty());
    }

    #[test]
    fn test_render_msg_and_hint() {
        let mut field = Field::new("Name", TextInput::new())
            .required()
            .hint("Full name");
        assert_eq!(field.render_hint(), r#"<span class="hint">Full name</span>"#);
        assert_eq!(field.render_msg(), "");

        field.valid();
        assert_eq!(field.render_msg(), r#"<span class="wrong">required</span>"#);
    }

    #[test]
    fn test_hidden_field_renders_nothing() {
        let field = Field::new("Name", TextInput::new())
            .hidden()
            .with_value("Joe")
            .unwrap();
        assert_eq!(field.show(), "");
        assert_eq!(field.edit(), "");
        assert_eq!(field.evaluate()["NAME"], Value::from("Joe"));
    }

    #[test]
    fn test_display_format() {
        let field = Field::new("Name", TextInput::new()).with_value("Joe").unwrap();
        assert_eq!(field.to_string(), "NAME: Joe");
    }
}
