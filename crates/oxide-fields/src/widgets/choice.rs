//! Checkbox and option-list widgets.

use super::{html_escape, layout_field, with_hints, Mode, Widget, WidgetAttrs};
use crate::error::Result;
use crate::field::FieldState;
use crate::options::{FieldOption, Options};
use crate::value::Value;

/// Single checkbox.
///
/// Checked values are `true`, `"yes"` and `"on"`. Show mode prints one of
/// two labels and ignores the default.
#[derive(Debug, Clone)]
pub struct CheckboxInput {
    /// Label shown when checked.
    pub on_label: String,
    /// Label shown when not checked.
    pub off_label: String,
}

impl Default for CheckboxInput {
    fn default() -> Self {
        Self::new("yes", "no")
    }
}

impl CheckboxInput {
    /// Creates a checkbox with the given show-mode labels.
    pub fn new(on_label: impl Into<String>, off_label: impl Into<String>) -> Self {
        Self {
            on_label: on_label.into(),
            off_label: off_label.into(),
        }
    }

    /// Returns whether `value` counts as checked.
    pub fn is_checked(value: &Value) -> bool {
        matches!(value, Value::Bool(true)) || matches!(value.as_str(), Some("yes" | "on"))
    }
}

impl Widget for CheckboxInput {
    fn evaluate(&self, state: &FieldState) -> Option<Value> {
        Some(if Self::is_checked(&state.value) {
            Value::Bool(true)
        } else if state.value == Value::Bool(false) {
            Value::Bool(false)
        } else {
            state.default.clone()
        })
    }

    fn display_value(&self, state: &FieldState) -> String {
        let label = if Self::is_checked(&state.value) {
            &self.on_label
        } else {
            &self.off_label
        };
        html_escape(label)
    }

    fn show(&self, state: &FieldState) -> String {
        layout_field(
            &html_escape(&state.label),
            &self.display_value(state),
            Mode::Show,
        )
    }

    fn edit(&self, state: &FieldState) -> String {
        let input = WidgetAttrs::new()
            .with("type", "checkbox")
            .with("class", "checkbox_field")
            .with("id", &state.id)
            .with("name", &state.name)
            .with("value", "yes")
            .flag("checked", Self::is_checked(&state.value))
            .input();
        let widget = format!(r#"<div class="checkbox">{input}</div>"#);
        let hints = format!("{}{}", state.render_msg(), state.render_hint());
        layout_field(
            &html_escape(&state.label),
            &with_hints(&widget, &hints),
            Mode::Edit,
        )
    }

    fn boxed_clone(&self) -> Box<dyn Widget> {
        Box::new(self.clone())
    }
}

/// A group of checkboxes sharing one name; the value is a list.
#[derive(Debug, Clone, Default)]
pub struct CheckboxesInput {
    /// The values offered, in order.
    pub values: Vec<String>,
}

impl CheckboxesInput {
    /// Creates a checkbox group.
    pub fn new<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl Widget for CheckboxesInput {
    fn assign(&self, _state: &FieldState, value: Value) -> Result<Value> {
        Ok(Value::List(value.to_list()))
    }

    fn evaluate(&self, state: &FieldState) -> Option<Value> {
        Some(Value::List(state.current().to_list()))
    }

    fn display_value(&self, state: &FieldState) -> String {
        html_escape(&state.current().to_list().join(", "))
    }

    fn edit(&self, state: &FieldState) -> String {
        let checked = state.current().to_list();
        let items: String = self
            .values
            .iter()
            .map(|value| {
                let input = WidgetAttrs::new()
                    .with("type", "checkbox")
                    .with("class", "checkbox_field")
                    .with("id", &state.id)
                    .with("name", &state.name)
                    .with("value", value)
                    .flag("checked", checked.contains(value))
                    .input();
                format!("<li>{input}<div>{}</div></li>", html_escape(value))
            })
            .collect();
        let widget = format!(r#"<ul class="checkbox_field">{items}</ul>"#);
        let hints = format!("{}{}", state.render_msg(), state.render_hint());
        layout_field(
            &html_escape(&state.label),
            &with_hints(&widget, &hints),
            Mode::Edit,
        )
    }

    fn boxed_clone(&self) -> Box<dyn Widget> {
        Box::new(self.clone())
    }
}

fn resolve_label(options: &Options, value: Value) -> Value {
    match value {
        Value::Text(text) => Value::Text(options.resolve(&text)),
        other => other,
    }
}

fn display_label(options: &Options, value: &Value) -> String {
    if !value.is_truthy() {
        return String::new();
    }
    let text = value.to_string();
    html_escape(options.label_for_value(&text).unwrap_or(&text))
}

fn render_option(option: &FieldOption, selected: bool) -> String {
    let selected = if selected { " selected" } else { "" };
    format!(
        r#"<option value="{}"{selected}>{}</option>"#,
        html_escape(option.value()),
        html_escape(option.label())
    )
}

/// Drop-down select.
///
/// A submitted label is stored as its option's value; anything else is
/// stored as submitted.
#[derive(Debug, Clone)]
pub struct PulldownInput {
    /// Available options.
    pub options: Options,
    /// Whether to lead with an empty option.
    pub include_blank: bool,
}

impl PulldownInput {
    /// Creates a pulldown with a leading blank option.
    pub fn new(options: Options) -> Self {
        Self {
            options,
            include_blank: true,
        }
    }

    /// Disables the blank option.
    #[must_use]
    pub fn no_blank(mut self) -> Self {
        self.include_blank = false;
        self
    }

    /// Renders the bare `<select>` element.
    pub fn render_select(&self, state: &FieldState) -> String {
        let current = resolve_label(&self.options, state.current().clone()).to_string();
        let mut html = format!(
            "<select class=\"pulldown\" name=\"{}\" id=\"{}\">\n",
            state.name, state.id
        );
        if self.include_blank {
            let selected = if current.is_empty() { " selected" } else { "" };
            html.push_str(&format!(r#"<option value=""{selected}></option>"#));
        }
        for option in &self.options {
            html.push_str(&render_option(
                option,
                !current.is_empty() && option.value() == current,
            ));
        }
        html.push_str("</select>");
        html
    }
}

impl Widget for PulldownInput {
    fn assign(&self, _state: &FieldState, value: Value) -> Result<Value> {
        Ok(resolve_label(&self.options, value))
    }

    fn evaluate(&self, state: &FieldState) -> Option<Value> {
        Some(resolve_label(&self.options, state.current().clone()))
    }

    fn display_value(&self, state: &FieldState) -> String {
        display_label(&self.options, state.current())
    }

    fn edit(&self, state: &FieldState) -> String {
        let hints = format!("{}{}", state.render_msg(), state.render_hint());
        layout_field(
            &html_escape(&state.label),
            &with_hints(&self.render_select(state), &hints),
            Mode::Edit,
        )
    }

    fn boxed_clone(&self) -> Box<dyn Widget> {
        Box::new(self.clone())
    }
}

/// Radio buttons, one per option.
///
/// Submitted labels are stored as their values like [`PulldownInput`], but
/// evaluation reports the stored value only; the default just preselects
/// a button.
#[derive(Debug, Clone, Default)]
pub struct RadioInput {
    /// Available options.
    pub options: Options,
}

impl RadioInput {
    /// Creates a radio group.
    pub fn new(options: Options) -> Self {
        Self { options }
    }
}

impl Widget for RadioInput {
    fn assign(&self, _state: &FieldState, value: Value) -> Result<Value> {
        Ok(resolve_label(&self.options, value))
    }

    fn evaluate(&self, state: &FieldState) -> Option<Value> {
        Some(state.value.clone())
    }

    fn display_value(&self, state: &FieldState) -> String {
        display_label(&self.options, state.current())
    }

    fn edit(&self, state: &FieldState) -> String {
        let current = resolve_label(&self.options, state.current().clone()).to_string();
        let buttons: String = self
            .options
            .iter()
            .map(|option| {
                let input = WidgetAttrs::new()
                    .with("type", "radio")
                    .with("class", "radio")
                    .with("name", &state.name)
                    .with("value", option.value())
                    .flag("checked", !current.is_empty() && option.value() == current)
                    .input();
                format!(
                    r#"<span class="radio">{input}{}</span>"#,
                    html_escape(option.label())
                )
            })
            .collect();
        let content = format!(
            "{buttons}<br>{}{}",
            state.render_msg(),
            state.render_hint()
        );
        layout_field(&html_escape(&state.label), &content, Mode::Edit)
    }

    fn boxed_clone(&self) -> Box<dyn Widget> {
        Box::new(self.clone())
    }
}

/// Multiple-choice select; the value is a list of stored values.
///
/// Labels and values may be mixed on input. Results follow option order,
/// not input order.
#[derive(Debug, Clone, Default)]
pub struct MultiselectInput {
    /// Available options.
    pub options: Options,
}

impl MultiselectInput {
    /// Creates a multiselect.
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    fn scan(&self, value: &Value, pick: fn(&FieldOption) -> &str) -> Vec<String> {
        let selected = value.to_list();
        self.options
            .selected(&selected)
            .map(|option| pick(option).to_string())
            .collect()
    }
}

impl Widget for MultiselectInput {
    fn assign(&self, _state: &FieldState, value: Value) -> Result<Value> {
        Ok(Value::List(self.scan(&value, FieldOption::value)))
    }

    fn evaluate(&self, state: &FieldState) -> Option<Value> {
        Some(Value::List(self.scan(state.current(), FieldOption::value)))
    }

    fn display_value(&self, state: &FieldState) -> String {
        html_escape(&self.scan(state.current(), FieldOption::label).join("; "))
    }

    fn edit(&self, state: &FieldState) -> String {
        let current = self.scan(state.current(), FieldOption::label);
        let mut select = format!(
            "<select multiple=\"multiple\" class=\"multiselect\" name=\"{}\" id=\"{}\">\n",
            state.name, state.id
        );
        for option in &self.options {
            select.push_str(&render_option(
                option,
                current.iter().any(|label| label == option.label()),
            ));
        }
        select.push_str("</select>");
        let hints = format!("{}{}", state.render_msg(), state.render_hint());
        layout_field(
            &html_escape(&state.label),
            &with_hints(&select, &hints),
            Mode::Edit,
        )
    }

    fn boxed_clone(&self) -> Box<dyn Widget> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Component, Field};
    use crate::value::Values;

    fn numbers() -> Options {
        Options::new([("One", "uno"), ("Two", "dos")])
    }

    fn submit(name: &str, value: impl Into<Value>) -> Values {
        let mut values = Values::new();
        values.insert(name.to_string(), value.into());
        values
    }

    #[test]
    fn test_checkbox_display() {
        let field = Field::new("Done", CheckboxInput::default());
        assert!(field.show().contains(">no<"));

        let field = Field::new("Done", CheckboxInput::default())
            .with_value(true)
            .unwrap();
        assert!(field.show().contains(">yes<"));
    }

    #[test]
    fn test_checkbox_ignores_default_when_displaying() {
        let field = Field::new("Done", CheckboxInput::new("yep", "nope")).default_value(true);
        assert_eq!(field.display_value(), "nope");
        assert_eq!(field.evaluate()["DONE"], Value::Bool(true));

        let field = Field::new("Done", CheckboxInput::new("yep", "nope"))
            .default_value(true)
            .with_value(false)
            .unwrap();
        assert_eq!(field.display_value(), "nope");
        assert_eq!(field.evaluate()["DONE"], Value::Bool(false));
    }

    #[test]
    fn test_checkbox_validate_sequence() {
        let mut field = Field::new("Done", CheckboxInput::default())
            .with_value(false)
            .unwrap();
        assert!(field.validate(&submit("done", true)).unwrap());
        assert_eq!(field.value(), &Value::Bool(true));

        assert!(field.validate(&submit("DoNE", false)).unwrap());
        assert_eq!(field.value(), &Value::Bool(false));

        assert!(field.validate(&submit("done", "on")).unwrap());
        assert_eq!(field.value(), &Value::from("on"));
        assert_eq!(field.display_value(), "yes");
        assert_eq!(field.evaluate()["DONE"], Value::Bool(true));
    }

    #[test]
    fn test_checkbox_widget() {
        let html = Field::new("Done", CheckboxInput::default()).edit();
        assert!(html.contains(
            r#"<div class="checkbox"><input type="checkbox" class="checkbox_field" id="DONE" name="DONE" value="yes"></div>"#
        ));

        let html = Field::new("Done", CheckboxInput::default())
            .with_value("yes")
            .unwrap()
            .edit();
        assert!(html.contains(r#"value="yes" checked>"#));
    }

    #[test]
    fn test_checkboxes() {
        let field = Field::new("Days", CheckboxesInput::new(["Mon", "Tue", "Wed"]))
            .with_value(vec!["Mon", "Wed"])
            .unwrap();
        assert_eq!(field.display_value(), "Mon, Wed");
        let html = field.edit();
        assert!(html.contains(r#"value="Mon" checked>"#));
        assert!(html.contains(r#"value="Tue"><div>Tue</div>"#));
        assert_eq!(field.evaluate()["DAYS"], Value::from(vec!["Mon", "Wed"]));
    }

    #[test]
    fn test_pulldown_resolves_labels() {
        let mut field = Field::new("Type", PulldownInput::new(numbers()))
            .with_value("One")
            .unwrap();
        assert_eq!(field.value(), &Value::from("uno"));
        assert_eq!(field.evaluate()["TYPE"], Value::from("uno"));
        assert_eq!(field.display_value(), "One");

        field.update(&submit("TYPE", "dos")).unwrap();
        assert_eq!(field.value(), &Value::from("dos"));
        assert_eq!(field.evaluate()["TYPE"], Value::from("dos"));
        assert_eq!(field.display_value(), "Two");
    }

    #[test]
    fn test_pulldown_widget() {
        let field = Field::new("Type", PulldownInput::new(numbers()))
            .with_value("One")
            .unwrap();
        let select = PulldownInput::new(numbers()).render_select(field.state());
        assert_eq!(
            select,
            "<select class=\"pulldown\" name=\"TYPE\" id=\"TYPE\">\n<option value=\"\"></option><option value=\"uno\" selected>One</option><option value=\"dos\">Two</option></select>"
        );

        let empty = Field::new("Type", PulldownInput::new(Options::new(["One", "Two"])));
        let select = PulldownInput::new(Options::new(["One", "Two"])).render_select(empty.state());
        assert!(select.contains(r#"<option value="" selected></option>"#));
        assert!(!select.contains(r#"value="One" selected"#));
    }

    #[test]
    fn test_pulldown_without_blank() {
        let field = Field::new("Type", PulldownInput::new(numbers()).no_blank());
        assert!(!field.edit().contains(r#"<option value="""#));
    }

    #[test]
    fn test_radio_evaluates_value_only() {
        let options = Options::new([("One", "1"), ("Two", "2")]);
        let field = Field::new("Choice", RadioInput::new(options.clone())).default_value("1");
        assert_eq!(field.evaluate()["CHOICE"], Value::Null);
        assert!(field.edit().contains(r#"value="1" checked>One"#));

        let field = Field::new("Choice", RadioInput::new(options))
            .default_value("1")
            .with_value("Two")
            .unwrap();
        assert_eq!(field.evaluate()["CHOICE"], Value::from("2"));
    }

    #[test]
    fn test_radio() {
        let field = Field::new("Choice", RadioInput::new(Options::new(["One", "Two"])))
            .with_value("One")
            .unwrap();
        let html = field.edit();
        assert!(html.contains(
            r#"<span class="radio"><input type="radio" class="radio" name="CHOICE" value="One" checked>One</span>"#
        ));
        assert!(html.contains(
            r#"<span class="radio"><input type="radio" class="radio" name="CHOICE" value="Two">Two</span><br>"#
        ));
        assert!(field.show().contains(">One<"));

        let field = Field::new("Choice", RadioInput::new(Options::new([("One", "1"), ("Two", "2")])))
            .with_value("Two")
            .unwrap();
        assert_eq!(field.value(), &Value::from("2"));
        assert_eq!(field.display_value(), "Two");
        assert!(field.edit().contains(r#"value="2" checked>Two"#));
    }

    #[test]
    fn test_multiselect_mixed_input() {
        let field = Field::new("Type", MultiselectInput::new(numbers()))
            .with_value(vec!["One", "dos"])
            .unwrap();
        assert_eq!(field.display_value(), "One; Two");
        assert_eq!(field.evaluate()["TYPE"], Value::from(vec!["uno", "dos"]));
    }

    #[test]
    fn test_multiselect_scalar_and_order() {
        let mut field = Field::new("Type", MultiselectInput::new(numbers()))
            .with_value("One")
            .unwrap();
        assert_eq!(field.value(), &Value::from(vec!["uno"]));

        field.update(&submit("TYPE", vec!["dos", "uno"])).unwrap();
        assert_eq!(field.value(), &Value::from(vec!["uno", "dos"]));
    }

    #[test]
    fn test_multiselect_widget() {
        let field = Field::new(
            "Type",
            MultiselectInput::new(Options::new(["One", "Two", "Three"])),
        )
        .with_value(vec!["One", "Three"])
        .unwrap();
        let html = field.edit();
        assert!(html.contains(
            "<select multiple=\"multiple\" class=\"multiselect\" name=\"TYPE\" id=\"TYPE\">\n<option value=\"One\" selected>One</option><option value=\"Two\">Two</option><option value=\"Three\" selected>Three</option></select>"
        ));
    }
}
