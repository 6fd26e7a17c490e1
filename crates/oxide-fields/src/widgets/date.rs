//! Date widget.

use chrono::NaiveDate;
use tracing::debug;

use super::{html_escape, layout_field, Mode, Widget, WidgetAttrs};
use crate::error::Result;
use crate::field::FieldState;
use crate::value::Value;

/// Display and input format of dates, e.g. `Jan 05, 2024`.
pub const DATE_FORMAT: &str = "%b %d, %Y";

/// Format of dates in serialized [`Value`]s, e.g. `2024-01-05`.
pub const STORED_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date input.
///
/// Text is parsed with the display format, then with the stored ISO format
/// so evaluated values can be loaded back. Text that parses with neither
/// leaves the field unset instead of failing.
#[derive(Debug, Clone)]
pub struct DateInput {
    /// `chrono` format used for parsing and display.
    pub format: String,
    /// Maximum accepted length.
    pub maxlength: usize,
    /// CSS class of the input.
    pub css_class: String,
}

impl Default for DateInput {
    fn default() -> Self {
        Self {
            format: DATE_FORMAT.to_string(),
            maxlength: 12,
            css_class: "date_field".to_string(),
        }
    }
}

impl DateInput {
    /// Creates a new date input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a date input sized for birthdates.
    pub fn birthdate() -> Self {
        Self {
            maxlength: 10,
            ..Default::default()
        }
    }

    /// Sets the format.
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Sets the maximum length.
    #[must_use]
    pub fn maxlength(mut self, maxlength: usize) -> Self {
        self.maxlength = maxlength;
        self
    }

    /// Parses text in the display format or the stored format.
    pub fn parse(&self, text: &str) -> Option<NaiveDate> {
        let text = text.trim();
        NaiveDate::parse_from_str(text, &self.format)
            .or_else(|_| NaiveDate::parse_from_str(text, STORED_DATE_FORMAT))
            .ok()
    }

    /// Formats a stored value for display.
    pub fn format_value(&self, value: &Value) -> String {
        match value {
            Value::Date(date) => date.format(&self.format).to_string(),
            Value::Text(text) => text.clone(),
            _ => String::new(),
        }
    }
}

impl Widget for DateInput {
    fn assign(&self, state: &FieldState, value: Value) -> Result<Value> {
        Ok(match value {
            Value::Date(_) => value,
            Value::Text(text) if text.trim().is_empty() => Value::Null,
            Value::Text(text) => match self.parse(&text) {
                Some(date) => Value::Date(date),
                None => {
                    debug!(field = %state.name, value = %text, "unparseable date cleared");
                    Value::Null
                }
            },
            _ => Value::Null,
        })
    }

    fn assign_default(&self, _state: &FieldState, value: Value) -> Value {
        match &value {
            Value::Text(text) => self.parse(text).map_or(value, Value::Date),
            _ => value,
        }
    }

    fn display_value(&self, state: &FieldState) -> String {
        html_escape(&self.format_value(&state.value))
    }

    fn show(&self, state: &FieldState) -> String {
        if !state.value.is_truthy() {
            return String::new();
        }
        layout_field(
            &html_escape(&state.label),
            &self.display_value(state),
            Mode::Show,
        )
    }

    fn edit(&self, state: &FieldState) -> String {
        let input = WidgetAttrs::new()
            .with("type", "text")
            .with("class", &self.css_class)
            .with("id", &state.id)
            .with("name", &state.name)
            .with("value", self.format_value(state.current()))
            .with("maxlength", self.maxlength.to_string())
            .input();
        let content = format!("{input}{}{}", state.render_msg(), state.render_hint());
        layout_field(&html_escape(&state.label), &content, Mode::Edit)
    }

    fn boxed_clone(&self) -> Box<dyn Widget> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Component, Field};

    fn jan5() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    }

    #[test]
    fn test_parses_display_format() {
        let mut field = Field::new("Start Date", DateInput::new());
        field.assign("Jan 05, 2024").unwrap();
        assert_eq!(field.value(), &Value::Date(jan5()));
        assert_eq!(field.display_value(), "Jan 05, 2024");
        assert_eq!(field.evaluate()["START_DATE"], Value::Date(jan5()));
    }

    #[test]
    fn test_unparseable_date_is_unset() {
        let mut field = Field::new("Start Date", DateInput::new())
            .with_value(jan5())
            .unwrap();
        field.assign("next tuesday").unwrap();
        assert_eq!(field.value(), &Value::Null);
        assert_eq!(field.show(), "");
    }

    #[test]
    fn test_evaluated_date_loads_back() {
        let field = Field::new("Start Date", DateInput::new())
            .with_value(jan5())
            .unwrap();
        let json = serde_json::to_string(&field.evaluate()).unwrap();
        assert_eq!(json, r#"{"START_DATE":"2024-01-05"}"#);

        let stored: crate::value::Values = serde_json::from_str(&json).unwrap();
        let mut reloaded = Field::new("Start Date", DateInput::new());
        reloaded.update(&stored).unwrap();
        assert_eq!(reloaded.value(), &Value::Date(jan5()));
        assert_eq!(reloaded.display_value(), "Jan 05, 2024");
    }

    #[test]
    fn test_initialize_parses_stored_dates() {
        let mut field = Field::new("Start Date", DateInput::new());
        let defaults = [("START_DATE".to_string(), Value::from("2024-01-05"))]
            .into_iter()
            .collect();
        field.initialize(&defaults);
        assert_eq!(field.evaluate()["START_DATE"], Value::Date(jan5()));

        let field = Field::new("Start Date", DateInput::new()).default_value("someday");
        assert_eq!(field.evaluate()["START_DATE"], Value::from("someday"));
    }

    #[test]
    fn test_edit_empty_and_default() {
        let field = Field::new("Start Date", DateInput::new());
        let html = field.edit();
        assert!(html.contains(
            r#"<input type="text" class="date_field" id="START_DATE" name="START_DATE" value="" maxlength="12">"#
        ));

        let field = Field::new("Start Date", DateInput::new()).default_value(jan5());
        assert!(field.edit().contains(r#"value="Jan 05, 2024""#));
        assert_eq!(field.evaluate()["START_DATE"], Value::Date(jan5()));
        assert_eq!(field.show(), "");
    }

    #[test]
    fn test_show_formats_value() {
        let field = Field::new("Start Date", DateInput::new())
            .with_value(jan5())
            .unwrap();
        let html = field.show();
        assert!(html.contains("field_show"));
        assert!(html.contains("Jan 05, 2024"));
    }

    #[test]
    fn test_birthdate_maxlength() {
        let field = Field::new("Birthdate", DateInput::birthdate());
        assert!(field.edit().contains(r#"maxlength="10""#));
    }
}
