//! Button field types.

use crate::field::Field;
use crate::widgets::{ButtonInput, ButtonsInput};

/// Creates a bare submit button named `{CAPTION}_BUTTON`.
pub fn button(caption: &str) -> Field {
    Field::new(format!("{caption} Button"), ButtonInput::new(caption))
}

/// Creates a submit button laid out like a field.
pub fn button_field(caption: &str) -> Field {
    Field::new(format!("{caption} Button"), ButtonInput::new(caption).framed())
}

/// Creates a row of submit buttons.
pub fn buttons<S: Into<String>>(captions: impl IntoIterator<Item = S>) -> Field {
    Field::new("", ButtonsInput::new(captions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Component;

    #[test]
    fn test_button_names() {
        let save = button("Save");
        assert_eq!(save.name(), "SAVE_BUTTON");
        assert_eq!(save.label(), "Save Button");
        assert!(!save.edit().contains("field_edit"));
        assert!(button_field("Save").edit().contains("field_edit"));
    }

    #[test]
    fn test_buttons_evaluate_nothing() {
        let row = buttons(["Save", "Delete"]);
        assert!(row.evaluate().is_empty());
        assert!(row.edit().contains(r#"name="DELETE_BUTTON""#));
    }
}
