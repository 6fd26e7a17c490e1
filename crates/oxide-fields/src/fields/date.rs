//! Date field types.

use crate::field::Field;
use crate::widgets::DateInput;

/// Creates a date field.
pub fn date_field(label: &str) -> Field {
    Field::new(label, DateInput::new())
}

/// Creates a birthdate field.
pub fn birthdate_field(label: &str) -> Field {
    Field::new(label, DateInput::birthdate())
}
