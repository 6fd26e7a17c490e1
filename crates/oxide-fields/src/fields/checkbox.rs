//! Checkbox field types.

use crate::field::Field;
use crate::widgets::{CheckboxInput, CheckboxesInput};

/// Creates a checkbox field shown as `yes` or `no`.
pub fn checkbox_field(label: &str) -> Field {
    Field::new(label, CheckboxInput::default())
}

/// Creates a group of checkboxes, one per value.
pub fn checkboxes_field<S: Into<String>>(label: &str, values: impl IntoIterator<Item = S>) -> Field {
    Field::new(label, CheckboxesInput::new(values))
}
