//! Select field types.

use crate::field::Field;
use crate::options::Options;
use crate::widgets::{MultiselectInput, PulldownInput, RadioInput};

/// Creates a pulldown (select) field with a leading blank option.
pub fn pulldown_field(label: &str, options: Options) -> Field {
    Field::new(label, PulldownInput::new(options))
}

/// Creates a radio button field.
pub fn radio_field(label: &str, options: Options) -> Field {
    Field::new(label, RadioInput::new(options))
}

/// Creates a multiple choice field.
pub fn multiselect_field(label: &str, options: Options) -> Field {
    Field::new(label, MultiselectInput::new(options))
}
