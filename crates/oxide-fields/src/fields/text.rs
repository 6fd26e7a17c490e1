//! Text field types.

use crate::field::Field;
use crate::widgets::{
    HiddenInput, IntegerInput, MemoInput, NumberInput, TextDisplay, TextInput,
};

/// Creates a single-line text field.
pub fn text_field(label: &str) -> Field {
    Field::new(label, TextInput::new())
}

/// Creates a password field. Passwords never render in show mode.
pub fn password_field(label: &str) -> Field {
    Field::new(label, TextInput::password())
}

/// Creates a number field that evaluates to its text.
pub fn number_field(label: &str) -> Field {
    Field::new(label, NumberInput::new())
}

/// Creates an integer field.
pub fn integer_field(label: &str) -> Field {
    Field::new(label, IntegerInput::new())
}

/// Creates a multi-line text field.
pub fn memo_field(label: &str) -> Field {
    Field::new(label, MemoInput::new())
}

/// Creates an email field, shown as a `mailto:` link.
pub fn email_field(label: &str) -> Field {
    Field::new(label, TextInput::new().display(TextDisplay::Email))
}

/// Creates a URL field, shown as a link.
pub fn url_field(label: &str) -> Field {
    Field::new(
        label,
        TextInput::new()
            .size(60)
            .maxlength(120)
            .display(TextDisplay::Url),
    )
}

/// Creates a phone number field.
pub fn phone_field(label: &str) -> Field {
    Field::new(label, TextInput::new().size(20))
}

/// Creates a twitter handle field, shown as a profile link.
pub fn twitter_field(label: &str) -> Field {
    Field::new(label, TextInput::new().display(TextDisplay::Twitter))
}

/// Creates a hidden field.
pub fn hidden_field(label: &str) -> Field {
    Field::new(label, HiddenInput)
}
