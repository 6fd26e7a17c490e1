#![allow(dead_code)]

use oxide_fields::widgets::{layout_field, Mode, Widget};
use oxide_fields::{Field, FieldState, Options, Value, Values};

/// Builds submitted values from string pairs.
pub fn submit(pairs: &[(&str, &str)]) -> Values {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), Value::from(*v)))
        .collect()
}

/// Builds a single submitted value.
pub fn submit_one(name: &str, value: impl Into<Value>) -> Values {
    let mut values = Values::new();
    values.insert(name.to_string(), value.into());
    values
}

pub fn numbers() -> Options {
    Options::new([("One", "uno"), ("Two", "dos")])
}

/// A file upload widget, the only kind of widget needing a multipart form.
#[derive(Debug, Clone, Default)]
pub struct UploadInput;

impl Widget for UploadInput {
    fn edit(&self, state: &FieldState) -> String {
        layout_field(
            &state.label,
            &format!(r#"<input type="file" name="{}">"#, state.name),
            Mode::Edit,
        )
    }

    fn requires_multipart_form(&self) -> bool {
        true
    }

    fn boxed_clone(&self) -> Box<dyn Widget> {
        Box::new(self.clone())
    }
}

pub fn upload_field(label: &str) -> Field {
    Field::new(label, UploadInput)
}
