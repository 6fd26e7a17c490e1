//! Declarative form templates.
//!
//! A [`FormSchema`] describes a form as data, typically JSON, and builds a
//! fresh [`Form`] on each call to [`FormSchema::build`]:
//!
//! ```rust
//! use oxide_fields::schema::FormSchema;
//! use oxide_fields::Component;
//!
//! let schema = FormSchema::from_json(r#"{
//!     "action": "/settings",
//!     "members": [
//!         {"type": "section", "label": "Site", "members": [
//!             {"type": "text", "label": "Name", "name": "SITE_NAME", "required": true},
//!             {"type": "pulldown", "label": "Theme", "options": [["Light", "light"], ["Dark", "dark"]]}
//!         ]},
//!         {"type": "buttons", "captions": ["Save", "Reset"]}
//!     ]
//! }"#).unwrap();
//!
//! let mut form = schema.build().unwrap();
//! assert!(!form.valid());
//! assert_eq!(form.errors().get("SITE_NAME"), Some("required"));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::field::Field;
use crate::form::{Fields, Fieldset, Form, Section};
use crate::options::Options;
use crate::validation;
use crate::value::Value;
use crate::widgets::{ButtonInput, ButtonsInput, CheckboxInput};
use crate::{fields, Component};

/// The configuration shared by every single-field kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSchema {
    /// Display label; the name is derived from it.
    pub label: String,
    /// Explicit name, overriding the derived one.
    pub name: Option<String>,
    /// Hint shown next to the widget.
    pub hint: String,
    /// Default value.
    pub default: Value,
    /// Initial value, coerced like a submitted one.
    pub value: Value,
    /// Whether the `required` validator is attached.
    pub required: bool,
    /// Whether the field renders at all.
    pub hidden: bool,
    /// Options of choice kinds. A checkbox with two options uses them as
    /// its checked and unchecked labels.
    pub options: Options,
    /// Validators by name, run after `required`.
    pub validators: Vec<String>,
}

impl FieldSchema {
    fn build(&self, field: Field) -> Result<Field> {
        let mut field = field.hint(self.hint.as_str()).default_value(self.default.clone());
        if let Some(name) = &self.name {
            field = field.named(name.as_str());
        }
        if self.required {
            field = field.required();
        }
        for name in &self.validators {
            field = field.validator(validation::named(name)?);
        }
        if self.hidden {
            field = field.hidden();
        }
        if self.value.is_truthy() {
            field = field.with_value(self.value.clone())?;
        }
        Ok(field)
    }

    fn checkbox(&self) -> CheckboxInput {
        match (self.options.get(0), self.options.get(1)) {
            (Some(on), Some(off)) => CheckboxInput::new(on.label(), off.label()),
            _ => CheckboxInput::default(),
        }
    }

    fn checkbox_values(&self) -> Vec<String> {
        self.options
            .iter()
            .map(|option| option.value().to_string())
            .collect()
    }
}

/// One member of a form: a field kind, a button row or a nested group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MemberSchema {
    /// A single-line text field.
    Text(FieldSchema),
    /// A password field, never shown in show mode.
    Password(FieldSchema),
    /// A number field, evaluated as entered text.
    Number(FieldSchema),
    /// A text field coerced to an integer.
    Integer(FieldSchema),
    /// A multi-line text area.
    Memo(FieldSchema),
    /// A text field shown as a `mailto:` link.
    Email(FieldSchema),
    /// A text field shown as a link.
    Url(FieldSchema),
    /// A short text field for phone numbers.
    Phone(FieldSchema),
    /// A text field shown as a link to the handle.
    Twitter(FieldSchema),
    /// A hidden input.
    Hidden(FieldSchema),
    /// A date field.
    Date(FieldSchema),
    /// A date field sized for birthdates.
    Birthdate(FieldSchema),
    /// A single checkbox.
    Checkbox(FieldSchema),
    /// A checkbox group over `options`.
    Checkboxes(FieldSchema),
    /// A drop-down select over `options`.
    Pulldown(FieldSchema),
    /// Radio buttons over `options`.
    Radio(FieldSchema),
    /// A multiple-choice select over `options`.
    Multiselect(FieldSchema),
    /// A single submit button named `{CAPTION}_BUTTON`.
    Button {
        caption: String,
        #[serde(default)]
        cancel: Option<String>,
        #[serde(default)]
        framed: bool,
    },
    /// A row of submit buttons.
    Buttons {
        captions: Vec<String>,
        #[serde(default)]
        cancel: Option<String>,
    },
    /// A nested [`Section`].
    Section {
        label: String,
        #[serde(default)]
        hint: String,
        #[serde(default)]
        members: Vec<MemberSchema>,
    },
    /// A nested [`Fieldset`].
    Fieldset {
        label: String,
        #[serde(default)]
        hint: String,
        #[serde(default)]
        members: Vec<MemberSchema>,
    },
}

impl MemberSchema {
    /// Builds a fresh component from this description.
    pub fn build(&self) -> Result<Box<dyn Component>> {
        let boxed = |schema: &FieldSchema, field: Field| -> Result<Box<dyn Component>> {
            Ok(Box::new(schema.build(field)?))
        };
        match self {
            Self::Text(s) => boxed(s, fields::text_field(&s.label)),
            Self::Password(s) => boxed(s, fields::password_field(&s.label)),
            Self::Number(s) => boxed(s, fields::number_field(&s.label)),
            Self::Integer(s) => boxed(s, fields::integer_field(&s.label)),
            Self::Memo(s) => boxed(s, fields::memo_field(&s.label)),
            Self::Email(s) => boxed(s, fields::email_field(&s.label)),
            Self::Url(s) => boxed(s, fields::url_field(&s.label)),
            Self::Phone(s) => boxed(s, fields::phone_field(&s.label)),
            Self::Twitter(s) => boxed(s, fields::twitter_field(&s.label)),
            Self::Hidden(s) => boxed(s, fields::hidden_field(&s.label)),
            Self::Date(s) => boxed(s, fields::date_field(&s.label)),
            Self::Birthdate(s) => boxed(s, fields::birthdate_field(&s.label)),
            Self::Checkbox(s) => boxed(s, Field::new(s.label.as_str(), s.checkbox())),
            Self::Checkboxes(s) => boxed(s, fields::checkboxes_field(&s.label, s.checkbox_values())),
            Self::Pulldown(s) => boxed(s, fields::pulldown_field(&s.label, s.options.clone())),
            Self::Radio(s) => boxed(s, fields::radio_field(&s.label, s.options.clone())),
            Self::Multiselect(s) => {
                boxed(s, fields::multiselect_field(&s.label, s.options.clone()))
            }
            Self::Button {
                caption,
                cancel,
                framed,
            } => {
                let mut widget = ButtonInput::new(caption.as_str());
                widget.cancel.clone_from(cancel);
                widget.framed = *framed;
                Ok(Box::new(Field::new(format!("{caption} Button"), widget)))
            }
            Self::Buttons { captions, cancel } => {
                let mut widget = ButtonsInput::new(captions.iter().map(String::as_str));
                widget.cancel.clone_from(cancel);
                Ok(Box::new(Field::new("", widget)))
            }
            Self::Section {
                label,
                hint,
                members,
            } => Ok(Box::new(
                Section::new(label.as_str(), build_members(members)?).hint(hint.as_str()),
            )),
            Self::Fieldset {
                label,
                hint,
                members,
            } => Ok(Box::new(
                Fieldset::new(label.as_str(), build_members(members)?).hint(hint.as_str()),
            )),
        }
    }
}

fn build_members(members: &[MemberSchema]) -> Result<Fields> {
    members.iter().map(MemberSchema::build).collect()
}

fn default_method() -> String {
    "POST".to_string()
}

fn default_name() -> String {
    "dz_form".to_string()
}

/// A whole form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    /// Submission target.
    #[serde(default)]
    pub action: String,
    /// HTTP method.
    #[serde(default = "default_method")]
    pub method: String,
    /// Form name and id.
    #[serde(default = "default_name")]
    pub name: String,
    /// Members in order.
    #[serde(default)]
    pub members: Vec<MemberSchema>,
}

impl FormSchema {
    /// Parses a schema from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds a new form with its own field instances.
    pub fn build(&self) -> Result<Form> {
        Ok(Form::new(build_members(&self.members)?)
            .action(self.action.as_str())
            .method(self.method.as_str())
            .name(self.name.as_str()))
    }
}
