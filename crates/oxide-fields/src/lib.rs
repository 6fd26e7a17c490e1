//! # oxide-fields
//!
//! Typed form fields bound to flat HTML form submissions.
//!
//! This crate provides:
//! - Typed fields that coerce submitted strings into stored values
//! - Validators run per field, with one message recorded per field
//! - Edit (input widgets) and show (read-only) rendering
//! - Containers (sections, fieldsets, forms) that aggregate all of the above
//! - JSON form templates
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_fields::fields::{checkbox_field, pulldown_field, text_field};
//! use oxide_fields::{values_from_pairs, Component, Fields, Form, Options, Value};
//!
//! let mut form = Form::new(
//!     Fields::new()
//!         .member(text_field("Name").required())
//!         .member(pulldown_field("Type", Options::new([("One", "uno"), ("Two", "dos")])))
//!         .member(checkbox_field("Active")),
//! );
//!
//! let submitted = values_from_pairs([("name", "Joe"), ("TYPE", "One"), ("ACTIVE", "on")]);
//! assert!(form.validate(&submitted).unwrap());
//!
//! let values = form.evaluate();
//! assert_eq!(values["NAME"], Value::from("Joe"));
//! assert_eq!(values["TYPE"], Value::from("uno"));
//! assert_eq!(values["ACTIVE"], Value::Bool(true));
//! assert!(form.edit().starts_with("<form"));
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use oxide_fields::fields::email_field;
//! use oxide_fields::validation::valid_email;
//! use oxide_fields::{values_from_pairs, Component};
//!
//! let mut email = email_field("Email").validator(valid_email());
//! assert!(!email.validate(&values_from_pairs([("EMAIL", "joe")])).unwrap());
//! assert_eq!(email.msg(), Some("invalid email address"));
//! assert!(email.edit().contains(r#"<span class="wrong">invalid email address</span>"#));
//! ```
//!
//! ## Logging
//!
//! The crate logs through `tracing` and installs no subscriber: matched
//! keys at `trace`, validation failures and cleared dates at `debug`,
//! failed integer coercions at `warn`.

pub mod attrs;
mod error;
mod field;
pub mod fields;
mod form;
mod names;
pub mod options;
pub mod schema;
pub mod validation;
mod value;
pub mod widgets;

pub use attrs::{AttributeSource, Helper, Helpers, Resolver};
pub use error::{FieldError, Result, ValidationErrors};
pub use field::{Component, Field, FieldState};
pub use form::{FieldIterator, Fields, Fieldset, Form, Section};
pub use names::{id_for, name_for};
pub use options::{FieldOption, Options};
pub use validation::Validator;
pub use value::{values_from_pairs, Value, Values};
