//! Field validators.

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::error::{FieldError, Result};
use crate::value::Value;

type Predicate = dyn Fn(&Value) -> bool + Send + Sync;

/// A named predicate over a single field value.
///
/// Validators are stateless and cheap to clone; the predicate is shared
/// between clones.
#[derive(Clone)]
pub struct Validator {
    message: String,
    predicate: Arc<Predicate>,
}

impl Validator {
    /// Creates a validator from a message and a predicate.
    pub fn new(
        message: impl Into<String>,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Returns whether the value passes.
    pub fn valid(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }

    /// Returns the message recorded when the value does not pass.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Requires a set value that is not only whitespace.
pub fn required() -> Validator {
    Validator::new("required", |value| {
        value.is_truthy() && !value.as_str().is_some_and(|s| s.trim().is_empty())
    })
}

/// Requires a set value. Looser than [`required`]: whitespace passes.
pub fn not_null() -> Validator {
    Validator::new("required", Value::is_truthy)
}

/// Requires at least `min_length` characters.
///
/// With `empty_allowed`, an empty string also passes.
pub fn minimum_length(min_length: usize, empty_allowed: bool) -> Validator {
    Validator::new(format!("minimum length {min_length}"), move |value| {
        (empty_allowed && value.as_str() == Some("")) || value.len() >= min_length
    })
}

/// Requires `pattern` to match at the start of the value. Empty values pass.
pub fn regex_match(message: impl Into<String>, pattern: &str) -> Result<Validator> {
    let regex = Regex::new(&format!(r"\A(?:{pattern})"))?;
    Ok(Validator::new(message, move |value| {
        !value.is_truthy() || regex.is_match(&value.to_string())
    }))
}

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)(^[-!#$%&'*+/=?^_`{}|~0-9A-Z]+(\.[-!#$%&'*+/=?^_`{}|~0-9A-Z]+)*",
        r#"|^"([\x01-\x08\x0b\x0c\x0e-\x1f!#-\[\]-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*""#,
        r")@(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+[A-Z]{2,6}\.?$",
    ))
    .expect("email pattern is valid")
});

/// Returns whether `email` looks like an email address. Empty passes.
pub fn email_valid(email: &str) -> bool {
    email.is_empty() || EMAIL_RE.is_match(email)
}

/// Requires an email address.
pub fn valid_email() -> Validator {
    Validator::new("invalid email address", |value| {
        email_valid(&value.to_string())
    })
}

/// Requires a name of at least two characters.
pub fn valid_name() -> Validator {
    minimum_length(2, false)
}

/// Requires a North American phone number.
pub fn valid_phone() -> Validator {
    regex_match(
        "invalid phone number",
        r"^\(?([2-9][0-8][0-9])\)?[-. ]?([2-9][0-9]{2})[-. ]?([0-9]{4})$",
    )
    .expect("phone pattern is valid")
}

/// Requires letters, digits, `.`, `@` or `\` only.
pub fn valid_username() -> Validator {
    regex_match("letters and numbers only", r"^[a-zA-Z0-9.@\\]+$")
        .expect("username pattern is valid")
}

/// Requires a password of at least six characters.
pub fn valid_password() -> Validator {
    minimum_length(6, false)
}

/// Requires a new password of at least eight characters.
pub fn valid_new_password() -> Validator {
    minimum_length(8, false)
}

/// Looks up one of the common validators by name.
pub fn named(name: &str) -> Result<Validator> {
    match name {
        "required" => Ok(required()),
        "notnull" | "not_null" => Ok(not_null()),
        "valid_name" => Ok(valid_name()),
        "valid_email" => Ok(valid_email()),
        "valid_phone" => Ok(valid_phone()),
        "valid_username" => Ok(valid_username()),
        "valid_password" => Ok(valid_password()),
        "valid_new_password" => Ok(valid_new_password()),
        other => Err(FieldError::UnknownValidator(other.to_string())),
    }
}
