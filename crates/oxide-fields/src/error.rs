//! Error types for fields.

use indexmap::IndexMap;
use thiserror::Error;

/// Field-specific errors.
///
/// Validation failures are not errors: they are recorded on the field and
/// collected with [`ValidationErrors`].
#[derive(Debug, Error)]
pub enum FieldError {
    /// A submitted value could not be coerced to the field's type.
    #[error("invalid value for field {field}: expected {expected}, got {value:?}")]
    Coercion {
        field: String,
        value: String,
        expected: &'static str,
    },

    /// A regex validator was given a pattern that does not compile.
    #[error("invalid validator pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A schema named a validator that does not exist.
    #[error("unknown validator: {0}")]
    UnknownValidator(String),

    /// A schema document could not be parsed.
    #[error("failed to parse schema: {0}")]
    Schema(#[from] serde_json::Error),
}

/// Validation messages keyed by field name, in field order.
///
/// Only the first failing validator's message is kept per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    /// Messages keyed by field name.
    pub errors: IndexMap<String, String>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: IndexMap::new(),
        }
    }

    /// Records the message for a field, replacing any earlier one.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field.to_string(), message.into());
    }

    /// Merges another set of errors into this one.
    pub fn extend(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the message for a specific field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Iterates over `(field, message)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, message) in &self.errors {
            writeln!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// Result type alias for field operations.
pub type Result<T> = std::result::Result<T, FieldError>;
