//! Raw and stored field values.

use std::fmt;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Values keyed by field name, in field order.
///
/// Used both for submitted data (`update`) and for evaluated data
/// (`evaluate`).
pub type Values = IndexMap<String, Value>;

/// A single field value.
///
/// Submitted data arrives as [`Value::Text`] (or [`Value::List`] for
/// multi-valued controls); widgets normalize it into the other shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// No value.
    #[default]
    Null,
    /// A boolean, as produced by checkboxes.
    Bool(bool),
    /// An integer.
    Integer(i64),
    /// A string.
    Text(String),
    /// A calendar date.
    Date(NaiveDate),
    /// A list of strings, as produced by multi-selects.
    List(Vec<String>),
}

impl Value {
    /// Returns whether the value counts as set.
    ///
    /// Null, empty text, zero, `false` and empty lists are not truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Integer(n) => *n != 0,
            Self::Text(s) => !s.is_empty(),
            Self::Date(_) => true,
            Self::List(items) => !items.is_empty(),
        }
    }

    /// Returns the string slice for text values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the length used by length validators.
    ///
    /// Text counts characters, lists count items, everything else counts
    /// the characters of its display form.
    pub fn len(&self) -> usize {
        match self {
            Self::Null => 0,
            Self::Text(s) => s.chars().count(),
            Self::List(items) => items.len(),
            other => other.to_string().chars().count(),
        }
    }

    /// Returns whether [`Value::len`] is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value as a list of strings.
    ///
    /// Scalars become a one-element list; falsy values become an empty list.
    pub fn to_list(&self) -> Vec<String> {
        match self {
            Self::List(items) => items.clone(),
            other if other.is_truthy() => vec![other.to_string()],
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for Value {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(str::to_string).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Builds a [`Values`] map from submitted `(name, raw)` string pairs.
///
/// Repeated names collect into a [`Value::List`], the way browsers submit
/// multi-selects.
pub fn values_from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Values {
    let mut values = Values::new();
    for (name, raw) in pairs {
        match values.get_mut(name) {
            Some(Value::List(items)) => items.push(raw.to_string()),
            Some(existing) => {
                let first = existing.to_string();
                *existing = Value::List(vec![first, raw.to_string()]);
            }
            None => {
                values.insert(name.to_string(), Value::from(raw));
            }
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(Value::from(" ").is_truthy());
        assert!(!Value::Integer(0).is_truthy());
        assert!(Value::Integer(2).is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::List(Vec::new()).is_truthy());
        assert!(Value::Date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()).is_truthy());
    }

    #[test]
    fn test_to_list() {
        assert_eq!(Value::from("One").to_list(), vec!["One".to_string()]);
        assert_eq!(Value::Null.to_list(), Vec::<String>::new());
        assert_eq!(
            Value::from(vec!["a", "b"]).to_list(),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_values_from_pairs_collects_repeats() {
        let values = values_from_pairs([("NAME", "Joe"), ("TAGS", "a"), ("TAGS", "b")]);
        assert_eq!(values["NAME"], Value::from("Joe"));
        assert_eq!(values["TAGS"], Value::from(vec!["a", "b"]));
    }

    #[test]
    fn test_serializes_as_plain_json() {
        let mut values = Values::new();
        values.insert("COUNT".to_string(), Value::Integer(2));
        values.insert("DONE".to_string(), Value::Bool(true));
        values.insert(
            "START".to_string(),
            Value::Date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()),
        );
        values.insert("TYPE".to_string(), Value::from(vec!["uno", "dos"]));
        values.insert("NOTE".to_string(), Value::Null);

        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(
            json,
            r#"{"COUNT":2,"DONE":true,"START":"2024-01-05","TYPE":["uno","dos"],"NOTE":null}"#
        );
    }

    #[test]
    fn test_deserializes_json_scalars() {
        let values: Values =
            serde_json::from_str(r#"{"A":null,"B":true,"C":3,"D":"x","E":["y"]}"#).unwrap();
        assert_eq!(values["A"], Value::Null);
        assert_eq!(values["B"], Value::Bool(true));
        assert_eq!(values["C"], Value::Integer(3));
        assert_eq!(values["D"], Value::from("x"));
        assert_eq!(values["E"], Value::from(vec!["y"]));
    }
}
