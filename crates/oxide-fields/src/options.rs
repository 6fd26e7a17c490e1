//! Option lists for choice fields.
//!
//! An option is either a bare value, displayed and stored as-is, or a
//! `(label, value)` pair. Lookups scan in declaration order and the first
//! match wins, so duplicate labels resolve to the earliest entry.

use serde::{Deserialize, Serialize};

/// One entry of an option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldOption {
    /// Displayed and stored as the same string.
    Bare(String),
    /// A display label and the value stored for it.
    Pair(String, String),
}

impl FieldOption {
    /// Returns the display label.
    pub fn label(&self) -> &str {
        match self {
            Self::Bare(value) => value,
            Self::Pair(label, _) => label,
        }
    }

    /// Returns the stored value.
    pub fn value(&self) -> &str {
        match self {
            Self::Bare(value) => value,
            Self::Pair(_, value) => value,
        }
    }
}

impl From<&str> for FieldOption {
    fn from(value: &str) -> Self {
        Self::Bare(value.to_string())
    }
}

impl From<String> for FieldOption {
    fn from(value: String) -> Self {
        Self::Bare(value)
    }
}

impl From<(&str, &str)> for FieldOption {
    fn from((label, value): (&str, &str)) -> Self {
        Self::Pair(label.to_string(), value.to_string())
    }
}

impl From<(String, String)> for FieldOption {
    fn from((label, value): (String, String)) -> Self {
        Self::Pair(label, value)
    }
}

/// An ordered list of options, owned by a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(Vec<FieldOption>);

impl Options {
    /// Creates an option list.
    pub fn new<O: Into<FieldOption>>(options: impl IntoIterator<Item = O>) -> Self {
        Self(options.into_iter().map(Into::into).collect())
    }

    /// Iterates over the options in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldOption> {
        self.0.iter()
    }

    /// Returns the number of options.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether there are no options.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the option at `index`.
    pub fn get(&self, index: usize) -> Option<&FieldOption> {
        self.0.get(index)
    }

    /// Returns the stored value of the first pair labelled `label`.
    pub fn value_for_label(&self, label: &str) -> Option<&str> {
        self.0.iter().find_map(|option| match option {
            FieldOption::Pair(l, v) if l == label => Some(v.as_str()),
            _ => None,
        })
    }

    /// Returns the label of the first pair storing `value`.
    pub fn label_for_value(&self, value: &str) -> Option<&str> {
        self.0.iter().find_map(|option| match option {
            FieldOption::Pair(l, v) if v == value => Some(l.as_str()),
            _ => None,
        })
    }

    /// Resolves a submitted label to its stored value, falling back to the
    /// submitted text.
    pub fn resolve(&self, raw: &str) -> String {
        self.value_for_label(raw).unwrap_or(raw).to_string()
    }

    /// Returns the options whose label or value appears in `selected`, in
    /// option order.
    pub fn selected<'a>(&'a self, selected: &'a [String]) -> impl Iterator<Item = &'a FieldOption> {
        self.0.iter().filter(move |option| {
            selected
                .iter()
                .any(|s| s == option.label() || s == option.value())
        })
    }
}

impl<O: Into<FieldOption>> FromIterator<O> for Options {
    fn from_iter<I: IntoIterator<Item = O>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Options {
    type Item = &'a FieldOption;
    type IntoIter = std::slice::Iter<'a, FieldOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers() -> Options {
        Options::new([("One", "uno"), ("Two", "dos")])
    }

    #[test]
    fn test_label_and_value_lookup() {
        let options = numbers();
        assert_eq!(options.value_for_label("One"), Some("uno"));
        assert_eq!(options.label_for_value("dos"), Some("Two"));
        assert_eq!(options.value_for_label("uno"), None);
    }

    #[test]
    fn test_resolve_falls_back_to_raw() {
        let options = numbers();
        assert_eq!(options.resolve("One"), "uno");
        assert_eq!(options.resolve("dos"), "dos");
        assert_eq!(options.resolve("Three"), "Three");
    }

    #[test]
    fn test_bare_options_do_not_resolve() {
        let options = Options::new(["One", "Two"]);
        assert_eq!(options.value_for_label("One"), None);
        assert_eq!(options.resolve("One"), "One");
    }

    #[test]
    fn test_duplicate_labels_resolve_to_first() {
        let options = Options::new([("Same", "first"), ("Same", "second")]);
        assert_eq!(options.value_for_label("Same"), Some("first"));
    }

    #[test]
    fn test_selected_follows_option_order() {
        let options = numbers();
        let selected = vec!["dos".to_string(), "One".to_string()];
        let labels: Vec<&str> = options.selected(&selected).map(FieldOption::label).collect();
        assert_eq!(labels, vec!["One", "Two"]);
    }

    #[test]
    fn test_deserializes_mixed_entries() {
        let options: Options = serde_json::from_str(r#"["", ["One", "uno"], "Two"]"#).unwrap();
        assert_eq!(options.len(), 3);
        assert_eq!(options.get(1), Some(&FieldOption::from(("One", "uno"))));
        assert_eq!(options.get(2).map(FieldOption::value), Some("Two"));
    }
}
