//! Named attribute lookup for template substitution.
//!
//! A template tag such as `{{name}}` is resolved against an ordered chain of
//! sources: fields, containers and helper registries. The first source that
//! knows the name answers.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::field::{Component, Field};
use crate::form::{Fields, Fieldset, Form, Section};

/// A value a source hands out for a name.
#[derive(Clone)]
pub enum Helper {
    /// A fixed string.
    Static(String),
    /// A string computed each time it is resolved.
    Computed(Arc<dyn Fn() -> String + Send + Sync>),
}

impl Helper {
    /// Creates a computed helper.
    pub fn computed(f: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self::Computed(Arc::new(f))
    }

    /// Produces the string.
    pub fn resolve(&self) -> String {
        match self {
            Self::Static(text) => text.clone(),
            Self::Computed(f) => f(),
        }
    }
}

impl fmt::Debug for Helper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<&str> for Helper {
    fn from(text: &str) -> Self {
        Self::Static(text.to_string())
    }
}

impl From<String> for Helper {
    fn from(text: String) -> Self {
        Self::Static(text)
    }
}

/// Something that can answer attribute lookups by name.
pub trait AttributeSource {
    /// Returns the attribute called `name`, if this source has one.
    fn attribute(&self, name: &str) -> Option<Helper>;
}

impl AttributeSource for Field {
    fn attribute(&self, name: &str) -> Option<Helper> {
        let state = self.state();
        let text = match name {
            "name" => state.name.clone(),
            "label" => state.label.clone(),
            "value" => state.value.to_string(),
            "default" => state.default.to_string(),
            "hint" => state.hint.clone(),
            "msg" => state.msg.clone(),
            "display_value" => self.display_value(),
            "show" => self.show(),
            "edit" => self.edit(),
            _ => return None,
        };
        Some(Helper::Static(text))
    }
}

fn member_display_value(component: &dyn Component, name: &str) -> Option<Helper> {
    component
        .find(name)
        .map(|field| Helper::Static(field.display_value()))
}

impl AttributeSource for Fields {
    fn attribute(&self, name: &str) -> Option<Helper> {
        match name {
            "show" => Some(Helper::Static(self.show())),
            "edit" => Some(Helper::Static(self.edit())),
            _ => member_display_value(self, name),
        }
    }
}

macro_rules! labelled_source {
    ($container:ty) => {
        impl AttributeSource for $container {
            fn attribute(&self, name: &str) -> Option<Helper> {
                match name {
                    "show" => Some(Helper::Static(self.show())),
                    "edit" => Some(Helper::Static(self.edit())),
                    "label" => Some(Helper::Static(self.label.clone())),
                    "hint" => Some(Helper::Static(self.hint.clone())),
                    _ => member_display_value(self, name),
                }
            }
        }
    };
}

labelled_source!(Section);
labelled_source!(Fieldset);

impl AttributeSource for Form {
    fn attribute(&self, name: &str) -> Option<Helper> {
        match name {
            "show" => Some(Helper::Static(self.show())),
            "edit" => Some(Helper::Static(self.edit())),
            "action" => Some(Helper::Static(self.action.clone())),
            "method" => Some(Helper::Static(self.method.clone())),
            "enctype" => Some(Helper::Static(self.enctype().to_string())),
            _ => member_display_value(self, name),
        }
    }
}

/// An ordered registry of named helpers.
#[derive(Debug, Clone, Default)]
pub struct Helpers {
    helpers: IndexMap<String, Helper>,
}

impl Helpers {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a helper, replacing an earlier one with the same name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, helper: impl Into<Helper>) -> Self {
        self.insert(name, helper);
        self
    }

    /// Registers a helper in place.
    pub fn insert(&mut self, name: impl Into<String>, helper: impl Into<Helper>) {
        self.helpers.insert(name.into(), helper.into());
    }

    /// Returns the number of helpers.
    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }
}

impl AttributeSource for Helpers {
    fn attribute(&self, name: &str) -> Option<Helper> {
        self.helpers.get(name).cloned()
    }
}

/// An ordered chain of attribute sources.
#[derive(Default)]
pub struct Resolver<'a> {
    sources: Vec<(String, &'a dyn AttributeSource)>,
}

impl<'a> Resolver<'a> {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Appends a named source; earlier sources take precedence.
    #[must_use]
    pub fn push(mut self, name: impl Into<String>, source: &'a dyn AttributeSource) -> Self {
        self.sources.push((name.into(), source));
        self
    }

    /// Returns the source names in lookup order.
    pub fn source_names(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(|(name, _)| name.as_str())
    }

    /// Resolves `tag` against the first source that knows it.
    pub fn resolve(&self, tag: &str) -> Option<String> {
        self.sources
            .iter()
            .find_map(|(_, source)| source.attribute(tag))
            .map(|helper| helper.resolve())
    }
}

impl fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("sources", &self.source_names().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::widgets::TextInput;

    fn name_field() -> Field {
        Field::new("Name", TextInput::new())
            .with_value("Joe")
            .unwrap()
            .hint("Full name")
    }

    #[test]
    fn test_field_attributes() {
        let field = name_field();
        assert_eq!(field.attribute("name").map(|h| h.resolve()), Some("NAME".to_string()));
        assert_eq!(field.attribute("hint").map(|h| h.resolve()), Some("Full name".to_string()));
        assert_eq!(field.attribute("value").map(|h| h.resolve()), Some("Joe".to_string()));
        assert!(field.attribute("colour").is_none());
    }

    #[test]
    fn test_container_exposes_member_display_values() {
        let section = Section::new("Personal", Fields::new().member(name_field()));
        assert_eq!(section.attribute("label").map(|h| h.resolve()), Some("Personal".to_string()));
        assert_eq!(section.attribute("name").map(|h| h.resolve()), Some("Joe".to_string()));
        assert!(section.attribute("missing").is_none());
    }

    #[test]
    fn test_computed_helper_runs_on_each_resolve() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let helper = Helper::computed(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            "now".to_string()
        });
        assert_eq!(helper.resolve(), "now");
        assert_eq!(helper.resolve(), "now");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_resolver_first_source_wins() {
        let field = name_field();
        let site = Helpers::new()
            .with("name", "Site")
            .with("title", "Welcome");
        let resolver = Resolver::new().push("field", &field).push("site", &site);

        assert_eq!(resolver.resolve("name"), Some("NAME".to_string()));
        assert_eq!(resolver.resolve("title"), Some("Welcome".to_string()));
        assert_eq!(resolver.resolve("unknown"), None);
        assert_eq!(resolver.source_names().collect::<Vec<_>>(), vec!["field", "site"]);
    }
}
