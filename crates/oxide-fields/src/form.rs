//! Containers: ordered groups of fields and nested containers.

use std::fmt;
use std::iter::FusedIterator;

use ironhtml::typed::Element;
use ironhtml_elements::{Legend, H2};
use tracing::debug;

use crate::error::{Result, ValidationErrors};
use crate::field::{Component, Field};
use crate::value::{Value, Values};
use crate::widgets::html_escape;

const URLENCODED: &str = "application/x-www-form-urlencoded";
const MULTIPART: &str = "multipart/form-data";

/// An ordered collection of components.
///
/// Every operation is applied to each member in order. Evaluation merges
/// the members' results, later members overwriting earlier ones.
#[derive(Debug, Clone, Default)]
pub struct Fields {
    members: Vec<Box<dyn Component>>,
}

impl Fields {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a member.
    #[must_use]
    pub fn member(mut self, member: impl Component + 'static) -> Self {
        self.push(member);
        self
    }

    /// Appends a member in place.
    pub fn push(&mut self, member: impl Component + 'static) {
        self.members.push(Box::new(member));
    }

    /// Appends an already boxed member in place.
    pub fn push_boxed(&mut self, member: Box<dyn Component>) {
        self.members.push(member);
    }

    /// Returns the members in order.
    pub fn members(&self) -> &[Box<dyn Component>] {
        &self.members
    }

    /// Returns the number of direct members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns whether there are no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns a fresh iterator over the evaluated values.
    pub fn iter_values(&self) -> FieldIterator {
        FieldIterator::new(self)
    }
}

impl FromIterator<Field> for Fields {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            members: iter
                .into_iter()
                .map(|field| Box::new(field) as Box<dyn Component>)
                .collect(),
        }
    }
}

impl FromIterator<Box<dyn Component>> for Fields {
    fn from_iter<I: IntoIterator<Item = Box<dyn Component>>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl Component for Fields {
    fn update(&mut self, values: &Values) -> Result<()> {
        for member in &mut self.members {
            member.update(values)?;
        }
        Ok(())
    }

    fn initialize(&mut self, defaults: &Values) {
        for member in &mut self.members {
            member.initialize(defaults);
        }
    }

    fn valid(&mut self) -> bool {
        let failed = self
            .members
            .iter_mut()
            .map(|member| member.valid())
            .filter(|ok| !ok)
            .count();
        failed == 0
    }

    fn evaluate(&self) -> Values {
        let mut values = Values::new();
        for member in &self.members {
            values.extend(member.evaluate());
        }
        values
    }

    fn display_values(&self) -> Values {
        let mut values = Values::new();
        for member in &self.members {
            values.extend(member.display_values());
        }
        values
    }

    fn errors(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for member in &self.members {
            errors.extend(member.errors());
        }
        errors
    }

    fn show(&self) -> String {
        self.members.iter().map(|member| member.show()).collect()
    }

    fn edit(&self) -> String {
        self.members.iter().map(|member| member.edit()).collect()
    }

    fn requires_multipart_form(&self) -> bool {
        self.members
            .iter()
            .any(|member| member.requires_multipart_form())
    }

    fn find(&self, name: &str) -> Option<&Field> {
        self.members.iter().find_map(|member| member.find(name))
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.members
            .iter_mut()
            .find_map(|member| member.find_mut(name))
    }

    fn boxed_clone(&self) -> Box<dyn Component> {
        Box::new(self.clone())
    }
}

/// One `NAME: value` line per evaluated field.
impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .evaluate()
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect();
        f.write_str(&lines.join("\n"))
    }
}

/// Forwards the non-rendering part of [`Component`] to an inner `fields`.
macro_rules! delegate_to_fields {
    () => {
        fn update(&mut self, values: &Values) -> Result<()> {
            self.fields.update(values)
        }

        fn initialize(&mut self, defaults: &Values) {
            self.fields.initialize(defaults);
        }

        fn valid(&mut self) -> bool {
            self.fields.valid()
        }

        fn evaluate(&self) -> Values {
            self.fields.evaluate()
        }

        fn display_values(&self) -> Values {
            self.fields.display_values()
        }

        fn errors(&self) -> ValidationErrors {
            self.fields.errors()
        }

        fn requires_multipart_form(&self) -> bool {
            self.fields.requires_multipart_form()
        }

        fn find(&self, name: &str) -> Option<&Field> {
            self.fields.find(name)
        }

        fn find_mut(&mut self, name: &str) -> Option<&mut Field> {
            self.fields.find_mut(name)
        }

        fn boxed_clone(&self) -> Box<dyn Component> {
            Box::new(self.clone())
        }
    };
}

fn render_hint(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!(r#"<span class="hint">{hint}</span>"#)
    }
}

/// A titled group of fields, rendered under an `<h2>` heading.
///
/// Show mode renders nothing when no member shows anything.
#[derive(Debug, Clone)]
pub struct Section {
    /// Heading text.
    pub label: String,
    /// Hint shown next to the heading in edit mode.
    pub hint: String,
    /// The members.
    pub fields: Fields,
}

impl Section {
    /// Creates a section.
    pub fn new(label: impl Into<String>, fields: Fields) -> Self {
        Self {
            label: label.into(),
            hint: String::new(),
            fields,
        }
    }

    /// Sets the hint.
    #[must_use]
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    fn heading(&self) -> String {
        Element::<H2>::new().text(self.label.as_str()).render()
    }
}

impl Component for Section {
    delegate_to_fields!();

    fn show(&self) -> String {
        let body = self.fields.show();
        if body.is_empty() {
            return String::new();
        }
        format!("{}\n{body}", self.heading())
    }

    fn edit(&self) -> String {
        format!(
            "{}{}\n{}",
            self.heading(),
            render_hint(&self.hint),
            self.fields.edit()
        )
    }
}

/// A group of fields rendered in a `<fieldset>` with a legend.
#[derive(Debug, Clone)]
pub struct Fieldset {
    /// Legend text.
    pub label: String,
    /// Hint shown after the legend in edit mode.
    pub hint: String,
    /// The members.
    pub fields: Fields,
}

impl Fieldset {
    /// Creates a fieldset.
    pub fn new(label: impl Into<String>, fields: Fields) -> Self {
        Self {
            label: label.into(),
            hint: String::new(),
            fields,
        }
    }

    /// Sets the hint.
    #[must_use]
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    fn render(&self, content: &str) -> String {
        let legend = Element::<Legend>::new().text(self.label.as_str()).render();
        format!("<fieldset>{legend}{content}</fieldset>")
    }
}

impl Component for Fieldset {
    delegate_to_fields!();

    fn show(&self) -> String {
        let body = self.fields.show();
        if body.is_empty() {
            return String::new();
        }
        self.render(&format!("\n{body}"))
    }

    fn edit(&self) -> String {
        self.render(&format!("{}\n{}", render_hint(&self.hint), self.fields.edit()))
    }
}

/// An HTML form around a collection of members.
///
/// The encoding type is fixed when the form is created: multipart when any
/// member asks for it, url-encoded otherwise.
#[derive(Debug, Clone)]
pub struct Form {
    /// Submission target.
    pub action: String,
    /// HTTP method.
    pub method: String,
    /// Form name, also used as its id.
    pub name: String,
    /// The members.
    pub fields: Fields,
    enctype: &'static str,
}

impl Form {
    /// Creates a form posting to the current URL.
    pub fn new(fields: Fields) -> Self {
        let enctype = if fields.requires_multipart_form() {
            debug!("form requires multipart encoding");
            MULTIPART
        } else {
            URLENCODED
        };
        Self {
            action: String::new(),
            method: "POST".to_string(),
            name: "dz_form".to_string(),
            fields,
            enctype,
        }
    }

    /// Sets the submission target.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Sets the form name and id.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the encoding type chosen at construction.
    pub fn enctype(&self) -> &str {
        self.enctype
    }

    /// Returns a fresh iterator over the evaluated values.
    pub fn iter_values(&self) -> FieldIterator {
        FieldIterator::new(self)
    }
}

impl From<Fields> for Form {
    fn from(fields: Fields) -> Self {
        Self::new(fields)
    }
}

impl Component for Form {
    delegate_to_fields!();

    fn show(&self) -> String {
        self.fields.show()
    }

    fn edit(&self) -> String {
        let name = html_escape(&self.name);
        format!(
            r#"<form action="{}" id="{name}" name="{name}" method="{}" enctype="{}">{}</form>"#,
            html_escape(&self.action),
            html_escape(&self.method),
            self.enctype,
            self.fields.edit()
        )
    }
}

/// Iterator over `(lower-cased name, value)` pairs of one evaluation.
///
/// The values are captured when the iterator is created; later updates to
/// the container are not seen.
#[derive(Debug)]
pub struct FieldIterator {
    inner: indexmap::map::IntoIter<String, Value>,
}

impl FieldIterator {
    /// Evaluates `component` and iterates over the result.
    pub fn new(component: &dyn Component) -> Self {
        Self {
            inner: component.evaluate().into_iter(),
        }
    }
}

impl Iterator for FieldIterator {
    type Item = (String, Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, value)| (name.to_lowercase(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for FieldIterator {}

impl FusedIterator for FieldIterator {}
