//! Document model for parsed INI data
//!
//! A [`Document`] owns global comments, global properties, and all sections;
//! a [`Section`] owns its comments and properties. Property values are stored
//! as raw text only — typed interpretation lives in
//! [`value`](crate::ini::value), outside the model.
//!
//! Both maps preserve insertion order, which the serializer relies on to
//! reproduce the source layout. Keys are compared case-sensitively.
//!
//! Lookup comes in two flavors, matching the error taxonomy:
//!
//! - `find_*` returns an `Option` and never fails; absence is a normal result.
//! - `get_*` returns a `Result` and treats absence as a contract violation,
//!   surfaced as [`DocumentError`].

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Errors for contract-violating lookups on the document model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// No section with the given name exists
    SectionNotFound(String),
    /// No property with the given key exists in the queried scope
    PropertyNotFound(String),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::SectionNotFound(name) => {
                write!(f, "section not found: [{}]", name)
            }
            DocumentError::PropertyNotFound(key) => {
                write!(f, "property not found: {}", key)
            }
        }
    }
}

impl std::error::Error for DocumentError {}

/// A single key/value pair.
///
/// The value is raw text exactly as parsed (quotes stripped, surrounding
/// whitespace trimmed); the model never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    key: String,
    value: String,
}

impl Property {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Property {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

/// A named group of properties introduced by a `[name]` header line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    name: String,
    comments: Vec<String>,
    properties: IndexMap<String, Property>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Section {
            name: name.into(),
            comments: Vec::new(),
            properties: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Properties in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.values()
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    pub fn has_comment(&self, comment: &str) -> bool {
        self.comments.iter().any(|c| c == comment)
    }

    pub fn add_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    /// Adds a comment unless an identical one is already present.
    pub fn add_comment_unique(&mut self, comment: impl Into<String>) {
        let comment = comment.into();
        if !self.has_comment(&comment) {
            self.comments.push(comment);
        }
    }

    pub fn find_property(&self, key: &str) -> Option<&Property> {
        self.properties.get(key)
    }

    pub fn find_property_mut(&mut self, key: &str) -> Option<&mut Property> {
        self.properties.get_mut(key)
    }

    /// Returns the property for `key`, inserting it with `value` if absent.
    ///
    /// An existing property keeps its current value ("add if absent"
    /// semantics); use [`set_property`](Self::set_property) to overwrite.
    pub fn get_or_create_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Property {
        let key = key.into();
        self.properties
            .entry(key.clone())
            .or_insert_with(|| Property::new(key, value))
    }

    /// Inserts or overwrites the property for `key` (last-write-wins).
    ///
    /// An overwritten property keeps its original insertion position.
    pub fn set_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Property {
        let key = key.into();
        let value = value.into();
        match self.properties.entry(key.clone()) {
            indexmap::map::Entry::Occupied(entry) => {
                let property = entry.into_mut();
                property.set_value(value);
                property
            }
            indexmap::map::Entry::Vacant(entry) => entry.insert(Property::new(key, value)),
        }
    }

    /// Contract-violation lookup; absence is a [`DocumentError`].
    pub fn get_property(&self, key: &str) -> Result<&Property, DocumentError> {
        self.find_property(key)
            .ok_or_else(|| DocumentError::PropertyNotFound(key.to_string()))
    }
}

/// The root of a parsed INI document.
///
/// Comments and properties that appear before any `[section]` header are
/// global and live directly on the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    comments: Vec<String>,
    properties: IndexMap<String, Property>,
    sections: IndexMap<String, Section>,
}

impl Document {
    pub fn new() -> Self {
        Document::default()
    }

    /// True when the document holds no comments, properties, or sections.
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty() && self.properties.is_empty() && self.sections.is_empty()
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Global properties in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.values()
    }

    /// Sections in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    pub fn has_comment(&self, comment: &str) -> bool {
        self.comments.iter().any(|c| c == comment)
    }

    pub fn add_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    /// Adds a global comment unless an identical one is already present.
    pub fn add_comment_unique(&mut self, comment: impl Into<String>) {
        let comment = comment.into();
        if !self.has_comment(&comment) {
            self.comments.push(comment);
        }
    }

    pub fn find_section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn find_section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    /// Returns the section named `name`, creating it empty if absent.
    ///
    /// Re-requesting an existing name reopens the same section; it never
    /// produces a duplicate.
    pub fn get_or_create_section(&mut self, name: impl Into<String>) -> &mut Section {
        let name = name.into();
        self.sections
            .entry(name.clone())
            .or_insert_with(|| Section::new(name))
    }

    /// Contract-violation lookup; absence is a [`DocumentError`].
    pub fn get_section(&self, name: &str) -> Result<&Section, DocumentError> {
        self.find_section(name)
            .ok_or_else(|| DocumentError::SectionNotFound(name.to_string()))
    }

    pub fn find_property(&self, key: &str) -> Option<&Property> {
        self.properties.get(key)
    }

    pub fn find_property_mut(&mut self, key: &str) -> Option<&mut Property> {
        self.properties.get_mut(key)
    }

    /// Global-scope counterpart of [`Section::get_or_create_property`].
    pub fn get_or_create_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Property {
        let key = key.into();
        self.properties
            .entry(key.clone())
            .or_insert_with(|| Property::new(key, value))
    }

    /// Global-scope counterpart of [`Section::set_property`].
    pub fn set_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Property {
        let key = key.into();
        let value = value.into();
        match self.properties.entry(key.clone()) {
            indexmap::map::Entry::Occupied(entry) => {
                let property = entry.into_mut();
                property.set_value(value);
                property
            }
            indexmap::map::Entry::Vacant(entry) => entry.insert(Property::new(key, value)),
        }
    }

    pub fn get_property(&self, key: &str) -> Result<&Property, DocumentError> {
        self.find_property(key)
            .ok_or_else(|| DocumentError::PropertyNotFound(key.to_string()))
    }
}
