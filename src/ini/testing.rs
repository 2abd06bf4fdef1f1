//! Testing utilities for document assertions
//!
//! Document-shape tests should assert the full shape of the parsed document
//! (sections, keys, values, comments, and their order), not counts alone.
//! Spelling that out with manual field access is noisy and hard to review,
//! so tests use this small fluent helper instead:
//!
//! ```rust-example
//! assert_doc(&parse_text(source))
//!     .section_count(2)
//!     .section("net", |s| s.keys(&["host", "port"]).property("port", "80"));
//! ```
//!
//! Every assertion panics with a message naming the scope that failed, which
//! is all a failing parser test needs.

use crate::ini::document::{Document, Section};

/// Entry point: wrap a document in its assertion helper.
pub fn assert_doc(document: &Document) -> DocumentAssert<'_> {
    DocumentAssert { document }
}

/// Fluent assertions over a [`Document`]
pub struct DocumentAssert<'a> {
    document: &'a Document,
}

impl<'a> DocumentAssert<'a> {
    pub fn is_empty(self) -> Self {
        assert!(
            self.document.is_empty(),
            "expected empty document, got {:?}",
            self.document
        );
        self
    }

    pub fn section_count(self, expected: usize) -> Self {
        assert_eq!(
            self.document.section_count(),
            expected,
            "section count mismatch"
        );
        self
    }

    pub fn global_property(self, key: &str, value: &str) -> Self {
        match self.document.find_property(key) {
            Some(property) => assert_eq!(
                property.value(),
                value,
                "global property {:?} value mismatch",
                key
            ),
            None => panic!("missing global property {:?}", key),
        }
        self
    }

    pub fn no_global_property(self, key: &str) -> Self {
        assert!(
            self.document.find_property(key).is_none(),
            "unexpected global property {:?}",
            key
        );
        self
    }

    pub fn global_comment(self, text: &str) -> Self {
        assert!(
            self.document.has_comment(text),
            "missing global comment {:?}, have {:?}",
            text,
            self.document.comments()
        );
        self
    }

    pub fn no_section(self, name: &str) -> Self {
        assert!(
            !self.document.has_section(name),
            "unexpected section [{}]",
            name
        );
        self
    }

    /// Asserts the section exists and runs nested assertions against it.
    pub fn section(self, name: &str, check: impl FnOnce(SectionAssert<'_>)) -> Self {
        match self.document.find_section(name) {
            Some(section) => check(SectionAssert { section }),
            None => panic!("missing section [{}]", name),
        }
        self
    }
}

/// Fluent assertions over a single [`Section`]
pub struct SectionAssert<'a> {
    section: &'a Section,
}

impl<'a> SectionAssert<'a> {
    pub fn property(self, key: &str, value: &str) -> Self {
        match self.section.find_property(key) {
            Some(property) => assert_eq!(
                property.value(),
                value,
                "property {:?} in [{}] value mismatch",
                key,
                self.section.name()
            ),
            None => panic!("missing property {:?} in [{}]", key, self.section.name()),
        }
        self
    }

    pub fn no_property(self, key: &str) -> Self {
        assert!(
            self.section.find_property(key).is_none(),
            "unexpected property {:?} in [{}]",
            key,
            self.section.name()
        );
        self
    }

    pub fn property_count(self, expected: usize) -> Self {
        assert_eq!(
            self.section.property_count(),
            expected,
            "property count mismatch in [{}]",
            self.section.name()
        );
        self
    }

    /// Asserts the exact key sequence, in insertion order.
    pub fn keys(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.section.properties().map(|p| p.key()).collect();
        assert_eq!(
            actual,
            expected,
            "key order mismatch in [{}]",
            self.section.name()
        );
        self
    }

    pub fn comment(self, text: &str) -> Self {
        assert!(
            self.section.has_comment(text),
            "missing comment {:?} in [{}], have {:?}",
            text,
            self.section.name(),
            self.section.comments()
        );
        self
    }

    pub fn no_comments(self) -> Self {
        assert!(
            self.section.comments().is_empty(),
            "unexpected comments in [{}]: {:?}",
            self.section.name(),
            self.section.comments()
        );
        self
    }
}
