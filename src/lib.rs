//! # initext
//!
//! A parser and in-memory document model for the INI format.
//!
//! The parser is a forgiving, single-pass character state machine: malformed
//! fragments are dropped and parsing resumes at the next line, so any input
//! produces a valid (possibly empty) [`Document`](ini::Document). The document
//! model stores every value as raw text and preserves section and property
//! insertion order, so a document can be re-serialized back to INI text.
//!
//! ## Testing
//!
//! Parser tests assert full document shape, not counts. See the
//! [testing module](ini::testing) for the fluent assertion helper that all
//! document-shape tests use.

pub mod ini;

pub use ini::{parse_text, serialize, Document, DocumentError, Property, Section};
