//! Main module for the INI library functionality
//!
//! ## Modules
//!
//! - `document` - Property, Section, and Document model types
//! - `parser` - Character state machine producing a Document from text
//! - `serializer` - Document back to INI text
//! - `value` - Typed conversions for property values (collaborator-side)
//! - `testing` - Fluent document assertions for tests

pub mod document;
pub mod parser;
pub mod serializer;
pub mod testing;
pub mod value;

// Re-export commonly used types at module root
pub use document::{Document, DocumentError, Property, Section};
pub use parser::parse_text;
pub use serializer::serialize;
