//! Property-based round-trip tests
//!
//! Documents built through the public API must survive serialize -> parse
//! with identical content. Generated names and values stick to the alphabet
//! the format can actually represent: the parser trims edge whitespace,
//! strips quote characters, and discards empty values, so those shapes are
//! excluded by the generators rather than "fixed up" afterwards.

use std::collections::HashMap;

use initext::ini::{parse_text, serialize, Document};
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_.]{0,11}"
}

fn section_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_. ]{0,11}[A-Za-z0-9]"
}

// No quotes, no edge whitespace, never empty.
fn value_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.:/-]([A-Za-z0-9 \t_.,:/=;-]{0,16}[A-Za-z0-9_.:/-])?"
}

fn comment_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.-]([A-Za-z0-9 _.,:-]{0,16}[A-Za-z0-9_.-])?"
}

fn properties_strategy() -> impl Strategy<Value = HashMap<String, String>> {
    prop::collection::hash_map(key_strategy(), value_strategy(), 0..4)
}

#[derive(Debug, Clone)]
struct SectionSpec {
    comments: Vec<String>,
    properties: HashMap<String, String>,
}

fn section_spec_strategy() -> impl Strategy<Value = SectionSpec> {
    (
        prop::collection::vec(comment_strategy(), 0..3),
        properties_strategy(),
    )
        .prop_map(|(comments, properties)| SectionSpec {
            comments,
            properties,
        })
}

fn document_strategy() -> impl Strategy<Value = Document> {
    (
        prop::collection::vec(comment_strategy(), 0..3),
        properties_strategy(),
        prop::collection::hash_map(section_name_strategy(), section_spec_strategy(), 0..4),
    )
        .prop_map(|(comments, properties, sections)| {
            let mut doc = Document::new();
            for comment in comments {
                doc.add_comment(comment);
            }
            for (key, value) in properties {
                doc.set_property(key, value);
            }
            for (name, spec) in sections {
                let section = doc.get_or_create_section(name);
                for comment in spec.comments {
                    section.add_comment(comment);
                }
                for (key, value) in spec.properties {
                    section.set_property(key, value);
                }
            }
            doc
        })
}

proptest! {
    /// serialize -> parse preserves sections, keys, values, comments,
    /// and their order. Map equality alone is order-insensitive, so the
    /// ordering claim is checked through the serialized text, which walks
    /// both documents in insertion order.
    #[test]
    fn api_built_documents_round_trip(doc in document_strategy()) {
        let reparsed = parse_text(&serialize(&doc));
        prop_assert_eq!(serialize(&reparsed), serialize(&doc));
        prop_assert_eq!(reparsed, doc);
    }

    /// The parser accepts anything without panicking and is deterministic.
    #[test]
    fn arbitrary_input_never_panics(input in "\\PC{0,200}") {
        let first = parse_text(&input);
        let second = parse_text(&input);
        prop_assert_eq!(first, second);
    }

    /// Once text has gone through a parse -> serialize cycle, further
    /// cycles are stable: parse(serialize(d)) == d for parser-built d,
    /// provided no value or comment was emptied by the first pass.
    #[test]
    fn parser_output_is_a_fixed_point(input in "[\\x20-\\x7e\n]{0,200}") {
        let first = parse_text(&input);
        let canonical = serialize(&first);
        let second = parse_text(&canonical);
        // Empty values survive parsing (via quotes) but cannot be
        // re-serialized losslessly; skip those rare inputs.
        let has_empty_value = first.properties().any(|p| p.value().is_empty())
            || first
                .sections()
                .flat_map(|s| s.properties())
                .any(|p| p.value().is_empty());
        if !has_empty_value {
            prop_assert_eq!(serialize(&second), canonical);
            prop_assert_eq!(second, first);
        }
    }
}
