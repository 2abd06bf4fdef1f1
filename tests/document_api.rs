//! Document model API behavior: lookup taxonomy, ordering, mutation

use initext::ini::{Document, DocumentError};

#[test]
fn find_returns_none_where_get_returns_not_found() {
    let doc = Document::new();
    assert!(doc.find_section("missing").is_none());
    assert_eq!(
        doc.get_section("missing"),
        Err(DocumentError::SectionNotFound("missing".to_string()))
    );
    assert!(doc.find_property("missing").is_none());
    assert_eq!(
        doc.get_property("missing"),
        Err(DocumentError::PropertyNotFound("missing".to_string()))
    );
}

#[test]
fn sections_iterate_in_insertion_order() {
    let mut doc = Document::new();
    doc.get_or_create_section("zeta");
    doc.get_or_create_section("alpha");
    doc.get_or_create_section("mid");

    let names: Vec<&str> = doc.sections().map(|s| s.name()).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn reopening_a_section_does_not_move_it() {
    let mut doc = Document::new();
    doc.get_or_create_section("a");
    doc.get_or_create_section("b");
    doc.get_or_create_section("a").set_property("k", "v");

    let names: Vec<&str> = doc.sections().map(|s| s.name()).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn global_properties_mirror_section_semantics() {
    let mut doc = Document::new();
    doc.get_or_create_property("k", "original");
    doc.get_or_create_property("k", "ignored");
    assert_eq!(doc.get_property("k").unwrap().value(), "original");

    doc.set_property("k", "replaced");
    assert_eq!(doc.get_property("k").unwrap().value(), "replaced");
    assert_eq!(doc.property_count(), 1);
}

#[test]
fn find_property_mut_edits_in_place() {
    let mut doc = Document::new();
    doc.get_or_create_section("s").set_property("k", "1");

    let section = doc.find_section_mut("s").unwrap();
    section.find_property_mut("k").unwrap().set_value("2");

    assert_eq!(
        doc.get_section("s").unwrap().get_property("k").unwrap().value(),
        "2"
    );
}

#[test]
fn unique_comments_per_scope() {
    let mut doc = Document::new();
    doc.add_comment_unique("shared");
    let section = doc.get_or_create_section("s");
    section.add_comment_unique("shared");
    section.add_comment_unique("shared");

    assert_eq!(doc.comment_count(), 1);
    assert_eq!(doc.get_section("s").unwrap().comment_count(), 1);
}

#[test]
fn not_found_errors_render_their_subject() {
    let section_err = DocumentError::SectionNotFound("video".to_string());
    let property_err = DocumentError::PropertyNotFound("width".to_string());
    assert_eq!(section_err.to_string(), "section not found: [video]");
    assert_eq!(property_err.to_string(), "property not found: width");
}
