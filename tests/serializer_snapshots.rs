//! Snapshot tests for serializer output
//!
//! Inline snapshots pin the exact text layout: comment prefixes, `key = value`
//! spacing, the single blank line between sections, and the absent trailing
//! newline.

use initext::ini::{parse_text, serialize, Document};

fn sample_document() -> Document {
    let mut doc = Document::new();
    doc.add_comment("engine configuration");
    doc.set_property("version", "2");

    let display = doc.get_or_create_section("display");
    display.add_comment("resolution in pixels");
    display.set_property("width", "1920");
    display.set_property("height", "1080");

    doc.get_or_create_section("audio").set_property("volume", "0.8");
    doc
}

#[test]
fn ini_layout() {
    insta::assert_snapshot!(serialize(&sample_document()), @r###"
    ; engine configuration
    version = 2

    [display]
    ; resolution in pixels
    width = 1920
    height = 1080

    [audio]
    volume = 0.8
    "###);
}

#[test]
fn propertyless_section_widens_the_separator() {
    // A section without properties already ends its block with a newline,
    // so the fixed separator yields two blank lines before the next header.
    let mut doc = Document::new();
    doc.get_or_create_section("placeholder");
    doc.get_or_create_section("net").set_property("port", "80");

    let output = serialize(&doc);
    insta::assert_snapshot!(&output, @r###"
    [placeholder]


    [net]
    port = 80
    "###);
    assert_eq!(parse_text(&output), doc);
}

#[test]
fn ini_layout_reparses_to_same_document() {
    let doc = sample_document();
    assert_eq!(parse_text(&serialize(&doc)), doc);
}

#[test]
fn json_projection() {
    let mut doc = Document::new();
    doc.set_property("version", "2");
    doc.get_or_create_section("audio").set_property("volume", "0.8");

    let json = serde_json::to_string_pretty(&doc).unwrap();
    insta::assert_snapshot!(json, @r###"
    {
      "comments": [],
      "properties": {
        "version": {
          "key": "version",
          "value": "2"
        }
      },
      "sections": {
        "audio": {
          "name": "audio",
          "comments": [],
          "properties": {
            "volume": {
              "key": "volume",
              "value": "0.8"
            }
          }
        }
      }
    }
    "###);
}
