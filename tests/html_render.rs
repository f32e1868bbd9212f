use std::path::Path;

use deckgen::{ContentFile, export::write_html};

const FULL_DECK: &str = include_str!("data/full_deck.json");

#[test]
fn slideshow_holds_title_and_one_section_per_slide() {
    let file: ContentFile = serde_json::from_str(FULL_DECK).unwrap();
    let doc = file.presentation;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("deck.html");
    write_html(&out, &doc).unwrap();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("<title>Field Service Platform</title>"));
    for i in 1..=doc.slides.len() {
        assert!(html.contains(&format!("id='slide-{i}'")), "missing slide {i}");
    }
    assert!(!html.contains(&format!("id='slide-{}'", doc.slides.len() + 1)));
}

#[test]
fn element_markup_survives_the_deck_fixture() {
    let file: ContentFile = serde_json::from_str(FULL_DECK).unwrap();
    let doc = file.presentation;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("deck.html");
    write_html(&out, &doc).unwrap();

    let html = std::fs::read_to_string(&out).unwrap();
    // table, card grid, and flow all render; the unknown kind leaves nothing
    assert!(html.contains("Legacy data import"));
    assert!(html.contains("Dispatch"));
    assert!(html.contains("Receive"));
    assert!(!html.contains("holographic"));
}

#[test]
fn user_text_is_escaped() {
    let raw = r#"{
        "presentation": {
            "title": "Q&A <draft>",
            "slides": [{
                "slide_number": 1,
                "layout_id": 3,
                "placeholders": {
                    "main_title": "Plan <next>",
                    "body": [{"text": "a & b", "level": 1}]
                }
            }]
        }
    }"#;
    let file: ContentFile = serde_json::from_str(raw).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("deck.html");
    write_html(&out, &file.presentation).unwrap();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.contains("Plan &lt;next&gt;"));
    assert!(html.contains("a &amp; b"));
    assert!(!html.contains("Plan <next>"));
}

#[test]
fn missing_output_directory_is_a_render_error() {
    let file: ContentFile = serde_json::from_str(FULL_DECK).unwrap();
    let err = write_html(Path::new("/nonexistent/dir/deck.html"), &file.presentation)
        .unwrap_err();
    assert!(err.to_string().contains("render"));
}
