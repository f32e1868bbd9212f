//! End-to-end mapping over the JSON fixtures: document in, positioned
//! slides out, no filesystem output involved.

use deckgen::{
    ContentFile, LayoutId, Mapper, SlotRole, TemplateSet, Theme,
    scene::{ElementContent, RenderedSlide, ShapeKind, ShapeSpec},
};
use std::path::Path;

const FULL_DECK: &str = include_str!("data/full_deck.json");
const SIMPLE_DECK: &str = include_str!("data/simple_deck.json");

fn map_fixture(raw: &str) -> Vec<RenderedSlide> {
    let file: ContentFile = serde_json::from_str(raw).unwrap();
    let templates = TemplateSet::builtin();
    let theme = Theme::default();
    let mapper = Mapper::new(&templates, &theme, Path::new("target").to_path_buf());
    mapper.map_document(&file.presentation).unwrap()
}

fn texts(slide: &RenderedSlide) -> Vec<String> {
    slide
        .elements
        .iter()
        .filter_map(|e| match &e.content {
            ElementContent::Text(b) => Some(
                b.paragraphs
                    .iter()
                    .map(|p| p.text.clone())
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            _ => None,
        })
        .collect()
}

#[test]
fn one_rendered_slide_per_spec_in_document_order() {
    let slides = map_fixture(FULL_DECK);
    assert_eq!(slides.len(), 11);
    for (i, slide) in slides.iter().enumerate() {
        assert_eq!(slide.number, i as u32 + 1);
    }
    assert_eq!(slides[0].layout, LayoutId::Cover);
    assert_eq!(slides[1].layout, LayoutId::Toc);
}

#[test]
fn cover_carries_title_and_subtitle_verbatim() {
    let slides = map_fixture(SIMPLE_DECK);
    assert_eq!(slides.len(), 1);
    let t = texts(&slides[0]);
    assert!(t.contains(&"Demo".to_string()));
    assert!(t.contains(&"v1".to_string()));
}

#[test]
fn severity_styling_applies_only_to_recognized_values() {
    let slides = map_fixture(FULL_DECK);
    let table = slides[3]
        .elements
        .iter()
        .find_map(|e| match &e.content {
            ElementContent::Table(m) => Some(m),
            _ => None,
        })
        .expect("risk table on slide 4");
    // header + 3 data rows, 3 columns throughout
    assert_eq!(table.cells.len(), 4);
    assert!(table.cells.iter().all(|r| r.len() == 3));

    let theme = Theme::default();
    let high = &table.cells[1][2];
    assert_eq!(high.text, "High");
    assert!(high.bold);
    assert_eq!(high.color, theme.palette.red);
    let medium = &table.cells[2][2];
    assert!(medium.bold);
    assert_eq!(medium.color, theme.palette.orange);
    let low = &table.cells[3][2];
    assert!(!low.bold);
    assert_eq!(low.color, theme.palette.body_text);
}

#[test]
fn icon_grid_tiles_row_major_from_the_content_region() {
    let slides = map_fixture(FULL_DECK);
    let cards: Vec<_> = slides[4]
        .elements
        .iter()
        .filter(|e| matches!(&e.content, ElementContent::Shape(_)))
        .collect();
    // 4 items, two shapes each (card + accent bar)
    assert_eq!(cards.len(), 8);

    let templates = TemplateSet::builtin();
    let region = templates
        .get(LayoutId::Free)
        .unwrap()
        .slot(SlotRole::Content)
        .unwrap();
    assert_eq!(cards[0].frame.x, region.x);
    assert_eq!(cards[0].frame.y, region.y);
    // second card sits one cell-plus-gap to the right, same row
    let step = cards[2].frame.x - cards[0].frame.x;
    assert!(step > cards[0].frame.w);
    assert_eq!(cards[2].frame.y, cards[0].frame.y);
    assert_eq!(cards[4].frame.x - cards[2].frame.x, step);
}

#[test]
fn process_flow_draws_one_fewer_arrow_than_steps() {
    let slides = map_fixture(FULL_DECK);
    let arrows = slides[6]
        .elements
        .iter()
        .filter(|e| {
            matches!(
                &e.content,
                ElementContent::Shape(ShapeSpec {
                    kind: ShapeKind::RightArrow,
                    ..
                })
            )
        })
        .count();
    assert_eq!(arrows, 3); // 4 steps
}

#[test]
fn timeline_phases_tile_the_week_grid_without_overlap() {
    let slides = map_fixture(FULL_DECK);
    // rounded rects on the timeline slide: per phase a label chip then the
    // span bar, in that order
    let bars: Vec<_> = slides[8]
        .elements
        .iter()
        .filter_map(|e| match &e.content {
            ElementContent::Shape(ShapeSpec {
                kind: ShapeKind::RoundedRect,
                ..
            }) => Some(e.frame),
            _ => None,
        })
        .collect();
    assert_eq!(bars.len(), 4);
    let span1 = bars[1];
    let span2 = bars[3];
    // 8 + 4 weeks fill the twelve-column strip end to end
    assert_eq!(span2.x, span1.x + span1.w);
    assert_eq!(span1.w.0 * 4, span2.w.0 * 8);
    assert!(span2.y > span1.y);
}

#[test]
fn missing_gallery_images_become_default_size_placeholders() {
    let slides = map_fixture(FULL_DECK);
    let placeholders: Vec<_> = slides[9]
        .elements
        .iter()
        .filter(|e| matches!(&e.content, ElementContent::Shape(_)))
        .collect();
    assert_eq!(placeholders.len(), 2);
    assert_eq!(placeholders[0].frame.w, placeholders[1].frame.w);
    assert_eq!(placeholders[0].frame.h, placeholders[1].frame.h);
    let labels = texts(&slides[9]);
    assert!(labels.contains(&"Home".to_string()));
    assert!(labels.contains(&"Map".to_string()));
}

#[test]
fn unknown_element_kinds_add_nothing() {
    let slides = map_fixture(FULL_DECK);
    // slide 10 holds two missing screens (placeholder + label + description
    // each), a main title, and one unknown element that must vanish
    assert_eq!(slides[9].elements.len(), 7);
}

#[test]
fn missing_architecture_image_falls_back_to_placeholder() {
    let slides = map_fixture(FULL_DECK);
    let shapes: Vec<_> = slides[10]
        .elements
        .iter()
        .filter(|e| matches!(&e.content, ElementContent::Shape(_)))
        .collect();
    assert_eq!(shapes.len(), 1);
    assert!(shapes[0].frame.w.0 > 0);
}
