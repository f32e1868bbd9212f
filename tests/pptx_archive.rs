//! Writes a real deck to disk and re-reads the archive, asserting on the
//! package shape rather than the bytes.

use std::io::Read as _;
use std::path::Path;

use deckgen::{ContentFile, Mapper, TemplateSet, Theme, export::write_pptx};

const FULL_DECK: &str = include_str!("data/full_deck.json");

fn part_names(archive: &mut zip::ZipArchive<std::fs::File>) -> Vec<String> {
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

fn read_part(archive: &mut zip::ZipArchive<std::fs::File>, name: &str) -> String {
    let mut part = archive.by_name(name).unwrap();
    let mut out = String::new();
    part.read_to_string(&mut out).unwrap();
    out
}

#[test]
fn deck_is_a_readable_package_with_one_part_per_slide() {
    let file: ContentFile = serde_json::from_str(FULL_DECK).unwrap();
    let doc = file.presentation;
    let templates = TemplateSet::builtin();
    let theme = Theme::default();
    let mapper = Mapper::new(&templates, &theme, Path::new("target").to_path_buf());
    let slides = mapper.map_document(&doc).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("deck.pptx");
    write_pptx(&out, &doc, &slides, &theme).unwrap();

    let mut archive = zip::ZipArchive::new(std::fs::File::open(&out).unwrap()).unwrap();
    let names = part_names(&mut archive);

    for required in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/core.xml",
        "ppt/presentation.xml",
        "ppt/_rels/presentation.xml.rels",
        "ppt/slideMasters/slideMaster1.xml",
        "ppt/slideLayouts/slideLayout1.xml",
        "ppt/theme/theme1.xml",
    ] {
        assert!(names.iter().any(|n| n == required), "missing {required}");
    }
    for i in 1..=doc.slides.len() {
        let slide = format!("ppt/slides/slide{i}.xml");
        let rels = format!("ppt/slides/_rels/slide{i}.xml.rels");
        assert!(names.iter().any(|n| *n == slide), "missing {slide}");
        assert!(names.iter().any(|n| *n == rels), "missing {rels}");
    }

    let slide1 = read_part(&mut archive, "ppt/slides/slide1.xml");
    assert!(slide1.contains("Field Service Platform"));
    assert!(slide1.contains("Rollout Review"));

    let core = read_part(&mut archive, "docProps/core.xml");
    assert!(core.contains("platform team"));
}

#[test]
fn presentation_part_lists_every_slide() {
    let file: ContentFile = serde_json::from_str(FULL_DECK).unwrap();
    let doc = file.presentation;
    let templates = TemplateSet::builtin();
    let theme = Theme::default();
    let mapper = Mapper::new(&templates, &theme, Path::new("target").to_path_buf());
    let slides = mapper.map_document(&doc).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("deck.pptx");
    write_pptx(&out, &doc, &slides, &theme).unwrap();

    let mut archive = zip::ZipArchive::new(std::fs::File::open(&out).unwrap()).unwrap();
    let presentation = read_part(&mut archive, "ppt/presentation.xml");
    assert_eq!(presentation.matches("<p:sldId ").count(), doc.slides.len());

    let rels = read_part(&mut archive, "ppt/_rels/presentation.xml.rels");
    for i in 1..=doc.slides.len() {
        assert!(rels.contains(&format!("slides/slide{i}.xml")));
    }
}

#[test]
fn embedded_image_lands_in_media_and_slide_rels() {
    let dir = tempfile::tempdir().unwrap();
    let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([0, 0, 0, 255]));
    img.save_with_format(dir.path().join("shot.png"), image::ImageFormat::Png)
        .unwrap();

    let raw = r#"{
        "presentation": {
            "title": "Media",
            "slides": [{
                "slide_number": 1,
                "layout_id": 4,
                "custom_elements": [{
                    "type": "screen_gallery",
                    "data": {"screens": [{"image_path": "shot.png", "label": "Shot"}]}
                }]
            }]
        }
    }"#;
    let file: ContentFile = serde_json::from_str(raw).unwrap();
    let doc = file.presentation;
    let templates = TemplateSet::builtin();
    let theme = Theme::default();
    let mapper = Mapper::new(&templates, &theme, dir.path().to_path_buf());
    let slides = mapper.map_document(&doc).unwrap();

    let out = dir.path().join("media.pptx");
    write_pptx(&out, &doc, &slides, &theme).unwrap();

    let mut archive = zip::ZipArchive::new(std::fs::File::open(&out).unwrap()).unwrap();
    let names = part_names(&mut archive);
    assert!(names.iter().any(|n| n == "ppt/media/image1.png"));

    let rels = read_part(&mut archive, "ppt/slides/_rels/slide1.xml.rels");
    assert!(rels.contains("../media/image1.png"));
    let slide = read_part(&mut archive, "ppt/slides/slide1.xml");
    assert!(slide.contains("<p:pic>"));
}
