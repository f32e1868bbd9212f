//! PPTX serialization: one OOXML package per run, built part by part into a
//! zip container. Slide markup is assembled as strings; the fixed package
//! scaffolding lives in `template`.

mod template;

use std::{fmt::Write as _, fs::File, io::Write as _, path::Path};

use anyhow::Context as _;
use tracing::{info, warn};
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::{
    error::{DeckError, DeckResult},
    export::escape_xml,
    geom::{Color, Emu},
    model::ContentDocument,
    scene::{
        Align, ElementContent, Outline, Paragraph, PictureSpec, PositionedElement, RenderedSlide,
        ShapeKind, ShapeSpec, TableModel, TextBlock,
    },
    theme::{SLIDE_HEIGHT, SLIDE_WIDTH, Theme},
};

/// Writes the whole deck to `path`, overwriting prior contents.
pub fn write_pptx(
    path: &Path,
    doc: &ContentDocument,
    slides: &[RenderedSlide],
    theme: &Theme,
) -> DeckResult<()> {
    info!(slides = slides.len(), out = %path.display(), "writing pptx");

    let media = collect_media(slides);
    let file = File::create(path)
        .with_context(|| format!("create '{}'", path.display()))
        .map_err(|e| DeckError::render(format!("{e:#}")))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut extensions: Vec<String> = media.iter().map(|m| m.extension.clone()).collect();
    extensions.sort();
    extensions.dedup();

    let add = |zip: &mut ZipWriter<File>, name: &str, content: &[u8]| -> DeckResult<()> {
        zip.start_file(name, options)
            .and_then(|()| zip.write_all(content).map_err(Into::into))
            .map_err(|e| DeckError::render(format!("write part '{name}': {e}")))
    };

    add(
        &mut zip,
        "[Content_Types].xml",
        template::content_types(slides.len(), &extensions).as_bytes(),
    )?;
    add(&mut zip, "_rels/.rels", template::root_rels().as_bytes())?;
    add(
        &mut zip,
        "docProps/core.xml",
        template::core_props(&doc.title, &doc.author).as_bytes(),
    )?;
    add(
        &mut zip,
        "ppt/presentation.xml",
        template::presentation_xml(slides.len(), SLIDE_WIDTH.0, SLIDE_HEIGHT.0).as_bytes(),
    )?;
    add(
        &mut zip,
        "ppt/_rels/presentation.xml.rels",
        template::presentation_rels(slides.len()).as_bytes(),
    )?;
    add(
        &mut zip,
        "ppt/slideMasters/slideMaster1.xml",
        template::slide_master_xml().as_bytes(),
    )?;
    add(
        &mut zip,
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        template::slide_master_rels().as_bytes(),
    )?;
    add(
        &mut zip,
        "ppt/slideLayouts/slideLayout1.xml",
        template::slide_layout_xml().as_bytes(),
    )?;
    add(
        &mut zip,
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        template::slide_layout_rels().as_bytes(),
    )?;
    add(
        &mut zip,
        "ppt/theme/theme1.xml",
        template::theme_xml(&theme.font).as_bytes(),
    )?;

    for (idx, slide) in slides.iter().enumerate() {
        let slide_media: Vec<&MediaEntry> =
            media.iter().filter(|m| m.slide_index == idx).collect();
        let xml = slide_xml(slide, theme, &slide_media);
        add(
            &mut zip,
            &format!("ppt/slides/slide{}.xml", idx + 1),
            xml.as_bytes(),
        )?;
        add(
            &mut zip,
            &format!("ppt/slides/_rels/slide{}.xml.rels", idx + 1),
            slide_rels(&slide_media).as_bytes(),
        )?;
    }

    for entry in &media {
        add(
            &mut zip,
            &format!("ppt/media/image{}.{}", entry.media_index, entry.extension),
            &entry.bytes,
        )?;
    }

    zip.finish()
        .map_err(|e| DeckError::render(format!("finalize '{}': {e}", path.display())))?;
    Ok(())
}

/// One embedded image: bytes read once at export time, addressed by a
/// package-wide media index and a slide-local relationship id.
struct MediaEntry {
    slide_index: usize,
    element_index: usize,
    media_index: usize,
    rel_id: String,
    extension: String,
    bytes: Vec<u8>,
}

fn collect_media(slides: &[RenderedSlide]) -> Vec<MediaEntry> {
    let mut media = Vec::new();
    let mut media_index = 0usize;
    for (slide_index, slide) in slides.iter().enumerate() {
        // rId1 is the layout; images follow
        let mut rel = 2usize;
        for (element_index, el) in slide.elements.iter().enumerate() {
            let ElementContent::Picture(pic) = &el.content else {
                continue;
            };
            match std::fs::read(&pic.path) {
                Ok(bytes) => {
                    media_index += 1;
                    media.push(MediaEntry {
                        slide_index,
                        element_index,
                        media_index,
                        rel_id: format!("rId{rel}"),
                        extension: image_extension(&pic.path),
                        bytes,
                    });
                    rel += 1;
                }
                Err(e) => {
                    warn!(image = %pic.path.display(), error = %e, "unreadable image dropped from deck")
                }
            }
        }
    }
    media
}

fn image_extension(path: &Path) -> String {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "jpeg".to_string(),
        Some("gif") => "gif".to_string(),
        _ => "png".to_string(),
    }
}

fn slide_rels(media: &[&MediaEntry]) -> String {
    let mut xml = String::new();
    xml.push_str(template::XML_DECL);
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    let _ = write!(
        xml,
        r#"<Relationship Id="rId1" Type="{}" Target="../slideLayouts/slideLayout1.xml"/>"#,
        template::REL_SLIDE_LAYOUT
    );
    for entry in media {
        let _ = write!(
            xml,
            r#"<Relationship Id="{}" Type="{}" Target="../media/image{}.{}"/>"#,
            entry.rel_id,
            template::REL_IMAGE,
            entry.media_index,
            entry.extension
        );
    }
    xml.push_str("</Relationships>");
    xml
}

fn slide_xml(slide: &RenderedSlide, theme: &Theme, media: &[&MediaEntry]) -> String {
    let mut xml = String::new();
    xml.push_str(template::XML_DECL);
    xml.push_str(
        r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
    );
    xml.push_str("<p:cSld><p:spTree>");
    xml.push_str(
        "<p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>",
    );

    let mut shape_id = 2u32;
    for (element_index, el) in slide.elements.iter().enumerate() {
        match &el.content {
            ElementContent::Text(block) => write_text_shape(&mut xml, shape_id, el, block, theme),
            ElementContent::Shape(shape) => write_auto_shape(&mut xml, shape_id, el, shape),
            ElementContent::Table(table) => write_table_frame(&mut xml, shape_id, el, table, theme),
            ElementContent::Picture(pic) => {
                let Some(entry) = media.iter().find(|m| m.element_index == element_index) else {
                    continue;
                };
                write_picture(&mut xml, shape_id, el, pic, &entry.rel_id);
            }
        }
        shape_id += 1;
    }

    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sld>");
    xml
}

fn write_xfrm(xml: &mut String, el: &PositionedElement) {
    let f = el.frame;
    let _ = write!(
        xml,
        r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
        f.x.0, f.y.0, f.w.0, f.h.0
    );
}

fn write_solid_fill(xml: &mut String, color: Color) {
    let _ = write!(
        xml,
        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
        color.hex()
    );
}

fn write_outline(xml: &mut String, line: &Outline) {
    let width = Emu::from_pt(f64::from(line.width_pt)).0;
    let _ = write!(xml, r#"<a:ln w="{width}">"#);
    write_solid_fill(xml, line.color);
    xml.push_str("</a:ln>");
}

fn write_run(xml: &mut String, text: &str, p: &Paragraph, theme: &Theme) {
    xml.push_str("<a:r>");
    let sz = (p.font_size_pt * 100.0).round() as u32;
    let _ = write!(xml, r#"<a:rPr lang="en-US" sz="{sz}" dirty="0""#);
    if p.bold {
        xml.push_str(r#" b="1""#);
    }
    xml.push('>');
    write_solid_fill(xml, p.color);
    let _ = write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(&theme.font));
    xml.push_str("</a:rPr>");
    let _ = write!(xml, "<a:t>{}</a:t>", escape_xml(text));
    xml.push_str("</a:r>");
}

fn write_paragraph(xml: &mut String, p: &Paragraph, theme: &Theme) {
    // a literal backslash-n inside one box means a line break
    let text = p.text.replace("\\n", "\n");
    for line in text.split('\n') {
        xml.push_str("<a:p><a:pPr");
        if p.level > 0 {
            let _ = write!(xml, r#" lvl="{}""#, p.level);
        }
        match p.align {
            Align::Left => {}
            Align::Center => xml.push_str(r#" algn="ctr""#),
            Align::Right => xml.push_str(r#" algn="r""#),
        }
        xml.push_str("/>");
        write_run(xml, line, p, theme);
        xml.push_str("</a:p>");
    }
}

fn write_text_shape(
    xml: &mut String,
    shape_id: u32,
    el: &PositionedElement,
    block: &TextBlock,
    theme: &Theme,
) {
    xml.push_str("<p:sp><p:nvSpPr>");
    let _ = write!(xml, r#"<p:cNvPr id="{shape_id}" name="TextBox {shape_id}"/>"#);
    xml.push_str(r#"<p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>"#);
    xml.push_str("<p:spPr>");
    write_xfrm(xml, el);
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/>"#);
    xml.push_str("</p:spPr>");
    let wrap = if block.word_wrap { "square" } else { "none" };
    let _ = write!(xml, r#"<p:txBody><a:bodyPr wrap="{wrap}" rtlCol="0"/><a:lstStyle/>"#);
    for p in &block.paragraphs {
        write_paragraph(xml, p, theme);
    }
    xml.push_str("</p:txBody></p:sp>");
}

fn preset(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Rect => "rect",
        ShapeKind::RoundedRect => "roundRect",
        ShapeKind::Oval => "ellipse",
        ShapeKind::RightArrow => "rightArrow",
    }
}

fn write_auto_shape(xml: &mut String, shape_id: u32, el: &PositionedElement, shape: &ShapeSpec) {
    xml.push_str("<p:sp><p:nvSpPr>");
    let _ = write!(xml, r#"<p:cNvPr id="{shape_id}" name="Shape {shape_id}"/>"#);
    xml.push_str("<p:cNvSpPr/><p:nvPr/></p:nvSpPr>");
    xml.push_str("<p:spPr>");
    write_xfrm(xml, el);
    let _ = write!(
        xml,
        r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
        preset(shape.kind)
    );
    match shape.fill {
        Some(color) => write_solid_fill(xml, color),
        None => xml.push_str("<a:noFill/>"),
    }
    match &shape.line {
        Some(line) => write_outline(xml, line),
        None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
    }
    xml.push_str("</p:spPr>");
    xml.push_str(r#"<p:txBody><a:bodyPr/><a:lstStyle/><a:p/></p:txBody>"#);
    xml.push_str("</p:sp>");
}

fn write_table_frame(
    xml: &mut String,
    shape_id: u32,
    el: &PositionedElement,
    table: &TableModel,
    theme: &Theme,
) {
    xml.push_str("<p:graphicFrame><p:nvGraphicFramePr>");
    let _ = write!(xml, r#"<p:cNvPr id="{shape_id}" name="Table {shape_id}"/>"#);
    xml.push_str("<p:cNvGraphicFramePr/><p:nvPr/></p:nvGraphicFramePr>");
    let f = el.frame;
    let _ = write!(
        xml,
        r#"<p:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></p:xfrm>"#,
        f.x.0, f.y.0, f.w.0, f.h.0
    );
    xml.push_str(
        r#"<a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table">"#,
    );
    xml.push_str(r#"<a:tbl><a:tblPr firstRow="1" bandRow="1"/>"#);
    xml.push_str("<a:tblGrid>");
    for w in &table.col_widths {
        let _ = write!(xml, r#"<a:gridCol w="{}"/>"#, w.0);
    }
    xml.push_str("</a:tblGrid>");
    for row in &table.cells {
        let _ = write!(xml, r#"<a:tr h="{}">"#, table.row_height.0);
        for cell in row {
            xml.push_str("<a:tc><a:txBody><a:bodyPr/><a:lstStyle/><a:p>");
            xml.push_str("<a:r>");
            let sz = (cell.font_size_pt * 100.0).round() as u32;
            let _ = write!(xml, r#"<a:rPr lang="en-US" sz="{sz}" dirty="0""#);
            if cell.bold {
                xml.push_str(r#" b="1""#);
            }
            xml.push('>');
            write_solid_fill(xml, cell.color);
            let _ = write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(&theme.font));
            xml.push_str("</a:rPr>");
            let _ = write!(xml, "<a:t>{}</a:t>", escape_xml(&cell.text));
            xml.push_str("</a:r></a:p></a:txBody>");
            xml.push_str("<a:tcPr>");
            if let Some(fill) = cell.fill {
                write_solid_fill(xml, fill);
            }
            xml.push_str("</a:tcPr></a:tc>");
        }
        xml.push_str("</a:tr>");
    }
    xml.push_str("</a:tbl></a:graphicData></a:graphic></p:graphicFrame>");
}

fn write_picture(
    xml: &mut String,
    shape_id: u32,
    el: &PositionedElement,
    pic: &PictureSpec,
    rel_id: &str,
) {
    let name = pic
        .path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image");
    xml.push_str("<p:pic><p:nvPicPr>");
    let _ = write!(
        xml,
        r#"<p:cNvPr id="{shape_id}" name="Picture {shape_id}" descr="{}"/>"#,
        escape_xml(name)
    );
    xml.push_str("<p:cNvPicPr/><p:nvPr/></p:nvPicPr>");
    let _ = write!(
        xml,
        r#"<p:blipFill><a:blip r:embed="{rel_id}"/><a:stretch><a:fillRect/></a:stretch></p:blipFill>"#
    );
    xml.push_str("<p:spPr>");
    write_xfrm(xml, el);
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    if let Some(line) = &pic.border {
        write_outline(xml, line);
    }
    xml.push_str("</p:spPr></p:pic>");
}
