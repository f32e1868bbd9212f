//! Static and parameterized XML for the fixed parts of the package: the
//! minimal slide master, layout, and theme every deck shares, plus the
//! presentation-level parts that vary only in slide count.

use std::fmt::Write as _;

use crate::export::escape_xml;

pub const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_REL: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const REL_OFFICE_DOC: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE_PROPS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
pub const REL_SLIDE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
pub const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
pub const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
pub const REL_THEME: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
pub const REL_IMAGE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

/// Empty shape tree shared by the master and layout parts.
const EMPTY_SP_TREE: &str = "<p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/>\
<p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/></p:spTree></p:cSld>";

pub fn content_types(slide_count: usize, image_extensions: &[String]) -> String {
    let mut xml = String::new();
    xml.push_str(XML_DECL);
    xml.push_str(
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    );
    xml.push_str(
        r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    );
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    for ext in image_extensions {
        let mime = match ext.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            _ => "image/png",
        };
        let _ = write!(xml, r#"<Default Extension="{ext}" ContentType="{mime}"/>"#);
    }
    xml.push_str(
        r#"<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>"#,
    );
    xml.push_str(
        r#"<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>"#,
    );
    xml.push_str(
        r#"<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>"#,
    );
    xml.push_str(
        r#"<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>"#,
    );
    for i in 1..=slide_count {
        let _ = write!(
            xml,
            r#"<Override PartName="/ppt/slides/slide{i}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#
        );
    }
    xml.push_str(
        r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#,
    );
    xml.push_str("</Types>");
    xml
}

pub fn root_rels() -> String {
    format!(
        "{XML_DECL}<Relationships xmlns=\"{NS_REL}\">\
<Relationship Id=\"rId1\" Type=\"{REL_OFFICE_DOC}\" Target=\"ppt/presentation.xml\"/>\
<Relationship Id=\"rId2\" Type=\"{REL_CORE_PROPS}\" Target=\"docProps/core.xml\"/>\
</Relationships>"
    )
}

pub fn core_props(title: &str, author: &str) -> String {
    format!(
        "{XML_DECL}<cp:coreProperties \
xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
xmlns:dc=\"http://purl.org/dc/elements/1.1/\">\
<dc:title>{}</dc:title><dc:creator>{}</dc:creator></cp:coreProperties>",
        escape_xml(title),
        escape_xml(author)
    )
}

pub fn presentation_xml(slide_count: usize, width_emu: i64, height_emu: i64) -> String {
    let mut xml = String::new();
    xml.push_str(XML_DECL);
    let _ = write!(
        xml,
        r#"<p:presentation xmlns:p="{NS_P}" xmlns:a="{NS_A}" xmlns:r="{NS_R}">"#
    );
    xml.push_str(
        r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#,
    );
    xml.push_str("<p:sldIdLst>");
    for i in 0..slide_count {
        let _ = write!(
            xml,
            r#"<p:sldId id="{}" r:id="rId{}"/>"#,
            256 + i,
            i + 2
        );
    }
    xml.push_str("</p:sldIdLst>");
    let _ = write!(xml, r#"<p:sldSz cx="{width_emu}" cy="{height_emu}"/>"#);
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");
    xml
}

pub fn presentation_rels(slide_count: usize) -> String {
    let mut xml = String::new();
    xml.push_str(XML_DECL);
    let _ = write!(xml, r#"<Relationships xmlns="{NS_REL}">"#);
    let _ = write!(
        xml,
        r#"<Relationship Id="rId1" Type="{REL_SLIDE_MASTER}" Target="slideMasters/slideMaster1.xml"/>"#
    );
    for i in 0..slide_count {
        let _ = write!(
            xml,
            r#"<Relationship Id="rId{}" Type="{REL_SLIDE}" Target="slides/slide{}.xml"/>"#,
            i + 2,
            i + 1
        );
    }
    xml.push_str("</Relationships>");
    xml
}

pub fn slide_master_xml() -> String {
    format!(
        "{XML_DECL}<p:sldMaster xmlns:p=\"{NS_P}\" xmlns:a=\"{NS_A}\" xmlns:r=\"{NS_R}\">\
{EMPTY_SP_TREE}\
<p:clrMap bg1=\"lt1\" tx1=\"dk1\" bg2=\"lt2\" tx2=\"dk2\" accent1=\"accent1\" \
accent2=\"accent2\" accent3=\"accent3\" accent4=\"accent4\" accent5=\"accent5\" \
accent6=\"accent6\" hlink=\"hlink\" folHlink=\"folHlink\"/>\
<p:sldLayoutIdLst><p:sldLayoutId id=\"2147483649\" r:id=\"rId1\"/></p:sldLayoutIdLst>\
</p:sldMaster>"
    )
}

pub fn slide_master_rels() -> String {
    format!(
        "{XML_DECL}<Relationships xmlns=\"{NS_REL}\">\
<Relationship Id=\"rId1\" Type=\"{REL_SLIDE_LAYOUT}\" Target=\"../slideLayouts/slideLayout1.xml\"/>\
<Relationship Id=\"rId2\" Type=\"{REL_THEME}\" Target=\"../theme/theme1.xml\"/>\
</Relationships>"
    )
}

pub fn slide_layout_xml() -> String {
    format!(
        "{XML_DECL}<p:sldLayout xmlns:p=\"{NS_P}\" xmlns:a=\"{NS_A}\" xmlns:r=\"{NS_R}\" \
type=\"blank\" preserve=\"1\">\
{EMPTY_SP_TREE}\
<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>\
</p:sldLayout>"
    )
}

pub fn slide_layout_rels() -> String {
    format!(
        "{XML_DECL}<Relationships xmlns=\"{NS_REL}\">\
<Relationship Id=\"rId1\" Type=\"{REL_SLIDE_MASTER}\" Target=\"../slideMasters/slideMaster1.xml\"/>\
</Relationships>"
    )
}

/// Minimal office theme carrying the deck's typeface. The format scheme is
/// the smallest structure the schema accepts (three entries per style list).
pub fn theme_xml(font: &str) -> String {
    let font = escape_xml(font);
    let solid = "<a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>";
    let line = |w: u32| {
        format!(
            "<a:ln w=\"{w}\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln>"
        )
    };
    format!(
        "{XML_DECL}<a:theme xmlns:a=\"{NS_A}\" name=\"Deck Theme\"><a:themeElements>\
<a:clrScheme name=\"Deck\">\
<a:dk1><a:sysClr val=\"windowText\" lastClr=\"000000\"/></a:dk1>\
<a:lt1><a:sysClr val=\"window\" lastClr=\"FFFFFF\"/></a:lt1>\
<a:dk2><a:srgbClr val=\"002452\"/></a:dk2>\
<a:lt2><a:srgbClr val=\"E7E6E6\"/></a:lt2>\
<a:accent1><a:srgbClr val=\"002452\"/></a:accent1>\
<a:accent2><a:srgbClr val=\"C51F2A\"/></a:accent2>\
<a:accent3><a:srgbClr val=\"2E7D32\"/></a:accent3>\
<a:accent4><a:srgbClr val=\"F57C00\"/></a:accent4>\
<a:accent5><a:srgbClr val=\"1976D2\"/></a:accent5>\
<a:accent6><a:srgbClr val=\"7B1FA2\"/></a:accent6>\
<a:hlink><a:srgbClr val=\"0563C1\"/></a:hlink>\
<a:folHlink><a:srgbClr val=\"954F72\"/></a:folHlink>\
</a:clrScheme>\
<a:fontScheme name=\"Deck\">\
<a:majorFont><a:latin typeface=\"{font}\"/><a:ea typeface=\"\"/><a:cs typeface=\"\"/></a:majorFont>\
<a:minorFont><a:latin typeface=\"{font}\"/><a:ea typeface=\"\"/><a:cs typeface=\"\"/></a:minorFont>\
</a:fontScheme>\
<a:fmtScheme name=\"Deck\">\
<a:fillStyleLst>{solid}{solid}{solid}</a:fillStyleLst>\
<a:lnStyleLst>{}{}{}</a:lnStyleLst>\
<a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle>\
<a:effectStyle><a:effectLst/></a:effectStyle>\
<a:effectStyle><a:effectLst/></a:effectStyle></a:effectStyleLst>\
<a:bgFillStyleLst>{solid}{solid}{solid}</a:bgFillStyleLst>\
</a:fmtScheme>\
</a:themeElements></a:theme>",
        line(6350),
        line(12700),
        line(19050),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_types_covers_every_slide() {
        let xml = content_types(3, &["png".to_string()]);
        assert!(xml.contains("/ppt/slides/slide1.xml"));
        assert!(xml.contains("/ppt/slides/slide3.xml"));
        assert!(!xml.contains("/ppt/slides/slide4.xml"));
        assert!(xml.contains(r#"Extension="png""#));
    }

    #[test]
    fn presentation_lists_slides_in_order() {
        let xml = presentation_xml(2, 12_192_000, 6_858_000);
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"cx="12192000""#));
    }

    #[test]
    fn core_props_escape_metadata() {
        let xml = core_props("A & B", "team");
        assert!(xml.contains("A &amp; B"));
    }

    #[test]
    fn theme_embeds_the_typeface() {
        let xml = theme_xml("Malgun Gothic");
        assert!(xml.contains(r#"typeface="Malgun Gothic""#));
    }
}
