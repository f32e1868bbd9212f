//! Output serializers. Each exporter consumes mapper output (or the content
//! document directly) and writes one artifact, overwriting prior contents.

pub mod html;
pub mod png;
pub mod pptx;

pub use html::write_html;
pub use png::render_png;
pub use pptx::write_pptx;

/// Escapes the five XML special characters. Shared by the PPTX part writers
/// and the HTML body builders.
pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
