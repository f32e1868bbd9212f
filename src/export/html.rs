//! Self-contained HTML slideshow. Slide bodies are assembled from the
//! content document here and injected into the page template pre-rendered;
//! the template owns the chrome (styles, navigation, keyboard handling).

use std::{fmt::Write as _, path::Path};

use anyhow::Context as _;
use askama::Template;
use tracing::{info, warn};

use crate::{
    element::{Element, parse_element},
    error::{DeckError, DeckResult},
    export::escape_xml as escape,
    model::{ContentDocument, SlideSpec},
};

#[derive(Template)]
#[template(path = "deck.html")]
struct DeckTemplate<'a> {
    title: &'a str,
    slides: Vec<SlideSection>,
}

/// One `.slide` div: extra CSS classes plus the pre-escaped inner markup.
struct SlideSection {
    index: usize,
    classes: &'static str,
    body: String,
}

pub fn write_html(path: &Path, doc: &ContentDocument) -> DeckResult<()> {
    info!(slides = doc.slides.len(), out = %path.display(), "writing html");
    let slides = doc
        .slides
        .iter()
        .enumerate()
        .map(|(i, spec)| slide_section(i, spec))
        .collect();
    let page = DeckTemplate {
        title: &doc.title,
        slides,
    }
    .render()
    .map_err(|e| DeckError::render(format!("render page: {e}")))?;
    std::fs::write(path, page)
        .with_context(|| format!("write '{}'", path.display()))
        .map_err(|e| DeckError::render(format!("{e:#}")))
}

fn slide_section(index: usize, spec: &SlideSpec) -> SlideSection {
    if spec.layout_id == 1 {
        SlideSection {
            index: index + 1,
            classes: " slide-title",
            body: cover_body(spec),
        }
    } else {
        SlideSection {
            index: index + 1,
            classes: "",
            body: content_body(index + 1, spec),
        }
    }
}

fn cover_body(spec: &SlideSpec) -> String {
    let title = spec.placeholders.title.as_deref().unwrap_or_default();
    let subtitle = spec.placeholders.subtitle.as_deref().unwrap_or_default();
    format!(
        "<div class='cover'><h1>{}</h1><p class='subtitle'>{}</p></div>",
        escape(title),
        escape(subtitle)
    )
}

fn content_body(number: usize, spec: &SlideSpec) -> String {
    let ph = &spec.placeholders;
    let mut html = String::new();

    html.push_str("<div class='slide-header'>");
    if let Some(t) = &ph.main_title {
        let _ = write!(html, "<h2>{}</h2>", escape(t));
    }
    if let Some(t) = &ph.action_title {
        let _ = write!(html, "<div class='action-title'>{}</div>", escape(t));
    }
    html.push_str("</div><div class='slide-content'>");

    if !ph.body.is_empty() {
        html.push_str("<ul class='body-list'>");
        for line in &ph.body {
            let indent = line.level.saturating_sub(1) * 2;
            let _ = write!(
                html,
                "<li style='margin-left:{indent}rem'><span class='bullet'>&#8594;</span>{}</li>",
                escape(&line.text)
            );
        }
        html.push_str("</ul>");
    }

    if !ph.toc_items.is_empty() {
        html.push_str("<div class='toc'>");
        for item in &ph.toc_items {
            let _ = write!(
                html,
                "<div class='toc-row'><span><b class='toc-number'>{}</b> \
                 <span class='toc-title'>{}</span></span>\
                 <span class='toc-pages'>{}</span></div>",
                escape(&item.number),
                escape(&item.title),
                escape(&item.pages)
            );
        }
        html.push_str("</div>");
    }

    for raw in &spec.custom_elements {
        match parse_element(raw) {
            Ok(Some(el)) => append_element(&mut html, &el),
            Ok(None) => warn!(slide = number, kind = %raw.kind, "unknown element type, skipping"),
            Err(e) => warn!(slide = number, kind = %raw.kind, error = %e, "skipping malformed element"),
        }
    }

    html.push_str("</div>");
    html
}

/// The page renders the element kinds the slideshow carries; sized
/// EMU-geometry kinds (charts, timelines, galleries) are deck-only.
fn append_element(html: &mut String, element: &Element) {
    match element {
        Element::Table(data) => {
            html.push_str("<table class='custom-table'><thead><tr>");
            for h in &data.headers {
                let _ = write!(html, "<th>{}</th>", escape(h));
            }
            html.push_str("</tr></thead><tbody>");
            for row in &data.rows {
                html.push_str("<tr>");
                for cell in row {
                    let _ = write!(html, "<td>{}</td>", escape(cell));
                }
                html.push_str("</tr>");
            }
            html.push_str("</tbody></table>");
        }
        Element::IconBoxGrid(data) => {
            let _ = write!(
                html,
                "<div class='card-grid' style='grid-template-columns:repeat({}, 1fr)'>",
                data.columns.max(1)
            );
            for item in &data.items {
                let _ = write!(
                    html,
                    "<div class='card'><h3>{}</h3><p>{}</p></div>",
                    escape(&item.title),
                    escape(&item.desc)
                );
            }
            html.push_str("</div>");
        }
        Element::ProcessFlow(data) => {
            html.push_str("<div class='flow'>");
            for (i, step) in data.steps.iter().enumerate() {
                let _ = write!(
                    html,
                    "<div class='flow-step'><div class='flow-node'>{}</div>\
                     <div class='flow-name'>{}</div><div class='flow-actor'>{}</div></div>",
                    i + 1,
                    escape(&step.name),
                    escape(&step.actor)
                );
                if i + 1 < data.steps.len() {
                    html.push_str("<div class='flow-bar'></div>");
                }
            }
            html.push_str("</div>");
        }
        Element::ArchitectureDiagram(data) => {
            let src = if data.image_path.is_empty() {
                "system_architecture.png"
            } else {
                &data.image_path
            };
            let _ = write!(
                html,
                "<div class='diagram'><img src='{}' alt='system architecture'></div>",
                escape(src)
            );
        }
        _ => {}
    }
}
