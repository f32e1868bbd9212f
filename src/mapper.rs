use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::{
    element::{Element, parse_element},
    elements,
    error::DeckResult,
    layout::{SlotRole, TemplateSet},
    model::{ContentDocument, Placeholders, SlideSpec},
    scene::{
        Align, ElementContent, Paragraph, PositionedElement, RenderedSlide, TextBlock, TextStyle,
        text_element,
    },
    theme::Theme,
};

/// Maps a parsed content document onto layout templates, producing one
/// `RenderedSlide` per slide spec. The mapper owns no document state; it
/// borrows the template set and theme and is reusable across documents.
pub struct Mapper<'a> {
    templates: &'a TemplateSet,
    theme: &'a Theme,
    /// Directory that relative image paths in the document resolve against.
    assets_root: PathBuf,
}

impl<'a> Mapper<'a> {
    pub fn new(templates: &'a TemplateSet, theme: &'a Theme, assets_root: PathBuf) -> Self {
        Mapper {
            templates,
            theme,
            assets_root,
        }
    }

    /// Slides come out in document order, one per spec, always. Recoverable
    /// element problems degrade to a skipped block on an otherwise complete
    /// slide; only configuration-level failures abort the run.
    pub fn map_document(&self, doc: &ContentDocument) -> DeckResult<Vec<RenderedSlide>> {
        info!(slides = doc.slides.len(), title = %doc.title, "mapping document");
        doc.slides
            .iter()
            .enumerate()
            .map(|(i, spec)| self.map_slide(i as u32 + 1, spec))
            .collect()
    }

    fn map_slide(&self, number: u32, spec: &SlideSpec) -> DeckResult<RenderedSlide> {
        let template = self.templates.resolve(spec.layout_id)?;
        debug!(slide = number, layout = ?template.id, "mapping slide");

        let mut out = Vec::new();
        let ph = &spec.placeholders;
        let theme = self.theme;

        self.place_text(
            &mut out,
            template,
            SlotRole::Title,
            ph.title.as_deref(),
            TextStyle::new(32.0, true, theme.palette.navy),
        );
        self.place_text(
            &mut out,
            template,
            SlotRole::Subtitle,
            ph.subtitle.as_deref(),
            TextStyle::new(14.0, false, theme.palette.gray),
        );
        self.place_text(
            &mut out,
            template,
            SlotRole::MainTitle,
            ph.main_title.as_deref(),
            TextStyle::new(19.0, true, theme.palette.navy),
        );
        self.place_text(
            &mut out,
            template,
            SlotRole::ActionTitle,
            ph.action_title.as_deref(),
            TextStyle::new(17.0, false, theme.palette.gray),
        );

        self.place_toc(&mut out, template, ph);
        self.place_body(&mut out, template, ph);

        if !spec.custom_elements.is_empty() {
            match template.slot(SlotRole::Content) {
                Some(region) => {
                    for raw in &spec.custom_elements {
                        match parse_element(raw) {
                            Ok(Some(el)) => out.extend(self.place_element(region, &el)),
                            Ok(None) => {
                                warn!(slide = number, kind = %raw.kind, "unknown element type, skipping")
                            }
                            Err(e) => {
                                warn!(slide = number, kind = %raw.kind, error = %e, "skipping malformed element")
                            }
                        }
                    }
                }
                None => warn!(
                    slide = number,
                    layout = %template.name,
                    "layout has no content region, dropping custom elements"
                ),
            }
        }

        Ok(RenderedSlide {
            number,
            layout: template.id,
            elements: out,
        })
    }

    fn place_element(
        &self,
        region: crate::geom::Rect,
        element: &Element,
    ) -> Vec<PositionedElement> {
        let theme = self.theme;
        match element {
            Element::Table(data) => elements::place_table(region, theme, data),
            Element::IconBoxGrid(data) => elements::place_grid(region, theme, data),
            Element::PainPointCards(data) => elements::place_pain_point_cards(region, theme, data),
            Element::ProcessFlow(data) => elements::place_process_flow(region, theme, data),
            Element::ComparisonChart(data) => elements::place_comparison_chart(region, theme, data),
            Element::Timeline(data) => elements::place_timeline(region, theme, data),
            Element::ScreenGallery(data) => {
                elements::place_image_gallery(region, theme, data, &self.assets_root)
            }
            Element::ArchitectureDiagram(data) => {
                elements::place_architecture(region, theme, data, &self.assets_root)
            }
        }
    }

    /// Text only lands where the layout has a slot for it; content aimed at a
    /// slot the layout lacks is dropped silently (the document may be shared
    /// across layouts).
    fn place_text(
        &self,
        out: &mut Vec<PositionedElement>,
        template: &crate::layout::LayoutTemplate,
        role: SlotRole,
        text: Option<&str>,
        style: TextStyle,
    ) {
        let Some(text) = text else { return };
        match template.slot(role) {
            Some(frame) => out.push(text_element(frame, text, style)),
            None => debug!(?role, layout = %template.name, "no slot for populated placeholder"),
        }
    }

    fn place_toc(
        &self,
        out: &mut Vec<PositionedElement>,
        template: &crate::layout::LayoutTemplate,
        ph: &Placeholders,
    ) {
        if ph.toc_items.is_empty() {
            return;
        }
        let columns = [
            (SlotRole::TocNumber, Align::Right, true),
            (SlotRole::TocTitle, Align::Left, false),
            (SlotRole::TocPages, Align::Left, false),
        ];
        for (role, align, bold) in columns {
            let Some(frame) = template.slot(role) else {
                continue;
            };
            let color = match role {
                SlotRole::TocNumber => self.theme.palette.navy,
                SlotRole::TocPages => self.theme.palette.light_gray,
                _ => self.theme.palette.body_text,
            };
            let paragraphs = ph
                .toc_items
                .iter()
                .map(|item| {
                    let text = match role {
                        SlotRole::TocNumber => item.number.clone(),
                        SlotRole::TocTitle => item.title.clone(),
                        _ => item.pages.clone(),
                    };
                    Paragraph {
                        text,
                        font_size_pt: 16.0,
                        bold,
                        color,
                        align,
                        level: 0,
                    }
                })
                .collect();
            out.push(PositionedElement {
                frame,
                content: ElementContent::Text(TextBlock {
                    paragraphs,
                    word_wrap: true,
                }),
            });
        }
    }

    fn place_body(
        &self,
        out: &mut Vec<PositionedElement>,
        template: &crate::layout::LayoutTemplate,
        ph: &Placeholders,
    ) {
        if ph.body.is_empty() {
            return;
        }
        let Some(frame) = template.slot(SlotRole::Body) else {
            debug!(layout = %template.name, "body lines with no body slot");
            return;
        };
        let paragraphs = ph
            .body
            .iter()
            .map(|line| Paragraph {
                text: line.text.clone(),
                font_size_pt: 16.0,
                bold: false,
                color: self.theme.palette.body_text,
                align: Align::Left,
                // document levels are 1-based
                level: line.level.saturating_sub(1).min(8) as u8,
            })
            .collect();
        out.push(PositionedElement {
            frame,
            content: ElementContent::Text(TextBlock {
                paragraphs,
                word_wrap: true,
            }),
        });
    }
}
