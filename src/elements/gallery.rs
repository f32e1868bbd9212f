use std::path::{Path, PathBuf};

use tracing::warn;

use crate::{
    element::{ArchitectureRef, GalleryData},
    geom::{Emu, Rect},
    scene::{
        ElementContent, Outline, PictureSpec, PositionedElement, ShapeKind, TextStyle,
        shape_element, text_element,
    },
    theme::Theme,
};

const GAP: Emu = Emu(200_000);
const WIDE_MAX_H: Emu = Emu(2_600_000);
const TALL_MAX_H: Emu = Emu(3_000_000);
const WIDE_DEFAULT_W: Emu = Emu(2_800_000);
const TALL_DEFAULT_W: Emu = Emu(1_600_000);

const ARCH_H: Emu = Emu(3_000_000);
const ARCH_DEFAULT_W: Emu = Emu(4_000_000);

struct ScreenSlot {
    path: Option<PathBuf>,
    width: Emu,
    label: String,
    description: String,
}

/// Scales each screen image to the layout's target height preserving aspect
/// ratio and lays the row out left-to-right, centered in the region. A
/// missing or unreadable image becomes a placeholder rectangle of the
/// layout's default width; the run always continues.
pub fn place_image_gallery(
    region: Rect,
    theme: &Theme,
    data: &GalleryData,
    assets_root: &Path,
) -> Vec<PositionedElement> {
    if data.screens.is_empty() {
        return Vec::new();
    }

    let is_wide = data.layout.to_ascii_lowercase().contains("wide");
    let max_h = if is_wide { WIDE_MAX_H } else { TALL_MAX_H };
    let default_w = if is_wide { WIDE_DEFAULT_W } else { TALL_DEFAULT_W };

    let slots: Vec<ScreenSlot> = data
        .screens
        .iter()
        .map(|screen| {
            let resolved = resolve_path(assets_root, &screen.image_path);
            let (path, width) = match probe_dimensions(resolved.as_deref()) {
                Some((w, h)) => {
                    let scale = max_h.0 as f64 / h as f64;
                    (resolved, Emu((w as f64 * scale).round() as i64))
                }
                None => {
                    warn!(
                        image = %screen.image_path,
                        "gallery image missing or unreadable, using placeholder"
                    );
                    (None, default_w)
                }
            };
            ScreenSlot {
                path,
                width,
                label: screen.label.clone(),
                description: screen.description.clone(),
            }
        })
        .collect();

    let total: Emu = slots.iter().fold(Emu::ZERO, |acc, s| acc + s.width)
        + GAP * (slots.len() as i64 - 1);
    let mut x = region.x + (region.w - total) / 2;

    let mut out = Vec::new();
    for slot in &slots {
        let frame = Rect::new(x, region.y, slot.width, max_h);
        match &slot.path {
            Some(path) => out.push(PositionedElement {
                frame,
                content: ElementContent::Picture(PictureSpec {
                    path: path.clone(),
                    border: Some(Outline {
                        color: theme.card_border,
                        width_pt: 1.0,
                    }),
                }),
            }),
            None => out.push(shape_element(
                frame,
                ShapeKind::Rect,
                Some(theme.placeholder_fill),
                Some(Outline {
                    color: theme.card_border,
                    width_pt: 1.0,
                }),
            )),
        }

        out.push(text_element(
            Rect::new(x, region.y + max_h + Emu(80_000), slot.width, Emu(250_000)),
            slot.label.clone(),
            TextStyle::new(12.0, true, theme.palette.navy).centered(),
        ));
        if !slot.description.is_empty() {
            out.push(text_element(
                Rect::new(x, region.y + max_h + Emu(300_000), slot.width, Emu(400_000)),
                slot.description.clone(),
                TextStyle::new(9.0, false, theme.palette.gray).centered(),
            ));
        }

        x = x + slot.width + GAP;
    }
    out
}

/// Embeds a pre-rendered diagram image centered in the region, or a
/// placeholder rectangle when the file is absent.
pub fn place_architecture(
    region: Rect,
    theme: &Theme,
    data: &ArchitectureRef,
    assets_root: &Path,
) -> Vec<PositionedElement> {
    let resolved = resolve_path(assets_root, &data.image_path);
    let probed = resolved
        .as_ref()
        .and_then(|p| probe_dimensions(Some(p)).map(|dims| (p.clone(), dims)));
    match probed {
        Some((path, (w, h))) => {
            let scale = ARCH_H.0 as f64 / h as f64;
            let width = Emu((w as f64 * scale).round() as i64);
            let frame = Rect::new(region.x + (region.w - width) / 2, region.y, width, ARCH_H);
            vec![PositionedElement {
                frame,
                content: ElementContent::Picture(PictureSpec { path, border: None }),
            }]
        }
        None => {
            warn!(
                image = %data.image_path,
                "architecture diagram image missing, using placeholder"
            );
            let frame = Rect::new(
                region.x + (region.w - ARCH_DEFAULT_W) / 2,
                region.y,
                ARCH_DEFAULT_W,
                ARCH_H,
            );
            vec![shape_element(
                frame,
                ShapeKind::Rect,
                Some(theme.placeholder_fill),
                Some(Outline {
                    color: theme.card_border,
                    width_pt: 1.0,
                }),
            )]
        }
    }
}

fn resolve_path(assets_root: &Path, raw: &str) -> Option<PathBuf> {
    if raw.is_empty() {
        return None;
    }
    let p = Path::new(raw);
    Some(if p.is_absolute() {
        p.to_path_buf()
    } else {
        assets_root.join(p)
    })
}

fn probe_dimensions(path: Option<&Path>) -> Option<(u32, u32)> {
    let path = path?;
    image::image_dimensions(path).ok()
}
