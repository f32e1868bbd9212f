//! Rasterizes the diagram SVG to a PNG at its intrinsic canvas size.

use std::path::Path;

use tracing::info;

use crate::error::{DeckError, DeckResult};

pub fn render_png(path: &Path, svg_markup: &str) -> DeckResult<()> {
    let mut opts = usvg::Options::default();
    opts.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(svg_markup, &opts)
        .map_err(|e| DeckError::render(format!("parse svg: {e}")))?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    info!(width, height, out = %path.display(), "rasterizing diagram");

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| DeckError::render("failed to allocate pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::default(),
        &mut pixmap.as_mut(),
    );

    let mut data = pixmap.take();
    unpremultiply_in_place(&mut data);
    image::save_buffer_with_format(
        path,
        &data,
        width,
        height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| DeckError::render(format!("write png '{}': {e}", path.display())))
}

/// tiny-skia pixmaps are premultiplied; PNG wants straight alpha.
fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}
