use crate::{
    element::TableData,
    geom::{Emu, Rect},
    scene::{ElementContent, PositionedElement, TableCell, TableModel},
    theme::Theme,
};

/// Height of one table row; total height is linear in the row count.
const ROW_HEIGHT: Emu = Emu(500_000);

/// Places a table spanning the region width. Row count is `rows + 1` for the
/// header; column count is fixed to the header count. A trailing severity
/// cell with a recognized value is highlighted via `Theme::severity_color`.
pub fn place_table(region: Rect, theme: &Theme, data: &TableData) -> Vec<PositionedElement> {
    if data.headers.is_empty() || data.rows.is_empty() {
        return Vec::new();
    }

    let cols = data.headers.len();
    let col_width = region.w / cols as i64;

    let mut cells = Vec::with_capacity(data.rows.len() + 1);
    cells.push(
        data.headers
            .iter()
            .map(|h| TableCell {
                text: h.clone(),
                font_size_pt: 14.0,
                bold: true,
                color: theme.palette.white,
                fill: Some(theme.palette.navy),
            })
            .collect::<Vec<_>>(),
    );

    for row in &data.rows {
        let mut out = Vec::with_capacity(cols);
        for (col_idx, value) in row.iter().take(cols).enumerate() {
            let severity = if col_idx == row.len() - 1 {
                theme.severity_color(value)
            } else {
                None
            };
            out.push(TableCell {
                text: value.clone(),
                font_size_pt: 13.0,
                bold: severity.is_some(),
                color: severity.unwrap_or(theme.palette.body_text),
                fill: None,
            });
        }
        // Ragged rows pad out to the header width.
        while out.len() < cols {
            out.push(TableCell {
                text: String::new(),
                font_size_pt: 13.0,
                bold: false,
                color: theme.palette.body_text,
                fill: None,
            });
        }
        cells.push(out);
    }

    let height = ROW_HEIGHT * cells.len() as i64;
    vec![PositionedElement {
        frame: Rect::new(region.x, region.y, region.w, height),
        content: ElementContent::Table(TableModel {
            col_widths: vec![col_width; cols],
            row_height: ROW_HEIGHT,
            cells,
        }),
    }]
}
