use crate::{
    element::{IconGridData, PainPointData},
    geom::{Emu, Rect},
    scene::{
        Outline, PositionedElement, ShapeKind, TextStyle, shape_element, text_element,
    },
    theme::Theme,
};

const ICON_BOX_W: Emu = Emu(2_000_000);
const ICON_BOX_H: Emu = Emu(1_800_000);
const ICON_GAP: Emu = Emu(200_000);
const ACCENT_BAR_W: Emu = Emu(50_000);

const CARD_W: Emu = Emu(2_000_000);
const CARD_H: Emu = Emu(2_200_000);
const CARD_GAP: Emu = Emu(150_000);

/// Row-major cell origin inside a tiled grid:
/// `origin + (i % columns, i / columns) * (cell + gap)`.
/// Items past the region simply extend beyond it; there is no reflow.
pub fn grid_cell_origin(
    region: Rect,
    index: usize,
    columns: usize,
    cell_w: Emu,
    cell_h: Emu,
    gap: Emu,
) -> (Emu, Emu) {
    let columns = columns.max(1);
    let col = (index % columns) as i64;
    let row = (index / columns) as i64;
    (
        region.x + (cell_w + gap) * col,
        region.y + (cell_h + gap) * row,
    )
}

/// Tiles icon-box cards into a fixed-size grid: card background, left accent
/// bar cycling through the theme accents, title, and description.
pub fn place_grid(region: Rect, theme: &Theme, data: &IconGridData) -> Vec<PositionedElement> {
    let mut out = Vec::new();
    for (i, item) in data.items.iter().enumerate() {
        let (x, y) = grid_cell_origin(region, i, data.columns, ICON_BOX_W, ICON_BOX_H, ICON_GAP);

        out.push(shape_element(
            Rect::new(x, y, ICON_BOX_W, ICON_BOX_H),
            ShapeKind::Rect,
            Some(theme.palette.white),
            Some(Outline {
                color: theme.card_border,
                width_pt: 1.0,
            }),
        ));
        out.push(shape_element(
            Rect::new(x, y, ACCENT_BAR_W, ICON_BOX_H),
            ShapeKind::Rect,
            Some(theme.grid_accent(i)),
            None,
        ));
        out.push(text_element(
            Rect::new(
                x + Emu(150_000),
                y + Emu(800_000),
                ICON_BOX_W - Emu(200_000),
                Emu(300_000),
            ),
            item.title.clone(),
            TextStyle::new(14.0, true, theme.palette.navy),
        ));
        out.push(text_element(
            Rect::new(
                x + Emu(150_000),
                y + Emu(1_100_000),
                ICON_BOX_W - Emu(200_000),
                Emu(600_000),
            ),
            item.desc.clone(),
            TextStyle::new(11.0, false, theme.palette.gray),
        ));
    }
    out
}

/// Single-row pain-point cards: rounded card, centered role label cycling
/// through role accents, and a tinted pain box with the pain text.
pub fn place_pain_point_cards(
    region: Rect,
    theme: &Theme,
    data: &PainPointData,
) -> Vec<PositionedElement> {
    let mut out = Vec::new();
    for (i, item) in data.items.iter().enumerate() {
        let (x, y) = grid_cell_origin(region, i, data.columns, CARD_W, CARD_H, CARD_GAP);

        out.push(shape_element(
            Rect::new(x, y, CARD_W, CARD_H),
            ShapeKind::RoundedRect,
            Some(crate::geom::Color::rgb(0xF8, 0xF9, 0xFA)),
            Some(Outline {
                color: theme.card_border,
                width_pt: 1.0,
            }),
        ));
        out.push(text_element(
            Rect::new(
                x + Emu(100_000),
                y + Emu(700_000),
                CARD_W - Emu(200_000),
                Emu(300_000),
            ),
            item.role.clone(),
            TextStyle::new(14.0, true, theme.role_accent(i)).centered(),
        ));
        out.push(shape_element(
            Rect::new(
                x + Emu(100_000),
                y + Emu(1_100_000),
                CARD_W - Emu(200_000),
                Emu(900_000),
            ),
            ShapeKind::Rect,
            Some(crate::geom::Color::rgb(0xFF, 0xF5, 0xF5)),
            None,
        ));
        out.push(text_element(
            Rect::new(
                x + Emu(200_000),
                y + Emu(1_200_000),
                CARD_W - Emu(400_000),
                Emu(700_000),
            ),
            item.pain.clone(),
            TextStyle::new(11.0, false, theme.palette.red),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{IconBoxItem, PainPointItem};
    use crate::scene::{Align, ElementContent};

    fn region() -> Rect {
        Rect::new(Emu(270_064), Emu(1_431_130), Emu(9_360_550), Emu(5_000_000))
    }

    #[test]
    fn grid_positions_follow_row_major_formula() {
        let r = region();
        for (i, columns) in [(0usize, 4usize), (3, 4), (4, 4), (7, 4), (5, 3)] {
            let (x, y) = grid_cell_origin(r, i, columns, ICON_BOX_W, ICON_BOX_H, ICON_GAP);
            let col = (i % columns) as i64;
            let row = (i / columns) as i64;
            assert_eq!(x, r.x + (ICON_BOX_W + ICON_GAP) * col);
            assert_eq!(y, r.y + (ICON_BOX_H + ICON_GAP) * row);
        }
    }

    #[test]
    fn grid_is_order_preserving() {
        let theme = Theme::default();
        let data = IconGridData {
            items: (0..5)
                .map(|i| IconBoxItem {
                    title: format!("t{i}"),
                    desc: String::new(),
                })
                .collect(),
            columns: 4,
        };
        let placed = place_grid(region(), &theme, &data);
        // 4 elements per card, emitted in item order.
        assert_eq!(placed.len(), 20);
        let titles: Vec<&str> = placed
            .iter()
            .filter_map(|e| match &e.content {
                ElementContent::Text(t) if t.paragraphs[0].bold => {
                    Some(t.paragraphs[0].text.as_str())
                }
                _ => None,
            })
            .collect();
        assert_eq!(titles, vec!["t0", "t1", "t2", "t3", "t4"]);
    }

    #[test]
    fn fifth_item_wraps_to_second_row() {
        let theme = Theme::default();
        let data = IconGridData {
            items: vec![IconBoxItem::default(); 5],
            columns: 4,
        };
        let placed = place_grid(region(), &theme, &data);
        let card0 = placed[0].frame;
        let card4 = placed[16].frame;
        assert_eq!(card4.x, card0.x);
        assert_eq!(card4.y, card0.y + ICON_BOX_H + ICON_GAP);
    }

    #[test]
    fn pain_cards_stay_on_one_row() {
        let theme = Theme::default();
        let data = PainPointData {
            items: vec![PainPointItem::default(); 4],
            columns: 4,
        };
        let placed = place_pain_point_cards(region(), &theme, &data);
        let ys: Vec<Emu> = placed
            .iter()
            .step_by(4)
            .map(|e| e.frame.y)
            .collect();
        assert!(ys.iter().all(|y| *y == ys[0]));
    }

    #[test]
    fn role_accents_cycle() {
        let theme = Theme::default();
        let data = PainPointData {
            items: vec![PainPointItem::default(); 5],
            columns: 5,
        };
        let placed = place_pain_point_cards(region(), &theme, &data);
        let label_colors: Vec<_> = placed
            .iter()
            .filter_map(|e| match &e.content {
                ElementContent::Text(t) if t.paragraphs[0].align == Align::Center => {
                    Some(t.paragraphs[0].color)
                }
                _ => None,
            })
            .collect();
        assert_eq!(label_colors[0], label_colors[4]);
    }
}
