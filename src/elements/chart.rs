use crate::{
    element::{ComparisonData, ComparisonItem, parse_change_delta},
    geom::{Color, Emu, Rect},
    scene::{PositionedElement, ShapeKind, TextStyle, shape_element, text_element},
    theme::Theme,
};

const ROW_HEIGHT: Emu = Emu(650_000);
const LABEL_W: Emu = Emu(2_000_000);
const BAR_AREA_W: Emu = Emu(5_500_000);
const CHANGE_W: Emu = Emu(1_200_000);
const BAR_H: Emu = Emu(200_000);
const MIN_BAR_W: Emu = Emu(100_000);

/// Headroom so normalized bars never touch the region edge.
const NORMALIZE_HEADROOM: f64 = 1.2;

const AS_IS_FILL: Color = Color::rgb(0xB0, 0xBE, 0xC5);

/// Width of one bar. Percent units map directly onto the bar area; other
/// units are normalized against the larger of the item's two values with a
/// fixed headroom factor.
pub fn bar_width(item: &ComparisonItem, value: f64) -> Emu {
    let fraction = if item.unit == "%" {
        value / 100.0
    } else {
        let max = item.as_is.max(item.to_be).max(1.0);
        value / max / NORMALIZE_HEADROOM
    };
    BAR_AREA_W.scale(fraction).max(MIN_BAR_W)
}

/// Before/after bar pairs with a signed change badge per item. The after-bar
/// color keys off the numeric sign of the parsed change value.
pub fn place_comparison_chart(
    region: Rect,
    theme: &Theme,
    data: &ComparisonData,
) -> Vec<PositionedElement> {
    let mut out = Vec::new();
    for (i, item) in data.items.iter().enumerate() {
        let y = region.y + ROW_HEIGHT * i as i64;
        let bar_x = region.x + LABEL_W + Emu(200_000);
        let delta = parse_change_delta(&item.change);
        let improved = delta > 0.0;

        out.push(text_element(
            Rect::new(region.x, y + Emu(150_000), LABEL_W, Emu(400_000)),
            item.label.clone(),
            TextStyle::new(13.0, true, theme.palette.body_text),
        ));
        out.push(shape_element(
            Rect::new(bar_x, y + Emu(50_000), bar_width(item, item.as_is), BAR_H),
            ShapeKind::RoundedRect,
            Some(AS_IS_FILL),
            None,
        ));
        out.push(shape_element(
            Rect::new(bar_x, y + Emu(300_000), bar_width(item, item.to_be), BAR_H),
            ShapeKind::RoundedRect,
            Some(if improved {
                theme.palette.green
            } else {
                theme.palette.navy
            }),
            None,
        ));

        let badge = format_change_badge(&item.change, delta);
        out.push(text_element(
            Rect::new(
                region.x + LABEL_W + BAR_AREA_W + Emu(400_000),
                y + Emu(150_000),
                CHANGE_W,
                Emu(300_000),
            ),
            badge,
            TextStyle::new(
                12.0,
                true,
                if improved {
                    theme.palette.green
                } else {
                    theme.palette.blue
                },
            )
            .right(),
        ));
    }
    out
}

/// Direction glyph plus the change magnitude, sign stripped.
fn format_change_badge(change: &str, delta: f64) -> String {
    let magnitude = change
        .trim()
        .trim_start_matches(['+', '-'])
        .to_string();
    if delta < 0.0 {
        format!("\u{25BC}{magnitude}")
    } else {
        format!("\u{25B2}{magnitude}")
    }
}
