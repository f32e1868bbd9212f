use crate::{
    element::TimelineData,
    geom::{Emu, Rect},
    scene::{PositionedElement, ShapeKind, TextStyle, shape_element, text_element},
    theme::Theme,
};

/// The strip is a fixed sub-width of the region, centered, and divided into
/// twelve equal week columns.
pub const WEEK_COLUMNS: u32 = 12;
const STRIP_W: Emu = Emu(7_000_000);
const HEADER_H: Emu = Emu(300_000);
const BAR_H: Emu = Emu(350_000);
const BAR_VGAP: Emu = Emu(250_000);
const LABEL_W: Emu = Emu(900_000);

/// Week headers plus one bar per phase. Each phase's column run comes from
/// its `start_week`/`span_weeks` data; spans are clamped to the 12-column
/// grid so a malformed phase cannot draw past the strip.
pub fn place_timeline(region: Rect, theme: &Theme, data: &TimelineData) -> Vec<PositionedElement> {
    if data.phases.is_empty() {
        return Vec::new();
    }

    let strip_x = region.x + (region.w - STRIP_W) / 2;
    let week_w = STRIP_W / WEEK_COLUMNS as i64;

    let mut out = Vec::new();
    for week in 0..WEEK_COLUMNS {
        out.push(text_element(
            Rect::new(strip_x + week_w * week as i64, region.y, week_w, HEADER_H),
            format!("W{}", week + 1),
            TextStyle::new(9.0, false, theme.palette.light_gray).centered(),
        ));
    }

    for (i, phase) in data.phases.iter().enumerate() {
        let y = region.y + HEADER_H + Emu(150_000) + (BAR_H + BAR_VGAP) * i as i64;
        let color = theme.phase_color(i);

        out.push(shape_element(
            Rect::new(strip_x - LABEL_W - Emu(100_000), y, LABEL_W, BAR_H),
            ShapeKind::RoundedRect,
            Some(color),
            None,
        ));
        let label = phase.name.split(" - ").next().unwrap_or_default().to_string();
        out.push(text_element(
            Rect::new(
                strip_x - LABEL_W - Emu(80_000),
                y + Emu(80_000),
                LABEL_W - Emu(40_000),
                Emu(200_000),
            ),
            label,
            TextStyle::new(10.0, true, theme.palette.white).centered(),
        ));

        let (start, span) = clamp_run(phase.start_week, phase.span_weeks);
        out.push(shape_element(
            Rect::new(
                strip_x + week_w * (start - 1) as i64,
                y,
                week_w * span as i64,
                BAR_H,
            ),
            ShapeKind::RoundedRect,
            Some(color),
            None,
        ));
    }
    out
}

/// Clamps a 1-based column run into the grid.
fn clamp_run(start_week: u32, span_weeks: u32) -> (u32, u32) {
    let start = start_week.clamp(1, WEEK_COLUMNS);
    let span = span_weeks.clamp(1, WEEK_COLUMNS - start + 1);
    (start, span)
}
