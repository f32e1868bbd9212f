use crate::{
    element::ProcessFlowData,
    geom::{Color, Emu, Rect},
    scene::{
        ElementContent, PositionedElement, ShapeKind, ShapeSpec, TextStyle, shape_element,
        text_element,
    },
    theme::Theme,
};

const NODE_SIZE: Emu = Emu(900_000);
const NODE_GAP: Emu = Emu(300_000);
const ARROW_W: Emu = Emu(400_000);
const ARROW_H: Emu = Emu(200_000);

/// Lays out `n` steps as evenly spaced circular nodes centered within the
/// region, with exactly `n - 1` connecting arrows between consecutive nodes.
pub fn place_process_flow(
    region: Rect,
    theme: &Theme,
    data: &ProcessFlowData,
) -> Vec<PositionedElement> {
    let n = data.steps.len() as i64;
    if n == 0 {
        return Vec::new();
    }

    let total_width = NODE_SIZE * n + (NODE_GAP + ARROW_W) * (n - 1);
    let start_x = region.x + (region.w - total_width) / 2;
    let y = region.y + Emu(300_000);

    let mut out = Vec::new();
    for (i, step) in data.steps.iter().enumerate() {
        let x = start_x + (NODE_SIZE + NODE_GAP + ARROW_W) * i as i64;
        let tone = theme.flow_tone(&step.tone);

        out.push(shape_element(
            Rect::new(x, y, NODE_SIZE, NODE_SIZE),
            ShapeKind::Oval,
            Some(tone),
            None,
        ));
        out.push(text_element(
            Rect::new(x, y + Emu(300_000), NODE_SIZE, Emu(400_000)),
            step.code.clone(),
            TextStyle::new(18.0, true, theme.palette.white).centered(),
        ));
        out.push(text_element(
            Rect::new(
                x - Emu(200_000),
                y + NODE_SIZE + Emu(100_000),
                NODE_SIZE + Emu(400_000),
                Emu(300_000),
            ),
            step.name.clone(),
            TextStyle::new(12.0, true, tone).centered(),
        ));
        out.push(text_element(
            Rect::new(
                x - Emu(200_000),
                y + NODE_SIZE + Emu(350_000),
                NODE_SIZE + Emu(400_000),
                Emu(250_000),
            ),
            step.actor.clone(),
            TextStyle::new(10.0, false, theme.palette.light_gray).centered(),
        ));

        // Connector toward the next node; none after the last.
        if (i as i64) < n - 1 {
            out.push(shape_element(
                Rect::new(
                    x + NODE_SIZE + Emu(50_000),
                    y + NODE_SIZE / 2 - Emu(100_000),
                    ARROW_W,
                    ARROW_H,
                ),
                ShapeKind::RightArrow,
                Some(Color::rgb(0xE0, 0xE0, 0xE0)),
                None,
            ));
        }
    }
    out
}

pub fn arrow_count(placed: &[PositionedElement]) -> usize {
    placed
        .iter()
        .filter(|e| {
            matches!(
                &e.content,
                ElementContent::Shape(ShapeSpec {
                    kind: ShapeKind::RightArrow,
                    ..
                })
            )
        })
        .count()
}
