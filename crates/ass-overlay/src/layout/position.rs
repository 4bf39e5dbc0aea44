//! Anchor-based box positioning

use super::{BoxMetrics, LayoutContext};
use ass_script::{Effect, Event};

/// Compute the box top-left for an event.
///
/// A `\pos` override (or the start point of `\move`) anchors the box at
/// the scaled point through the alignment grid; otherwise margins are
/// applied against the stage edges selected by the alignment. Effect
/// lines are placed at their traversal start.
#[must_use]
pub fn position(event: &Event, metrics: BoxMetrics, ctx: &LayoutContext) -> (f32, f32) {
    let align = event.alignment;
    let w = metrics.width;
    let h = metrics.height;

    let anchor = event.pos.or(event.movement.map(|m| m.from));
    let (mut x, mut y) = if let Some(point) = anchor {
        let sx = ctx.scale * point.x;
        let sy = ctx.scale * point.y;
        (
            [sx, sx - w / 2.0, sx - w][align.h],
            [sy - h, sy - h / 2.0, sy][align.v],
        )
    } else {
        (
            [
                ctx.scale * event.margin.left,
                (ctx.stage.width - w) / 2.0,
                ctx.stage.width - w - ctx.scale * event.margin.right,
            ][align.h],
            [
                ctx.stage.height - h - ctx.scale * event.margin.bottom,
                (ctx.stage.height - h) / 2.0,
                ctx.scale * event.margin.top,
            ][align.v],
        )
    };

    match event.effect {
        Some(Effect::Banner { left_to_right, .. }) => {
            // Enter from offstage on the incoming side; y keeps its row
            x = if left_to_right { -w } else { ctx.stage.width };
        }
        Some(Effect::Scroll { up, y1, y2, .. }) => {
            let (top, bottom) = scroll_band(y1, y2, metrics, ctx);
            y = if up { bottom } else { top };
        }
        None => {}
    }

    (x, y)
}

/// Traversal endpoints of a scroll band, as box top coordinates.
/// `y2 == 0` widens the band to the full stage height.
#[must_use]
pub fn scroll_band(y1: f32, y2: f32, metrics: BoxMetrics, ctx: &LayoutContext) -> (f32, f32) {
    let y2 = if y2 == 0.0 {
        ctx.stage.height / ctx.scale
    } else {
        y2
    };
    let lo = ctx.scale * y1.min(y2);
    let hi = ctx.scale * y1.max(y2);
    // Entering edge: the box sits just outside the band on either end
    (lo - metrics.height, hi)
}
