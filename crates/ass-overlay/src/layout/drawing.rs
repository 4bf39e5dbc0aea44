//! Vector drawing geometry: box size, stroke/shadow padding and viewbox

use super::LayoutContext;
use ass_script::{Event, Style};

/// Geometry for one drawing run, consumed by the surface's path painter.
///
/// The viewbox is padded so borders, shadows and blur are not clipped at
/// the path bounds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawingGeometry {
    /// Index of the run this geometry belongs to
    pub run: usize,
    /// Path box width in surface pixels (`bounds * fscx * scale / 2^(p-1)`)
    pub width: f32,
    /// Path box height in surface pixels
    pub height: f32,
    /// Offset of the padded viewbox from the path box left edge
    pub offset_x: f32,
    /// Offset of the padded viewbox from the path box top edge
    pub offset_y: f32,
    /// Padded viewbox `[min_x, min_y, width, height]` in surface pixels
    pub view_box: [f32; 4],
    /// Source bounds `[min_x, min_y, width, height]` in drawing units,
    /// mapping the raw path into the padded viewbox
    pub source_bounds: [f32; 4],
}

/// Compute geometry for every drawing run of an event
#[must_use]
pub fn drawing_geometry(event: &Event, style: &Style, ctx: &LayoutContext) -> Vec<DrawingGeometry> {
    event
        .runs
        .iter()
        .enumerate()
        .filter_map(|(run, text_run)| {
            let drawing = text_run.drawing.as_ref()?;
            if drawing.width <= 0.0 && drawing.height <= 0.0 {
                return None;
            }
            let tag = &text_run.tag;
            let base = ctx.scale / drawing.scale_divisor();
            let sx = tag.fscx.map_or(1.0, |v| v / 100.0) * base;
            let sy = tag.fscy.map_or(1.0, |v| v / 100.0) * base;

            let xbord = tag.xbord_or(style.outline);
            let ybord = tag.ybord_or(style.outline);
            let xshad = tag.xshad.unwrap_or(style.shadow);
            let yshad = tag.yshad.unwrap_or(style.shadow);
            let blur = tag.edge_blur();

            let vbx = xbord + (-xshad).max(0.0) + blur;
            let vby = ybord + (-yshad).max(0.0) + blur;
            let width = drawing.width * sx;
            let height = drawing.height * sy;
            let vbw = width + 2.0 * xbord + xshad.abs() + 2.0 * blur;
            let vbh = height + 2.0 * ybord + yshad.abs() + 2.0 * blur;

            Some(DrawingGeometry {
                run,
                width,
                height,
                offset_x: drawing.min_x * sx - vbx,
                offset_y: drawing.min_y * sy - vby,
                view_box: [-vbx, -vby, vbw, vbh],
                source_bounds: [drawing.min_x, drawing.min_y, drawing.width, drawing.height],
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ass_script::{DrawCommand, DrawOp, Drawing, Point, Resolution, TextRun};

    fn ctx() -> LayoutContext {
        LayoutContext {
            scale: 2.0,
            stage: Resolution::new(1280.0, 720.0),
            script_res: Resolution::new(640.0, 360.0),
        }
    }

    fn square_drawing(exponent: u8) -> Drawing {
        Drawing::new(
            exponent,
            vec![
                DrawCommand {
                    op: DrawOp::Move,
                    points: vec![Point::new(0.0, 0.0)],
                },
                DrawCommand {
                    op: DrawOp::Line,
                    points: vec![
                        Point::new(100.0, 0.0),
                        Point::new(100.0, 100.0),
                        Point::new(0.0, 100.0),
                    ],
                },
            ],
        )
    }

    #[test]
    fn box_scales_by_exponent_and_font_scale() {
        let mut event = Event::dialogue(0.0, 1.0, "Default");
        let mut run = TextRun {
            drawing: Some(square_drawing(3)),
            ..TextRun::default()
        };
        run.tag.fscx = Some(50.0);
        event.runs.push(run);

        let style = Style {
            outline: 0.0,
            shadow: 0.0,
            ..Style::default()
        };
        let geoms = drawing_geometry(&event, &style, &ctx());
        assert_eq!(geoms.len(), 1);
        // base = 2 / 2^(3-1) = 0.5; width = 100 * 0.5 * 0.5, height = 100 * 0.5
        assert_eq!(geoms[0].width, 25.0);
        assert_eq!(geoms[0].height, 50.0);
        assert_eq!(geoms[0].view_box, [0.0, 0.0, 25.0, 50.0]);
    }

    #[test]
    fn border_and_shadow_pad_the_viewbox() {
        let mut event = Event::dialogue(0.0, 1.0, "Default");
        let mut run = TextRun {
            drawing: Some(square_drawing(1)),
            ..TextRun::default()
        };
        run.tag.xbord = Some(4.0);
        run.tag.ybord = Some(4.0);
        run.tag.xshad = Some(-6.0);
        run.tag.yshad = Some(6.0);
        event.runs.push(run);

        let style = Style {
            outline: 0.0,
            shadow: 0.0,
            ..Style::default()
        };
        let geom = &drawing_geometry(&event, &style, &ctx())[0];
        // negative x shadow extends the left padding
        assert_eq!(geom.view_box[0], -(4.0 + 6.0));
        assert_eq!(geom.view_box[1], -4.0);
        assert_eq!(geom.view_box[2], 200.0 + 8.0 + 6.0);
        assert_eq!(geom.view_box[3], 200.0 + 8.0 + 6.0);
    }

    #[test]
    fn text_runs_produce_no_geometry() {
        let mut event = Event::dialogue(0.0, 1.0, "Default");
        event.runs.push(TextRun {
            text: "plain".into(),
            ..TextRun::default()
        });
        assert!(drawing_geometry(&event, &Style::default(), &ctx()).is_empty());
    }
}
