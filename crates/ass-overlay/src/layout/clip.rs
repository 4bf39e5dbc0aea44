//! Clip region path construction

use super::LayoutContext;
use ass_script::{ClipRegion, ClipSpec, DrawOp};

/// Declarative clip path handed to the render surface
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClipPathSpec {
    /// Closed polygon in fractions of the clip target's box (0..=1),
    /// filled with the even-odd rule
    Polygon {
        /// Contour points; an inverted clip carries two contours
        points: Vec<[f32; 2]>,
    },
    /// Arbitrary path in stage pixels, filled with the even-odd rule
    Path {
        /// Path segments in source order
        segments: Vec<PathSegment>,
    },
}

/// One scaled path segment of a vector clip
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathSegment {
    /// Path operator
    pub op: DrawOp,
    /// Stage-pixel points consumed by the operator
    pub points: Vec<[f32; 2]>,
}

/// Build the clip path for an event's clip spec.
///
/// Rectangular clips normalize to script-resolution fractions so the
/// surface can express them independently of the box size. Vector clips
/// are scaled like drawings, `scale / 2^(p-1)`. Inversion appends a
/// full-bounds contour; the even-odd rule turns the original region into
/// a hole.
#[must_use]
pub fn clip_path(clip: &ClipSpec, ctx: &LayoutContext) -> ClipPathSpec {
    match &clip.region {
        ClipRegion::Rect { x1, y1, x2, y2 } => {
            let sw = ctx.script_res.width;
            let sh = ctx.script_res.height;
            let mut points = vec![
                [x1 / sw, y1 / sh],
                [x1 / sw, y2 / sh],
                [x2 / sw, y2 / sh],
                [x2 / sw, y1 / sh],
                [x1 / sw, y1 / sh],
            ];
            if clip.inverse {
                points.extend([[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]]);
            }
            ClipPathSpec::Polygon { points }
        }
        ClipRegion::Vector(drawing) => {
            let k = ctx.scale / drawing.scale_divisor();
            let mut segments: Vec<PathSegment> = drawing
                .commands
                .iter()
                .map(|command| PathSegment {
                    op: command.op,
                    points: command.points.iter().map(|p| [p.x * k, p.y * k]).collect(),
                })
                .collect();
            if clip.inverse {
                let w = ctx.stage.width;
                let h = ctx.stage.height;
                segments.push(PathSegment {
                    op: DrawOp::Move,
                    points: vec![[0.0, 0.0]],
                });
                segments.push(PathSegment {
                    op: DrawOp::Line,
                    points: vec![[0.0, h], [w, h], [w, 0.0], [0.0, 0.0]],
                });
            }
            ClipPathSpec::Path { segments }
        }
    }
}
