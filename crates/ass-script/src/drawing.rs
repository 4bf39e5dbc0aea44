//! Vector drawing data embedded in events (`\p` mode and `\clip` paths)

use crate::types::Point;

/// Path operator for a drawing command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawOp {
    /// `m` - move to, starting a new contour
    Move,
    /// `n` - move to without closing the current contour
    MoveNoClose,
    /// `l` - line to
    Line,
    /// `b` - cubic bezier to (three points per segment)
    Bezier,
    /// `s` - b-spline to
    Spline,
    /// `p` - extend b-spline
    ExtendSpline,
    /// `c` - close b-spline
    CloseSpline,
}

/// A single drawing command with its coordinate list.
/// Coordinates are in drawing space, before the `2^(p-1)` scale is applied.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawCommand {
    /// Path operator
    pub op: DrawOp,
    /// Control points consumed by the operator
    pub points: Vec<Point>,
}

/// A compiled vector drawing: commands plus precomputed bounds.
///
/// `scale_exponent` is the `\p` level; coordinates are divided by
/// `2^(p-1)` when mapped to script space, modelling the format's
/// doubling-per-level semantics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Drawing {
    /// `\p` scale exponent, >= 1
    pub scale_exponent: u8,
    /// Path commands in source order
    pub commands: Vec<DrawCommand>,
    /// Minimum x of the path bounds
    pub min_x: f32,
    /// Minimum y of the path bounds
    pub min_y: f32,
    /// Width of the path bounds
    pub width: f32,
    /// Height of the path bounds
    pub height: f32,
}

impl Drawing {
    /// Build a drawing from commands, computing bounds from the points
    #[must_use]
    pub fn new(scale_exponent: u8, commands: Vec<DrawCommand>) -> Self {
        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        for command in &commands {
            for p in &command.points {
                min_x = min_x.min(p.x);
                min_y = min_y.min(p.y);
                max_x = max_x.max(p.x);
                max_y = max_y.max(p.y);
            }
        }
        if min_x > max_x {
            min_x = 0.0;
            min_y = 0.0;
            max_x = 0.0;
            max_y = 0.0;
        }
        Self {
            scale_exponent: scale_exponent.max(1),
            commands,
            min_x,
            min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    /// Divisor mapping drawing coordinates into script space: `2^(p-1)`
    #[must_use]
    pub fn scale_divisor(&self) -> f32 {
        let exponent = u32::from(self.scale_exponent.clamp(1, 24));
        (1u32 << (exponent - 1)) as f32
    }
}
