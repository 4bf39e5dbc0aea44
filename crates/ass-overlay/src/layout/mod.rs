//! Per-event geometry resolution: text flow, anchor position, transform
//! origin, clip paths and drawing geometry.
//!
//! The resolver never paints. It turns a compiled event plus the current
//! scale into declarative records the render surface executes.

use ass_script::{Event, Resolution, Style};

mod clip;
mod drawing;
mod position;
mod transform;

pub use clip::{ClipPathSpec, PathSegment};
pub use drawing::DrawingGeometry;
pub use position::{position, scroll_band};
pub use transform::transform_origin;

/// Inputs shared by every geometry computation for one event
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Uniform script-to-surface scale
    pub scale: f32,
    /// Overlay box size in surface pixels
    pub stage: Resolution,
    /// Script resolution; clip and drawing coordinates live in this space
    pub script_res: Resolution,
}

/// Measured box size reported by the surface after mounting an event
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxMetrics {
    /// Laid-out width in surface pixels
    pub width: f32,
    /// Laid-out height in surface pixels
    pub height: f32,
}

/// Text-flow constraints applied before the box is measured
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowSpec {
    /// Paint order; higher layers above lower
    pub z_index: i32,
    /// Horizontal text alignment: 0 = left, 1 = center, 2 = right
    pub text_align: usize,
    /// Wrap width in surface pixels; `None` for no constraint
    pub max_width: Option<f32>,
    /// Left padding in surface pixels
    pub pad_left: f32,
    /// Right padding in surface pixels
    pub pad_right: f32,
}

/// Final placement for a measured event box
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Box left edge relative to the stage
    pub x: f32,
    /// Box top edge relative to the stage
    pub y: f32,
    /// Measured box width, echoed for the surface
    pub width: f32,
    /// Measured box height
    pub height: f32,
    /// Rotation/skew origin relative to the box top-left
    pub origin_x: f32,
    /// See `origin_x`
    pub origin_y: f32,
    /// Clip region, when the event carries one
    pub clip_path: Option<ClipPathSpec>,
    /// Geometry for each drawing run, keyed by run index
    pub drawings: Vec<DrawingGeometry>,
}

/// Compute flow constraints for an event before measurement.
///
/// Margins become wrap width and padding only for events laid out by
/// alignment; positioned events keep the wrap width but no padding, and
/// effect lines flow free.
#[must_use]
pub fn flow(event: &Event, ctx: &LayoutContext) -> FlowSpec {
    let mut spec = FlowSpec {
        z_index: event.layer,
        text_align: event.alignment.h,
        max_width: None,
        pad_left: 0.0,
        pad_right: 0.0,
    };
    if event.effect.is_some() {
        return spec;
    }
    if event.wrap_style != 2 {
        let reserved = ctx.scale * (event.margin.left + event.margin.right);
        spec.max_width = Some((ctx.stage.width - reserved).max(0.0));
    }
    if event.pos.is_none() {
        if event.alignment.h != 0 {
            spec.pad_right = ctx.scale * event.margin.right;
        }
        if event.alignment.h != 2 {
            spec.pad_left = ctx.scale * event.margin.left;
        }
    }
    spec
}

/// Compute the full placement for a measured event box
#[must_use]
pub fn place(event: &Event, style: &Style, metrics: BoxMetrics, ctx: &LayoutContext) -> Placement {
    let (x, y) = position(event, metrics, ctx);
    let (origin_x, origin_y) = transform_origin(event, (x, y), metrics, ctx.scale);
    let clip_path = event.clip.as_ref().map(|c| clip::clip_path(c, ctx));
    let drawings = drawing::drawing_geometry(event, style, ctx);
    Placement {
        x,
        y,
        width: metrics.width,
        height: metrics.height,
        origin_x,
        origin_y,
        clip_path,
        drawings,
    }
}
