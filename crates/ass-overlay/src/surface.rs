//! The rendering-surface abstraction
//!
//! The engine computes geometry and animation clips; a surface adapter
//! paints them with whatever technology the host provides (DOM/CSS,
//! canvas, a compositor). The engine talks to the surface through this
//! trait and never touches pixels itself.

use crate::animation::AnimationClip;
use crate::layout::{BoxMetrics, FlowSpec, Placement};
use crate::resample::StageLayout;
use ass_script::{Event, Resolution};

/// Stable identifier for an event within one session: its index in the
/// compiled event list
pub type EventKey = usize;

/// Opaque handle for a running animation clip, issued by the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipHandle(pub u64);

/// Commands the engine sends to an animation clip
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipCommand {
    /// Set the clip's local clock without playing it
    Scrub {
        /// Local time in milliseconds from the clip's start
        at_ms: f64,
    },
    /// Resume playback from the current local time
    Play,
    /// Freeze at the current local time
    Pause,
    /// Cancel and release the clip; the handle becomes invalid
    Cancel,
}

/// Sizes the engine samples from the surface on every resize
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMetrics {
    /// Client size of the area the overlay covers
    pub viewport: Resolution,
    /// Natural size of the attached media, when there is one
    pub media: Option<Resolution>,
}

/// A surface that can lay out, paint and animate subtitle boxes.
///
/// Contract notes:
/// - `mount` lays the event's content out under the given flow
///   constraints and reports the resulting box size. The engine calls
///   `place` with the final geometry afterwards.
/// - A mounted key stays valid until `unmount`; the engine never mounts
///   the same key twice without an intervening unmount.
/// - Clip handles issued by `start_clip` are owned by the engine and
///   always cancelled before their event is unmounted.
pub trait RenderSurface {
    /// Current viewport and media sizes
    fn metrics(&self) -> SurfaceMetrics;

    /// Create the box for an activated event and measure it
    fn mount(&mut self, key: EventKey, event: &Event, flow: &FlowSpec) -> BoxMetrics;

    /// Apply final geometry to a mounted event box
    fn place(&mut self, key: EventKey, placement: &Placement);

    /// Remove an event box and everything attached to it
    fn unmount(&mut self, key: EventKey);

    /// Apply the overlay box geometry derived by resampling
    fn set_stage(&mut self, stage: &StageLayout);

    /// Toggle overlay visibility; scheduling is unaffected
    fn set_visible(&mut self, visible: bool);

    /// Instantiate an animation clip on a mounted event
    fn start_clip(&mut self, key: EventKey, clip: &AnimationClip) -> ClipHandle;

    /// Drive a previously started clip
    fn control_clip(&mut self, handle: ClipHandle, command: ClipCommand);
}
