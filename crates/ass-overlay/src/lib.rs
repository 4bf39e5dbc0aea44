//! ASS subtitle overlay engine: timing, resampling and layout
//!
//! `ass-overlay` keeps the visible set of compiled subtitle events and
//! their on-screen geometry synchronized with an external media clock
//! and a resizable display surface. It computes declarative geometry,
//! clip paths and animation clips; a [`surface::RenderSurface`] adapter
//! does the actual painting.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ass_overlay::{Overlay, OverlayOptions, TickOutcome};
//!
//! let mut overlay = Overlay::new(surface, script, &OverlayOptions::default());
//! overlay.play();
//! loop {
//!     if overlay.tick(media.current_time()) == TickOutcome::Idle {
//!         break; // stalled clock, wait for the next media event
//!     }
//! }
//! ```
//!
//! The host is responsible for forwarding media events: `play`/`playing`
//! into [`Overlay::play`], `pause`/`waiting` into [`Overlay::pause`],
//! `seeking` into [`Overlay::seek`], and surface size changes into
//! [`Overlay::resize`].

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod animation;
pub mod layout;
pub mod resample;
pub mod schedule;
pub mod session;
pub mod surface;
pub mod utils;

pub use animation::{AnimationClip, ClipKind, ClipTarget, Keyframe, PropertyValue};
pub use layout::{BoxMetrics, ClipPathSpec, FlowSpec, LayoutContext, Placement};
pub use resample::{ResampleOutput, Resampling, StageLayout};
pub use schedule::{FrameChanges, Scheduler};
pub use session::{Overlay, OverlayOptions, TickOutcome};
pub use surface::{ClipCommand, ClipHandle, EventKey, RenderSurface, SurfaceMetrics};
pub use utils::OverlayError;

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
