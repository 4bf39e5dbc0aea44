//! # ass-script
//!
//! Data model for compiled ASS (Advanced `SubStation` Alpha) scripts as
//! produced by an external compiler: script metadata, named styles and
//! timed dialogue events with their override tags, clip regions, vector
//! drawings and line effects.
//!
//! The types here are read-only inputs to the overlay engine. The engine
//! never mutates them; per-event render state lives in a side table owned
//! by the overlay session.
//!
//! ## Quick Start
//!
//! ```rust
//! use ass_script::{CompiledScript, Event, ScriptInfo, StyleMap};
//!
//! let info = ScriptInfo::default();
//! let events = vec![
//!     Event::dialogue(0.0, 2.0, "Default"),
//!     Event::dialogue(1.0, 3.0, "Default"),
//! ];
//! let script = CompiledScript::new(info, StyleMap::default(), events)?;
//! assert_eq!(script.events().len(), 2);
//! # Ok::<(), ass_script::ScriptError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod drawing;
pub mod event;
pub mod info;
pub mod script;
pub mod style;
pub mod types;

pub use drawing::{DrawCommand, DrawOp, Drawing};
pub use event::{
    ClipRegion, ClipSpec, Effect, Event, Fade, Karaoke, KaraokeKind, Movement, TagOverride,
    TextRun, Transition,
};
pub use info::ScriptInfo;
pub use script::{CompiledScript, ScriptError};
pub use style::{Style, StyleMap};
pub use types::{Alignment, Margin, Point, Resolution};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
