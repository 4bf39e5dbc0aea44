//! Timed dialogue events with override tags, clips, drawings and effects

use crate::drawing::Drawing;
use crate::types::{Alignment, Margin, Point};

/// A single compiled dialogue event. Content is immutable once compiled;
/// render state lives in the overlay session's side table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Layer for z-ordering; higher layers paint above lower ones
    pub layer: i32,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
    /// Referenced style name
    pub style: String,
    /// Effective alignment after style defaults and `\an`/`\a` overrides
    pub alignment: Alignment,
    /// Effective margins after style defaults and per-line overrides
    pub margin: Margin,
    /// Wrap style 0..=3 (`\q`); 2 disables the margin-derived max width
    pub wrap_style: u8,
    /// `\pos` override in script coordinates
    pub pos: Option<Point>,
    /// `\org` rotation origin override in script coordinates
    pub org: Option<Point>,
    /// `\move` tween
    pub movement: Option<Movement>,
    /// `\fad`/`\fade` timing
    pub fade: Option<Fade>,
    /// Line effect; only banner and scroll variants compile through
    pub effect: Option<Effect>,
    /// `\clip`/`\iclip` region
    pub clip: Option<ClipSpec>,
    /// Styled text runs in source order
    pub runs: Vec<TextRun>,
}

impl Event {
    /// Minimal dialogue constructor used by tests and doc examples
    #[must_use]
    pub fn dialogue(start: f64, end: f64, style: &str) -> Self {
        Self {
            layer: 0,
            start,
            end,
            style: style.into(),
            alignment: Alignment::default(),
            margin: Margin::default(),
            wrap_style: 0,
            pos: None,
            org: None,
            movement: None,
            fade: None,
            effect: None,
            clip: None,
            runs: Vec::new(),
        }
    }

    /// Event duration in seconds
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether any run carries a vector drawing instead of text
    #[must_use]
    pub fn has_drawing(&self) -> bool {
        self.runs.iter().any(|run| run.drawing.is_some())
    }
}

/// One styled run of an event's text, with its merged override tag
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextRun {
    /// Text content; empty for drawing runs
    pub text: String,
    /// Merged override values in effect for this run
    pub tag: TagOverride,
    /// Vector drawing replacing the text (`\p` mode)
    pub drawing: Option<Drawing>,
    /// Karaoke timing for this run
    pub karaoke: Option<Karaoke>,
    /// `\t` transitions scoped to this run
    pub transitions: Vec<Transition>,
}

/// Merged per-run override tag values. `None` means "inherit from style".
///
/// Field names follow the ASS tag names so the mapping back to the format
/// stays obvious.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagOverride {
    /// `\fs` font size in script pixels
    pub fs: Option<f32>,
    /// `\fscx` horizontal scale percentage
    pub fscx: Option<f32>,
    /// `\fscy` vertical scale percentage
    pub fscy: Option<f32>,
    /// `\frx` rotation about the x axis, degrees
    pub frx: Option<f32>,
    /// `\fry` rotation about the y axis, degrees
    pub fry: Option<f32>,
    /// `\frz` rotation about the z axis, degrees
    pub frz: Option<f32>,
    /// `\fax` horizontal shear factor
    pub fax: Option<f32>,
    /// `\fay` vertical shear factor
    pub fay: Option<f32>,
    /// `\xbord` horizontal border width
    pub xbord: Option<f32>,
    /// `\ybord` vertical border width
    pub ybord: Option<f32>,
    /// `\xshad` horizontal shadow offset
    pub xshad: Option<f32>,
    /// `\yshad` vertical shadow offset
    pub yshad: Option<f32>,
    /// `\blur` gaussian edge blur
    pub blur: Option<f32>,
    /// `\be` legacy edge blur
    pub be: Option<f32>,
    /// `\alpha` overall alpha 0..=255 (0 = opaque)
    pub alpha: Option<u8>,
    /// `\c`/`\1c` fill color
    pub primary_color: Option<[u8; 4]>,
    /// `\3c` border color
    pub outline_color: Option<[u8; 4]>,
    /// Animated `\clip` rectangle inside a transition, script coordinates
    pub clip_rect: Option<[f32; 4]>,
}

impl TagOverride {
    /// Effective horizontal border, falling back to the style outline
    #[must_use]
    pub fn xbord_or(&self, outline: f32) -> f32 {
        self.xbord.unwrap_or(outline)
    }

    /// Effective vertical border, falling back to the style outline
    #[must_use]
    pub fn ybord_or(&self, outline: f32) -> f32 {
        self.ybord.unwrap_or(outline)
    }

    /// Effective edge blur (`\blur` wins over `\be`)
    #[must_use]
    pub fn edge_blur(&self) -> f32 {
        self.blur.or(self.be).unwrap_or(0.0)
    }
}

/// `\move(x1, y1, x2, y2[, t1, t2])`; times are milliseconds from the
/// event start, both zero meaning "over the whole event"
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Movement {
    /// Start point in script coordinates
    pub from: Point,
    /// End point in script coordinates
    pub to: Point,
    /// Tween start offset in milliseconds
    pub t1: f64,
    /// Tween end offset in milliseconds
    pub t2: f64,
}

/// Fade timing, from `\fad` or `\fade`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fade {
    /// `\fad(t1, t2)`: fade-in / fade-out durations in milliseconds
    Simple {
        /// Fade-in duration
        t1: f64,
        /// Fade-out duration
        t2: f64,
    },
    /// `\fade(a1, a2, a3, t1, t2, t3, t4)`: three alpha plateaus
    /// (0 = opaque, 255 = transparent) with millisecond breakpoints
    Complex {
        /// Alpha before `t1`
        a1: u8,
        /// Alpha between `t2` and `t3`
        a2: u8,
        /// Alpha after `t4`
        a3: u8,
        /// First breakpoint
        t1: f64,
        /// Second breakpoint
        t2: f64,
        /// Third breakpoint
        t3: f64,
        /// Fourth breakpoint
        t4: f64,
    },
}

/// Line effect from the event's Effect field. Only the moving variants
/// reach the engine; unrecognized effect names compile to `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// `Banner;delay;lefttoright;fadeawaywidth`
    Banner {
        /// Speed divisor; traversal speed is `6000 / max(delay, 1)` px/s
        delay: f64,
        /// Direction of travel
        left_to_right: bool,
        /// Edge fade width in script pixels
        fade_away_width: f32,
    },
    /// `Scroll up;y1;y2;delay;fadeawayheight` (and `Scroll down`)
    Scroll {
        /// Travel direction
        up: bool,
        /// Upper bound of the scroll band in script pixels
        y1: f32,
        /// Lower bound of the scroll band; 0 means the full stage height
        y2: f32,
        /// Speed divisor; traversal speed is `6000 / max(delay, 1)` px/s
        delay: f64,
        /// Edge fade height in script pixels
        fade_away_height: f32,
    },
}

/// Clip region attached to an event
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipSpec {
    /// `\iclip`: the visible area is everything outside the region
    pub inverse: bool,
    /// Region geometry
    pub region: ClipRegion,
}

/// Geometry of a clip region
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClipRegion {
    /// Axis-aligned rectangle in script coordinates
    Rect {
        /// Left edge
        x1: f32,
        /// Top edge
        y1: f32,
        /// Right edge
        x2: f32,
        /// Bottom edge
        y2: f32,
    },
    /// Arbitrary vector path; the drawing's scale exponent applies
    Vector(Drawing),
}

/// Karaoke timing for a run
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Karaoke {
    /// Highlight style
    pub kind: KaraokeKind,
    /// Offset of this run's highlight from the event start, seconds
    pub offset: f64,
    /// Highlight duration in seconds
    pub duration: f64,
}

/// Karaoke highlight styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KaraokeKind {
    /// `\k`: instant switch at the run's offset
    Instant,
    /// `\kf`/`\K`: continuous left-to-right sweep
    Sweep,
    /// `\ko`: outline highlight
    Outline,
}

/// A `\t` tag: animate toward `tag` over `[t1, t2]` with acceleration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    /// Start offset from the event start, milliseconds
    pub t1: f64,
    /// End offset from the event start, milliseconds
    pub t2: f64,
    /// Acceleration exponent; 1 is linear
    pub accel: f32,
    /// Target override values
    pub tag: TagOverride,
}
