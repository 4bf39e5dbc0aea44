//! Declarative animation clips for timed event effects
//!
//! Clips describe what the surface should animate; the engine only keeps
//! them aligned with the external clock. On activation every clip is
//! scrubbed to the event-local time and left paused; play/pause fan out
//! to all owned clips; a seek discards and rebuilds them from scratch so
//! no drift survives.

use crate::layout::{BoxMetrics, LayoutContext};
use crate::surface::{ClipCommand, ClipHandle, RenderSurface};
use ass_script::{Effect, Event, Fade, KaraokeKind, Transition};
use smallvec::SmallVec;

/// What a clip animates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClipTarget {
    /// The whole event box
    EventBox,
    /// The wrapper that owns the event's clip path
    ClipArea,
    /// One text run, by index
    Run(usize),
}

/// Clip flavor, so surfaces can specialize playback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClipKind {
    /// Opacity ramp from `\fad`/`\fade`
    Fade,
    /// Translation tween from `\move`
    Move,
    /// Property transition from `\t`
    Transition,
    /// Karaoke highlight for one run
    Karaoke(KaraokeKind),
    /// Banner/scroll traversal
    Effect,
    /// Animated clip rectangle
    ClipRect,
}

/// Animatable properties
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyValue {
    /// Box opacity, 0..=1
    Opacity(f32),
    /// Horizontal translation in surface pixels
    TranslateX(f32),
    /// Vertical translation in surface pixels
    TranslateY(f32),
    /// Font size in script pixels
    FontSize(f32),
    /// Horizontal font scale percentage
    FontScaleX(f32),
    /// Vertical font scale percentage
    FontScaleY(f32),
    /// Rotation about the x axis, degrees
    RotateX(f32),
    /// Rotation about the y axis, degrees
    RotateY(f32),
    /// Rotation about the z axis, degrees
    RotateZ(f32),
    /// Fill color
    PrimaryColor([u8; 4]),
    /// Border color
    OutlineColor([u8; 4]),
    /// Overall alpha, 0 = opaque
    Alpha(u8),
    /// Karaoke sweep progress, 0..=1
    SweepProgress(f32),
    /// Clip rectangle in script coordinates
    ClipRect([f32; 4]),
}

/// One keyframe: a normalized offset plus target property values
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keyframe {
    /// Position in the clip, 0..=1
    pub offset: f64,
    /// Property values reached at this offset
    pub props: SmallVec<[PropertyValue; 4]>,
}

impl Keyframe {
    fn at(offset: f64, props: impl IntoIterator<Item = PropertyValue>) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            props: props.into_iter().collect(),
        }
    }
}

/// A declarative animation clip owned by one active event
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationClip {
    /// Animated element
    pub target: ClipTarget,
    /// Flavor for surface-side specialization
    pub kind: ClipKind,
    /// Start offset from the event start, milliseconds
    pub delay_ms: f64,
    /// Clip duration in milliseconds
    pub duration_ms: f64,
    /// Acceleration exponent applied to progress; 1 is linear
    pub accel: f32,
    /// Keyframes in offset order
    pub keyframes: Vec<Keyframe>,
}

/// Build every clip an event owns at activation time
#[must_use]
pub fn build_clips(event: &Event, metrics: BoxMetrics, ctx: &LayoutContext) -> Vec<AnimationClip> {
    let mut clips = Vec::new();
    let duration_ms = event.duration() * 1000.0;
    if duration_ms <= 0.0 {
        return clips;
    }

    if let Some(fade) = event.fade {
        clips.push(fade_clip(fade, duration_ms));
    }
    if let Some(movement) = event.movement {
        clips.push(move_clip(&movement, duration_ms, ctx.scale));
    }
    if let Some(effect) = event.effect {
        clips.push(effect_clip(&effect, metrics, ctx));
    }
    for (run, text_run) in event.runs.iter().enumerate() {
        if let Some(karaoke) = text_run.karaoke {
            clips.push(karaoke_clip(run, karaoke.kind, karaoke.offset, karaoke.duration));
        }
        for transition in &text_run.transitions {
            clips.extend(transition_clips(run, transition, duration_ms));
        }
    }
    clips
}

fn fade_clip(fade: Fade, duration_ms: f64) -> AnimationClip {
    let keyframes = match fade {
        Fade::Simple { t1, t2 } => {
            let hold_in = (t1 / duration_ms).clamp(0.0, 1.0);
            let hold_out = (1.0 - t2 / duration_ms).clamp(hold_in, 1.0);
            vec![
                Keyframe::at(0.0, [PropertyValue::Opacity(if t1 > 0.0 { 0.0 } else { 1.0 })]),
                Keyframe::at(hold_in, [PropertyValue::Opacity(1.0)]),
                Keyframe::at(hold_out, [PropertyValue::Opacity(1.0)]),
                Keyframe::at(1.0, [PropertyValue::Opacity(if t2 > 0.0 { 0.0 } else { 1.0 })]),
            ]
        }
        Fade::Complex {
            a1,
            a2,
            a3,
            t1,
            t2,
            t3,
            t4,
        } => {
            let alpha = |a: u8| PropertyValue::Opacity(1.0 - f32::from(a) / 255.0);
            vec![
                Keyframe::at(0.0, [alpha(a1)]),
                Keyframe::at(t1 / duration_ms, [alpha(a1)]),
                Keyframe::at(t2 / duration_ms, [alpha(a2)]),
                Keyframe::at(t3 / duration_ms, [alpha(a2)]),
                Keyframe::at(t4 / duration_ms, [alpha(a3)]),
                Keyframe::at(1.0, [alpha(a3)]),
            ]
        }
    };
    AnimationClip {
        target: ClipTarget::EventBox,
        kind: ClipKind::Fade,
        delay_ms: 0.0,
        duration_ms,
        accel: 1.0,
        keyframes,
    }
}

fn move_clip(movement: &ass_script::Movement, duration_ms: f64, scale: f32) -> AnimationClip {
    // Zero timing means the tween spans the whole event
    let (t1, t2) = if movement.t1 <= 0.0 && movement.t2 <= 0.0 {
        (0.0, duration_ms)
    } else {
        (movement.t1, movement.t2.max(movement.t1))
    };
    let dx = (movement.to.x - movement.from.x) * scale;
    let dy = (movement.to.y - movement.from.y) * scale;
    let rest = [PropertyValue::TranslateX(0.0), PropertyValue::TranslateY(0.0)];
    let gone = [PropertyValue::TranslateX(dx), PropertyValue::TranslateY(dy)];
    AnimationClip {
        target: ClipTarget::EventBox,
        kind: ClipKind::Move,
        delay_ms: 0.0,
        duration_ms,
        accel: 1.0,
        keyframes: vec![
            Keyframe::at(0.0, rest),
            Keyframe::at(t1 / duration_ms, rest),
            Keyframe::at(t2 / duration_ms, gone),
            Keyframe::at(1.0, gone),
        ],
    }
}

/// Traversal speed of banner/scroll lines in script pixels per second
fn effect_speed(delay: f64) -> f64 {
    6000.0 / delay.max(1.0)
}

fn effect_clip(effect: &Effect, metrics: BoxMetrics, ctx: &LayoutContext) -> AnimationClip {
    let (travel, keyframes) = match *effect {
        Effect::Banner { left_to_right, .. } => {
            let travel = f64::from(ctx.stage.width + metrics.width);
            let dx = if left_to_right {
                ctx.stage.width + metrics.width
            } else {
                -(ctx.stage.width + metrics.width)
            };
            (
                travel,
                vec![
                    Keyframe::at(0.0, [PropertyValue::TranslateX(0.0)]),
                    Keyframe::at(1.0, [PropertyValue::TranslateX(dx)]),
                ],
            )
        }
        Effect::Scroll { up, y1, y2, .. } => {
            let (top, bottom) = crate::layout::scroll_band(y1, y2, metrics, ctx);
            let span = bottom - top + metrics.height;
            let dy = if up { -span } else { span };
            (
                f64::from(span),
                vec![
                    Keyframe::at(0.0, [PropertyValue::TranslateY(0.0)]),
                    Keyframe::at(1.0, [PropertyValue::TranslateY(dy)]),
                ],
            )
        }
    };
    let delay = match *effect {
        Effect::Banner { delay, .. } | Effect::Scroll { delay, .. } => delay,
    };
    let speed = effect_speed(delay) * f64::from(ctx.scale);
    AnimationClip {
        target: ClipTarget::EventBox,
        kind: ClipKind::Effect,
        delay_ms: 0.0,
        duration_ms: travel / speed * 1000.0,
        accel: 1.0,
        keyframes,
    }
}

fn karaoke_clip(run: usize, kind: KaraokeKind, offset: f64, duration: f64) -> AnimationClip {
    // Instant and outline highlights switch at the offset; a sweep fills
    // continuously over the run's duration
    let duration_ms = match kind {
        KaraokeKind::Sweep => (duration * 1000.0).max(1.0),
        KaraokeKind::Instant | KaraokeKind::Outline => 1.0,
    };
    AnimationClip {
        target: ClipTarget::Run(run),
        kind: ClipKind::Karaoke(kind),
        delay_ms: offset * 1000.0,
        duration_ms,
        accel: 1.0,
        keyframes: vec![
            Keyframe::at(0.0, [PropertyValue::SweepProgress(0.0)]),
            Keyframe::at(1.0, [PropertyValue::SweepProgress(1.0)]),
        ],
    }
}

fn transition_clips(run: usize, transition: &Transition, duration_ms: f64) -> Vec<AnimationClip> {
    let t1 = transition.t1.clamp(0.0, duration_ms);
    let t2 = if transition.t2 <= 0.0 {
        duration_ms
    } else {
        transition.t2.clamp(t1, duration_ms)
    };
    let tag = &transition.tag;

    let mut props: SmallVec<[PropertyValue; 4]> = SmallVec::new();
    let pairs = [
        tag.fs.map(PropertyValue::FontSize),
        tag.fscx.map(PropertyValue::FontScaleX),
        tag.fscy.map(PropertyValue::FontScaleY),
        tag.frx.map(PropertyValue::RotateX),
        tag.fry.map(PropertyValue::RotateY),
        tag.frz.map(PropertyValue::RotateZ),
        tag.alpha.map(PropertyValue::Alpha),
        tag.primary_color.map(PropertyValue::PrimaryColor),
        tag.outline_color.map(PropertyValue::OutlineColor),
    ];
    props.extend(pairs.into_iter().flatten());

    let mut clips = Vec::new();
    if !props.is_empty() {
        clips.push(AnimationClip {
            target: ClipTarget::Run(run),
            kind: ClipKind::Transition,
            delay_ms: t1,
            duration_ms: (t2 - t1).max(1.0),
            accel: transition.accel,
            // Surfaces animate from the run's current values toward the
            // single target keyframe
            keyframes: vec![Keyframe::at(1.0, props)],
        });
    }
    if let Some(rect) = tag.clip_rect {
        clips.push(AnimationClip {
            target: ClipTarget::ClipArea,
            kind: ClipKind::ClipRect,
            delay_ms: t1,
            duration_ms: (t2 - t1).max(1.0),
            accel: transition.accel,
            keyframes: vec![Keyframe::at(1.0, [PropertyValue::ClipRect(rect)])],
        });
    }
    clips
}

/// Scrub a set of clips to an event-local time, leaving them paused
pub fn align_to<S: RenderSurface + ?Sized>(surface: &mut S, handles: &[ClipHandle], local_ms: f64) {
    for &handle in handles {
        surface.control_clip(handle, ClipCommand::Scrub { at_ms: local_ms });
    }
}

/// Send one command to a set of clips
pub fn batch<S: RenderSurface + ?Sized>(
    surface: &mut S,
    handles: &[ClipHandle],
    command: ClipCommand,
) {
    for &handle in handles {
        surface.control_clip(handle, command);
    }
}
