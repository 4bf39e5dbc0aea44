//! Overlay session: the public API and the mutable state behind it
//!
//! One `Overlay` owns one surface and one compiled script. All mutable
//! state (scale, stage, cursor, active set, render-state side table) is
//! per-session; multiple independent overlays can coexist in a process.
//!
//! The session is driven externally: the host forwards media play/pause/
//! seeking events and surface resizes, and calls [`Overlay::tick`] with
//! the media time while playing. The engine never owns a timer.

use crate::animation::{self, build_clips};
use crate::layout::{self, LayoutContext, Placement};
use crate::resample::{self, ResampleInput, Resampling, StageLayout};
use crate::schedule::Scheduler;
use crate::surface::{ClipCommand, ClipHandle, EventKey, RenderSurface};
use crate::utils::OverlayError;
use ahash::AHashMap;
use ass_script::{CompiledScript, Event, Resolution, ScriptInfo, StyleMap};
use smallvec::SmallVec;

/// Session construction options
#[derive(Debug, Clone, Default)]
pub struct OverlayOptions {
    /// Resampling policy name; unrecognized values keep the default
    pub resampling: Option<String>,
    /// Initial subtitle delay in seconds
    pub delay: f64,
}

/// What the driver should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The clock moved; schedule the next tick
    Continue,
    /// The clock stalled; stop scheduling until play or seek resumes it
    Idle,
}

/// Render state attached to an active event, discarded on deactivation
#[derive(Debug)]
struct RenderState {
    placement: Placement,
    clips: SmallVec<[ClipHandle; 4]>,
}

/// A subtitle overlay session synchronizing a compiled script with a
/// render surface and an external media clock.
pub struct Overlay<S: RenderSurface> {
    surface: S,
    script: CompiledScript,
    scheduler: Scheduler,
    render: AHashMap<EventKey, RenderState>,
    policy: Resampling,
    script_res: Resolution,
    resampled: Resolution,
    stage: StageLayout,
    delay: f64,
    current_time: f64,
    last_tick: Option<f64>,
    playing: bool,
    visible: bool,
}

impl<S: RenderSurface> Overlay<S> {
    /// Create a session over an already-validated compiled script.
    /// Performs the initial resample and activates events for time zero.
    pub fn new(surface: S, script: CompiledScript, options: &OverlayOptions) -> Self {
        let policy = options
            .resampling
            .as_deref()
            .and_then(|value| {
                let parsed = Resampling::parse(value);
                if parsed.is_none() {
                    tracing::warn!(value, "unrecognized resampling policy ignored");
                }
                parsed
            })
            .unwrap_or_default();

        let delay = if options.delay.is_finite() {
            options.delay
        } else {
            tracing::warn!(delay = options.delay, "non-finite delay ignored");
            0.0
        };

        let mut overlay = Self {
            surface,
            script,
            scheduler: Scheduler::new(),
            render: AHashMap::new(),
            policy,
            script_res: resample::FALLBACK_VIEWPORT,
            resampled: resample::FALLBACK_VIEWPORT,
            stage: StageLayout::default(),
            delay,
            current_time: 0.0,
            last_tick: None,
            playing: false,
            visible: true,
        };
        overlay.resize();
        overlay
    }

    /// Create a session from raw compiled parts, validating the event
    /// ordering invariant on the way in.
    pub fn from_parts(
        surface: S,
        info: ScriptInfo,
        styles: StyleMap,
        events: Vec<Event>,
        options: &OverlayOptions,
    ) -> Result<Self, OverlayError> {
        let script = CompiledScript::new(info, styles, events)?;
        Ok(Self::new(surface, script, options))
    }

    /// Resume playback: owned clips start running and ticks are expected
    /// again from the driver.
    pub fn play(&mut self) {
        self.playing = true;
        self.last_tick = None;
        self.for_all_clips(ClipCommand::Play);
    }

    /// Pause playback: owned clips freeze at their current local time.
    pub fn pause(&mut self) {
        self.playing = false;
        self.for_all_clips(ClipCommand::Pause);
    }

    /// Advance the session to the reported media time. Returns whether
    /// the driver should schedule another tick.
    pub fn tick(&mut self, media_time: f64) -> TickOutcome {
        self.current_time = media_time;
        self.frame(media_time - self.delay);
        let outcome = if self.last_tick == Some(media_time) {
            TickOutcome::Idle
        } else {
            TickOutcome::Continue
        };
        self.last_tick = Some(media_time);
        outcome
    }

    /// Jump to a media time: all render state is rebuilt from scratch, so
    /// no mid-clip animation state survives the discontinuity.
    pub fn seek(&mut self, media_time: f64) {
        self.current_time = media_time;
        self.last_tick = None;
        let adjusted = media_time - self.delay;
        self.clear_actives(adjusted);
        self.frame(adjusted);
    }

    /// Re-measure the surface, recompute the resample state and rebuild
    /// every active event's geometry. Idempotent for unchanged inputs.
    pub fn resize(&mut self) {
        let metrics = self.surface.metrics();
        let info = self.script.info();
        let input = ResampleInput {
            script_res: self.script.play_res(),
            layout_res_x: info.layout_res_x,
            layout_res_y: info.layout_res_y,
            viewport: metrics.viewport,
            media: metrics.media,
            policy: self.policy,
            scaled_border_and_shadow: info.scales_border_and_shadow(),
        };
        match resample::compute(&input) {
            Some(output) => {
                self.script_res = output.script_res;
                self.resampled = output.resampled;
                self.stage = output.stage;
                self.surface.set_stage(&output.stage);
            }
            None => {
                tracing::warn!("resample produced no valid scale; keeping previous state");
            }
        }
        self.seek(self.current_time);
    }

    /// Set the subtitle delay in seconds (may be negative) and re-seek.
    /// Non-finite values are ignored.
    pub fn set_delay(&mut self, delay: f64) {
        if !delay.is_finite() {
            tracing::warn!(delay, "non-finite delay ignored");
            return;
        }
        self.delay = delay;
        self.seek(self.current_time);
    }

    /// Current subtitle delay in seconds
    #[must_use]
    pub fn delay(&self) -> f64 {
        self.delay
    }

    /// Switch the resampling policy by name. Unrecognized names are
    /// ignored; a changed policy triggers a full resize and re-seek.
    pub fn set_resampling(&mut self, value: &str) {
        let Some(policy) = Resampling::parse(value) else {
            tracing::warn!(value, "unrecognized resampling policy ignored");
            return;
        };
        if policy == self.policy {
            return;
        }
        self.policy = policy;
        self.resize();
    }

    /// Active resampling policy
    #[must_use]
    pub fn resampling(&self) -> Resampling {
        self.policy
    }

    /// Make the overlay visible. Scheduling is unaffected.
    pub fn show(&mut self) {
        self.visible = true;
        self.surface.set_visible(true);
    }

    /// Hide the overlay without touching scheduling state.
    pub fn hide(&mut self) {
        self.visible = false;
        self.surface.set_visible(false);
    }

    /// Tear the session down: cancel every clip, release all render
    /// state and hand the surface back to the caller.
    pub fn destroy(mut self) -> S {
        let keys: Vec<EventKey> = self.render.keys().copied().collect();
        for key in keys {
            self.release(key);
        }
        self.surface
    }

    /// Borrow the render surface
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutably borrow the render surface. Callers that change what
    /// `metrics()` reports must follow up with [`Overlay::resize`].
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Current uniform scale
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.stage.scale
    }

    /// Resolution after resampling
    #[must_use]
    pub fn resampled(&self) -> Resolution {
        self.resampled
    }

    /// Current stage layout
    #[must_use]
    pub fn stage(&self) -> &StageLayout {
        &self.stage
    }

    /// Active event indices in activation order
    #[must_use]
    pub fn actives(&self) -> &[usize] {
        self.scheduler.actives()
    }

    /// Next unexamined event index
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.scheduler.cursor()
    }

    /// Whether the session considers playback running
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the overlay is visible
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Placement of an active event, if it is on screen
    #[must_use]
    pub fn placement(&self, key: EventKey) -> Option<&Placement> {
        self.render.get(&key).map(|state| &state.placement)
    }

    fn layout_ctx(&self) -> LayoutContext {
        LayoutContext {
            scale: self.stage.scale,
            stage: self.stage.size,
            script_res: self.script_res,
        }
    }

    fn frame(&mut self, adjusted: f64) {
        let changes = self.scheduler.frame(self.script.events(), adjusted);
        for key in changes.expired {
            self.release(key);
        }
        for key in changes.activated {
            self.activate(key, adjusted);
        }
    }

    fn activate(&mut self, key: EventKey, adjusted: f64) {
        let ctx = self.layout_ctx();
        let event = &self.script.events()[key];
        if !self.script.has_style(&event.style) {
            tracing::debug!(style = %event.style, key, "unknown style, using default");
        }
        let style = self.script.style_or_default(&event.style);

        let flow = layout::flow(event, &ctx);
        let metrics = self.surface.mount(key, event, &flow);
        let placement = layout::place(event, style, metrics, &ctx);
        self.surface.place(key, &placement);

        let local_ms = (adjusted - event.start) * 1000.0;
        let mut handles: SmallVec<[ClipHandle; 4]> = SmallVec::new();
        for clip in build_clips(event, metrics, &ctx) {
            handles.push(self.surface.start_clip(key, &clip));
        }
        animation::align_to(&mut self.surface, &handles, local_ms);
        if self.playing {
            animation::batch(&mut self.surface, &handles, ClipCommand::Play);
        }

        self.render.insert(key, RenderState { placement, clips: handles });
    }

    fn release(&mut self, key: EventKey) {
        if let Some(state) = self.render.remove(&key) {
            animation::batch(&mut self.surface, &state.clips, ClipCommand::Cancel);
            self.surface.unmount(key);
        }
    }

    fn clear_actives(&mut self, adjusted: f64) {
        for key in self.scheduler.reset(self.script.events(), adjusted) {
            self.release(key);
        }
    }

    fn for_all_clips(&mut self, command: ClipCommand) {
        for state in self.render.values() {
            for &handle in &state.clips {
                self.surface.control_clip(handle, command);
            }
        }
    }
}
