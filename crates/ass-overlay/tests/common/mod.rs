//! Test surface recording every command the engine issues

use ass_overlay::{
    AnimationClip, BoxMetrics, ClipCommand, ClipHandle, EventKey, FlowSpec, Placement,
    RenderSurface, StageLayout, SurfaceMetrics,
};
use ass_script::{Event, Resolution};
use std::collections::{BTreeMap, BTreeSet};

/// Records mounts, placements and clip commands instead of painting
pub struct MockSurface {
    pub viewport: Resolution,
    pub media: Option<Resolution>,
    pub box_size: BoxMetrics,
    pub mounted: BTreeSet<EventKey>,
    pub mount_log: Vec<EventKey>,
    pub placements: BTreeMap<EventKey, Placement>,
    pub stage: Option<StageLayout>,
    pub visible: bool,
    pub live_clips: BTreeMap<u64, EventKey>,
    pub scrubs: Vec<(u64, f64)>,
    pub playing_clips: BTreeSet<u64>,
    next_clip: u64,
}

impl MockSurface {
    pub fn new(viewport: Resolution, media: Option<Resolution>) -> Self {
        Self {
            viewport,
            media,
            box_size: BoxMetrics {
                width: 200.0,
                height: 50.0,
            },
            mounted: BTreeSet::new(),
            mount_log: Vec::new(),
            placements: BTreeMap::new(),
            stage: None,
            visible: true,
            live_clips: BTreeMap::new(),
            scrubs: Vec::new(),
            playing_clips: BTreeSet::new(),
            next_clip: 0,
        }
    }

}

impl RenderSurface for MockSurface {
    fn metrics(&self) -> SurfaceMetrics {
        SurfaceMetrics {
            viewport: self.viewport,
            media: self.media,
        }
    }

    fn mount(&mut self, key: EventKey, _event: &Event, _flow: &FlowSpec) -> BoxMetrics {
        assert!(self.mounted.insert(key), "event {key} mounted twice");
        self.mount_log.push(key);
        self.box_size
    }

    fn place(&mut self, key: EventKey, placement: &Placement) {
        assert!(self.mounted.contains(&key), "placing unmounted event {key}");
        self.placements.insert(key, placement.clone());
    }

    fn unmount(&mut self, key: EventKey) {
        assert!(self.mounted.remove(&key), "unmounting unknown event {key}");
        self.placements.remove(&key);
        assert!(
            !self.live_clips.values().any(|&owner| owner == key),
            "event {key} unmounted with live clips"
        );
    }

    fn set_stage(&mut self, stage: &StageLayout) {
        self.stage = Some(*stage);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn start_clip(&mut self, key: EventKey, _clip: &AnimationClip) -> ClipHandle {
        let id = self.next_clip;
        self.next_clip += 1;
        self.live_clips.insert(id, key);
        ClipHandle(id)
    }

    fn control_clip(&mut self, handle: ClipHandle, command: ClipCommand) {
        assert!(
            self.live_clips.contains_key(&handle.0),
            "command for dead clip {}",
            handle.0
        );
        match command {
            ClipCommand::Scrub { at_ms } => {
                self.scrubs.push((handle.0, at_ms));
                self.playing_clips.remove(&handle.0);
            }
            ClipCommand::Play => {
                self.playing_clips.insert(handle.0);
            }
            ClipCommand::Pause => {
                self.playing_clips.remove(&handle.0);
            }
            ClipCommand::Cancel => {
                self.live_clips.remove(&handle.0);
                self.playing_clips.remove(&handle.0);
            }
        }
    }
}
