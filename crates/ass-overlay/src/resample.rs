//! Resolution resampling: reconciles the script's authored resolution
//! with the display surface under four selectable policies

use ass_script::Resolution;

/// Fallback viewport used when the surface is not yet measurable
pub const FALLBACK_VIEWPORT: Resolution = Resolution::new(640.0, 360.0);

/// Resampling policy selecting how script resolution maps to the surface.
///
/// With a 1280x720 video and a 640x480 script:
/// - `VideoWidth`: resolution becomes 640x360, scale 2
/// - `VideoHeight` (default): resolution becomes 853.33x480, scale 1.5
/// - `ScriptWidth`: resolution unchanged, scale 2; top/bottom rows may
///   leave the video area
/// - `ScriptHeight`: resolution unchanged, scale 1.5; the script area is
///   centered in the video area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resampling {
    /// Rescale the script to the video, preserving the script width
    VideoWidth,
    /// Rescale the script to the video, preserving the script height
    #[default]
    VideoHeight,
    /// Keep the script resolution; scale from the width ratio
    ScriptWidth,
    /// Keep the script resolution; scale from the height ratio
    ScriptHeight,
}

impl Resampling {
    /// Parse a policy name. Returns `None` for anything but the four
    /// recognized values, so callers can retain their previous policy.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "video_width" => Some(Self::VideoWidth),
            "video_height" => Some(Self::VideoHeight),
            "script_width" => Some(Self::ScriptWidth),
            "script_height" => Some(Self::ScriptHeight),
            _ => None,
        }
    }

    /// Canonical policy name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VideoWidth => "video_width",
            Self::VideoHeight => "video_height",
            Self::ScriptWidth => "script_width",
            Self::ScriptHeight => "script_height",
        }
    }
}

/// Inputs to a resample pass, sampled from the script and the surface
#[derive(Debug, Clone, Copy)]
pub struct ResampleInput {
    /// Authored script resolution (`PlayResX`/`PlayResY`), if declared
    pub script_res: Option<Resolution>,
    /// Authored layout axes (`LayoutResX`/`LayoutResY`), if declared
    pub layout_res_x: Option<f32>,
    /// See `layout_res_x`
    pub layout_res_y: Option<f32>,
    /// Surface client size
    pub viewport: Resolution,
    /// Media natural size, when a video is attached
    pub media: Option<Resolution>,
    /// Active policy
    pub policy: Resampling,
    /// `ScaledBorderAndShadow`
    pub scaled_border_and_shadow: bool,
}

/// Derived overlay box geometry handed to the render surface
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageLayout {
    /// Overlay box size in surface pixels (`scale * resampled`)
    pub size: Resolution,
    /// Box offset from the surface left edge, centering it
    pub left: f32,
    /// Box offset from the surface top edge
    pub top: f32,
    /// Uniform script-to-surface scale
    pub scale: f32,
    /// Border/shadow scale: equals `scale` under ScaledBorderAndShadow,
    /// 1 otherwise
    pub stroke_scale: f32,
    /// Anisotropic pixel-aspect correction applied to the whole box
    pub scale_x: f32,
    /// See `scale_x`
    pub scale_y: f32,
}

impl Default for StageLayout {
    fn default() -> Self {
        Self {
            size: FALLBACK_VIEWPORT,
            left: 0.0,
            top: 0.0,
            scale: 1.0,
            stroke_scale: 1.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

/// Result of a resample pass
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResampleOutput {
    /// Script resolution after the default chain resolved missing axes
    pub script_res: Resolution,
    /// Resolution after applying the policy
    pub resampled: Resolution,
    /// Uniform scale; always finite and positive
    pub scale: f32,
    /// Overlay box placement derived from the scale
    pub stage: StageLayout,
}

/// Compute the resampled resolution, scale and stage layout.
///
/// Unmeasurable viewport axes fall back to [`FALLBACK_VIEWPORT`] before
/// any division. Returns `None` when the computed scale is still not
/// finite and positive, letting the session retain its last valid state.
#[must_use]
pub fn compute(input: &ResampleInput) -> Option<ResampleOutput> {
    let cw = measurable_or(input.viewport.width, FALLBACK_VIEWPORT.width);
    let ch = measurable_or(input.viewport.height, FALLBACK_VIEWPORT.height);

    // Layout resolution default chain: authored -> media -> viewport
    let (vw, vh) = input.media.map_or((cw, ch), |m| {
        (
            measurable_or(m.width, cw),
            measurable_or(m.height, ch),
        )
    });
    let lw = input.layout_res_x.filter(|w| *w > 0.0).unwrap_or(vw);
    let lh = input.layout_res_y.filter(|h| *h > 0.0).unwrap_or(vh);

    // Script resolution defaults to the layout resolution
    let (sw, sh) = input.script_res.map_or((lw, lh), |s| {
        (
            measurable_or(s.width, lw),
            measurable_or(s.height, lh),
        )
    });

    let video_scale = (cw / lw).min(ch / lh);

    let mut rw = sw;
    let mut rh = sh;
    match input.policy {
        Resampling::VideoWidth => rh = sw / lw * lh,
        Resampling::VideoHeight => rw = sh / lh * lw,
        Resampling::ScriptWidth | Resampling::ScriptHeight => {}
    }

    let scale = match input.policy {
        Resampling::ScriptWidth => video_scale * lw / rw,
        Resampling::ScriptHeight => video_scale * lh / rh,
        _ => (cw / rw).min(ch / rh),
    };
    if !scale.is_finite() || scale <= 0.0 {
        return None;
    }

    let size = Resolution::new(scale * rw, scale * rh);
    let par = (vw / lw) / (vh / lh);
    let (scale_x, scale_y) = if par > 1.0 {
        (par, 1.0)
    } else if par < 1.0 {
        (1.0, 1.0 / par)
    } else {
        (1.0, 1.0)
    };

    Some(ResampleOutput {
        script_res: Resolution::new(sw, sh),
        resampled: Resolution::new(rw, rh),
        scale,
        stage: StageLayout {
            size,
            left: (cw - size.width) / 2.0,
            top: (ch - size.height) / 2.0,
            scale,
            stroke_scale: if input.scaled_border_and_shadow {
                scale
            } else {
                1.0
            },
            scale_x,
            scale_y,
        },
    })
}

fn measurable_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn input(policy: Resampling) -> ResampleInput {
        ResampleInput {
            script_res: Some(Resolution::new(640.0, 480.0)),
            layout_res_x: None,
            layout_res_y: None,
            viewport: Resolution::new(1280.0, 720.0),
            media: Some(Resolution::new(1280.0, 720.0)),
            policy,
            scaled_border_and_shadow: true,
        }
    }

    #[test]
    fn video_height_rederives_width() {
        let out = compute(&input(Resampling::VideoHeight)).expect("valid");
        assert!((out.resampled.width - 853.333_3).abs() < 0.01);
        assert_eq!(out.resampled.height, 480.0);
        assert_eq!(out.scale, 1.5);
    }

    #[test]
    fn video_width_rederives_height() {
        let out = compute(&input(Resampling::VideoWidth)).expect("valid");
        assert_eq!(out.resampled, Resolution::new(640.0, 360.0));
        assert_eq!(out.scale, 2.0);
    }

    #[test]
    fn script_policies_keep_resolution() {
        let out = compute(&input(Resampling::ScriptWidth)).expect("valid");
        assert_eq!(out.resampled, Resolution::new(640.0, 480.0));
        assert_eq!(out.scale, 2.0);

        let out = compute(&input(Resampling::ScriptHeight)).expect("valid");
        assert_eq!(out.resampled, Resolution::new(640.0, 480.0));
        assert_eq!(out.scale, 1.5);
    }

    #[test]
    fn golden_matrix_across_viewports() {
        // (policy, viewport, expected resampled, expected scale)
        let cases = [
            (
                Resampling::VideoHeight,
                Resolution::new(1920.0, 1080.0),
                Resolution::new(853.333_3, 480.0),
                2.25,
            ),
            (
                Resampling::VideoWidth,
                Resolution::new(1920.0, 1080.0),
                Resolution::new(640.0, 360.0),
                3.0,
            ),
            (
                Resampling::ScriptWidth,
                Resolution::new(1920.0, 1080.0),
                Resolution::new(640.0, 480.0),
                3.0,
            ),
            (
                Resampling::ScriptHeight,
                Resolution::new(1920.0, 1080.0),
                Resolution::new(640.0, 480.0),
                2.25,
            ),
        ];
        for (policy, viewport, resampled, scale) in cases {
            let mut i = input(policy);
            i.viewport = viewport;
            let out = compute(&i).expect("valid");
            assert!(
                (out.resampled.width - resampled.width).abs() < 0.01
                    && (out.resampled.height - resampled.height).abs() < 0.01,
                "{policy:?} resolution"
            );
            assert!((out.scale - scale).abs() < 1e-6, "{policy:?} scale");
        }
    }

    #[test]
    fn stage_is_centered_box() {
        let out = compute(&input(Resampling::VideoHeight)).expect("valid");
        // 1.5 * 853.33 = 1280, 1.5 * 480 = 720: box fills the viewport
        assert!((out.stage.size.width - 1280.0).abs() < 0.01);
        assert_eq!(out.stage.size.height, 720.0);
        assert!(out.stage.left.abs() < 0.01);
        assert_eq!(out.stage.top, 0.0);
        assert_eq!(out.stage.stroke_scale, out.scale);
    }

    #[test]
    fn script_height_centers_narrow_script() {
        let out = compute(&input(Resampling::ScriptHeight)).expect("valid");
        // 1.5 * 640 = 960 wide in a 1280 viewport
        assert_eq!(out.stage.size, Resolution::new(960.0, 720.0));
        assert_eq!(out.stage.left, 160.0);
        assert_eq!(out.stage.top, 0.0);
    }

    #[test]
    fn unmeasurable_viewport_uses_fallback() {
        let mut i = input(Resampling::VideoHeight);
        i.viewport = Resolution::new(0.0, 0.0);
        i.media = None;
        let out = compute(&i).expect("fallback path");
        assert!(out.scale.is_finite() && out.scale > 0.0);
        // 640x360 fallback against a 640x480 script, height-resampled
        assert_eq!(out.resampled.height, 480.0);
    }

    #[test]
    fn anamorphic_media_sets_par_correction() {
        let mut i = input(Resampling::VideoHeight);
        // Layout says 4:3 but the media is 16:9: stretch horizontally
        i.layout_res_x = Some(960.0);
        i.layout_res_y = Some(720.0);
        let out = compute(&i).expect("valid");
        assert!(out.stage.scale_x > 1.0);
        assert_eq!(out.stage.scale_y, 1.0);
    }

    #[test]
    fn policy_parsing_is_strict() {
        assert_eq!(Resampling::parse("video_width"), Some(Resampling::VideoWidth));
        assert_eq!(Resampling::parse("script_height"), Some(Resampling::ScriptHeight));
        assert_eq!(Resampling::parse("Video_Width"), None);
        assert_eq!(Resampling::parse(""), None);
        assert_eq!(Resampling::parse("video_height ").map(Resampling::as_str), None);
    }

    #[test]
    fn sbas_off_pins_stroke_scale() {
        let mut i = input(Resampling::VideoHeight);
        i.scaled_border_and_shadow = false;
        let out = compute(&i).expect("valid");
        assert_eq!(out.stage.stroke_scale, 1.0);
    }
}
