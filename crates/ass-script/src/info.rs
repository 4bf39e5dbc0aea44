//! Script-level metadata from the `[Script Info]` section

use crate::types::Resolution;

/// Compiled `[Script Info]` fields the overlay engine consumes.
///
/// Resolutions are optional: the engine resolves missing axes through its
/// default chain (layout -> media -> viewport -> fixed fallback).
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptInfo {
    /// Raw `ScaledBorderAndShadow` value, if present
    pub scaled_border_and_shadow: Option<String>,
    /// `PlayResX` in pixels
    pub play_res_x: Option<f32>,
    /// `PlayResY` in pixels
    pub play_res_y: Option<f32>,
    /// `LayoutResX` in pixels (libass 0.17+)
    pub layout_res_x: Option<f32>,
    /// `LayoutResY` in pixels (libass 0.17+)
    pub layout_res_y: Option<f32>,
    /// `WrapStyle` 0..=3
    pub wrap_style: Option<u8>,
}

impl ScriptInfo {
    /// Whether borders and shadows scale with the play resolution.
    /// Matches any value containing "yes", case-insensitively.
    #[must_use]
    pub fn scales_border_and_shadow(&self) -> bool {
        self.scaled_border_and_shadow
            .as_deref()
            .is_some_and(|v| v.to_ascii_lowercase().contains("yes"))
    }

    /// Authored script resolution, when both axes are present
    #[must_use]
    pub fn play_res(&self) -> Option<Resolution> {
        match (self.play_res_x, self.play_res_y) {
            (Some(w), Some(h)) => Some(Resolution::new(w, h)),
            _ => None,
        }
    }
}
