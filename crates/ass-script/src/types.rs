//! Small geometric primitives shared across the script model and the engine

/// A width/height pair in pixels. Fractional values are legal: resampling
/// routinely produces resolutions such as 853.33x480.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Resolution {
    /// Create a resolution from a width/height pair
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether both axes are finite and strictly positive
    #[must_use]
    pub fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0
    }
}

/// A point in script-resolution coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
}

impl Point {
    /// Create a point
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Per-event margins in script-resolution pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margin {
    /// Left margin
    pub left: f32,
    /// Right margin
    pub right: f32,
    /// Top margin, used by top-anchored rows
    pub top: f32,
    /// Bottom margin, used by bottom-anchored rows
    pub bottom: f32,
}

/// Alignment decomposed into horizontal and vertical components.
///
/// Numeric ASS alignment codes 1..=9 map onto a 3x3 grid:
/// `h = (code + 2) % 3` (0 = left, 1 = center, 2 = right) and
/// `v = (code - 1) / 3` (0 = bottom, 1 = center, 2 = top). The components
/// are kept as indices so layout can select from per-axis candidate
/// tables directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    /// Horizontal component: 0 = left, 1 = center, 2 = right
    pub h: usize,
    /// Vertical component: 0 = bottom, 1 = center, 2 = top
    pub v: usize,
}

impl Alignment {
    /// Decompose a numeric alignment code. Out-of-range codes clamp to the
    /// default bottom-center (2).
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        let code = if matches!(code, 1..=9) { code } else { 2 };
        Self {
            h: ((code + 2) % 3) as usize,
            v: ((code - 1) / 3) as usize,
        }
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::from_code(2)
    }
}
