//! Named visual styles referenced by events

use crate::types::Margin;
use ahash::AHashMap;

/// Styles by name. Events reference entries via [`crate::Event::style`];
/// a missing entry falls back to [`Style::default`] at render time.
pub type StyleMap = AHashMap<String, Style>;

/// Reusable visual defaults for events. Immutable after compile.
///
/// Colors are RGBA byte quadruples; the compiler is responsible for the
/// ASS `&HAABBGGRR&` decoding.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Style name as declared in the script
    pub name: String,
    /// Font family
    pub font_name: String,
    /// Font size in script pixels
    pub font_size: f32,
    /// Fill color
    pub primary_color: [u8; 4],
    /// Karaoke pre-highlight color
    pub secondary_color: [u8; 4],
    /// Border color
    pub outline_color: [u8; 4],
    /// Shadow / opaque-box color
    pub back_color: [u8; 4],
    /// Bold flag
    pub bold: bool,
    /// Italic flag
    pub italic: bool,
    /// Underline flag
    pub underline: bool,
    /// Strikeout flag
    pub strike_out: bool,
    /// Horizontal scale percentage (100 = unscaled)
    pub scale_x: f32,
    /// Vertical scale percentage (100 = unscaled)
    pub scale_y: f32,
    /// Extra letter spacing in script pixels
    pub spacing: f32,
    /// Z-axis rotation in degrees
    pub angle: f32,
    /// 1 = outline + shadow, 3 = opaque box
    pub border_style: u8,
    /// Outline width in script pixels
    pub outline: f32,
    /// Shadow offset in script pixels
    pub shadow: f32,
    /// Default numeric alignment code 1..=9
    pub alignment: u8,
    /// Default margins in script pixels
    pub margin: Margin,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            name: "Default".into(),
            font_name: "Arial".into(),
            font_size: 20.0,
            primary_color: [255, 255, 255, 255],
            secondary_color: [255, 0, 0, 255],
            outline_color: [0, 0, 0, 255],
            back_color: [0, 0, 0, 255],
            bold: false,
            italic: false,
            underline: false,
            strike_out: false,
            scale_x: 100.0,
            scale_y: 100.0,
            spacing: 0.0,
            angle: 0.0,
            border_style: 1,
            outline: 2.0,
            shadow: 0.0,
            alignment: 2,
            margin: Margin {
                left: 10.0,
                right: 10.0,
                top: 10.0,
                bottom: 10.0,
            },
        }
    }
}
