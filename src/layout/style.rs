use crate::assets::fonts::FontFamily;
use crate::foundation::core::Rgb;

/// Resolved text style for the header or the patron names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleSpec {
    /// Font size in pixels before resolution scaling; always `> 0`.
    pub size_px: u32,
    /// Text color.
    pub color: Rgb,
    /// Logical font family.
    pub font: FontFamily,
    /// Bold weight.
    pub bold: bool,
}

impl StyleSpec {
    /// Build a style, clamping the size to at least 1px.
    pub fn new(size_px: u32, color: Rgb, font: FontFamily, bold: bool) -> Self {
        Self {
            size_px: size_px.max(1),
            color,
            font,
            bold,
        }
    }

    /// Font size after applying the resolution scale factor.
    pub fn scaled_size(&self, scale: f32) -> f32 {
        (self.size_px as f32 * scale).floor().max(1.0)
    }
}

/// Per-line alignment of the header message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderAlign {
    /// Fixed left margin.
    #[default]
    Left,
    /// Centered in the usable width.
    Center,
    /// Flush against the right margin.
    Right,
    /// Equal word gaps spanning the usable width; the last line stays left aligned.
    Justify,
}

/// Horizontal placement of the whole name grid inside the frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameAlign {
    /// Grid starts at the left frame edge.
    #[default]
    Left,
    /// Grid centered in the frame.
    Center,
    /// Grid ends at the right frame edge.
    Right,
}

/// Scale a layout constant tuned for the 720p reference frame.
pub(crate) fn scaled_px(base: u32, scale: f32) -> u32 {
    (base as f32 * scale).floor().max(0.0) as u32
}
