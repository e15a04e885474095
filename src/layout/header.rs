//! Header message layout: one line box per `\n`-separated line, aligned inside fixed margins.

use crate::assets::fonts::FontFace;
use crate::foundation::core::Rgb;
use crate::foundation::error::CreditsResult;
use crate::layout::style::{HeaderAlign, StyleSpec, scaled_px};
use crate::render::cpu;
use crate::render::display_list::DisplayList;
use crate::render::raster::RasterImage;
use crate::text::measure::TextMeasurer;

/// Vertical padding above and below the header lines at 720p.
pub const HEADER_PADDING_PX: u32 = 30;
/// Left and right margin of the header text at 720p.
pub const HEADER_MARGIN_PX: u32 = 50;

/// Everything the header renderer needs besides the resolved font.
#[derive(Clone, Debug)]
pub struct HeaderParams<'a> {
    /// Message text; `\n` starts a new line.
    pub message: &'a str,
    /// Frame width in pixels.
    pub width: u32,
    /// Text style before scaling.
    pub style: StyleSpec,
    /// Line alignment.
    pub align: HeaderAlign,
    /// Fill color behind the text.
    pub background: Rgb,
    /// Resolution scale factor (`frame_height / 720`).
    pub scale: f32,
}

/// A word (or whole line) with its horizontal position.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedWord {
    /// Text drawn at this position.
    pub text: String,
    /// Left edge in pixels.
    pub x: f32,
    /// Measured width in pixels.
    pub width: f32,
}

/// One header line box.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderLine {
    /// Top of the line box in pixels.
    pub top: u32,
    /// Pieces drawn on this line; empty for blank lines.
    pub words: Vec<PlacedWord>,
}

/// Computed header geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderLayout {
    /// Image width (equals the frame width).
    pub width: u32,
    /// `lines * line_height + 2 * padding`.
    pub height: u32,
    /// Scaled vertical padding.
    pub padding: u32,
    /// Scaled horizontal margin.
    pub margin: u32,
    /// Line box height.
    pub line_height: u32,
    /// Laid out lines, top to bottom.
    pub lines: Vec<HeaderLine>,
}

impl HeaderLayout {
    /// Width available to text between the margins.
    pub fn usable_width(&self) -> u32 {
        self.width.saturating_sub(2 * self.margin)
    }
}

/// The rendered header: an opaque image plus the geometry it was drawn from.
#[derive(Clone, Debug)]
pub struct HeaderBlock {
    /// Opaque image filled with the background color.
    pub image: RasterImage,
    /// Geometry used to draw the image.
    pub layout: HeaderLayout,
}

impl HeaderBlock {
    /// Header height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Lay out `message` without rasterizing it.
pub fn layout_header(
    message: &str,
    width: u32,
    align: HeaderAlign,
    scale: f32,
    measurer: &mut TextMeasurer,
) -> HeaderLayout {
    let padding = scaled_px(HEADER_PADDING_PX, scale);
    let margin = scaled_px(HEADER_MARGIN_PX, scale);
    let line_height = measurer.line_height();
    let usable = width.saturating_sub(2 * margin) as f32;
    let left = margin as f32;

    let raw_lines: Vec<&str> = message.split('\n').collect();
    // Trailing blank lines do not count; the last line with text is never justified.
    let last = raw_lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .unwrap_or(0);
    let mut lines = Vec::with_capacity(raw_lines.len());
    for (i, raw) in raw_lines.iter().enumerate() {
        let top = padding + i as u32 * line_height;
        let words = match align {
            HeaderAlign::Justify if i < last => justify_line(raw, left, usable, measurer),
            _ => place_line(raw, align, left, usable, measurer),
        };
        lines.push(HeaderLine { top, words });
    }

    HeaderLayout {
        width,
        height: lines.len() as u32 * line_height + 2 * padding,
        padding,
        margin,
        line_height,
        lines,
    }
}

fn place_line(
    line: &str,
    align: HeaderAlign,
    left: f32,
    usable: f32,
    measurer: &mut TextMeasurer,
) -> Vec<PlacedWord> {
    let text = line.trim_end();
    if text.is_empty() {
        return Vec::new();
    }
    let width = measurer.width(text);
    let x = match align {
        HeaderAlign::Left | HeaderAlign::Justify => left,
        HeaderAlign::Center => left + (usable - width) / 2.0,
        HeaderAlign::Right => left + usable - width,
    };
    vec![PlacedWord {
        text: text.to_owned(),
        x: x.max(0.0),
        width,
    }]
}

fn justify_line(
    line: &str,
    left: f32,
    usable: f32,
    measurer: &mut TextMeasurer,
) -> Vec<PlacedWord> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() < 2 {
        return place_line(line, HeaderAlign::Left, left, usable, measurer);
    }
    let widths: Vec<f32> = words.iter().map(|w| measurer.width(w)).collect();
    let total: f32 = widths.iter().sum();
    if total > usable {
        // Words alone overflow; keep natural spacing instead of overlapping them.
        return place_line(line, HeaderAlign::Left, left, usable, measurer);
    }

    let gap = (usable - total) / (words.len() - 1) as f32;
    let mut x = left;
    words
        .into_iter()
        .zip(widths)
        .map(|(word, width)| {
            let placed = PlacedWord {
                text: word.to_owned(),
                x,
                width,
            };
            x += width + gap;
            placed
        })
        .collect()
}

/// Lay out and rasterize the header message.
#[tracing::instrument(skip(params, face), fields(width = params.width, align = ?params.align))]
pub fn render_header(params: &HeaderParams<'_>, face: FontFace) -> CreditsResult<HeaderBlock> {
    let mut measurer = TextMeasurer::new(face, params.style.scaled_size(params.scale));
    let layout = layout_header(
        params.message,
        params.width,
        params.align,
        params.scale,
        &mut measurer,
    );

    let mut list = DisplayList::new(layout.width, layout.height, Some(params.background));
    let lh = layout.line_height as f32;
    for line in &layout.lines {
        for word in &line.words {
            let shaped = measurer.shape(&word.text);
            let y = line.top as f32 + (lh - shaped.height()) / 2.0;
            list.text(
                shaped,
                f64::from(word.x),
                f64::from(y),
                params.style.color,
            );
        }
    }
    if params.style.bold && matches!(measurer.face(), FontFace::Builtin) {
        list.double_strike(1.0);
    }

    let image = cpu::rasterize(&list)?;
    tracing::debug!(height = layout.height, lines = layout.lines.len(), "header rendered");
    Ok(HeaderBlock { image, layout })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/header.rs"]
mod tests;
