use crate::assets::fonts::{FontFace, OutlineFont};
use crate::text::builtin;

/// Line box height as a multiple of the font size.
pub const LINE_SPACING_MULTIPLIER: f32 = 1.4;

/// Suffix appended to truncated names.
pub const ELLIPSIS: &str = "…";

/// Glyph id and pen position produced by shaping, relative to the text block's top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PlacedGlyph {
    pub(crate) id: u32,
    pub(crate) x: f32,
    pub(crate) y: f32,
}

/// One shaped run, ready for the rasterizer.
#[derive(Clone, Debug)]
pub(crate) struct GlyphRun {
    pub(crate) font_size: f32,
    pub(crate) glyphs: Vec<PlacedGlyph>,
}

/// A single line of text shaped for drawing.
#[derive(Clone)]
pub(crate) enum ShapedText {
    Outline {
        font: vello_cpu::peniko::FontData,
        runs: Vec<GlyphRun>,
        width: f32,
        height: f32,
    },
    Builtin {
        text: String,
        unit_px: f32,
        width: f32,
        height: f32,
    },
}

impl ShapedText {
    pub(crate) fn width(&self) -> f32 {
        match self {
            Self::Outline { width, .. } | Self::Builtin { width, .. } => *width,
        }
    }

    /// Ink box height used to center the text inside its line box.
    pub(crate) fn height(&self) -> f32 {
        match self {
            Self::Outline { height, .. } | Self::Builtin { height, .. } => *height,
        }
    }
}

struct ShapingEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family_name: String,
    font_data: vello_cpu::peniko::FontData,
}

impl ShapingEngine {
    fn new(font: &OutlineFont) -> Self {
        let mut font_ctx = parley::FontContext::default();
        font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(font.bytes.as_ref().clone()),
            None,
        );
        let font_data = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font.bytes.as_ref().clone()),
            0,
        );
        Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name: font.family_name.clone(),
            font_data,
        }
    }

    fn layout(&mut self, text: &str, size_px: f32) -> parley::Layout<()> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

fn layout_extent(layout: &parley::Layout<()>) -> (f32, f32) {
    let mut w = 0.0f32;
    let mut h = 0.0f32;
    for line in layout.lines() {
        let m = line.metrics();
        w = w.max(m.advance);
        h += m.ascent + m.descent + m.leading;
    }
    (w, h)
}

/// Measures, truncates and shapes text for one font face at one pixel size.
///
/// Each render request builds its own measurers; they hold parley contexts and are not shared.
pub struct TextMeasurer {
    face: FontFace,
    size_px: f32,
    engine: Option<ShapingEngine>,
}

impl std::fmt::Debug for TextMeasurer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextMeasurer")
            .field("face", &self.face)
            .field("size_px", &self.size_px)
            .finish()
    }
}

impl TextMeasurer {
    /// Create a measurer; non-finite or non-positive sizes are clamped to 1px.
    pub fn new(face: FontFace, size_px: f32) -> Self {
        let size_px = if size_px.is_finite() && size_px >= 1.0 {
            size_px
        } else {
            1.0
        };
        let engine = match &face {
            FontFace::Outline(font) => Some(ShapingEngine::new(font)),
            FontFace::Builtin => None,
        };
        Self {
            face,
            size_px,
            engine,
        }
    }

    /// Font size in pixels.
    pub fn size_px(&self) -> f32 {
        self.size_px
    }

    /// Face this measurer shapes with.
    pub fn face(&self) -> &FontFace {
        &self.face
    }

    /// Height of one line box in whole pixels.
    pub fn line_height(&self) -> u32 {
        ((self.size_px * LINE_SPACING_MULTIPLIER).floor() as u32).max(1)
    }

    /// Rendered advance width of `text` in pixels.
    pub fn width(&mut self, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        match self.engine.as_mut() {
            Some(engine) => layout_extent(&engine.layout(text, self.size_px)).0,
            None => builtin::advance(text, self.size_px),
        }
    }

    /// Shorten `text` until it fits `max_width_px`, appending an ellipsis when anything was cut.
    ///
    /// Returns the empty string when not even the ellipsis fits.
    pub fn truncate(&mut self, text: &str, max_width_px: f32) -> String {
        if self.width(text) <= max_width_px {
            return text.to_owned();
        }
        if self.width(ELLIPSIS) > max_width_px {
            return String::new();
        }

        let mut chars: Vec<char> = text.chars().collect();
        while chars.pop().is_some() {
            let mut candidate: String = chars.iter().collect();
            candidate.truncate(candidate.trim_end().len());
            candidate.push_str(ELLIPSIS);
            if self.width(&candidate) <= max_width_px {
                return candidate;
            }
        }
        ELLIPSIS.to_owned()
    }

    pub(crate) fn shape(&mut self, text: &str) -> ShapedText {
        let size_px = self.size_px;
        match self.engine.as_mut() {
            Some(engine) => {
                let layout = engine.layout(text, size_px);
                let (width, height) = layout_extent(&layout);
                let mut runs = Vec::new();
                for line in layout.lines() {
                    for item in line.items() {
                        let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                            continue;
                        };
                        runs.push(GlyphRun {
                            font_size: run.run().font_size(),
                            glyphs: run
                                .glyphs()
                                .map(|g| PlacedGlyph {
                                    id: g.id,
                                    x: g.x,
                                    y: g.y,
                                })
                                .collect(),
                        });
                    }
                }
                ShapedText::Outline {
                    font: engine.font_data.clone(),
                    runs,
                    width,
                    height,
                }
            }
            None => {
                let unit_px = builtin::unit_px(size_px);
                ShapedText::Builtin {
                    text: text.to_owned(),
                    unit_px,
                    width: builtin::advance(text, size_px),
                    height: builtin::GLYPH_ROWS as f32 * unit_px,
                }
            }
        }
    }
}

/// Split `text` into lines of at most `max_chars` characters.
///
/// Breaks at the last space at or before the limit; a word with no usable space is broken with
/// a trailing hyphen. Runs of spaces at a break are consumed and lines carry no leading or
/// trailing spaces. `max_chars == 0` means unlimited.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    if max_chars == 0 {
        return vec![text.to_owned()];
    }

    let mut rest: Vec<char> = text.trim_matches(' ').chars().collect();
    let mut lines = Vec::new();
    while rest.len() > max_chars {
        let space = rest[..=max_chars]
            .iter()
            .rposition(|c| *c == ' ')
            .filter(|&i| i > 0);
        match space {
            Some(i) => {
                let line: String = rest[..i].iter().collect();
                lines.push(line.trim_end_matches(' ').to_owned());
                rest.drain(..=i);
                let lead = rest.iter().take_while(|c| **c == ' ').count();
                rest.drain(..lead);
            }
            None => {
                let take = max_chars.saturating_sub(1).max(1);
                let mut line: String = rest[..take].iter().collect();
                line.push('-');
                lines.push(line);
                rest.drain(..take);
            }
        }
    }
    if !rest.is_empty() || lines.is_empty() {
        lines.push(rest.into_iter().collect());
    }
    lines
}

/// Keep the first `max_chars` characters of `text` and mark the cut with an ellipsis.
///
/// Names at or under the limit (or `max_chars == 0`) are returned unchanged.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if max_chars == 0 || text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let kept: String = text.chars().take(max_chars).collect();
    format!("{}{ELLIPSIS}", kept.trim_end())
}

#[cfg(test)]
#[path = "../../tests/unit/text/measure.rs"]
mod tests;
