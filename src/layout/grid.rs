//! Patron name grid: per-name entries, column sizing, row packing and separators.

use crate::assets::fonts::FontFace;
use crate::foundation::core::{Rect, Rgb};
use crate::foundation::error::CreditsResult;
use crate::layout::style::{NameAlign, StyleSpec, scaled_px};
use crate::render::cpu;
use crate::render::display_list::DisplayList;
use crate::render::raster::RasterImage;
use crate::text::measure::{TextMeasurer, truncate_chars, wrap};

/// Horizontal padding on each side of a column at 720p.
pub const COLUMN_PADDING_PX: u32 = 20;
/// Upper bound for [`LayoutConfig::columns`].
pub const MAX_COLUMNS: u32 = 5;
/// Upper bound for [`LayoutConfig::truncate_length`].
pub const MAX_TRUNCATE_LENGTH: usize = 50;

/// Grid options. Construct with [`LayoutConfig::new`] to get the clamps applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Columns per row, `1..=5`.
    pub columns: u32,
    /// Placement of the whole grid inside the frame.
    pub name_align: NameAlign,
    /// Character limit per name (or per wrapped line); `0` means unlimited.
    pub truncate_length: usize,
    /// Wrap long names onto several lines instead of truncating them.
    pub word_wrap: bool,
    /// Extra gap with a separator line between rows.
    pub row_spacing: bool,
    /// Frame background; the patron raster itself stays transparent.
    pub background: Rgb,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: 4,
            name_align: NameAlign::Left,
            truncate_length: 15,
            word_wrap: false,
            row_spacing: false,
            background: Rgb::BLACK,
        }
    }
}

impl LayoutConfig {
    /// Build a config, clamping `columns` to `1..=5` and `truncate_length` to `0..=50`.
    pub fn new(
        columns: u32,
        name_align: NameAlign,
        truncate_length: usize,
        word_wrap: bool,
        row_spacing: bool,
        background: Rgb,
    ) -> Self {
        Self {
            columns,
            name_align,
            truncate_length,
            word_wrap,
            row_spacing,
            background,
        }
        .clamped()
    }

    /// Same config with every field forced into its valid range.
    pub fn clamped(mut self) -> Self {
        self.columns = self.columns.clamp(1, MAX_COLUMNS);
        self.truncate_length = self.truncate_length.min(MAX_TRUNCATE_LENGTH);
        self
    }
}

/// Display lines derived from one patron name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameEntry {
    /// Never empty.
    pub lines: Vec<String>,
}

impl NameEntry {
    /// Apply wrapping or character truncation to `name`.
    pub fn from_name(name: &str, config: &LayoutConfig) -> Self {
        let limit = config.truncate_length;
        let lines = if config.word_wrap && limit > 0 {
            wrap(name, limit)
        } else {
            vec![truncate_chars(name, limit)]
        };
        Self { lines }
    }
}

/// Entries for `names`, in input order.
pub fn build_entries<S: AsRef<str>>(names: &[S], config: &LayoutConfig) -> Vec<NameEntry> {
    names
        .iter()
        .map(|n| NameEntry::from_name(n.as_ref(), config))
        .collect()
}

/// One drawn line of a grid cell.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLine {
    /// Text after any pixel truncation.
    pub text: String,
    /// Left edge in pixels.
    pub x: f32,
    /// Top of the line box in pixels.
    pub top: u32,
    /// Measured width in pixels.
    pub width: f32,
}

/// A name placed in the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GridCell {
    /// Input index of the name.
    pub index: usize,
    /// Column within the row.
    pub column: u32,
    /// Lines of the entry, top to bottom.
    pub lines: Vec<PlacedLine>,
}

/// One grid row.
#[derive(Clone, Debug, PartialEq)]
pub struct GridRow {
    /// Top of the row content (below any gap).
    pub top: u32,
    /// Content height: max lines in the row times the line height.
    pub height: u32,
    /// Cells left to right.
    pub cells: Vec<GridCell>,
}

/// Computed grid geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    /// Image width (equals the frame width).
    pub width: u32,
    /// Total height including gaps, at least 1.
    pub height: u32,
    /// Column count after clamping.
    pub columns: u32,
    /// Width of every column, padding included.
    pub column_width: u32,
    /// Scaled horizontal padding on each side of a column.
    pub column_padding: u32,
    /// Left edge of the first column.
    pub block_x: u32,
    /// Line box height.
    pub line_height: u32,
    /// Gap inserted above every row but the first.
    pub row_gap: u32,
    /// Rows top to bottom.
    pub rows: Vec<GridRow>,
    /// Separator rectangles between rows.
    pub separators: Vec<Rect>,
}

impl GridLayout {
    /// Width available to text inside a column.
    pub fn content_width(&self) -> u32 {
        self.column_width.saturating_sub(2 * self.column_padding)
    }
}

/// Arrange `entries` into rows of `config.columns` cells.
pub fn layout_grid(
    entries: &[NameEntry],
    frame_width: u32,
    config: &LayoutConfig,
    scale: f32,
    measurer: &mut TextMeasurer,
) -> GridLayout {
    let config = config.clamped();
    let columns = config.columns;
    let line_height = measurer.line_height();
    let padding = scaled_px(COLUMN_PADDING_PX, scale);

    let widest = entries
        .iter()
        .flat_map(|e| e.lines.iter())
        .map(|l| measurer.width(l))
        .fold(0.0f32, f32::max);
    let natural = widest.ceil() as u32 + 2 * padding;
    let cap = frame_width / columns;
    let column_width = natural.min(cap);
    let content_width = column_width.saturating_sub(2 * padding) as f32;
    if natural > cap {
        tracing::debug!(natural, cap, "column width capped; truncating wide names");
    }

    let block_width = column_width * columns;
    let block_x = match config.name_align {
        NameAlign::Left => 0,
        NameAlign::Center => frame_width.saturating_sub(block_width) / 2,
        NameAlign::Right => frame_width.saturating_sub(block_width),
    };

    let row_gap = if config.row_spacing {
        2 * line_height
    } else if config.word_wrap {
        line_height
    } else {
        0
    };
    let thickness = (scale.floor() as u32).max(1);

    let mut rows = Vec::new();
    let mut separators = Vec::new();
    let mut y = 0u32;
    for (r, chunk) in entries.chunks(columns as usize).enumerate() {
        if r > 0 {
            if config.row_spacing && content_width > 0.0 {
                let sep_y = (y + row_gap / 2).saturating_sub(thickness / 2);
                for c in 0..columns {
                    let col_x = block_x + c * column_width;
                    separators.push(Rect::new(
                        f64::from(col_x + padding),
                        f64::from(sep_y),
                        f64::from(col_x + column_width - padding),
                        f64::from(sep_y + thickness),
                    ));
                }
            }
            y += row_gap;
        }

        let max_lines = chunk.iter().map(|e| e.lines.len()).max().unwrap_or(1) as u32;
        let row_height = max_lines * line_height;
        let mut cells = Vec::with_capacity(chunk.len());
        for (c, entry) in chunk.iter().enumerate() {
            let column = c as u32;
            let col_x = (block_x + column * column_width) as f32;
            let entry_top = y + (row_height - entry.lines.len() as u32 * line_height) / 2;
            let lines = entry
                .lines
                .iter()
                .enumerate()
                .map(|(k, raw)| {
                    let mut width = measurer.width(raw);
                    let text = if width > content_width {
                        let cut = measurer.truncate(raw, content_width);
                        width = measurer.width(&cut);
                        cut
                    } else {
                        raw.clone()
                    };
                    PlacedLine {
                        text,
                        x: col_x + (column_width as f32 - width) / 2.0,
                        top: entry_top + k as u32 * line_height,
                        width,
                    }
                })
                .collect();
            cells.push(GridCell {
                index: r * columns as usize + c,
                column,
                lines,
            });
        }
        rows.push(GridRow {
            top: y,
            height: row_height,
            cells,
        });
        y += row_height;
    }

    GridLayout {
        width: frame_width,
        height: y.max(1),
        columns,
        column_width,
        column_padding: padding,
        block_x,
        line_height,
        row_gap,
        rows,
        separators,
    }
}

/// Inputs of the patron grid renderer besides the resolved font.
#[derive(Clone, Debug)]
pub struct PatronGridParams<'a, S: AsRef<str>> {
    /// Names in display order.
    pub names: &'a [S],
    /// Frame width in pixels.
    pub frame_width: u32,
    /// Grid options.
    pub config: LayoutConfig,
    /// Name style before scaling.
    pub style: StyleSpec,
    /// Resolution scale factor (`frame_height / 720`).
    pub scale: f32,
}

/// The rendered patron grid: a transparent image plus its geometry.
#[derive(Clone, Debug)]
pub struct PatronBlock {
    /// Transparent image with the names drawn in.
    pub image: RasterImage,
    /// Geometry used to draw the image.
    pub layout: GridLayout,
}

impl PatronBlock {
    /// Patron image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Lay out and rasterize the patron grid.
#[tracing::instrument(
    skip(params, face),
    fields(names = params.names.len(), columns = params.config.columns)
)]
pub fn render_patrons<S: AsRef<str>>(
    params: &PatronGridParams<'_, S>,
    face: FontFace,
) -> CreditsResult<PatronBlock> {
    let mut measurer = TextMeasurer::new(face, params.style.scaled_size(params.scale));
    let entries = build_entries(params.names, &params.config);
    let layout = layout_grid(
        &entries,
        params.frame_width,
        &params.config,
        params.scale,
        &mut measurer,
    );

    let mut list = DisplayList::new(layout.width, layout.height, None);
    let lh = layout.line_height as f32;
    for cell in layout.rows.iter().flat_map(|r| r.cells.iter()) {
        for line in &cell.lines {
            let shaped = measurer.shape(&line.text);
            let y = line.top as f32 + (lh - shaped.height()) / 2.0;
            list.text(shaped, f64::from(line.x), f64::from(y), params.style.color);
        }
    }
    if params.style.bold && matches!(measurer.face(), FontFace::Builtin) {
        list.double_strike(1.0);
    }
    let separator_color = params.style.color.dimmed(3);
    for rect in &layout.separators {
        list.fill_rect(*rect, separator_color);
    }

    let image = cpu::rasterize(&list)?;
    tracing::debug!(
        height = layout.height,
        rows = layout.rows.len(),
        column_width = layout.column_width,
        "patron grid rendered"
    );
    Ok(PatronBlock { image, layout })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
