//! JSON render requests.
//!
//! Every field is optional on the wire; missing fields take the defaults below. Clamping of
//! `columns`, `truncate_length` and style sizes happens when converting into layout types, so
//! out-of-range values are accepted here and only `duration` and `patrons` are rejected.

use crate::assets::fonts::FontFamily;
use crate::foundation::core::{Resolution, Rgb};
use crate::foundation::error::{CreditsError, CreditsResult};
use crate::layout::grid::{LayoutConfig, MAX_COLUMNS, MAX_TRUNCATE_LENGTH};
use crate::layout::style::{HeaderAlign, NameAlign, StyleSpec};
use std::path::Path;

/// Header message used when a request omits one.
pub const DEFAULT_MESSAGE: &str = "This video was made possible by our Patreon supporters:";
/// Shortest accepted video, in seconds.
pub const MIN_DURATION_SECS: u32 = 5;
/// Longest accepted video, in seconds.
pub const MAX_DURATION_SECS: u32 = 60;

/// Header text style.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MessageStyle {
    /// Font size in pixels at 720p.
    pub size: u32,
    /// Text color.
    pub color: Rgb,
    /// Font family key.
    pub font: FontFamily,
    /// Bold weight.
    pub bold: bool,
    /// Line alignment.
    pub align: HeaderAlign,
}

impl Default for MessageStyle {
    fn default() -> Self {
        Self {
            size: 36,
            color: Rgb::WHITE,
            font: FontFamily::default(),
            bold: true,
            align: HeaderAlign::Left,
        }
    }
}

impl MessageStyle {
    /// Resolved style with the size clamped to at least 1px.
    pub fn to_spec(&self) -> StyleSpec {
        StyleSpec::new(self.size, self.color, self.font, self.bold)
    }
}

/// Patron name style.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PatronStyle {
    /// Font size in pixels at 720p.
    pub size: u32,
    /// Text color; separators use it at one-third intensity.
    pub color: Rgb,
    /// Font family key.
    pub font: FontFamily,
    /// Bold weight.
    pub bold: bool,
}

impl Default for PatronStyle {
    fn default() -> Self {
        Self {
            size: 20,
            color: Rgb::GOLD,
            font: FontFamily::default(),
            bold: false,
        }
    }
}

impl PatronStyle {
    /// Resolved style with the size clamped to at least 1px.
    pub fn to_spec(&self) -> StyleSpec {
        StyleSpec::new(self.size, self.color, self.font, self.bold)
    }
}

/// A complete credits render request.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CreditsRequest {
    /// Header message; `\n` starts a new line.
    pub message: String,
    /// Patron names in display order.
    pub patrons: Vec<String>,
    /// Video length in seconds, `5..=60`.
    pub duration: u32,
    /// Output frame size.
    pub resolution: Resolution,
    /// Grid columns; clamped to `1..=5`.
    pub columns: i64,
    /// Placement of the name grid.
    pub name_align: NameAlign,
    /// Per-name character limit; clamped to `0..=50`, `0` disables it.
    pub truncate_length: i64,
    /// Wrap long names instead of truncating them.
    pub word_wrap: bool,
    /// Gap and separator line between rows.
    pub row_spacing: bool,
    /// Frame background color.
    pub background_color: Rgb,
    /// Header style.
    pub message_style: MessageStyle,
    /// Patron name style.
    pub patron_style: PatronStyle,
}

impl Default for CreditsRequest {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_owned(),
            patrons: Vec::new(),
            duration: 15,
            resolution: Resolution::Hd720,
            columns: 4,
            name_align: NameAlign::Left,
            truncate_length: 15,
            word_wrap: false,
            row_spacing: false,
            background_color: Rgb::BLACK,
            message_style: MessageStyle::default(),
            patron_style: PatronStyle::default(),
        }
    }
}

impl CreditsRequest {
    /// Parse a request from JSON text.
    pub fn from_json_str(s: &str) -> CreditsResult<Self> {
        serde_json::from_str(s).map_err(|e| CreditsError::serde(format!("request json: {e}")))
    }

    /// Parse a request from a JSON reader.
    pub fn from_reader(reader: impl std::io::Read) -> CreditsResult<Self> {
        serde_json::from_reader(reader).map_err(|e| CreditsError::serde(format!("request json: {e}")))
    }

    /// Read and parse a JSON request file.
    pub fn from_path(path: &Path) -> CreditsResult<Self> {
        use anyhow::Context as _;
        let file = std::fs::File::open(path)
            .with_context(|| format!("open request '{}'", path.display()))?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Check the constraints that clamping cannot fix.
    pub fn validate(&self) -> CreditsResult<()> {
        if !(MIN_DURATION_SECS..=MAX_DURATION_SECS).contains(&self.duration) {
            return Err(CreditsError::validation(format!(
                "Duration must be between {MIN_DURATION_SECS} and {MAX_DURATION_SECS} seconds, got {}",
                self.duration
            )));
        }
        if self.patrons.is_empty() {
            return Err(CreditsError::validation("No patrons to credit"));
        }
        if let Some(i) = self.patrons.iter().position(|p| p.trim().is_empty()) {
            return Err(CreditsError::validation(format!(
                "patron name at index {i} is empty"
            )));
        }
        Ok(())
    }

    /// Grid options with `columns` and `truncate_length` clamped.
    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig::new(
            self.columns.clamp(1, i64::from(MAX_COLUMNS)) as u32,
            self.name_align,
            self.truncate_length.clamp(0, MAX_TRUNCATE_LENGTH as i64) as usize,
            self.word_wrap,
            self.row_spacing,
            self.background_color,
        )
    }

    /// Duration as fractional seconds.
    pub fn duration_secs(&self) -> f64 {
        f64::from(self.duration)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/request.rs"]
mod tests;
