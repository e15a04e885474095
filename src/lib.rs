//! credits-roll renders scrolling end-credits videos.
//!
//! A render request is turned into two still layers and a motion plan:
//!
//! - a header image carrying the thank-you message, fixed at the top of the frame
//! - a transparent patron grid image that scrolls upward underneath it
//! - a [`ScrollPlan`] moving the grid from below the frame to fully out of view
//!
//! [`render_credits`] produces a [`CompositionRequest`]; [`FfmpegEncoder`] turns it into an MP4
//! through the system `ffmpeg`.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Color parsing and the font registry.
pub mod assets;
/// Layer packaging handed to encoders.
pub mod compose;
/// JSON render requests.
pub mod config;
/// Video encoders.
pub mod encode;
/// Header and patron grid layout.
pub mod layout;
/// Scroll motion.
pub mod motion;
/// Patron list sources.
pub mod patrons;
/// End-to-end request rendering.
pub mod pipeline;
/// Display lists and rasterization.
pub mod render;
/// Text measurement, truncation and wrapping.
pub mod text;

pub use crate::foundation::core::{Canvas, Fps, Rect, Resolution, Rgb};
pub use crate::foundation::error::{CreditsError, CreditsResult};

pub use crate::assets::fonts::{FontFace, FontFamily, FontRegistry, FontSource, ResolvedFont};
pub use crate::compose::request::CompositionRequest;
pub use crate::config::request::{CreditsRequest, MessageStyle, PatronStyle};
pub use crate::encode::ffmpeg::{FfmpegEncoder, FfmpegEncoderOpts, is_ffmpeg_on_path};
pub use crate::layout::grid::{LayoutConfig, NameEntry, PatronGridParams, render_patrons};
pub use crate::layout::header::{HeaderParams, render_header};
pub use crate::layout::style::{HeaderAlign, NameAlign, StyleSpec};
pub use crate::motion::scroll::ScrollPlan;
pub use crate::patrons::source::{PatronCache, parse_name_list, sort_case_insensitive};
pub use crate::pipeline::{CreditsOutput, render_credits};
pub use crate::render::raster::RasterImage;
pub use crate::text::measure::TextMeasurer;
