//! Constant-velocity scroll of the patron layer.
//!
//! The patron image enters just below the header-occluded frame bottom and leaves through the
//! top: `position(0) = frame_height + header_height`, `position(duration) = -patron_height`.

use crate::foundation::error::{CreditsError, CreditsResult};

/// Vertical motion of the patron overlay over the video duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollPlan {
    /// Frame height in pixels.
    pub frame_height: u32,
    /// Header image height in pixels.
    pub header_height: u32,
    /// Patron image height in pixels.
    pub patron_height: u32,
    /// Video duration in seconds.
    pub duration_secs: f64,
    /// `patron_height + frame_height + header_height`.
    pub total_scroll_px: u64,
    /// `total_scroll_px / duration_secs`.
    pub speed_px_per_s: f64,
}

impl ScrollPlan {
    /// Plan the scroll; `duration_secs` must be finite and positive.
    pub fn new(
        patron_height: u32,
        frame_height: u32,
        header_height: u32,
        duration_secs: f64,
    ) -> CreditsResult<Self> {
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(CreditsError::validation(format!(
                "scroll duration must be > 0, got {duration_secs}"
            )));
        }
        let total_scroll_px =
            u64::from(patron_height) + u64::from(frame_height) + u64::from(header_height);
        Ok(Self {
            frame_height,
            header_height,
            patron_height,
            duration_secs,
            total_scroll_px,
            speed_px_per_s: total_scroll_px as f64 / duration_secs,
        })
    }

    /// Overlay y at `t = 0`.
    pub fn start_y(&self) -> f64 {
        f64::from(self.frame_height) + f64::from(self.header_height)
    }

    /// Overlay y of the patron image's top edge at time `t` seconds.
    pub fn position(&self, t: f64) -> f64 {
        self.start_y() - t * self.speed_px_per_s
    }

    /// `position(t)` as an ffmpeg `overlay` y expression (`H` is the main input's height).
    pub fn overlay_y_expr(&self) -> String {
        format!("H+{}-(t*{})", self.header_height, self.speed_px_per_s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/scroll.rs"]
mod tests;
