//! The hand-off between layout and encoding: two rasters plus the motion that combines them.

use crate::foundation::core::{Canvas, Fps, Resolution, Rgb};
use crate::foundation::error::{CreditsError, CreditsResult};
use crate::foundation::math::mul_div255_u8;
use crate::motion::scroll::ScrollPlan;
use crate::render::raster::RasterImage;

/// Everything an encoder needs to produce the credits video.
///
/// Layer order, bottom to top: solid background, patron image moving along
/// [`ScrollPlan::position`], header image fixed at the origin.
#[derive(Clone, Debug)]
pub struct CompositionRequest {
    /// Opaque header image, full frame width.
    pub header: RasterImage,
    /// Transparent patron image, full frame width.
    pub patrons: RasterImage,
    /// Output frame size.
    pub resolution: Resolution,
    /// Background fill color.
    pub background: Rgb,
    /// Video duration in seconds.
    pub duration_secs: f64,
    /// Patron layer motion.
    pub plan: ScrollPlan,
    /// Output frame rate.
    pub fps: Fps,
}

impl CompositionRequest {
    /// Package the rendered layers; both images must be exactly the frame width.
    pub fn new(
        header: RasterImage,
        patrons: RasterImage,
        resolution: Resolution,
        background: Rgb,
        duration_secs: f64,
    ) -> CreditsResult<Self> {
        let width = resolution.width();
        for (name, img) in [("header", &header), ("patron", &patrons)] {
            if img.width() != width {
                return Err(CreditsError::validation(format!(
                    "{name} image width {} does not match frame width {width}",
                    img.width()
                )));
            }
        }
        let plan = ScrollPlan::new(
            patrons.height(),
            resolution.height(),
            header.height(),
            duration_secs,
        )?;
        Ok(Self {
            header,
            patrons,
            resolution,
            background,
            duration_secs,
            plan,
            fps: Fps::CREDITS,
        })
    }

    /// Frame dimensions.
    pub fn canvas(&self) -> Canvas {
        self.resolution.canvas()
    }

    /// Header height in pixels.
    pub fn header_height(&self) -> u32 {
        self.header.height()
    }

    /// Patron image height in pixels.
    pub fn patron_height(&self) -> u32 {
        self.patrons.height()
    }

    /// Number of frames in the output.
    pub fn frame_count(&self) -> u64 {
        self.fps.secs_to_frames_floor(self.duration_secs)
    }

    /// ffmpeg `lavfi` source producing the solid background for the whole duration.
    pub fn background_source(&self) -> String {
        let bg = self.background;
        format!(
            "color=c=0x{:02x}{:02x}{:02x}:s={}:d={}:r={}",
            bg.r, bg.g, bg.b, self.resolution, self.duration_secs, self.fps
        )
    }

    /// ffmpeg filter graph over inputs `0` (background), `1` (patrons) and `2` (header).
    ///
    /// The result is labelled `[out]`.
    pub fn filter_complex(&self) -> String {
        format!(
            "[1:v]format=rgba,scale={}:{}[patron];\
             [0:v][patron]overlay=0:'{}'[bg];\
             [bg][2:v]overlay=0:0[out]",
            self.resolution.width(),
            self.patron_height(),
            self.plan.overlay_y_expr(),
        )
    }

    /// CPU composite of the frame at `t` seconds; used for previews and stills.
    ///
    /// The patron layer is positioned at `round(position(t))`.
    pub fn render_frame(&self, t: f64) -> CreditsResult<RasterImage> {
        let Canvas { width, height } = self.canvas();
        let stride = width as usize * 4;
        let mut data = Vec::with_capacity(stride * height as usize);
        for _ in 0..(width as usize * height as usize) {
            data.extend_from_slice(&self.background.to_rgba8());
        }

        let patron_y = self.plan.position(t).round() as i64;
        for y in 0..height {
            let src_y = i64::from(y) - patron_y;
            if src_y < 0 || src_y >= i64::from(self.patron_height()) {
                continue;
            }
            blend_row(&mut data, &self.patrons, y, src_y as u32, stride);
        }
        for y in 0..self.header_height().min(height) {
            blend_row(&mut data, &self.header, y, y, stride);
        }

        RasterImage::from_premul(width, height, data)
    }
}

/// Source-over of `src` row `src_y` onto `dst` row `dst_y`, premultiplied.
fn blend_row(dst: &mut [u8], src: &RasterImage, dst_y: u32, src_y: u32, stride: usize) {
    let src_row = &src.data()[src_y as usize * stride..(src_y as usize + 1) * stride];
    let dst_row = &mut dst[dst_y as usize * stride..(dst_y as usize + 1) * stride];
    for (d, s) in dst_row.chunks_exact_mut(4).zip(src_row.chunks_exact(4)) {
        let inv = 255 - u16::from(s[3]);
        if inv == 255 {
            continue;
        }
        for i in 0..4 {
            d[i] = s[i].saturating_add(mul_div255_u8(u16::from(d[i]), inv));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/request.rs"]
mod tests;
