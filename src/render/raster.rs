use crate::foundation::error::{CreditsError, CreditsResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;
use std::path::Path;

/// A rendered image as RGBA8 pixels.
///
/// Pixels are **premultiplied alpha**, tightly packed, row-major. Images are produced once by a
/// renderer and never mutated afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl std::fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl RasterImage {
    pub(crate) fn from_premul(width: u32, height: u32, data: Vec<u8>) -> CreditsResult<Self> {
        let expected = (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4);
        if data.len() != expected {
            return Err(CreditsError::render(format!(
                "raster byte len mismatch: got {}, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Premultiplied RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Premultiplied RGBA8 value at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// `true` when any pixel in row `y` has non-zero alpha.
    pub fn row_has_ink(&self, y: u32) -> bool {
        if y >= self.height {
            return false;
        }
        let stride = self.width as usize * 4;
        let row = &self.data[y as usize * stride..(y as usize + 1) * stride];
        row.chunks_exact(4).any(|px| px[3] != 0)
    }

    /// Straight-alpha copy suitable for image encoders.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        unpremultiply_rgba8_in_place(&mut out);
        out
    }

    /// Write the image as a PNG (straight alpha).
    pub fn save_png(&self, path: &Path) -> CreditsResult<()> {
        use anyhow::Context as _;

        image::save_buffer_with_format(
            path,
            &self.to_straight_rgba8(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
