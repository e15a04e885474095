use crate::foundation::error::CreditsError;
use std::fmt;
use std::str::FromStr;

pub use kurbo::Rect;

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Frame rate used for every credits video.
    pub const CREDITS: Fps = Fps { num: 30, den: 1 };

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Convert seconds to frame count using floor semantics.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

impl fmt::Display for Fps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

/// Opaque 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Default patron name color (`#FFD700`).
    pub const GOLD: Rgb = Rgb::new(255, 215, 0);

    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel down by `divisor` (integer division).
    pub fn dimmed(self, divisor: u8) -> Self {
        let d = divisor.max(1);
        Self::new(self.r / d, self.g / d, self.b / d)
    }

    /// Opaque RGBA8 bytes.
    pub fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Output frame sizes supported by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum Resolution {
    /// 1280×720.
    #[default]
    #[serde(rename = "1280x720")]
    Hd720,
    /// 1920×1080.
    #[serde(rename = "1920x1080")]
    Hd1080,
    /// 3840×2160.
    #[serde(rename = "3840x2160")]
    Uhd2160,
}

impl Resolution {
    /// Height of the frame the layout constants are tuned for.
    pub const REFERENCE_HEIGHT: u32 = 720;

    /// Frame width in pixels.
    pub fn width(self) -> u32 {
        match self {
            Self::Hd720 => 1280,
            Self::Hd1080 => 1920,
            Self::Uhd2160 => 3840,
        }
    }

    /// Frame height in pixels.
    pub fn height(self) -> u32 {
        match self {
            Self::Hd720 => 720,
            Self::Hd1080 => 1080,
            Self::Uhd2160 => 2160,
        }
    }

    /// Multiplier applied to font sizes and padding constants.
    pub fn scale_factor(self) -> f32 {
        self.height() as f32 / Self::REFERENCE_HEIGHT as f32
    }

    /// Frame dimensions as a [`Canvas`].
    pub fn canvas(self) -> Canvas {
        Canvas {
            width: self.width(),
            height: self.height(),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width(), self.height())
    }
}

impl FromStr for Resolution {
    type Err = CreditsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1280x720" => Ok(Self::Hd720),
            "1920x1080" => Ok(Self::Hd1080),
            "3840x2160" => Ok(Self::Uhd2160),
            other => Err(CreditsError::validation(format!(
                "unsupported resolution \"{other}\" (expected 1280x720, 1920x1080 or 3840x2160)"
            ))),
        }
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
