use crate::foundation::core::{Rect, Rgb};
use crate::text::measure::ShapedText;

/// One drawing command in image pixel space.
#[derive(Clone)]
pub(crate) enum DrawOp {
    FillRect {
        rect: Rect,
        color: Rgb,
    },
    /// `x`/`y` are the top-left of the text's ink box.
    Text {
        shaped: ShapedText,
        x: f64,
        y: f64,
        color: Rgb,
    },
}

impl DrawOp {
    /// Conservative vertical extent, used to skip ops outside a raster strip.
    pub(crate) fn y_extent(&self) -> (f64, f64) {
        match self {
            Self::FillRect { rect, .. } => (rect.y0, rect.y1),
            Self::Text { shaped, y, .. } => {
                let h = f64::from(shaped.height()).max(1.0);
                (y - h, y + 2.0 * h)
            }
        }
    }
}

/// Ordered draw commands for a fixed-size image.
#[derive(Clone)]
pub(crate) struct DisplayList {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) background: Option<Rgb>,
    pub(crate) ops: Vec<DrawOp>,
}

impl DisplayList {
    pub(crate) fn new(width: u32, height: u32, background: Option<Rgb>) -> Self {
        Self {
            width,
            height,
            background,
            ops: Vec::new(),
        }
    }

    pub(crate) fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    pub(crate) fn text(&mut self, shaped: ShapedText, x: f64, y: f64, color: Rgb) {
        if shaped.width() <= 0.0 {
            return;
        }
        self.ops.push(DrawOp::Text {
            shaped,
            x,
            y,
            color,
        });
    }

    /// Draw every text op a second time shifted right by `dx`; fake bold for faces without a
    /// bold cut.
    pub(crate) fn double_strike(&mut self, dx: f64) {
        let doubled: Vec<DrawOp> = self
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text {
                    shaped,
                    x,
                    y,
                    color,
                } => Some(DrawOp::Text {
                    shaped: shaped.clone(),
                    x: x + dx,
                    y: *y,
                    color: *color,
                }),
                DrawOp::FillRect { .. } => None,
            })
            .collect();
        self.ops.extend(doubled);
    }
}
