//! CPU rasterizer for display lists, powered by `vello_cpu`.
//!
//! The image is rendered in horizontal strips so that tall patron blocks are not bounded by the
//! backend's 16-bit pixmap height; only the width has to fit in `u16`.

use crate::foundation::core::Rgb;
use crate::foundation::error::{CreditsError, CreditsResult};
use crate::render::display_list::{DisplayList, DrawOp};
use crate::render::raster::RasterImage;
use crate::text::builtin;
use crate::text::measure::ShapedText;

/// Rows rendered per `vello_cpu` pass.
const STRIP_ROWS: u32 = 1024;

/// Rasterize `list` into a premultiplied RGBA8 image.
#[tracing::instrument(skip(list), fields(width = list.width, height = list.height, ops = list.ops.len()))]
pub(crate) fn rasterize(list: &DisplayList) -> CreditsResult<RasterImage> {
    let width_u16: u16 = list
        .width
        .try_into()
        .map_err(|_| CreditsError::render("raster width exceeds u16"))?;
    if list.width == 0 || list.height == 0 {
        return Err(CreditsError::render("raster width/height must be non-zero"));
    }

    let stride = list.width as usize * 4;
    let mut data = vec![0u8; stride * list.height as usize];

    let mut ctx: Option<vello_cpu::RenderContext> = None;
    let mut strip_y = 0u32;
    while strip_y < list.height {
        let rows = STRIP_ROWS.min(list.height - strip_y);
        // `rows <= STRIP_ROWS`, which fits in u16.
        let rows_u16 = rows as u16;

        let mut strip_ctx = match ctx.take() {
            Some(c) if c.width() == width_u16 && c.height() == rows_u16 => c,
            _ => vello_cpu::RenderContext::new(width_u16, rows_u16),
        };
        strip_ctx.reset();
        let mut pixmap = vello_cpu::Pixmap::new(width_u16, rows_u16);

        let top = f64::from(strip_y);
        let bottom = f64::from(strip_y + rows);
        if let Some(bg) = list.background {
            strip_ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            strip_ctx.set_paint(paint(bg));
            strip_ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(list.width),
                f64::from(rows),
            ));
        }
        for op in &list.ops {
            let (y0, y1) = op.y_extent();
            if y1 < top || y0 > bottom {
                continue;
            }
            draw_op(&mut strip_ctx, op, top);
        }
        strip_ctx.flush();
        strip_ctx.render_to_pixmap(&mut pixmap);

        let offset = strip_y as usize * stride;
        let src = pixmap.data_as_u8_slice();
        data[offset..offset + src.len()].copy_from_slice(src);

        ctx = Some(strip_ctx);
        strip_y += rows;
    }

    RasterImage::from_premul(list.width, list.height, data)
}

fn paint(c: Rgb) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255)
}

fn draw_op(ctx: &mut vello_cpu::RenderContext, op: &DrawOp, strip_top: f64) {
    match op {
        DrawOp::FillRect { rect, color } => {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(paint(*color));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                rect.x0,
                rect.y0 - strip_top,
                rect.x1,
                rect.y1 - strip_top,
            ));
        }
        DrawOp::Text {
            shaped,
            x,
            y,
            color,
        } => {
            ctx.set_transform(vello_cpu::kurbo::Affine::translate((*x, *y - strip_top)));
            ctx.set_paint(paint(*color));
            match shaped {
                ShapedText::Outline { font, runs, .. } => {
                    for run in runs {
                        let glyphs = run.glyphs.iter().map(|g| vello_cpu::Glyph {
                            id: g.id,
                            x: g.x,
                            y: g.y,
                        });
                        ctx.glyph_run(font)
                            .font_size(run.font_size)
                            .fill_glyphs(glyphs);
                    }
                }
                ShapedText::Builtin { text, unit_px, .. } => {
                    // Snap cells to whole pixels so neighbouring cells share edges.
                    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                    let u = f64::from(*unit_px);
                    let (ox, oy) = (x.round(), y.round() - strip_top);
                    for (cx, cy) in builtin::lit_cells(text) {
                        let (cx, cy) = (f64::from(cx), f64::from(cy));
                        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                            ox + (cx * u).round(),
                            oy + (cy * u).round(),
                            ox + ((cx + 1.0) * u).round(),
                            oy + ((cy + 1.0) * u).round(),
                        ));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
