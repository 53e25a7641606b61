use vello_cpu::kurbo::{Affine, Rect};

use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::error::{RetrospectError, RetrospectResult};

/// Rows rasterized per pass. Bounded by the rasterizer's `u16` surface height.
pub(crate) const BAND_ROWS: u16 = 4096;

/// A recorded fill, in canvas coordinates.
enum DrawOp {
    Rect {
        rect: Rect,
        color: Rgb8,
    },
    Glyphs {
        font: vello_cpu::peniko::FontData,
        size_px: f32,
        origin: (f64, f64),
        glyphs: Vec<vello_cpu::Glyph>,
        color: Rgb8,
        /// Vertical extent used to skip bands the run cannot touch.
        span: (f64, f64),
    },
}

impl DrawOp {
    fn touches(&self, top: f64, bottom: f64) -> bool {
        let (y0, y1) = match self {
            DrawOp::Rect { rect, .. } => (rect.y0, rect.y1),
            DrawOp::Glyphs { span, .. } => *span,
        };
        y1 >= top && y0 <= bottom
    }

    fn replay(&self, ctx: &mut vello_cpu::RenderContext, band: Affine) {
        match self {
            DrawOp::Rect { rect, color } => {
                ctx.set_transform(band);
                ctx.set_paint(color.to_paint());
                ctx.fill_rect(rect);
            }
            DrawOp::Glyphs {
                font,
                size_px,
                origin,
                glyphs,
                color,
                ..
            } => {
                ctx.set_transform(band * Affine::translate(*origin));
                ctx.set_paint(color.to_paint());
                ctx.glyph_run(font)
                    .font_size(*size_px)
                    .fill_glyphs(glyphs.iter().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    }));
            }
        }
    }
}

/// The canvas of one render call.
///
/// Fills are recorded first and rasterized on [`Surface::finish`], one horizontal band at a time,
/// so the poster height is limited only by the size of the output image buffer.
pub(crate) struct Surface {
    canvas: Canvas,
    width: u16,
    background: Rgb8,
    ops: Vec<DrawOp>,
}

impl Surface {
    /// Start a surface of `canvas` size, filled with `background`.
    pub(crate) fn new(canvas: Canvas, background: Rgb8) -> RetrospectResult<Self> {
        let width = canvas.raster_width()?;
        canvas.rgb_len()?;
        Ok(Self {
            canvas,
            width,
            background,
            ops: Vec::new(),
        })
    }

    pub(crate) fn fill_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgb8) {
        self.ops.push(DrawOp::Rect {
            rect: Rect::new(x0, y0, x1, y1),
            color,
        });
    }

    /// Fill a shaped glyph run whose glyph positions are relative to `origin`.
    pub(crate) fn fill_glyphs(
        &mut self,
        font: &vello_cpu::peniko::FontData,
        size_px: f32,
        origin: (f64, f64),
        glyphs: Vec<vello_cpu::Glyph>,
        color: Rgb8,
    ) {
        if glyphs.is_empty() {
            return;
        }
        let (lo, hi) = glyphs
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), g| {
                (lo.min(g.y), hi.max(g.y))
            });
        // Glyph y is the baseline; ascenders and descenders stay within one em of it.
        let em = f64::from(size_px);
        let span = (origin.1 + f64::from(lo) - em, origin.1 + f64::from(hi) + em);
        self.ops.push(DrawOp::Glyphs {
            font: font.clone(),
            size_px,
            origin,
            glyphs,
            color,
            span,
        });
    }

    /// Horizontal rule of `thickness` centered on `y`.
    pub(crate) fn hline(&mut self, x0: f64, x1: f64, y: f64, thickness: u32, color: Rgb8) {
        let half = f64::from(thickness.max(1)) / 2.0;
        self.fill_rect(x0, y - half, x1, y + half, color);
    }

    /// Vertical rule of `thickness` centered on `x`.
    pub(crate) fn vline(&mut self, x: f64, y0: f64, y1: f64, thickness: u32, color: Rgb8) {
        let half = f64::from(thickness.max(1)) / 2.0;
        self.fill_rect(x - half, y0, x + half, y1, color);
    }

    /// Rasterize the recorded fills into an opaque RGB image.
    pub(crate) fn finish(self) -> RetrospectResult<image::RgbImage> {
        self.canvas.rgb_len()?;
        let row_bytes = usize::from(self.width) * 3;
        let mut out = image::RgbImage::from_pixel(
            self.canvas.width,
            self.canvas.height,
            self.background.into(),
        );

        let mut band_top = 0u32;
        while band_top < self.canvas.height {
            let rows = (self.canvas.height - band_top).min(u32::from(BAND_ROWS));
            let band_rows = u16::try_from(rows)
                .map_err(|_| RetrospectError::render("band height exceeds 65535"))?;
            let top = f64::from(band_top);
            let bottom = top + f64::from(band_rows);
            let mut ops = self.ops.iter().filter(|op| op.touches(top, bottom)).peekable();
            if ops.peek().is_none() {
                band_top += rows;
                continue;
            }

            let mut ctx = vello_cpu::RenderContext::new(self.width, band_rows);
            ctx.set_paint(self.background.to_paint());
            ctx.fill_rect(&Rect::new(
                0.0,
                0.0,
                f64::from(self.width),
                f64::from(band_rows),
            ));
            let shift = Affine::translate((0.0, -top));
            for op in ops {
                op.replay(&mut ctx, shift);
            }
            ctx.flush();

            let mut pixmap = vello_cpu::Pixmap::new(self.width, band_rows);
            ctx.render_to_pixmap(&mut pixmap);

            let start = band_top as usize * row_bytes;
            let buf: &mut [u8] = &mut out;
            let dst = buf
                .get_mut(start..start + usize::from(band_rows) * row_bytes)
                .ok_or_else(|| RetrospectError::render("band outside the output image"))?;
            // Every pixel sits on the opaque background, so premultiplied and straight RGB agree.
            for (px, src) in dst
                .chunks_exact_mut(3)
                .zip(pixmap.data_as_u8_slice().chunks_exact(4))
            {
                px.copy_from_slice(&src[..3]);
            }
            tracing::trace!(band_top, rows, "rasterized band");
            band_top += rows;
        }
        Ok(out)
    }
}
