use std::path::Path;

use crate::foundation::core::Rgb8;
use crate::foundation::error::RetrospectResult;
use crate::render::canvas::Surface;
use crate::text::bitmap;
use crate::text::engine::TextLayoutEngine;

/// Which point of a piece of text `(x, y)` refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Top edge, left end.
    LeftTop,
    /// Top edge, horizontal center.
    CenterTop,
    /// Top edge, right end.
    RightTop,
    /// Baseline, horizontal center.
    CenterBaseline,
}

impl Anchor {
    /// Top-left corner of the text box given its width and top-to-baseline distance.
    fn origin(self, x: f64, y: f64, width: f32, baseline: f32) -> (f64, f64) {
        let w = f64::from(width);
        match self {
            Anchor::LeftTop => (x, y),
            Anchor::CenterTop => (x - w / 2.0, y),
            Anchor::RightTop => (x - w, y),
            Anchor::CenterBaseline => (x - w / 2.0, y - f64::from(baseline)),
        }
    }
}

struct OutlineFace {
    engine: TextLayoutEngine,
    family: String,
    font: vello_cpu::peniko::FontData,
}

enum Face {
    Outline(Box<OutlineFace>),
    Bitmap,
}

/// The face every string on the poster is drawn with.
///
/// Loading never fails: an unreadable or unparsable font file degrades to the built-in bitmap
/// face and is only reported through a `warn` event.
pub struct FontBook {
    face: Face,
}

impl FontBook {
    /// Load an outline font from `path`, falling back to the built-in face.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let loaded = std::fs::read(path)
            .map_err(anyhow::Error::from)
            .and_then(|bytes| Self::from_bytes(bytes).map_err(anyhow::Error::from));
        match loaded {
            Ok(book) => {
                tracing::debug!(path = %path.display(), family = ?book.family_name(), "loaded font");
                book
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "font unavailable, using built-in bitmap face"
                );
                Self::builtin()
            }
        }
    }

    /// Use TrueType/OpenType bytes directly. Fails when the bytes hold no usable family.
    pub fn from_bytes(bytes: Vec<u8>) -> RetrospectResult<Self> {
        let mut engine = TextLayoutEngine::new();
        let family = engine.register_font(&bytes)?;
        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);
        Ok(Self {
            face: Face::Outline(Box::new(OutlineFace {
                engine,
                family,
                font,
            })),
        })
    }

    /// The built-in 8x8 bitmap face.
    pub fn builtin() -> Self {
        Self { face: Face::Bitmap }
    }

    /// `true` when drawing with the built-in face.
    pub fn is_builtin(&self) -> bool {
        matches!(self.face, Face::Bitmap)
    }

    /// Family name of the loaded outline font.
    pub fn family_name(&self) -> Option<&str> {
        match &self.face {
            Face::Outline(o) => Some(o.family.as_str()),
            Face::Bitmap => None,
        }
    }

    /// Advance width of `text` at `size_px`.
    #[cfg(test)]
    pub(crate) fn measure(&mut self, text: &str, size_px: f32) -> RetrospectResult<f32> {
        match &mut self.face {
            Face::Outline(o) => {
                let layout = o
                    .engine
                    .layout_line(text, &o.family, size_px, Rgb8::default())?;
                Ok(layout.width())
            }
            Face::Bitmap => Ok(bitmap::text_width(text, size_px)),
        }
    }

    /// Fill `text` so that `anchor` lands on `(x, y)`.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn draw(
        &mut self,
        surface: &mut Surface,
        text: &str,
        x: f64,
        y: f64,
        anchor: Anchor,
        size_px: f32,
        color: Rgb8,
    ) -> RetrospectResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        match &mut self.face {
            Face::Outline(o) => {
                let layout = o.engine.layout_line(text, &o.family, size_px, color)?;
                let baseline = layout
                    .lines()
                    .next()
                    .map_or(size_px, |line| line.metrics().baseline);
                let (ox, oy) = anchor.origin(x, y, layout.width(), baseline);

                for line in layout.lines() {
                    for item in line.items() {
                        let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                            continue;
                        };
                        let glyphs = run
                            .positioned_glyphs()
                            .map(|g| vello_cpu::Glyph {
                                id: g.id,
                                x: g.x,
                                y: g.y,
                            })
                            .collect();
                        surface.fill_glyphs(
                            &o.font,
                            run.run().font_size(),
                            (ox, oy),
                            glyphs,
                            run.style().brush,
                        );
                    }
                }
                Ok(())
            }
            Face::Bitmap => {
                let width = bitmap::text_width(text, size_px);
                let (ox, oy) = anchor.origin(x, y, width, bitmap::baseline(size_px));
                bitmap::fill_text(surface, text, ox, oy, size_px, color);
                Ok(())
            }
        }
    }
}

impl std::fmt::Debug for FontBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontBook")
            .field("family", &self.family_name())
            .field("builtin", &self.is_builtin())
            .finish()
    }
}
