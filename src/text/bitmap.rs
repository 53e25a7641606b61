//! Built-in 8x8 bitmap face, used when no outline font could be loaded.

use font8x8::{BASIC_FONTS, BLOCK_FONTS, BOX_FONTS, GREEK_FONTS, LATIN_FONTS, UnicodeFonts};

use crate::foundation::core::Rgb8;
use crate::render::canvas::Surface;

/// Native glyph cell size in pixels.
pub(crate) const CELL_PX: u32 = 8;

/// Rows above the baseline within a cell.
const ASCENT_ROWS: u32 = 7;

/// Hollow box drawn for characters the bitmap face lacks (CJK, emoji).
const MISSING_GLYPH: [u8; 8] = [0x7E, 0x42, 0x42, 0x42, 0x42, 0x42, 0x7E, 0x00];

/// Largest integer upscale whose cell does not exceed `size_px`.
pub(crate) fn scale_for(size_px: f32) -> u32 {
    ((size_px / CELL_PX as f32).floor() as u32).max(1)
}

/// Advance width of `text` at `size_px`.
pub(crate) fn text_width(text: &str, size_px: f32) -> f32 {
    (text.chars().count() as u32 * CELL_PX * scale_for(size_px)) as f32
}

/// Distance from the top of a cell to its baseline at `size_px`.
pub(crate) fn baseline(size_px: f32) -> f32 {
    (ASCENT_ROWS * scale_for(size_px)) as f32
}

pub(crate) fn glyph(ch: char) -> [u8; 8] {
    if ch == ' ' {
        return [0; 8];
    }
    BASIC_FONTS
        .get(ch)
        .or_else(|| LATIN_FONTS.get(ch))
        .or_else(|| GREEK_FONTS.get(ch))
        .or_else(|| BOX_FONTS.get(ch))
        .or_else(|| BLOCK_FONTS.get(ch))
        .unwrap_or(MISSING_GLYPH)
}

/// Fill `text` with its top-left corner at `(x, y)`.
///
/// Lit pixels of each glyph row are merged into horizontal runs so each run is a single rect.
pub(crate) fn fill_text(
    surface: &mut Surface,
    text: &str,
    x: f64,
    y: f64,
    size_px: f32,
    color: Rgb8,
) {
    let s = f64::from(scale_for(size_px));
    let cell = f64::from(CELL_PX) * s;

    for (i, ch) in text.chars().enumerate() {
        let gx = x + i as f64 * cell;
        for (row, bits) in glyph(ch).iter().enumerate() {
            let gy = y + row as f64 * s;
            for (start, end) in lit_runs(*bits) {
                surface.fill_rect(
                    gx + f64::from(start) * s,
                    gy,
                    gx + f64::from(end) * s,
                    gy + s,
                    color,
                );
            }
        }
    }
}

/// Half-open column ranges of set bits; bit 0 is the leftmost column.
fn lit_runs(bits: u8) -> impl Iterator<Item = (u32, u32)> {
    let mut col = 0u32;
    std::iter::from_fn(move || {
        while col < CELL_PX && (bits >> col) & 1 == 0 {
            col += 1;
        }
        if col >= CELL_PX {
            return None;
        }
        let start = col;
        while col < CELL_PX && (bits >> col) & 1 == 1 {
            col += 1;
        }
        Some((start, col))
    })
}
