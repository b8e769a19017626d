//! Numeral measurement and rasterization through rusttype.

use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};

use crate::geometry::TextExtent;

/// Factor applied to the measured ink height to approximate line metrics.
pub const LINE_HEIGHT_INFLATION: f32 = 1.2;

/// Measures the ink bounding box of `text` at `size`, with the height
/// inflated by [`LINE_HEIGHT_INFLATION`].
pub fn measure(font: &Font<'_>, size: u32, text: &str) -> TextExtent {
    let scale = Scale::uniform(size as f32);
    let ascent = font.v_metrics(scale).ascent;

    let mut max_x = 0i32;
    let mut min_y = i32::MAX;
    let mut max_y = i32::MIN;
    for glyph in font.layout(text, scale, point(0.0, ascent)) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            max_x = max_x.max(bb.max.x);
            min_y = min_y.min(bb.min.y);
            max_y = max_y.max(bb.max.y);
        }
    }

    if min_y > max_y {
        // No glyph produced ink (whitespace-only text or a degenerate scale).
        return TextExtent {
            width: 0,
            height: 0,
        };
    }

    TextExtent {
        width: max_x.max(0) as u32,
        height: ((max_y - min_y) as f32 * LINE_HEIGHT_INFLATION) as u32,
    }
}

/// Draws `text` with its top-left corner at `(x, y)`, blending glyph
/// coverage into the canvas. Fragments falling outside the canvas are
/// dropped.
pub fn draw(
    canvas: &mut RgbaImage,
    font: &Font<'_>,
    size: u32,
    x: i32,
    y: i32,
    color: Rgba<u8>,
    text: &str,
) {
    let scale = Scale::uniform(size as f32);
    let ascent = font.v_metrics(scale).ascent;

    for glyph in font.layout(text, scale, point(x as f32, y as f32 + ascent)) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };

        glyph.draw(|gx, gy, coverage| {
            let px = gx as i32 + bb.min.x;
            let py = gy as i32 + bb.min.y;
            if px < 0 || py < 0 || px >= canvas.width() as i32 || py >= canvas.height() as i32 {
                return;
            }
            blend(canvas.get_pixel_mut(px as u32, py as u32), color, coverage);
        });
    }
}

fn blend(dst: &mut Rgba<u8>, src: Rgba<u8>, coverage: f32) {
    let alpha = coverage * src.0[3] as f32 / 255.0;
    if alpha <= 0.0 {
        return;
    }

    let inv = 1.0 - alpha;
    for channel in 0..3 {
        dst.0[channel] = (src.0[channel] as f32 * alpha + dst.0[channel] as f32 * inv) as u8;
    }
    dst.0[3] = dst.0[3].max((alpha * 255.0) as u8);
}
