//! The badge compositing pipeline.

use std::borrow::Cow;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{GenericImageView, ImageError, Rgb, RgbImage, Rgba, RgbaImage};
use thiserror::Error;

use crate::font::{FontSource, SYSTEM_FONTS};
use crate::geometry::{estimate_extent, BadgeRect};
use crate::palette::PointsBucket;
use crate::text;

/// Largest output dimensions; anything bigger is downscaled to fit.
/// Smaller images are never scaled up.
pub const MAX_WIDTH: u32 = 316;
pub const MAX_HEIGHT: u32 = 461;

/// The numeral is sized to this fraction of the short image edge...
pub const FONT_DIVISOR: u32 = 4;
/// ...but never below this size.
pub const MIN_FONT_SIZE: u32 = 80;
/// Size used when no font can be loaded.
pub const FALLBACK_FONT_SIZE: u32 = 60;
/// Multiplier on the computed font size when the caller has no opinion.
pub const DEFAULT_FONT_SCALE: f32 = 1.0;

/// Quality of the re-encoded JPEG output.
pub const JPEG_QUALITY: u8 = 50;

/// Failure modes of the compositing pipeline. Callers of [`render_badge`]
/// never see these; the wrapper logs the failure and hands back the input.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("failed to decode image")]
    Decode(#[source] ImageError),

    #[error("failed to encode composited image")]
    Encode(#[source] ImageError),
}

/// Burns a points badge onto an encoded image, returning JPEG bytes.
///
/// The badge is a translucent rectangle in the bottom-left corner whose
/// color follows the points ladder (see [`PointsBucket`]), with the
/// decimal points value drawn inside. Oversized images are first
/// downscaled to [`MAX_WIDTH`] x [`MAX_HEIGHT`].
///
/// Fail-open: bytes that cannot be decoded, or a result that cannot be
/// re-encoded, come back unchanged as `Cow::Borrowed` with the reason
/// logged. That makes the call safe inside a download loop without any
/// per-item error handling.
///
/// `font_scale` multiplies the computed font size and is expected to be
/// positive; the alias pipeline passes 0.5 to keep badges visually
/// smaller on alias art.
pub fn render_badge<'a>(image: &'a [u8], points: i64, font_scale: f32) -> Cow<'a, [u8]> {
    render_badge_with(image, points, font_scale, &*SYSTEM_FONTS)
}

/// [`render_badge`] with an explicit font provider.
pub fn render_badge_with<'a>(
    image: &'a [u8],
    points: i64,
    font_scale: f32,
    fonts: &dyn FontSource,
) -> Cow<'a, [u8]> {
    match compose(image, points, font_scale, fonts) {
        Ok(bytes) => Cow::Owned(bytes),
        Err(err) => {
            log::warn!("badge skipped, returning image unchanged: {}", err);
            Cow::Borrowed(image)
        }
    }
}

/// Font size for a badge: a quarter of the short image edge, floored at
/// [`MIN_FONT_SIZE`], then scaled and truncated.
pub fn scaled_font_size(width: u32, height: u32, font_scale: f32) -> u32 {
    let base = (width.min(height) / FONT_DIVISOR).max(MIN_FONT_SIZE);
    (base as f32 * font_scale) as u32
}

fn compose(
    image: &[u8],
    points: i64,
    font_scale: f32,
    fonts: &dyn FontSource,
) -> Result<Vec<u8>, ComposeError> {
    let decoded = image::load_from_memory(image).map_err(ComposeError::Decode)?;

    let (width, height) = decoded.dimensions();
    let decoded = if width > MAX_WIDTH || height > MAX_HEIGHT {
        // resize() picks the largest size that fits the cap while keeping
        // the aspect ratio; the guard keeps smaller images at native size.
        decoded.resize(MAX_WIDTH, MAX_HEIGHT, FilterType::Lanczos3)
    } else {
        decoded
    };
    let (width, height) = decoded.dimensions();
    let mut canvas = decoded.to_rgba8();

    let numeral = points.to_string();
    let font = fonts.bold_sans();
    let (size, extent) = match font {
        Some(font) => {
            let size = scaled_font_size(width, height, font_scale);
            (size, text::measure(font, size, &numeral))
        }
        // The fixed fallback size deliberately ignores font_scale; its
        // extent comes from the geometric estimate instead of metrics.
        None => (
            FALLBACK_FONT_SIZE,
            estimate_extent(&numeral, FALLBACK_FONT_SIZE),
        ),
    };

    let rect = BadgeRect::compute(extent, width, height);
    let bucket = PointsBucket::for_points(points);
    fill_rect(&mut canvas, rect, bucket.background());

    match font {
        Some(font) => {
            let (x, y) = rect.text_origin(extent);
            text::draw(&mut canvas, font, size, x, y, bucket.text_color(), &numeral);
        }
        None => log::debug!("no font available, numeral omitted from badge"),
    }

    let flattened = flatten_on_white(&canvas);

    let mut encoded = Vec::new();
    JpegEncoder::new_with_quality(&mut encoded, JPEG_QUALITY)
        .encode_image(&flattened)
        .map_err(ComposeError::Encode)?;

    Ok(encoded)
}

/// Source-over fill of the badge rectangle with a translucent color.
fn fill_rect(canvas: &mut RgbaImage, rect: BadgeRect, color: Rgba<u8>) {
    let alpha = color.0[3] as f32 / 255.0;
    let inv = 1.0 - alpha;

    for y in rect.y0..rect.y1 {
        for x in rect.x0..rect.x1 {
            let dst = canvas.get_pixel_mut(x, y);
            for channel in 0..3 {
                dst.0[channel] =
                    (color.0[channel] as f32 * alpha + dst.0[channel] as f32 * inv) as u8;
            }
            dst.0[3] = (alpha * 255.0 + dst.0[3] as f32 * inv) as u8;
        }
    }
}

/// Flattens the RGBA canvas onto an opaque white background, using the
/// alpha channel as the mask.
fn flatten_on_white(canvas: &RgbaImage) -> RgbImage {
    let mut flat = RgbImage::from_pixel(canvas.width(), canvas.height(), Rgb([255, 255, 255]));

    for (x, y, pixel) in canvas.enumerate_pixels() {
        let alpha = pixel.0[3] as f32 / 255.0;
        let inv = 1.0 - alpha;
        let dst = flat.get_pixel_mut(x, y);
        for channel in 0..3 {
            dst.0[channel] = (pixel.0[channel] as f32 * alpha + 255.0 * inv) as u8;
        }
    }

    flat
}
