use std::borrow::Cow;

use badger::font::SYSTEM_FONTS;
use badger::{render_badge, render_badge_with, Font, FontSource};
use image::codecs::jpeg::JpegEncoder;
use image::{GenericImageView, Rgb, RgbImage};

/// Provider for the paths where no usable font exists, which keeps the
/// badge geometry fixed and the output deterministic.
struct NoFonts;

impl FontSource for NoFonts {
    fn bold_sans(&self) -> Option<&Font<'static>> {
        None
    }
}

fn jpeg_bytes(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    let canvas = RgbImage::from_pixel(width, height, Rgb(color));
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, 90)
        .encode_image(&canvas)
        .unwrap();
    bytes
}

#[test]
fn non_image_bytes_come_back_untouched() {
    let bytes = b"these are not pixels";
    let result = render_badge_with(bytes, 10, 1.0, &NoFonts);

    assert!(matches!(result, Cow::Borrowed(_)));
    assert_eq!(result.as_ref(), bytes);
}

#[test]
fn small_images_keep_their_dimensions() {
    let input = jpeg_bytes(200, 200, [255, 255, 255]);
    let result = render_badge_with(&input, 5, 1.0, &NoFonts);

    let decoded = image::load_from_memory(&result).unwrap();
    assert_eq!(decoded.dimensions(), (200, 200));
}

#[test]
fn oversized_images_fit_the_cap() {
    let input = jpeg_bytes(400, 600, [255, 255, 255]);
    let result = render_badge_with(&input, 5, 1.0, &NoFonts);

    let decoded = image::load_from_memory(&result).unwrap();
    assert_eq!(decoded.dimensions(), (307, 461));
}

#[test]
fn low_points_get_a_green_badge() {
    let input = jpeg_bytes(200, 200, [255, 255, 255]);
    let result = render_badge_with(&input, 3, 1.0, &NoFonts);

    // With the fallback extent for a one-digit numeral, the badge covers
    // x 0..58, y 106..188 of a 200x200 canvas.
    let decoded = image::load_from_memory(&result).unwrap().to_rgb8();
    let pixel = decoded.get_pixel(29, 147);
    assert!(
        pixel.0[1] > pixel.0[0] + 30 && pixel.0[1] > pixel.0[2] + 30,
        "expected a green badge, got {:?}",
        pixel
    );
}

#[test]
fn high_points_get_a_red_badge() {
    let input = jpeg_bytes(200, 200, [255, 255, 255]);
    let result = render_badge_with(&input, 75, 1.0, &NoFonts);

    let decoded = image::load_from_memory(&result).unwrap().to_rgb8();
    let pixel = decoded.get_pixel(29, 147);
    assert!(
        pixel.0[0] > 200 && pixel.0[1] < 120,
        "expected a red badge, got {:?}",
        pixel
    );
}

#[test]
fn outputs_are_valid_jpeg() {
    // Points are never validated or clamped, so the matrix includes
    // negative and extreme values alongside the ordinary ones.
    let cases = [
        (64, 64, 5),
        (200, 200, 15),
        (316, 461, 25),
        (500, 700, 75),
        (200, 200, -7),
        (200, 200, 12345),
        (64, 64, i64::MIN),
    ];

    for (width, height, points) in cases {
        let input = jpeg_bytes(width, height, [120, 90, 200]);
        let result = render_badge_with(&input, points, 1.0, &NoFonts);

        assert!(matches!(result, Cow::Owned(_)));
        assert_eq!(&result[..2], &[0xFF, 0xD8], "missing JPEG magic");
        image::load_from_memory(&result).unwrap();
    }
}

#[test]
fn oversized_high_points_end_to_end() {
    let input = jpeg_bytes(400, 600, [255, 255, 255]);
    let result = render_badge_with(&input, 75, 1.0, &NoFonts);

    let decoded = image::load_from_memory(&result).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (307, 461));

    // Fallback extent for "75" puts the badge at x 0..94, y 367..449.
    let pixel = decoded.get_pixel(47, 408);
    assert!(
        pixel.0[0] > 200 && pixel.0[1] < 120,
        "expected a red badge, got {:?}",
        pixel
    );
}

#[test]
fn fallback_size_ignores_font_scale() {
    let input = jpeg_bytes(200, 200, [255, 255, 255]);
    let full = render_badge_with(&input, 10, 1.0, &NoFonts);
    let half = render_badge_with(&input, 10, 0.5, &NoFonts);

    assert_eq!(full.as_ref(), half.as_ref());
}

#[test]
fn numerals_render_when_a_system_font_exists() {
    if SYSTEM_FONTS.bold_sans().is_none() {
        return;
    }

    // Dark base so the white numerals on the red badge stand out.
    let input = jpeg_bytes(300, 300, [40, 40, 40]);
    let result = render_badge(&input, 75, 1.0);

    let decoded = image::load_from_memory(&result).unwrap().to_rgb8();
    let bright = decoded
        .enumerate_pixels()
        .filter(|(_, y, _)| *y > 150)
        .filter(|(_, _, pixel)| pixel.0.iter().all(|&channel| channel > 200))
        .count();
    assert!(bright > 50, "expected white numerals, found {} bright pixels", bright);
}
