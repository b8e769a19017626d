//! Badge placement math: text extents, anchoring, padding, clamping.

/// Margin between the text anchor and the left and bottom image edges.
pub const EDGE_MARGIN: u32 = 10;
/// Extra offset lifting the anchor off the bottom edge to avoid clipping.
pub const BOTTOM_OFFSET: u32 = 10;
/// Horizontal padding between the text and the rectangle sides.
pub const PAD_X: u32 = 12;
/// Vertical padding between the text and the rectangle sides.
pub const PAD_Y: u32 = 8;
/// The numeral never starts closer than this to the rectangle edge.
pub const TEXT_INSET: u32 = 2;

/// Per-character width ratio for the no-font width estimate.
pub const EST_CHAR_WIDTH: f32 = 0.6;
/// Line-height ratio for the no-font height estimate.
pub const EST_LINE_HEIGHT: f32 = 1.1;

/// Measured or estimated size of the rendered numeral, in pixels.
#[derive(Debug, Clone, Copy)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
}

/// Estimates the extent of `text` at `size` when no font is available.
pub fn estimate_extent(text: &str, size: u32) -> TextExtent {
    let chars = text.chars().count() as f32;
    TextExtent {
        width: (chars * size as f32 * EST_CHAR_WIDTH) as u32,
        height: (size as f32 * EST_LINE_HEIGHT) as u32,
    }
}

/// Badge rectangle in image coordinates, clamped to the image bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeRect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl BadgeRect {
    /// Computes the padded rectangle for `extent` on a `width` x `height`
    /// image. The text anchor sits at the bottom-left corner,
    /// [`EDGE_MARGIN`] in from the left and [`EDGE_MARGIN`] plus
    /// [`BOTTOM_OFFSET`] up from the bottom; the rectangle grows [`PAD_X`]
    /// and [`PAD_Y`] around it and is clamped so it never leaves the image.
    pub fn compute(extent: TextExtent, width: u32, height: u32) -> Self {
        let anchor_x = EDGE_MARGIN as i64;
        let anchor_y =
            height as i64 - extent.height as i64 - EDGE_MARGIN as i64 - BOTTOM_OFFSET as i64;

        let clamp_x = |v: i64| v.clamp(0, width as i64) as u32;
        let clamp_y = |v: i64| v.clamp(0, height as i64) as u32;

        BadgeRect {
            x0: clamp_x(anchor_x - PAD_X as i64),
            y0: clamp_y(anchor_y - PAD_Y as i64),
            x1: clamp_x(anchor_x + extent.width as i64 + PAD_X as i64),
            y1: clamp_y(anchor_y + extent.height as i64 + PAD_Y as i64),
        }
    }

    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    /// Top-left corner for the numeral: centered in the rectangle, but
    /// never starting before the [`TEXT_INSET`] interior inset.
    pub fn text_origin(&self, extent: TextExtent) -> (i32, i32) {
        let cx = self.x0 as i64 + (self.width() as i64 - extent.width as i64) / 2;
        let cy = self.y0 as i64 + (self.height() as i64 - extent.height as i64) / 2;
        let min_x = (self.x0 + TEXT_INSET) as i64;
        let min_y = (self.y0 + TEXT_INSET) as i64;
        (cx.max(min_x) as i32, cy.max(min_y) as i32)
    }
}
