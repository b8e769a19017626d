//! Badger stamps a points badge onto card artwork.
//!
//! The single entry point is [`render_badge`]: give it encoded image
//! bytes and a points total and it hands back JPEG bytes with a colored,
//! translucent rectangle in the bottom-left corner showing the number.
//! The call is fail-open. If anything goes wrong (unreadable bytes, a
//! codec error) the original bytes come back unchanged and the failure
//! is logged, so bulk pipelines never stall on one bad image.
//!
//! ```no_run
//! let artwork = std::fs::read("card.jpg").unwrap();
//! let badged = badger::render_badge(&artwork, 75, badger::DEFAULT_FONT_SCALE);
//! std::fs::write("card_badged.jpg", badged.as_ref()).unwrap();
//! ```

mod compositor;
pub mod font;
pub mod geometry;
pub mod palette;
mod text;

pub use compositor::{
    render_badge, render_badge_with, scaled_font_size, ComposeError, DEFAULT_FONT_SCALE,
    FALLBACK_FONT_SIZE, FONT_DIVISOR, JPEG_QUALITY, MAX_HEIGHT, MAX_WIDTH, MIN_FONT_SIZE,
};
pub use font::{FontSource, SystemFonts, FONT_CANDIDATES, SYSTEM_FONTS};
pub use palette::{
    PointsBucket, BADGE_ALPHA, ORANGE_THRESHOLD, RED_THRESHOLD, YELLOW_THRESHOLD,
};
pub use text::LINE_HEIGHT_INFLATION;

// Re-exported so FontSource can be implemented against the same version.
pub use rusttype::Font;
