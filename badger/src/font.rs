//! Locating a usable bold sans-serif font on the host system.
//!
//! Font deployment varies wildly between machines, so the compositor only
//! talks to [`FontSource`]: "the best available bold sans-serif font, or
//! none". [`SystemFonts`] probes a fixed list of well-known paths once and
//! caches the parsed font for the life of the process.

use rusttype::Font;

/// Well-known bold sans-serif locations, tried in order.
pub const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Provider of the badge numeral font.
pub trait FontSource: Sync {
    /// The best available bold sans-serif font, or `None` when the host
    /// has nothing usable. A `None` switches the compositor to its
    /// geometric size estimates.
    fn bold_sans(&self) -> Option<&Font<'static>>;
}

/// [`FontSource`] backed by [`FONT_CANDIDATES`].
pub struct SystemFonts {
    font: Option<Font<'static>>,
}

impl SystemFonts {
    pub fn load() -> Self {
        for path in FONT_CANDIDATES {
            // Missing candidates are the normal case, not an error.
            let Ok(bytes) = std::fs::read(path) else {
                continue;
            };

            match Font::try_from_vec(bytes) {
                Some(font) => {
                    log::debug!("using badge font {}", path);
                    return SystemFonts { font: Some(font) };
                }
                None => log::debug!("failed to parse font {}", path),
            }
        }

        log::debug!("no system font found, badge numerals will be skipped");
        SystemFonts { font: None }
    }
}

impl FontSource for SystemFonts {
    fn bold_sans(&self) -> Option<&Font<'static>> {
        self.font.as_ref()
    }
}

lazy_static::lazy_static! {
    /// Process-wide font lookup used by [`crate::render_badge`].
    pub static ref SYSTEM_FONTS: SystemFonts = SystemFonts::load();
}
