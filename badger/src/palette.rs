//! Points-to-color policy for badge backgrounds.

use image::Rgba;

/// Points at or above this render on a red background with white text.
pub const RED_THRESHOLD: i64 = 50;
/// Points at or above this (and below [`RED_THRESHOLD`]) render on orange.
pub const ORANGE_THRESHOLD: i64 = 20;
/// Points at or above this (and below [`ORANGE_THRESHOLD`]) render on yellow.
pub const YELLOW_THRESHOLD: i64 = 10;

/// Opacity of the badge background, out of 255 (roughly 78%).
pub const BADGE_ALPHA: u8 = 200;

/// Background color bucket for a points value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointsBucket {
    Red,
    Orange,
    Yellow,
    Green,
}

impl PointsBucket {
    /// Buckets a points value. Thresholds are checked in descending order,
    /// so boundary values land in the higher bucket.
    pub fn for_points(points: i64) -> Self {
        if points >= RED_THRESHOLD {
            PointsBucket::Red
        } else if points >= ORANGE_THRESHOLD {
            PointsBucket::Orange
        } else if points >= YELLOW_THRESHOLD {
            PointsBucket::Yellow
        } else {
            PointsBucket::Green
        }
    }

    /// Translucent fill for the badge rectangle.
    pub fn background(self) -> Rgba<u8> {
        match self {
            PointsBucket::Red => Rgba([255, 0, 0, BADGE_ALPHA]),
            PointsBucket::Orange => Rgba([255, 165, 0, BADGE_ALPHA]),
            PointsBucket::Yellow => Rgba([255, 255, 0, BADGE_ALPHA]),
            PointsBucket::Green => Rgba([0, 128, 0, BADGE_ALPHA]),
        }
    }

    /// Color the numeral is drawn in. Only the red bucket is dark enough
    /// to need white text.
    pub fn text_color(self) -> Rgba<u8> {
        match self {
            PointsBucket::Red => Rgba([255, 255, 255, 255]),
            _ => Rgba([0, 0, 0, 255]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_follow_the_ladder() {
        assert_eq!(PointsBucket::for_points(5), PointsBucket::Green);
        assert_eq!(PointsBucket::for_points(10), PointsBucket::Yellow);
        assert_eq!(PointsBucket::for_points(20), PointsBucket::Orange);
        assert_eq!(PointsBucket::for_points(50), PointsBucket::Red);
        assert_eq!(PointsBucket::for_points(100), PointsBucket::Red);
    }

    #[test]
    fn boundary_values_land_in_the_higher_bucket() {
        assert_eq!(PointsBucket::for_points(9), PointsBucket::Green);
        assert_eq!(PointsBucket::for_points(19), PointsBucket::Yellow);
        assert_eq!(PointsBucket::for_points(49), PointsBucket::Orange);
    }

    #[test]
    fn negative_points_are_green() {
        assert_eq!(PointsBucket::for_points(-3), PointsBucket::Green);
    }

    #[test]
    fn only_red_uses_white_text() {
        assert_eq!(PointsBucket::Red.text_color(), Rgba([255, 255, 255, 255]));
        assert_eq!(PointsBucket::Orange.text_color(), Rgba([0, 0, 0, 255]));
        assert_eq!(PointsBucket::Yellow.text_color(), Rgba([0, 0, 0, 255]));
        assert_eq!(PointsBucket::Green.text_color(), Rgba([0, 0, 0, 255]));
    }
}
