//! Shared chart styling
//!
//! Dark palette used across all four charts, plus the rarity tier coloring
//! shared by the bar and bubble charts.

use plotters::style::RGBColor;

/// Chart background
pub const BACKGROUND: RGBColor = RGBColor(0x0d, 0x11, 0x17);

/// Legend background
pub const SURFACE: RGBColor = RGBColor(0x16, 0x1b, 0x22);

/// Grid lines
pub const GRID: RGBColor = RGBColor(0x21, 0x26, 0x2d);

/// Axis and border edges
pub const EDGE: RGBColor = RGBColor(0x30, 0x36, 0x3d);

/// Primary text
pub const TEXT: RGBColor = RGBColor(0xc9, 0xd1, 0xd9);

/// Secondary text and tick labels
pub const MUTED: RGBColor = RGBColor(0x8b, 0x94, 0x9e);

/// Primary accent (salary bars, candidate radar outline)
pub const ACCENT: RGBColor = RGBColor(0x58, 0xa6, 0xff);

/// Highlight (asking salary marker)
pub const GOLD: RGBColor = RGBColor(0xf0, 0xc0, 0x40);

/// Common-tier marker
pub const GREEN: RGBColor = RGBColor(0x3f, 0xb9, 0x50);

/// Rare-tier marker
pub const RED: RGBColor = RGBColor(0xf8, 0x51, 0x49);

/// Tier color for a rarity score: green (common) → gold (moderate) → red (rare)
pub fn rarity_tier_color(score: u32) -> RGBColor {
    if score <= 5 {
        GREEN
    } else if score <= 7 {
        GOLD
    } else {
        RED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_tier_color_boundaries() {
        assert_eq!(rarity_tier_color(1), GREEN);
        assert_eq!(rarity_tier_color(5), GREEN);
        assert_eq!(rarity_tier_color(6), GOLD);
        assert_eq!(rarity_tier_color(7), GOLD);
        assert_eq!(rarity_tier_color(8), RED);
        assert_eq!(rarity_tier_color(10), RED);
    }
}
