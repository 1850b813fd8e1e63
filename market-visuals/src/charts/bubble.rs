//! Rarity x demand bubble chart
//!
//! Each skill is a bubble positioned by Dice.com listing presence (log x)
//! and rarity score (y), sized by its comparable salary ceiling and colored
//! by rarity tier. Saved as a 1300x800 PNG.

use super::{PlotError, Result};
use crate::data::BubblePoint;
use crate::theme::{BACKGROUND, EDGE, GOLD, GREEN, GRID, MUTED, RED, SURFACE, TEXT};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// Rarity tiers used for bubble coloring and the legend
const TIERS: [(&str, u32, u32, RGBColor); 3] = [
    ("In-Demand (1–5)", 1, 5, GREEN),
    ("Rare / Niche (6–7)", 6, 7, GOLD),
    ("Extremely Rare (8–10)", 8, 10, RED),
];

/// Bubble radius in pixels, scaled so area tracks the salary ceiling
fn bubble_radius(salary_ceiling_k: f64) -> i32 {
    let radius = (salary_ceiling_k * 2.2 / std::f64::consts::PI).sqrt().round() as i32;
    radius.max(4)
}

/// Render the rarity x demand bubble chart
pub fn create_rarity_bubble_chart(points: &[BubblePoint], output_path: &Path) -> Result<()> {
    if points.is_empty() {
        return Err(PlotError::InvalidData(
            "Bubble points cannot be empty".to_string(),
        ));
    }
    for point in points {
        if !(1..=10).contains(&point.rarity_score) {
            return Err(PlotError::InvalidData(format!(
                "Rarity score {} for {} is outside valid range 1-10",
                point.rarity_score, point.skill
            )));
        }
        if point.dice_listings <= 0.0 {
            return Err(PlotError::InvalidData(format!(
                "Listing count {} for {} must be positive for the log axis",
                point.dice_listings, point.skill
            )));
        }
    }

    let root = BitMapBackend::new(output_path, (1300, 800)).into_drawing_area();
    root.fill(&BACKGROUND)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Skill Value Map: Rarity vs. Market Demand",
            ("sans-serif", 40).into_font().color(&TEXT),
        )
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(70)
        .build_cartesian_2d((3.0..2000.0f64).log_scale(), 3.5..11.5f64)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .light_line_style(GRID)
        .axis_style(EDGE)
        .x_desc("Dice.com Listings (log scale)")
        .y_desc("Rarity Score")
        .axis_desc_style(("sans-serif", 24).into_font().color(&TEXT))
        .label_style(("sans-serif", 18).into_font().color(&MUTED))
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.0}", v))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Quadrant guides: rarity threshold and listing volume threshold
    chart
        .draw_series(LineSeries::new(
            vec![(3.0, 7.5), (2000.0, 7.5)],
            MUTED.mix(0.4).stroke_width(1),
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    chart
        .draw_series(LineSeries::new(
            vec![(70.0, 3.5), (70.0, 11.5)],
            MUTED.mix(0.4).stroke_width(1),
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Quadrant captions
    let quad_font = ("sans-serif", 16)
        .into_font()
        .color(&MUTED.mix(0.8))
        .pos(Pos::new(HPos::Left, VPos::Center));
    let quadrants = [
        ((4.5, 10.8), "RARE + LOW COMPETITION"),
        ((300.0, 10.8), "RARE + HIGH DEMAND"),
        ((4.5, 4.0), "COMMON + NICHE"),
        ((300.0, 4.0), "COMMON + CROWDED"),
    ];
    chart
        .draw_series(
            quadrants
                .iter()
                .map(|&(at, caption)| Text::new(caption, at, quad_font.clone())),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // One series per tier so each gets its own legend entry
    for (label, tier_low, tier_high, color) in TIERS {
        let anno = chart
            .draw_series(
                points
                    .iter()
                    .filter(|p| (tier_low..=tier_high).contains(&p.rarity_score))
                    .map(|p| {
                        let r = bubble_radius(p.salary_ceiling_k);
                        EmptyElement::at((p.dice_listings, p.rarity_score as f64))
                            + Circle::new((0, 0), r, color.mix(0.45).filled())
                            + Circle::new((0, 0), r, color.stroke_width(2))
                    }),
            )
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
        anno.label(label)
            .legend(move |(x, y)| Circle::new((x + 10, y), 6, color.filled()));
    }

    // Skill labels next to each bubble, flipped for high-volume points so
    // they stay inside the plot area
    let label_font = ("sans-serif", 17).into_font().color(&TEXT);
    chart
        .draw_series(points.iter().map(|p| {
            let r = bubble_radius(p.salary_ceiling_k);
            let (offset, anchor) = if p.dice_listings < 500.0 {
                (r + 6, HPos::Left)
            } else {
                (-(r + 6), HPos::Right)
            };
            let style = label_font.clone().pos(Pos::new(anchor, VPos::Center));
            EmptyElement::at((p.dice_listings, p.rarity_score as f64))
                + Text::new(
                    format!("{} (${:.0}K)", p.skill, p.salary_ceiling_k),
                    (offset, 0),
                    style,
                )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(SURFACE.mix(0.9))
        .border_style(EDGE)
        .label_font(("sans-serif", 16).into_font().color(&TEXT))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BUBBLE_POINTS;

    #[test]
    fn test_bubble_radius_tracks_salary_ceiling() {
        assert!(bubble_radius(380.0) > bubble_radius(237.0));
        assert!(bubble_radius(237.0) > bubble_radius(120.0));
    }

    #[test]
    fn test_bubble_radius_has_floor() {
        assert_eq!(bubble_radius(0.5), 4);
    }

    #[test]
    fn test_rejects_empty_input() {
        let path = std::env::temp_dir().join("bubble_empty.png");
        let result = create_rarity_bubble_chart(&[], &path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    fn test_rejects_nonpositive_listings() {
        let path = std::env::temp_dir().join("bubble_zero_listings.png");
        let points = [BubblePoint {
            skill: "Broken",
            rarity_score: 5,
            dice_listings: 0.0,
            salary_ceiling_k: 100.0,
        }];
        let result = create_rarity_bubble_chart(&points, &path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_renders_chart_file() {
        let path = std::env::temp_dir().join("skill_rarity_bubble.png");
        let _ = std::fs::remove_file(&path);

        create_rarity_bubble_chart(&BUBBLE_POINTS, &path).unwrap();
        assert!(path.exists());

        let _ = std::fs::remove_file(&path);
    }
}
