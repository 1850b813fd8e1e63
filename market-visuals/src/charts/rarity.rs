//! Skill rarity bar chart
//!
//! Horizontal bars of the manually assigned rarity scores, colored by tier
//! with a tier legend. Saved as a 1200x800 PNG.

use super::{PlotError, Result};
use crate::data::RarityBar;
use crate::theme::{rarity_tier_color, BACKGROUND, EDGE, GOLD, GREEN, GRID, MUTED, RED, SURFACE, TEXT};
use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// Rarity tiers used for bar coloring and the legend
const TIERS: [(&str, u32, u32, RGBColor); 3] = [
    ("In-Demand (1–5)", 1, 5, GREEN),
    ("Rare / Niche (6–7)", 6, 7, GOLD),
    ("Extremely Rare (8–10)", 8, 10, RED),
];

/// Skill shown on a given chart row, top row first in declaration order
fn row_bar(bars: &[RarityBar], row: usize) -> &RarityBar {
    &bars[bars.len() - 1 - row]
}

/// Render the skill rarity bar chart
///
/// Scores must be within 1–10; anything else is rejected before drawing.
pub fn create_rarity_chart(bars: &[RarityBar], output_path: &Path) -> Result<()> {
    if bars.is_empty() {
        return Err(PlotError::InvalidData(
            "Rarity bars cannot be empty".to_string(),
        ));
    }
    for bar in bars {
        if !(1..=10).contains(&bar.score) {
            return Err(PlotError::InvalidData(format!(
                "Rarity score {} for {} is outside valid range 1-10",
                bar.score, bar.skill
            )));
        }
    }

    let root = BitMapBackend::new(output_path, (1200, 800)).into_drawing_area();
    root.fill(&BACKGROUND)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let n = bars.len();
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Skill Rarity Index — Joshua Jones",
            ("sans-serif", 40).into_font().color(&TEXT),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(260)
        .build_cartesian_2d(0.0..11.5f64, (0..n).into_segmented())
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .light_line_style(GRID)
        .axis_style(EDGE)
        .x_desc("Rarity Score")
        .axis_desc_style(("sans-serif", 24).into_font().color(&TEXT))
        .label_style(("sans-serif", 18).into_font().color(&MUTED))
        .y_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) if *i < n => row_bar(bars, *i).skill.to_string(),
            _ => String::new(),
        })
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // One series per tier so each gets its own legend entry
    for (label, tier_low, tier_high, color) in TIERS {
        let anno = chart
            .draw_series(
                bars.iter()
                    .enumerate()
                    .filter(|(_, bar)| (tier_low..=tier_high).contains(&bar.score))
                    .map(|(idx, bar)| {
                        let row = n - 1 - idx;
                        Rectangle::new(
                            [
                                (0.0, SegmentValue::Exact(row)),
                                (bar.score as f64, SegmentValue::Exact(row + 1)),
                            ],
                            color.mix(0.85).filled(),
                        )
                    }),
            )
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
        anno.label(label)
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled()));
    }

    // Score labels just past the bar ends, colored by tier
    let label_font = ("sans-serif", 18).into_font();
    chart
        .draw_series(bars.iter().enumerate().map(|(idx, bar)| {
            let row = n - 1 - idx;
            let style = label_font
                .clone()
                .color(&rarity_tier_color(bar.score))
                .pos(Pos::new(HPos::Left, VPos::Center));
            Text::new(
                format!("{}/10", bar.score),
                (bar.score as f64 + 0.15, SegmentValue::CenterOf(row)),
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
    use crate::data::RARITY_BARS;

    #[test]
    fn test_tiers_cover_full_score_range() {
        for score in 1..=10u32 {
            let matching = TIERS
                .iter()
                .filter(|(_, low, high, _)| (*low..=*high).contains(&score))
                .count();
            assert_eq!(matching, 1, "score {} matched {} tiers", score, matching);
        }
    }

    #[test]
    fn test_row_bar_inverts_declaration_order() {
        assert_eq!(row_bar(&RARITY_BARS, 0).skill, "Model Context Protocol");
        let top = row_bar(&RARITY_BARS, RARITY_BARS.len() - 1);
        assert_eq!(top.skill, "JavaScript / Node.js");
    }

    #[test]
    fn test_rejects_out_of_range_score() {
        let path = std::env::temp_dir().join("rarity_bad_score.png");
        let bars = [RarityBar {
            skill: "Broken",
            score: 11,
        }];
        let result = create_rarity_chart(&bars, &path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    fn test_rejects_empty_input() {
        let path = std::env::temp_dir().join("rarity_empty.png");
        let result = create_rarity_chart(&[], &path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_renders_chart_file() {
        let path = std::env::temp_dir().join("skill_rarity_chart.png");
        let _ = std::fs::remove_file(&path);

        create_rarity_chart(&RARITY_BARS, &path).unwrap();
        assert!(path.exists());

        let _ = std::fs::remove_file(&path);
    }
}
