//! Salary gap chart
//!
//! Horizontal range bars showing the posted salary span per search category,
//! with a vertical marker at the candidate's asking salary. Saved as a
//! 1200x800 PNG.

use super::{PlotError, Result};
use crate::data::SalaryRange;
use crate::theme::{ACCENT, BACKGROUND, EDGE, GOLD, GRID, MUTED, TEXT};
use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// Category shown on a given chart row, top row first in declaration order
fn row_range(ranges: &[SalaryRange], row: usize) -> &SalaryRange {
    &ranges[ranges.len() - 1 - row]
}

/// Render the salary gap chart
///
/// Ranges are drawn top-down in declaration order; the asking salary is a
/// vertical gold line spanning all rows. Rejects empty input and inverted
/// ranges before touching the backend.
pub fn create_salary_gap_chart(
    ranges: &[SalaryRange],
    asking_k: f64,
    output_path: &Path,
) -> Result<()> {
    if ranges.is_empty() {
        return Err(PlotError::InvalidData(
            "Salary ranges cannot be empty".to_string(),
        ));
    }
    for range in ranges {
        if range.low_k > range.high_k {
            return Err(PlotError::InvalidData(format!(
                "Salary range for {} is inverted ({} > {})",
                range.category, range.low_k, range.high_k
            )));
        }
    }

    let root = BitMapBackend::new(output_path, (1200, 800)).into_drawing_area();
    root.fill(&BACKGROUND)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let n = ranges.len();
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Market Salary Ranges vs. Joshua's $60K Ask",
            ("sans-serif", 40).into_font().color(&TEXT),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(250)
        .build_cartesian_2d(0.0..410.0f64, (0..n).into_segmented())
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .light_line_style(GRID)
        .axis_style(EDGE)
        .x_desc("Annual Salary (thousands)")
        .axis_desc_style(("sans-serif", 24).into_font().color(&TEXT))
        .label_style(("sans-serif", 18).into_font().color(&MUTED))
        .y_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) if *i < n => row_range(ranges, *i).category.to_string(),
            _ => String::new(),
        })
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Range bars, one full band per category
    chart
        .draw_series(ranges.iter().enumerate().map(|(idx, range)| {
            let row = n - 1 - idx;
            Rectangle::new(
                [
                    (range.low_k, SegmentValue::Exact(row)),
                    (range.high_k, SegmentValue::Exact(row + 1)),
                ],
                ACCENT.mix(0.7).filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Dollar labels at both ends of each bar
    let label_font = ("sans-serif", 16).into_font().color(&MUTED);
    let right_anchor = label_font.clone().pos(Pos::new(HPos::Right, VPos::Center));
    let left_anchor = label_font.pos(Pos::new(HPos::Left, VPos::Center));
    chart
        .draw_series(ranges.iter().enumerate().map(|(idx, range)| {
            let row = n - 1 - idx;
            Text::new(
                format!("${:.0}K", range.low_k),
                (range.low_k - 4.0, SegmentValue::CenterOf(row)),
                right_anchor.clone(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    chart
        .draw_series(ranges.iter().enumerate().map(|(idx, range)| {
            let row = n - 1 - idx;
            Text::new(
                format!("${:.0}K", range.high_k),
                (range.high_k + 4.0, SegmentValue::CenterOf(row)),
                left_anchor.clone(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Asking salary marker spanning all rows
    chart
        .draw_series(LineSeries::new(
            vec![
                (asking_k, SegmentValue::Exact(0)),
                (asking_k, SegmentValue::Exact(n)),
            ],
            GOLD.stroke_width(3),
        ))
        .map_err(|e| PlotError::Drawing(e.to_string()))?
        .label(format!("Joshua's ask: ${:.0}K", asking_k))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GOLD.stroke_width(3)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(crate::theme::SURFACE.mix(0.9))
        .border_style(EDGE)
        .label_font(("sans-serif", 18).into_font().color(&TEXT))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SALARY_RANGES;

    #[test]
    fn test_row_range_inverts_declaration_order() {
        // Row 0 is the bottom band; the last declared category lands there.
        let bottom = row_range(&SALARY_RANGES, 0);
        assert_eq!(bottom.category, "Data Engineer");
        let top = row_range(&SALARY_RANGES, SALARY_RANGES.len() - 1);
        assert_eq!(top.category, "Data Analyst");
    }

    #[test]
    fn test_rejects_empty_input() {
        let path = std::env::temp_dir().join("salary_gap_empty.png");
        let result = create_salary_gap_chart(&[], 60.0, &path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let path = std::env::temp_dir().join("salary_gap_inverted.png");
        let ranges = [SalaryRange {
            category: "Broken",
            low_k: 200.0,
            high_k: 100.0,
        }];
        let result = create_salary_gap_chart(&ranges, 60.0, &path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_renders_chart_file() {
        let path = std::env::temp_dir().join("salary_gap_chart.png");
        let _ = std::fs::remove_file(&path);

        create_salary_gap_chart(&SALARY_RANGES, 60.0, &path).unwrap();
        assert!(path.exists());

        let _ = std::fs::remove_file(&path);
    }
}
