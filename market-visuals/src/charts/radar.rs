//! Multi-discipline radar chart
//!
//! Compares the candidate's coverage against a typical data analyst profile
//! across six discipline axes. Drawn on a plain cartesian plane with a manual
//! polar projection. Saved as a 900x900 PNG.

use super::{PlotError, Result};
use crate::theme::{ACCENT, BACKGROUND, EDGE, GRID, MUTED, SURFACE, TEXT};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// Score rings drawn on the radar grid
const RING_VALUES: [f64; 5] = [2.0, 4.0, 6.0, 8.0, 10.0];

/// Radius at which the discipline labels sit
const LABEL_RADIUS: f64 = 11.5;

/// Project a polar (score, axis index) point onto the cartesian plane
///
/// Axis 0 points straight up; axes proceed clockwise.
fn polar_point(score: f64, index: usize, count: usize) -> (f64, f64) {
    let angle = index as f64 / count as f64 * std::f64::consts::TAU;
    (score * angle.sin(), score * angle.cos())
}

/// Closed ring of points at the given radius
fn ring_points(radius: f64) -> Vec<(f64, f64)> {
    (0..=120).map(|i| polar_point(radius, i, 120)).collect()
}

/// Closed polygon outline for a score profile
fn profile_points(scores: &[f64]) -> Vec<(f64, f64)> {
    let count = scores.len();
    scores
        .iter()
        .enumerate()
        .map(|(i, &score)| polar_point(score, i, count))
        .collect()
}

/// Render the multi-discipline radar chart
///
/// Both profiles must have one score per dimension, all within 0–10, and at
/// least three dimensions are required to form a polygon.
pub fn create_radar_chart(
    dimensions: &[&str],
    candidate: &[f64],
    typical: &[f64],
    output_path: &Path,
) -> Result<()> {
    if dimensions.len() < 3 {
        return Err(PlotError::InvalidData(
            "Radar chart needs at least three dimensions".to_string(),
        ));
    }
    if candidate.len() != dimensions.len() || typical.len() != dimensions.len() {
        return Err(PlotError::InvalidData(format!(
            "Profile lengths ({}, {}) do not match dimension count {}",
            candidate.len(),
            typical.len(),
            dimensions.len()
        )));
    }
    for &score in candidate.iter().chain(typical.iter()) {
        if !(0.0..=10.0).contains(&score) {
            return Err(PlotError::InvalidData(format!(
                "Radar score {:.1} is outside valid range 0-10",
                score
            )));
        }
    }

    let root = BitMapBackend::new(output_path, (900, 900)).into_drawing_area();
    root.fill(&BACKGROUND)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Multi-Discipline Coverage: Joshua Jones vs. Typical Data Analyst",
            ("sans-serif", 28).into_font().color(&TEXT),
        )
        .margin(20)
        .build_cartesian_2d(-13.0..13.0f64, -13.0..13.0f64)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let count = dimensions.len();

    // Concentric score rings
    for radius in RING_VALUES {
        chart
            .draw_series(std::iter::once(PathElement::new(
                ring_points(radius),
                GRID.stroke_width(1),
            )))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    // Spokes out to just past the outer ring
    for i in 0..count {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(0.0, 0.0), polar_point(10.5, i, count)],
                GRID.stroke_width(1),
            )))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    // Ring value labels along the vertical axis
    let ring_font = ("sans-serif", 14).into_font().color(&MUTED);
    chart
        .draw_series(RING_VALUES.iter().map(|&radius| {
            Text::new(format!("{:.0}", radius), (0.25, radius), ring_font.clone())
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Discipline labels beyond the outer ring
    let dim_font = ("sans-serif", 18)
        .into_font()
        .color(&TEXT)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart
        .draw_series(dimensions.iter().enumerate().map(|(i, label)| {
            Text::new(
                label.to_string(),
                polar_point(LABEL_RADIUS, i, count),
                dim_font.clone(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Typical analyst profile (muted fill, thin outline)
    let typical_points = profile_points(typical);
    chart
        .draw_series(std::iter::once(Polygon::new(
            typical_points.clone(),
            MUTED.mix(0.15),
        )))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    let mut typical_outline = typical_points.clone();
    typical_outline.push(typical_points[0]);
    chart
        .draw_series(LineSeries::new(typical_outline, MUTED.stroke_width(2)))
        .map_err(|e| PlotError::Drawing(e.to_string()))?
        .label("Typical Data Analyst")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], MUTED.stroke_width(2)));

    // Candidate profile (accent fill, heavier outline, point markers)
    let candidate_points = profile_points(candidate);
    chart
        .draw_series(std::iter::once(Polygon::new(
            candidate_points.clone(),
            ACCENT.mix(0.2),
        )))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    let mut candidate_outline = candidate_points.clone();
    candidate_outline.push(candidate_points[0]);
    chart
        .draw_series(LineSeries::new(candidate_outline, ACCENT.stroke_width(3)))
        .map_err(|e| PlotError::Drawing(e.to_string()))?
        .label("Joshua Jones")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ACCENT.stroke_width(3)));
    chart
        .draw_series(
            candidate_points
                .iter()
                .map(|&point| Circle::new(point, 5, ACCENT.filled())),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(SURFACE.mix(0.9))
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
    use crate::data::{RADAR_CANDIDATE, RADAR_DIMENSIONS, RADAR_TYPICAL_ANALYST};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_polar_point_cardinal_directions() {
        let (x, y) = polar_point(10.0, 0, 6);
        assert!(close(x, 0.0) && close(y, 10.0), "axis 0 points up");

        let (x, y) = polar_point(10.0, 3, 6);
        assert!(close(x, 0.0) && close(y, -10.0), "axis 3 points down");
    }

    #[test]
    fn test_ring_points_closed() {
        let ring = ring_points(4.0);
        assert_eq!(ring.len(), 121);
        assert!(close(ring[0].0, ring[120].0));
        assert!(close(ring[0].1, ring[120].1));
        for &(x, y) in &ring {
            assert!(close((x * x + y * y).sqrt(), 4.0));
        }
    }

    #[test]
    fn test_profile_points_one_per_dimension() {
        let points = profile_points(&RADAR_CANDIDATE);
        assert_eq!(points.len(), RADAR_DIMENSIONS.len());
        // First dimension sits on the vertical axis at its score
        assert!(close(points[0].0, 0.0));
        assert!(close(points[0].1, 9.0));
    }

    #[test]
    fn test_rejects_mismatched_profile_lengths() {
        let path = std::env::temp_dir().join("radar_mismatch.png");
        let result = create_radar_chart(&RADAR_DIMENSIONS, &[1.0, 2.0], &RADAR_TYPICAL_ANALYST, &path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    fn test_rejects_out_of_range_score() {
        let path = std::env::temp_dir().join("radar_bad_score.png");
        let bad = [9.0, 8.0, 7.0, 8.0, 8.0, 12.0];
        let result = create_radar_chart(&RADAR_DIMENSIONS, &bad, &RADAR_TYPICAL_ANALYST, &path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_renders_chart_file() {
        let path = std::env::temp_dir().join("radar_chart.png");
        let _ = std::fs::remove_file(&path);

        create_radar_chart(
            &RADAR_DIMENSIONS,
            &RADAR_CANDIDATE,
            &RADAR_TYPICAL_ANALYST,
            &path,
        )
        .unwrap();
        assert!(path.exists());

        let _ = std::fs::remove_file(&path);
    }
}
