//! Market visualization generator
//!
//! Renders the four market-analysis charts as PNG files under the crate's
//! `visuals/` directory:
//! - `salary_gap_chart.png`: posted salary ranges vs. the candidate's ask
//! - `skill_rarity_chart.png`: rarity scores per skill, colored by tier
//! - `radar_chart.png`: multi-discipline coverage vs. a typical analyst
//! - `skill_rarity_bubble.png`: rarity vs. demand vs. salary ceiling

mod charts;
mod data;
mod theme;

use charts::{
    create_radar_chart, create_rarity_bubble_chart, create_rarity_chart, create_salary_gap_chart,
};
use data::{
    ASKING_SALARY_K, BUBBLE_POINTS, RADAR_CANDIDATE, RADAR_DIMENSIONS, RADAR_TYPICAL_ANALYST,
    RARITY_BARS, SALARY_RANGES,
};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
enum VisualsError {
    #[error("Failed to create output directory: {0}")]
    OutputDir(#[from] std::io::Error),

    #[error("Chart generation failed: {0}")]
    Plot(#[from] charts::PlotError),
}

fn main() -> Result<(), VisualsError> {
    let output_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("visuals");
    std::fs::create_dir_all(&output_dir)?;

    println!("🎨 Generating market visualizations...\n");

    let salary_gap = output_dir.join("salary_gap_chart.png");
    create_salary_gap_chart(&SALARY_RANGES, ASKING_SALARY_K, &salary_gap)?;
    println!("✅ Saved: {}", salary_gap.display());

    let rarity = output_dir.join("skill_rarity_chart.png");
    create_rarity_chart(&RARITY_BARS, &rarity)?;
    println!("✅ Saved: {}", rarity.display());

    let radar = output_dir.join("radar_chart.png");
    create_radar_chart(
        &RADAR_DIMENSIONS,
        &RADAR_CANDIDATE,
        &RADAR_TYPICAL_ANALYST,
        &radar,
    )?;
    println!("✅ Saved: {}", radar.display());

    let bubble = output_dir.join("skill_rarity_bubble.png");
    create_rarity_bubble_chart(&BUBBLE_POINTS, &bubble)?;
    println!("✅ Saved: {}", bubble.display());

    println!("\n🎨 All visualizations generated.");
    Ok(())
}
