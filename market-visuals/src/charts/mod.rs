//! Chart rendering modules
//!
//! One module per output image, all drawn with the [`plotters`] crate onto
//! fixed-size PNG bitmaps:
//! - Salary gap range bars
//! - Skill rarity bars
//! - Multi-discipline radar
//! - Rarity × demand bubble chart

pub mod bubble;
pub mod radar;
pub mod rarity;
pub mod salary_gap;

// Re-export chart entry points for convenience
pub use bubble::create_rarity_bubble_chart;
pub use radar::create_radar_chart;
pub use rarity::create_rarity_chart;
pub use salary_gap::create_salary_gap_chart;

use thiserror::Error;

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = core::result::Result<T, PlotError>;
