//! The embedded chart datasets
//!
//! Summarized figures from the Feb 2026 Dice.com market capture, entered by
//! hand. Salary figures are in thousands of dollars per year.

/// The candidate's asking salary in $K/yr
pub const ASKING_SALARY_K: f64 = 60.0;

/// A market salary range for one search category, in $K/yr
#[derive(Debug, Clone, Copy)]
pub struct SalaryRange {
    pub category: &'static str,
    pub low_k: f64,
    pub high_k: f64,
}

/// Posted salary ranges per search category
pub const SALARY_RANGES: [SalaryRange; 8] = [
    SalaryRange { category: "Data Analyst", low_k: 56.0, high_k: 213.0 },
    SalaryRange { category: "Python Developer", low_k: 83.0, high_k: 286.0 },
    SalaryRange { category: "AI / ML Engineer", low_k: 80.0, high_k: 257.0 },
    SalaryRange { category: "BI Analyst / Power BI", low_k: 62.0, high_k: 184.0 },
    SalaryRange { category: "MCP / AI Automation", low_k: 80.0, high_k: 237.0 },
    SalaryRange { category: "Node.js / JavaScript", low_k: 101.0, high_k: 380.0 },
    SalaryRange { category: "Data Scientist", low_k: 97.0, high_k: 237.0 },
    SalaryRange { category: "Data Engineer", low_k: 48.0, high_k: 223.0 },
];

/// A skill with its rarity score, for the bar chart
#[derive(Debug, Clone, Copy)]
pub struct RarityBar {
    pub skill: &'static str,
    pub score: u32,
}

/// Rarity scores, most common first (the chart inverts the axis)
pub const RARITY_BARS: [RarityBar; 8] = [
    RarityBar { skill: "JavaScript / Node.js", score: 5 },
    RarityBar { skill: "API Integration", score: 6 },
    RarityBar { skill: "Python (Data/Analytics)", score: 6 },
    RarityBar { skill: "Power BI / Visualization", score: 7 },
    RarityBar { skill: "Revenue Forecasting", score: 7 },
    RarityBar { skill: "CompTIA Quad-Stack", score: 8 },
    RarityBar { skill: "AI/ML + Data Analytics", score: 8 },
    RarityBar { skill: "Model Context Protocol", score: 10 },
];

/// Discipline axes for the radar chart
pub const RADAR_DIMENSIONS: [&str; 6] = [
    "Data Analytics & Visualization",
    "AI / ML",
    "Software Development",
    "Business Intelligence",
    "Cloud & Infrastructure",
    "MCP / Agentic AI",
];

/// Candidate coverage scores per radar dimension (out of 10)
pub const RADAR_CANDIDATE: [f64; 6] = [9.0, 8.0, 7.0, 8.0, 8.0, 10.0];

/// Typical data analyst coverage scores per radar dimension (out of 10)
pub const RADAR_TYPICAL_ANALYST: [f64; 6] = [7.0, 2.0, 3.0, 5.0, 2.0, 0.0];

/// A skill plotted as rarity × demand × salary ceiling
#[derive(Debug, Clone, Copy)]
pub struct BubblePoint {
    pub skill: &'static str,
    pub rarity_score: u32,
    /// Approximate Dice.com listing presence
    pub dice_listings: f64,
    /// High end of the comparable salary range, in $K/yr
    pub salary_ceiling_k: f64,
}

/// Bubble chart dataset
pub const BUBBLE_POINTS: [BubblePoint; 8] = [
    BubblePoint { skill: "MCP", rarity_score: 10, dice_listings: 10.0, salary_ceiling_k: 237.0 },
    BubblePoint { skill: "AI/ML + Data Analytics", rarity_score: 8, dice_listings: 1062.0, salary_ceiling_k: 257.0 },
    BubblePoint { skill: "CompTIA Quad-Stack", rarity_score: 8, dice_listings: 50.0, salary_ceiling_k: 135.0 },
    BubblePoint { skill: "Power BI / Visualization", rarity_score: 7, dice_listings: 29.0, salary_ceiling_k: 166.0 },
    BubblePoint { skill: "Revenue Forecasting", rarity_score: 7, dice_listings: 5.0, salary_ceiling_k: 120.0 },
    BubblePoint { skill: "Python (Analytics)", rarity_score: 6, dice_listings: 83.0, salary_ceiling_k: 286.0 },
    BubblePoint { skill: "API Integration", rarity_score: 6, dice_listings: 200.0, salary_ceiling_k: 184.0 },
    BubblePoint { skill: "JavaScript / Node.js", rarity_score: 5, dice_listings: 105.0, salary_ceiling_k: 380.0 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_ranges_are_ordered() {
        for range in SALARY_RANGES {
            assert!(range.low_k < range.high_k, "{}", range.category);
        }
    }

    #[test]
    fn test_rarity_scores_ascend() {
        for pair in RARITY_BARS.windows(2) {
            assert!(pair[0].score <= pair[1].score);
        }
    }

    #[test]
    fn test_radar_scores_in_range() {
        for score in RADAR_CANDIDATE.iter().chain(RADAR_TYPICAL_ANALYST.iter()) {
            assert!((0.0..=10.0).contains(score));
        }
    }

    #[test]
    fn test_bubble_points_valid() {
        for point in BUBBLE_POINTS {
            assert!((1..=10).contains(&point.rarity_score), "{}", point.skill);
            assert!(point.dice_listings > 0.0, "{}", point.skill);
            assert!(point.salary_ceiling_k > 0.0, "{}", point.skill);
        }
    }
}
