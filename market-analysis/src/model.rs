//! Record types for the embedded market dataset and its derived statistics
//!
//! Everything here is built once per run from the constants in [`crate::data`]
//! and read-only afterwards. Only the types that appear in the JSON export
//! derive [`Serialize`].

use serde::Serialize;

/// Profile of the candidate being positioned against the market
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    /// Full name
    pub name: &'static str,
    /// Current location
    pub location: &'static str,
    /// Market the candidate is targeting
    pub target_market: &'static str,
    /// Asking salary in dollars per year
    pub asking_salary: u64,
    /// Asking salary as an hourly rate (2,080 hours per year, 2 decimals)
    pub asking_hourly: f64,
    /// Degree program and expected completion
    pub education: &'static str,
    /// Held certifications
    pub certifications: Vec<&'static str>,
    /// Core skill list
    pub core_skills: Vec<&'static str>,
    /// Narrative experience highlights
    pub experience_highlights: Vec<&'static str>,
}

/// A job posting physically located in or near Nashville, TN
#[derive(Debug, Clone)]
pub struct JobPosting {
    /// Posting title
    pub title: &'static str,
    /// Hiring company
    pub company: &'static str,
    /// Posting location
    pub location: &'static str,
    /// Employment type (Full-time, Contract, Contract-to-Hire)
    pub employment_type: &'static str,
    /// Workplace arrangement (On-Site, Hybrid, Remote)
    pub workplace: &'static str,
    /// Posted annual salary range lower bound, if disclosed
    pub salary_annual_low: Option<u64>,
    /// Posted annual salary range upper bound, if disclosed
    pub salary_annual_high: Option<u64>,
}

/// A national posting used only for salary-range context
///
/// Salaries are annualized; hourly rates were converted at 2,080 hours/year.
#[derive(Debug, Clone)]
pub struct SalarySample {
    /// Short description of the posting
    pub label: &'static str,
    /// Annual salary range lower bound
    pub low: u64,
    /// Annual salary range upper bound
    pub high: u64,
}

/// One Dice.com search category with its captured results
#[derive(Debug, Clone)]
pub struct MarketSearch {
    /// Search category name
    pub category: &'static str,
    /// Total Dice listings returned (Nashville 25mi radius + remote)
    pub total_results: u64,
    /// Postings located in or near Nashville
    pub nashville_local: Vec<JobPosting>,
    /// National salary samples for range context
    pub national_salary_samples: Vec<SalarySample>,
    /// Optional free-text note about the category
    pub note: Option<&'static str>,
}

/// A skill with its manually assigned market rarity score
#[derive(Debug, Clone, Serialize)]
pub struct SkillRarity {
    /// Skill label
    pub skill: &'static str,
    /// Approximate Dice.com presence, as captured during the search
    pub dice_mentions: &'static str,
    /// Rarity tier label
    pub rarity: &'static str,
    /// Manually assigned scarcity score, 1 (common) to 10 (extremely rare)
    pub rarity_score: u32,
    /// Free-text rationale
    pub notes: &'static str,
}

/// Aggregate salary range statistics over a set of postings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryStats {
    /// Lowest posted range lower bound
    pub min_low: u64,
    /// Highest posted range upper bound
    pub max_high: u64,
    /// Mean of range lower bounds, rounded to whole dollars
    pub avg_low: u64,
    /// Mean of range upper bounds, rounded to whole dollars
    pub avg_high: u64,
    /// Middle-index value of the sorted lower bounds
    pub median_low: u64,
    /// Middle-index value of the sorted upper bounds
    pub median_high: u64,
    /// Number of salary data points aggregated
    pub sample_count: usize,
}

impl SalaryStats {
    /// Zeroed statistics for an empty sample set
    pub fn empty() -> Self {
        Self {
            min_low: 0,
            max_high: 0,
            avg_low: 0,
            avg_high: 0,
            median_low: 0,
            median_high: 0,
            sample_count: 0,
        }
    }
}

/// Positioning of the candidate's asking salary against market benchmarks
#[derive(Debug, Clone, Serialize)]
pub struct ValueProposition {
    /// Candidate asking salary in dollars per year
    pub asking_salary: u64,
    /// Midpoint of the national median salary range, rounded
    pub market_median_midpoint: u64,
    /// Midpoint of the Nashville average salary range, rounded
    pub nashville_avg_midpoint: u64,
    /// Dollars below the national median midpoint
    pub savings_vs_national_median: i64,
    /// Dollars below the Nashville average midpoint
    pub savings_vs_nashville_avg: i64,
    /// Discount vs the national median midpoint, percent (1 decimal)
    pub discount_pct_vs_national: f64,
    /// Discount vs the Nashville average midpoint, percent (1 decimal)
    pub discount_pct_vs_nashville: f64,
}
