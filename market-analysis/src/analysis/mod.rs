//! Derived statistics over the embedded dataset
//!
//! This module contains the aggregation logic for:
//! - Salary range statistics (market-wide and Nashville-local)
//! - Skill rarity ranking
//! - Value proposition / salary discount computation

pub mod rarity;
pub mod salary;
pub mod value;

// Re-export analysis functions for convenience
pub use rarity::skill_rarity_ranking;
pub use salary::{compute_nashville_salary_stats, compute_salary_stats};
pub use value::value_proposition;
