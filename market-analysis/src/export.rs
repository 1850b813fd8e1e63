//! Structured JSON export
//!
//! Serializes the candidate profile and derived statistics into a single JSON
//! document for downstream consumption.

use crate::model::{Candidate, SalaryStats, SkillRarity, ValueProposition};
use chrono::Local;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during JSON export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write export file: {0}")]
    FileWrite(#[from] std::io::Error),

    #[error("Failed to serialize export data: {0}")]
    Serialize(#[from] serde_json::Error),
}

type Result<T> = core::result::Result<T, ExportError>;

/// Top-level shape of the JSON export
#[derive(Serialize)]
pub struct ExportPayload<'a> {
    pub candidate: &'a Candidate,
    pub market_stats: &'a SalaryStats,
    pub nashville_stats: &'a SalaryStats,
    pub skill_rarity: &'a [SkillRarity],
    pub value_proposition: &'a ValueProposition,
    pub total_listings_analyzed: u64,
    pub total_dice_tech_jobs: u64,
    pub generated_at: String,
}

impl<'a> ExportPayload<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        candidate: &'a Candidate,
        market_stats: &'a SalaryStats,
        nashville_stats: &'a SalaryStats,
        skill_rarity: &'a [SkillRarity],
        value_proposition: &'a ValueProposition,
        total_listings_analyzed: u64,
        total_dice_tech_jobs: u64,
    ) -> Self {
        Self {
            candidate,
            market_stats,
            nashville_stats,
            skill_rarity,
            value_proposition,
            total_listings_analyzed,
            total_dice_tech_jobs,
            generated_at: Local::now().to_rfc3339(),
        }
    }
}

/// Serialize the payload as pretty-printed JSON and write it to a file
pub fn write_json_export(path: &Path, payload: &ExportPayload<'_>) -> Result<()> {
    let json = serde_json::to_string_pretty(payload)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{
        compute_nashville_salary_stats, compute_salary_stats, skill_rarity_ranking,
        value_proposition,
    };
    use crate::data;
    use serde_json::Value;

    #[test]
    fn test_export_contains_documented_keys() {
        let candidate = data::candidate();
        let searches = data::market_searches();
        let market = compute_salary_stats(&searches);
        let nashville = compute_nashville_salary_stats(&searches);
        let rarity = skill_rarity_ranking(data::skill_rarity_index());
        let value = value_proposition(candidate.asking_salary, &market, &nashville);
        let total_listings: u64 = searches.iter().map(|s| s.total_results).sum();

        let payload = ExportPayload::new(
            &candidate,
            &market,
            &nashville,
            &rarity,
            &value,
            total_listings,
            data::TOTAL_DICE_TECH_JOBS,
        );

        let json = serde_json::to_string_pretty(&payload).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        let object = parsed.as_object().unwrap();

        for key in [
            "candidate",
            "market_stats",
            "nashville_stats",
            "skill_rarity",
            "value_proposition",
            "total_listings_analyzed",
            "total_dice_tech_jobs",
            "generated_at",
        ] {
            assert!(object.contains_key(key), "missing key: {}", key);
        }

        assert_eq!(parsed["total_dice_tech_jobs"], 68_718);
        assert_eq!(parsed["total_listings_analyzed"], 2_214);
        assert_eq!(parsed["candidate"]["name"], "Joshua Jones");
        assert_eq!(parsed["skill_rarity"].as_array().unwrap().len(), 8);
        assert_eq!(parsed["skill_rarity"][0]["rarity_score"], 10);
        assert_eq!(parsed["market_stats"]["sample_count"], 115);
    }
}
