mod analysis;
mod data;
mod export;
mod model;
mod report;

use std::path::Path;
use thiserror::Error;

use analysis::{
    compute_nashville_salary_stats, compute_salary_stats, skill_rarity_ranking, value_proposition,
};
use export::ExportPayload;

/// Output file for the plain-text executive summary
const REPORT_FILE: &str = "Nashville_Market_Analysis_Executive_Summary.txt";

/// Output file for the structured JSON export
const JSON_FILE: &str = "nashville_analysis_data.json";

/// Errors that can occur while generating the analysis outputs
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Report generation error: {0}")]
    Report(#[from] report::ReportError),

    #[error("Export error: {0}")]
    Export(#[from] export::ExportError),
}

type Result<T> = core::result::Result<T, AnalysisError>;

fn main() -> Result<()> {
    let candidate = data::candidate();
    let searches = data::market_searches();

    // Derived statistics, recomputed fresh from the embedded constants
    let market_stats = compute_salary_stats(&searches);
    let nashville_stats = compute_nashville_salary_stats(&searches);
    let rarity = skill_rarity_ranking(data::skill_rarity_index());
    let value = value_proposition(candidate.asking_salary, &market_stats, &nashville_stats);
    let total_listings: u64 = searches.iter().map(|s| s.total_results).sum();

    let report_text = report::build_report(
        &candidate,
        &searches,
        &market_stats,
        &nashville_stats,
        &rarity,
        &value,
        data::TOTAL_DICE_TECH_JOBS,
    );
    println!("{}", report_text);

    report::write_report(Path::new(REPORT_FILE), &report_text)?;
    println!("\n✅ Report saved to: {}", REPORT_FILE);

    let payload = ExportPayload::new(
        &candidate,
        &market_stats,
        &nashville_stats,
        &rarity,
        &value,
        total_listings,
        data::TOTAL_DICE_TECH_JOBS,
    );
    export::write_json_export(Path::new(JSON_FILE), &payload)?;
    println!("✅ Structured data saved to: {}", JSON_FILE);

    Ok(())
}
