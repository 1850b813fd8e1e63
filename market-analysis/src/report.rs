//! Executive summary report assembly
//!
//! Builds the eight-section plain-text report and writes it to disk. Tables
//! are rendered with the [`tabled`] crate; section headers use `=`/`─` rules.

use crate::analysis::rarity::rarity_bar;
use crate::model::{Candidate, MarketSearch, SalaryStats, SkillRarity, ValueProposition};
use chrono::Local;
use std::path::Path;
use tabled::{Table, Tabled};

/// Errors that can occur during report generation
#[derive(Debug)]
pub enum ReportError {
    FileWrite(std::io::Error),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::FileWrite(e) => write!(f, "Failed to write report: {}", e),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::FileWrite(err)
    }
}

type Result<T> = core::result::Result<T, ReportError>;

/// Comparable market rate for one of the candidate's skill areas
#[derive(Tabled)]
struct RateRow {
    #[tabled(rename = "Skill Area")]
    area: &'static str,
    #[tabled(rename = "Typical Range")]
    range: &'static str,
}

/// Per-category listing counts for the demand summary table
#[derive(Tabled)]
struct DemandRow {
    #[tabled(rename = "Search Category")]
    category: &'static str,
    #[tabled(rename = "Results")]
    results: String,
    #[tabled(rename = "Nashville")]
    nashville: String,
}

/// Format an integer with `,` thousands separators
pub fn fmt_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Signed variant of [`fmt_thousands`]
pub fn fmt_thousands_signed(value: i64) -> String {
    if value < 0 {
        format!("-{}", fmt_thousands(value.unsigned_abs()))
    } else {
        fmt_thousands(value as u64)
    }
}

/// Assemble the complete executive summary report
pub fn build_report(
    candidate: &Candidate,
    searches: &[MarketSearch],
    market: &SalaryStats,
    nashville: &SalaryStats,
    rarity: &[SkillRarity],
    value: &ValueProposition,
    total_dice_tech_jobs: u64,
) -> String {
    let total_listings: u64 = searches.iter().map(|s| s.total_results).sum();

    let mut report: Vec<String> = Vec::new();
    let heavy_rule = "=".repeat(80);
    let light_rule = "─".repeat(80);

    report.push(heavy_rule.clone());
    report.push("  NASHVILLE TECH TALENT MARKET ANALYSIS".to_string());
    report.push(format!("  Executive Summary — {}", candidate.name));
    report.push(format!(
        "  Generated: {}",
        Local::now().format("%B %d, %Y")
    ));
    report.push(format!(
        "  Data Source: Dice.com live job data ({} listings analyzed)",
        fmt_thousands(total_listings)
    ));
    report.push(format!(
        "  Total Dice tech jobs nationwide: {}",
        fmt_thousands(total_dice_tech_jobs)
    ));
    report.push(heavy_rule.clone());

    push_candidate_overview(&mut report, &light_rule, candidate);
    push_market_snapshot(&mut report, &light_rule, searches);
    push_salary_analysis(&mut report, &light_rule, candidate, market, nashville, value);
    push_rarity_index(&mut report, &light_rule, rarity);
    push_cost_benefit(&mut report, &light_rule, value);
    push_nashville_opportunities(&mut report, &light_rule, searches);
    push_demand_summary(&mut report, &light_rule, searches, total_dice_tech_jobs);
    push_summary(&mut report, &light_rule, value);

    report.join("\n")
}

/// Write the assembled report text to a file
pub fn write_report(path: &Path, report: &str) -> Result<()> {
    std::fs::write(path, report)?;
    Ok(())
}

fn push_candidate_overview(report: &mut Vec<String>, rule: &str, candidate: &Candidate) {
    report.push(format!("\n{}", rule));
    report.push("  1. CANDIDATE OVERVIEW".to_string());
    report.push(rule.to_string());
    report.push(format!("  Name:            {}", candidate.name));
    report.push(format!("  Current Location: {}", candidate.location));
    report.push(format!("  Target Market:   {}", candidate.target_market));
    report.push(format!(
        "  Asking Salary:   ${}/year (${}/hr)",
        fmt_thousands(candidate.asking_salary),
        candidate.asking_hourly
    ));
    report.push(format!("  Education:       {}", candidate.education));
    report.push(format!(
        "  Certifications:  {}",
        candidate.certifications.join(", ")
    ));
    report.push("\n  Core Skills:".to_string());
    for skill in &candidate.core_skills {
        report.push(format!("    • {}", skill));
    }
    report.push("\n  Experience Highlights:".to_string());
    for exp in &candidate.experience_highlights {
        report.push(format!("    • {}", exp));
    }
}

fn push_market_snapshot(report: &mut Vec<String>, rule: &str, searches: &[MarketSearch]) {
    report.push(format!("\n{}", rule));
    report.push("  2. NASHVILLE JOB MARKET SNAPSHOT (Dice.com, Feb 2026)".to_string());
    report.push(rule.to_string());

    for search in searches {
        report.push(format!("\n  [{}]", search.category));
        report.push(format!(
            "    Dice listings (Nashville 25mi + remote): {}",
            fmt_thousands(search.total_results)
        ));
        if search.nashville_local.is_empty() {
            report.push("    Nashville-local positions: 0 (remote-only market)".to_string());
        } else {
            report.push(format!(
                "    Nashville-local positions: {}",
                search.nashville_local.len()
            ));
            for job in &search.nashville_local {
                let salary = match (job.salary_annual_low, job.salary_annual_high) {
                    (Some(low), Some(high)) => format!(
                        " — ${}–${}/yr",
                        fmt_thousands(low),
                        fmt_thousands(high)
                    ),
                    (Some(low), None) => format!(" — ${}/yr+", fmt_thousands(low)),
                    _ => String::new(),
                };
                report.push(format!(
                    "      • {} @ {} ({}){}",
                    job.title, job.company, job.workplace, salary
                ));
            }
        }
        if let Some(note) = search.note {
            report.push(format!("    Note: {}", note));
        }
    }
}

fn push_salary_analysis(
    report: &mut Vec<String>,
    rule: &str,
    candidate: &Candidate,
    market: &SalaryStats,
    nashville: &SalaryStats,
    value: &ValueProposition,
) {
    report.push(format!("\n{}", rule));
    report.push("  3. SALARY ANALYSIS".to_string());
    report.push(rule.to_string());

    report.push(format!(
        "\n  A) National Market ({} salary data points):",
        market.sample_count
    ));
    push_stats_block(report, market);

    report.push(format!(
        "\n  B) Nashville-Local ({} salary data points):",
        nashville.sample_count
    ));
    push_stats_block(report, nashville);

    report.push(format!(
        "\n  C) Joshua's Asking Salary:   ${}/yr (${}/hr)",
        fmt_thousands(candidate.asking_salary),
        candidate.asking_hourly
    ));
    report.push(format!(
        "     vs National Median Mid:   ${} below market ({}%)",
        fmt_thousands_signed(value.savings_vs_national_median),
        value.discount_pct_vs_national
    ));
    report.push(format!(
        "     vs Nashville Avg Mid:     ${} below market ({}%)",
        fmt_thousands_signed(value.savings_vs_nashville_avg),
        value.discount_pct_vs_nashville
    ));
}

fn push_stats_block(report: &mut Vec<String>, stats: &SalaryStats) {
    report.push(format!(
        "     Lowest posted:   ${}/yr",
        fmt_thousands(stats.min_low)
    ));
    report.push(format!(
        "     Highest posted:  ${}/yr",
        fmt_thousands(stats.max_high)
    ));
    report.push(format!(
        "     Average range:   ${} – ${}/yr",
        fmt_thousands(stats.avg_low),
        fmt_thousands(stats.avg_high)
    ));
    report.push(format!(
        "     Median range:    ${} – ${}/yr",
        fmt_thousands(stats.median_low),
        fmt_thousands(stats.median_high)
    ));
}

fn push_rarity_index(report: &mut Vec<String>, rule: &str, rarity: &[SkillRarity]) {
    report.push(format!("\n{}", rule));
    report.push("  4. SKILL RARITY INDEX".to_string());
    report.push(rule.to_string());
    report.push("  (1 = very common  →  10 = extremely rare)\n".to_string());

    for entry in rarity {
        report.push(format!(
            "  [{}] {}/10  {}",
            rarity_bar(entry.rarity_score),
            entry.rarity_score,
            entry.skill
        ));
        report.push(format!(
            "           {}  |  Dice: {}",
            entry.rarity, entry.dice_mentions
        ));
        report.push(format!("           {}", entry.notes));
        report.push(String::new());
    }
}

fn push_cost_benefit(report: &mut Vec<String>, rule: &str, value: &ValueProposition) {
    report.push(rule.to_string());
    report.push("  5. COST-BENEFIT OVERVIEW".to_string());
    report.push(rule.to_string());

    report.push(format!(
        "\n  At $60,000/year, Joshua's asking salary positions well below market:\n\n    \
         • {}% below the national median for comparable roles\n    \
         • {}% below the Nashville average for comparable roles\n    \
         • Represents ~${}/yr in savings vs. national median\n    \
         • Represents ~${}/yr in savings vs. Nashville average\n",
        value.discount_pct_vs_national,
        value.discount_pct_vs_nashville,
        fmt_thousands_signed(value.savings_vs_national_median),
        fmt_thousands_signed(value.savings_vs_nashville_avg),
    ));

    let rates = vec![
        RateRow { area: "Data Analyst (Python, SQL, Excel)", range: "$56K – $160K" },
        RateRow { area: "Power BI / Dashboard Developer", range: "$62K – $166K" },
        RateRow { area: "Node.js Automation Developer", range: "$100K – $150K" },
        RateRow { area: "AI/ML Practitioner", range: "$80K – $257K" },
        RateRow { area: "Data Scientist", range: "$97K – $237K" },
        RateRow { area: "Data Engineer", range: "$48K – $223K" },
        RateRow { area: "MCP-Certified (Anthropic Advanced)", range: "Emerging / rare" },
        RateRow { area: "CompTIA Quad-Certified", range: "$62K – $135K" },
    ];
    report.push("  Comparable market rates for Joshua's skill areas:\n".to_string());
    report.push(indent_table(&Table::new(rates).to_string()));

    report.push(
        "\n  Joshua's profile combines data analytics, AI/ML proficiency, full-stack\n  \
         JavaScript, MCP certification, and four CompTIA certifications — a breadth\n  \
         of capability that typically commands significantly higher compensation.\n\n  \
         The MCP certification is particularly noteworthy: as of February 2026,\n  \
         fewer than a handful of Dice listings explicitly mention Model Context\n  \
         Protocol by name, yet enterprise adoption of agentic AI frameworks is\n  \
         accelerating. An Anthropic Advanced MCP-certified practitioner who also\n  \
         builds dashboards, writes Python, and models revenue is an uncommon find.\n"
            .to_string(),
    );
}

fn push_nashville_opportunities(report: &mut Vec<String>, rule: &str, searches: &[MarketSearch]) {
    report.push(rule.to_string());
    report.push("  6. NASHVILLE-AREA OPPORTUNITIES (Dice, Feb 2026)".to_string());
    report.push(rule.to_string());
    report.push("  Live positions in or near Nashville aligned with Joshua's skills:\n".to_string());

    for search in searches {
        for job in &search.nashville_local {
            let salary = match (job.salary_annual_low, job.salary_annual_high) {
                (Some(low), Some(high)) => {
                    format!("${}–${}/yr", fmt_thousands(low), fmt_thousands(high))
                }
                _ => "DOE".to_string(),
            };
            report.push(format!("    • {}", job.title));
            report.push(format!(
                "      {}  |  {}  |  {} / {}  |  {}",
                job.company, job.location, job.employment_type, job.workplace, salary
            ));
            report.push(String::new());
        }
    }
}

fn push_demand_summary(
    report: &mut Vec<String>,
    rule: &str,
    searches: &[MarketSearch],
    total_dice_tech_jobs: u64,
) {
    let total_listings: u64 = searches.iter().map(|s| s.total_results).sum();

    report.push(rule.to_string());
    report.push("  7. MARKET DEMAND SUMMARY".to_string());
    report.push(rule.to_string());
    report.push(format!(
        "\n  Total Dice.com tech job listings (nationwide): {}",
        fmt_thousands(total_dice_tech_jobs)
    ));
    report.push(format!(
        "  Listings analyzed across Joshua's skill categories: {}\n",
        fmt_thousands(total_listings)
    ));

    let rows: Vec<DemandRow> = searches
        .iter()
        .map(|search| DemandRow {
            category: search.category,
            results: fmt_thousands(search.total_results),
            nashville: format!("{} positions", search.nashville_local.len()),
        })
        .collect();
    report.push(indent_table(&Table::new(rows).to_string()));

    report.push(String::new());
    report.push("  Nashville shows moderate but growing demand for data and BI talent.".to_string());
    report.push("  AI/ML roles are expanding nationally (1,062 listings), and Nashville".to_string());
    report.push("  is attracting AI companies (Jobot, Vanderbilt, Oracle). MCP skills".to_string());
    report.push("  face near-zero competition in the current talent pool.".to_string());
}

fn push_summary(report: &mut Vec<String>, rule: &str, value: &ValueProposition) {
    report.push(format!("\n{}", rule));
    report.push("  8. SUMMARY".to_string());
    report.push(rule.to_string());
    report.push(format!(
        "\n  Joshua Jones brings an unusual combination of skills to the Nashville market:\n\n  \
         • Proven ability to build predictive models, automate dashboards, and\n    \
         extract insights from APIs — directly applicable to Nashville employers\n    \
         like Ascension, Vanderbilt, Oracle, and growing startups.\n\n  \
         • MCP certification and AI/ML proficiency position him ahead of the\n    \
         curve as Nashville's tech sector expands into agentic AI.\n\n  \
         • At $60K/year, his asking salary is well below the market median for\n    \
         professionals with comparable skills ({national}% below national,\n    \
         {nashville}% below Nashville average), offering meaningful cost\n    \
         efficiency for an employer.\n\n  \
         • Four CompTIA certifications plus Anthropic Advanced MCP demonstrate\n    \
         breadth and verifiable competency uncommon for an early-career candidate.\n\n  \
         • A BS in Data Analytics at WGU (expected Dec 2026) provides additional\n    \
         confidence in continued professional development.\n",
        national = value.discount_pct_vs_national,
        nashville = value.discount_pct_vs_nashville,
    ));
    report.push("  ═══════════════════════════════════════════════════════════════════════".to_string());
    report.push(
        "  This analysis was generated using live Dice.com job data (Feb 14, 2026)\n  \
         via the Dice MCP API. All salary figures are based on posted ranges and\n  \
         annualized at 2,080 hours/year for hourly rates.\n\n  \
         AI DISCLOSURE: This report was compiled using AI-powered job search\n  \
         and analysis. All job listing data was retrieved from Dice.com. Please\n  \
         verify all figures directly with employers before making decisions."
            .to_string(),
    );
    report.push("  ═══════════════════════════════════════════════════════════════════════".to_string());
}

/// Indent a rendered table so it sits inside the report body
fn indent_table(table: &str) -> String {
    table
        .lines()
        .map(|line| format!("    {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{
        compute_nashville_salary_stats, compute_salary_stats, skill_rarity_ranking,
        value_proposition,
    };
    use crate::data;

    fn full_report() -> String {
        let candidate = data::candidate();
        let searches = data::market_searches();
        let market = compute_salary_stats(&searches);
        let nashville = compute_nashville_salary_stats(&searches);
        let rarity = skill_rarity_ranking(data::skill_rarity_index());
        let value = value_proposition(candidate.asking_salary, &market, &nashville);
        build_report(
            &candidate,
            &searches,
            &market,
            &nashville,
            &rarity,
            &value,
            data::TOTAL_DICE_TECH_JOBS,
        )
    }

    #[test]
    fn test_fmt_thousands() {
        assert_eq!(fmt_thousands(0), "0");
        assert_eq!(fmt_thousands(999), "999");
        assert_eq!(fmt_thousands(60_000), "60,000");
        assert_eq!(fmt_thousands(1_234_567), "1,234,567");
        assert_eq!(fmt_thousands_signed(-68_718), "-68,718");
    }

    #[test]
    fn test_report_contains_all_sections() {
        let report = full_report();
        for header in [
            "1. CANDIDATE OVERVIEW",
            "2. NASHVILLE JOB MARKET SNAPSHOT",
            "3. SALARY ANALYSIS",
            "4. SKILL RARITY INDEX",
            "5. COST-BENEFIT OVERVIEW",
            "6. NASHVILLE-AREA OPPORTUNITIES",
            "7. MARKET DEMAND SUMMARY",
            "8. SUMMARY",
        ] {
            assert!(report.contains(header), "missing section: {}", header);
        }
    }

    #[test]
    fn test_report_headline_figures() {
        let report = full_report();
        assert!(report.contains("Total Dice tech jobs nationwide: 68,718"));
        assert!(report.contains("2,214 listings analyzed"));
        assert!(report.contains("$60,000/year ($28.85/hr)"));
        // MCP category has no local postings
        assert!(report.contains("Nashville-local positions: 0 (remote-only market)"));
    }

    #[test]
    fn test_report_tables_rendered() {
        let report = full_report();
        assert!(report.contains("Skill Area"));
        assert!(report.contains("Search Category"));
        assert!(report.contains("MCP-Certified (Anthropic Advanced)"));
        // Demand rows carry local position counts
        assert!(report.contains("6 positions"));
        assert!(report.contains("0 positions"));
    }

    #[test]
    fn test_rarity_section_shows_score_bars() {
        let report = full_report();
        assert!(report.contains("[██████████] 10/10  Model Context Protocol (MCP)"));
        assert!(report.contains("[█████░░░░░] 5/10  JavaScript / Node.js (for data dashboarding)"));
    }
}
