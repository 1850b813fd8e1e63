//! The embedded Nashville market dataset
//!
//! Hand-entered Dice.com job data captured on 2026-02-14 (Nashville, TN 25-mi
//! radius + remote searches). Salaries are annualized where needed; hourly
//! rates were converted at 2,080 hours/year. This is the entire input surface
//! of the tool; there is no runtime configuration.

use crate::model::{Candidate, JobPosting, MarketSearch, SalarySample, SkillRarity};

/// Total Dice.com tech job listings nationwide at capture time
pub const TOTAL_DICE_TECH_JOBS: u64 = 68_718;

/// Hours per year used to annualize hourly rates
pub const HOURS_PER_YEAR: u64 = 2_080;

/// The candidate profile under analysis
pub fn candidate() -> Candidate {
    let asking_salary = 60_000;
    Candidate {
        name: "Joshua Jones",
        location: "Indianapolis, IN",
        target_market: "Nashville, TN",
        asking_salary,
        asking_hourly: (asking_salary as f64 / HOURS_PER_YEAR as f64 * 100.0).round() / 100.0,
        education: "BS Data Analytics – Western Governors University (expected Dec 2026)",
        certifications: vec![
            "CompTIA A+",
            "CompTIA Data+",
            "CompTIA Cloud+",
            "CompTIA Network+",
            "Anthropic Advanced MCP",
        ],
        core_skills: vec![
            "Python",
            "JavaScript / Node.js",
            "AI / ML",
            "Model Context Protocol (MCP)",
            "Power BI",
            "Excel",
            "Data Visualization & Dashboarding",
            "Revenue Forecasting & Profitability Modeling",
            "Customer Behavior Analytics",
            "APIs & Webhooks (Square, proprietary)",
            "Cursor AI Tooling",
        ],
        experience_highlights: vec![
            "Engineered predictive revenue models for 12 storefronts using AI (Cursor)",
            "Automated Node.js dashboards for Marketing team",
            "Extracted/analyzed high-volume customer & sales data via Square APIs",
            "4 CompTIA certs + Anthropic Advanced MCP certification",
            "Multi-discipline background: data, development, creative, e-commerce",
        ],
    }
}

fn posting(
    title: &'static str,
    company: &'static str,
    location: &'static str,
    employment_type: &'static str,
    workplace: &'static str,
    salary_annual_low: Option<u64>,
    salary_annual_high: Option<u64>,
) -> JobPosting {
    JobPosting {
        title,
        company,
        location,
        employment_type,
        workplace,
        salary_annual_low,
        salary_annual_high,
    }
}

fn sample(label: &'static str, low: u64, high: u64) -> SalarySample {
    SalarySample { label, low, high }
}

/// The full search-category catalog captured from Dice.com
pub fn market_searches() -> Vec<MarketSearch> {
    vec![
        MarketSearch {
            category: "Data Analyst",
            total_results: 144,
            nashville_local: vec![
                posting(
                    "Senior Data Analyst",
                    "Ascension Health",
                    "Nashville, TN",
                    "Full-time",
                    "Hybrid",
                    Some(70_000),
                    Some(100_000),
                ),
                posting(
                    "SAP Data Analyst",
                    "Judge Group",
                    "Brentwood, TN",
                    "Contract",
                    "On-Site",
                    Some(104_000),
                    Some(124_800),
                ),
            ],
            national_salary_samples: vec![
                sample("Data Analyst – Healthcare (Remote)", 52_000, 72_800),
                sample("Data Analyst 5 – Healthcare (Remote)", 122_013, 142_813),
                sample("SAP Data Analyst – Governance (Remote)", 139_360, 156_000),
                sample("Business Data Analyst (Remote)", 104_000, 104_000),
                sample("Data Analyst – SQL/Python (Remote)", 104_000, 114_400),
                sample("Data Analyst – Mass General (Full-time)", 53_040, 75_889),
                sample("Senior Data Analyst – Guardian Life (Full-time)", 79_310, 130_295),
                sample("Data Analyst – QinetiQ (Full-time)", 100_000, 120_000),
                sample("Data Analyst – Robert Half (Contract)", 104_000, 124_800),
                sample("School Data Analyst – Stride K12 (Full-time)", 58_000, 60_000),
                sample("Data Analyst II – Centene (Full-time)", 56_200, 101_000),
                sample(
                    "Spatial Data Analyst – Cushman & Wakefield (Full-time)",
                    68_000,
                    80_000,
                ),
                sample("Senior Data Analyst – UnitedHealth (Remote)", 89_900, 160_600),
                sample("Lead Data Analyst – Northwestern Mutual (Hybrid)", 92_750, 92_750),
                sample(
                    "Senior Enterprise Data Analyst – M&T Bank (Hybrid)",
                    125_600,
                    209_400,
                ),
                sample("IT Data Analyst II – Centene (Full-time)", 63_600, 114_600),
                sample("Senior IT Data Analyst – Centene (Full-time)", 75_300, 135_400),
                sample("Full Stack Data Analyst – M&T Bank (Full-time)", 54_080, 90_147),
                sample("Data Analyst – Cardinal Health (Full-time)", 80_900, 115_500),
                sample("Life Sciences Data Analyst – Guidehouse (Full-time)", 113_000, 188_000),
                sample(
                    "Architecture Lead Data Analyst VP – Citi (Full-time)",
                    142_320,
                    213_480,
                ),
                sample("Data Analyst, Clinical – DaVita (Full-time)", 57_784, 85_000),
                sample("Data Analytics Lead Analyst VP – Citi (Full-time)", 113_840, 170_760),
                sample(
                    "Master & Reference Data Sr. Lead – Citi (Full-time)",
                    156_160,
                    234_240,
                ),
                sample("VP Global Workforce Data Lead – Citi (Full-time)", 113_840, 170_760),
                sample(
                    "Senior Data Programmer Analyst – Boeing (Full-time)",
                    141_950,
                    192_050,
                ),
                sample("Provider Data Mgmt Analyst I – Centene (Full-time)", 40_414, 68_598),
                sample("Sr Clinical Data Analyst – Roth Staffing (Contract)", 99_840, 105_269),
                sample("Data Analyst – IT Heroes (Contract)", 104_000, 114_400),
                sample("Data Analyst – Vaco Healthcare (Contract)", 121_867, 121_867),
            ],
            note: None,
        },
        MarketSearch {
            category: "Python Developer",
            total_results: 83,
            nashville_local: vec![
                posting(
                    "Python Data Azure Engineer",
                    "SIAL Technology",
                    "Nashville, TN",
                    "Contract",
                    "Hybrid",
                    None,
                    None,
                ),
                posting(
                    "Python Analytics Developer",
                    "SIAL Technology",
                    "Nashville, TN",
                    "Contract",
                    "Hybrid",
                    None,
                    None,
                ),
                posting(
                    "Python Analytics Developer",
                    "SANS",
                    "Nashville, TN",
                    "Contract",
                    "On-Site",
                    Some(166_400),
                    Some(208_000),
                ),
                posting(
                    "Team Lead Software (C#/Python)",
                    "SIAL Technology",
                    "Nashville, TN",
                    "Full-time",
                    "On-Site",
                    None,
                    None,
                ),
            ],
            national_salary_samples: vec![
                sample(
                    "Python & Data Analytics Developer – Security (Remote)",
                    135_000,
                    155_000,
                ),
                sample("Technical Ops Analyst w/ Python (Remote)", 100_000, 170_000),
                sample("Python Web App Developer – SAIC (Remote)", 120_001, 160_000),
                sample("Senior Python Software Engineer (Remote)", 140_000, 160_000),
                sample("Lead Python Engineer – S&P (Remote)", 100_000, 150_000),
                sample("Python DB Developer – Citi (NYC)", 121_200, 181_800),
                sample("Senior Systems Engineer – ServiceNow (Full-time)", 140_700, 239_200),
                sample("Staff Systems Engineer – ServiceNow (Full-time)", 140_700, 239_200),
                sample("Lead Python Engineer – Morgan Stanley (Remote)", 150_000, 210_000),
                sample("Lead ML Engineer (Python) – Target (Full-time)", 132_000, 286_000),
                sample("Senior Python Developer – Accenture (Contract)", 106_080, 126_880),
                sample(
                    "AI & Python Engineering Lead VP – Citi (Full-time)",
                    142_320,
                    213_480,
                ),
                sample(
                    "Python & Database Developer AVP – Citi (Full-time)",
                    121_200,
                    181_800,
                ),
                sample(
                    "Senior GenAI Python Developer VP – Citi (Full-time)",
                    142_320,
                    213_480,
                ),
                sample("Benchling Developer w/ Python – Excelra (Contract)", 83_200, 93_600),
                sample(
                    "Reliability Engineer (Python/MATLAB) – OSI (Contract)",
                    124_800,
                    156_000,
                ),
            ],
            note: None,
        },
        MarketSearch {
            category: "AI / ML Engineer",
            total_results: 1_062,
            nashville_local: vec![
                posting(
                    "AI Engineer",
                    "Jobot (AI Startup)",
                    "Nashville, TN",
                    "Full-time",
                    "On-Site",
                    Some(175_000),
                    Some(200_000),
                ),
                posting(
                    "Sr AI Research Engineer",
                    "Vanderbilt University",
                    "Nashville, TN",
                    "Full-time",
                    "On-Site",
                    None,
                    None,
                ),
            ],
            national_salary_samples: vec![
                sample("Senior AI/ML Engineer – UnitedHealth (Remote)", 91_700, 163_700),
                sample("Principal AI/ML Engineer – UnitedHealth (Remote)", 134_600, 230_800),
                sample("Staff ML Engineer – Coinbase (Remote)", 218_025, 256_500),
                sample("ML Engineer Risk – Coinbase (Remote)", 161_500, 190_000),
                sample("Junior AI Engineer – Tria Federal (Remote)", 80_000, 100_000),
                sample("AI/ML Engineer – Booz Allen (Full-time)", 86_800, 198_000),
                sample("AI/ML Engineer – Lockheed Martin (Telework)", 89_300, 157_435),
                sample(
                    "Lead AI/ML Solutions Architect – Booz Allen (Full-time)",
                    112_800,
                    257_000,
                ),
                sample("Principal AI/ML Engineer – Leidos (Full-time)", 131_300, 237_350),
                sample(
                    "Full Stack AI/ML Engineer – Lockheed Martin (Full-time)",
                    89_300,
                    157_435,
                ),
                sample("AI/ML Engineer Clearance – LMI (Full-time)", 110_986, 195_154),
            ],
            note: None,
        },
        MarketSearch {
            category: "Business Intelligence Analyst",
            total_results: 213,
            nashville_local: vec![
                posting(
                    "Senior BI Analyst",
                    "Vaco by Highspring",
                    "Nashville, TN (Green Hills)",
                    "Contract-to-Hire",
                    "Hybrid",
                    Some(135_200),
                    Some(145_600),
                ),
                posting(
                    "Sr. BI Engineer",
                    "Vaco by Highspring",
                    "Brentwood, TN",
                    "Contract-to-Hire",
                    "Hybrid",
                    Some(156_000),
                    Some(176_800),
                ),
                posting(
                    "BI Developer",
                    "Nobl Q",
                    "Nashville, TN",
                    "Contract",
                    "On-Site",
                    None,
                    None,
                ),
                posting(
                    "Sr. BI Engineer (Remote, Nashville co.)",
                    "Vaco by Highspring",
                    "Remote",
                    "Contract-to-Hire",
                    "Remote",
                    Some(135_200),
                    Some(166_400),
                ),
                posting(
                    "Business Analyst II",
                    "Apex Systems",
                    "Nashville, TN",
                    "Contract",
                    "On-Site",
                    Some(62_400),
                    Some(70_720),
                ),
                posting(
                    "Sr. Associate – Transaction Analytics",
                    "Alvarez & Marsal",
                    "Nashville, TN",
                    "Full-time",
                    "On-Site",
                    Some(130_000),
                    Some(130_000),
                ),
            ],
            national_salary_samples: vec![
                sample(
                    "Sr Analyst, Data Analytics & BI – Comcast (Remote)",
                    78_016,
                    117_025,
                ),
                sample("Senior BI & Data Engineer (Remote)", 112_112, 160_160),
                sample("Lead BI Developer – Launch Potato (Remote)", 120_000, 150_000),
                sample("Senior Tableau BI Analyst – ICF (Remote)", 108_476, 184_409),
                sample(
                    "IS Business Intelligence Analyst – Robert Half (Contract)",
                    62_400,
                    68_640,
                ),
            ],
            note: None,
        },
        MarketSearch {
            category: "Power BI / Data Visualization",
            total_results: 29,
            nashville_local: vec![posting(
                "Power BI Developer/Analyst",
                "OtterBase",
                "Nashville, TN",
                "Full-time",
                "On-Site",
                Some(90_000),
                Some(95_000),
            )],
            national_salary_samples: vec![
                sample("BI Developer – Robert Half (Remote)", 108_160, 118_560),
                sample("BI Solutions Architect (On-Site CA)", 145_600, 145_600),
                sample(
                    "Senior Data Analyst Power BI – UnitedHealth (Remote)",
                    91_700,
                    163_700,
                ),
                sample("Power BI Analyst – Randstad (Contract)", 62_400, 83_200),
                sample(
                    "Data Science Analyst Power BI – Stefanini (Contract)",
                    156_000,
                    166_400,
                ),
                sample("Power BI Fabric Solution (Remote)", 120_000, 150_000),
                sample(
                    "Data Literacy Specialist (Power BI) – HonorVet (Contract)",
                    124_800,
                    145_600,
                ),
            ],
            note: None,
        },
        MarketSearch {
            category: "MCP / AI Automation",
            total_results: 158,
            nashville_local: vec![],
            national_salary_samples: vec![
                sample("Staff Cyber AI Researcher – Leidos (Remote)", 107_900, 195_050),
                sample(
                    "Principal Agentic AI Systems Engineer – Leidos (Remote)",
                    131_300,
                    237_350,
                ),
                sample("Principal AI Automation – Vertex (Contract)", 135_200, 176_800),
                sample("Junior AI Engineer – Tria Federal (Remote)", 80_000, 100_000),
                sample(
                    "Sr Python & Data Analytics Developer – Security (Remote)",
                    135_000,
                    155_000,
                ),
                sample("Lead AI/ML Engineer – UnitedHealth (Remote)", 112_700, 193_200),
                sample("Director AI – ServiceNow (Full-time)", 221_200, 387_100),
                sample("Analytics Engineer 5 – Netflix (Full-time)", 330_000, 566_000),
            ],
            note: Some(
                "MCP is an emerging protocol (Anthropic). Only a handful of job listings \
                 explicitly require it, making certified MCP practitioners extremely rare.",
            ),
        },
        MarketSearch {
            category: "Node.js / JavaScript Developer",
            total_results: 105,
            nashville_local: vec![posting(
                "Sr Software Engineer",
                "Robert Half",
                "Nashville, TN",
                "Contract",
                "On-Site",
                Some(112_320),
                Some(128_960),
            )],
            national_salary_samples: vec![
                sample(
                    "Senior Software Engineer – JS/React/Node.js (Remote)",
                    150_000,
                    150_000,
                ),
                sample("Full Stack Developer – USG (Remote)", 100_920, 134_520),
                sample(".NET Full Stack Developer (On-Site)", 130_000, 130_000),
                sample("Data Visualization Engineer – Netflix (Remote)", 260_000, 380_000),
                sample(
                    "Fullstack Developer NodeJS – Enterprise Solution (Contract)",
                    135_200,
                    145_600,
                ),
            ],
            note: None,
        },
        MarketSearch {
            category: "Data Scientist",
            total_results: 128,
            nashville_local: vec![posting(
                "Senior Data Scientist",
                "Oracle",
                "Nashville, TN",
                "Full-time",
                "Hybrid",
                Some(91_100),
                Some(199_500),
            )],
            national_salary_samples: vec![
                sample("Principal Data Scientist – Maximus (Remote)", 156_740, 156_740),
                sample("Ops Research Data Scientist (Contract)", 156_000, 176_800),
                sample("Data Scientist II GenAI – Robert Half (Contract)", 119_000, 180_000),
                sample("Data Scientist II – ITC (Contract)", 145_600, 145_600),
                sample("Sr Staff Data Scientist – GE Vernova (Full-time)", 144_800, 217_200),
                sample(
                    "Lead Observability Data Scientist – Leidos (Full-time)",
                    131_300,
                    237_350,
                ),
                sample("Senior Data Scientist – Guidehouse (Full-time)", 113_000, 188_000),
                sample("CORP Data Scientist – Mitchell Martin (Contract)", 96_824, 138_320),
                sample("Sr. Computer Vision Data Scientist (Full-time)", 165_000, 190_000),
                sample("Data Scientist – Signal Processing (Contract)", 156_000, 197_600),
                sample("Data Scientist – Kforce (Contract)", 120_640, 135_200),
                sample(
                    "Data Scientist – Market Street Talent (Contract)",
                    104_000,
                    124_800,
                ),
            ],
            note: None,
        },
        MarketSearch {
            category: "Data Engineer",
            total_results: 292,
            nashville_local: vec![posting(
                "Data Engineer",
                "Kforce",
                "Nashville, TN",
                "Contract",
                "Hybrid",
                Some(124_800),
                Some(145_600),
            )],
            national_salary_samples: vec![
                sample("IT Data Engineer – Randstad (Contract)", 47_840, 58_240),
                sample("IT Sr Data Engineer – Randstad (Contract)", 52_000, 72_800),
                sample("Data Engineer – Stefanini (Contract)", 212_160, 222_560),
                sample("100% Remote Data Engineer – Whiz (Contract)", 124_800, 145_600),
                sample(
                    "Snowflake Data Engineer – Indianapolis (Contract)",
                    135_200,
                    145_600,
                ),
                sample("Azure Data Engineer (Contract)", 99_840, 99_840),
                sample("Infrastructure Data Engineer (Contract)", 114_400, 135_200),
                sample("Sr Data Engineer Cloud – Bayside (Contract)", 114_400, 135_200),
            ],
            note: None,
        },
    ]
}

/// The fixed skill rarity index, in declaration order (unsorted)
pub fn skill_rarity_index() -> Vec<SkillRarity> {
    vec![
        SkillRarity {
            skill: "Model Context Protocol (MCP)",
            dice_mentions: "~5-10 explicit listings nationally",
            rarity: "ULTRA-RARE",
            rarity_score: 10,
            notes: "Anthropic's MCP is brand-new (2025-2026). Very few certified practitioners \
                    exist. Joshua holds the Anthropic Advanced MCP certification.",
        },
        SkillRarity {
            skill: "AI/ML + Data Analytics (combined)",
            dice_mentions: "~1,062 listings nationally",
            rarity: "HIGH-DEMAND / RARE at entry level",
            rarity_score: 8,
            notes: "Strong demand but most postings require 5+ years. Hands-on predictive \
                    modeling experience with Cursor AI at an early career stage is uncommon.",
        },
        SkillRarity {
            skill: "CompTIA Quad-Stack (A+, Data+, Cloud+, Network+)",
            dice_mentions: "N/A (certification, not search keyword)",
            rarity: "RARE combination",
            rarity_score: 8,
            notes: "Breadth across IT fundamentals, data management, cloud architecture, and \
                    networking. Very few data analysts also hold Cloud+ and Network+.",
        },
        SkillRarity {
            skill: "Power BI / Data Visualization",
            dice_mentions: "~29 listings (Nashville + remote)",
            rarity: "HIGH-DEMAND / LOW-SUPPLY in Nashville",
            rarity_score: 7,
            notes: "Only 1 Power BI-specific role in Nashville. National demand is strong but \
                    local supply of practitioners is thin.",
        },
        SkillRarity {
            skill: "Revenue Forecasting & Profitability Modeling",
            dice_mentions: "0 exact Nashville matches",
            rarity: "NICHE",
            rarity_score: 7,
            notes: "Hands-on revenue forecasting for multi-unit retail is a specialized skill \
                    rarely found in early-career candidates.",
        },
        SkillRarity {
            skill: "Python (Data/Analytics focus)",
            dice_mentions: "~83 listings (Nashville + remote)",
            rarity: "IN-DEMAND",
            rarity_score: 6,
            notes: "Python is the #1 language for data analytics. Strong demand, moderate supply.",
        },
        SkillRarity {
            skill: "API Integration (Square, webhooks, custom)",
            dice_mentions: "Embedded in many roles but rarely standalone",
            rarity: "MODERATE-HIGH when combined with analytics",
            rarity_score: 6,
            notes: "API-first data extraction is in growing demand. Combining API skills with \
                    analytics is a strong differentiator.",
        },
        SkillRarity {
            skill: "JavaScript / Node.js (for data dashboarding)",
            dice_mentions: "~105 listings (Nashville + remote)",
            rarity: "MODERATE",
            rarity_score: 5,
            notes: "Many JS developers exist, but few combine JS with data analytics and \
                    dashboard automation.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_hourly_rate() {
        let c = candidate();
        assert_eq!(c.asking_salary, 60_000);
        assert!((c.asking_hourly - 28.85).abs() < f64::EPSILON);
    }

    #[test]
    fn test_catalog_shape() {
        let searches = market_searches();
        assert_eq!(searches.len(), 9);

        let total: u64 = searches.iter().map(|s| s.total_results).sum();
        assert_eq!(total, 2_214);

        // Only the MCP category carries a note and an empty local list.
        let mcp = searches
            .iter()
            .find(|s| s.category == "MCP / AI Automation")
            .unwrap();
        assert!(mcp.note.is_some());
        assert!(mcp.nashville_local.is_empty());
    }

    #[test]
    fn test_salary_figures_non_negative_and_ordered() {
        for search in market_searches() {
            for job in &search.nashville_local {
                if let (Some(low), Some(high)) = (job.salary_annual_low, job.salary_annual_high) {
                    assert!(low <= high, "{}: low > high", job.title);
                }
            }
            for s in &search.national_salary_samples {
                assert!(s.low <= s.high, "{}: low > high", s.label);
            }
        }
    }

    #[test]
    fn test_rarity_scores_in_range() {
        let index = skill_rarity_index();
        assert_eq!(index.len(), 8);
        for entry in index {
            assert!((1..=10).contains(&entry.rarity_score), "{}", entry.skill);
        }
    }
}
