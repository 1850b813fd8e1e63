//! Salary range aggregation
//!
//! Reduces the posted salary ranges in the search catalog to min/max/average/
//! median statistics. Postings without a disclosed salary are skipped. The
//! median is the middle-index value of the sorted list, matching the report's
//! established methodology, rather than an interpolated median.

use crate::model::{MarketSearch, SalaryStats};

/// Aggregate salary statistics across every data point in the catalog
///
/// Combines Nashville-local postings and national salary samples from all
/// search categories. Empty input yields zeroed statistics.
pub fn compute_salary_stats(searches: &[MarketSearch]) -> SalaryStats {
    let mut lows = Vec::new();
    let mut highs = Vec::new();

    for search in searches {
        for job in &search.nashville_local {
            if let Some(low) = job.salary_annual_low {
                lows.push(low);
            }
            if let Some(high) = job.salary_annual_high {
                highs.push(high);
            }
        }
        for s in &search.national_salary_samples {
            lows.push(s.low);
            highs.push(s.high);
        }
    }

    reduce(lows, highs)
}

/// Aggregate salary statistics for Nashville-local postings only
pub fn compute_nashville_salary_stats(searches: &[MarketSearch]) -> SalaryStats {
    let mut lows = Vec::new();
    let mut highs = Vec::new();

    for search in searches {
        for job in &search.nashville_local {
            if let Some(low) = job.salary_annual_low {
                lows.push(low);
            }
            if let Some(high) = job.salary_annual_high {
                highs.push(high);
            }
        }
    }

    reduce(lows, highs)
}

/// Reduce collected range bounds to summary statistics
fn reduce(mut lows: Vec<u64>, mut highs: Vec<u64>) -> SalaryStats {
    if lows.is_empty() || highs.is_empty() {
        return SalaryStats::empty();
    }

    let min_low = *lows.iter().min().unwrap_or(&0);
    let max_high = *highs.iter().max().unwrap_or(&0);
    let avg_low = rounded_mean(&lows);
    let avg_high = rounded_mean(&highs);

    lows.sort_unstable();
    highs.sort_unstable();
    let median_low = lows[lows.len() / 2];
    let median_high = highs[highs.len() / 2];

    SalaryStats {
        min_low,
        max_high,
        avg_low,
        avg_high,
        median_low,
        median_high,
        sample_count: lows.len(),
    }
}

/// Mean of the values, rounded to whole dollars
fn rounded_mean(values: &[u64]) -> u64 {
    if values.is_empty() {
        return 0;
    }
    let sum: u64 = values.iter().sum();
    (sum as f64 / values.len() as f64).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::market_searches;

    #[test]
    fn test_reduce_small_dataset() {
        let lows = vec![100, 300, 200];
        let highs = vec![400, 600, 500];
        let stats = reduce(lows, highs);

        assert_eq!(stats.min_low, 100);
        assert_eq!(stats.max_high, 600);
        assert_eq!(stats.avg_low, 200);
        assert_eq!(stats.avg_high, 500);
        // Positional median: sorted[3 / 2] = sorted[1]
        assert_eq!(stats.median_low, 200);
        assert_eq!(stats.median_high, 500);
        assert_eq!(stats.sample_count, 3);
    }

    #[test]
    fn test_reduce_even_length_takes_upper_middle() {
        let stats = reduce(vec![10, 20, 30, 40], vec![10, 20, 30, 40]);
        // sorted[4 / 2] = sorted[2], not an interpolated midpoint
        assert_eq!(stats.median_low, 30);
    }

    #[test]
    fn test_reduce_empty_input() {
        assert_eq!(reduce(vec![], vec![]), SalaryStats::empty());
    }

    #[test]
    fn test_rounded_mean() {
        assert_eq!(rounded_mean(&[1, 2]), 2); // 1.5 rounds away from zero
        assert_eq!(rounded_mean(&[1, 2, 3]), 2);
        assert_eq!(rounded_mean(&[]), 0);
    }

    #[test]
    fn test_market_stats_for_embedded_dataset() {
        let stats = compute_salary_stats(&market_searches());

        // 13 salaried Nashville postings + 102 national samples
        assert_eq!(stats.sample_count, 115);
        // Provider Data Mgmt Analyst I (Centene)
        assert_eq!(stats.min_low, 40_414);
        // Analytics Engineer 5 (Netflix)
        assert_eq!(stats.max_high, 566_000);
        assert!(stats.avg_low >= stats.min_low && stats.avg_high <= stats.max_high);
        assert!(stats.median_low <= stats.median_high);
    }

    #[test]
    fn test_nashville_stats_for_embedded_dataset() {
        let stats = compute_nashville_salary_stats(&market_searches());

        assert_eq!(stats.sample_count, 13);
        assert_eq!(stats.min_low, 62_400);
        assert_eq!(stats.max_high, 208_000);
        assert_eq!(stats.avg_low, 119_417);
        assert_eq!(stats.avg_high, 145_491);
        assert_eq!(stats.median_low, 124_800);
        assert_eq!(stats.median_high, 145_600);
    }
}
