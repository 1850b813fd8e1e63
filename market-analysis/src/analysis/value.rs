//! Value proposition computation
//!
//! Positions the candidate's asking salary against two benchmarks: the
//! midpoint of the national median salary range and the midpoint of the
//! Nashville-local average range.

use crate::model::{SalaryStats, ValueProposition};

/// Compute savings and discount percentages for an asking salary
///
/// A zero benchmark midpoint (empty sample set) yields a zero discount rather
/// than dividing by zero.
pub fn value_proposition(
    asking: u64,
    market: &SalaryStats,
    nashville: &SalaryStats,
) -> ValueProposition {
    let market_median_mid = (market.median_low + market.median_high) as f64 / 2.0;
    let nashville_avg_mid = (nashville.avg_low + nashville.avg_high) as f64 / 2.0;

    let savings_vs_market = market_median_mid - asking as f64;
    let savings_vs_nashville = nashville_avg_mid - asking as f64;

    ValueProposition {
        asking_salary: asking,
        market_median_midpoint: market_median_mid.round() as u64,
        nashville_avg_midpoint: nashville_avg_mid.round() as u64,
        savings_vs_national_median: savings_vs_market.round() as i64,
        savings_vs_nashville_avg: savings_vs_nashville.round() as i64,
        discount_pct_vs_national: discount_pct(savings_vs_market, market_median_mid),
        discount_pct_vs_nashville: discount_pct(savings_vs_nashville, nashville_avg_mid),
    }
}

/// Discount as a percentage of the benchmark, rounded to one decimal
fn discount_pct(savings: f64, benchmark: f64) -> f64 {
    if benchmark == 0.0 {
        return 0.0;
    }
    (savings / benchmark * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(median_low: u64, median_high: u64, avg_low: u64, avg_high: u64) -> SalaryStats {
        SalaryStats {
            min_low: 0,
            max_high: 0,
            avg_low,
            avg_high,
            median_low,
            median_high,
            sample_count: 1,
        }
    }

    #[test]
    fn test_value_proposition_midpoints() {
        let market = stats(100_000, 140_000, 0, 0);
        let nashville = stats(0, 0, 110_000, 150_000);
        let value = value_proposition(60_000, &market, &nashville);

        assert_eq!(value.market_median_midpoint, 120_000);
        assert_eq!(value.nashville_avg_midpoint, 130_000);
        assert_eq!(value.savings_vs_national_median, 60_000);
        assert_eq!(value.savings_vs_nashville_avg, 70_000);
        assert!((value.discount_pct_vs_national - 50.0).abs() < f64::EPSILON);
        assert!((value.discount_pct_vs_nashville - 53.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_benchmark_yields_zero_discount() {
        let empty = SalaryStats::empty();
        let value = value_proposition(60_000, &empty, &empty);

        assert_eq!(value.market_median_midpoint, 0);
        assert!((value.discount_pct_vs_national - 0.0).abs() < f64::EPSILON);
        assert_eq!(value.savings_vs_national_median, -60_000);
    }

    #[test]
    fn test_discount_pct_rounds_to_one_decimal() {
        // 1/3 of the benchmark -> 33.3%
        assert!((discount_pct(40_000.0, 120_000.0) - 33.3).abs() < f64::EPSILON);
    }
}
