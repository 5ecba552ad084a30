//! Sample data for the TUI when no input files are given.
//!
//! Produces a small but realistic benchmark run with:
//! - Active providers with mixed iteration outcomes
//! - A provider skipped with a reason and one skipped without
//! - A provider whose every iteration failed
//! - A provider missing from the built-in display assets
//! - Two weeks of history with gaps (providers added or absent mid-run)

use chrono::{Duration, NaiveDate};
use ttiboard_core::{HistoryDataPoint, IterationResult, ProviderResult, SummaryStats};

pub fn sample_results() -> Vec<ProviderResult> {
    vec![
        active("e2b", 412.0, 10, 0),
        active("daytona", 268.0, 10, 1),
        active("modal", 1_540.0, 10, 3),
        active("acme-cloud", 905.0, 8, 0),
        ProviderResult::skipped("codesandbox", Some("missing API key".to_string())),
        ProviderResult::skipped("railway", None),
        ProviderResult {
            summary: None,
            ..ProviderResult::active("vercel", summary(0.0))
        }
        .with_iterations(vec![IterationResult::failed("sandbox create timed out"); 5]),
    ]
}

pub fn sample_history() -> Vec<HistoryDataPoint> {
    let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap_or_default();
    (0..14)
        .map(|day| {
            let date = (start + Duration::days(day)).format("%Y-%m-%d").to_string();
            let t = day as f64;
            let mut point = HistoryDataPoint::new(date)
                .with("e2b", 460.0 - 4.0 * t + wobble(day, 3))
                .with("modal", 1_600.0 + wobble(day, 7) * 4.0);
            // daytona joined on day 3; day 8 was a failed run
            if day >= 3 && day != 8 {
                point = point.with("daytona", 300.0 - 2.5 * t + wobble(day, 5));
            }
            if day % 4 != 1 {
                point = point.with("acme-cloud", 930.0 + wobble(day, 11) * 2.0);
            }
            point
        })
        .collect()
}

/// Deterministic jitter in `[-20, 20]` ms.
fn wobble(day: i64, seed: i64) -> f64 {
    (((day * 37 + seed * 13) % 41) - 20) as f64
}

fn summary(median: f64) -> SummaryStats {
    SummaryStats {
        min: median * 0.72,
        max: median * 1.9,
        median,
        p95: median * 1.55,
        p99: median * 1.8,
        avg: median * 1.08,
    }
}

fn active(provider: &str, median: f64, iterations: usize, failures: usize) -> ProviderResult {
    let its = (0..iterations)
        .map(|i| {
            if i < failures {
                IterationResult::failed("connection reset")
            } else {
                IterationResult::success(median + (i as f64 - 4.0) * median * 0.03)
            }
        })
        .collect();
    ProviderResult::active(provider, summary(median)).with_iterations(its)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttiboard_core::{validate_history, validate_results};

    #[test]
    fn sample_data_passes_validation() {
        assert!(validate_results(&sample_results()).is_ok());
        assert!(validate_history(&sample_history()).is_ok());
    }

    #[test]
    fn sample_results_cover_inactive_cases() {
        let results = sample_results();
        let inactive = results.iter().filter(|r| !r.is_active()).count();
        assert_eq!(inactive, 3);
    }

    #[test]
    fn sample_history_has_gaps() {
        let history = sample_history();
        assert_eq!(history.len(), 14);
        assert!(history[8].value_for("daytona").is_none());
        assert!(history[9].value_for("daytona").is_some());
    }
}
