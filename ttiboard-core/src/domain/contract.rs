//! Upstream contract checks.
//!
//! Recoverable conditions (failed runs, skipped providers, total failure)
//! are data. What lands here is a producer bug and is surfaced loudly.

use std::collections::HashSet;

use thiserror::Error;

use super::history::HistoryDataPoint;
use super::provider::{provider_key, ProviderResult};

#[derive(Debug, Error, PartialEq)]
pub enum ContractError {
    #[error("provider `{provider}` has invalid {field} statistic: {value}")]
    InvalidStatistic {
        provider: String,
        field: &'static str,
        value: f64,
    },

    #[error("provider identifier is empty (row {index})")]
    EmptyProvider { index: usize },

    #[error("provider `{provider}` appears more than once")]
    DuplicateProvider { provider: String },

    #[error("history point {index} has an empty date")]
    EmptyDate { index: usize },

    #[error("history point `{date}` has invalid value for `{provider}`: {value}")]
    InvalidHistoryValue {
        date: String,
        provider: String,
        value: f64,
    },
}

/// Check the result list; returns the first violation.
pub fn validate_results(results: &[ProviderResult]) -> Result<(), ContractError> {
    let mut seen = HashSet::new();
    for (index, result) in results.iter().enumerate() {
        let key = provider_key(&result.provider);
        if key.is_empty() {
            return Err(ContractError::EmptyProvider { index });
        }
        if !seen.insert(key) {
            return Err(ContractError::DuplicateProvider {
                provider: result.provider.clone(),
            });
        }
        if let Some(summary) = &result.summary {
            summary.validate(&result.provider)?;
        }
    }
    Ok(())
}

/// Check the history series; returns the first violation.
pub fn validate_history(history: &[HistoryDataPoint]) -> Result<(), ContractError> {
    for (index, point) in history.iter().enumerate() {
        if point.date.trim().is_empty() {
            return Err(ContractError::EmptyDate { index });
        }
        for (provider, &value) in &point.values {
            if !value.is_finite() || value < 0.0 {
                return Err(ContractError::InvalidHistoryValue {
                    date: point.date.clone(),
                    provider: provider.clone(),
                    value,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SummaryStats;

    fn stats(median: f64) -> SummaryStats {
        SummaryStats {
            min: median,
            max: median,
            median,
            p95: median,
            p99: median,
            avg: median,
        }
    }

    #[test]
    fn duplicate_provider_is_case_insensitive() {
        let results = vec![
            ProviderResult::active("E2B", stats(1.0)),
            ProviderResult::active("e2b", stats(2.0)),
        ];
        assert!(matches!(
            validate_results(&results),
            Err(ContractError::DuplicateProvider { .. })
        ));
    }

    #[test]
    fn empty_provider_is_rejected() {
        let results = vec![ProviderResult::active("  ", stats(1.0))];
        assert_eq!(
            validate_results(&results),
            Err(ContractError::EmptyProvider { index: 0 })
        );
    }

    #[test]
    fn negative_statistic_propagates() {
        let results = vec![ProviderResult::active("a", stats(-3.0))];
        assert!(matches!(
            validate_results(&results),
            Err(ContractError::InvalidStatistic { .. })
        ));
    }

    #[test]
    fn skipped_rows_without_summary_are_fine() {
        let results = vec![ProviderResult::skipped("c", Some("no credentials".into()))];
        assert!(validate_results(&results).is_ok());
    }

    #[test]
    fn history_rejects_empty_date_and_negative_values() {
        let bad_date = vec![HistoryDataPoint::new(" ").with("a", 1.0)];
        assert_eq!(
            validate_history(&bad_date),
            Err(ContractError::EmptyDate { index: 0 })
        );

        let bad_value = vec![HistoryDataPoint::new("2025-01-01").with("a", -1.0)];
        assert!(matches!(
            validate_history(&bad_value),
            Err(ContractError::InvalidHistoryValue { .. })
        ));
    }
}
