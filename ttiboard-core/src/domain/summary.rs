//! SummaryStats: statistics over the successful iterations of one provider.

use serde::{Deserialize, Serialize};

use super::contract::ContractError;

/// Pre-aggregated TTI statistics in milliseconds.
///
/// Computed upstream over the successful subset of a provider's runs.
/// Absent (not zeroed) when there were no successes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub p95: f64,
    pub p99: f64,
    pub avg: f64,
}

impl SummaryStats {
    /// Named fields in display order.
    pub fn fields(&self) -> [(&'static str, f64); 6] {
        [
            ("min", self.min),
            ("max", self.max),
            ("median", self.median),
            ("p95", self.p95),
            ("p99", self.p99),
            ("avg", self.avg),
        ]
    }

    /// Every statistic must be finite and non-negative.
    pub fn validate(&self, provider: &str) -> Result<(), ContractError> {
        for (field, value) in self.fields() {
            if !value.is_finite() || value < 0.0 {
                return Err(ContractError::InvalidStatistic {
                    provider: provider.to_string(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SummaryStats {
        SummaryStats {
            min: 210.0,
            max: 990.0,
            median: 400.0,
            p95: 870.0,
            p99: 960.0,
            avg: 450.0,
        }
    }

    #[test]
    fn valid_summary_passes() {
        assert!(sample().validate("e2b").is_ok());
    }

    #[test]
    fn negative_statistic_is_contract_violation() {
        let mut s = sample();
        s.p95 = -1.0;
        let err = s.validate("e2b").unwrap_err();
        assert!(matches!(
            err,
            ContractError::InvalidStatistic { field: "p95", .. }
        ));
    }

    #[test]
    fn nan_statistic_is_contract_violation() {
        let mut s = sample();
        s.avg = f64::NAN;
        assert!(s.validate("e2b").is_err());
    }
}
