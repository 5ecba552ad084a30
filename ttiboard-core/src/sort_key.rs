//! Sort key: which summary statistic orders the ranking.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::SummaryStats;

/// Which statistic to rank by. Lower is better for all of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Min,
    Max,
    #[default]
    Median,
    P95,
    P99,
    Avg,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort key `{0}` (expected one of min, max, median, p95, p99, avg)")]
pub struct ParseSortKeyError(pub String);

impl SortKey {
    /// The statistic the leaderboard is ranked by.
    pub const PRIMARY: SortKey = SortKey::Median;

    /// Column order in tables.
    pub const ALL: [SortKey; 6] = [
        SortKey::Min,
        SortKey::Max,
        SortKey::Median,
        SortKey::P95,
        SortKey::P99,
        SortKey::Avg,
    ];

    pub fn extract(&self, summary: &SummaryStats) -> f64 {
        match self {
            Self::Min => summary.min,
            Self::Max => summary.max,
            Self::Median => summary.median,
            Self::P95 => summary.p95,
            Self::P99 => summary.p99,
            Self::Avg => summary.avg,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Min => "Min",
            Self::Max => "Max",
            Self::Median => "Median",
            Self::P95 => "P95",
            Self::P99 => "P99",
            Self::Avg => "Avg",
        }
    }

    /// Parse, falling back to [`SortKey::PRIMARY`] for unknown input.
    pub fn parse_or_primary(s: &str) -> SortKey {
        s.parse().unwrap_or_else(|err: ParseSortKeyError| {
            tracing::warn!(%err, "falling back to primary sort key");
            Self::PRIMARY
        })
    }
}

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            "median" | "p50" => Ok(Self::Median),
            "p95" => Ok(Self::P95),
            "p99" => Ok(Self::P99),
            "avg" | "mean" => Ok(Self::Avg),
            _ => Err(ParseSortKeyError(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SummaryStats {
        SummaryStats {
            min: 1.0,
            max: 2.0,
            median: 3.0,
            p95: 4.0,
            p99: 5.0,
            avg: 6.0,
        }
    }

    #[test]
    fn extract_reads_each_field() {
        let s = sample();
        let values: Vec<f64> = SortKey::ALL.iter().map(|k| k.extract(&s)).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn default_is_primary() {
        assert_eq!(SortKey::default(), SortKey::PRIMARY);
        assert_eq!(SortKey::PRIMARY, SortKey::Median);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("P95".parse::<SortKey>(), Ok(SortKey::P95));
        assert_eq!(" median ".parse::<SortKey>(), Ok(SortKey::Median));
        assert_eq!("mean".parse::<SortKey>(), Ok(SortKey::Avg));
    }

    #[test]
    fn unknown_key_degrades_to_primary() {
        assert!("p42".parse::<SortKey>().is_err());
        assert_eq!(SortKey::parse_or_primary("p42"), SortKey::Median);
        assert_eq!(SortKey::parse_or_primary("max"), SortKey::Max);
    }
}
