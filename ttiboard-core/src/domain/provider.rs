//! ProviderResult: one provider's full benchmark record.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::iteration::IterationResult;
use super::summary::SummaryStats;

/// Message shown for a provider that produced no usable summary.
pub const ALL_ITERATIONS_FAILED: &str = "all iterations failed";

/// A provider's summary, skip state and raw iteration outcomes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderResult {
    /// Provider identifier; identity comparisons are case-insensitive.
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryStats>,
    #[serde(default)]
    pub skipped: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<Vec<IterationResult>>,
}

/// Why a provider is excluded from ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InactiveReason {
    /// Upstream declined to run the provider.
    Skipped { reason: Option<String> },
    /// No successful iteration, or no summary at all.
    AllIterationsFailed,
}

impl InactiveReason {
    pub fn label(&self) -> &str {
        match self {
            Self::Skipped {
                reason: Some(reason),
            } => reason,
            Self::Skipped { reason: None } => "skipped",
            Self::AllIterationsFailed => ALL_ITERATIONS_FAILED,
        }
    }
}

impl fmt::Display for InactiveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ProviderResult {
    /// A provider with a usable summary.
    pub fn active(provider: impl Into<String>, summary: SummaryStats) -> Self {
        Self {
            provider: provider.into(),
            summary: Some(summary),
            skipped: false,
            skip_reason: None,
            iterations: None,
        }
    }

    /// A provider upstream chose not to run.
    pub fn skipped(provider: impl Into<String>, reason: Option<String>) -> Self {
        Self {
            provider: provider.into(),
            summary: None,
            skipped: true,
            skip_reason: reason,
            iterations: None,
        }
    }

    pub fn with_iterations(mut self, iterations: Vec<IterationResult>) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Case-folded identity key.
    pub fn key(&self) -> String {
        provider_key(&self.provider)
    }

    /// Fraction of iterations without an error; `0.0` when none were recorded.
    pub fn success_ratio(&self) -> f64 {
        match &self.iterations {
            Some(its) if !its.is_empty() => {
                let ok = its.iter().filter(|it| it.is_success()).count();
                ok as f64 / its.len() as f64
            }
            _ => 0.0,
        }
    }

    /// True when iterations were recorded and every one of them errored.
    pub fn all_iterations_failed(&self) -> bool {
        match &self.iterations {
            Some(its) if !its.is_empty() => its.iter().all(|it| !it.is_success()),
            _ => false,
        }
    }

    /// `None` for a rankable provider. Recomputed on every call.
    pub fn inactive_reason(&self) -> Option<InactiveReason> {
        if self.skipped {
            return Some(InactiveReason::Skipped {
                reason: self.skip_reason.clone(),
            });
        }
        if self.summary.is_none() || self.all_iterations_failed() {
            return Some(InactiveReason::AllIterationsFailed);
        }
        None
    }

    pub fn is_active(&self) -> bool {
        self.inactive_reason().is_none()
    }
}

/// Case-folded provider identity used for every lookup.
pub fn provider_key(provider: &str) -> String {
    provider.trim().to_lowercase()
}
