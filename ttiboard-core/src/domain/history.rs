//! HistoryDataPoint: one dated sample of per-provider median TTI.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::provider::{provider_key, ProviderResult};

/// A single dated sample.
///
/// Wire form is flat: `{"date": "2025-01-03", "e2b": 412.0, "daytona": 388.5}`.
/// A provider missing from `values` has no data for that date, which is
/// different from a value of `0`. Points are expected in chronological
/// order; duplicate dates are the producer's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryDataPoint {
    pub date: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

impl HistoryDataPoint {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn with(mut self, provider: impl Into<String>, median_ms: f64) -> Self {
        self.values.insert(provider.into(), median_ms);
        self
    }

    /// Case-insensitive lookup of a provider's sample.
    pub fn value_for(&self, provider: &str) -> Option<f64> {
        if let Some(v) = self.values.get(provider) {
            return Some(*v);
        }
        let key = provider_key(provider);
        self.values
            .iter()
            .find(|(name, _)| provider_key(name) == key)
            .map(|(_, v)| *v)
    }
}

/// Ordered, de-duplicated union of provider identifiers.
///
/// Results come first in input order, then any provider that only appears
/// in the history, in first-appearance order.
pub fn known_providers(results: &[ProviderResult], history: &[HistoryDataPoint]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    let from_results = results.iter().map(|r| r.provider.as_str());
    let from_history = history.iter().flat_map(|p| p.values.keys().map(String::as_str));

    for name in from_results.chain(from_history) {
        if seen.insert(provider_key(name)) {
            out.push(name.to_string());
        }
    }
    out
}
