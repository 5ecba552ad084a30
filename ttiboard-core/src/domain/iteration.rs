//! IterationResult: one measured run against a provider.

use serde::{Deserialize, Serialize};

/// Outcome of a single benchmark iteration.
///
/// A failed run contributes nothing to statistics but still counts toward
/// the success-ratio denominator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawIteration", into = "RawIteration")]
pub enum IterationResult {
    Success { tti_ms: f64 },
    Failed { error: String },
}

impl IterationResult {
    pub fn success(tti_ms: f64) -> Self {
        Self::Success { tti_ms }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn tti_ms(&self) -> Option<f64> {
        match self {
            Self::Success { tti_ms } => Some(*tti_ms),
            Self::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failed { error } => Some(error),
        }
    }
}

/// Wire form: `{"ttiMs": 812.4}` or `{"error": "timeout"}`.
///
/// Producers sometimes emit `ttiMs: 0` next to the error; `error` wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawIteration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tti_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl TryFrom<RawIteration> for IterationResult {
    type Error = String;

    fn try_from(raw: RawIteration) -> Result<Self, Self::Error> {
        match (raw.error, raw.tti_ms) {
            (Some(error), _) => Ok(Self::Failed { error }),
            (None, Some(tti_ms)) => Ok(Self::Success { tti_ms }),
            (None, None) => Err("iteration has neither `ttiMs` nor `error`".to_string()),
        }
    }
}

impl From<IterationResult> for RawIteration {
    fn from(it: IterationResult) -> Self {
        match it {
            IterationResult::Success { tti_ms } => Self {
                tti_ms: Some(tti_ms),
                error: None,
            },
            IterationResult::Failed { error } => Self {
                tti_ms: None,
                error: Some(error),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_success() {
        let it: IterationResult = serde_json::from_str(r#"{"ttiMs": 812.5}"#).unwrap();
        assert_eq!(it, IterationResult::success(812.5));
        assert!(it.is_success());
        assert_eq!(it.tti_ms(), Some(812.5));
    }

    #[test]
    fn error_wins_over_tti() {
        let it: IterationResult =
            serde_json::from_str(r#"{"ttiMs": 0, "error": "timeout"}"#).unwrap();
        assert_eq!(it.error(), Some("timeout"));
        assert_eq!(it.tti_ms(), None);
    }

    #[test]
    fn empty_object_is_rejected() {
        let parsed = serde_json::from_str::<IterationResult>("{}");
        assert!(parsed.is_err());
    }

    #[test]
    fn serializes_to_wire_form() {
        let json = serde_json::to_string(&IterationResult::failed("boom")).unwrap();
        assert_eq!(json, r#"{"error":"boom"}"#);
    }
}
