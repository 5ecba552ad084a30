//! Ranking engine: partition providers into active/inactive and order the
//! active set by a summary statistic.
//!
//! Pure functions over borrowed input. Every call recomputes the partition
//! and the ordering; nothing is cached on the provider records.
//!
//! Ordering is a stable sort (`slice::sort_by`) so equal values keep their
//! input order and re-sorting by the same key is idempotent.

use std::cmp::Ordering;

use serde::Serialize;

use crate::domain::{provider_key, InactiveReason, ProviderResult};
use crate::sort_key::SortKey;

/// Smallest bar scale handed to a view; keeps `relative_scale` inside `(0, 1]`.
pub const MIN_RELATIVE_SCALE: f64 = 0.01;

/// A table column that can drive the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    /// Position under the primary statistic.
    Rank,
    /// Case-insensitive provider name.
    Provider,
    Stat(SortKey),
}

impl SortColumn {
    /// Header order in the ranking table.
    pub const ALL: [SortColumn; 8] = [
        SortColumn::Rank,
        SortColumn::Provider,
        SortColumn::Stat(SortKey::Min),
        SortColumn::Stat(SortKey::Max),
        SortColumn::Stat(SortKey::Median),
        SortColumn::Stat(SortKey::P95),
        SortColumn::Stat(SortKey::P99),
        SortColumn::Stat(SortKey::Avg),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rank => "#",
            Self::Provider => "Provider",
            Self::Stat(key) => key.label(),
        }
    }

    /// Statistic whose values fill the bar column.
    pub fn value_key(&self) -> SortKey {
        match self {
            Self::Stat(key) => *key,
            Self::Rank | Self::Provider => SortKey::PRIMARY,
        }
    }
}

/// An active provider with its derived display values.
#[derive(Debug, Clone, Serialize)]
pub struct RankedRow<'a> {
    #[serde(rename = "provider", serialize_with = "serialize_provider")]
    pub result: &'a ProviderResult,
    /// 1-based position within the active set.
    pub rank: usize,
    /// The ranked statistic, in milliseconds.
    pub value: f64,
    /// `value / max(value)` over the active set, in `(0, 1]`.
    pub relative_scale: f64,
    pub is_leader: bool,
    pub success_ratio: f64,
}

/// A provider excluded from ranking.
#[derive(Debug, Clone, Serialize)]
pub struct InactiveRow<'a> {
    #[serde(rename = "provider", serialize_with = "serialize_provider")]
    pub result: &'a ProviderResult,
    #[serde(serialize_with = "serialize_reason")]
    pub reason: InactiveReason,
    pub success_ratio: f64,
}

/// Output of one ranking pass.
#[derive(Debug, Clone, Serialize)]
pub struct Ranking<'a> {
    #[serde(skip)]
    pub column: SortColumn,
    pub key: SortKey,
    pub ascending: bool,
    pub active: Vec<RankedRow<'a>>,
    pub inactive: Vec<InactiveRow<'a>>,
}

impl<'a> Ranking<'a> {
    /// Total rows across both partitions.
    pub fn len(&self) -> usize {
        self.active.len() + self.inactive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The leader highlight applies only to ascending order on the primary
    /// statistic (directly or via the rank column).
    pub fn highlights_leader(&self) -> bool {
        self.ascending
            && matches!(
                self.column,
                SortColumn::Rank | SortColumn::Stat(SortKey::PRIMARY)
            )
    }

    /// The highlighted row, if the current ordering has one.
    pub fn leader(&self) -> Option<&RankedRow<'a>> {
        if !self.highlights_leader() {
            return None;
        }
        self.active.iter().find(|row| row.is_leader)
    }
}

/// Partition and rank by a summary statistic.
pub fn partition_and_rank(
    results: &[ProviderResult],
    key: SortKey,
    ascending: bool,
) -> Ranking<'_> {
    let mut active: Vec<(&ProviderResult, f64)> = Vec::with_capacity(results.len());
    let mut inactive = Vec::new();

    for result in results {
        match (result.inactive_reason(), &result.summary) {
            (None, Some(summary)) => active.push((result, key.extract(summary))),
            (reason, _) => inactive.push(InactiveRow {
                result,
                reason: reason.unwrap_or(InactiveReason::AllIterationsFailed),
                success_ratio: result.success_ratio(),
            }),
        }
    }

    active.sort_by(|(_, a), (_, b)| directed(a.total_cmp(b), ascending));

    let max = active.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let active = active
        .into_iter()
        .enumerate()
        .map(|(i, (result, value))| {
            let rank = i + 1;
            RankedRow {
                result,
                rank,
                value,
                relative_scale: relative_scale(value, max),
                is_leader: rank == 1 && ascending,
                success_ratio: result.success_ratio(),
            }
        })
        .collect::<Vec<_>>();

    tracing::trace!(
        key = %key,
        ascending,
        active = active.len(),
        inactive = inactive.len(),
        "ranked providers"
    );

    Ranking {
        column: SortColumn::Stat(key),
        key,
        ascending,
        active,
        inactive,
    }
}

/// Rank for a table column; the entry point used by the ranking view.
pub fn rank_by_column(
    results: &[ProviderResult],
    column: SortColumn,
    ascending: bool,
) -> Ranking<'_> {
    match column {
        SortColumn::Stat(key) => partition_and_rank(results, key, ascending),
        SortColumn::Rank => Ranking {
            column,
            ..partition_and_rank(results, SortKey::PRIMARY, ascending)
        },
        SortColumn::Provider => {
            let mut ranking = partition_and_rank(results, SortKey::PRIMARY, true);
            ranking.active.sort_by(|a, b| {
                let ord = provider_key(&a.result.provider).cmp(&provider_key(&b.result.provider));
                directed(ord, ascending)
            });
            ranking.column = column;
            ranking.ascending = ascending;
            ranking
        }
    }
}

fn directed(ord: Ordering, ascending: bool) -> Ordering {
    if ascending {
        ord
    } else {
        ord.reverse()
    }
}

fn relative_scale(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 1.0;
    }
    (value / max).clamp(MIN_RELATIVE_SCALE, 1.0)
}

fn serialize_provider<S: serde::Serializer>(
    result: &&ProviderResult,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&result.provider)
}

fn serialize_reason<S: serde::Serializer>(
    reason: &InactiveReason,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(reason.label())
}
