//! ttiboard core: metric model, ranking engine, validation and loading for
//! sandbox time-to-interactive (TTI) benchmark results.
//!
//! This crate contains everything the views need and nothing they draw:
//! - Metric model (iteration outcomes, summaries, provider records, history)
//! - Upstream contract validation
//! - Ranking engine: active/inactive partition, stable ordering, derived
//!   per-row display values
//! - JSON loading of results and history
//! - Display assets (display names and logo badges) and value formatting

pub mod assets;
pub mod domain;
pub mod format;
pub mod loader;
pub mod ranking;
pub mod sort_key;

pub use assets::{DisplayAssets, ProviderAsset, PLACEHOLDER_LOGO};
pub use domain::{
    known_providers, provider_key, validate_history, validate_results, ContractError,
    HistoryDataPoint, InactiveReason, IterationResult, ProviderResult, SummaryStats,
    ALL_ITERATIONS_FAILED,
};
pub use format::{format_ms, format_ratio, format_seconds};
pub use loader::{load_history, load_results, LoadError};
pub use ranking::{
    partition_and_rank, rank_by_column, InactiveRow, RankedRow, Ranking, SortColumn,
    MIN_RELATIVE_SCALE,
};
pub use sort_key::{ParseSortKeyError, SortKey};

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn model_types_are_send_sync() {
        assert_send::<ProviderResult>();
        assert_sync::<ProviderResult>();
        assert_send::<HistoryDataPoint>();
        assert_sync::<HistoryDataPoint>();
    }

    #[test]
    fn ranking_is_send_sync() {
        assert_send::<Ranking<'static>>();
        assert_sync::<Ranking<'static>>();
    }
}
