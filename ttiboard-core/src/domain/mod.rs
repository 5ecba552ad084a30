//! Metric model: iteration outcomes, summaries, provider records, history.

pub mod contract;
pub mod history;
pub mod iteration;
pub mod provider;
pub mod summary;

pub use contract::{validate_history, validate_results, ContractError};
pub use history::{known_providers, HistoryDataPoint};
pub use iteration::IterationResult;
pub use provider::{provider_key, InactiveReason, ProviderResult, ALL_ITERATIONS_FAILED};
pub use summary::SummaryStats;
