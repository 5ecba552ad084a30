//! ttiboard TUI - terminal views over sandbox TTI benchmark results
//!
//! Provides interactive exploration with:
//! - A ranking table sortable by clicking any statistic header
//! - A history chart of median TTI with a toggleable legend and tooltip
//! - TOML config for default sort, bar width and provider display overrides

pub mod app;
pub mod config;
pub mod input;
pub mod palette;
pub mod panels;
pub mod sample_data;
pub mod theme;
pub mod ui;

pub use app::{AppState, DataSources, Panel};
pub use config::TuiConfig;
pub use palette::Palette;
pub use theme::Theme;
