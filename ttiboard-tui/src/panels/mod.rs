//! TUI panels for the two data views
//!
//! - RankingTable: providers ranked by a clickable statistic column
//! - HistoryChart: median TTI over time with a toggleable legend

pub mod history_chart;
pub mod ranking_table;

pub use history_chart::{inspect, legend_hit, series_points, HiddenSeries, HistoryChart, InspectedValue};
pub use ranking_table::{bar, column_at, RankingTable, TableSort};
