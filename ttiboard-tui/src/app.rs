//! Application state: single-owner, main-thread only.
//!
//! The loaded model (results + history) is replaced wholesale on reload.
//! Everything else here is view-local UI state, one sub-struct per view.

use std::cell::Cell;
use std::path::PathBuf;

use ratatui::layout::Rect;
use ttiboard_core::{
    known_providers, load_history, load_results, rank_by_column, DisplayAssets,
    HistoryDataPoint, LoadError, ProviderResult, Ranking, SortColumn,
};

use crate::config::{ConfigError, TuiConfig};
use crate::palette::Palette;
use crate::panels::{HiddenSeries, TableSort};
use crate::sample_data;
use crate::theme::Theme;

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Ranking,
    History,
    Help,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Ranking, Panel::History, Panel::Help];

    pub fn index(self) -> usize {
        match self {
            Panel::Ranking => 0,
            Panel::History => 1,
            Panel::Help => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Ranking => "Ranking",
            Panel::History => "History",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Panel {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Ranking table view state.
#[derive(Debug, Default)]
pub struct RankingViewState {
    pub sort: TableSort,
    /// Index into [`SortColumn::ALL`] with keyboard focus.
    pub focused_column: usize,
    /// First body row drawn.
    pub offset: usize,
    /// Where the table was last drawn; used for mouse hit-testing.
    pub area: Cell<Rect>,
}

impl RankingViewState {
    pub fn focused(&self) -> SortColumn {
        SortColumn::ALL[self.focused_column.min(SortColumn::ALL.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        self.focused_column = (self.focused_column + 1) % SortColumn::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused_column =
            (self.focused_column + SortColumn::ALL.len() - 1) % SortColumn::ALL.len();
    }
}

/// History chart view state.
#[derive(Debug, Default)]
pub struct ChartViewState {
    pub hidden: HiddenSeries,
    pub legend_focus: usize,
    /// Date index under the inspection cursor.
    pub inspect_index: Option<usize>,
    pub area: Cell<Rect>,
}

/// Where the model comes from. With neither path set the bundled sample is used.
#[derive(Debug, Clone, Default)]
pub struct DataSources {
    pub results: Option<PathBuf>,
    pub history: Option<PathBuf>,
}

impl DataSources {
    pub fn is_sample(&self) -> bool {
        self.results.is_none() && self.history.is_none()
    }

    /// Short label for the status bar: file names only.
    pub fn describe(&self) -> String {
        if self.is_sample() {
            return "sample data".to_string();
        }
        let name = |path: &PathBuf| {
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        };
        [("results", &self.results), ("history", &self.history)]
            .into_iter()
            .filter_map(|(label, path)| path.as_ref().map(|p| format!("{label}: {}", name(p))))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn load(&self) -> Result<(Vec<ProviderResult>, Vec<HistoryDataPoint>), LoadError> {
        if self.is_sample() {
            return Ok((sample_data::sample_results(), sample_data::sample_history()));
        }
        let results = match &self.results {
            Some(path) => load_results(path)?,
            None => Vec::new(),
        };
        let history = match &self.history {
            Some(path) => load_history(path)?,
            None => Vec::new(),
        };
        Ok((results, history))
    }
}

/// Top-level application state.
pub struct AppState {
    pub running: bool,
    pub active_panel: Panel,

    // Model
    pub results: Vec<ProviderResult>,
    pub history: Vec<HistoryDataPoint>,
    /// Every provider in results or history, first-seen order.
    pub providers: Vec<String>,
    pub sources: DataSources,

    // Presentation
    pub assets: DisplayAssets,
    pub palette: Palette,
    pub theme: Theme,
    pub bar_width: u16,

    // View state
    pub ranking: RankingViewState,
    pub chart: ChartViewState,

    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(config: &TuiConfig, sources: DataSources) -> Result<Self, ConfigError> {
        let sort = TableSort::new(config.sort_key(), !config.descending);
        let focused_column = SortColumn::ALL
            .iter()
            .position(|c| *c == sort.column)
            .unwrap_or_default();
        Ok(Self {
            running: true,
            active_panel: Panel::Ranking,
            results: Vec::new(),
            history: Vec::new(),
            providers: Vec::new(),
            sources,
            assets: config.assets(),
            palette: config.palette()?,
            theme: Theme::default(),
            bar_width: config.bar_width(),
            ranking: RankingViewState {
                sort,
                focused_column,
                offset: 0,
                area: Cell::default(),
            },
            chart: ChartViewState::default(),
            status_message: None,
        })
    }

    /// The ranking for the current sort. Computed fresh on every call.
    pub fn current_ranking(&self) -> Ranking<'_> {
        rank_by_column(
            &self.results,
            self.ranking.sort.column,
            self.ranking.sort.ascending,
        )
    }

    /// Swap in a new model and pull view cursors back into range.
    pub fn replace_data(&mut self, results: Vec<ProviderResult>, history: Vec<HistoryDataPoint>) {
        self.providers = known_providers(&results, &history);
        self.results = results;
        self.history = history;

        self.ranking.offset = self.ranking.offset.min(self.results.len().saturating_sub(1));
        self.chart.legend_focus = self
            .chart
            .legend_focus
            .min(self.providers.len().saturating_sub(1));
        self.chart.inspect_index = match self.chart.inspect_index {
            Some(i) if !self.history.is_empty() => Some(i.min(self.history.len() - 1)),
            _ => None,
        };

        tracing::info!(
            results = self.results.len(),
            history = self.history.len(),
            providers = self.providers.len(),
            "model replaced"
        );
    }

    /// Re-read the data sources. On failure the current model stays.
    pub fn reload(&mut self) {
        match self.sources.load() {
            Ok((results, history)) => {
                let (r, h) = (results.len(), history.len());
                self.replace_data(results, history);
                if self.sources.is_sample() {
                    self.set_status(format!("Sample data: {r} providers, {h} history points"));
                } else {
                    self.set_status(format!("Loaded {r} providers, {h} history points"));
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "reload failed, keeping previous data");
                self.set_error(format!("Reload failed: {err}"));
            }
        }
    }

    /// Header click or keyboard activation of a column.
    pub fn click_column(&mut self, column: SortColumn) {
        self.ranking.sort.click(column);
        if let Some(i) = SortColumn::ALL.iter().position(|c| *c == column) {
            self.ranking.focused_column = i;
        }
        let direction = if self.ranking.sort.ascending {
            "ascending"
        } else {
            "descending"
        };
        tracing::debug!(column = column.label(), direction, "sort changed");
        self.set_status(format!("Sorted by {} ({direction})", column.label()));
    }

    /// Scroll the table body; stops with the last row at the top.
    pub fn scroll_rows(&mut self, delta: isize) {
        let last = self.results.len().saturating_sub(1);
        self.ranking.offset = self.ranking.offset.saturating_add_signed(delta).min(last);
    }

    /// Toggle the legend entry at `index`.
    pub fn toggle_series(&mut self, index: usize) {
        let Some(provider) = self.providers.get(index) else {
            return;
        };
        let visible = self.chart.hidden.toggle(provider);
        let name = self.assets.display_name(provider).to_string();
        tracing::debug!(provider = %provider, visible, "series toggled");
        self.chart.legend_focus = index;
        self.set_status(format!(
            "{name} {}",
            if visible { "shown" } else { "hidden" }
        ));
    }

    pub fn show_all_series(&mut self) {
        self.chart.hidden.show_all();
        self.set_status("All series shown");
    }

    pub fn move_legend_focus(&mut self, delta: isize) {
        if self.providers.is_empty() {
            return;
        }
        let last = self.providers.len() - 1;
        self.chart.legend_focus = self.chart.legend_focus.saturating_add_signed(delta).min(last);
    }

    /// Move the inspection cursor; the first move enters from the nearest edge.
    pub fn move_inspect(&mut self, delta: isize) {
        if self.history.is_empty() {
            self.chart.inspect_index = None;
            return;
        }
        let last = self.history.len() - 1;
        self.chart.inspect_index = Some(match self.chart.inspect_index {
            Some(i) => i.saturating_add_signed(delta).min(last),
            None if delta < 0 => last,
            None => 0,
        });
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttiboard_core::SortKey;

    fn app() -> AppState {
        let mut app = AppState::new(&TuiConfig::default(), DataSources::default()).unwrap();
        app.reload();
        app
    }

    #[test]
    fn panel_cycle_wraps() {
        assert_eq!(Panel::Help.next(), Panel::Ranking);
        assert_eq!(Panel::Ranking.prev(), Panel::Help);
        for panel in Panel::ALL {
            assert_eq!(Panel::from_index(panel.index()), Some(panel));
        }
    }

    #[test]
    fn starts_with_config_sort() {
        let config = TuiConfig::parse("default_sort = \"p99\"\ndescending = true").unwrap();
        let app = AppState::new(&config, DataSources::default()).unwrap();
        assert_eq!(app.ranking.sort.column, SortColumn::Stat(SortKey::P99));
        assert!(!app.ranking.sort.ascending);
        assert_eq!(app.ranking.focused(), SortColumn::Stat(SortKey::P99));
    }

    #[test]
    fn data_sources_describe_file_names() {
        assert_eq!(DataSources::default().describe(), "sample data");
        let sources = DataSources {
            results: Some(PathBuf::from("/tmp/run/results.json")),
            history: None,
        };
        assert_eq!(sources.describe(), "results: results.json");
        let sources = DataSources {
            results: Some(PathBuf::from("out")),
            history: Some(PathBuf::from("data/history.json")),
        };
        assert_eq!(sources.describe(), "results: out, history: history.json");
    }

    #[test]
    fn sample_data_loads_when_no_paths() {
        let app = app();
        assert!(!app.results.is_empty());
        assert!(!app.history.is_empty());
        assert!(app.providers.iter().any(|p| p == "acme-cloud"));
        assert_eq!(app.status_message.as_ref().map(|s| s.1), Some(StatusLevel::Info));
    }

    #[test]
    fn clicking_same_column_reverses_order() {
        let mut app = app();
        let before: Vec<String> = app
            .current_ranking()
            .active
            .iter()
            .map(|r| r.result.provider.clone())
            .collect();

        app.click_column(SortColumn::Stat(SortKey::Median));
        let after: Vec<String> = app
            .current_ranking()
            .active
            .iter()
            .map(|r| r.result.provider.clone())
            .collect();

        let mut reversed = before.clone();
        reversed.reverse();
        assert_eq!(after, reversed);
        assert!(app.current_ranking().leader().is_none());
    }

    #[test]
    fn clicking_other_column_resets_ascending_and_moves_focus() {
        let mut app = app();
        app.click_column(SortColumn::Stat(SortKey::Median));
        app.click_column(SortColumn::Provider);
        assert!(app.ranking.sort.ascending);
        assert_eq!(app.ranking.focused(), SortColumn::Provider);
    }

    #[test]
    fn scrolling_clamps_to_row_count() {
        let mut app = app();
        let last = app.results.len() - 1;
        app.scroll_rows(-1);
        assert_eq!(app.ranking.offset, 0);
        app.scroll_rows(100);
        assert_eq!(app.ranking.offset, last);

        app.replace_data(app.results[..2].to_vec(), Vec::new());
        assert_eq!(app.ranking.offset, 1);
    }

    #[test]
    fn toggle_series_flips_visibility() {
        let mut app = app();
        app.toggle_series(0);
        assert!(app.chart.hidden.is_hidden(&app.providers[0]));
        app.toggle_series(0);
        assert!(app.chart.hidden.is_empty());
        // out of range is ignored
        app.toggle_series(99);
        assert!(app.chart.hidden.is_empty());
    }

    #[test]
    fn inspect_cursor_clamps_to_history() {
        let mut app = app();
        let last = app.history.len() - 1;
        app.move_inspect(-1);
        assert_eq!(app.chart.inspect_index, Some(last));
        app.move_inspect(5);
        assert_eq!(app.chart.inspect_index, Some(last));
        app.move_inspect(-100);
        assert_eq!(app.chart.inspect_index, Some(0));
    }

    #[test]
    fn replace_data_clamps_cursors() {
        let mut app = app();
        app.chart.inspect_index = Some(10);
        app.chart.legend_focus = 4;
        app.replace_data(Vec::new(), vec![HistoryDataPoint::new("2025-01-01").with("e2b", 1.0)]);
        assert_eq!(app.chart.inspect_index, Some(0));
        assert_eq!(app.chart.legend_focus, 0);

        app.replace_data(Vec::new(), Vec::new());
        assert_eq!(app.chart.inspect_index, None);
    }

    #[test]
    fn failed_reload_keeps_previous_model() {
        let mut app = app();
        let count = app.results.len();
        app.sources.results = Some(PathBuf::from("/nonexistent/results.json"));
        app.reload();
        assert_eq!(app.results.len(), count);
        assert_eq!(app.status_message.as_ref().map(|s| s.1), Some(StatusLevel::Error));
    }
}
