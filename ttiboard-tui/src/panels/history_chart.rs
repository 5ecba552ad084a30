//! History chart panel - median TTI per provider over time
//!
//! Displays:
//! - One line per visible provider across the date axis (seconds)
//! - Inspection cursor with a tooltip of the values at that date
//! - A legend of toggle entries for every known provider
//!
//! The hidden-series set is purely local UI state. This panel never reads
//! provider results or the ranking.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Clear, Dataset, GraphType, Paragraph, Widget},
};
use ttiboard_core::{format_seconds, provider_key, DisplayAssets, HistoryDataPoint};

use crate::palette::Palette;
use crate::theme::Theme;

const LEGEND_GAP: u16 = 1;

/// Providers whose lines are currently suppressed. Case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HiddenSeries {
    hidden: BTreeSet<String>,
}

impl HiddenSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership. Returns `true` if the provider is now visible.
    pub fn toggle(&mut self, provider: &str) -> bool {
        let key = provider_key(provider);
        if self.hidden.remove(&key) {
            true
        } else {
            self.hidden.insert(key);
            false
        }
    }

    pub fn is_hidden(&self, provider: &str) -> bool {
        self.hidden.contains(&provider_key(provider))
    }

    pub fn show_all(&mut self) {
        self.hidden.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.hidden.is_empty()
    }
}

/// A provider's value at the inspected date.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectedValue {
    pub provider: String,
    pub label: String,
    pub ms: f64,
}

/// `(date index, seconds)` for every date where the provider has a sample.
///
/// Missing dates are skipped rather than zero-filled, so the line joins the
/// neighbouring samples directly.
pub fn series_points(history: &[HistoryDataPoint], provider: &str) -> Vec<(f64, f64)> {
    history
        .iter()
        .enumerate()
        .filter_map(|(i, point)| point.value_for(provider).map(|ms| (i as f64, ms / 1000.0)))
        .collect()
}

/// Values of all visible providers at `index`, fastest first.
pub fn inspect(
    history: &[HistoryDataPoint],
    index: usize,
    providers: &[String],
    hidden: &HiddenSeries,
    assets: &DisplayAssets,
) -> Vec<InspectedValue> {
    let Some(point) = history.get(index) else {
        return Vec::new();
    };
    let mut values: Vec<InspectedValue> = providers
        .iter()
        .filter(|p| !hidden.is_hidden(p))
        .filter_map(|p| {
            point.value_for(p).map(|ms| InspectedValue {
                provider: p.clone(),
                label: assets.display_name(p).to_string(),
                ms,
            })
        })
        .collect();
    values.sort_by(|a, b| a.ms.total_cmp(&b.ms));
    values
}

/// Shorten `YYYY-MM-DD...` to `Jan 03`; anything else is shown as given.
pub fn short_date(date: &str) -> String {
    date.get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .map(|d| d.format("%b %d").to_string())
        .unwrap_or_else(|| date.to_string())
}

fn legend_label(assets: &DisplayAssets, provider: &str, hidden: bool) -> String {
    let marker = if hidden { "□" } else { "■" };
    format!("[{} {}]", marker, assets.display_name(provider))
}

/// Positions of the legend entries inside `inner`, wrapping onto new rows.
fn legend_layout(
    inner: Rect,
    providers: &[String],
    hidden: &HiddenSeries,
    assets: &DisplayAssets,
) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(providers.len());
    let (mut x, mut row) = (0u16, 0u16);
    for provider in providers {
        let label = legend_label(assets, provider, hidden.is_hidden(provider));
        let width = (Span::raw(label).width() as u16).min(inner.width.max(1));
        if x > 0 && x + width > inner.width {
            x = 0;
            row += 1;
        }
        rects.push(Rect::new(inner.x + x, row, width, 1));
        x += width + LEGEND_GAP;
    }
    let rows = rects.last().map(|r| r.y + 1).unwrap_or(1);
    let top = inner.bottom().saturating_sub(rows);
    rects
        .into_iter()
        .map(|r| Rect { y: top + r.y, ..r })
        .collect()
}

fn legend_rows(rects: &[Rect], inner: Rect) -> u16 {
    rects
        .first()
        .map(|r| inner.bottom().saturating_sub(r.y))
        .unwrap_or(1)
}

/// Map a click inside the chart panel to the index of a legend entry.
pub fn legend_hit(
    area: Rect,
    providers: &[String],
    hidden: &HiddenSeries,
    assets: &DisplayAssets,
    x: u16,
    y: u16,
) -> Option<usize> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    legend_layout(inner, providers, hidden, assets)
        .iter()
        .position(|r| r.y >= inner.y && y == r.y && x >= r.x && x < r.right())
}

/// History chart widget
pub struct HistoryChart<'a> {
    history: &'a [HistoryDataPoint],
    providers: &'a [String],
    hidden: &'a HiddenSeries,
    palette: &'a Palette,
    assets: &'a DisplayAssets,
    theme: &'a Theme,
    inspect_index: Option<usize>,
    legend_focus: Option<usize>,
}

impl<'a> HistoryChart<'a> {
    pub fn new(
        history: &'a [HistoryDataPoint],
        providers: &'a [String],
        hidden: &'a HiddenSeries,
        palette: &'a Palette,
        assets: &'a DisplayAssets,
        theme: &'a Theme,
    ) -> Self {
        Self {
            history,
            providers,
            hidden,
            palette,
            assets,
            theme,
            inspect_index: None,
            legend_focus: None,
        }
    }

    pub fn inspect_index(mut self, index: Option<usize>) -> Self {
        self.inspect_index = index;
        self
    }

    pub fn legend_focus(mut self, index: usize) -> Self {
        self.legend_focus = Some(index);
        self
    }

    fn visible(&self) -> impl Iterator<Item = &'a String> + '_ {
        self.providers.iter().filter(|p| !self.hidden.is_hidden(p))
    }

    fn render_legend(&self, rects: &[Rect], inner_top: u16, buf: &mut Buffer) {
        for (i, (provider, rect)) in self.providers.iter().zip(rects).enumerate() {
            if rect.y < inner_top {
                continue;
            }
            let hidden = self.hidden.is_hidden(provider);
            let mut style = Style::default().fg(self.palette.color_for(provider));
            if hidden {
                style = style.add_modifier(Modifier::DIM);
            }
            if self.legend_focus == Some(i) {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
            }
            let label = legend_label(self.assets, provider, hidden);
            buf.set_stringn(rect.x, rect.y, label, rect.width as usize, style);
        }
    }

    fn render_tooltip(&self, index: usize, chart_area: Rect, buf: &mut Buffer) {
        let values = inspect(self.history, index, self.providers, self.hidden, self.assets);
        let date = &self.history[index].date;

        let lines: Vec<Line> = if values.is_empty() {
            vec![Line::from(Span::styled("no data", self.theme.muted()))]
        } else {
            values
                .iter()
                .map(|v| {
                    Line::from(vec![
                        Span::styled("■ ", Style::default().fg(self.palette.color_for(&v.provider))),
                        Span::styled(format!("{}: ", v.label), self.theme.secondary()),
                        Span::styled(
                            format_seconds(v.ms),
                            Style::default().fg(self.theme.text_primary),
                        ),
                    ])
                })
                .collect()
        };

        let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let width = (content_width.max(date.len() as u16) + 4).min(chart_area.width);
        let height = (lines.len() as u16 + 2).min(chart_area.height);
        let tooltip = Rect::new(
            chart_area.right().saturating_sub(width + 1),
            chart_area.y,
            width,
            height,
        );

        Clear.render(tooltip, buf);
        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!(" {date} "))
                    .borders(Borders::ALL)
                    .border_style(self.theme.muted())
                    .style(Style::default().bg(self.theme.background)),
            )
            .render(tooltip, buf);
    }
}

impl<'a> Widget for HistoryChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible_count = self.visible().count();
        let block = Block::default()
            .title(format!(
                " TTI History (median) [{}/{} visible] ",
                visible_count,
                self.providers.len()
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(Style::default().bg(self.theme.background));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.history.is_empty() {
            let line = Line::from(Span::styled("No history data loaded.", self.theme.muted()));
            buf.set_line(inner.x + 1, inner.y + 1, &line, inner.width.saturating_sub(2));
            return;
        }

        let legend = legend_layout(inner, self.providers, self.hidden, self.assets);
        let legend_height = legend_rows(&legend, inner);
        let chart_area = Rect {
            height: inner.height.saturating_sub(legend_height + 1),
            ..inner
        };

        let series: Vec<(&String, Vec<(f64, f64)>)> = self
            .visible()
            .map(|p| (p, series_points(self.history, p)))
            .filter(|(_, points)| !points.is_empty())
            .collect();

        let (y_lower, y_upper) = y_bounds(series.iter().flat_map(|(_, pts)| pts.iter().map(|&(_, y)| y)));
        let x_max = (self.history.len().saturating_sub(1) as f64).max(1.0);
        let cursor = self
            .inspect_index
            .filter(|&i| i < self.history.len())
            .map(|i| vec![(i as f64, y_lower), (i as f64, y_upper)]);

        let mut datasets: Vec<Dataset> = series
            .iter()
            .map(|(provider, points)| {
                let graph_type = if points.len() == 1 {
                    GraphType::Scatter
                } else {
                    GraphType::Line
                };
                Dataset::default()
                    .marker(symbols::Marker::Braille)
                    .graph_type(graph_type)
                    .style(Style::default().fg(self.palette.color_for(provider)))
                    .data(points)
            })
            .collect();
        if let Some(cursor) = &cursor {
            datasets.push(
                Dataset::default()
                    .marker(symbols::Marker::Dot)
                    .graph_type(GraphType::Line)
                    .style(self.theme.muted())
                    .data(cursor),
            );
        }

        let first = self.history.first().map(|p| short_date(&p.date)).unwrap_or_default();
        let mid = short_date(&self.history[self.history.len() / 2].date);
        let last = self.history.last().map(|p| short_date(&p.date)).unwrap_or_default();

        let chart = Chart::new(datasets)
            .x_axis(
                Axis::default()
                    .title(Span::styled("Date", self.theme.secondary()))
                    .style(self.theme.muted())
                    .bounds([0.0, x_max])
                    .labels(vec![Span::raw(first), Span::raw(mid), Span::raw(last)]),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled("TTI", self.theme.secondary()))
                    .style(self.theme.muted())
                    .bounds([y_lower, y_upper])
                    .labels(vec![
                        Span::raw(format!("{y_lower:.2}s")),
                        Span::raw(format!("{:.2}s", (y_lower + y_upper) / 2.0)),
                        Span::raw(format!("{y_upper:.2}s")),
                    ]),
            );
        if chart_area.height >= 3 && chart_area.width >= 12 {
            chart.render(chart_area, buf);
            if let Some(index) = self.inspect_index.filter(|&i| i < self.history.len()) {
                self.render_tooltip(index, chart_area, buf);
            }
        }

        self.render_legend(&legend, inner.y, buf);
    }
}

/// Padded y range in seconds; `[0, 1]` when nothing is visible.
fn y_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let range = max - min;
    let pad = if range > 0.0 { range * 0.05 } else { 0.1 };
    ((min - pad).max(0.0), max + pad)
}
