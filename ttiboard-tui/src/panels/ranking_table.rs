//! Ranking table panel - providers ranked by a TTI statistic
//!
//! Displays:
//! - Rank, logo + display name
//! - Min / Max / Median / P95 / P99 / Avg in milliseconds
//! - Success ratio
//! - A proportional bar for the sorted statistic
//!
//! Active rows come first in rank order, inactive rows follow in input
//! order with their reason. Every header except the bar is sortable.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, StatefulWidget, Table, TableState, Widget},
};
use ttiboard_core::{
    format_ms, format_ratio, DisplayAssets, InactiveRow, RankedRow, Ranking, SortColumn, SortKey,
};

use crate::theme::Theme;

const COLUMN_SPACING: u16 = 1;
const RANK_WIDTH: u16 = 4;
const PROVIDER_WIDTH: u16 = 20;
const STAT_WIDTH: u16 = 8;
const RATIO_WIDTH: u16 = 5;

const EIGHTHS: [&str; 8] = ["", "▏", "▎", "▍", "▌", "▋", "▊", "▉"];

/// Current sort of the table. Owned by the view state, never by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSort {
    pub column: SortColumn,
    pub ascending: bool,
}

impl Default for TableSort {
    fn default() -> Self {
        Self {
            column: SortColumn::Stat(SortKey::PRIMARY),
            ascending: true,
        }
    }
}

impl TableSort {
    pub fn new(key: SortKey, ascending: bool) -> Self {
        Self {
            column: SortColumn::Stat(key),
            ascending,
        }
    }

    /// Header click: same column flips direction, another column resets to ascending.
    pub fn click(&mut self, column: SortColumn) {
        if self.column == column {
            self.ascending = !self.ascending;
        } else {
            self.column = column;
            self.ascending = true;
        }
    }
}

/// Ranking table widget
pub struct RankingTable<'a> {
    ranking: &'a Ranking<'a>,
    assets: &'a DisplayAssets,
    theme: &'a Theme,
    focused_column: Option<usize>,
    bar_width: u16,
    offset: usize,
}

impl<'a> RankingTable<'a> {
    pub fn new(ranking: &'a Ranking<'a>, assets: &'a DisplayAssets, theme: &'a Theme) -> Self {
        Self {
            ranking,
            assets,
            theme,
            focused_column: None,
            bar_width: crate::config::DEFAULT_BAR_WIDTH,
            offset: 0,
        }
    }

    /// Header index (into [`SortColumn::ALL`]) with keyboard focus.
    pub fn focused_column(mut self, index: usize) -> Self {
        self.focused_column = Some(index);
        self
    }

    pub fn bar_width(mut self, width: u16) -> Self {
        self.bar_width = width;
        self
    }

    /// First body row to draw; active and inactive rows scroll together.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    fn widths(&self) -> Vec<Constraint> {
        column_widths()
            .into_iter()
            .map(Constraint::Length)
            .chain(std::iter::once(Constraint::Min(self.bar_width)))
            .collect()
    }

    fn header(&self) -> Row<'a> {
        let mut cells: Vec<Cell> = SortColumn::ALL
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let mut label = column.label().to_string();
                if self.ranking.column == *column {
                    label.push(' ');
                    label.push_str(arrow(self.ranking.ascending));
                }
                let mut style = self.theme.header();
                if self.focused_column == Some(i) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Cell::from(label).style(style)
            })
            .collect();
        cells.push(Cell::from("OK%").style(self.theme.header()));
        cells.push(Cell::from(self.ranking.column.value_key().label()).style(self.theme.muted()));
        Row::new(cells).height(1)
    }

    fn active_row(&self, row: &RankedRow<'_>) -> Row<'a> {
        let highlight = self.ranking.highlights_leader() && row.is_leader;
        let base = if highlight {
            self.theme.leader()
        } else {
            Style::default().fg(self.theme.text_primary)
        };
        let provider = &row.result.provider;
        let rank = if highlight {
            format!("★{}", row.rank)
        } else {
            row.rank.to_string()
        };

        let mut cells = vec![
            Cell::from(rank),
            Cell::from(provider_label(self.assets, provider)),
        ];
        cells.extend(SortKey::ALL.iter().map(|key| {
            let text = row
                .result
                .summary
                .as_ref()
                .map(|s| format_ms(key.extract(s)))
                .unwrap_or_default();
            let cell = Cell::from(text);
            if *key == self.ranking.key && !matches!(self.ranking.column, SortColumn::Provider) {
                cell.style(Style::default().add_modifier(Modifier::BOLD))
            } else {
                cell
            }
        }));
        cells.push(ratio_cell(row.result.iterations.is_some(), row.success_ratio, self.theme));
        cells.push(
            Cell::from(bar(row.relative_scale, self.bar_width))
                .style(Style::default().fg(self.theme.scale_color(row.relative_scale))),
        );

        Row::new(cells).style(base).height(1)
    }

    fn inactive_row(&self, row: &InactiveRow<'_>) -> Row<'a> {
        let provider = &row.result.provider;
        let mut cells = vec![
            Cell::from("–"),
            Cell::from(provider_label(self.assets, provider)),
        ];
        cells.extend(SortKey::ALL.iter().map(|_| Cell::from("–")));
        cells.push(ratio_cell(row.result.iterations.is_some(), row.success_ratio, self.theme));
        cells.push(Cell::from(row.reason.label().to_string()));

        Row::new(cells).style(self.theme.inactive()).height(1)
    }

    fn title(&self) -> String {
        let scrolled = if self.offset > 0 {
            format!(" +{} above", self.offset)
        } else {
            String::new()
        };
        format!(
            " Ranking [{} {}] {} active / {} inactive{} ",
            self.ranking.column.label(),
            arrow(self.ranking.ascending),
            self.ranking.active.len(),
            self.ranking.inactive.len(),
            scrolled,
        )
    }
}

impl<'a> Widget for RankingTable<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(Style::default().bg(self.theme.background));

        if self.ranking.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            let line = Line::from(Span::styled(
                "No benchmark results loaded. Press r to reload.",
                self.theme.muted(),
            ));
            buf.set_line(inner.x + 1, inner.y + 1, &line, inner.width.saturating_sub(2));
            return;
        }

        let rows: Vec<Row> = self
            .ranking
            .active
            .iter()
            .map(|row| self.active_row(row))
            .chain(self.ranking.inactive.iter().map(|row| self.inactive_row(row)))
            .collect();

        let table = Table::new(rows, self.widths())
            .header(self.header())
            .block(block)
            .column_spacing(COLUMN_SPACING);

        let mut state = TableState::default().with_offset(self.offset);
        StatefulWidget::render(table, area, buf, &mut state);
    }
}

/// Fixed widths of the sortable columns, in [`SortColumn::ALL`] order.
fn column_widths() -> Vec<u16> {
    let mut widths = vec![RANK_WIDTH, PROVIDER_WIDTH];
    widths.extend(std::iter::repeat(STAT_WIDTH).take(SortKey::ALL.len()));
    widths.push(RATIO_WIDTH);
    widths
}

/// Map a click inside the table area to a sortable header column.
///
/// `x`/`y` are absolute terminal coordinates; only the header row (first
/// row inside the border) is clickable.
pub fn column_at(area: Rect, x: u16, y: u16) -> Option<SortColumn> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    if y != inner.y || x < inner.x || x >= inner.right() {
        return None;
    }
    let mut start = inner.x;
    for (column, width) in SortColumn::ALL.iter().zip(column_widths()) {
        if x >= start && x < start + width {
            return Some(*column);
        }
        start += width + COLUMN_SPACING;
    }
    None
}

fn arrow(ascending: bool) -> &'static str {
    if ascending {
        "▲"
    } else {
        "▼"
    }
}

fn provider_label(assets: &DisplayAssets, provider: &str) -> String {
    format!("{} {}", assets.logo(provider), assets.display_name(provider))
}

fn ratio_cell<'a>(has_iterations: bool, ratio: f64, theme: &Theme) -> Cell<'a> {
    if has_iterations {
        Cell::from(format_ratio(ratio)).style(Style::default().fg(theme.ratio_color(ratio)))
    } else {
        Cell::from("–")
    }
}

/// Horizontal bar at eighth-cell resolution; never empty for a positive scale.
pub fn bar(scale: f64, width: u16) -> String {
    let total = u32::from(width) * 8;
    let eighths = ((scale.clamp(0.0, 1.0) * f64::from(total)).round() as u32).clamp(1, total.max(1));
    let full = (eighths / 8) as usize;
    let rest = (eighths % 8) as usize;
    let mut out = "█".repeat(full);
    out.push_str(EIGHTHS[rest]);
    out
}
