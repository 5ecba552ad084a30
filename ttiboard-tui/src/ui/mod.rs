//! Top-level UI layout: tab bar, active panel, status bar.

pub mod help_panel;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Tabs;
use ratatui::Frame;

use crate::app::{AppState, Panel};
use crate::panels::{HistoryChart, RankingTable};

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let area = f.area();
    // Split: tab bar + main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    clear_background(f, area, app);
    draw_tabs(f, chunks[0], app);
    draw_panel(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &AppState) {
    let titles: Vec<Line> = Panel::ALL
        .iter()
        .map(|p| Line::from(format!(" {} {} ", p.index() + 1, p.label())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.active_panel.index())
        .style(app.theme.muted())
        .highlight_style(app.theme.header())
        .divider("|");
    f.render_widget(tabs, area);
}

/// Draw the active panel. Each panel draws its own border.
fn draw_panel(f: &mut Frame, area: Rect, app: &AppState) {
    match app.active_panel {
        Panel::Ranking => {
            app.ranking.area.set(area);
            // recomputed every frame from the current model and sort
            let ranking = app.current_ranking();
            let table = RankingTable::new(&ranking, &app.assets, &app.theme)
                .focused_column(app.ranking.focused_column)
                .bar_width(app.bar_width)
                .offset(app.ranking.offset);
            f.render_widget(table, area);
        }
        Panel::History => {
            app.chart.area.set(area);
            let mut chart = HistoryChart::new(
                &app.history,
                &app.providers,
                &app.chart.hidden,
                &app.palette,
                &app.assets,
                &app.theme,
            )
            .inspect_index(app.chart.inspect_index);
            if !app.providers.is_empty() {
                chart = chart.legend_focus(app.chart.legend_focus);
            }
            f.render_widget(chart, area);
        }
        Panel::Help => help_panel::render(f, area, app),
    }
}

fn clear_background(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(
        ratatui::widgets::Block::default().style(Style::default().bg(app.theme.background)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use crate::app::DataSources;
    use crate::config::TuiConfig;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf.cell((x, y)).unwrap().symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn draws_every_panel() {
        let mut app = AppState::new(&TuiConfig::default(), DataSources::default()).unwrap();
        app.reload();
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();

        for panel in Panel::ALL {
            app.active_panel = panel;
            terminal.draw(|f| draw(f, &app)).unwrap();
            let text = screen_text(&terminal);
            assert!(text.contains("1 Ranking"));
            assert!(text.contains("Sample data"));
        }
        assert_eq!(app.ranking.area.get(), Rect::new(0, 1, 120, 28));
        assert_eq!(app.chart.area.get(), Rect::new(0, 1, 120, 28));
    }

    #[test]
    fn draws_empty_model() {
        let app = AppState::new(&TuiConfig::default(), DataSources::default()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
        assert!(screen_text(&terminal).contains("No benchmark results loaded"));
    }
}
