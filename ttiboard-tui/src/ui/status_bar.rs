//! Bottom status bar: panel hints, data source, last status message.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let mut spans: Vec<Span> = Vec::new();

    // Panel hints
    spans.push(Span::styled(
        " 1:Ranking 2:History 3:Help r:Reload q:Quit",
        theme.muted(),
    ));

    // Data source
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(app.sources.describe(), theme.secondary()));
    spans.push(Span::raw(" | "));

    // Status message
    if let Some((msg, level)) = &app.status_message {
        let color = match level {
            StatusLevel::Info => theme.accent,
            StatusLevel::Warning => theme.warning,
            StatusLevel::Error => theme.negative,
        };
        spans.push(Span::styled(msg.as_str(), Style::default().fg(color)));
    }

    let line = Line::from(spans);
    let para = Paragraph::new(line);
    f.render_widget(para, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::path::PathBuf;

    use crate::app::DataSources;
    use crate::config::TuiConfig;

    fn status_line(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 1)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render(f, area, app);
            })
            .unwrap();
        let buf = terminal.backend().buffer();
        (0..buf.area.width).map(|x| buf.cell((x, 0)).unwrap().symbol()).collect()
    }

    #[test]
    fn shows_data_source_and_message() {
        let sources = DataSources {
            results: Some(PathBuf::from("/data/results.json")),
            history: None,
        };
        let mut app = AppState::new(&TuiConfig::default(), sources).unwrap();
        app.set_warning("stale");

        let line = status_line(&app);
        assert!(line.contains("| results: results.json | stale"));
    }

    #[test]
    fn sample_source_is_labelled() {
        let app = AppState::new(&TuiConfig::default(), DataSources::default()).unwrap();
        assert!(status_line(&app).contains("sample data"));
    }
}
