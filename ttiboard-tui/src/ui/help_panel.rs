//! Panel 3: Help: keyboard and mouse bindings.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::input::key_bindings_help;
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let mut lines: Vec<Line> = Vec::new();

    for (title, bindings) in key_bindings_help() {
        section(&mut lines, theme, title);
        for (keys, desc) in bindings {
            key(&mut lines, theme, keys, desc);
        }
        lines.push(Line::from(""));
    }

    section(&mut lines, theme, "Reading the views");
    key(&mut lines, theme, "★", "Fastest provider (ascending median or rank only)");
    key(&mut lines, theme, "bar", "Sorted value relative to the slowest provider");
    key(&mut lines, theme, "OK%", "Share of iterations that succeeded");
    key(&mut lines, theme, "■ / □", "Series shown / hidden");

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(theme.panel_border());
    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(para, area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, theme: &Theme, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme.header())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, theme: &Theme, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme.secondary()),
        Span::styled(desc.to_string(), theme.muted()),
    ]));
}
