//! Input dispatch: global keys → panel-specific handlers, plus mouse clicks.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{AppState, Panel};
use crate::panels::{column_at, legend_hit};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => { app.active_panel = Panel::Ranking; return; }
        KeyCode::Char('2') => { app.active_panel = Panel::History; return; }
        KeyCode::Char('3') | KeyCode::Char('?') => { app.active_panel = Panel::Help; return; }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        KeyCode::Char('r') => {
            app.reload();
            return;
        }
        _ => {}
    }

    // 2. Panel-specific keys.
    match app.active_panel {
        Panel::Ranking => handle_ranking_key(app, key),
        Panel::History => handle_history_key(app, key),
        Panel::Help => {}
    }
}

fn handle_ranking_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.ranking.focus_prev(),
        KeyCode::Char('l') | KeyCode::Right => app.ranking.focus_next(),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_rows(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_rows(-1),
        KeyCode::PageDown => app.scroll_rows(10),
        KeyCode::PageUp => app.scroll_rows(-10),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s') => {
            let column = app.ranking.focused();
            app.click_column(column);
        }
        _ => {}
    }
}

fn handle_history_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.move_inspect(-1),
        KeyCode::Char('l') | KeyCode::Right => app.move_inspect(1),
        KeyCode::Home => app.chart.inspect_index = (!app.history.is_empty()).then_some(0),
        KeyCode::End => app.chart.inspect_index = app.history.len().checked_sub(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_legend_focus(-1),
        KeyCode::Char('j') | KeyCode::Down => app.move_legend_focus(1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let index = app.chart.legend_focus;
            app.toggle_series(index);
        }
        KeyCode::Char('a') => app.show_all_series(),
        KeyCode::Esc => app.chart.inspect_index = None,
        _ => {}
    }
}

/// Handle a mouse event. Only left clicks on the active panel do anything.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let (x, y) = (mouse.column, mouse.row);

    match app.active_panel {
        Panel::Ranking => {
            if let Some(column) = column_at(app.ranking.area.get(), x, y) {
                app.click_column(column);
            }
        }
        Panel::History => {
            let hit = legend_hit(
                app.chart.area.get(),
                &app.providers,
                &app.chart.hidden,
                &app.assets,
                x,
                y,
            );
            if let Some(index) = hit {
                app.toggle_series(index);
            }
        }
        Panel::Help => {}
    }
}

/// Key bindings help text, grouped by panel.
pub fn key_bindings_help() -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    vec![
        (
            "Global",
            vec![
                ("1 / 2 / 3", "Ranking / History / Help"),
                ("Tab / Shift+Tab", "Cycle panels"),
                ("r", "Reload input files"),
                ("q / Ctrl+C", "Quit"),
            ],
        ),
        (
            "Ranking",
            vec![
                ("h / l, ← / →", "Move header focus"),
                ("j / k, ↑ / ↓", "Scroll rows (PgUp / PgDn by 10)"),
                ("Enter / Space", "Sort by focused column (again to reverse)"),
                ("click header", "Sort by that column (again to reverse)"),
            ],
        ),
        (
            "History",
            vec![
                ("h / l, ← / →", "Move inspection cursor"),
                ("Home / End", "First / last date"),
                ("j / k, ↑ / ↓", "Move legend focus"),
                ("Enter / Space", "Show / hide focused provider"),
                ("click legend", "Show / hide that provider"),
                ("a", "Show all providers"),
                ("Esc", "Clear inspection cursor"),
            ],
        ),
    ]
}
