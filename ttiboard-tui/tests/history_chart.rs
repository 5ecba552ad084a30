//! History chart behavior: legend toggles, gap bridging, tooltip ordering.

use proptest::prelude::*;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ttiboard_core::{format_seconds, DisplayAssets, HistoryDataPoint};
use ttiboard_tui::panels::{inspect, series_points, HiddenSeries, HistoryChart};
use ttiboard_tui::{Palette, Theme};

fn provider_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec!["e2b", "E2B", "modal", "Daytona", "daytona", "acme"]),
        0..12,
    )
    .prop_map(|names| names.into_iter().map(String::from).collect())
}

// ── Toggle involution ──

proptest! {
    #[test]
    fn toggling_twice_is_identity(prefix in provider_names(), provider in "[a-zA-Z]{1,8}") {
        let mut hidden = HiddenSeries::new();
        for name in &prefix {
            hidden.toggle(name);
        }
        let before = hidden.clone();
        let was_hidden = hidden.is_hidden(&provider);

        let visible = hidden.toggle(&provider);
        prop_assert_eq!(visible, was_hidden);
        prop_assert_eq!(hidden.is_hidden(&provider), !was_hidden);

        hidden.toggle(&provider.to_uppercase());
        prop_assert_eq!(hidden, before);
    }

    #[test]
    fn gaps_are_never_zero_filled(values in prop::collection::vec(prop::option::of(1.0f64..5000.0), 0..30)) {
        let history: Vec<HistoryDataPoint> = values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let point = HistoryDataPoint::new(format!("2025-01-{:02}", i + 1));
                match v {
                    Some(ms) => point.with("e2b", *ms),
                    None => point.with("modal", 100.0),
                }
            })
            .collect();

        let points = series_points(&history, "e2b");
        prop_assert_eq!(points.len(), values.iter().flatten().count());
        prop_assert!(points.iter().all(|&(_, y)| y > 0.0));
        prop_assert!(points.windows(2).all(|w| w[0].0 < w[1].0));
    }
}

// ── Scenario: legend toggle hides and restores one series ──

#[test]
fn toggling_a_legend_entry_hides_then_restores_its_series() {
    let history = vec![
        HistoryDataPoint::new("2025-02-01").with("e2b", 410.0).with("modal", 1500.0),
        HistoryDataPoint::new("2025-02-02").with("e2b", 395.0).with("modal", 1480.0),
    ];
    let assets = DisplayAssets::builtin();
    let providers = vec!["e2b".to_string(), "modal".to_string()];
    let mut hidden = HiddenSeries::new();

    assert!(!hidden.toggle("modal"));
    let shown = inspect(&history, 1, &providers, &hidden, &assets);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].provider, "e2b");

    assert!(hidden.toggle("modal"));
    let shown = inspect(&history, 1, &providers, &hidden, &assets);
    let names: Vec<&str> = shown.iter().map(|v| v.label.as_str()).collect();
    assert_eq!(names, vec!["E2B", "Modal"]);
}

// ── Tooltip ──

#[test]
fn tooltip_lists_values_fastest_first_in_seconds() {
    let history = vec![HistoryDataPoint::new("2025-02-01")
        .with("modal", 1234.0)
        .with("e2b", 987.0)
        .with("acme", 50.0)];
    let assets = DisplayAssets::builtin();
    let providers = vec!["modal".to_string(), "e2b".to_string(), "acme".to_string()];
    let hidden = HiddenSeries::new();

    let values = inspect(&history, 0, &providers, &hidden, &assets);
    let formatted: Vec<(String, String)> = values
        .iter()
        .map(|v| (v.label.clone(), format_seconds(v.ms)))
        .collect();
    assert_eq!(
        formatted,
        vec![
            ("acme".to_string(), "0.05s".to_string()),
            ("E2B".to_string(), "0.99s".to_string()),
            ("Modal".to_string(), "1.23s".to_string()),
        ]
    );

    let palette = Palette::builtin();
    let theme = Theme::default();
    let area = Rect::new(0, 0, 90, 20);
    let mut buf = Buffer::empty(area);
    HistoryChart::new(&history, &providers, &hidden, &palette, &assets, &theme)
        .inspect_index(Some(0))
        .render(area, &mut buf);

    let rows: Vec<String> = (0..area.height)
        .map(|y| (0..area.width).map(|x| buf.cell((x, y)).unwrap().symbol()).collect())
        .collect();
    let row_of = |needle: &str| rows.iter().position(|r| r.contains(needle));
    let acme = row_of("acme: 0.05s").expect("acme in tooltip");
    let e2b = row_of("E2B: 0.99s").expect("e2b in tooltip");
    let modal = row_of("Modal: 1.23s").expect("modal in tooltip");
    assert!(acme < e2b && e2b < modal);
}

#[test]
fn renders_in_tiny_areas_without_panicking() {
    let history = vec![HistoryDataPoint::new("2025-02-01").with("e2b", 410.0)];
    let assets = DisplayAssets::builtin();
    let providers = vec!["e2b".to_string()];
    let hidden = HiddenSeries::new();
    let palette = Palette::builtin();
    let theme = Theme::default();

    for (w, h) in [(1, 1), (5, 3), (12, 4), (30, 6)] {
        let area = Rect::new(0, 0, w, h);
        let mut buf = Buffer::empty(area);
        HistoryChart::new(&history, &providers, &hidden, &palette, &assets, &theme)
            .inspect_index(Some(0))
            .legend_focus(0)
            .render(area, &mut buf);
    }
}
