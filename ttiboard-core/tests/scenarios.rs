//! End-to-end ranking scenarios over realistic provider mixes.

use ttiboard_core::{
    partition_and_rank, rank_by_column, IterationResult, ProviderResult, SortColumn, SortKey,
    SummaryStats, ALL_ITERATIONS_FAILED,
};

fn stats(median: f64) -> SummaryStats {
    SummaryStats {
        min: median * 0.6,
        max: median * 2.2,
        median,
        p95: median * 1.7,
        p99: median * 2.0,
        avg: median * 1.1,
    }
}

#[test]
fn faster_median_ranks_first_and_leads() {
    let results = vec![
        ProviderResult::active("a", stats(500.0)),
        ProviderResult::active("b", stats(300.0)),
    ];

    let ranking = partition_and_rank(&results, SortKey::Median, true);

    let order: Vec<&str> = ranking.active.iter().map(|r| r.result.provider.as_str()).collect();
    assert_eq!(order, vec!["b", "a"]);
    assert_eq!(ranking.active[0].rank, 1);
    assert!(ranking.active[0].is_leader);
    assert_eq!(ranking.leader().map(|r| r.result.provider.as_str()), Some("b"));
}

#[test]
fn skipped_provider_stays_inactive_under_every_key() {
    let results = vec![
        ProviderResult::active("a", stats(500.0)),
        ProviderResult::skipped("c", Some("no credentials".into())),
        ProviderResult::active("b", stats(300.0)),
    ];

    for key in SortKey::ALL {
        for ascending in [true, false] {
            let ranking = partition_and_rank(&results, key, ascending);
            assert!(ranking.active.iter().all(|r| r.result.provider != "c"));

            let skipped: Vec<_> = ranking
                .inactive
                .iter()
                .filter(|r| r.result.provider == "c")
                .collect();
            assert_eq!(skipped.len(), 1);
            assert_eq!(skipped[0].reason.label(), "no credentials");
        }
    }
}

#[test]
fn provider_whose_runs_all_failed_is_inactive() {
    let failed = ProviderResult {
        provider: "d".into(),
        summary: None,
        skipped: false,
        skip_reason: None,
        iterations: Some(vec![
            IterationResult::failed("timeout"),
            IterationResult::failed("timeout"),
        ]),
    };
    let results = vec![ProviderResult::active("a", stats(200.0)), failed];

    let ranking = partition_and_rank(&results, SortKey::Median, true);

    assert_eq!(ranking.active.len(), 1);
    assert_eq!(ranking.inactive.len(), 1);
    let row = &ranking.inactive[0];
    assert_eq!(row.result.provider, "d");
    assert_eq!(row.success_ratio, 0.0);
    assert_eq!(row.reason.label(), ALL_ITERATIONS_FAILED);
}

#[test]
fn column_switches_never_mix_inactive_rows_in() {
    let results = vec![
        ProviderResult::skipped("z-skipped", None),
        ProviderResult::active("modal", stats(320.0)),
        ProviderResult::active("e2b", stats(180.0)),
        ProviderResult::active("daytona", stats(90.0)),
    ];

    for column in SortColumn::ALL {
        for ascending in [true, false] {
            let ranking = rank_by_column(&results, column, ascending);
            assert_eq!(ranking.active.len(), 3);
            assert_eq!(ranking.inactive.len(), 1);
            assert_eq!(ranking.inactive[0].result.provider, "z-skipped");
        }
    }
}
