// Property-based tests for the dashboard aggregates.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use finboard::external::fixtures::demo_orgs;
use finboard::models::{Organizations, Transaction};
use finboard::services::aggregation_service::{cumulative_balance, totals_by_organization};

const TOLERANCE: f64 = 1e-6;

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

/// Transactions over ~13 months, amounts in whole cents, org indices 0..5
/// against three known organizations so some references never resolve.
fn arb_transactions() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec((0i64..400, -500_000i64..500_000, 0usize..5), 0..60).prop_map(|rows| {
        let base = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        rows.into_iter()
            .enumerate()
            .map(|(i, (day, cents, org))| {
                Transaction::new(
                    format!("t{}", i),
                    "Generated",
                    "Test",
                    org,
                    base + Duration::days(day),
                    cents as f64 / 100.0,
                )
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn balance_series_covers_every_transaction(txs in arb_transactions()) {
        let series = cumulative_balance(&txs);
        let total: f64 = txs.iter().map(|t| t.amount).sum();

        prop_assert_eq!(series.len(), txs.len());
        prop_assert!(series.windows(2).all(|w| w[0].date <= w[1].date));
        let last = series.last().map(|p| p.balance).unwrap_or(0.0);
        prop_assert!((last - total).abs() < TOLERANCE, "final {} != total {}", last, total);
    }

    #[test]
    fn org_totals_respect_signs_and_sum(txs in arb_transactions()) {
        let orgs = Organizations::new(demo_orgs());
        let totals = totals_by_organization(&txs, &orgs);

        prop_assert_eq!(totals.incoming.len(), orgs.len());
        prop_assert_eq!(totals.outgoing.len(), orgs.len());
        prop_assert!(totals.incoming.iter().all(|v| *v >= 0.0));
        prop_assert!(totals.outgoing.iter().all(|v| *v <= 0.0));

        let grouped: f64 = totals.incoming.iter().chain(&totals.outgoing).sum();
        let resolvable: f64 = txs
            .iter()
            .filter(|t| orgs.resolve(&t.org).is_some())
            .map(|t| t.amount)
            .sum();
        prop_assert!((grouped - resolvable).abs() < TOLERANCE, "grouped {} != resolvable {}", grouped, resolvable);
    }
}
