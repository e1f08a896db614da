use chrono::NaiveDate;
use tracing::debug;

use crate::models::{BalancePoint, BalanceSeries, OrgTotals, Organizations, SeriesMeta, Transaction};

/// Epoch milliseconds of UTC midnight on `date`.
pub fn date_to_timestamp(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or_default()
}

/// Running balance, one point per transaction in date order.
///
/// Sorting is stable, so same-day transactions keep their list order.
pub fn cumulative_balance(transactions: &[Transaction]) -> Vec<BalancePoint> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by_key(|t| t.date);

    ordered
        .into_iter()
        .scan(0.0_f64, |running, t| {
            *running += t.amount;
            Some(BalancePoint {
                date: t.date,
                timestamp: date_to_timestamp(t.date),
                balance: *running,
            })
        })
        .collect()
}

pub fn balance_series(transactions: &[Transaction]) -> BalanceSeries {
    let series = cumulative_balance(transactions);

    let meta = SeriesMeta {
        points: series.len(),
        start: series.first().map(|p| p.date),
        end: series.last().map(|p| p.date),
        final_balance: series.last().map(|p| p.balance).unwrap_or(0.0),
    };

    BalanceSeries { series, meta }
}

/// Sums positive and negative amounts per organization.
///
/// Transactions whose organization cannot be resolved are left out.
pub fn totals_by_organization(transactions: &[Transaction], orgs: &Organizations) -> OrgTotals {
    let mut totals = OrgTotals::zeroed(orgs.len());

    for t in transactions {
        let Some(i) = orgs.resolve(&t.org) else {
            debug!("Transaction {} references unknown organization {:?}", t.id, t.org);
            continue;
        };

        if t.is_incoming() {
            totals.incoming[i] += t.amount;
        } else if t.is_outgoing() {
            totals.outgoing[i] += t.amount;
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::fixtures::{demo_orgs, demo_transactions};
    use crate::models::{OrgRef, Organization};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tx(id: &str, org: impl Into<OrgRef>, on: NaiveDate, amount: f64) -> Transaction {
        Transaction::new(id, id, "Test", org, on, amount)
    }

    #[test]
    fn test_two_transaction_scenario() {
        let txs = vec![
            tx("a", 0usize, date(2024, 1, 15), 3000.0),
            tx("b", 0usize, date(2024, 4, 10), -500.0),
        ];
        let balances: Vec<f64> = cumulative_balance(&txs).iter().map(|p| p.balance).collect();
        assert_eq!(balances, vec![3000.0, 2500.0]);
    }

    #[test]
    fn test_unsorted_input_is_ordered_by_date() {
        let txs = vec![
            tx("late", 0usize, date(2024, 4, 10), -500.0),
            tx("early", 0usize, date(2024, 1, 15), 3000.0),
        ];
        let series = cumulative_balance(&txs);
        assert_eq!(series[0].date, date(2024, 1, 15));
        assert_eq!(series[1].balance, 2500.0);
    }

    #[test]
    fn test_same_day_keeps_list_order() {
        let txs = vec![
            tx("first", 0usize, date(2024, 2, 1), 10.0),
            tx("second", 0usize, date(2024, 2, 1), -30.0),
            tx("earlier", 0usize, date(2024, 1, 1), 5.0),
        ];
        let balances: Vec<f64> = cumulative_balance(&txs).iter().map(|p| p.balance).collect();
        assert_eq!(balances, vec![5.0, 15.0, -15.0]);
    }

    #[test]
    fn test_series_length_and_final_value_match_totals() {
        let txs = demo_transactions();
        let series = balance_series(&txs);
        let total: f64 = txs.iter().map(|t| t.amount).sum();

        assert_eq!(series.meta.points, txs.len());
        assert!((series.meta.final_balance - total).abs() < 1e-9);
        assert_eq!(series.meta.start, Some(date(2023, 11, 29)));
        assert_eq!(series.meta.end, Some(date(2024, 5, 30)));
    }

    #[test]
    fn test_empty_input() {
        let series = balance_series(&[]);
        assert!(series.series.is_empty());
        assert_eq!(series.meta.final_balance, 0.0);
        assert_eq!(series.meta.start, None);
    }

    #[test]
    fn test_timestamp_is_utc_midnight() {
        assert_eq!(date_to_timestamp(date(1970, 1, 2)), 86_400_000);
    }

    #[test]
    fn test_demo_totals_by_organization() {
        let orgs = Organizations::new(demo_orgs());
        let totals = totals_by_organization(&demo_transactions(), &orgs);

        assert_eq!(totals.len(), 3);
        assert!((totals.incoming[0] - 3058.99).abs() < 1e-9);
        assert!((totals.outgoing[0] + 30.25).abs() < 1e-9);
        assert_eq!(totals.incoming[1], 0.0);
        assert!((totals.outgoing[1] + 26.98).abs() < 1e-9);
        assert!((totals.incoming[2] - 600.0).abs() < 1e-9);
        assert!((totals.outgoing[2] + 575.5).abs() < 1e-9);
    }

    #[test]
    fn test_totals_signs_and_sum() {
        let orgs = Organizations::new(demo_orgs());
        let txs = demo_transactions();
        let totals = totals_by_organization(&txs, &orgs);

        assert!(totals.incoming.iter().all(|v| *v >= 0.0));
        assert!(totals.outgoing.iter().all(|v| *v <= 0.0));

        let grouped: f64 = totals.incoming.iter().chain(&totals.outgoing).sum();
        let all: f64 = txs.iter().map(|t| t.amount).sum();
        assert!((grouped - all).abs() < 1e-9);
    }

    #[test]
    fn test_org_without_transactions_is_zero() {
        let mut orgs = demo_orgs();
        orgs.push(Organization::new("3", "Test", "Legal"));
        let totals = totals_by_organization(&demo_transactions(), &Organizations::new(orgs));

        assert_eq!(totals.incoming[3], 0.0);
        assert_eq!(totals.outgoing[3], 0.0);
    }

    #[test]
    fn test_string_refs_and_unknown_refs() {
        let orgs = Organizations::new(vec![
            Organization::new("org-a", "Test", "A"),
            Organization::new("org-b", "Test", "B"),
        ]);
        let txs = vec![
            tx("1", "org-b", date(2024, 1, 1), 100.0),
            tx("2", "org-b", date(2024, 1, 2), -40.0),
            tx("3", "org-zzz", date(2024, 1, 3), 999.0),
            tx("4", 7usize, date(2024, 1, 4), -1.0),
        ];
        let totals = totals_by_organization(&txs, &orgs);

        assert_eq!(totals.incoming, vec![0.0, 100.0]);
        assert_eq!(totals.outgoing, vec![0.0, -40.0]);
        assert_eq!(totals.net(), vec![0.0, 60.0]);
    }
}
