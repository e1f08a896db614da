use crate::charts::format::{format_currency, format_date, format_timestamp};
use crate::models::{BalancePoint, Organizations};

/// Balance chart tooltip: `$2,500.00 on 04/10/2024`.
pub fn balance_label(point: &BalancePoint) -> String {
    format!("{} on {}", format_currency(point.balance), format_date(point.date))
}

/// Same label from the raw chart coordinates.
pub fn balance_label_at(timestamp: i64, balance: f64) -> String {
    let date = format_timestamp(timestamp).unwrap_or_default();
    format!("{} on {}", format_currency(balance), date)
}

/// By-organization tooltip: `R&D: $3,058.99`. Unknown indices render with an empty name.
pub fn organization_label(orgs: &Organizations, index: usize, amount: f64) -> String {
    let name = orgs.get(index).map(|o| o.name.as_str()).unwrap_or_default();
    format!("{}: {}", name, format_currency(amount))
}

/// The by-organization chart shows no tooltip title.
pub fn organization_title() -> String {
    String::new()
}

/// Y-axis tick for either chart.
pub fn amount_tick(value: f64) -> String {
    format_currency(value)
}

/// X-axis tick for the balance chart.
pub fn date_tick(timestamp: i64) -> String {
    format_timestamp(timestamp).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::fixtures::demo_orgs;
    use crate::services::aggregation_service::date_to_timestamp;
    use chrono::NaiveDate;

    #[test]
    fn test_balance_label() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 10).unwrap();
        let point = BalancePoint {
            date,
            timestamp: date_to_timestamp(date),
            balance: 2500.0,
        };
        assert_eq!(balance_label(&point), "$2,500.00 on 04/10/2024");
        assert_eq!(balance_label_at(point.timestamp, -10.99), "-$10.99 on 04/10/2024");
    }

    #[test]
    fn test_organization_label() {
        let orgs = Organizations::new(demo_orgs());
        assert_eq!(organization_label(&orgs, 2, -575.5), "Procurement: -$575.50");
        assert_eq!(organization_label(&orgs, 9, 1.0), ": $1.00");
        assert!(organization_title().is_empty());
    }

    #[test]
    fn test_ticks() {
        assert_eq!(amount_tick(-500.0), "-$500.00");
        assert_eq!(date_tick(0), "01/01/1970");
    }
}
