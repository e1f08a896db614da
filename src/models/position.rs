use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Whether a holding is still open. Closed holdings always carry their exit data.
#[derive(Debug, Clone, PartialEq)]
pub enum PositionStatus {
    Active,
    Closed { end_date: NaiveDate, net_change: f64 },
}

// Represents a stock holding in the investments view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PositionRecord", into = "PositionRecord")]
pub struct Position {
    pub id: String,
    pub ticker: String,
    pub shares: f64,
    pub start_date: NaiveDate,
    pub initial_price: f64,
    pub status: PositionStatus,
}

/// Wire shape: flat fields with `endDate`/`netChange` present only when closed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PositionRecord {
    #[serde(rename = "_id")]
    id: String,
    ticker: String,
    shares: f64,
    start_date: NaiveDate,
    initial_price: f64,
    active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    net_change: Option<f64>,
}

impl Position {
    pub fn open(
        id: impl Into<String>,
        ticker: impl Into<String>,
        shares: f64,
        start_date: NaiveDate,
        initial_price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            ticker: ticker.into(),
            shares,
            start_date,
            initial_price,
            status: PositionStatus::Active,
        }
    }

    /// Closes the position. The end date may not precede the start date.
    pub fn close(self, end_date: NaiveDate, net_change: f64) -> Result<Self, AppError> {
        if end_date < self.start_date {
            return Err(AppError::Validation(format!(
                "position {} ends on {} before it starts on {}",
                self.id, end_date, self.start_date
            )));
        }
        Ok(Self {
            status: PositionStatus::Closed { end_date, net_change },
            ..self
        })
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, PositionStatus::Active)
    }

    pub fn cost_basis(&self) -> f64 {
        self.shares * self.initial_price
    }
}

impl TryFrom<PositionRecord> for Position {
    type Error = AppError;

    fn try_from(r: PositionRecord) -> Result<Self, Self::Error> {
        let status = match (r.active, r.end_date, r.net_change) {
            (true, None, None) => PositionStatus::Active,
            (true, _, _) => {
                return Err(AppError::Validation(format!(
                    "active position {} must not carry endDate or netChange",
                    r.id
                )))
            }
            (false, Some(end_date), Some(net_change)) => PositionStatus::Closed { end_date, net_change },
            (false, _, _) => {
                return Err(AppError::Validation(format!(
                    "inactive position {} requires endDate and netChange",
                    r.id
                )))
            }
        };

        let position = Position {
            id: r.id,
            ticker: r.ticker,
            shares: r.shares,
            start_date: r.start_date,
            initial_price: r.initial_price,
            status: PositionStatus::Active,
        };

        match status {
            PositionStatus::Active => Ok(position),
            PositionStatus::Closed { end_date, net_change } => position.close(end_date, net_change),
        }
    }
}

impl From<Position> for PositionRecord {
    fn from(p: Position) -> Self {
        let (active, end_date, net_change) = match p.status {
            PositionStatus::Active => (true, None, None),
            PositionStatus::Closed { end_date, net_change } => (false, Some(end_date), Some(net_change)),
        };
        PositionRecord {
            id: p.id,
            ticker: p.ticker,
            shares: p.shares,
            start_date: p.start_date,
            initial_price: p.initial_price,
            active,
            end_date,
            net_change,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_active_position_omits_exit_fields() {
        let p = Position::open("p1", "AAPL", 10.0, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 185.5);
        let value = serde_json::to_value(&p).unwrap();

        assert_eq!(value["active"], true);
        assert!(value.get("endDate").is_none());
        assert!(value.get("netChange").is_none());
        assert!((p.cost_basis() - 1855.0).abs() < 1e-9);
    }

    #[test]
    fn test_inactive_position_requires_exit_fields() {
        let err = serde_json::from_value::<Position>(json!({
            "_id": "p2",
            "ticker": "MSFT",
            "shares": 5,
            "startDate": "2023-06-01",
            "initialPrice": 330.0,
            "active": false,
            "endDate": "2024-02-01"
        }));
        assert!(err.is_err());
    }

    #[test]
    fn test_active_position_rejects_exit_fields() {
        let err = serde_json::from_value::<Position>(json!({
            "_id": "p3",
            "ticker": "MSFT",
            "shares": 5,
            "startDate": "2023-06-01",
            "initialPrice": 330.0,
            "active": true,
            "netChange": 12.5
        }));
        assert!(err.is_err());
    }

    #[test]
    fn test_closed_position_parses() {
        let p: Position = serde_json::from_value(json!({
            "_id": "p4",
            "ticker": "NVDA",
            "shares": 2,
            "startDate": "2023-06-01",
            "initialPrice": 400.0,
            "active": false,
            "endDate": "2024-02-01",
            "netChange": 820.0
        }))
        .unwrap();

        assert!(!p.is_active());
        assert_eq!(
            p.status,
            PositionStatus::Closed {
                end_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                net_change: 820.0
            }
        );
    }

    #[test]
    fn test_close_before_start_is_rejected() {
        let p = Position::open("p5", "TSLA", 1.0, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(), 180.0);
        assert!(p.close(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(), -20.0).is_err());
    }
}
