use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One point of the balance-over-time chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancePoint {
    pub date: NaiveDate,
    /// UTC midnight of `date`, epoch milliseconds.
    pub timestamp: i64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesMeta {
    pub points: usize,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub final_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSeries {
    pub series: Vec<BalancePoint>,
    pub meta: SeriesMeta,
}

/// Incoming and outgoing sums indexed by organization position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrgTotals {
    pub incoming: Vec<f64>,
    pub outgoing: Vec<f64>,
}

impl OrgTotals {
    pub fn zeroed(len: usize) -> Self {
        Self {
            incoming: vec![0.0; len],
            outgoing: vec![0.0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.incoming.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incoming.is_empty()
    }

    pub fn net(&self) -> Vec<f64> {
        self.incoming
            .iter()
            .zip(&self.outgoing)
            .map(|(i, o)| i + o)
            .collect()
    }
}
