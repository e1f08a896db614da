use serde::{Deserialize, Serialize};

use crate::models::{BalancePoint, OrgTotals, StockRange};
use crate::services::aggregation_service::date_to_timestamp;

/// An (x, y) pair as the charting library expects it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DatasetData {
    Points(Vec<ChartPoint>),
    Values(Vec<f64>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: DatasetData,
    pub background_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_line: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

fn line_dataset(points: Vec<ChartPoint>) -> Dataset {
    Dataset {
        label: "Balance vs. time".to_string(),
        data: DatasetData::Points(points),
        background_color: "blue".to_string(),
        show_line: Some(true),
    }
}

pub fn balance_vs_time(series: &[BalancePoint]) -> ChartData {
    let points = series
        .iter()
        .map(|p| ChartPoint {
            x: p.timestamp as f64,
            y: p.balance,
        })
        .collect();

    ChartData {
        labels: Vec::new(),
        datasets: vec![line_dataset(points)],
    }
}

/// Bar chart data; labels are organization indices, resolved to names by the tooltip.
pub fn by_organization(totals: &OrgTotals) -> ChartData {
    ChartData {
        labels: (0..totals.len()).map(|i| i.to_string()).collect(),
        datasets: vec![
            Dataset {
                label: "Incoming".to_string(),
                data: DatasetData::Values(totals.incoming.clone()),
                background_color: "green".to_string(),
                show_line: None,
            },
            Dataset {
                label: "Outgoing".to_string(),
                data: DatasetData::Values(totals.outgoing.clone()),
                background_color: "red".to_string(),
                show_line: None,
            },
        ],
    }
}

pub fn portfolio_over_time(range: &StockRange) -> ChartData {
    let points = range
        .points()
        .iter()
        .map(|p| ChartPoint {
            x: date_to_timestamp(p.date) as f64,
            y: p.price,
        })
        .collect();

    ChartData {
        labels: Vec::new(),
        datasets: vec![line_dataset(points)],
    }
}
