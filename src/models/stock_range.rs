use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

// Represents a historical price for a ticker on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockPoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// Price history, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<StockPoint>", into = "Vec<StockPoint>")]
pub struct StockRange(Vec<StockPoint>);

impl StockRange {
    pub fn new(points: Vec<StockPoint>) -> Result<Self, AppError> {
        if let Some(w) = points.windows(2).find(|w| w[1].date < w[0].date) {
            return Err(AppError::Validation(format!(
                "stock range out of order: {} follows {}",
                w[1].date, w[0].date
            )));
        }
        Ok(Self(points))
    }

    pub fn points(&self) -> &[StockPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&StockPoint> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&StockPoint> {
        self.0.last()
    }
}

impl TryFrom<Vec<StockPoint>> for StockRange {
    type Error = AppError;

    fn try_from(value: Vec<StockPoint>) -> Result<Self, Self::Error> {
        StockRange::new(value)
    }
}

impl From<StockRange> for Vec<StockPoint> {
    fn from(value: StockRange) -> Self {
        value.0
    }
}
