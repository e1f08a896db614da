use async_trait::async_trait;
use chrono::NaiveDate;

use crate::external::data_source::{ApiError, DataSource};
use crate::models::{Organization, Transaction};

/// Offline demo data for running the dashboard without a backend.
pub struct FixtureSource {
    transactions: Vec<Transaction>,
    orgs: Vec<Organization>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self {
            transactions: demo_transactions(),
            orgs: demo_orgs(),
        }
    }
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataSource for FixtureSource {
    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        Ok(self.transactions.clone())
    }

    async fn fetch_orgs(&self) -> Result<Vec<Organization>, ApiError> {
        Ok(self.orgs.clone())
    }

    fn name(&self) -> &'static str {
        "fixtures"
    }
}

pub fn demo_orgs() -> Vec<Organization> {
    ["R&D", "Sales", "Procurement"]
        .iter()
        .enumerate()
        .map(|(i, name)| Organization::new(i.to_string(), "Test", *name))
        .collect()
}

pub fn demo_transactions() -> Vec<Transaction> {
    let rows: [(&str, (i32, u32, u32), f64, usize); 8] = [
        ("User Subscription", (2024, 3, 12), 58.99, 0),
        ("Spotify Premium", (2023, 11, 29), -10.99, 1),
        ("AWS Billing", (2024, 4, 10), -500.0, 2),
        ("Salary Deposit", (2024, 1, 15), 3000.0, 0),
        ("Restaurant Dinner", (2024, 4, 18), -75.50, 2),
        ("Gas Station Purchase", (2024, 4, 20), -30.25, 0),
        ("Netflix Subscription", (2024, 5, 30), -15.99, 1),
        ("Freelance Work Payment", (2023, 12, 18), 600.0, 2),
    ];

    rows.iter()
        .enumerate()
        .filter_map(|(i, (name, (y, m, d), amount, org))| {
            let date = NaiveDate::from_ymd_opt(*y, *m, *d)?;
            Some(Transaction::new(format!("demo-{}", i + 1), *name, "Test", *org, date, *amount))
        })
        .collect()
}
