use std::sync::Arc;

use tracing::info;

use crate::errors::AppError;
use crate::external::data_source::DataSource;
use crate::models::{Organization, Organizations, Transaction};
use crate::store::DashboardStore;

/// Loads dashboard data from a [`DataSource`] into the [`DashboardStore`].
#[derive(Clone)]
pub struct DataService {
    source: Arc<dyn DataSource>,
    store: DashboardStore,
}

impl DataService {
    pub fn new(source: Arc<dyn DataSource>, store: DashboardStore) -> Self {
        Self { source, store }
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    pub async fn refresh_transactions(&self) -> Result<usize, AppError> {
        let transactions = self.source.fetch_transactions().await?;
        let count = transactions.len();
        self.store.replace_transactions(transactions);
        info!("Loaded {} transactions from {}", count, self.source.name());
        Ok(count)
    }

    pub async fn refresh_orgs(&self) -> Result<usize, AppError> {
        let orgs = self.source.fetch_orgs().await?;
        let count = orgs.len();
        self.store.replace_orgs(orgs);
        info!("Loaded {} organizations from {}", count, self.source.name());
        Ok(count)
    }

    /// Fetches transactions and organizations concurrently.
    ///
    /// Each side writes the store as soon as it resolves, so a failure on one
    /// side does not discard the other.
    pub async fn refresh_all(&self) -> Result<(), AppError> {
        let (txs, orgs) = tokio::join!(self.refresh_transactions(), self.refresh_orgs());
        txs?;
        orgs?;
        Ok(())
    }

    pub fn get_transactions(&self) -> Vec<Transaction> {
        self.store.transactions()
    }

    pub fn get_org_by_id(&self, index: usize) -> Option<Organization> {
        self.store.org_by_index(index)
    }

    pub fn get_orgs_length(&self) -> usize {
        self.store.orgs_len()
    }

    pub fn get_orgs(&self) -> Organizations {
        self.store.orgs()
    }
}
