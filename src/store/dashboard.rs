use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::{Organization, Organizations, Transaction};

#[derive(Debug, Default)]
struct Snapshot {
    transactions: Vec<Transaction>,
    orgs: Organizations,
}

/// Most recently loaded transactions and organizations.
///
/// Each write replaces the whole list; whichever write lands last wins.
#[derive(Debug, Clone, Default)]
pub struct DashboardStore {
    inner: Arc<RwLock<Snapshot>>,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_transactions(&self, transactions: Vec<Transaction>) {
        self.inner.write().transactions = transactions;
    }

    pub fn replace_orgs(&self, orgs: Vec<Organization>) {
        self.inner.write().orgs = Organizations::new(orgs);
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.inner.read().transactions.clone()
    }

    pub fn orgs(&self) -> Organizations {
        self.inner.read().orgs.clone()
    }

    pub fn org_by_index(&self, index: usize) -> Option<Organization> {
        self.inner.read().orgs.get(index).cloned()
    }

    pub fn orgs_len(&self) -> usize {
        self.inner.read().orgs.len()
    }
}
