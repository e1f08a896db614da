use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Organization, Transaction};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid header: {0}")]
    InvalidHeader(String),
}

/// Where dashboard data comes from: the remote API or the bundled demo fixtures.
///
/// Both fetches treat an unsuccessful or malformed envelope as an empty result.
/// Only transport and body-parse failures surface as `Err`.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, ApiError>;

    async fn fetch_orgs(&self) -> Result<Vec<Organization>, ApiError>;

    fn name(&self) -> &'static str;
}
