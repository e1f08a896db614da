use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};
use url::Url;

use crate::external::data_source::{ApiError, DataSource};
use crate::models::{Organization, Transaction};
use crate::store::AuthState;

pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    Get,
    Post,
    Delete,
}

impl ApiMethod {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            ApiMethod::Get => reqwest::Method::GET,
            ApiMethod::Post => reqwest::Method::POST,
            ApiMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Client for the dashboard REST API.
///
/// Every request carries the current bearer token from [`AuthState`].
pub struct ApiClient {
    client: reqwest::Client,
    base: String,
    auth: AuthState,
}

#[derive(Debug, Deserialize)]
struct TransactionsEnvelope {
    #[serde(default)]
    success: bool,
    transactions: Option<Vec<Transaction>>,
}

#[derive(Debug, Deserialize)]
struct OrgsEnvelope {
    #[serde(default)]
    success: bool,
    orgs: Option<Vec<Organization>>,
}

impl ApiClient {
    pub fn new(base: Url, auth: AuthState) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.as_str().trim_end_matches('/').to_string(),
            auth,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Sends one request and returns the decoded JSON body whatever the HTTP status.
    ///
    /// `headers` are applied first; `Content-Type` and `Authorization` always
    /// win over them. `payload` is sent as the body only when it is a JSON
    /// object or array.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        method: ApiMethod,
        endpoint: &str,
        payload: Option<&Value>,
        headers: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base, endpoint);

        let mut header_map = HeaderMap::new();
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::InvalidHeader(format!("{}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ApiError::InvalidHeader(format!("{}: {}", name, e)))?;
            header_map.insert(name, value);
        }
        header_map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        header_map.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&self.auth.bearer())
                .map_err(|e| ApiError::InvalidHeader(format!("{}: {}", AUTHORIZATION, e)))?,
        );

        let mut request = self
            .client
            .request(method.as_reqwest(), &url)
            .headers(header_map);

        if let Some(body) = payload.filter(|p| p.is_object() || p.is_array()) {
            request = request.body(body.to_string());
        }

        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait]
impl DataSource for ApiClient {
    async fn fetch_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        info!("GET /transactions - Fetching transactions");

        let body: Value = self.fetch(ApiMethod::Get, "/transactions", None, &[]).await?;

        match serde_json::from_value::<TransactionsEnvelope>(body) {
            Ok(TransactionsEnvelope { success: true, transactions: Some(list) }) => Ok(list),
            Ok(_) => {
                warn!("GET /transactions - Unsuccessful response, using empty list");
                Ok(Vec::new())
            }
            Err(e) => {
                warn!("GET /transactions - Unexpected response shape: {}", e);
                Ok(Vec::new())
            }
        }
    }

    async fn fetch_orgs(&self) -> Result<Vec<Organization>, ApiError> {
        info!("GET /orgs - Fetching organizations");

        let body: Value = self.fetch(ApiMethod::Get, "/orgs", None, &[]).await?;

        match serde_json::from_value::<OrgsEnvelope>(body) {
            Ok(OrgsEnvelope { success: true, orgs: Some(list) }) => Ok(list),
            Ok(_) => {
                warn!("GET /orgs - Unsuccessful response, using empty list");
                Ok(Vec::new())
            }
            Err(e) => {
                warn!("GET /orgs - Unexpected response shape: {}", e);
                Ok(Vec::new())
            }
        }
    }

    fn name(&self) -> &'static str {
        "api"
    }
}
