use std::str::FromStr;

use url::Url;

use crate::errors::AppError;
use crate::external::api_client::DEFAULT_API_BASE;
use crate::routes::guard::DEFAULT_LOGIN_ROUTE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSourceKind {
    Api,
    Fixtures,
}

impl FromStr for DataSourceKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "api" => Ok(DataSourceKind::Api),
            "fixtures" => Ok(DataSourceKind::Fixtures),
            other => Err(AppError::Config(format!(
                "invalid FINBOARD_DATA_SOURCE: {}. Must be 'api' or 'fixtures'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base: Url,
    pub data_source: DataSourceKind,
    pub login_route: String,
    /// Token to sign in with at startup, if any.
    pub api_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = Url::parse(
            &lookup("FINBOARD_API_URL").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        )?;

        let data_source = lookup("FINBOARD_DATA_SOURCE")
            .map(|s| s.parse::<DataSourceKind>())
            .transpose()?
            .unwrap_or(DataSourceKind::Api);

        let login_route = lookup("FINBOARD_LOGIN_ROUTE")
            .unwrap_or_else(|| DEFAULT_LOGIN_ROUTE.to_string());

        let api_token = lookup("FINBOARD_API_TOKEN").filter(|t| !t.is_empty());

        let config = Self {
            api_base,
            data_source,
            login_route,
            api_token,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !matches!(self.api_base.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "FINBOARD_API_URL must be http or https, got {}",
                self.api_base.scheme()
            )));
        }
        if !self.login_route.starts_with('/') {
            return Err(AppError::Config(format!(
                "FINBOARD_LOGIN_ROUTE must be an absolute path, got {}",
                self.login_route
            )));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            data_source: DataSourceKind::Api,
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
            api_token: None,
        }
    }
}
