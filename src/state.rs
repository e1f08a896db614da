use std::sync::Arc;

use tracing::info;

use crate::config::{AppConfig, DataSourceKind};
use crate::external::api_client::ApiClient;
use crate::external::data_source::DataSource;
use crate::external::fixtures::FixtureSource;
use crate::routes::RouteGuard;
use crate::services::data_service::DataService;
use crate::store::{AuthState, AuthWriter, DashboardStore};

/// Everything the dashboard pages read from. The matching [`AuthWriter`] is
/// returned separately so that only the login flow can change the session.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub data: DataService,
    pub guard: RouteGuard,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> (AppState, AuthWriter) {
        let (auth, writer) = AuthState::new();

        let source: Arc<dyn DataSource> = match config.data_source {
            DataSourceKind::Api => {
                info!("📊 Using data source: API at {}", config.api_base);
                Arc::new(ApiClient::new(config.api_base.clone(), auth.clone()))
            }
            DataSourceKind::Fixtures => {
                info!("📊 Using data source: offline fixtures");
                Arc::new(FixtureSource::new())
            }
        };

        let state = AppState {
            auth,
            data: DataService::new(source, DashboardStore::new()),
            guard: RouteGuard::new(config.login_route.clone()),
        };

        (state, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_wires_selected_source() {
        let config = AppConfig {
            data_source: DataSourceKind::Fixtures,
            login_route: "/signin".to_string(),
            ..AppConfig::default()
        };
        let (state, writer) = AppState::from_config(&config);

        assert_eq!(state.data.source_name(), "fixtures");
        assert_eq!(state.guard.login_route(), "/signin");

        writer.sign_in("tok", None);
        assert!(state.auth.has_token());
    }

    #[test]
    fn test_api_source_by_default() {
        let (state, _writer) = AppState::from_config(&AppConfig::default());
        assert_eq!(state.data.source_name(), "api");
    }
}
