use anyhow::Context;
use serde_json::json;
use tracing::{info, warn};

use finboard::charts::{datasets, tooltips};
use finboard::config::AppConfig;
use finboard::logging::{init_logging, LoggingConfig};
use finboard::routes::Navigation;
use finboard::services::aggregation_service;
use finboard::state::AppState;

const DASHBOARD_ROUTE: &str = "/dashboard";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    init_logging(LoggingConfig::from_env()).map_err(|e| anyhow::anyhow!("failed to init logging: {}", e))?;

    let config = AppConfig::from_env().context("invalid configuration")?;
    let (state, writer) = AppState::from_config(&config);

    if let Some(token) = &config.api_token {
        writer.sign_in(token.clone(), None);
    }

    match state.guard.check(&state.auth, DASHBOARD_ROUTE) {
        Navigation::Redirect(to) => {
            warn!("Not signed in; the dashboard would redirect to {}", to);
            println!("{}", json!({ "redirect": to }));
            return Ok(());
        }
        Navigation::Proceed(route) => info!("🚀 Rendering {}", route),
    }

    state.data.refresh_all().await.context("failed to load dashboard data")?;

    let transactions = state.data.get_transactions();
    let orgs = state.data.get_orgs();

    let balance = aggregation_service::balance_series(&transactions);
    let totals = aggregation_service::totals_by_organization(&transactions, &orgs);

    for point in &balance.series {
        info!("{}", tooltips::balance_label(point));
    }
    for i in 0..totals.len() {
        info!(
            "{} | {}",
            tooltips::organization_label(&orgs, i, totals.incoming[i]),
            tooltips::amount_tick(totals.outgoing[i])
        );
    }

    let snapshot = json!({
        "meta": balance.meta,
        "balanceVsTime": datasets::balance_vs_time(&balance.series),
        "byOrganization": datasets::by_organization(&totals),
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
