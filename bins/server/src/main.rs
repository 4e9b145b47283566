//! ShopLedger API Server
//!
//! Main entry point for the ShopLedger backend service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shopledger_api::{AppState, create_router};
use shopledger_core::calendar::BusinessCalendar;
use shopledger_db::connect_with;
use shopledger_shared::{AppConfig, JwtConfig, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shopledger=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // An unknown timezone is fatal: every business-day window depends on it.
    let calendar = BusinessCalendar::from_name(&config.ledger.timezone)
        .context("Invalid ledger.timezone")?;
    info!(timezone = %calendar.timezone(), today = %calendar.today(), "Business calendar ready");

    let db = connect_with(&config.database).await?;
    info!("Connected to database");

    let jwt_config = JwtConfig {
        secret: config.jwt.secret.clone(),
        #[allow(clippy::cast_possible_wrap)]
        access_token_expires_minutes: (config.jwt.access_token_expiry_secs / 60) as i64,
    };
    let jwt_service = JwtService::new(jwt_config);

    let state = AppState {
        db: Arc::new(db),
        jwt_service: Arc::new(jwt_service),
        calendar,
    };

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
