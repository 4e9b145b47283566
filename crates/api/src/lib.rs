//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes for entries and reports
//! - Authentication middleware
//! - Error responses

pub mod error;
pub mod middleware;
pub mod routes;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use shopledger_core::calendar::BusinessCalendar;
use shopledger_core::ledger::LedgerService;
use shopledger_core::reports::ReportService;
use shopledger_db::EntryRepository;
use shopledger_shared::JwtService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// JWT service for token operations.
    pub jwt_service: Arc<JwtService>,
    /// Business-day calendar resolved at startup.
    pub calendar: BusinessCalendar,
}

impl AppState {
    fn entry_store(&self) -> Arc<EntryRepository> {
        Arc::new(EntryRepository::new(self.db.as_ref().clone()))
    }

    /// Ledger service backed by the database.
    #[must_use]
    pub fn ledger(&self) -> LedgerService<EntryRepository> {
        LedgerService::new(self.entry_store(), self.calendar.clone())
    }

    /// Report service backed by the database.
    #[must_use]
    pub fn reports(&self) -> ReportService<EntryRepository> {
        ReportService::new(self.entry_store(), self.calendar.clone())
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
