//! Report routes. Administrators only.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::{AppState, error::ApiError, middleware::AdminUser};
use shopledger_core::reports::{ByUserReport, DailyReport, RangeReport, SummaryReport};
use shopledger_shared::types::UserId;

/// Creates the report routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/daily", get(daily))
        .route("/reports/range", get(range))
        .route("/reports/summary", get(summary))
        .route("/reports/by-user", get(by_user))
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters for the daily report.
#[derive(Debug, Deserialize)]
pub struct DailyQuery {
    /// Local business date.
    pub date: NaiveDate,
    /// Restrict to one creator.
    pub user_id: Option<Uuid>,
}

/// Query parameters for range and summary reports.
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    /// First date, inclusive.
    pub from: NaiveDate,
    /// Last date, inclusive.
    pub to: NaiveDate,
    /// Restrict to one creator.
    pub user_id: Option<Uuid>,
}

/// Query parameters for the per-user report.
#[derive(Debug, Deserialize)]
pub struct ByUserQuery {
    /// First date, inclusive.
    pub from: NaiveDate,
    /// Last date, inclusive.
    pub to: NaiveDate,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /reports/daily
async fn daily(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<DailyQuery>,
) -> Result<Json<DailyReport>, ApiError> {
    let report = state
        .reports()
        .daily(query.date, query.user_id.map(UserId::from_uuid))
        .await?;
    Ok(Json(report))
}

/// GET /reports/range
async fn range(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<RangeQuery>,
) -> Result<Json<RangeReport>, ApiError> {
    let report = state
        .reports()
        .range(query.from, query.to, query.user_id.map(UserId::from_uuid))
        .await?;
    Ok(Json(report))
}

/// GET /reports/summary
async fn summary(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<RangeQuery>,
) -> Result<Json<SummaryReport>, ApiError> {
    let report = state
        .reports()
        .summary(query.from, query.to, query.user_id.map(UserId::from_uuid))
        .await?;
    Ok(Json(report))
}

/// GET /reports/by-user
async fn by_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<ByUserQuery>,
) -> Result<Json<ByUserReport>, ApiError> {
    let report = state.reports().by_user(query.from, query.to).await?;
    Ok(Json(report))
}
