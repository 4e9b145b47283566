//! Ledger entry routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;
use tracing::info;

use crate::{AppState, error::ApiError, middleware::AuthUser};
use shopledger_core::ledger::{CreateEntryInput, EntryView, PatchEntryInput, TodayListing};
use shopledger_shared::types::EntryId;

/// Creates the entry routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/entries", get(list_today).post(create_entry))
        .route(
            "/entries/{id}",
            get(get_entry).patch(patch_entry).delete(delete_entry),
        )
}

/// Response for a created entry.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    /// Id of the new entry.
    pub id: EntryId,
}

/// GET /entries
///
/// Today's entries visible to the caller, with totals.
async fn list_today(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<TodayListing>, ApiError> {
    let listing = state.ledger().list_today(&auth.caller()).await?;
    Ok(Json(listing))
}

/// GET /entries/{id}
async fn get_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<EntryId>,
) -> Result<Json<EntryView>, ApiError> {
    let view = state.ledger().get_entry(&auth.caller(), id).await?;
    Ok(Json(view))
}

/// POST /entries
async fn create_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateEntryInput>,
) -> Result<impl IntoResponse, ApiError> {
    let caller = auth.caller();
    let id = state.ledger().create_entry(&caller, input).await?;

    info!(entry_id = id, user_id = %caller.user_id, "Entry created");
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// PATCH /entries/{id}
async fn patch_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<EntryId>,
    Json(input): Json<PatchEntryInput>,
) -> Result<StatusCode, ApiError> {
    let caller = auth.caller();
    state.ledger().patch_entry(&caller, id, input).await?;

    info!(entry_id = id, user_id = %caller.user_id, admin = caller.is_admin, "Entry patched");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /entries/{id}
async fn delete_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<EntryId>,
) -> Result<StatusCode, ApiError> {
    let caller = auth.caller();
    state.ledger().delete_entry(&caller, id).await?;

    info!(entry_id = id, user_id = %caller.user_id, admin = caller.is_admin, "Entry deleted");
    Ok(StatusCode::NO_CONTENT)
}
