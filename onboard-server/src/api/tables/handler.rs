//! Dining Table API Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::ServerState;
use crate::db::repository::dining_table;
use crate::utils::validation::{
    validate_max_seats, validate_optional_text, validate_required_text, MAX_FLOOR_NAME_LEN,
    MAX_TABLE_CODE_LEN,
};
use crate::utils::{AppError, AppResult};
use shared::models::{DiningTable, DiningTableUpdate, TableStatusUpdate};

fn validate_update(payload: &DiningTableUpdate) -> AppResult<()> {
    if let Some(code) = &payload.table_code {
        validate_required_text(code, "table_code", MAX_TABLE_CODE_LEN)?;
    }
    validate_optional_text(&payload.floor_name, "floor_name", MAX_FLOOR_NAME_LEN)?;
    validate_max_seats(payload.max_seats, "max_seats")?;
    Ok(())
}

/// GET /api/tables/:id - get a single table
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DiningTable>> {
    let table = dining_table::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Dining table {id} not found")))?;
    Ok(Json(table))
}

/// PUT /api/tables/:id - edit table code, floor or seats
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<DiningTableUpdate>,
) -> AppResult<Json<DiningTable>> {
    validate_update(&payload)?;
    let table = dining_table::update(&state.pool, id, payload).await?;
    Ok(Json(table))
}

/// PUT /api/tables/:id/status - toggle occupancy (vacant | occupied)
///
/// The status domain is closed at the type level; unknown values are
/// rejected during deserialization before this handler runs.
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<TableStatusUpdate>,
) -> AppResult<Json<DiningTable>> {
    let table = dining_table::set_status(&state.pool, id, payload.status).await?;
    Ok(Json(table))
}

/// DELETE /api/tables/:id - delete a single table
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = dining_table::delete(&state.pool, id).await?;
    Ok(Json(result))
}
