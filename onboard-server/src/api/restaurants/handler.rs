//! Restaurant API Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::{dining_table, restaurant};
use crate::utils::validation::{
    normalize_service_charge, validate_languages, validate_max_seats, validate_optional_text,
    validate_required_text, validate_slug, MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_FLOOR_NAME_LEN,
    MAX_NAME_LEN, MAX_PHONE_LEN, MAX_SHORT_TEXT_LEN, MAX_TABLE_CODE_LEN,
};
use crate::utils::{AppError, AppResult};
use shared::models::{
    DiningTable, DiningTableCreate, Restaurant, RestaurantCreate, RestaurantUpdate, TableStatus,
};

fn validate_create(payload: &RestaurantCreate) -> AppResult<()> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_slug(&payload.slug, "slug")?;
    validate_optional_text(&payload.phone, "phone", MAX_PHONE_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&payload.gst_no, "gst_no", MAX_SHORT_TEXT_LEN)?;
    validate_languages(&payload.languages, "languages")?;
    Ok(())
}

fn validate_update(payload: &RestaurantUpdate) -> AppResult<()> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(slug) = &payload.slug {
        validate_slug(slug, "slug")?;
    }
    validate_optional_text(&payload.phone, "phone", MAX_PHONE_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&payload.gst_no, "gst_no", MAX_SHORT_TEXT_LEN)?;
    validate_languages(&payload.languages, "languages")?;
    Ok(())
}

fn validate_table_create(payload: &DiningTableCreate) -> AppResult<()> {
    validate_required_text(&payload.table_code, "table_code", MAX_TABLE_CODE_LEN)?;
    validate_optional_text(&payload.floor_name, "floor_name", MAX_FLOOR_NAME_LEN)?;
    validate_max_seats(payload.max_seats, "max_seats")?;
    Ok(())
}

/// GET /api/restaurants - list all restaurants
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Restaurant>>> {
    let restaurants = restaurant::find_all(&state.pool).await?;
    Ok(Json(restaurants))
}

/// GET /api/restaurants/:id - get a single restaurant
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Restaurant>> {
    let item = restaurant::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Restaurant {id} not found")))?;
    Ok(Json(item))
}

/// POST /api/restaurants - onboard a new restaurant
pub async fn create(
    State(state): State<ServerState>,
    Json(mut payload): Json<RestaurantCreate>,
) -> AppResult<Json<Restaurant>> {
    validate_create(&payload)?;
    if let Some(pct) = payload.service_charge_pct {
        payload.service_charge_pct = Some(normalize_service_charge(pct, "service_charge_pct")?);
    }

    let item = restaurant::create(&state.pool, payload).await?;
    tracing::info!(id = item.id, slug = %item.slug, "Restaurant onboarded");
    Ok(Json(item))
}

/// PUT /api/restaurants/:id - update a restaurant
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(mut payload): Json<RestaurantUpdate>,
) -> AppResult<Json<Restaurant>> {
    validate_update(&payload)?;
    if let Some(pct) = payload.service_charge_pct {
        payload.service_charge_pct = Some(normalize_service_charge(pct, "service_charge_pct")?);
    }

    let item = restaurant::update(&state.pool, id, payload).await?;
    Ok(Json(item))
}

/// DELETE /api/restaurants/:id - delete a restaurant and all its tables
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = restaurant::delete(&state.pool, id).await?;
    tracing::info!(id, "Restaurant deleted (tables cascaded)");
    Ok(Json(result))
}

#[derive(Debug, Deserialize)]
pub struct ListTablesQuery {
    pub status: Option<TableStatus>,
}

/// GET /api/restaurants/:id/tables - list the restaurant's tables,
/// optionally filtered by ?status=vacant|occupied
pub async fn list_tables(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<ListTablesQuery>,
) -> AppResult<Json<Vec<DiningTable>>> {
    let tables = dining_table::find_by_restaurant(&state.pool, id, query.status).await?;
    Ok(Json(tables))
}

/// POST /api/restaurants/:id/tables - create a table under the restaurant
pub async fn create_table(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<DiningTableCreate>,
) -> AppResult<Json<DiningTable>> {
    validate_table_create(&payload)?;
    let table = dining_table::create(&state.pool, id, payload).await?;
    Ok(Json(table))
}
