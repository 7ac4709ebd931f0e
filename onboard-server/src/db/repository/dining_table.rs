//! Dining Table Repository

use super::{restaurant, RepoError, RepoResult};
use shared::models::{DiningTable, DiningTableCreate, DiningTableUpdate, TableStatus};
use sqlx::SqlitePool;

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<DiningTable>> {
    let table = sqlx::query_as::<_, DiningTable>(
        "SELECT id, restaurant_id, table_code, floor_name, status, max_seats, created_at, updated_at FROM dining_table WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(table)
}

pub async fn find_by_code(
    pool: &SqlitePool,
    restaurant_id: i64,
    table_code: &str,
) -> RepoResult<Option<DiningTable>> {
    let table = sqlx::query_as::<_, DiningTable>(
        "SELECT id, restaurant_id, table_code, floor_name, status, max_seats, created_at, updated_at FROM dining_table WHERE restaurant_id = ? AND table_code = ? LIMIT 1",
    )
    .bind(restaurant_id)
    .bind(table_code.to_string())
    .fetch_optional(pool)
    .await?;
    Ok(table)
}

/// All tables of a restaurant, optionally filtered by status.
///
/// A missing restaurant is NotFound; a restaurant without tables is an
/// empty list.
pub async fn find_by_restaurant(
    pool: &SqlitePool,
    restaurant_id: i64,
    status: Option<TableStatus>,
) -> RepoResult<Vec<DiningTable>> {
    if !restaurant::exists(pool, restaurant_id).await? {
        return Err(RepoError::NotFound(format!(
            "Restaurant {restaurant_id} not found"
        )));
    }

    let tables = match status {
        Some(status) => {
            sqlx::query_as::<_, DiningTable>(
                "SELECT id, restaurant_id, table_code, floor_name, status, max_seats, created_at, updated_at FROM dining_table WHERE restaurant_id = ? AND status = ? ORDER BY table_code",
            )
            .bind(restaurant_id)
            .bind(status)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, DiningTable>(
                "SELECT id, restaurant_id, table_code, floor_name, status, max_seats, created_at, updated_at FROM dining_table WHERE restaurant_id = ? ORDER BY table_code",
            )
            .bind(restaurant_id)
            .fetch_all(pool)
            .await?
        }
    };
    Ok(tables)
}

pub async fn create(
    pool: &SqlitePool,
    restaurant_id: i64,
    data: DiningTableCreate,
) -> RepoResult<DiningTable> {
    // A table cannot exist without its owning restaurant
    if !restaurant::exists(pool, restaurant_id).await? {
        return Err(RepoError::NotFound(format!(
            "Restaurant {restaurant_id} not found"
        )));
    }

    // Duplicate pre-check within the restaurant; the (restaurant_id,
    // table_code) UNIQUE constraint backstops concurrent creates
    if find_by_code(pool, restaurant_id, &data.table_code)
        .await?
        .is_some()
    {
        return Err(RepoError::Duplicate(format!(
            "Table '{}' already exists in this restaurant",
            data.table_code
        )));
    }

    let now = shared::util::now_millis();
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO dining_table (restaurant_id, table_code, floor_name, status, max_seats, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6) RETURNING id",
    )
    .bind(restaurant_id)
    .bind(data.table_code)
    .bind(data.floor_name)
    .bind(data.status.unwrap_or_default())
    .bind(data.max_seats)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create dining table".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: DiningTableUpdate) -> RepoResult<DiningTable> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Dining table {id} not found")))?;

    // Check duplicate code within the owning restaurant when changing it
    if let Some(code) = &data.table_code
        && *code != existing.table_code
        && find_by_code(pool, existing.restaurant_id, code)
            .await?
            .is_some()
    {
        return Err(RepoError::Duplicate(format!(
            "Table '{code}' already exists in this restaurant"
        )));
    }

    let now = shared::util::now_millis();
    sqlx::query(
        "UPDATE dining_table SET \
            table_code = COALESCE(?1, table_code), \
            floor_name = COALESCE(?2, floor_name), \
            max_seats = COALESCE(?3, max_seats), \
            updated_at = ?4 \
         WHERE id = ?5",
    )
    .bind(data.table_code)
    .bind(data.floor_name)
    .bind(data.max_seats)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Dining table {id} not found")))
}

/// Set occupancy status. Idempotent: re-applying the current status is a
/// successful no-op apart from the `updated_at` bump.
pub async fn set_status(
    pool: &SqlitePool,
    id: i64,
    status: TableStatus,
) -> RepoResult<DiningTable> {
    let now = shared::util::now_millis();
    let rows = sqlx::query("UPDATE dining_table SET status = ?1, updated_at = ?2 WHERE id = ?3")
        .bind(status)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Dining table {id} not found")));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Dining table {id} not found")))
}

/// Hard delete a single dining table
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM dining_table WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Dining table {id} not found")));
    }
    Ok(true)
}
