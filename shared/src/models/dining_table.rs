//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Occupancy status of a dining table
///
/// Closed two-value domain; anything else is rejected at deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum TableStatus {
    #[default]
    Vacant,
    Occupied,
}

impl TableStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableStatus::Vacant => "vacant",
            TableStatus::Occupied => "occupied",
        }
    }
}

/// Dining table entity, owned by exactly one restaurant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DiningTable {
    pub id: i64,
    pub restaurant_id: i64,
    /// Unique within the owning restaurant (e.g. F0T1, F1T5)
    pub table_code: String,
    /// e.g. F0, Floor 1
    pub floor_name: Option<String>,
    pub status: TableStatus,
    pub max_seats: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub table_code: String,
    #[serde(default)]
    pub floor_name: Option<String>,
    #[serde(default)]
    pub status: Option<TableStatus>,
    #[serde(default)]
    pub max_seats: Option<i64>,
}

/// Update dining table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiningTableUpdate {
    pub table_code: Option<String>,
    pub floor_name: Option<String>,
    pub max_seats: Option<i64>,
}

/// Status transition payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStatusUpdate {
    pub status: TableStatus,
}
