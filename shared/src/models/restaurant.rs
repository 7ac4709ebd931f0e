//! Restaurant Model

use serde::{Deserialize, Serialize};

/// Restaurant entity (one onboarded establishment)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    /// URL-safe identifier, globally unique
    pub slug: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    /// Service charge percentage (2 decimal places, e.g. 12.50)
    pub service_charge_pct: f64,
    pub gst_no: Option<String>,
    /// Ordered language codes, stored as a JSON array
    #[cfg_attr(feature = "db", sqlx(json(nullable)))]
    pub languages: Option<Vec<String>>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create restaurant payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub service_charge_pct: Option<f64>,
    #[serde(default)]
    pub gst_no: Option<String>,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
}

/// Update restaurant payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub service_charge_pct: Option<f64>,
    pub gst_no: Option<String>,
    pub languages: Option<Vec<String>>,
    pub is_active: Option<bool>,
}
