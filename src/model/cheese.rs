//! Cheese entity

use serde::{Deserialize, Serialize};

/// Persisted cheese row. `wine_id` is null once the paired wine is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Cheese {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub country: String,
    pub milk_type: String,
    pub wine_id: Option<i64>,
}

/// Cheese fields as proposed by a caller
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheeseFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub milk_type: Option<String>,
    #[serde(default)]
    pub wine_id: Option<i64>,
}

/// Validated cheese ready for insert or full replace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCheese {
    pub name: String,
    pub description: Option<String>,
    pub country: String,
    pub milk_type: String,
    pub wine_id: i64,
}
