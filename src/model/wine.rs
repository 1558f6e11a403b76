//! Wine entity

use serde::{Deserialize, Serialize};

/// Persisted wine row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Wine {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub country: String,
    pub colour: String,
}

/// Wine fields as proposed by a caller; any of them may be missing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WineFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub colour: Option<String>,
}

/// Validated wine ready for insert or full replace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWine {
    pub name: String,
    pub description: String,
    pub country: String,
    pub colour: String,
}
