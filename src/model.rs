//! The single persisted entity and the inputs that create, change and filter it.

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DEFAULT_STATUS: &str = "active";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Resource {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert input. `name` is already validated non-empty.
#[derive(Clone, Debug, Default)]
pub struct NewResource {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

/// Partial update. `None` keeps the stored value; there is no way to clear a field.
#[derive(Clone, Debug, Default)]
pub struct ResourceChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

/// List predicates, ANDed. `name` is a case-sensitive substring match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceFilters {
    pub category: Option<String>,
    pub status: Option<String>,
    pub name: Option<String>,
}
