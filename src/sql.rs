//! Parameterized SQL for the `resources` table. Identifiers are fixed, values are always bound.

use crate::model::ResourceFilters;

pub const TABLE: &str = "resources";

const COLUMNS: &str = "id, name, description, category, status, created_at, updated_at";

#[derive(Debug, PartialEq, Eq)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<String>,
}

impl QueryBuf {
    fn new(sql: String) -> Self {
        QueryBuf { sql, params: Vec::new() }
    }

    fn push_condition(&mut self, condition: &str, value: &str) {
        self.sql.push_str(" AND ");
        self.sql.push_str(condition);
        self.params.push(value.to_string());
    }
}

pub fn create_table() -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {TABLE} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT,
            category TEXT,
            status TEXT DEFAULT 'active',
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
        "#
    )
}

pub fn insert() -> String {
    format!(
        "INSERT INTO {TABLE} (name, description, category, status, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?)"
    )
}

pub fn select_by_id() -> String {
    format!("SELECT {COLUMNS} FROM {TABLE} WHERE id = ?")
}

/// Binds: name, description, category, status, updated_at, id.
pub fn update() -> String {
    format!(
        "UPDATE {TABLE} SET \
         name = COALESCE(?, name), \
         description = COALESCE(?, description), \
         category = COALESCE(?, category), \
         status = COALESCE(?, status), \
         updated_at = ? \
         WHERE id = ?"
    )
}

pub fn delete() -> String {
    format!("DELETE FROM {TABLE} WHERE id = ?")
}

/// SELECT with optional filters, newest first. `instr` keeps the name match case-sensitive
/// (SQLite's LIKE folds ASCII case).
pub fn select_list(filters: &ResourceFilters) -> QueryBuf {
    let mut q = QueryBuf::new(format!("SELECT {COLUMNS} FROM {TABLE} WHERE 1=1"));
    if let Some(category) = &filters.category {
        q.push_condition("category = ?", category);
    }
    if let Some(status) = &filters.status {
        q.push_condition("status = ?", status);
    }
    if let Some(name) = &filters.name {
        q.push_condition("instr(name, ?) > 0", name);
    }
    q.sql.push_str(" ORDER BY created_at DESC, id DESC");
    q
}
