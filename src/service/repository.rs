//! CRUD against the `resources` table. Each call is one statement, or one write plus a read-back.

use crate::model::{NewResource, Resource, ResourceChanges, ResourceFilters, DEFAULT_STATUS};
use crate::sql;
use crate::store::Store;
use chrono::Utc;

#[derive(Clone, Debug)]
pub struct ResourceRepository {
    store: Store,
}

impl ResourceRepository {
    pub fn new(store: Store) -> Self {
        ResourceRepository { store }
    }

    /// Insert with defaults (`status` = "active") and return the stored row.
    pub async fn create(&self, new: &NewResource) -> Result<Resource, sqlx::Error> {
        let now = Utc::now();
        let result = sqlx::query(&sql::insert())
            .bind(&new.name)
            .bind(new.description.as_deref())
            .bind(new.category.as_deref())
            .bind(new.status.as_deref().unwrap_or(DEFAULT_STATUS))
            .bind(now)
            .bind(now)
            .execute(self.store.pool())
            .await?;
        let id = result.last_insert_rowid();
        tracing::debug!(id, "resource inserted");
        self.find_by_id(id).await?.ok_or(sqlx::Error::RowNotFound)
    }

    /// Rows matching every filter, newest first.
    pub async fn find_all(&self, filters: &ResourceFilters) -> Result<Vec<Resource>, sqlx::Error> {
        let q = sql::select_list(filters);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, Resource>(&q.sql);
        for p in &q.params {
            query = query.bind(p);
        }
        query.fetch_all(self.store.pool()).await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Resource>, sqlx::Error> {
        sqlx::query_as::<_, Resource>(&sql::select_by_id())
            .bind(id)
            .fetch_optional(self.store.pool())
            .await
    }

    /// Coalescing update: unset fields keep their stored value, `updated_at` is always refreshed.
    /// `None` when no row has `id`.
    pub async fn update(
        &self,
        id: i64,
        changes: &ResourceChanges,
    ) -> Result<Option<Resource>, sqlx::Error> {
        let result = sqlx::query(&sql::update())
            .bind(changes.name.as_deref())
            .bind(changes.description.as_deref())
            .bind(changes.category.as_deref())
            .bind(changes.status.as_deref())
            .bind(Utc::now())
            .bind(id)
            .execute(self.store.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }

    /// True when a row was removed.
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(&sql::delete())
            .bind(id)
            .execute(self.store.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", sql::TABLE))
            .fetch_one(self.store.pool())
            .await?;
        Ok(n)
    }
}
