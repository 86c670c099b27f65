//! PostgreSQL implementation of the entity store.

use async_trait::async_trait;
use sqlx::PgPool;

use super::EntityStore;
use crate::domain::Entity;
use crate::error::GatewayError;

/// PostgreSQL-backed entity store using `sqlx::PgPool`.
///
/// The pool is created once at startup and shared across all request
/// workers; `sqlx` handles checkout and serialization internally.
#[derive(Debug, Clone)]
pub struct PostgresEntityStore {
    pool: PgPool,
}

impl PostgresEntityStore {
    /// Creates a new store over the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore for PostgresEntityStore {
    async fn insert(&self, name: &str) -> Result<i64, GatewayError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO messages (name) VALUES ($1) RETURNING id",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<Entity>, GatewayError> {
        // No ORDER BY: the contract only promises a finite sequence in
        // storage-engine default order.
        let rows = sqlx::query_as::<_, (i64, String)>("SELECT id, name FROM messages")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| GatewayError::Persistence(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| Entity { id, name })
            .collect())
    }
}
