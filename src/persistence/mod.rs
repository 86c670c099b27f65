//! Persistence layer: durable storage of entity records.
//!
//! [`EntityStore`] is the seam between the coordinator and the relational
//! store. The concrete implementation uses `sqlx::PgPool` for async
//! PostgreSQL access; tests substitute in-memory and failing fakes.

pub mod postgres;

pub use postgres::PostgresEntityStore;

use async_trait::async_trait;

use crate::domain::Entity;
use crate::error::GatewayError;

/// Durable storage of entity records.
///
/// Each `insert` is a single atomic unit against the store; no
/// transactions span multiple entities.
#[async_trait]
pub trait EntityStore: Send + Sync + std::fmt::Debug {
    /// Inserts a new entity and returns its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on connectivity loss,
    /// constraint violation, or timeout; constraint violations are not
    /// specially classified.
    async fn insert(&self, name: &str) -> Result<i64, GatewayError>;

    /// Returns all stored entities in storage-engine default order.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] on read failure.
    async fn list_all(&self) -> Result<Vec<Entity>, GatewayError>;
}
