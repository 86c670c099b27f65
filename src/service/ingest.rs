//! Ingestion coordinator: the consistency contract between store and
//! broker.
//!
//! A request moves through `RECEIVED -> VALIDATED -> PERSISTED ->
//! NOTIFIED -> ACKNOWLEDGED`, with early exits on validation, persistence,
//! or publish failure. Persistence always precedes notification; an event
//! is never published for an entity that was not durably stored. The
//! reverse holds no guarantee: a publish failure leaves the already
//! persisted entity in place (an orphaned write) and reports failure to
//! the caller. No step is retried and no idempotency is provided —
//! client-side retries create duplicate rows with distinct ids.

use std::sync::Arc;
use std::time::Duration;

use crate::channel::NotificationChannel;
use crate::domain::{Entity, NotificationEvent};
use crate::error::GatewayError;
use crate::persistence::EntityStore;

/// Coordinates the two-step write for a single ingestion request.
///
/// Stateless: owns handles to the store and the channel plus one deadline
/// per dependency. Deadline expiry maps to that dependency's failure
/// class.
#[derive(Debug, Clone)]
pub struct IngestService {
    store: Arc<dyn EntityStore>,
    channel: Arc<dyn NotificationChannel>,
    store_timeout: Duration,
    publish_timeout: Duration,
}

impl IngestService {
    /// Creates a new coordinator over the given dependencies.
    #[must_use]
    pub fn new(
        store: Arc<dyn EntityStore>,
        channel: Arc<dyn NotificationChannel>,
        store_timeout: Duration,
        publish_timeout: Duration,
    ) -> Self {
        Self {
            store,
            channel,
            store_timeout,
            publish_timeout,
        }
    }

    /// Persists a new entity, then publishes its creation event.
    ///
    /// Returns the persisted entity on full success.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::Validation`] for an empty name; nothing is
    ///   persisted or published.
    /// - [`GatewayError::Persistence`] if the insert fails or exceeds its
    ///   deadline; nothing is published.
    /// - [`GatewayError::Channel`] if the publish fails or exceeds its
    ///   deadline; the entity stays persisted (orphaned write).
    pub async fn ingest(&self, name: &str) -> Result<Entity, GatewayError> {
        if name.trim().is_empty() {
            return Err(GatewayError::Validation(
                "name must not be empty".to_string(),
            ));
        }

        let id = tokio::time::timeout(self.store_timeout, self.store.insert(name))
            .await
            .map_err(|_| GatewayError::Persistence("store call exceeded deadline".to_string()))??;

        let entity = Entity {
            id,
            name: name.to_string(),
        };
        tracing::info!(id = entity.id, "entity persisted");

        let event = NotificationEvent::entity_created(&entity);
        tokio::time::timeout(self.publish_timeout, self.channel.publish(&event))
            .await
            .map_err(|_| GatewayError::Channel("publish call exceeded deadline".to_string()))??;

        tracing::info!(id = entity.id, routing_key = %event.routing_key, "entity notified");
        Ok(entity)
    }

    /// Returns all stored entities.
    ///
    /// Pure read against the store; no coordination.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Persistence`] if the read fails or exceeds
    /// the store deadline.
    pub async fn list(&self) -> Result<Vec<Entity>, GatewayError> {
        tokio::time::timeout(self.store_timeout, self.store.list_all())
            .await
            .map_err(|_| GatewayError::Persistence("store call exceeded deadline".to_string()))?
    }
}
