//! Data Transfer Objects for REST request/response serialization.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /send`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SendRequest {
    /// Name of the entity to ingest. Must be non-empty.
    pub name: String,
}

/// Response body for a successful `POST /send`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SendResponse {
    /// Always `"success"` when both persist and publish completed.
    pub status: String,
}

/// One stored entity as returned by `GET /messages`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageDto {
    /// Store-assigned identifier.
    pub id: i64,
    /// Entity name.
    pub name: String,
}

impl From<crate::domain::Entity> for MessageDto {
    fn from(entity: crate::domain::Entity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}
