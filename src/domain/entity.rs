//! The entity record: the durable unit of data created by an ingestion
//! request.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored entity row from the `messages` table.
///
/// The store is the single source of truth for existence and content:
/// every entity visible through the query surface was committed before it
/// was reported. Identifiers are always store-assigned (auto-increment);
/// callers never supply one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Entity {
    /// Store-assigned row identifier.
    pub id: i64,
    /// Non-empty name supplied by the caller.
    pub name: String,
}
