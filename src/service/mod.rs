//! Service layer: the ingestion coordinator.
//!
//! [`IngestService`] orchestrates the two-step "persist, then notify"
//! write across the entity store and the notification channel.

pub mod ingest;

pub use ingest::IngestService;
