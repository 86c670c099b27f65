//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::IngestService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// Both backend handles live inside the service and are constructed once
/// at startup; there are no process-wide singletons.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Ingestion coordinator for the two-step write and the query surface.
    pub ingest_service: Arc<IngestService>,
}
