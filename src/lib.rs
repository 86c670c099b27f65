//! # notify-gateway
//!
//! HTTP ingestion gateway sitting between synchronous clients and two
//! independently-failing backends: a PostgreSQL store (system of record)
//! and a RabbitMQ exchange (notification fan-out).
//!
//! A `POST /send` request is persisted first, then published; the two
//! steps share no transaction. The gateway promises persist-before-publish
//! ordering and nothing in the reverse direction: a publish failure leaves
//! an orphaned write behind (stored, retrievable, never notified) and the
//! caller still sees a failure. See [`service::IngestService`] for the
//! full contract.
//!
//! ## Architecture
//!
//! ```text
//! HTTP clients
//!     │
//!     ├── REST handlers (api/)
//!     │
//!     ├── IngestService (service/)
//!     │       ├── EntityStore ── PostgreSQL (persistence/)
//!     │       └── NotificationChannel ── RabbitMQ (channel/)
//!     │
//!     └── domain types (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod channel;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;

#[cfg(test)]
pub(crate) mod testing;
