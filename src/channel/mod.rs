//! Notification channel: best-effort publish of creation events to the
//! message broker.
//!
//! [`NotificationChannel`] is the seam between the coordinator and the
//! broker. The concrete implementation publishes over a single lapin
//! channel to a durable direct exchange; tests substitute recording and
//! failing fakes.

pub mod amqp;

pub use amqp::AmqpNotificationChannel;

use async_trait::async_trait;

use crate::domain::NotificationEvent;
use crate::error::GatewayError;

/// A durable, topic-routed publish channel to the message broker.
///
/// The channel holds no entity state; it is a best-effort signal, not a
/// record. Implementations must be safe for concurrent `publish` calls
/// from multiple request workers.
#[async_trait]
pub trait NotificationChannel: Send + Sync + std::fmt::Debug {
    /// Publishes one event to the notification exchange.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Channel`] on channel/connection loss or
    /// broker-side rejection. Unroutable messages are dropped by the
    /// broker, not surfaced (`mandatory` is false).
    async fn publish(&self, event: &NotificationEvent) -> Result<(), GatewayError>;
}
