//! RabbitMQ implementation of the notification channel using lapin.

use async_trait::async_trait;
use lapin::options::{BasicPublishOptions, ExchangeDeclareOptions};
use lapin::types::{AMQPValue, FieldTable, LongString, ShortString};
use lapin::{BasicProperties, Channel, Connection, ConnectionProperties, ExchangeKind};
use tokio::sync::Mutex;

use super::NotificationChannel;
use crate::domain::NotificationEvent;
use crate::error::GatewayError;

/// Notification channel over a single long-lived lapin channel.
///
/// The exchange is declared durable and direct at construction time, so a
/// publish against an undeclared exchange cannot occur once the gateway is
/// serving. The channel is one logical resource shared by every request
/// worker; a `tokio::sync::Mutex` serializes publish calls on it rather
/// than opening one channel per worker.
pub struct AmqpNotificationChannel {
    channel: Mutex<Channel>,
    exchange: String,
    // Held so the underlying TCP connection outlives the channel.
    _connection: Connection,
}

impl std::fmt::Debug for AmqpNotificationChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmqpNotificationChannel")
            .field("exchange", &self.exchange)
            .finish_non_exhaustive()
    }
}

impl AmqpNotificationChannel {
    /// Connects to the broker and declares the notification exchange.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Channel`] if the connection, channel, or
    /// exchange declaration fails.
    pub async fn connect(url: &str, exchange: &str) -> Result<Self, GatewayError> {
        let connection = Connection::connect(url, ConnectionProperties::default())
            .await
            .map_err(|e| GatewayError::Channel(format!("failed to connect: {e}")))?;

        let channel = connection
            .create_channel()
            .await
            .map_err(|e| GatewayError::Channel(format!("failed to open channel: {e}")))?;

        channel
            .exchange_declare(
                exchange,
                ExchangeKind::Direct,
                ExchangeDeclareOptions {
                    durable: true,
                    ..Default::default()
                },
                FieldTable::default(),
            )
            .await
            .map_err(|e| GatewayError::Channel(format!("failed to declare exchange: {e}")))?;

        tracing::info!(%url, %exchange, "connected to AMQP broker");

        Ok(Self {
            channel: Mutex::new(channel),
            exchange: exchange.to_string(),
            _connection: connection,
        })
    }

    fn headers_table(event: &NotificationEvent) -> FieldTable {
        let mut table = FieldTable::default();
        for (key, value) in &event.headers {
            table.insert(
                ShortString::from(key.clone()),
                AMQPValue::LongString(LongString::from(value.clone())),
            );
        }
        table
    }
}

#[async_trait]
impl NotificationChannel for AmqpNotificationChannel {
    async fn publish(&self, event: &NotificationEvent) -> Result<(), GatewayError> {
        let properties = BasicProperties::default().with_headers(Self::headers_table(event));

        // mandatory and immediate both stay false: unroutable messages are
        // silently dropped by the broker.
        let channel = self.channel.lock().await;
        let confirm = channel
            .basic_publish(
                &self.exchange,
                &event.routing_key,
                BasicPublishOptions::default(),
                &event.body,
                properties,
            )
            .await
            .map_err(|e| GatewayError::Channel(format!("failed to publish: {e}")))?;
        drop(channel);

        confirm
            .await
            .map_err(|e| GatewayError::Channel(format!("publish not confirmed: {e}")))?;

        tracing::debug!(
            exchange = %self.exchange,
            routing_key = %event.routing_key,
            "published notification event"
        );
        Ok(())
    }
}
