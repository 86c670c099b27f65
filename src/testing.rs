//! In-memory fakes of the store and channel seams, shared by unit tests.

use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::channel::NotificationChannel;
use crate::domain::{Entity, NotificationEvent};
use crate::error::GatewayError;
use crate::persistence::EntityStore;

/// In-memory entity store with switchable failure and latency injection.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Entity>>,
    next_id: AtomicI64,
    failing: AtomicBool,
    delay_ms: AtomicU64,
    insert_attempts: AtomicU64,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            ..Self::default()
        }
    }

    /// When true, every call fails with a persistence error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Adds artificial latency to every call.
    pub fn set_delay(&self, delay: Duration) {
        self.delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    /// Number of times `insert` was called, successful or not.
    pub fn insert_attempts(&self) -> u64 {
        self.insert_attempts.load(Ordering::SeqCst)
    }

    async fn simulate(&self, what: &str) -> Result<(), GatewayError> {
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(GatewayError::Persistence(format!("{what}: store down")));
        }
        Ok(())
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn insert(&self, name: &str) -> Result<i64, GatewayError> {
        self.insert_attempts.fetch_add(1, Ordering::SeqCst);
        self.simulate("insert").await?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().await.push(Entity {
            id,
            name: name.to_string(),
        });
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<Entity>, GatewayError> {
        self.simulate("list_all").await?;
        Ok(self.rows.lock().await.clone())
    }
}

/// Recording notification channel with switchable failure and latency
/// injection.
#[derive(Debug, Default)]
pub struct MemoryChannel {
    events: Mutex<Vec<NotificationEvent>>,
    failing: AtomicBool,
    delay_ms: AtomicU64,
}

impl MemoryChannel {
    /// Creates an empty channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// When true, every publish fails with a channel error.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Adds artificial latency to every publish.
    pub fn set_delay(&self, delay: Duration) {
        self.delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    /// All events published so far.
    pub async fn published(&self) -> Vec<NotificationEvent> {
        self.events.lock().await.clone()
    }
}

#[async_trait]
impl NotificationChannel for MemoryChannel {
    async fn publish(&self, event: &NotificationEvent) -> Result<(), GatewayError> {
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(GatewayError::Channel("broker down".to_string()));
        }
        self.events.lock().await.push(event.clone());
        Ok(())
    }
}
