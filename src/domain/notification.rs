//! The notification event: an ephemeral message describing an entity's
//! creation, routed to interested consumers.

use super::Entity;

/// Routing key attached to every entity-created event.
pub const ROUTING_KEY: &str = "email";

/// Header attached to every event for consumer-side filtering.
pub const SAMPLE_HEADER: (&str, &str) = ("sample", "value");

/// An event published to the notification exchange when an entity is
/// created.
///
/// Constructed deterministically from the persisted entity and never
/// retained by the gateway; durability past publish is the broker's
/// concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    /// Fixed routing key identifying the notification class.
    pub routing_key: String,
    /// Small key-value map for consumer-side filtering and metadata.
    pub headers: Vec<(String, String)>,
    /// Opaque payload derived from the entity.
    pub body: Vec<u8>,
}

impl NotificationEvent {
    /// Builds the creation event for a persisted entity.
    ///
    /// The body is a human-readable greeting; consumers that need the
    /// structured record read it back from the store.
    #[must_use]
    pub fn entity_created(entity: &Entity) -> Self {
        Self {
            routing_key: ROUTING_KEY.to_string(),
            headers: vec![(SAMPLE_HEADER.0.to_string(), SAMPLE_HEADER.1.to_string())],
            body: format!("Hello {}", entity.name).into_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_is_deterministic_in_the_entity() {
        let entity = Entity {
            id: 7,
            name: "Alice".to_string(),
        };
        let a = NotificationEvent::entity_created(&entity);
        let b = NotificationEvent::entity_created(&entity);
        assert_eq!(a, b);
        assert_eq!(a.routing_key, "email");
        assert_eq!(a.body, b"Hello Alice");
    }

    #[test]
    fn event_carries_the_filter_header() {
        let entity = Entity {
            id: 1,
            name: "Bob".to_string(),
        };
        let event = NotificationEvent::entity_created(&entity);
        assert_eq!(
            event.headers,
            vec![("sample".to_string(), "value".to_string())]
        );
    }
}
