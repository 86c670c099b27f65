//! Domain types: the entity record and the notification event derived
//! from it.

pub mod entity;
pub mod notification;

pub use entity::Entity;
pub use notification::NotificationEvent;
