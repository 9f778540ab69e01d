use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{EventError, EventResult};
use crate::models::Event;

/// Repository trait for Event persistence
///
/// Pure CRUD; the rule set and roster rules live in the service. Stored
/// order is insertion order, matching the persisted array form.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// All events, in stored order
    async fn get_all(&self) -> EventResult<Vec<Event>>;

    /// Get an event by ID
    async fn get_by_id(&self, id: &str) -> EventResult<Option<Event>>;

    /// Persist a new event
    async fn create(&self, event: Event) -> EventResult<Event>;

    /// Replace an existing event record by id
    async fn update(&self, event: Event) -> EventResult<Event>;

    /// Delete an event by ID; returns whether a record was removed
    async fn delete(&self, id: &str) -> EventResult<bool>;
}

/// In-memory implementation of EventRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryEventRepository {
    events: Arc<RwLock<Vec<Event>>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: Arc::new(RwLock::new(events)),
        }
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn get_all(&self) -> EventResult<Vec<Event>> {
        let events = self.events.read().await;
        Ok(events.clone())
    }

    async fn get_by_id(&self, id: &str) -> EventResult<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.iter().find(|e| e.id == id).cloned())
    }

    async fn create(&self, event: Event) -> EventResult<Event> {
        let mut events = self.events.write().await;
        events.push(event.clone());

        tracing::info!(event_id = %event.id, title = %event.title, "Created event");
        Ok(event)
    }

    async fn update(&self, event: Event) -> EventResult<Event> {
        let mut events = self.events.write().await;

        let index = events
            .iter()
            .position(|e| e.id == event.id)
            .ok_or_else(|| EventError::NotFound(event.id.clone()))?;

        events[index] = event.clone();

        tracing::info!(event_id = %event.id, "Updated event");
        Ok(event)
    }

    async fn delete(&self, id: &str) -> EventResult<bool> {
        let mut events = self.events.write().await;

        let before = events.len();
        events.retain(|e| e.id != id);

        let removed = events.len() < before;
        if removed {
            tracing::info!(event_id = %id, "Deleted event");
        }
        Ok(removed)
    }
}
