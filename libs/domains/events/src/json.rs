use async_trait::async_trait;
use chrono::Local;

use hub_storage::{Collection, JsonStore};

use crate::error::{EventError, EventResult};
use crate::models::Event;
use crate::repository::EventRepository;
use crate::seed;

/// JSON-store implementation of EventRepository
///
/// Every operation is a whole-collection read-modify-write against the
/// `events` collection. The store file is the source of truth; nothing is
/// cached between calls, and failed operations leave the file untouched.
#[derive(Debug, Clone)]
pub struct JsonEventRepository {
    store: JsonStore,
}

impl JsonEventRepository {
    /// Open the repository, seeding the collection on first run with the
    /// five demo events (dated relative to the current local date)
    pub fn open(store: JsonStore) -> EventResult<Self> {
        store.load_or_seed(Collection::Events, || {
            seed::default_events(Local::now().date_naive())
        })?;

        Ok(Self { store })
    }

    fn load_events(&self) -> EventResult<Vec<Event>> {
        Ok(self.store.load(Collection::Events)?)
    }

    fn save_events(&self, events: &[Event]) -> EventResult<()> {
        Ok(self.store.save(Collection::Events, events)?)
    }
}

#[async_trait]
impl EventRepository for JsonEventRepository {
    async fn get_all(&self) -> EventResult<Vec<Event>> {
        self.load_events()
    }

    async fn get_by_id(&self, id: &str) -> EventResult<Option<Event>> {
        let events = self.load_events()?;
        Ok(events.into_iter().find(|e| e.id == id))
    }

    async fn create(&self, event: Event) -> EventResult<Event> {
        let mut events = self.load_events()?;
        events.push(event.clone());
        self.save_events(&events)?;

        tracing::info!(event_id = %event.id, title = %event.title, "Created event");
        Ok(event)
    }

    async fn update(&self, event: Event) -> EventResult<Event> {
        let mut events = self.load_events()?;

        let index = events
            .iter()
            .position(|e| e.id == event.id)
            .ok_or_else(|| EventError::NotFound(event.id.clone()))?;

        events[index] = event.clone();
        self.save_events(&events)?;

        tracing::info!(event_id = %event.id, "Updated event");
        Ok(event)
    }

    async fn delete(&self, id: &str) -> EventResult<bool> {
        let mut events = self.load_events()?;

        let before = events.len();
        events.retain(|e| e.id != id);

        let removed = events.len() < before;
        if removed {
            self.save_events(&events)?;
            tracing::info!(event_id = %id, "Deleted event");
        }
        Ok(removed)
    }
}
