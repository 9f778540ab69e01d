use chrono::Local;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{EventError, EventResult};
use crate::models::{CreateEvent, Event, UpdateEvent};
use crate::query::{self, EventQuery};
use crate::repository::EventRepository;

/// Service layer for Event business logic: the rule set, roster mutation,
/// and the snapshot-based views
#[derive(Clone)]
pub struct EventService<R: EventRepository> {
    repository: Arc<R>,
}

impl<R: EventRepository> EventService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new event. The creator auto-joins when no roster is given.
    /// Nothing is persisted unless the record passes the rule set.
    pub async fn create_event(&self, input: CreateEvent) -> EventResult<Event> {
        let id = input
            .id
            .clone()
            .unwrap_or_else(|| Uuid::now_v7().to_string());

        let event = Event::from_create(id, input);
        validate(&event)?;

        self.repository.create(event).await
    }

    /// Get an event by ID
    pub async fn get_event(&self, id: &str) -> EventResult<Event> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| EventError::NotFound(id.to_string()))
    }

    /// All events, in stored order
    pub async fn list_events(&self) -> EventResult<Vec<Event>> {
        self.repository.get_all().await
    }

    /// Partial update; the merged record is validated before persisting
    pub async fn update_event(&self, input: UpdateEvent) -> EventResult<Event> {
        let mut event = self.get_event(&input.id).await?;

        event.apply_update(input);
        validate(&event)?;

        self.repository.update(event).await
    }

    /// Delete an event. Deleting an absent id is a no-op, not an error.
    pub async fn delete_event(&self, id: &str) -> EventResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }

    /// Add a user to an event's roster.
    ///
    /// Capacity is checked before membership, so joining a full event fails
    /// with `EventFull` even for someone already on the roster.
    pub async fn join(&self, event_id: &str, user_id: &str) -> EventResult<Event> {
        let mut event = self.get_event(event_id).await?;

        if event.is_full() {
            return Err(EventError::EventFull(event_id.to_string()));
        }
        if event.has_attendee(user_id) {
            return Err(EventError::AlreadyJoined {
                event_id: event_id.to_string(),
                user_id: user_id.to_string(),
            });
        }

        event.attendees.push(user_id.to_string());
        event.touch();

        let updated = self.repository.update(event).await?;
        tracing::info!(event_id = %event_id, user_id = %user_id, "User joined event");
        Ok(updated)
    }

    /// Remove a user from an event's roster
    pub async fn leave(&self, event_id: &str, user_id: &str) -> EventResult<Event> {
        let mut event = self.get_event(event_id).await?;

        if !event.has_attendee(user_id) {
            return Err(EventError::NotAttending {
                event_id: event_id.to_string(),
                user_id: user_id.to_string(),
            });
        }

        event.attendees.retain(|id| id != user_id);
        event.touch();

        let updated = self.repository.update(event).await?;
        tracing::info!(event_id = %event_id, user_id = %user_id, "User left event");
        Ok(updated)
    }

    /// Apply a combined filter/sort query to the current snapshot
    pub async fn filter_events(&self, query: &EventQuery) -> EventResult<Vec<Event>> {
        let events = self.repository.get_all().await?;
        Ok(query::compose(&events, query, Local::now().date_naive()))
    }

    /// Upcoming events, soonest first, optionally truncated
    pub async fn upcoming_events(&self, limit: Option<usize>) -> EventResult<Vec<Event>> {
        let events = self.repository.get_all().await?;
        Ok(query::upcoming(&events, Local::now().date_naive(), limit))
    }

    /// Past events, most recent first
    pub async fn past_events(&self) -> EventResult<Vec<Event>> {
        let events = self.repository.get_all().await?;
        Ok(query::past(&events, Local::now().date_naive()))
    }

    /// Events created by one user
    pub async fn created_by_user(&self, user_id: &str) -> EventResult<Vec<Event>> {
        let events = self.repository.get_all().await?;
        Ok(query::created_by(&events, user_id))
    }

    /// Events one user is attending
    pub async fn attending_by_user(&self, user_id: &str) -> EventResult<Vec<Event>> {
        let events = self.repository.get_all().await?;
        Ok(query::attending(&events, user_id))
    }
}

fn validate(event: &Event) -> EventResult<()> {
    let fields = event.validation_failures();
    if fields.is_empty() {
        Ok(())
    } else {
        Err(EventError::Validation { fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::repository::MockEventRepository;
    use chrono::NaiveDate;

    fn create_input() -> CreateEvent {
        CreateEvent {
            title: "Park Cleanup".to_string(),
            description: "Bring gloves".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            time: "09:00".to_string(),
            location: "Central Park".to_string(),
            category: Category::Volunteer,
            max_attendees: 2,
            created_by: "admin".to_string(),
            id: None,
            attendees: None,
        }
    }

    fn stored_event(attendees: &[&str]) -> Event {
        let mut input = create_input();
        input.id = Some("e1".to_string());
        input.attendees = Some(attendees.iter().map(|a| a.to_string()).collect());
        Event::from_create("e1".to_string(), input)
    }

    #[tokio::test]
    async fn test_create_event_defaults_roster_to_creator() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo.expect_create().returning(|event| Ok(event));

        let service = EventService::new(mock_repo);
        let event = service.create_event(create_input()).await.unwrap();

        assert_eq!(event.attendees, vec!["admin"]);
        assert!(!event.id.is_empty());
    }

    #[tokio::test]
    async fn test_create_event_zero_capacity_fails_without_persisting() {
        // No create expectation: persisting would panic the mock
        let mock_repo = MockEventRepository::new();
        let service = EventService::new(mock_repo);

        let mut input = create_input();
        input.max_attendees = 0;

        let result = service.create_event(input).await;
        match result {
            Err(EventError::Validation { fields }) => {
                assert_eq!(fields, vec!["maxAttendees"]);
            }
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_event_reports_all_failing_fields() {
        let mock_repo = MockEventRepository::new();
        let service = EventService::new(mock_repo);

        let mut input = create_input();
        input.title = String::new();
        input.location = "   ".to_string();
        input.max_attendees = 0;

        let result = service.create_event(input).await;
        match result {
            Err(EventError::Validation { fields }) => {
                assert_eq!(fields, vec!["title", "location", "maxAttendees"]);
            }
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_join_full_event_fails_without_mutating() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(Some(stored_event(&["admin", "user1"]))));
        // No update expectation: a write would panic the mock

        let service = EventService::new(mock_repo);
        let result = service.join("e1", "user2").await;

        assert!(matches!(result, Err(EventError::EventFull(_))));
    }

    #[tokio::test]
    async fn test_join_twice_is_already_joined() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(Some(stored_event(&["admin"]))));

        let service = EventService::new(mock_repo);
        let result = service.join("e1", "admin").await;

        assert!(matches!(result, Err(EventError::AlreadyJoined { .. })));
    }

    #[tokio::test]
    async fn test_join_appends_and_persists() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(Some(stored_event(&["admin"]))));
        mock_repo.expect_update().returning(|event| Ok(event));

        let service = EventService::new(mock_repo);
        let updated = service.join("e1", "user1").await.unwrap();

        assert_eq!(updated.attendees, vec!["admin", "user1"]);
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_leave_when_not_attending() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(Some(stored_event(&["admin"]))));

        let service = EventService::new(mock_repo);
        let result = service.leave("e1", "user2").await;

        assert!(matches!(result, Err(EventError::NotAttending { .. })));
    }

    #[tokio::test]
    async fn test_join_unknown_event_is_not_found() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let service = EventService::new(mock_repo);
        let result = service.join("missing", "user1").await;

        assert!(matches!(result, Err(EventError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_validates_merged_record() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(Some(stored_event(&["admin"]))));

        let service = EventService::new(mock_repo);

        let result = service
            .update_event(UpdateEvent {
                id: "e1".to_string(),
                title: Some("  ".to_string()),
                ..Default::default()
            })
            .await;

        match result {
            Err(EventError::Validation { fields }) => assert_eq!(fields, vec!["title"]),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_event_is_idempotent() {
        let mut mock_repo = MockEventRepository::new();
        mock_repo.expect_delete().returning(|_| Ok(false));

        let service = EventService::new(mock_repo);
        assert!(service.delete_event("ghost").await.is_ok());
    }
}
