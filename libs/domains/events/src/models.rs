use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Event category
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Social,
    Volunteer,
    Education,
    Sports,
    Other,
}

impl Category {
    /// Icon class shown on event cards. One authoritative mapping; the
    /// presentation layer reads it instead of keeping its own copy.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Social => "fas fa-users",
            Category::Volunteer => "fas fa-hands-helping",
            Category::Education => "fas fa-graduation-cap",
            Category::Sports => "fas fa-running",
            Category::Other => "fas fa-calendar-alt",
        }
    }
}

/// Event entity as persisted in the `events` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier (fixed for seed events, uuid-v7 string otherwise)
    pub id: String,
    pub title: String,
    pub description: String,
    /// Calendar date of the event
    pub date: NaiveDate,
    /// Local time of day, `HH:MM`
    pub time: String,
    pub location: String,
    pub category: Category,
    /// Roster capacity, always >= 1
    pub max_attendees: u32,
    /// Id of the creating user
    pub created_by: String,
    /// Ordered roster of user ids, no duplicates, len <= max_attendees
    #[serde(default)]
    pub attendees: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// DTO for creating a new event
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub category: Category,
    pub max_attendees: u32,
    pub created_by: String,
    /// Caller-supplied id; generated when absent
    #[serde(default)]
    pub id: Option<String>,
    /// Explicit roster; defaults to the creator alone when absent
    #[serde(default)]
    pub attendees: Option<Vec<String>>,
}

/// DTO for a partial event update
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEvent {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub category: Option<Category>,
    pub max_attendees: Option<u32>,
    pub created_by: Option<String>,
}

impl Event {
    /// Build an event record from a create DTO.
    ///
    /// The creator auto-joins: an absent roster defaults to `[created_by]`.
    pub fn from_create(id: String, input: CreateEvent) -> Self {
        let attendees = input
            .attendees
            .unwrap_or_else(|| vec![input.created_by.clone()]);

        Self {
            id,
            title: input.title,
            description: input.description,
            date: input.date,
            time: input.time,
            location: input.location,
            category: input.category,
            max_attendees: input.max_attendees,
            created_by: input.created_by,
            attendees,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Shallow merge of an update, last write wins per field
    pub fn apply_update(&mut self, update: UpdateEvent) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(time) = update.time {
            self.time = time;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(max_attendees) = update.max_attendees {
            self.max_attendees = max_attendees;
        }
        if let Some(created_by) = update.created_by {
            self.created_by = created_by;
        }
        self.touch();
    }

    /// Stamp the record as modified
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }

    pub fn is_full(&self) -> bool {
        self.attendees.len() >= self.max_attendees as usize
    }

    pub fn has_attendee(&self, user_id: &str) -> bool {
        self.attendees.iter().any(|id| id == user_id)
    }

    /// Event rule set, applied to creates and to merged updates.
    ///
    /// Returns the failing fields by their serialized names, in declaration
    /// order, so a single deterministic `Validation` error can list them all.
    /// Date and category validity is carried by the types themselves.
    pub fn validation_failures(&self) -> Vec<String> {
        let mut fields = Vec::new();

        if self.title.trim().is_empty() {
            fields.push("title".to_string());
        }
        if self.description.trim().is_empty() {
            fields.push("description".to_string());
        }
        if self.time.trim().is_empty() {
            fields.push("time".to_string());
        }
        if self.location.trim().is_empty() {
            fields.push("location".to_string());
        }
        if self.created_by.trim().is_empty() {
            fields.push("createdBy".to_string());
        }
        if self.max_attendees == 0 {
            fields.push("maxAttendees".to_string());
        }

        fields
    }
}

/// Comment attached to an event. Append-only: no update or delete exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    /// Id of the event the comment belongs to
    pub event_id: String,
    /// Id of the commenting user
    pub author_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// DTO for appending a comment to an event
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComment {
    pub event_id: String,
    pub author_id: String,
    pub text: String,
    #[serde(default)]
    pub id: Option<String>,
}

impl Comment {
    pub fn from_create(id: String, input: CreateComment) -> Self {
        Self {
            id,
            event_id: input.event_id,
            author_id: input.author_id,
            text: input.text,
            created_at: Utc::now(),
        }
    }
}
