use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    /// One or more fields failed the event rule set. Fields are reported in
    /// declaration order, using their serialized names.
    #[error("Invalid event data, failing fields: {}", fields.join(", "))]
    Validation { fields: Vec<String> },

    #[error("Event not found: {0}")]
    NotFound(String),

    #[error("Event is full: {0}")]
    EventFull(String),

    #[error("User '{user_id}' has already joined event '{event_id}'")]
    AlreadyJoined { event_id: String, user_id: String },

    #[error("User '{user_id}' is not attending event '{event_id}'")]
    NotAttending { event_id: String, user_id: String },

    #[error(transparent)]
    Storage(#[from] hub_storage::StorageError),
}

pub type EventResult<T> = Result<T, EventError>;
