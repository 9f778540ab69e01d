//! Events Domain
//!
//! Event CRUD with a validation rule set, roster management (join/leave with
//! capacity and membership rules), append-only comments, and a pure query
//! engine for filtering, searching, and sorting event snapshots.
//!
//! Layering follows the other domain crates:
//!
//! ```text
//! Service     ← rule set, roster rules, snapshot views
//! Query       ← pure filter/sort/search over &[Event]
//! Repository  ← data access (trait + in-memory / JSON-store impls)
//! Models      ← entities, DTOs, enums
//! ```

pub mod comments;
pub mod error;
pub mod json;
pub mod models;
pub mod query;
pub mod repository;
pub mod seed;
pub mod service;

pub use comments::{CommentRepository, InMemoryCommentRepository, JsonCommentRepository};
pub use error::{EventError, EventResult};
pub use json::JsonEventRepository;
pub use models::{Category, Comment, CreateComment, CreateEvent, Event, UpdateEvent};
pub use query::{DateBucket, EventQuery, SortKey};
pub use repository::{EventRepository, InMemoryEventRepository};
pub use service::EventService;
