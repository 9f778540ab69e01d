use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use hub_storage::{Collection, JsonStore};

use crate::error::EventResult;
use crate::models::{Comment, CreateComment};

/// Repository trait for event comments
///
/// Comments are append-only: there is no update or delete. `for_event`
/// returns comments in insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Append a comment; assigns id and timestamp when absent
    async fn add(&self, input: CreateComment) -> EventResult<Comment>;

    /// All comments attached to one event, oldest first
    async fn for_event(&self, event_id: &str) -> EventResult<Vec<Comment>>;
}

fn build_comment(input: CreateComment) -> Comment {
    let id = input
        .id
        .clone()
        .unwrap_or_else(|| Uuid::now_v7().to_string());
    Comment::from_create(id, input)
}

/// In-memory implementation of CommentRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCommentRepository {
    comments: Arc<RwLock<Vec<Comment>>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self {
            comments: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn add(&self, input: CreateComment) -> EventResult<Comment> {
        let comment = build_comment(input);

        let mut comments = self.comments.write().await;
        comments.push(comment.clone());

        tracing::info!(comment_id = %comment.id, event_id = %comment.event_id, "Added comment");
        Ok(comment)
    }

    async fn for_event(&self, event_id: &str) -> EventResult<Vec<Comment>> {
        let comments = self.comments.read().await;
        Ok(comments
            .iter()
            .filter(|c| c.event_id == event_id)
            .cloned()
            .collect())
    }
}

/// JSON-store implementation of CommentRepository
///
/// The whole `comments` collection lives in one file; per-event filtering
/// happens after load, which is fine at demo-sized volume.
#[derive(Debug, Clone)]
pub struct JsonCommentRepository {
    store: JsonStore,
}

impl JsonCommentRepository {
    /// Open the repository, materializing an empty collection on first run
    pub fn open(store: JsonStore) -> EventResult<Self> {
        store.load_or_seed::<Comment>(Collection::Comments, Vec::new)?;
        Ok(Self { store })
    }
}

#[async_trait]
impl CommentRepository for JsonCommentRepository {
    async fn add(&self, input: CreateComment) -> EventResult<Comment> {
        let comment = build_comment(input);

        let mut comments: Vec<Comment> = self.store.load(Collection::Comments)?;
        comments.push(comment.clone());
        self.store.save(Collection::Comments, &comments)?;

        tracing::info!(comment_id = %comment.id, event_id = %comment.event_id, "Added comment");
        Ok(comment)
    }

    async fn for_event(&self, event_id: &str) -> EventResult<Vec<Comment>> {
        let comments: Vec<Comment> = self.store.load(Collection::Comments)?;
        Ok(comments
            .into_iter()
            .filter(|c| c.event_id == event_id)
            .collect())
    }
}
