//! Storage Gateway
//!
//! Persists the application's collections (events, users, comments) as JSON
//! array files under a data directory, one file per collection. Collections
//! that have never been written can be seeded with fixture data on first
//! access via [`JsonStore::load_or_seed`].
//!
//! This is the only layer that touches the persisted form; domain crates own
//! the document types and go through [`JsonStore`] for every read and write.

pub mod error;
pub mod json_store;

pub use error::{StorageError, StorageResult};
pub use json_store::JsonStore;

/// The named collections the gateway knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Events,
    Users,
    Comments,
}

impl Collection {
    /// Stable storage key; doubles as the collection's file stem
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Events => "events",
            Collection::Users => "users",
            Collection::Comments => "comments",
        }
    }

    pub const ALL: [Collection; 3] = [Collection::Events, Collection::Users, Collection::Comments];
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_keys_are_stable() {
        assert_eq!(Collection::Events.key(), "events");
        assert_eq!(Collection::Users.key(), "users");
        assert_eq!(Collection::Comments.key(), "comments");
    }

    #[test]
    fn test_collection_display_matches_key() {
        for collection in Collection::ALL {
            assert_eq!(collection.to_string(), collection.key());
        }
    }
}
