//! User Directory
//!
//! CRUD over user records with a unique-email rule, credential resolution
//! for login, and explicit sessions.
//!
//! Layering follows the other domain crates:
//!
//! ```text
//! Service     ← validation, password hashing, sessions
//! Repository  ← data access (trait + in-memory / JSON-store impls)
//! Models      ← entity and DTOs
//! ```
//!
//! Passwords are argon2-hashed before anything reaches the repository; the
//! persisted `users` collection never contains plaintext credentials.

pub mod error;
pub mod json;
pub mod models;
pub mod password;
pub mod repository;
pub mod seed;
pub mod service;
pub mod session;

pub use error::{UserError, UserResult};
pub use json::JsonUserRepository;
pub use models::{CreateUser, UpdateUser, User, UserResponse};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
pub use session::Session;
