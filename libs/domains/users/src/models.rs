use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// User entity as persisted in the `users` collection
///
/// The persisted document carries the argon2 hash, never a plaintext
/// password; callers get a [`UserResponse`] with the hash stripped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier (fixed for seed users, uuid-v7 string otherwise)
    pub id: String,
    /// User display name
    pub name: String,
    /// User email (unique, compared case-insensitively)
    pub email: String,
    /// Argon2 PHC hash string
    pub password_hash: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, absent until the first profile update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// User DTO returned to callers (no password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// DTO for registering a new user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    pub password: String,
    /// Caller-supplied id; generated when absent
    #[serde(default)]
    pub id: Option<String>,
}

/// DTO for a partial profile update
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(email, length(max = 255))]
    pub email: Option<String>,
    pub password: Option<String>,
}

impl User {
    /// Build a new user record with an already-hashed password
    pub fn new(id: String, name: String, email: String, password_hash: String) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Shallow merge of an update, last write wins per field.
    ///
    /// A changed password arrives pre-hashed via `new_password_hash`.
    pub fn apply_update(&mut self, update: UpdateUser, new_password_hash: Option<String>) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(hash) = new_password_hash {
            self.password_hash = hash;
        }
        self.updated_at = Some(Utc::now());
    }

    /// Case-insensitive email comparison used everywhere emails are matched
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_update_merges_and_stamps_updated_at() {
        let mut user = User::new(
            "u1".to_string(),
            "Old Name".to_string(),
            "old@example.com".to_string(),
            "hash".to_string(),
        );
        assert!(user.updated_at.is_none());

        user.apply_update(
            UpdateUser {
                name: Some("New Name".to_string()),
                ..Default::default()
            },
            None,
        );

        assert_eq!(user.name, "New Name");
        assert_eq!(user.email, "old@example.com");
        assert_eq!(user.password_hash, "hash");
        assert!(user.updated_at.is_some());
    }

    #[test]
    fn test_email_matches_is_case_insensitive() {
        let user = User::new(
            "u1".to_string(),
            "Name".to_string(),
            "Admin@Example.com".to_string(),
            "hash".to_string(),
        );

        assert!(user.email_matches("admin@example.com"));
        assert!(user.email_matches("ADMIN@EXAMPLE.COM"));
        assert!(!user.email_matches("other@example.com"));
    }

    #[test]
    fn test_user_response_strips_password_hash() {
        let user = User::new(
            "u1".to_string(),
            "Name".to_string(),
            "user@example.com".to_string(),
            "secret-hash".to_string(),
        );

        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(!json.contains("passwordHash"));
    }
}
