use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User, UserResponse};
use crate::password::{hash_password, verify_password};
use crate::repository::UserRepository;
use crate::session::Session;

/// Minimum plaintext password length accepted at registration
const MIN_PASSWORD_LEN: usize = 6;

/// Service layer for User business logic
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a new user, hashing the password before anything is stored
    pub async fn register(&self, input: CreateUser) -> UserResult<UserResponse> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;
        self.validate_password(&input.password)?;

        // Friendlier failure than the repository's create-time collision
        if self.repository.email_exists(&input.email).await? {
            return Err(UserError::DuplicateEmail(input.email));
        }

        let password_hash = hash_password(&input.password)?;
        let id = input
            .id
            .unwrap_or_else(|| Uuid::now_v7().to_string());

        let user = User::new(id, input.name, input.email, password_hash);
        let created = self.repository.create(user).await?;
        Ok(created.into())
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: &str) -> UserResult<UserResponse> {
        let user = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;

        Ok(user.into())
    }

    /// All users, in stored order
    pub async fn list_users(&self) -> UserResult<Vec<UserResponse>> {
        let users = self.repository.get_all().await?;
        Ok(users.into_iter().map(|u| u.into()).collect())
    }

    /// Partial profile update; a changed password is re-hashed
    pub async fn update_user(&self, id: &str, input: UpdateUser) -> UserResult<UserResponse> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        let mut user = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;

        let new_password_hash = match input.password.as_deref() {
            Some(password) => {
                self.validate_password(password)?;
                Some(hash_password(password)?)
            }
            None => None,
        };

        if let Some(ref new_email) = input.email {
            if !user.email_matches(new_email) && self.repository.email_exists(new_email).await? {
                return Err(UserError::DuplicateEmail(new_email.clone()));
            }
        }

        user.apply_update(input, new_password_hash);

        let updated = self.repository.update(user).await?;
        Ok(updated.into())
    }

    /// Delete a user. Deleting an absent id is a no-op, not an error.
    pub async fn delete_user(&self, id: &str) -> UserResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }

    /// Resolve credentials: case-insensitive email match plus password
    /// verification. Wrong credentials are `None`, never an error.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> UserResult<Option<UserResponse>> {
        let Some(user) = self.repository.get_by_email(email).await? else {
            return Ok(None);
        };

        if !verify_password(password, &user.password_hash)? {
            return Ok(None);
        }

        Ok(Some(user.into()))
    }

    /// Authenticate and open an explicit session
    pub async fn login(&self, email: &str, password: &str) -> UserResult<Option<Session>> {
        let Some(user) = self.authenticate(email, password).await? else {
            return Ok(None);
        };

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(Some(Session::start(user)))
    }

    /// Pre-registration existence check (case-insensitive)
    pub async fn email_exists(&self, email: &str) -> UserResult<bool> {
        self.repository.email_exists(email).await
    }

    fn validate_password(&self, password: &str) -> UserResult<()> {
        if password.len() < MIN_PASSWORD_LEN {
            return Err(UserError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;

    fn create_input(email: &str) -> CreateUser {
        CreateUser {
            name: "Test User".to_string(),
            email: email.to_string(),
            password: "password123".to_string(),
            id: None,
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password_and_assigns_id() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_email_exists().returning(|_| Ok(false));
        mock_repo.expect_create().returning(|user| Ok(user));

        let service = UserService::new(mock_repo);
        let response = service.register(create_input("new@example.com")).await.unwrap();

        assert_eq!(response.email, "new@example.com");
        assert!(!response.id.is_empty());
    }

    #[tokio::test]
    async fn test_register_rejects_existing_email() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_email_exists().returning(|_| Ok(true));

        let service = UserService::new(mock_repo);
        let result = service.register(create_input("taken@example.com")).await;

        assert!(matches!(result, Err(UserError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_register_rejects_short_password() {
        let mock_repo = MockUserRepository::new();
        let service = UserService::new(mock_repo);

        let mut input = create_input("new@example.com");
        input.password = "short".to_string();

        let result = service.register(input).await;
        assert!(matches!(result, Err(UserError::Validation(_))));
    }

    #[tokio::test]
    async fn test_register_rejects_malformed_email() {
        let mock_repo = MockUserRepository::new();
        let service = UserService::new(mock_repo);

        let result = service.register(create_input("not-an-email")).await;
        assert!(matches!(result, Err(UserError::Validation(_))));
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password_is_none_not_error() {
        let hash = hash_password("correct-password").unwrap();

        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_get_by_email().returning(move |_| {
            Ok(Some(User::new(
                "u1".to_string(),
                "Test".to_string(),
                "test@example.com".to_string(),
                hash.clone(),
            )))
        });

        let service = UserService::new(mock_repo);

        let result = service
            .authenticate("test@example.com", "wrong-password")
            .await
            .unwrap();
        assert!(result.is_none());

        let result = service
            .authenticate("test@example.com", "correct-password")
            .await
            .unwrap();
        assert_eq!(result.unwrap().id, "u1");
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email_is_none() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_get_by_email().returning(|_| Ok(None));

        let service = UserService::new(mock_repo);
        let result = service.authenticate("nobody@example.com", "whatever").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_login_opens_session_for_valid_credentials() {
        let hash = hash_password("password123").unwrap();

        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_get_by_email().returning(move |_| {
            Ok(Some(User::new(
                "u1".to_string(),
                "Test".to_string(),
                "test@example.com".to_string(),
                hash.clone(),
            )))
        });

        let service = UserService::new(mock_repo);

        let session = service
            .login("test@example.com", "password123")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(session.user_id(), "u1");
    }

    #[tokio::test]
    async fn test_update_user_rejects_email_collision() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_get_by_id().returning(|_| {
            Ok(Some(User::new(
                "u1".to_string(),
                "Test".to_string(),
                "old@example.com".to_string(),
                "hash".to_string(),
            )))
        });
        mock_repo.expect_email_exists().returning(|_| Ok(true));

        let service = UserService::new(mock_repo);

        let result = service
            .update_user(
                "u1",
                UpdateUser {
                    email: Some("taken@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(UserError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_delete_user_is_idempotent() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_delete().returning(|_| Ok(false));

        let service = UserService::new(mock_repo);
        assert!(service.delete_user("ghost").await.is_ok());
    }
}
