use async_trait::async_trait;
use hub_storage::{Collection, JsonStore};

use crate::error::{UserError, UserResult};
use crate::models::User;
use crate::repository::UserRepository;
use crate::seed;

/// JSON-store implementation of UserRepository
///
/// Every operation is a whole-collection read-modify-write against the
/// `users` collection; the store file is the source of truth and nothing is
/// cached between calls. Failed operations leave the collection untouched.
#[derive(Debug, Clone)]
pub struct JsonUserRepository {
    store: JsonStore,
}

impl JsonUserRepository {
    /// Open the repository, seeding the collection on first run
    pub fn open(store: JsonStore) -> UserResult<Self> {
        if !store.is_initialized(Collection::Users) {
            let users = seed::default_users()?;
            store.save(Collection::Users, &users)?;
            tracing::info!(count = users.len(), "Seeded users collection");
        }

        Ok(Self { store })
    }

    fn load_users(&self) -> UserResult<Vec<User>> {
        Ok(self.store.load(Collection::Users)?)
    }

    fn save_users(&self, users: &[User]) -> UserResult<()> {
        Ok(self.store.save(Collection::Users, users)?)
    }
}

#[async_trait]
impl UserRepository for JsonUserRepository {
    async fn get_all(&self) -> UserResult<Vec<User>> {
        self.load_users()
    }

    async fn get_by_id(&self, id: &str) -> UserResult<Option<User>> {
        let users = self.load_users()?;
        Ok(users.into_iter().find(|u| u.id == id))
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let users = self.load_users()?;
        Ok(users.into_iter().find(|u| u.email_matches(email)))
    }

    async fn create(&self, user: User) -> UserResult<User> {
        let mut users = self.load_users()?;

        if users.iter().any(|u| u.email_matches(&user.email)) {
            return Err(UserError::DuplicateEmail(user.email));
        }

        users.push(user.clone());
        self.save_users(&users)?;

        tracing::info!(user_id = %user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let mut users = self.load_users()?;

        let index = users
            .iter()
            .position(|u| u.id == user.id)
            .ok_or_else(|| UserError::NotFound(user.id.clone()))?;

        if users
            .iter()
            .any(|u| u.id != user.id && u.email_matches(&user.email))
        {
            return Err(UserError::DuplicateEmail(user.email));
        }

        users[index] = user.clone();
        self.save_users(&users)?;

        tracing::info!(user_id = %user.id, "Updated user");
        Ok(user)
    }

    async fn delete(&self, id: &str) -> UserResult<bool> {
        let mut users = self.load_users()?;

        let before = users.len();
        users.retain(|u| u.id != id);

        let removed = users.len() < before;
        if removed {
            self.save_users(&users)?;
            tracing::info!(user_id = %id, "Deleted user");
        }
        Ok(removed)
    }

    async fn email_exists(&self, email: &str) -> UserResult<bool> {
        let users = self.load_users()?;
        Ok(users.iter().any(|u| u.email_matches(email)))
    }
}
