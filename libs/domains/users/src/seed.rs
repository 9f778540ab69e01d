//! Seed fixtures for the `users` collection
//!
//! Written on first run only; afterwards the persisted collection is the
//! source of truth. Fixture passwords are hashed at seed time, so the
//! plaintext values below never reach the store.

use crate::error::UserResult;
use crate::models::User;
use crate::password::hash_password;

/// (id, name, email, password) fixture rows
const DEFAULT_USERS: [(&str, &str, &str, &str); 3] = [
    ("admin", "Admin User", "admin@example.com", "password123"),
    ("user1", "Kowsik Alluri", "kousikalluri@gmail.com", "password1234"),
    ("user2", "Jagadeesh Kadimi", "kadamijagadesh@gmail.com", "password123"),
];

/// Default users written when the collection is first initialized
pub fn default_users() -> UserResult<Vec<User>> {
    DEFAULT_USERS
        .iter()
        .map(|(id, name, email, password)| {
            Ok(User::new(
                id.to_string(),
                name.to_string(),
                email.to_string(),
                hash_password(password)?,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::verify_password;

    #[test]
    fn test_seed_has_three_fixed_users() {
        let users = default_users().unwrap();

        let ids: Vec<&str> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["admin", "user1", "user2"]);
        assert_eq!(users[0].email, "admin@example.com");
    }

    #[test]
    fn test_seed_passwords_are_hashed_not_plaintext() {
        let users = default_users().unwrap();

        for user in &users {
            assert!(user.password_hash.starts_with("$argon2"));
        }
        assert!(verify_password("password123", &users[0].password_hash).unwrap());
        assert!(verify_password("password1234", &users[1].password_hash).unwrap());
    }
}
