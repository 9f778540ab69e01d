use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::UserResponse;

/// Explicit login session
///
/// Returned by [`crate::service::UserService::login`] and passed through the
/// call graph by the caller. There is no ambient "current user" state; when
/// the session value is dropped, the login is over.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: UserResponse,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn start(user: UserResponse) -> Self {
        Self {
            user,
            started_at: Utc::now(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user.id
    }
}
