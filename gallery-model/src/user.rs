use chrono::{DateTime, Utc};

use crate::ids::UserId;

catalogue_enum! {
    /// Access level of a user account
    pub enum UserRole as "user role" {
        User = 0,
        Admin = 1,
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::User
    }
}

impl UserRole {
    /// Admins may see listings without the public status restriction.
    pub fn can_access_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    pub id: UserId,
    /// Unique, stored trimmed.
    pub username: String,
    /// PHC-format Argon2id hash.
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    pub password_hash: String,
    /// Unique, compared case-insensitively.
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("role", &self.role)
            .field("is_active", &self.is_active)
            .field("created_at", &self.created_at)
            .field("last_login_at", &self.last_login_at)
            .finish()
    }
}
