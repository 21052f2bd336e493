/// User domain type
use serde::{Deserialize, Serialize};

pub type UserId = i64;

const ADMIN_ROLE: &str = "admin";

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Login email
    pub email: String,

    /// Role name assigned by the server (e.g. "admin", "user")
    #[serde(default)]
    pub role: String,
}

impl User {
    /// Whether this account carries the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// Token and identity handed back by login and registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}
