//! Account registration and login payloads.

use serde::{Deserialize, Serialize};

/// Username and password pair sent to the registration and login endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Account name.
    pub username: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Create credentials from a username and password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Session returned by a successful registration or login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Profile of the authenticated account.
    pub user: UserProfile,
}

/// Minimal account profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Account identifier.
    pub id: i64,
    /// Account name.
    pub username: String,
}
