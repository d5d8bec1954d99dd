//! User model.

use serde::Serialize;

/// A row in the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Stored exactly as given by the caller; no hashing happens at this layer.
    pub password: String,
    /// Link to the owned profile. Nulled by the engine when that profile is
    /// deleted (ON DELETE SET NULL).
    pub profile_id: Option<i64>,
}

/// Insert payload for the `users` table. The `id` is assigned by the engine.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub profile_id: Option<i64>,
}

impl NewUser {
    /// New user with no profile link, the common creation path.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            profile_id: None,
        }
    }
}
