//! Profile model.

use serde::Serialize;

/// A row in the `profiles` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub id: i64,
    pub bio: Option<String>,
    /// Owning user. Required and unique: every profile belongs to exactly
    /// one user.
    pub user_id: i64,
}

/// Insert payload for the `profiles` table. The `id` is assigned by the engine.
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub bio: Option<String>,
    pub user_id: i64,
}

impl NewProfile {
    pub fn new(user_id: i64) -> Self {
        Self { bio: None, user_id }
    }

    pub fn with_bio(user_id: i64, bio: impl Into<String>) -> Self {
        Self {
            bio: Some(bio.into()),
            user_id,
        }
    }
}
