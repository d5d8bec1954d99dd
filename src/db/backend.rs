//! Store backend trait abstracting the supported engines.

use super::StoreError;
use crate::models::{NewProfile, NewUser, Profile, User};

/// Trait for storage backends that persist the two tables.
///
/// Methods take `&mut self` because the PostgreSQL client requires exclusive
/// access; the SQLite backend doesn't care either way.
pub trait StoreBackend {
    /// Backend name for logging/debugging.
    fn backend_name(&self) -> &'static str;

    /// Create both tables if they don't exist. Idempotent.
    fn create_schema(&mut self) -> Result<(), StoreError>;

    /// Check whether a table exists.
    fn table_exists(&mut self, name: &str) -> Result<bool, StoreError>;

    /// Execute a raw statement, returning the number of affected rows.
    ///
    /// Escape hatch for statements the typed operations can't express;
    /// constraint violations are mapped the same way as everywhere else.
    fn execute(&mut self, sql: &str) -> Result<u64, StoreError>;

    /// Insert a user, returning the stored row with its assigned id.
    fn insert_user(&mut self, user: &NewUser) -> Result<User, StoreError>;

    /// Fetch a user by id.
    fn find_user(&mut self, id: i64) -> Result<Option<User>, StoreError>;

    /// Point a user's `profile_id` at a profile (or clear it with `None`).
    /// Returns false when no such user exists.
    fn set_user_profile(
        &mut self,
        user_id: i64,
        profile_id: Option<i64>,
    ) -> Result<bool, StoreError>;

    /// Delete a user by id. Returns false when no such user exists.
    ///
    /// Fails with a foreign-key violation while a profile still references
    /// the user; `profiles.user_id` declares no referential action.
    fn delete_user(&mut self, id: i64) -> Result<bool, StoreError>;

    /// Insert a profile, returning the stored row with its assigned id.
    fn insert_profile(&mut self, profile: &NewProfile) -> Result<Profile, StoreError>;

    /// Fetch a profile by id.
    fn find_profile(&mut self, id: i64) -> Result<Option<Profile>, StoreError>;

    /// Fetch the profile owned by a user, if any.
    fn profile_for_user(&mut self, user_id: i64) -> Result<Option<Profile>, StoreError>;

    /// Delete a profile by id. Returns false when no such profile exists.
    ///
    /// Any `users.profile_id` referencing the row is set to null by the
    /// engine (ON DELETE SET NULL).
    fn delete_profile(&mut self, id: i64) -> Result<bool, StoreError>;
}
