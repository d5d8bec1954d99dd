//! SQLite backend over rusqlite.
//!
//! Foreign-key enforcement is off by default in SQLite and must be switched
//! on per connection, so every constructor routes through `init`.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, ffi, params};

use super::StoreError;
use super::backend::StoreBackend;
use super::schema::ALL_TABLES;
use super::schema::compilers::SqliteCompiler;
use crate::models::{NewProfile, NewUser, Profile, User};

/// SQLite-backed store, file-based or in-memory.
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Open (or create) a database file.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|e| StoreError::Open {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::init(conn)
    }

    /// Open an in-memory database. Used by tests and the `memory` config.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Open {
            path: ":memory:".to_string(),
            message: e.to_string(),
        })?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(map_sqlite_error)?;
        Ok(Self { conn })
    }
}

impl StoreBackend for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        "Sqlite"
    }

    fn create_schema(&mut self) -> Result<(), StoreError> {
        let mut script = SqliteCompiler::compile_all(ALL_TABLES).join(";\n\n");
        script.push(';');
        self.conn.execute_batch(&script).map_err(map_sqlite_error)
    }

    fn table_exists(&mut self, name: &str) -> Result<bool, StoreError> {
        let found: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()
            .map_err(map_sqlite_error)?;
        Ok(found.is_some())
    }

    fn execute(&mut self, sql: &str) -> Result<u64, StoreError> {
        let affected = self.conn.execute(sql, []).map_err(map_sqlite_error)?;
        Ok(affected as u64)
    }

    fn insert_user(&mut self, user: &NewUser) -> Result<User, StoreError> {
        let id: i64 = self
            .conn
            .query_row(
                "INSERT INTO users (name, email, password, profile_id) \
                 VALUES (?1, ?2, ?3, ?4) RETURNING id",
                params![user.name, user.email, user.password, user.profile_id],
                |row| row.get(0),
            )
            .map_err(map_sqlite_error)?;

        Ok(User {
            id,
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            profile_id: user.profile_id,
        })
    }

    fn find_user(&mut self, id: i64) -> Result<Option<User>, StoreError> {
        self.conn
            .query_row(
                "SELECT id, name, email, password, profile_id FROM users WHERE id = ?1",
                params![id],
                |row| {
                    Ok(User {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        email: row.get(2)?,
                        password: row.get(3)?,
                        profile_id: row.get(4)?,
                    })
                },
            )
            .optional()
            .map_err(map_sqlite_error)
    }

    fn set_user_profile(
        &mut self,
        user_id: i64,
        profile_id: Option<i64>,
    ) -> Result<bool, StoreError> {
        let affected = self
            .conn
            .execute(
                "UPDATE users SET profile_id = ?1 WHERE id = ?2",
                params![profile_id, user_id],
            )
            .map_err(map_sqlite_error)?;
        Ok(affected > 0)
    }

    fn delete_user(&mut self, id: i64) -> Result<bool, StoreError> {
        let affected = self
            .conn
            .execute("DELETE FROM users WHERE id = ?1", params![id])
            .map_err(map_sqlite_error)?;
        Ok(affected > 0)
    }

    fn insert_profile(&mut self, profile: &NewProfile) -> Result<Profile, StoreError> {
        let id: i64 = self
            .conn
            .query_row(
                "INSERT INTO profiles (bio, user_id) VALUES (?1, ?2) RETURNING id",
                params![profile.bio, profile.user_id],
                |row| row.get(0),
            )
            .map_err(map_sqlite_error)?;

        Ok(Profile {
            id,
            bio: profile.bio.clone(),
            user_id: profile.user_id,
        })
    }

    fn find_profile(&mut self, id: i64) -> Result<Option<Profile>, StoreError> {
        self.conn
            .query_row(
                "SELECT id, bio, user_id FROM profiles WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Profile {
                        id: row.get(0)?,
                        bio: row.get(1)?,
                        user_id: row.get(2)?,
                    })
                },
            )
            .optional()
            .map_err(map_sqlite_error)
    }

    fn profile_for_user(&mut self, user_id: i64) -> Result<Option<Profile>, StoreError> {
        self.conn
            .query_row(
                "SELECT id, bio, user_id FROM profiles WHERE user_id = ?1",
                params![user_id],
                |row| {
                    Ok(Profile {
                        id: row.get(0)?,
                        bio: row.get(1)?,
                        user_id: row.get(2)?,
                    })
                },
            )
            .optional()
            .map_err(map_sqlite_error)
    }

    fn delete_profile(&mut self, id: i64) -> Result<bool, StoreError> {
        let affected = self
            .conn
            .execute("DELETE FROM profiles WHERE id = ?1", params![id])
            .map_err(map_sqlite_error)?;
        Ok(affected > 0)
    }
}

/// Map a rusqlite error to the matching `StoreError` variant via SQLite's
/// extended result codes.
fn map_sqlite_error(err: rusqlite::Error) -> StoreError {
    if let rusqlite::Error::SqliteFailure(ref code, ref message) = err {
        let detail = message.clone().unwrap_or_else(|| code.to_string());
        match code.extended_code {
            ffi::SQLITE_CONSTRAINT_NOTNULL => {
                return StoreError::NotNull {
                    column: constraint_from_message(&detail),
                };
            }
            ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                return StoreError::Unique {
                    constraint: constraint_from_message(&detail),
                };
            }
            ffi::SQLITE_CONSTRAINT_FOREIGNKEY => {
                return StoreError::ForeignKey { detail };
            }
            ffi::SQLITE_CONSTRAINT_CHECK => {
                // The only CHECK constraints in the schema are length guards.
                return StoreError::Length {
                    constraint: constraint_from_message(&detail),
                };
            }
            _ => {}
        }
    }
    StoreError::Query {
        message: err.to_string(),
    }
}

/// Extract the constraint identifier from a SQLite message such as
/// "NOT NULL constraint failed: users.name".
fn constraint_from_message(message: &str) -> String {
    message
        .rsplit(": ")
        .next()
        .unwrap_or(message)
        .trim()
        .to_string()
}
