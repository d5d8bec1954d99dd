//! PostgreSQL backend over the `postgres` crate.
//!
//! The columns are declared INTEGER, so parameters are narrowed to `i32`
//! before binding (rust-postgres rejects `i64` against int4 columns) and
//! widened back to `i64` on read. The narrowing is checked: an id outside
//! int4 range cannot exist in the table, so lookups and deletes report no
//! row and link values report a foreign-key violation, never a wrapped
//! match against some unrelated row.

use postgres::error::SqlState;
use postgres::{Client, NoTls};

use super::StoreError;
use super::backend::StoreBackend;
use super::schema::ALL_TABLES;
use super::schema::compilers::PostgresCompiler;
use crate::models::{NewProfile, NewUser, Profile, User};

/// PostgreSQL-backed store.
pub struct PostgresBackend {
    client: Client,
}

impl PostgresBackend {
    /// Connect with a libpq-style connection string or `postgres://` URL.
    pub fn connect(connection_string: &str) -> Result<Self, StoreError> {
        let client = Client::connect(connection_string, NoTls).map_err(|e| {
            StoreError::Connect {
                message: e.to_string(),
            }
        })?;
        Ok(Self { client })
    }
}

impl StoreBackend for PostgresBackend {
    fn backend_name(&self) -> &'static str {
        "Postgres"
    }

    fn create_schema(&mut self) -> Result<(), StoreError> {
        let mut script = PostgresCompiler::compile_all(ALL_TABLES).join(";\n\n");
        script.push(';');
        self.client.batch_execute(&script).map_err(map_pg_error)
    }

    fn table_exists(&mut self, name: &str) -> Result<bool, StoreError> {
        let row = self
            .client
            .query_one(
                "SELECT EXISTS (
                     SELECT 1 FROM information_schema.tables
                     WHERE table_schema = 'public' AND table_name = $1
                 )",
                &[&name],
            )
            .map_err(map_pg_error)?;
        Ok(row.get(0))
    }

    fn execute(&mut self, sql: &str) -> Result<u64, StoreError> {
        self.client.execute(sql, &[]).map_err(map_pg_error)
    }

    fn insert_user(&mut self, user: &NewUser) -> Result<User, StoreError> {
        let profile_id = user
            .profile_id
            .map(|v| narrow_link(v, "profiles"))
            .transpose()?;
        let row = self
            .client
            .query_one(
                "INSERT INTO users (name, email, password, profile_id) \
                 VALUES ($1, $2, $3, $4) RETURNING id",
                &[&user.name, &user.email, &user.password, &profile_id],
            )
            .map_err(map_pg_error)?;
        let id: i32 = row.get(0);

        Ok(User {
            id: id as i64,
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            profile_id: user.profile_id,
        })
    }

    fn find_user(&mut self, id: i64) -> Result<Option<User>, StoreError> {
        let Some(id) = narrow_id(id) else {
            return Ok(None);
        };
        let row = self
            .client
            .query_opt(
                "SELECT id, name, email, password, profile_id FROM users WHERE id = $1",
                &[&id],
            )
            .map_err(map_pg_error)?;

        Ok(row.map(|row| {
            let id: i32 = row.get(0);
            let profile_id: Option<i32> = row.get(4);
            User {
                id: id as i64,
                name: row.get(1),
                email: row.get(2),
                password: row.get(3),
                profile_id: profile_id.map(i64::from),
            }
        }))
    }

    fn set_user_profile(
        &mut self,
        user_id: i64,
        profile_id: Option<i64>,
    ) -> Result<bool, StoreError> {
        let Some(user_id) = narrow_id(user_id) else {
            return Ok(false);
        };
        let profile_id = profile_id.map(|v| narrow_link(v, "profiles")).transpose()?;
        let affected = self
            .client
            .execute(
                "UPDATE users SET profile_id = $1 WHERE id = $2",
                &[&profile_id, &user_id],
            )
            .map_err(map_pg_error)?;
        Ok(affected > 0)
    }

    fn delete_user(&mut self, id: i64) -> Result<bool, StoreError> {
        let Some(id) = narrow_id(id) else {
            return Ok(false);
        };
        let affected = self
            .client
            .execute("DELETE FROM users WHERE id = $1", &[&id])
            .map_err(map_pg_error)?;
        Ok(affected > 0)
    }

    fn insert_profile(&mut self, profile: &NewProfile) -> Result<Profile, StoreError> {
        let user_id = narrow_link(profile.user_id, "users")?;
        let row = self
            .client
            .query_one(
                "INSERT INTO profiles (bio, user_id) VALUES ($1, $2) RETURNING id",
                &[&profile.bio, &user_id],
            )
            .map_err(map_pg_error)?;
        let id: i32 = row.get(0);

        Ok(Profile {
            id: id as i64,
            bio: profile.bio.clone(),
            user_id: profile.user_id,
        })
    }

    fn find_profile(&mut self, id: i64) -> Result<Option<Profile>, StoreError> {
        let Some(id) = narrow_id(id) else {
            return Ok(None);
        };
        let row = self
            .client
            .query_opt(
                "SELECT id, bio, user_id FROM profiles WHERE id = $1",
                &[&id],
            )
            .map_err(map_pg_error)?;
        Ok(row.map(row_to_profile))
    }

    fn profile_for_user(&mut self, user_id: i64) -> Result<Option<Profile>, StoreError> {
        let Some(user_id) = narrow_id(user_id) else {
            return Ok(None);
        };
        let row = self
            .client
            .query_opt(
                "SELECT id, bio, user_id FROM profiles WHERE user_id = $1",
                &[&user_id],
            )
            .map_err(map_pg_error)?;
        Ok(row.map(row_to_profile))
    }

    fn delete_profile(&mut self, id: i64) -> Result<bool, StoreError> {
        let Some(id) = narrow_id(id) else {
            return Ok(false);
        };
        let affected = self
            .client
            .execute("DELETE FROM profiles WHERE id = $1", &[&id])
            .map_err(map_pg_error)?;
        Ok(affected > 0)
    }
}

/// Narrow an id to int4 range. None means the id cannot exist in the table.
fn narrow_id(id: i64) -> Option<i32> {
    i32::try_from(id).ok()
}

/// Narrow a link column value. A value outside int4 range cannot name an
/// existing row, so it maps to the same error the engine would raise for a
/// missing foreign-key target.
fn narrow_link(id: i64, target: &str) -> Result<i32, StoreError> {
    narrow_id(id).ok_or_else(|| StoreError::ForeignKey {
        detail: format!("no row in {} with id {}", target, id),
    })
}


fn row_to_profile(row: postgres::Row) -> Profile {
    let id: i32 = row.get(0);
    let user_id: i32 = row.get(2);
    Profile {
        id: id as i64,
        bio: row.get(1),
        user_id: user_id as i64,
    }
}

/// Map a PostgreSQL error to the matching `StoreError` variant via SQLSTATE.
fn map_pg_error(err: postgres::Error) -> StoreError {
    if let Some(db) = err.as_db_error() {
        let code = db.code();
        if *code == SqlState::NOT_NULL_VIOLATION {
            let column = match (db.table(), db.column()) {
                (Some(table), Some(column)) => format!("{}.{}", table, column),
                (_, Some(column)) => column.to_string(),
                _ => db.message().to_string(),
            };
            return StoreError::NotNull { column };
        }
        if *code == SqlState::UNIQUE_VIOLATION {
            return StoreError::Unique {
                constraint: db.constraint().unwrap_or(db.message()).to_string(),
            };
        }
        if *code == SqlState::FOREIGN_KEY_VIOLATION {
            return StoreError::ForeignKey {
                detail: db.message().to_string(),
            };
        }
        // 22001 for native VARCHAR(n) overflow; CHECK kept for parity with
        // the SQLite length guards should the schema ever grow one.
        if *code == SqlState::STRING_DATA_RIGHT_TRUNCATION || *code == SqlState::CHECK_VIOLATION {
            return StoreError::Length {
                constraint: db.constraint().unwrap_or(db.message()).to_string(),
            };
        }
    }
    StoreError::Query {
        message: err.to_string(),
    }
}
