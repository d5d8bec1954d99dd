//! Row types for the two tables.
//!
//! Plain data structs; all constraint enforcement lives in the engine and is
//! surfaced through `crate::db::StoreError`.

mod profile;
mod user;

pub use profile::{NewProfile, Profile};
pub use user::{NewUser, User};
