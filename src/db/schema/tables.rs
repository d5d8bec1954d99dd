//! Table definitions for the StudyBuddy schema.
//!
//! Defines the two tables that form the complete schema: `users` and
//! `profiles`, linked one-to-one from both sides. The link is deliberately
//! stored redundantly (`users.profile_id` and `profiles.user_id`), matching
//! the upstream data model. Nothing keeps the two pointers mutually
//! consistent: a user can point at a profile whose `user_id` names a
//! different user. Callers who want both sides linked insert the profile
//! and then set the owner's `profile_id` themselves.

use super::definition::{ColumnDef, ForeignKeyDef, ReferentialAction, SqlType, TableDef};

/// Users table: account rows.
///
/// `email` carries no uniqueness constraint and `password` is stored exactly
/// as given. Both are upstream decisions preserved as-is.
pub const USERS: TableDef = TableDef {
    name: "users",
    columns: &[
        ColumnDef {
            name: "id",
            sql_type: SqlType::Integer,
            nullable: false,
            unique: false,
            primary_key: true,
        },
        ColumnDef {
            name: "name",
            sql_type: SqlType::Varchar(100),
            nullable: false,
            unique: false,
            primary_key: false,
        },
        ColumnDef {
            name: "email",
            sql_type: SqlType::Varchar(100),
            nullable: false,
            unique: false,
            primary_key: false,
        },
        ColumnDef {
            name: "password",
            sql_type: SqlType::Varchar(100),
            nullable: false,
            unique: false,
            primary_key: false,
        },
        ColumnDef {
            name: "profile_id",
            sql_type: SqlType::Integer,
            nullable: true,
            unique: true,
            primary_key: false,
        },
    ],
    foreign_keys: &[ForeignKeyDef {
        column: "profile_id",
        references_table: "profiles",
        references_column: "id",
        on_delete: ReferentialAction::SetNull,
    }],
};

/// Profiles table: at most one per user, and every profile belongs to a user.
pub const PROFILES: TableDef = TableDef {
    name: "profiles",
    columns: &[
        ColumnDef {
            name: "id",
            sql_type: SqlType::Integer,
            nullable: false,
            unique: false,
            primary_key: true,
        },
        ColumnDef {
            name: "bio",
            sql_type: SqlType::Varchar(255),
            nullable: true,
            unique: false,
            primary_key: false,
        },
        ColumnDef {
            name: "user_id",
            sql_type: SqlType::Integer,
            nullable: false,
            unique: true,
            primary_key: false,
        },
    ],
    foreign_keys: &[ForeignKeyDef {
        column: "user_id",
        references_table: "users",
        references_column: "id",
        on_delete: ReferentialAction::NoAction,
    }],
};

/// All tables in creation order.
pub const ALL_TABLES: &[&TableDef] = &[&USERS, &PROFILES];
