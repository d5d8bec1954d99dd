//! Core schema definition types.
//!
//! Provides a dialect-agnostic type system for describing the relational
//! schema. These types form the single source of truth for both the SQLite
//! and PostgreSQL DDL compilers.

/// Represents a column data type.
///
/// Maps to dialect type names via the compilers in `super::compilers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    /// Integer data
    Integer,
    /// Variable-length string with a maximum character count
    Varchar(u16),
}

impl SqlType {
    /// Returns the SQL type name, shared by both dialects.
    pub fn sql_name(&self) -> String {
        match self {
            SqlType::Integer => "INTEGER".to_string(),
            SqlType::Varchar(len) => format!("VARCHAR({})", len),
        }
    }

    /// Returns the declared maximum length for string types, if any.
    pub fn max_length(&self) -> Option<u16> {
        match self {
            SqlType::Integer => None,
            SqlType::Varchar(len) => Some(*len),
        }
    }
}

/// Referential action applied to a foreign key when the referenced row
/// is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferentialAction {
    /// Default engine behavior: the delete fails while references exist.
    NoAction,
    /// Null out the referencing column.
    SetNull,
}

impl ReferentialAction {
    /// Returns the SQL clause fragment for this action, or `None` when the
    /// engine default applies and no clause should be emitted.
    pub fn on_delete_clause(&self) -> Option<&'static str> {
        match self {
            ReferentialAction::NoAction => None,
            ReferentialAction::SetNull => Some("ON DELETE SET NULL"),
        }
    }
}

/// Represents a column in a table definition.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    /// Column name (e.g., "name", "profile_id")
    pub name: &'static str,

    /// Column data type
    pub sql_type: SqlType,

    /// Whether NULL values are permitted
    pub nullable: bool,

    /// Whether a UNIQUE constraint applies
    pub unique: bool,

    /// Whether this column is the system-generated primary key
    pub primary_key: bool,
}

/// Represents a foreign key constraint on a table.
#[derive(Debug, Clone)]
pub struct ForeignKeyDef {
    /// Referencing column in this table
    pub column: &'static str,

    /// Referenced table name
    pub references_table: &'static str,

    /// Referenced column name
    pub references_column: &'static str,

    /// Action on deletion of the referenced row
    pub on_delete: ReferentialAction,
}

impl ForeignKeyDef {
    /// Returns the constraint name used in generated DDL, e.g.
    /// `users_profile_id_fkey`.
    pub fn constraint_name(&self, table: &str) -> String {
        format!("{}_{}_fkey", table, self.column)
    }
}

/// Represents a complete table definition.
#[derive(Debug, Clone)]
pub struct TableDef {
    /// Table name (e.g., "users", "profiles")
    pub name: &'static str,

    /// All columns, in declaration order
    pub columns: &'static [ColumnDef],

    /// Foreign key constraints on this table
    pub foreign_keys: &'static [ForeignKeyDef],
}

impl TableDef {
    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns the primary key column.
    pub fn primary_key(&self) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.primary_key)
    }

    /// Returns the total number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
