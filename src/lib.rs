//! studybuddy_db library - StudyBuddy relational schema layer
//!
//! Declares the `users` and `profiles` tables (a one-to-one relationship
//! stored from both sides), compiles them to SQLite and PostgreSQL DDL, and
//! provides the minimal row operations needed to exercise the declared
//! constraints.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod models;
pub mod output;
