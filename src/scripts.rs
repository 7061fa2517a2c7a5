//! The SQL files the demos depend on, embedded so `setup_database` and the
//! integration tests work from any directory.

/// `employees` table plus seed rows.
pub const SCHEMA_SQL: &str = include_str!("../sql/schema.sql");

/// The four stored routines the stored-procedure demos call.
pub const ROUTINES_SQL: &str = include_str!("../sql/routines.sql");
