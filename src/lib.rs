//! Shared plumbing for the employee database demo programs.
//!
//! Each binary under `src/bin/` is a standalone, linear demo: connect to
//! PostgreSQL, perform one operation (query, DML, or stored-routine call),
//! print the outcome, and exit. This library holds the pieces every demo
//! would otherwise copy-paste: connection setup, the [`Employee`] row type
//! with its printing helpers, and wrappers around the stored routines.
//!
//! The demos expect the schema from `sql/schema.sql` and the routines from
//! `sql/routines.sql`; run the `setup_database` binary once to load both.

pub mod client;
pub mod config;
pub mod employee;
pub mod error;
pub mod procedures;
pub mod scripts;

pub mod prelude;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use client::{connect, init_tracing};
pub use config::DemoConfig;
pub use employee::Employee;
pub use error::DemoDbError;
