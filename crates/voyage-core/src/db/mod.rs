//! Database operations and SQLite management for plans.
//!
//! This module owns the single local table of plan records. It handles the
//! SQLite connection, schema management, and the CRUD queries that read and
//! write whole plan rows, including serializing each plan's task list to its
//! embedded JSON column.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod plan_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    ///
    /// Schema initialization is idempotent and safe to run on every start.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
