//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, PlannerError, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply migrations for databases created before the cover photo existed.
    fn apply_migrations(&self) -> Result<()> {
        let has_image_url_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('plans') WHERE name = 'imageUrl'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_image_url_column {
            self.connection
                .execute("ALTER TABLE plans ADD COLUMN imageUrl TEXT", [])
                .map_err(|e| {
                    PlannerError::database_error("Failed to add imageUrl column to plans table", e)
                })?;
        }

        Ok(())
    }
}
