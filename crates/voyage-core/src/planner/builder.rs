//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{PlannerError, Result},
};

/// Builder for [`Planner`] instances.
///
/// The only knob is the database location. Building resolves the path,
/// creates its parent directory, and opens the database once so schema
/// problems surface at startup instead of on the first operation.
#[derive(Debug, Clone, Default)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the database file path. `None` keeps the XDG default,
    /// `$XDG_DATA_HOME/voyage/voyage.db`.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        self.database_path = path.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::FileSystem`] when the parent directory cannot
    /// be created and [`PlannerError::Database`] when initialization fails.
    pub async fn build(self) -> Result<Planner> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PlannerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let probe_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&probe_path).map(drop))
            .await
            .map_err(|e| PlannerError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        Ok(Planner::new(db_path))
    }
}

/// Default database location per the XDG Base Directory specification.
fn default_database_path() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix("voyage")
        .place_data_file("voyage.db")
        .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
}
