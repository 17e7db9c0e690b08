//! High-level planner API for managing plans and their itineraries.
//!
//! The [`Planner`] is the central coordinator between interface layers and
//! the database. Plan CRUD lives in [`plan_ops`]; the task write path
//! (validate, derive, sort, persist the whole plan) lives in [`task_ops`].
//! Every operation is async with respect to the caller but runs against a
//! blocking SQLite connection inside `spawn_blocking`, with at most one
//! in-flight operation expected at a time. No operation is retried; each
//! store call is attempted exactly once.

use std::path::PathBuf;

pub mod builder;
pub mod plan_ops;
pub mod task_ops;

pub use builder::PlannerBuilder;

/// Main planner interface for managing plans and tasks.
pub struct Planner {
    pub(crate) db_path: PathBuf,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
