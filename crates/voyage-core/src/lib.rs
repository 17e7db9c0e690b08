//! Core library for the voyage trip itinerary planner.
//!
//! This crate provides the business logic for organizing personal trips:
//! plans with a title, date range, and optional photo, each owning a
//! day-by-day itinerary of time-boxed, costed tasks. It covers the data
//! models, the SQLite persistence store (one table, tasks embedded as JSON),
//! the pure itinerary engine (sorting, validation, budget aggregation, date
//! grouping), and markdown display formatting.
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::{date, time};
//! use voyage_core::{params::{CreatePlan, TaskCreate}, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("trips.db"))
//!     .build()
//!     .await?;
//!
//! let plan = planner
//!     .create_plan(&CreatePlan {
//!         title: "Paris".to_string(),
//!         start_date: date(2024, 6, 1),
//!         end_date: date(2024, 6, 3),
//!         image_url: None,
//!     })
//!     .await?;
//!
//! let task = planner
//!     .add_task(&TaskCreate {
//!         plan_id: plan.id.unwrap(),
//!         title: "Louvre".to_string(),
//!         date: date(2024, 6, 2),
//!         start_time: time(9, 0, 0, 0),
//!         end_time: time(10, 30, 0, 0),
//!         cost: "20".to_string(),
//!     })
//!     .await?;
//!
//! assert_eq!(task.duration, "1h 30m");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod itinerary;
pub mod models;
pub mod params;
pub mod planner;

// Re-export commonly used types
pub use db::Database;
pub use display::{CreateResult, DeleteResult, Plans, UpdateResult};
pub use error::{PlannerError, Result};
pub use models::{Plan, Task};
pub use planner::{Planner, PlannerBuilder};
