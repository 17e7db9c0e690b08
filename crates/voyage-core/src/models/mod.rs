//! Data models for plans and tasks.
//!
//! This module contains the core domain models of the voyage itinerary
//! planner. Display implementations live in [`crate::display::models`] to
//! keep data structures and presentation logic separate.
//!
//! A [`Plan`] owns its [`Task`]s by composition: the task list is serialized
//! as a single JSON text column inside the plan row, so there is no partial
//! task update, only whole-plan rewrites.

pub mod plan;
pub mod task;


pub use plan::Plan;
pub use task::Task;
