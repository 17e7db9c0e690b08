//! Parameter structures for voyage operations.
//!
//! These structures carry user input between interface layers (CLI today,
//! anything else tomorrow) and the core planner without framework-specific
//! derives. Interface layers wrap them with their own argument types and
//! convert via `From` impls.

use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Generic parameters for operations requiring just a plan ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the plan to operate on
    pub id: i64,
}

/// Parameters for creating a new plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlan {
    /// Title of the trip (required, non-empty)
    pub title: String,
    /// First day of the trip
    pub start_date: Date,
    /// Last day of the trip, inclusive
    pub end_date: Date,
    /// Optional local file reference for the cover photo
    pub image_url: Option<String>,
}

impl CreatePlan {
    /// Validate the plan fields before they reach the store.
    ///
    /// The store itself does not enforce these invariants; callers are
    /// expected to validate before every save, mirroring how the plan form
    /// gates its save button.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(PlannerError::validation("title", "title must not be empty"));
        }
        if self.end_date < self.start_date {
            return Err(PlannerError::validation(
                "end_date",
                "end date must not be before start date",
            ));
        }
        Ok(())
    }
}

/// Parameters for editing an existing plan's metadata.
///
/// Absent fields are left unchanged. The task list is never touched through
/// this path; tasks move only through [`TaskCreate`] and [`RemoveTask`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlan {
    /// ID of the plan to edit (required)
    pub id: i64,
    /// New title
    pub title: Option<String>,
    /// New first day of the trip
    pub start_date: Option<Date>,
    /// New last day of the trip
    pub end_date: Option<Date>,
    /// New cover photo reference
    pub image_url: Option<String>,
}

/// Parameters for adding a task to a plan's itinerary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskCreate {
    /// ID of the plan to add the task to
    pub plan_id: i64,
    /// Title of the activity (required, non-empty)
    pub title: String,
    /// Calendar date the task occurs on
    pub date: Date,
    /// Time of day the task begins
    pub start_time: Time,
    /// Time of day the task ends; must be strictly after `start_time`
    pub end_time: Time,
    /// Cost as a decimal string; blank is treated as zero
    pub cost: String,
}

/// Parameters for removing a task from a plan's itinerary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveTask {
    /// ID of the plan owning the task
    pub plan_id: i64,
    /// ID of the task to remove
    pub task_id: i64,
}
